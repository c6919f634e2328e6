use chrono::Datelike;
use yew::prelude::*;

use crate::content::FooterContent;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub content: FooterContent,
}

pub fn copyright_line(year: i32, rights: &str) -> String {
    format!("© {} {}", year, rights)
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="container">
                <p>{copyright_line(year, &props.content.rights)}</p>
                <p>{props.content.disclaimer.clone()}</p>
            </div>
        </footer>
    }
}
