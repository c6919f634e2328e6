use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card">
            <div class="feature-icon">{props.icon.clone()}</div>
            <h3>{props.title.clone()}</h3>
            <p>{props.text.clone()}</p>
        </div>
    }
}
