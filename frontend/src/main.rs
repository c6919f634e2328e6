use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info, warn};
use web_sys::MouseEvent;

mod config;
mod content;
mod download;
mod styles;
mod effects {
    pub mod count_up;
    pub mod frames;
    pub mod reveal;
    pub mod runner;
    pub mod scroll;
    pub mod trail;
}
mod hooks {
    pub mod observer;
    pub mod use_count_up;
    pub mod use_reveal_on_scroll;
    pub mod use_scrolled;
}
mod components {
    pub mod cursor_trail;
    pub mod feature_card;
    pub mod footer;
    pub mod stat_item;
}
mod pages {
    pub mod landing;
}

use components::cursor_trail::CursorTrail;
use content::{NavLink, SiteContent};
use hooks::use_scrolled::use_scrolled;
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: String,
    pub logo_href: String,
    pub links: Vec<NavLink>,
    pub menu_label: String,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { brand, logo_href, links, menu_label } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled(config::SCROLL_THRESHOLD_PX);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    // Links only close the menu; the anchor still scrolls to its section.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class={classes!("header", is_scrolled.then(|| "scrolled"))}>
            <nav class="container">
                <a href={logo_href.clone()} class="logo">{brand.clone()}</a>
                <div class={classes!("nav-links-wrapper", (*menu_open).then(|| "active"))}>
                    <ul class="nav-links">
                        { for links.iter().map(|link| html! {
                            <li>
                                <a href={link.href()} onclick={close_menu.clone()}>
                                    {link.label.clone()}
                                </a>
                            </li>
                        }) }
                    </ul>
                </div>
                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                    aria-label={menu_label.clone()}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </header>
    }
}


#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let content = props.content.clone();

    html! {
        <ContextProvider<Rc<SiteContent>> context={content.clone()}>
            <BrowserRouter>
                <Header
                    brand={content.brand.clone()}
                    logo_href={format!("#{}", content.hero.id)}
                    links={content.nav.clone()}
                    menu_label={content.menu_label.clone()}
                />
                <Switch<Route> render={switch} />
                <CursorTrail />
            </BrowserRouter>
        </ContextProvider<Rc<SiteContent>>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");

    if let Err(err) = styles::inject() {
        warn!("Stylesheet not injected: {:?}", err);
    }

    let content = match SiteContent::embedded() {
        Ok(content) => content,
        Err(err) => {
            error!("Embedded site content is invalid: {}", err);
            return;
        }
    };

    yew::Renderer::<App>::with_props(AppProps {
        content: Rc::new(content),
    })
    .render();
}
