use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::feature_card::FeatureCard;
use crate::components::footer::Footer;
use crate::components::stat_item::StatItem;
use crate::config;
use crate::content::{self, SiteContent};
use crate::download;
use crate::hooks::use_reveal_on_scroll::use_reveal_on_scroll;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: content::HeroContent,
    pub on_download: Callback<()>,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let onclick = props.on_download.reform(|_: MouseEvent| ());

    html! {
        <section id={props.content.id.clone()} class="hero-section">
            <div class="hero-overlay"></div>
            <div class="container hero-content">
                <h1 class="main-title">
                    { for props.content.title_letters().into_iter().map(|letter| html! { <span>{letter}</span> }) }
                </h1>
                <p class="subtitle">{props.content.subtitle.clone()}</p>
                <button {onclick} class="cta-button">
                    {props.content.cta.clone()}
                </button>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub content: content::TextSection,
}

#[function_component(AboutSection)]
pub fn about_section(props: &AboutProps) -> Html {
    html! {
        <section id={props.content.id.clone()} class="content-section fade-in-section">
            <div class="container">
                <h2 class="section-title">{props.content.title.clone()}</h2>
                <p class="section-text">{props.content.text.clone()}</p>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub content: content::FeatureSection,
}

#[function_component(FeaturesSection)]
pub fn features_section(props: &FeaturesProps) -> Html {
    html! {
        <section id={props.content.id.clone()} class="content-section features-bg fade-in-section">
            <div class="container">
                <h2 class="section-title">{props.content.title.clone()}</h2>
                <div class="features-grid">
                    { for props.content.cards.iter().map(|card| html! {
                        <FeatureCard
                            icon={card.icon.clone()}
                            title={card.title.clone()}
                            text={card.text.clone()}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub content: content::StatsSection,
}

#[function_component(StatsSection)]
pub fn stats_section(props: &StatsProps) -> Html {
    html! {
        <section id={props.content.id.clone()} class="content-section fade-in-section">
            <div class="container">
                <h2 class="section-title">{props.content.title.clone()}</h2>
                <div class="stats-grid">
                    { for props.content.items.iter().map(|item| html! {
                        <StatItem value={item.value} label={item.label.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct JoinProps {
    pub content: content::JoinSection,
    pub on_download: Callback<()>,
}

#[function_component(JoinSection)]
pub fn join_section(props: &JoinProps) -> Html {
    let onclick = props.on_download.reform(|_: MouseEvent| ());

    html! {
        <section id={props.content.id.clone()} class="content-section fade-in-section">
            <div class="container text-center">
                <h2 class="section-title">{props.content.title.clone()}</h2>
                <p class="section-text">{props.content.text.clone()}</p>
                <button {onclick} class="cta-button large">
                    {props.content.cta.clone()}
                </button>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    use_reveal_on_scroll(config::REVEAL_SELECTOR);

    let Some(content) = content else {
        return html! {};
    };

    let on_download = {
        let notice = content.download_notice.clone();
        Callback::from(move |_: ()| download::start_download(&notice))
    };

    html! {
        <>
            <main>
                <HeroSection content={content.hero.clone()} on_download={on_download.clone()} />
                <AboutSection content={content.about.clone()} />
                <FeaturesSection content={content.features.clone()} />
                <StatsSection content={content.stats.clone()} />
                <JoinSection content={content.join.clone()} on_download={on_download} />
            </main>
            <Footer content={content.footer.clone()} />
        </>
    }
}
