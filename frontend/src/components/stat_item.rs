use yew::prelude::*;

use crate::config;
use crate::hooks::use_count_up::use_count_up;

#[derive(Properties, PartialEq)]
pub struct StatItemProps {
    pub value: u32,
    pub label: String,
}

#[function_component(StatItem)]
pub fn stat_item(props: &StatItemProps) -> Html {
    let (count, node) = use_count_up(props.value, config::COUNT_UP_DURATION_MS);

    html! {
        <div class="stat-item" ref={node}>
            <span class="stat-number">{format!("{}+", count)}</span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}
