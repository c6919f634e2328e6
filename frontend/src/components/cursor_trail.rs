use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::effects::trail::TrailPosition;

/// Glowing dot that follows the pointer around the page.
#[function_component(CursorTrail)]
pub fn cursor_trail() -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            let Some(trail) = node.cast::<HtmlElement>() else {
                return;
            };
            let position = TrailPosition::from_client(e.client_x(), e.client_y());
            let style = trail.style();
            let _ = style.set_property("left", &position.left());
            let _ = style.set_property("top", &position.top());
        });
    }

    html! {
        <div class="cursor-trail" ref={node}></div>
    }
}
