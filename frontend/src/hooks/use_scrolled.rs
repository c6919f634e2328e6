use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::effects::scroll::ScrollFlag;

/// True while the window is scrolled past `threshold_px`. Re-evaluated on
/// every scroll event; the listener goes away with the component.
#[hook]
pub fn use_scrolled(threshold_px: f64) -> bool {
    let scrolled = use_state(|| false);
    let flag = use_mut_ref(|| ScrollFlag::new(threshold_px));

    {
        let scrolled = scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let offset = web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .unwrap_or_default();
            let mut flag = flag.borrow_mut();
            if flag.update(offset) {
                scrolled.set(flag.is_scrolled());
            }
        });
    }

    *scrolled
}
