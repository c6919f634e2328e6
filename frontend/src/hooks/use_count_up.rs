use std::rc::Rc;

use log::warn;
use web_sys::{Element, IntersectionObserver};
use yew::prelude::*;

use super::observer::VisibilityObserver;
use crate::config;
use crate::effects::count_up::CountUp;
use crate::effects::frames::BrowserFrames;
use crate::effects::runner::CountUpRunner;

/// Counts from 0 to `end` once the element behind the returned `NodeRef`
/// is at least half on screen. Attach the ref to the element to watch.
///
/// Unmounting stops both the observer and any frame still in flight.
#[hook]
pub fn use_count_up(end: u32, duration_ms: f64) -> (u32, NodeRef) {
    let count = use_state(|| 0u32);
    let node = use_node_ref();

    {
        let setter = count.setter();
        let node = node.clone();
        use_effect_with_deps(
            move |&(end, duration_ms)| {
                let runner = Rc::new(CountUpRunner::new(
                    CountUp::with_duration(end, duration_ms),
                    BrowserFrames,
                    move |value| setter.set(value),
                ));

                let observer = node.cast::<Element>().and_then(|region| {
                    let on_visible = {
                        let runner = runner.clone();
                        move |_: &Element, ratio: f64, observer: &IntersectionObserver| {
                            if runner.notify_visibility(ratio) {
                                observer.disconnect();
                            }
                        }
                    };
                    match VisibilityObserver::new(config::COUNT_UP_THRESHOLD, on_visible) {
                        Ok(observer) => {
                            observer.observe(&region);
                            Some(observer)
                        }
                        Err(err) => {
                            warn!("count-up observer unavailable: {:?}", err);
                            None
                        }
                    }
                });

                move || {
                    drop(observer);
                    runner.cancel();
                }
            },
            (end, duration_ms),
        );
    }

    (*count, node)
}
