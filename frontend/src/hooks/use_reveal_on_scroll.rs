use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver};
use yew::prelude::*;

use super::observer::VisibilityObserver;
use crate::config;
use crate::effects::reveal::RevealTracker;

fn collect_regions(selector: &str) -> Vec<Element> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Adds `visible` to every element matching `selector` the first time it
/// scrolls into view. One observer watches all of them, and revealed
/// elements stay observed until unmount.
#[hook]
pub fn use_reveal_on_scroll(selector: &'static str) {
    use_effect_with_deps(
        move |&selector| {
            let regions = collect_regions(selector);
            debug!("watching {} sections for reveal", regions.len());

            let mut tracker = RevealTracker::new(config::REVEAL_THRESHOLD);
            for _ in &regions {
                tracker.watch();
            }

            let observer = {
                let regions = regions.clone();
                VisibilityObserver::new(
                    config::REVEAL_THRESHOLD,
                    move |target: &Element, ratio: f64, _: &IntersectionObserver| {
                        let Some(index) = regions.iter().position(|region| region == target) else {
                            return;
                        };
                        if tracker.notify(index, ratio) {
                            let _ = target.class_list().add_1("visible");
                        }
                    },
                )
            };

            let observer = match observer {
                Ok(observer) => {
                    for region in &regions {
                        observer.observe(region);
                    }
                    Some(observer)
                }
                Err(err) => {
                    warn!("reveal observer unavailable: {:?}", err);
                    None
                }
            };

            move || {
                if let Some(observer) = observer {
                    for region in &regions {
                        observer.unobserve(region);
                    }
                }
            }
        },
        selector,
    );
}
