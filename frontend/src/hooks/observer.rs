use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// `IntersectionObserver` that owns its JS callback and disconnects when
/// dropped.
///
/// The handler gets the observed element, its visible ratio (0 when it is
/// not intersecting at all) and the observer itself, so it can unsubscribe
/// from inside the callback.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl VisibilityObserver {
    pub fn new<F>(threshold: f64, mut on_entry: F) -> Result<Self, JsValue>
    where
        F: FnMut(&Element, f64, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                on_entry(&entry.target(), ratio, &observer);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, region: &Element) {
        self.observer.observe(region);
    }

    pub fn unobserve(&self, region: &Element) {
        self.observer.unobserve(region);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
