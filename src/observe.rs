use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::state::reveal;

/// What happens to an element on its first intersection.
#[derive(Clone, Copy, PartialEq)]
pub enum RevealMode {
    /// Reveal immediately.
    Single,
    /// Reveal after 50ms times the entry's index within its callback batch.
    Staggered,
}

/// A live reveal observer over one selector. Each observed element reveals at
/// most once: it is unobserved as soon as it intersects. Pages disconnect the
/// handle from their effect cleanup when the route unmounts.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    /// Observes every element matching `selector`. When intersection
    /// detection is unavailable all matches are made visible immediately and
    /// no observer is returned; the same applies when nothing matches.
    pub fn install(document: &Document, selector: &str, mode: RevealMode) -> Option<RevealObserver> {
        let targets = query_all(document, selector);
        if targets.is_empty() {
            return None;
        }

        if !intersection_observer_supported() {
            for target in &targets {
                let _ = target.class_list().add_1(reveal::VISIBLE_CLASS);
            }
            return None;
        }

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for (index, entry) in entries.iter().enumerate() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    match mode {
                        RevealMode::Single => {
                            let _ = target.class_list().add_1(reveal::VISIBLE_CLASS);
                        }
                        RevealMode::Staggered => {
                            let delay = reveal::stagger_delay_ms(index as u32);
                            Timeout::new(delay, move || {
                                let _ = target.class_list().add_1(reveal::VISIBLE_CLASS);
                            })
                            .forget();
                        }
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let (threshold, root_margin) = match mode {
            RevealMode::Single => (reveal::REVEAL_THRESHOLD, reveal::REVEAL_ROOT_MARGIN),
            RevealMode::Staggered => (reveal::GRID_THRESHOLD, reveal::GRID_ROOT_MARGIN),
        };
        let mut options = IntersectionObserverInit::new();
        options.threshold(&JsValue::from_f64(threshold));
        options.root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        for target in &targets {
            observer.observe(target);
        }

        Some(RevealObserver {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

fn intersection_observer_supported() -> bool {
    match web_sys::window() {
        Some(window) => {
            let window: &JsValue = window.as_ref();
            js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        }
        None => false,
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut found = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.get(i) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    found.push(element);
                }
            }
        }
    }
    found
}
