use js_sys::Array;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{SectionId, SectionObservation, SectionTracker};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A live viewport subscription for a set of sections.
///
/// Dropping the handle (or calling [`SectionObserver::disconnect`]) stops
/// observation and releases the callback.
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl SectionObserver {
    /// Observes every configured section that has a rendered element and calls
    /// `on_change` whenever the active section moves.
    ///
    /// Returns `None` when none of the sections are rendered.
    pub fn subscribe<F>(mut tracker: SectionTracker, mut on_change: F) -> Option<Self>
    where
        F: FnMut(SectionId) + 'static,
    {
        let document = web_sys::window()?.document()?;
        let registered = tracker.register(|id| document.get_element_by_id(id.as_str()).is_some());
        if registered.is_empty() {
            return None;
        }

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&tracker.options().root_margin);
        let thresholds = tracker
            .options()
            .thresholds
            .iter()
            .map(|t| JsValue::from_f64(*t))
            .collect::<Array>();
        init.set_threshold(&thresholds);

        let callback: ObserverCallback = Closure::new(move |entries: Array, _: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|e| SectionObservation {
                    id: SectionId::new(e.target().id()),
                    is_intersecting: e.is_intersecting(),
                    ratio: e.intersection_ratio(),
                })
                .collect::<Vec<_>>();
            if let Some(active) = tracker.observe(&batch) {
                on_change(active.clone());
            }
        });

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| log::warn!("intersection observer unavailable: {e:?}"))
                .ok()?;
        for id in &registered {
            if let Some(el) = document.get_element_by_id(id.as_str()) {
                observer.observe(&el);
            }
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(self) {
        drop(self);
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
