use js_sys::Array;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type OnceCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Fires once when `amount` of an element becomes visible, then stops
/// observing. Dropping the handle stops observation early.
pub struct ViewportOnce {
    observer: IntersectionObserver,
    _callback: OnceCallback,
}

impl ViewportOnce {
    pub fn watch<F>(el: &Element, amount: f64, on_visible: F) -> Option<Self>
    where
        F: FnOnce() + 'static,
    {
        let mut on_visible = Some(on_visible);
        let callback: OnceCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|e| e.is_intersecting() && e.intersection_ratio() >= amount);
            if !visible {
                return;
            }
            observer.disconnect();
            if let Some(f) = on_visible.take() {
                f();
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(amount));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| log::warn!("intersection observer unavailable: {e:?}"))
                .ok()?;
        observer.observe(el);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportOnce {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
