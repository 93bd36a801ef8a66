use leptos::{html, prelude::*};

#[cfg(feature = "hydrate")]
use crate::motion::ViewportOnce;
#[cfg(feature = "hydrate")]
use crate::section::{SectionObserver, SectionTracker};
use crate::section::SectionId;

/// Publishes the section currently being read.
///
/// Starts on the first id and follows the viewport once hydrated. The
/// observer is released when the owning component is cleaned up.
pub fn use_active_section(ids: Vec<SectionId>) -> ReadSignal<SectionId> {
    let first = ids
        .first()
        .cloned()
        .unwrap_or_else(|| SectionId::from("home"));
    let (active, set_active) = signal(first);

    #[cfg(feature = "hydrate")]
    {
        let handle = StoredValue::new_local(None::<SectionObserver>);
        Effect::new(move |_| {
            let tracker = match SectionTracker::new(ids.clone()) {
                Ok(t) => t,
                Err(e) => {
                    log::warn!("section tracking disabled: {e}");
                    return;
                }
            };
            let observer = SectionObserver::subscribe(tracker, move |id| set_active.set(id));
            handle.set_value(observer);
        });
        on_cleanup(move || {
            handle.try_update_value(|observer| observer.take());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ids, set_active);
    }

    active
}

/// Flips to `true` the first time `amount` of the element is on screen.
pub fn use_in_view_once(target: NodeRef<html::Div>, amount: f64) -> ReadSignal<bool> {
    let (seen, set_seen) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = StoredValue::new_local(None::<ViewportOnce>);
        Effect::new(move |_| {
            if let Some(el) = target.get() {
                handle.set_value(ViewportOnce::watch(&el, amount, move || set_seen.set(true)));
            }
        });
        on_cleanup(move || {
            handle.try_update_value(|watch| watch.take());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, amount, set_seen);
    }

    seen
}

/// Smooth-scrolls the section with the given id to the top of the viewport.
pub fn scroll_to(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let Some(el) = document().get_element_by_id(id) else {
            return;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Always start a fresh load at the hero.
#[cfg(feature = "hydrate")]
pub fn reset_scroll() {
    use web_sys::ScrollRestoration;

    let window = window();
    if let Ok(history) = window.history() {
        if let Err(e) = history.set_scroll_restoration(ScrollRestoration::Manual) {
            log::debug!("scroll restoration not supported: {e:?}");
        }
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
}
