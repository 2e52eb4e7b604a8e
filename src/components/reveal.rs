//! Scroll-reveal hook shared by every section. A section starts hidden and
//! flips to visible exactly once, the first time enough of it enters the
//! viewport; it never flips back.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of a section's area that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.2;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Reveal {
    Hidden,
    Visible,
}

impl Reveal {
    pub fn class(self) -> &'static str {
        match self {
            Reveal::Hidden => "reveal-hidden",
            Reveal::Visible => "reveal-visible",
        }
    }

    fn from_flag(visible: bool) -> Self {
        if visible {
            Reveal::Visible
        } else {
            Reveal::Hidden
        }
    }
}

/// Observes the element with id `section_id` and returns its reveal state.
/// If the element does not exist no observer is installed and the state
/// stays `Hidden`; that is a no-op, not an error. The observer and its JS
/// callback are released unconditionally when the component unmounts.
#[hook]
pub fn use_reveal(section_id: &'static str, threshold: f64) -> Reveal {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let observer_handle: Rc<RefCell<Option<IntersectionObserver>>> =
                    Rc::new(RefCell::new(None));

                let element = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id(section_id));

                let callback = element.map(|element| {
                    let handle = observer_handle.clone();
                    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
                        let intersecting = entries.iter().any(|entry| {
                            entry
                                .dyn_into::<IntersectionObserverEntry>()
                                .map(|entry| entry.is_intersecting())
                                .unwrap_or(false)
                        });
                        if intersecting {
                            visible.set(true);
                            // One-way latch: stop observing after the first reveal.
                            if let Some(observer) = handle.borrow_mut().take() {
                                observer.disconnect();
                            }
                        }
                    })
                        as Box<dyn FnMut(js_sys::Array)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from(threshold));
                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        observer.observe(&element);
                        *observer_handle.borrow_mut() = Some(observer);
                    }
                    callback
                });

                move || {
                    if let Some(observer) = observer_handle.borrow_mut().take() {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    Reveal::from_flag(*visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_maps_to_fixed_classes() {
        assert_eq!(Reveal::Hidden.class(), "reveal-hidden");
        assert_eq!(Reveal::Visible.class(), "reveal-visible");
    }

    #[test]
    fn flag_conversion_is_one_to_one() {
        assert_eq!(Reveal::from_flag(false), Reveal::Hidden);
        assert_eq!(Reveal::from_flag(true), Reveal::Visible);
    }
}
