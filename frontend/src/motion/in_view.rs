use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InViewOptions {
    /// Fraction of the element that must be inside the viewport, 0..=1.
    pub amount: f64,
    /// Stop observing after the first time the element is in view.
    pub once: bool,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self { amount: 0.0, once: false }
    }
}

/// Whether an intersection counts as "in view". Elements taller than the
/// viewport can never be fully visible, so covering the whole viewport is
/// accepted as well.
pub fn is_in_view(intersecting: bool, ratio: f64, covered_fraction: f64, amount: f64) -> bool {
    if !intersecting {
        return false;
    }
    if amount <= 0.0 {
        return true;
    }
    ratio + 1e-3 >= amount || covered_fraction + 1e-3 >= 1.0
}

fn thresholds(amount: f64) -> Array {
    let steps = Array::new();
    for step in 0..=10 {
        steps.push(&JsValue::from_f64(f64::from(step) / 10.0));
    }
    steps.push(&JsValue::from_f64(amount.clamp(0.0, 1.0)));
    steps
}

#[hook]
pub fn use_in_view(target: NodeRef, options: InViewOptions) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(target, options)| {
                let options = *options;
                let mut handle = None;

                if let Some(element) = target.cast::<Element>() {
                    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                    continue;
                                };
                                let covered = entry
                                    .root_bounds()
                                    .filter(|root| root.height() > 0.0)
                                    .map(|root| entry.intersection_rect().height() / root.height())
                                    .unwrap_or(0.0);
                                let visible = is_in_view(
                                    entry.is_intersecting(),
                                    entry.intersection_ratio(),
                                    covered,
                                    options.amount,
                                );
                                if options.once && visible {
                                    in_view.set(true);
                                    observer.disconnect();
                                    return;
                                }
                                if !options.once {
                                    in_view.set(visible);
                                }
                            }
                        },
                    );

                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&thresholds(options.amount));
                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                        Ok(observer) => {
                            observer.observe(&element);
                            handle = Some((observer, callback));
                        }
                        Err(_) => log::warn!("IntersectionObserver unavailable, element stays hidden"),
                    }
                }

                move || {
                    if let Some((observer, _callback)) = handle {
                        observer.disconnect();
                    }
                }
            },
            (target, options),
        );
    }

    *in_view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_intersection_counts_without_an_amount() {
        assert!(is_in_view(true, 0.01, 0.01, 0.0));
        assert!(!is_in_view(false, 0.0, 0.0, 0.0));
    }

    #[test]
    fn full_amount_needs_the_whole_element() {
        assert!(!is_in_view(true, 0.8, 0.4, 1.0));
        assert!(is_in_view(true, 1.0, 0.4, 1.0));
        assert!(is_in_view(true, 0.9995, 0.4, 1.0));
    }

    #[test]
    fn tall_element_covering_the_viewport_counts() {
        assert!(is_in_view(true, 0.6, 1.0, 1.0));
    }
}
