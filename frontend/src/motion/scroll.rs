use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Bounding box of a tracked region, measured against the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionMetrics {
    pub top: f64,
    pub height: f64,
}

/// How far the region has been scrolled through: 0 while its top is at or
/// below the top of the viewport, 1 once its bottom has reached the bottom
/// of the viewport.
pub fn progress_for(region: Option<RegionMetrics>, viewport_height: f64) -> f64 {
    let Some(region) = region else {
        return 0.0;
    };
    if !region.top.is_finite() || !region.height.is_finite() || !viewport_height.is_finite() {
        return 0.0;
    }

    let span = region.height - viewport_height;
    if span <= 0.0 {
        // Nothing to scroll through, so the region is either ahead or past.
        return if region.top <= 0.0 { 1.0 } else { 0.0 };
    }
    (-region.top / span).clamp(0.0, 1.0)
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScrollTracker {
    progress: f64,
}

impl ScrollTracker {
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Recomputes from the latest measurement. Returns whether the value moved.
    pub fn update(&mut self, region: Option<RegionMetrics>, viewport_height: f64) -> bool {
        let next = progress_for(region, viewport_height);
        if next == self.progress {
            return false;
        }
        self.progress = next;
        true
    }
}

fn measure(target: &NodeRef) -> Option<RegionMetrics> {
    let rect = target.cast::<Element>()?.get_bounding_client_rect();
    Some(RegionMetrics {
        top: rect.top(),
        height: rect.height(),
    })
}

fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Scroll progress through the element behind `target`, refreshed on every
/// window scroll and resize.
#[hook]
pub fn use_scroll_progress(target: NodeRef) -> f64 {
    let tracker = use_mut_ref(ScrollTracker::default);
    let progress = use_state(|| 0.0);

    let refresh = {
        let tracker = tracker.clone();
        let progress = progress.clone();
        Callback::from(move |_: ()| {
            let mut tracker = tracker.borrow_mut();
            if tracker.update(measure(&target), viewport_height()) {
                progress.set(tracker.progress());
            }
        })
    };

    {
        let refresh = refresh.clone();
        use_event_with_window("scroll", move |_: Event| refresh.emit(()));
    }
    {
        let refresh = refresh.clone();
        use_event_with_window("resize", move |_: Event| refresh.emit(()));
    }

    // Initial measurement once the node is mounted
    use_effect_with_deps(
        move |_| {
            refresh.emit(());
            || ()
        },
        (),
    );

    *progress
}
