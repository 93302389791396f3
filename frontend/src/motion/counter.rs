/// Fires once, on the first transition from not visible to visible. Lives as
/// long as the component instance that owns it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VisibilityLatch {
    was_visible: bool,
    fired: bool,
}

impl VisibilityLatch {
    pub fn observe(&mut self, visible: bool) -> bool {
        let entered = visible && !self.was_visible;
        self.was_visible = visible;
        if entered && !self.fired {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    Idle,
    Running(f64),
    Finished(f64),
}

/// Animates a displayed number from 0 to `target` once the element first
/// becomes visible.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    target: u32,
    duration_ms: f64,
    decimals: usize,
    latch: VisibilityLatch,
    started_at: Option<f64>,
}

impl Counter {
    pub fn new(target: u32, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            decimals: 0,
            latch: VisibilityLatch::default(),
            started_at: None,
        }
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn has_started(&self) -> bool {
        self.latch.has_fired()
    }

    /// Text shown before and during the animation.
    pub fn display(&self, last_frame: &str) -> String {
        if self.has_started() {
            last_frame.to_string()
        } else {
            self.format(0.0)
        }
    }

    /// Feeds a visibility change. Returns true when this starts the animation.
    pub fn on_visibility(&mut self, visible: bool, now_ms: f64) -> bool {
        if self.latch.observe(visible) {
            self.started_at = Some(now_ms);
            return true;
        }
        false
    }

    pub fn tick(&self, now_ms: f64) -> Tick {
        let Some(started_at) = self.started_at else {
            return Tick::Idle;
        };
        let target = f64::from(self.target);
        let elapsed = (now_ms - started_at).max(0.0);
        if self.duration_ms <= 0.0 || elapsed >= self.duration_ms {
            return Tick::Finished(target);
        }
        Tick::Running(target * ease_in_out(elapsed / self.duration_ms))
    }

    /// Swaps the target without replaying. A running animation keeps its clock
    /// and converges on the new target; a finished one jumps to it.
    pub fn retarget(&mut self, target: u32) {
        self.target = target;
    }

    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.decimals, value)
    }
}

/// `cubic-bezier(0.42, 0, 0.58, 1)`.
pub fn ease_in_out(t: f64) -> f64 {
    cubic_bezier(0.42, 0.0, 0.58, 1.0, t.clamp(0.0, 1.0))
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    let axis = |a: f64, b: f64, t: f64| {
        let u = 1.0 - t;
        3.0 * u * u * t * a + 3.0 * u * t * t * b + t * t * t
    };

    // x(t) is monotonic for control points in [0, 1]; bisect for t.
    let (mut lo, mut hi) = (0.0, 1.0);
    let mut t = x;
    for _ in 0..40 {
        let current = axis(x1, x2, t);
        if (current - x).abs() < 1e-7 {
            break;
        }
        if current < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    axis(y1, y2, t)
}
