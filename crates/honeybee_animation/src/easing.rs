//! Easing curves
//!
//! Standard CSS timing functions. Named curves are cubic beziers with the
//! control points browsers use, so a duration + easing pair renders the same
//! motion as the equivalent CSS transition.

/// Timing function mapping linear progress to eased progress
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Cubic bezier with control points (x1, y1) and (x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// easeOutCubic, used by the letter reveal
    pub const OUT_CUBIC: Easing = Easing::CubicBezier(0.215, 0.61, 0.355, 1.0);

    /// Apply the curve to `t` (clamped to 0..=1)
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let s = solve_x(x1, x2, t);
    bezier(y1, y2, s)
}

/// One coordinate of a bezier with endpoints 0 and 1
fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x coordinate is `x`
fn solve_x(x1: f32, x2: f32, x: f32) -> f32 {
    // Newton first, bisection when the slope flattens out
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, s) - x;
        if err.abs() < 1e-6 {
            return s;
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = x;
    for _ in 0..32 {
        let value = bezier(x1, x2, s);
        if (value - x).abs() < 1e-6 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    s
}

/// A fixed-duration transition between two values
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::Linear,
        }
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress (0..=1) at `elapsed_ms` since the tween was created
    pub fn progress(&self, elapsed_ms: f64) -> f32 {
        let local = elapsed_ms - self.delay_ms;
        if local <= 0.0 {
            0.0
        } else if self.duration_ms <= 0.0 || local >= self.duration_ms {
            1.0
        } else {
            (local / self.duration_ms) as f32
        }
    }

    /// Value at `elapsed_ms`
    pub fn sample(&self, elapsed_ms: f64) -> f32 {
        let eased = self.easing.apply(self.progress(elapsed_ms));
        self.from + (self.to - self.from) * eased
    }

    /// Time at which the tween reaches `to`
    pub fn end_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms.max(0.0)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.end_ms()
    }
}
