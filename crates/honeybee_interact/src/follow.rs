//! Pointer-follow engine
//!
//! Converts raw pointer positions into a spring-smoothed offset. The raw
//! offset only ever becomes a spring target; the scheduler's per-frame spring
//! step is the single writer of the smoothed value.

use crate::device::DeviceProfile;
use honeybee_animation::{AnimatedValue, OwnerScope, SpringConfig};
use honeybee_core::{Point, Rect, Vec2};

/// One pointer-move event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub position: Point,
    pub timestamp_ms: f64,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, timestamp_ms: f64) -> Self {
        Self {
            position: Point::new(x, y),
            timestamp_ms,
        }
    }
}

/// How the raw offset is derived from the pointer and the element
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FollowMode {
    /// Offset from the element's center, scaled by `strength`
    Magnetic { strength: f32 },
    /// Position relative to the element's top-left corner
    Spotlight,
}

impl FollowMode {
    /// Raw (unsmoothed) offset for `pointer` over `bounds`
    pub fn offset(&self, pointer: Point, bounds: Rect) -> Vec2 {
        match *self {
            FollowMode::Magnetic { strength } => bounds.offset_from_center(pointer) * strength,
            FollowMode::Spotlight => bounds.offset_from_origin(pointer),
        }
    }
}

/// A spring-smoothed 2D offset driven by pointer events
///
/// A follower built for a touch-primary device stays at the neutral offset
/// and never registers springs.
#[derive(Debug)]
pub struct PointerFollower {
    mode: FollowMode,
    enabled: bool,
    x: AnimatedValue,
    y: AnimatedValue,
}

impl PointerFollower {
    pub fn new(scope: &OwnerScope, mode: FollowMode, config: SpringConfig) -> Self {
        Self {
            mode,
            enabled: true,
            x: AnimatedValue::new(scope, 0.0, config),
            y: AnimatedValue::new(scope, 0.0, config),
        }
    }

    /// Gate the follower on the device's primary input
    pub fn with_device(mut self, device: &DeviceProfile) -> Self {
        self.enabled = device.pointer_effects_enabled();
        if !self.enabled {
            tracing::debug!(mode = ?self.mode, "pointer follow disabled on touch-primary device");
        }
        self
    }

    pub fn mode(&self) -> FollowMode {
        self.mode
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Retarget the spring from a pointer move
    ///
    /// `bounds` is `None` while the reference element is not mounted; the
    /// update is skipped and `false` returned.
    pub fn on_pointer_move(&mut self, pointer: Point, bounds: Option<Rect>) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(bounds) = bounds else {
            tracing::trace!("pointer move skipped: element not mounted");
            return false;
        };
        let offset = self.mode.offset(pointer, bounds);
        self.x.set_target(offset.x);
        self.y.set_target(offset.y);
        true
    }

    /// Relax back to the neutral offset
    pub fn on_pointer_leave(&mut self) {
        if !self.enabled {
            return;
        }
        self.x.set_target(0.0);
        self.y.set_target(0.0);
    }

    /// Current smoothed offset
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x.get(), self.y.get())
    }

    /// Where the spring is heading
    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target(), self.y.target())
    }

    pub fn is_settled(&self) -> bool {
        !self.x.is_animating() && !self.y.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use honeybee_animation::AnimationScheduler;

    fn magnetic(scheduler: &AnimationScheduler) -> (OwnerScope, PointerFollower) {
        let scope = OwnerScope::new(&scheduler.handle(), "magnetic");
        let follower = PointerFollower::new(
            &scope,
            FollowMode::Magnetic { strength: 0.3 },
            SpringConfig::magnetic(),
        );
        (scope, follower)
    }

    #[test]
    fn test_magnetic_offset_is_scaled_from_center() {
        let bounds = Rect::new(100.0, 100.0, 200.0, 50.0);
        let offset = FollowMode::Magnetic { strength: 0.3 }.offset(Point::new(250.0, 100.0), bounds);
        assert!((offset.x - 15.0).abs() < 1e-4);
        assert!((offset.y + 7.5).abs() < 1e-4);
    }

    #[test]
    fn test_spotlight_offset_is_from_top_left() {
        let bounds = Rect::new(10.0, 20.0, 300.0, 200.0);
        let offset = FollowMode::Spotlight.offset(Point::new(40.0, 70.0), bounds);
        assert_eq!(offset, Vec2::new(30.0, 50.0));
    }

    #[test]
    fn test_lags_then_settles_on_target() {
        let scheduler = AnimationScheduler::new();
        let (_scope, mut follower) = magnetic(&scheduler);
        let bounds = Some(Rect::new(0.0, 0.0, 100.0, 100.0));

        assert!(follower.on_pointer_move(Point::new(100.0, 50.0), bounds));
        assert_eq!(follower.target(), Vec2::new(15.0, 0.0));
        assert_eq!(follower.offset(), Vec2::ZERO);

        scheduler.advance(16.0);
        let first = follower.offset().x;
        assert!(first > 0.0 && first < 15.0);

        let mut last = first;
        for _ in 0..120 {
            scheduler.advance(16.0);
            let x = follower.offset().x;
            assert!(x >= last - 1e-4 && x <= 15.0 + 1e-4);
            last = x;
        }
        assert!(follower.is_settled());
        assert_eq!(follower.offset(), Vec2::new(15.0, 0.0));
    }

    #[test]
    fn test_leave_relaxes_without_snapping() {
        let scheduler = AnimationScheduler::new();
        let (_scope, mut follower) = magnetic(&scheduler);
        let bounds = Some(Rect::new(0.0, 0.0, 100.0, 100.0));

        follower.on_pointer_move(Point::new(100.0, 100.0), bounds);
        for _ in 0..60 {
            scheduler.advance(16.0);
        }

        follower.on_pointer_leave();
        assert_eq!(follower.target(), Vec2::ZERO);
        assert!(follower.offset().x > 10.0);

        scheduler.advance(16.0);
        assert!(follower.offset().x > 0.0);
        for _ in 0..120 {
            scheduler.advance(16.0);
        }
        assert_eq!(follower.offset(), Vec2::ZERO);
    }

    #[test]
    fn test_unmounted_element_skips_update() {
        let scheduler = AnimationScheduler::new();
        let (_scope, mut follower) = magnetic(&scheduler);

        assert!(!follower.on_pointer_move(Point::new(500.0, 500.0), None));
        assert_eq!(follower.target(), Vec2::ZERO);
        assert_eq!(scheduler.spring_count(), 0);
    }

    #[test]
    fn test_touch_device_never_moves() {
        let scheduler = AnimationScheduler::new();
        let (_scope, follower) = magnetic(&scheduler);
        let mut follower = follower.with_device(&DeviceProfile::from_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)",
        ));
        assert!(!follower.is_enabled());

        let bounds = Some(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(!follower.on_pointer_move(Point::new(100.0, 50.0), bounds));
        follower.on_pointer_leave();
        scheduler.advance(16.0);

        assert_eq!(follower.target(), Vec2::ZERO);
        assert_eq!(follower.offset(), Vec2::ZERO);
        assert_eq!(scheduler.spring_count(), 0);
    }

    #[test]
    fn test_bounded_under_rapid_retargeting() {
        let scheduler = AnimationScheduler::new();
        let (_scope, mut follower) = magnetic(&scheduler);
        let bounds = Some(Rect::new(0.0, 0.0, 200.0, 200.0));

        // Pointer jitters across the whole element; max raw offset is 30
        for i in 0..500 {
            let x = if i % 3 == 0 { 0.0 } else { 200.0 };
            let y = (i * 37 % 200) as f32;
            follower.on_pointer_move(Point::new(x, y), bounds);
            scheduler.advance(if i % 7 == 0 { 80.0 } else { 8.0 });
            let offset = follower.offset();
            assert!(offset.x.abs() <= 60.0 && offset.y.abs() <= 60.0);
        }
    }
}
