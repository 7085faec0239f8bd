//! Animation scheduler
//!
//! A single-threaded arena of everything that needs to run over time:
//! - springs, stepped every frame
//! - per-frame callbacks, run after springs are stepped
//! - timers (one-shot timeouts and fixed-period intervals)
//!
//! Every registration belongs to an owner. Owners stand in for UI components:
//! releasing an owner cancels exactly the registrations it created, and
//! [`OwnerScope`] does that automatically when dropped, so tearing down a
//! component can never leak its timers or frame callbacks.
//!
//! Time only moves when the host calls [`AnimationScheduler::tick`] (wall
//! clock) or [`AnimationScheduler::advance`] (explicit delta). Timers fire at
//! their due time inside an advance, in due order, so a 30ms interval fires
//! exactly five times across a 150ms advance regardless of frame cadence.

use crate::spring::{Spring, SpringConfig};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Instant;

new_key_type! {
    /// A UI element that owns registrations
    pub struct OwnerId;
    /// Handle to a registered spring animation
    pub struct SpringId;
    /// Handle to a per-frame callback
    pub struct FrameId;
    /// Handle to a timeout or interval
    pub struct TimerId;
}

/// Timing information passed to frame callbacks
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInfo {
    /// Scheduler clock in milliseconds
    pub now_ms: f64,
    /// Time since the previous frame in milliseconds
    pub dt_ms: f64,
}

/// Whether a frame callback wants to run again next frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Done,
}

/// Whether an interval keeps firing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerControl {
    Continue,
    Stop,
}

/// Per-frame callback type
pub type FrameCallback = Box<dyn FnMut(FrameInfo) -> FrameControl>;

/// Timer callback type; receives the scheduler time the timer fired at
pub type TimerCallback = Box<dyn FnMut(f64) -> TimerControl>;

/// Shortest interval period; keeps a zero period from spinning forever
const MIN_PERIOD_MS: f64 = 1.0;

struct OwnerEntry {
    label: String,
}

struct SpringEntry {
    owner: OwnerId,
    spring: Spring,
}

struct FrameEntry {
    owner: OwnerId,
    /// Taken out while the callback runs
    callback: Option<FrameCallback>,
}

struct TimerEntry {
    owner: OwnerId,
    due_ms: f64,
    period_ms: Option<f64>,
    /// Tie-breaker for timers due at the same instant
    seq: u64,
    callback: Option<TimerCallback>,
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    owners: SlotMap<OwnerId, OwnerEntry>,
    springs: SlotMap<SpringId, SpringEntry>,
    frames: SlotMap<FrameId, FrameEntry>,
    timers: SlotMap<TimerId, TimerEntry>,
    now_ms: f64,
    next_seq: u64,
    last_frame: Instant,
}

impl SchedulerInner {
    fn next_due_timer(&self, until_ms: f64) -> Option<TimerId> {
        self.timers
            .iter()
            .filter(|(_, t)| t.due_ms <= until_ms && t.callback.is_some())
            .min_by(|(_, a), (_, b)| {
                a.due_ms
                    .total_cmp(&b.due_ms)
                    .then_with(|| a.seq.cmp(&b.seq))
            })
            .map(|(id, _)| id)
    }

    fn has_active(&self) -> bool {
        self.springs.values().any(|s| !s.spring.is_settled())
            || !self.frames.is_empty()
            || !self.timers.is_empty()
    }

    fn registrations_of(&self, owner: OwnerId) -> usize {
        self.springs.values().filter(|s| s.owner == owner).count()
            + self.frames.values().filter(|f| f.owner == owner).count()
            + self.timers.values().filter(|t| t.owner == owner).count()
    }

    fn release(&mut self, owner: OwnerId) -> usize {
        let Some(entry) = self.owners.remove(owner) else {
            return 0;
        };

        let before = self.springs.len() + self.frames.len() + self.timers.len();
        self.springs.retain(|_, s| s.owner != owner);
        self.frames.retain(|_, f| f.owner != owner);
        self.timers.retain(|_, t| t.owner != owner);
        let released = before - (self.springs.len() + self.frames.len() + self.timers.len());

        tracing::debug!(owner = %entry.label, released, "owner released");
        released
    }
}

/// The animation scheduler that ticks all registered work
///
/// Held by the host (the gallery, the CLI preview) and shared with components
/// through [`SchedulerHandle`].
pub struct AnimationScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SchedulerInner {
                owners: SlotMap::with_key(),
                springs: SlotMap::with_key(),
                frames: SlotMap::with_key(),
                timers: SlotMap::with_key(),
                now_ms: 0.0,
                next_seq: 0,
                last_frame: Instant::now(),
            })),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Scheduler clock in milliseconds
    pub fn now_ms(&self) -> f64 {
        self.inner.borrow().now_ms
    }

    /// Advance by the wall-clock time since the previous tick
    ///
    /// Returns true if anything still needs another tick.
    pub fn tick(&self) -> bool {
        let dt_ms = {
            let mut inner = self.inner.borrow_mut();
            let now = Instant::now();
            let dt = (now - inner.last_frame).as_secs_f64() * 1000.0;
            inner.last_frame = now;
            dt
        };
        self.advance(dt_ms)
    }

    /// Advance the clock by `dt_ms`, firing due timers, stepping springs and
    /// running frame callbacks
    ///
    /// Returns true if anything still needs another tick.
    pub fn advance(&self, dt_ms: f64) -> bool {
        let dt_ms = dt_ms.max(0.0);
        let target_ms = self.inner.borrow().now_ms + dt_ms;

        self.fire_timers(target_ms);

        {
            let mut inner = self.inner.borrow_mut();
            inner.now_ms = target_ms;
            let dt = (dt_ms / 1000.0) as f32;
            for entry in inner.springs.values_mut() {
                entry.spring.step(dt);
            }
        }

        self.run_frames(FrameInfo {
            now_ms: target_ms,
            dt_ms,
        });

        self.inner.borrow().has_active()
    }

    fn fire_timers(&self, target_ms: f64) {
        loop {
            let (id, due_ms, mut callback) = {
                let mut inner = self.inner.borrow_mut();
                let Some(id) = inner.next_due_timer(target_ms) else {
                    break;
                };
                let due_ms = inner.timers[id].due_ms;
                inner.now_ms = inner.now_ms.max(due_ms);
                let Some(callback) = inner.timers[id].callback.take() else {
                    break;
                };
                (id, due_ms, callback)
            };

            // The borrow is released so the callback can use the scheduler
            let control = callback(due_ms);

            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            let Some(timer) = inner.timers.get_mut(id) else {
                // Cancelled from inside its own callback
                continue;
            };
            match (timer.period_ms, control) {
                (Some(period), TimerControl::Continue) => {
                    timer.due_ms += period;
                    timer.seq = inner.next_seq;
                    timer.callback = Some(callback);
                    inner.next_seq += 1;
                }
                _ => {
                    inner.timers.remove(id);
                }
            }
        }
    }

    fn run_frames(&self, info: FrameInfo) {
        let ids: SmallVec<[FrameId; 16]> = self.inner.borrow().frames.keys().collect();

        for id in ids {
            let callback = self
                .inner
                .borrow_mut()
                .frames
                .get_mut(id)
                .and_then(|f| f.callback.take());
            let Some(mut callback) = callback else {
                continue;
            };

            let control = callback(info);

            let mut inner = self.inner.borrow_mut();
            match control {
                FrameControl::Continue => {
                    if let Some(frame) = inner.frames.get_mut(id) {
                        frame.callback = Some(callback);
                    }
                }
                FrameControl::Done => {
                    inner.frames.remove(id);
                }
            }
        }
    }

    /// Check if anything still needs ticking
    pub fn has_active_animations(&self) -> bool {
        self.inner.borrow().has_active()
    }

    pub fn owner_count(&self) -> usize {
        self.inner.borrow().owners.len()
    }

    pub fn spring_count(&self) -> usize {
        self.inner.borrow().springs.len()
    }

    pub fn frame_count(&self) -> usize {
        self.inner.borrow().frames.len()
    }

    pub fn timer_count(&self) -> usize {
        self.inner.borrow().timers.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AnimationScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("AnimationScheduler")
            .field("now_ms", &inner.now_ms)
            .field("owners", &inner.owners.len())
            .field("springs", &inner.springs.len())
            .field("frames", &inner.frames.len())
            .field("timers", &inner.timers.len())
            .finish()
    }
}

/// A weak handle to the animation scheduler
///
/// This is passed to components that need to register work. It won't keep
/// the scheduler alive; once the scheduler is dropped every operation no-ops.
#[derive(Clone, Debug)]
pub struct SchedulerHandle {
    inner: Weak<RefCell<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Scheduler clock in milliseconds (0 once the scheduler is gone)
    pub fn now_ms(&self) -> f64 {
        self.inner
            .upgrade()
            .map(|inner| inner.borrow().now_ms)
            .unwrap_or(0.0)
    }

    // =========================================================================
    // Owners
    // =========================================================================

    pub fn create_owner(&self, label: impl Into<String>) -> Option<OwnerId> {
        let inner = self.inner.upgrade()?;
        let label = label.into();
        tracing::trace!(owner = %label, "owner created");
        let id = inner.borrow_mut().owners.insert(OwnerEntry { label });
        Some(id)
    }

    /// Cancel every registration `owner` created and forget the owner
    ///
    /// Returns the number of registrations cancelled.
    pub fn release_owner(&self, owner: OwnerId) -> usize {
        self.inner
            .upgrade()
            .map(|inner| inner.borrow_mut().release(owner))
            .unwrap_or(0)
    }

    /// Number of live registrations belonging to `owner`
    pub fn registration_count(&self, owner: OwnerId) -> usize {
        self.inner
            .upgrade()
            .map(|inner| inner.borrow().registrations_of(owner))
            .unwrap_or(0)
    }

    fn owner_exists(inner: &SchedulerInner, owner: OwnerId) -> bool {
        if inner.owners.contains_key(owner) {
            true
        } else {
            tracing::debug!("registration for released owner ignored");
            false
        }
    }

    // =========================================================================
    // Spring Operations
    // =========================================================================

    /// Register a spring and return its ID
    pub fn register_spring(&self, owner: OwnerId, spring: Spring) -> Option<SpringId> {
        let inner = self.inner.upgrade()?;
        let mut guard = inner.borrow_mut();
        if !Self::owner_exists(&guard, owner) {
            return None;
        }
        Some(guard.springs.insert(SpringEntry { owner, spring }))
    }

    /// Update a spring's target
    pub fn set_spring_target(&self, id: SpringId, target: f32) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(entry) = inner.borrow_mut().springs.get_mut(id) {
                entry.spring.set_target(target);
            }
        }
    }

    /// Get current spring value
    pub fn spring_value(&self, id: SpringId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.borrow().springs.get(id).map(|e| e.spring.value()))
    }

    /// Check if a spring has settled
    ///
    /// A spring that no longer exists counts as settled.
    pub fn is_spring_settled(&self, id: SpringId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| inner.borrow().springs.get(id).map(|e| e.spring.is_settled()))
            .unwrap_or(true)
    }

    /// Jump a spring to `value` and stop it
    pub fn snap_spring(&self, id: SpringId, value: f32) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(entry) = inner.borrow_mut().springs.get_mut(id) {
                entry.spring.snap_to(value);
            }
        }
    }

    pub fn remove_spring(&self, id: SpringId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().springs.remove(id);
        }
    }

    // =========================================================================
    // Frame Callbacks
    // =========================================================================

    /// Run `callback` every frame until it returns [`FrameControl::Done`] or
    /// its owner is released
    pub fn request_frame<F>(&self, owner: OwnerId, callback: F) -> Option<FrameId>
    where
        F: FnMut(FrameInfo) -> FrameControl + 'static,
    {
        let inner = self.inner.upgrade()?;
        let mut guard = inner.borrow_mut();
        if !Self::owner_exists(&guard, owner) {
            return None;
        }
        Some(guard.frames.insert(FrameEntry {
            owner,
            callback: Some(Box::new(callback)),
        }))
    }

    pub fn cancel_frame(&self, id: FrameId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().frames.remove(id);
        }
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Run `callback` once, `delay_ms` from now
    pub fn set_timeout<F>(&self, owner: OwnerId, delay_ms: f64, callback: F) -> Option<TimerId>
    where
        F: FnOnce(f64) + 'static,
    {
        let mut callback = Some(callback);
        self.insert_timer(
            owner,
            delay_ms.max(0.0),
            None,
            Box::new(move |now| {
                if let Some(callback) = callback.take() {
                    callback(now);
                }
                TimerControl::Stop
            }),
        )
    }

    /// Run `callback` every `period_ms` until it returns [`TimerControl::Stop`]
    /// or its owner is released
    pub fn set_interval<F>(&self, owner: OwnerId, period_ms: f64, callback: F) -> Option<TimerId>
    where
        F: FnMut(f64) -> TimerControl + 'static,
    {
        let period = period_ms.max(MIN_PERIOD_MS);
        self.insert_timer(owner, period, Some(period), Box::new(callback))
    }

    fn insert_timer(
        &self,
        owner: OwnerId,
        delay_ms: f64,
        period_ms: Option<f64>,
        callback: TimerCallback,
    ) -> Option<TimerId> {
        let inner = self.inner.upgrade()?;
        let mut guard = inner.borrow_mut();
        if !Self::owner_exists(&guard, owner) {
            return None;
        }
        let seq = guard.next_seq;
        guard.next_seq += 1;
        let due_ms = guard.now_ms + delay_ms;
        Some(guard.timers.insert(TimerEntry {
            owner,
            due_ms,
            period_ms,
            seq,
            callback: Some(callback),
        }))
    }

    pub fn cancel_timer(&self, id: TimerId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().timers.remove(id);
        }
    }

    pub fn is_timer_pending(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.borrow().timers.contains_key(id))
            .unwrap_or(false)
    }
}

// ============================================================================
// Owner Scope
// ============================================================================

/// The lifetime of one UI element in the scheduler
///
/// Everything registered through a scope is cancelled when the scope is
/// dropped (or [`OwnerScope::release`] is called).
#[derive(Debug)]
pub struct OwnerScope {
    handle: SchedulerHandle,
    owner: Option<OwnerId>,
}

impl OwnerScope {
    pub fn new(handle: &SchedulerHandle, label: impl Into<String>) -> Self {
        Self {
            owner: handle.create_owner(label),
            handle: handle.clone(),
        }
    }

    pub fn handle(&self) -> &SchedulerHandle {
        &self.handle
    }

    /// The owner id, or `None` when the scheduler was already gone at creation
    /// or the scope has been released
    pub fn owner(&self) -> Option<OwnerId> {
        self.owner
    }

    pub fn is_active(&self) -> bool {
        self.owner.is_some() && self.handle.is_alive()
    }

    pub fn registration_count(&self) -> usize {
        self.owner
            .map(|owner| self.handle.registration_count(owner))
            .unwrap_or(0)
    }

    pub fn request_frame<F>(&self, callback: F) -> Option<FrameId>
    where
        F: FnMut(FrameInfo) -> FrameControl + 'static,
    {
        self.handle.request_frame(self.owner?, callback)
    }

    pub fn set_timeout<F>(&self, delay_ms: f64, callback: F) -> Option<TimerId>
    where
        F: FnOnce(f64) + 'static,
    {
        self.handle.set_timeout(self.owner?, delay_ms, callback)
    }

    pub fn set_interval<F>(&self, period_ms: f64, callback: F) -> Option<TimerId>
    where
        F: FnMut(f64) -> TimerControl + 'static,
    {
        self.handle.set_interval(self.owner?, period_ms, callback)
    }

    /// Cancel everything this scope registered
    pub fn release(&mut self) -> usize {
        match self.owner.take() {
            Some(owner) => self.handle.release_owner(owner),
            None => 0,
        }
    }
}

impl Drop for OwnerScope {
    fn drop(&mut self) {
        self.release();
    }
}

// ============================================================================
// Animated Value (Spring-based)
// ============================================================================

/// A spring-animated value owned by a scope
///
/// The spring is registered lazily on the first target change and removed
/// when the value is dropped or its owner is released.
///
/// ```
/// use honeybee_animation::{AnimatedValue, AnimationScheduler, OwnerScope, SpringConfig};
///
/// let scheduler = AnimationScheduler::new();
/// let scope = OwnerScope::new(&scheduler.handle(), "card");
/// let mut lift = AnimatedValue::new(&scope, 0.0, SpringConfig::lift());
///
/// lift.set_target(-4.0);
/// scheduler.advance(16.0);
/// assert!(lift.get() < 0.0);
/// ```
#[derive(Debug)]
pub struct AnimatedValue {
    handle: SchedulerHandle,
    owner: Option<OwnerId>,
    spring_id: Option<SpringId>,
    config: SpringConfig,
    template: Spring,
    current: f32,
    target: f32,
}

impl AnimatedValue {
    pub fn new(scope: &OwnerScope, initial: f32, config: SpringConfig) -> Self {
        Self::from_spring(scope, Spring::new(config, initial))
    }

    /// Use a preconfigured spring (e.g. one with a custom rest threshold)
    pub fn from_spring(scope: &OwnerScope, spring: Spring) -> Self {
        Self {
            handle: scope.handle().clone(),
            owner: scope.owner(),
            spring_id: None,
            config: spring.config(),
            template: spring,
            current: spring.value(),
            target: spring.target(),
        }
    }

    /// Set the target value; starts animating if it differs from the current value
    pub fn set_target(&mut self, target: f32) {
        self.target = target;

        if let Some(id) = self.spring_id {
            self.handle.set_spring_target(id, target);
            return;
        }

        if (target - self.current).abs() > 0.001 {
            let Some(owner) = self.owner else {
                self.current = target;
                return;
            };
            let mut spring = self.template;
            spring.snap_to(self.current);
            match self.handle.register_spring(owner, spring) {
                Some(id) => {
                    self.spring_id = Some(id);
                    self.handle.set_spring_target(id, target);
                }
                // No scheduler to animate with: jump
                None => self.current = target,
            }
        }
    }

    /// Current animated value
    ///
    /// Falls back to the target once the spring is gone (owner released or
    /// scheduler dropped).
    pub fn get(&self) -> f32 {
        match self.spring_id {
            Some(id) => self.handle.spring_value(id).unwrap_or(self.target),
            None => self.current,
        }
    }

    /// Set value immediately without animation
    pub fn set_immediate(&mut self, value: f32) {
        match self.spring_id {
            Some(id) => self.handle.snap_spring(id, value),
            None => self.current = value,
        }
        self.current = value;
        self.target = value;
    }

    /// True only while the spring is moving toward its target
    pub fn is_animating(&self) -> bool {
        self.spring_id
            .map(|id| !self.handle.is_spring_settled(id))
            .unwrap_or(false)
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }
}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        if let Some(id) = self.spring_id {
            self.handle.remove_spring(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_spring_moves_on_advance() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let owner = handle.create_owner("test").unwrap();

        let id = handle
            .register_spring(owner, Spring::new(SpringConfig::cursor(), 0.0))
            .unwrap();
        handle.set_spring_target(id, 100.0);

        assert!(scheduler.advance(16.0));
        let value = handle.spring_value(id).unwrap();
        assert!(value > 0.0 && value < 100.0);

        for _ in 0..200 {
            scheduler.advance(16.0);
        }
        assert!(handle.is_spring_settled(id));
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_interval_fires_at_due_times() {
        let scheduler = AnimationScheduler::new();
        let scope = OwnerScope::new(&scheduler.handle(), "scramble");
        let fired = Rc::new(RefCell::new(Vec::new()));

        let log = fired.clone();
        scope.set_interval(30.0, move |now| {
            log.borrow_mut().push(now);
            TimerControl::Continue
        });

        // One long frame covers five periods
        scheduler.advance(150.0);
        assert_eq!(*fired.borrow(), vec![30.0, 60.0, 90.0, 120.0, 150.0]);

        scheduler.advance(29.0);
        assert_eq!(fired.borrow().len(), 5);
        scheduler.advance(1.0);
        assert_eq!(fired.borrow().len(), 6);
    }

    #[test]
    fn test_interval_stops_itself() {
        let scheduler = AnimationScheduler::new();
        let scope = OwnerScope::new(&scheduler.handle(), "counter");
        let count = Rc::new(Cell::new(0));

        let c = count.clone();
        scope.set_interval(10.0, move |_| {
            c.set(c.get() + 1);
            if c.get() == 3 {
                TimerControl::Stop
            } else {
                TimerControl::Continue
            }
        });

        scheduler.advance(100.0);
        assert_eq!(count.get(), 3);
        assert_eq!(scheduler.timer_count(), 0);
    }

    #[test]
    fn test_timeout_runs_once() {
        let scheduler = AnimationScheduler::new();
        let scope = OwnerScope::new(&scheduler.handle(), "delay");
        let fired = Rc::new(Cell::new(None));

        let f = fired.clone();
        let id = scope.set_timeout(250.0, move |now| f.set(Some(now))).unwrap();
        assert!(scope.handle().is_timer_pending(id));

        scheduler.advance(200.0);
        assert_eq!(fired.get(), None);
        scheduler.advance(100.0);
        assert_eq!(fired.get(), Some(250.0));
        assert!(!scope.handle().is_timer_pending(id));
    }

    #[test]
    fn test_timers_fire_in_due_order() {
        let scheduler = AnimationScheduler::new();
        let scope = OwnerScope::new(&scheduler.handle(), "order");
        let order = Rc::new(RefCell::new(Vec::new()));

        for (label, delay) in [("c", 30.0), ("a", 10.0), ("b", 20.0), ("a2", 10.0)] {
            let o = order.clone();
            scope.set_timeout(delay, move |_| o.borrow_mut().push(label));
        }

        scheduler.advance(50.0);
        assert_eq!(*order.borrow(), vec!["a", "a2", "b", "c"]);
    }

    #[test]
    fn test_frame_callback_runs_until_done() {
        let scheduler = AnimationScheduler::new();
        let scope = OwnerScope::new(&scheduler.handle(), "frames");
        let frames = Rc::new(Cell::new(0));

        let f = frames.clone();
        scope.request_frame(move |info| {
            assert_eq!(info.dt_ms, 16.0);
            f.set(f.get() + 1);
            if f.get() == 3 {
                FrameControl::Done
            } else {
                FrameControl::Continue
            }
        });

        for _ in 0..5 {
            scheduler.advance(16.0);
        }
        assert_eq!(frames.get(), 3);
        assert_eq!(scheduler.frame_count(), 0);
    }

    #[test]
    fn test_dropping_scope_cancels_exactly_its_registrations() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();

        let keep = OwnerScope::new(&handle, "keep");
        keep.set_interval(50.0, |_| TimerControl::Continue);
        keep.request_frame(|_| FrameControl::Continue);

        {
            let gone = OwnerScope::new(&handle, "gone");
            gone.set_interval(30.0, |_| TimerControl::Continue);
            gone.set_timeout(500.0, |_| {});
            gone.request_frame(|_| FrameControl::Continue);
            let mut value = AnimatedValue::new(&gone, 0.0, SpringConfig::cursor());
            value.set_target(10.0);

            assert_eq!(gone.registration_count(), 4);
            assert_eq!(scheduler.timer_count(), 3);
            // Only the owner release may remove the spring
            std::mem::forget(value);
        }

        assert_eq!(scheduler.owner_count(), 1);
        assert_eq!(scheduler.timer_count(), 1);
        assert_eq!(scheduler.frame_count(), 1);
        assert_eq!(scheduler.spring_count(), 0);
        assert_eq!(keep.registration_count(), 2);
    }

    #[test]
    fn test_repeated_mount_unmount_does_not_leak() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();

        for _ in 0..100 {
            let scope = OwnerScope::new(&handle, "view");
            scope.set_interval(50.0, |_| TimerControl::Continue);
            scope.request_frame(|_| FrameControl::Continue);
            scheduler.advance(16.0);
        }

        assert_eq!(scheduler.owner_count(), 0);
        assert_eq!(scheduler.timer_count(), 0);
        assert_eq!(scheduler.frame_count(), 0);
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_callback_can_release_its_own_owner() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let owner = handle.create_owner("self-destruct").unwrap();
        let count = Rc::new(Cell::new(0));

        let h = handle.clone();
        let c = count.clone();
        handle.set_interval(owner, 10.0, move |_| {
            c.set(c.get() + 1);
            h.release_owner(owner);
            TimerControl::Continue
        });

        scheduler.advance(100.0);
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.timer_count(), 0);
    }

    #[test]
    fn test_released_owner_rejects_registrations() {
        let scheduler = AnimationScheduler::new();
        let mut scope = OwnerScope::new(&scheduler.handle(), "released");
        assert_eq!(scope.release(), 0);
        assert!(scope.set_interval(10.0, |_| TimerControl::Continue).is_none());
        assert_eq!(scheduler.timer_count(), 0);
    }

    #[test]
    fn test_animated_value() {
        let scheduler = AnimationScheduler::new();
        let scope = OwnerScope::new(&scheduler.handle(), "value");

        let mut value = AnimatedValue::new(&scope, 0.0, SpringConfig::cursor());
        assert_eq!(value.get(), 0.0);
        assert!(!value.is_animating());

        value.set_target(100.0);
        assert!(value.is_animating());

        scheduler.advance(16.0);
        assert!(value.get() > 0.0);

        value.set_immediate(5.0);
        assert_eq!(value.get(), 5.0);
        assert!(!value.is_animating());

        drop(value);
        assert_eq!(scheduler.spring_count(), 0);
    }

    #[test]
    fn test_handle_weak_reference() {
        let handle = {
            let scheduler = AnimationScheduler::new();
            scheduler.handle()
        };

        assert!(!handle.is_alive());
        assert!(handle.create_owner("late").is_none());

        // Values degrade to jumping straight to their target
        let scope = OwnerScope::new(&handle, "late");
        assert!(!scope.is_active());
        let mut value = AnimatedValue::new(&scope, 0.0, SpringConfig::cursor());
        value.set_target(12.0);
        assert_eq!(value.get(), 12.0);
    }
}
