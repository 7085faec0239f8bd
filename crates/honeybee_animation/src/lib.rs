//! Honeybee Animation System
//!
//! Spring physics, easing curves, and an owner-scoped scheduler.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass,
//!   sub-stepped so long frames stay stable
//! - **Easing**: CSS timing functions and fixed-duration tweens
//! - **Scheduler**: springs, per-frame callbacks and timers in one arena, each
//!   tagged with the UI element that owns it
//! - **Teardown**: dropping an [`OwnerScope`] cancels everything it registered
//! - **Interruptible**: springs keep their velocity when the target changes

pub mod easing;
pub mod scheduler;
pub mod spring;

pub use easing::{Easing, Tween};
pub use scheduler::{
    AnimatedValue, AnimationScheduler, FrameCallback, FrameControl, FrameId, FrameInfo, OwnerId,
    OwnerScope, SchedulerHandle, SpringId, TimerCallback, TimerControl, TimerId,
};
pub use spring::{RestThreshold, Spring, SpringConfig};
