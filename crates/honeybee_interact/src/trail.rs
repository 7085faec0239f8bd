//! Cursor trail
//!
//! A bounded FIFO of recent pointer positions. Each dot fades and shrinks over
//! its lifetime. Dots are pruned on every push and by a periodic sweep, so the
//! buffer stays bounded however fast pointer events arrive.

use crate::follow::PointerSample;
use honeybee_animation::{Easing, Tween};
use honeybee_core::Point;
use std::collections::VecDeque;

/// Most dots kept at once
pub const TRAIL_CAPACITY: usize = 8;

/// Lifetime of a dot in milliseconds
pub const TRAIL_MAX_AGE_MS: f64 = 150.0;

/// Period of the eviction sweep in milliseconds
pub const TRAIL_SWEEP_MS: f64 = 50.0;

const DOT_OPACITY: Tween = Tween {
    from: 0.6,
    to: 0.0,
    duration_ms: TRAIL_MAX_AGE_MS,
    delay_ms: 0.0,
    easing: Easing::EaseOut,
};

const DOT_SCALE: Tween = Tween {
    from: 1.0,
    to: 0.0,
    duration_ms: TRAIL_MAX_AGE_MS,
    delay_ms: 0.0,
    easing: Easing::EaseOut,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailDot {
    pub id: u64,
    pub position: Point,
    pub created_ms: f64,
}

impl TrailDot {
    pub fn age(&self, now_ms: f64) -> f64 {
        now_ms - self.created_ms
    }

    pub fn opacity(&self, now_ms: f64) -> f32 {
        DOT_OPACITY.sample(self.age(now_ms))
    }

    pub fn scale(&self, now_ms: f64) -> f32 {
        DOT_SCALE.sample(self.age(now_ms))
    }
}

#[derive(Clone, Debug, Default)]
pub struct TrailBuffer {
    dots: VecDeque<TrailDot>,
    next_id: u64,
}

impl TrailBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer sample; returns the new dot's id
    pub fn push(&mut self, position: Point, now_ms: f64) -> u64 {
        self.sweep(now_ms);

        let id = self.next_id;
        self.next_id += 1;
        self.dots.push_back(TrailDot {
            id,
            position,
            created_ms: now_ms,
        });

        while self.dots.len() > TRAIL_CAPACITY {
            self.dots.pop_front();
        }
        id
    }

    pub fn record(&mut self, sample: PointerSample) -> u64 {
        self.push(sample.position, sample.timestamp_ms)
    }

    /// Evict dots that have lived out their lifetime; returns how many
    pub fn sweep(&mut self, now_ms: f64) -> usize {
        let before = self.dots.len();
        // Oldest first: stop at the first live dot
        while self
            .dots
            .front()
            .is_some_and(|dot| dot.age(now_ms) >= TRAIL_MAX_AGE_MS)
        {
            self.dots.pop_front();
        }
        before - self.dots.len()
    }

    /// Dots still alive at `now_ms`, oldest first
    pub fn live(&self, now_ms: f64) -> impl Iterator<Item = &TrailDot> + '_ {
        self.dots
            .iter()
            .filter(move |dot| dot.age(now_ms) < TRAIL_MAX_AGE_MS)
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }
}
