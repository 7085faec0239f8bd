//! Spotlight cards
//!
//! A radial glow that tracks the pointer inside a card. Hovering fades the glow
//! in and lifts the card slightly.

use crate::device::DeviceProfile;
use crate::follow::{FollowMode, PointerFollower};
use honeybee_animation::{AnimatedValue, OwnerScope, RestThreshold, Spring, SpringConfig};
use honeybee_core::{Point, Rect, Vec2};

/// Vertical lift while hovered, in pixels
pub const HOVER_LIFT: f32 = -4.0;

pub const DEFAULT_SPOTLIGHT_COLOR: &str = "rgba(255, 184, 0, 0.15)";
pub const BORDER_GLOW_COLOR: &str = "rgba(255, 184, 0, 0.3)";

/// Radius of the glow gradient, in pixels
const GLOW_RADIUS: u32 = 600;

#[derive(Debug)]
pub struct SpotlightCard {
    color: String,
    spotlight: PointerFollower,
    glow: AnimatedValue,
    lift: AnimatedValue,
    hovered: bool,
}

impl SpotlightCard {
    pub fn new(scope: &OwnerScope) -> Self {
        Self::with_color(scope, DEFAULT_SPOTLIGHT_COLOR)
    }

    pub fn with_color(scope: &OwnerScope, color: impl Into<String>) -> Self {
        let glow = Spring::new(SpringConfig::lift(), 0.0).with_rest_threshold(RestThreshold::UNIT);
        Self {
            color: color.into(),
            spotlight: PointerFollower::new(scope, FollowMode::Spotlight, SpringConfig::lift()),
            glow: AnimatedValue::from_spring(scope, glow),
            lift: AnimatedValue::new(scope, 0.0, SpringConfig::lift()),
            hovered: false,
        }
    }

    /// Disable the glow and lift on touch-primary devices
    pub fn with_device(mut self, device: &DeviceProfile) -> Self {
        self.spotlight = self.spotlight.with_device(device);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.spotlight.is_enabled()
    }

    pub fn on_pointer_enter(&mut self) {
        if !self.is_enabled() {
            return;
        }
        self.hovered = true;
        self.glow.set_target(1.0);
        self.lift.set_target(HOVER_LIFT);
    }

    pub fn on_pointer_move(&mut self, pointer: Point, bounds: Option<Rect>) -> bool {
        self.spotlight.on_pointer_move(pointer, bounds)
    }

    pub fn on_pointer_leave(&mut self) {
        if !self.is_enabled() {
            return;
        }
        self.hovered = false;
        self.glow.set_target(0.0);
        self.lift.set_target(0.0);
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Glow center relative to the card's top-left corner
    pub fn spotlight_position(&self) -> Vec2 {
        self.spotlight.offset()
    }

    pub fn glow_opacity(&self) -> f32 {
        self.glow.get().clamp(0.0, 1.0)
    }

    pub fn lift(&self) -> f32 {
        self.lift.get()
    }

    /// CSS background for the spotlight layer
    pub fn spotlight_css(&self) -> String {
        self.gradient(&self.color)
    }

    /// CSS background for the border glow layer
    pub fn border_css(&self) -> String {
        self.gradient(BORDER_GLOW_COLOR)
    }

    fn gradient(&self, color: &str) -> String {
        let at = self.spotlight_position();
        format!(
            "radial-gradient({GLOW_RADIUS}px circle at {}px {}px, {color}, transparent 40%)",
            at.x.round(),
            at.y.round()
        )
    }
}
