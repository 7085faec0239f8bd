//! Magnetic buttons
//!
//! A button or link that eases toward the pointer while hovered and relaxes
//! back when the pointer leaves.

use crate::device::DeviceProfile;
use crate::follow::{FollowMode, PointerFollower};
use honeybee_animation::{OwnerScope, SpringConfig};
use honeybee_core::{Point, Rect, Vec2};
use std::fmt;

/// Pull applied to the pointer's offset from the button center
pub const DEFAULT_STRENGTH: f32 = 0.3;

/// Scale while pressed
pub const PRESSED_SCALE: f32 = 0.95;

/// Click handler for action buttons
pub type ClickHandler = Box<dyn FnMut()>;

/// What activating the button does, fixed at construction
pub enum ButtonTarget {
    /// Rendered as an anchor
    Link {
        href: String,
        target: Option<String>,
        rel: Option<String>,
    },
    /// Rendered as a button
    Action(ClickHandler),
}

impl ButtonTarget {
    pub fn link(href: impl Into<String>) -> Self {
        ButtonTarget::Link {
            href: href.into(),
            target: None,
            rel: None,
        }
    }

    /// Link opened in a new tab
    pub fn external(href: impl Into<String>) -> Self {
        ButtonTarget::Link {
            href: href.into(),
            target: Some("_blank".into()),
            rel: Some("noopener noreferrer".into()),
        }
    }

    pub fn action(handler: impl FnMut() + 'static) -> Self {
        ButtonTarget::Action(Box::new(handler))
    }

    /// A link when `href` is present, otherwise an action button
    pub fn resolve(href: Option<String>, handler: impl FnMut() + 'static) -> Self {
        match href {
            Some(href) => ButtonTarget::link(href),
            None => ButtonTarget::action(handler),
        }
    }

    /// Element the target renders as
    pub fn element(&self) -> &'static str {
        match self {
            ButtonTarget::Link { .. } => "a",
            ButtonTarget::Action(_) => "button",
        }
    }
}

impl fmt::Debug for ButtonTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonTarget::Link { href, target, rel } => f
                .debug_struct("Link")
                .field("href", href)
                .field("target", target)
                .field("rel", rel)
                .finish(),
            ButtonTarget::Action(_) => f.write_str("Action(..)"),
        }
    }
}

/// Result of activating a button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation<'a> {
    Navigate(&'a str),
    Invoked,
}

#[derive(Debug)]
pub struct MagneticButton {
    label: String,
    target: ButtonTarget,
    follower: PointerFollower,
    pressed: bool,
}

impl MagneticButton {
    pub fn new(scope: &OwnerScope, label: impl Into<String>, target: ButtonTarget) -> Self {
        Self::with_strength(scope, label, target, DEFAULT_STRENGTH)
    }

    pub fn with_strength(
        scope: &OwnerScope,
        label: impl Into<String>,
        target: ButtonTarget,
        strength: f32,
    ) -> Self {
        Self {
            label: label.into(),
            target,
            follower: PointerFollower::new(
                scope,
                FollowMode::Magnetic { strength },
                SpringConfig::magnetic(),
            ),
            pressed: false,
        }
    }

    /// Keep the button still on touch-primary devices; presses still work
    pub fn with_device(mut self, device: &DeviceProfile) -> Self {
        self.follower = self.follower.with_device(device);
        self
    }

    pub fn follows_pointer(&self) -> bool {
        self.follower.is_enabled()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target(&self) -> &ButtonTarget {
        &self.target
    }

    pub fn element(&self) -> &'static str {
        self.target.element()
    }

    pub fn on_pointer_move(&mut self, pointer: Point, bounds: Option<Rect>) -> bool {
        self.follower.on_pointer_move(pointer, bounds)
    }

    pub fn on_pointer_leave(&mut self) {
        self.pressed = false;
        self.follower.on_pointer_leave();
    }

    pub fn on_press(&mut self) {
        self.pressed = true;
    }

    /// Release the press; counts as a click
    pub fn on_release(&mut self) -> Option<Activation<'_>> {
        if !std::mem::take(&mut self.pressed) {
            return None;
        }
        Some(self.activate())
    }

    pub fn activate(&mut self) -> Activation<'_> {
        match &mut self.target {
            ButtonTarget::Link { href, .. } => {
                tracing::debug!(label = %self.label, href = %href, "magnetic link activated");
                Activation::Navigate(href)
            }
            ButtonTarget::Action(handler) => {
                handler();
                Activation::Invoked
            }
        }
    }

    /// Current translation of the button
    pub fn offset(&self) -> Vec2 {
        self.follower.offset()
    }

    pub fn scale(&self) -> f32 {
        if self.pressed {
            PRESSED_SCALE
        } else {
            1.0
        }
    }
}
