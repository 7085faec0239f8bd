//! Custom cursor
//!
//! Replaces the system cursor on pointer-capable devices with three layers:
//! a dot that sits exactly on the pointer, a spring-smoothed ring that grows
//! over interactive elements, and a short fading trail.

use crate::device::DeviceProfile;
use crate::follow::PointerSample;
use crate::trail::{TrailBuffer, TrailDot, TRAIL_SWEEP_MS};
use honeybee_animation::{AnimatedValue, OwnerScope, SchedulerHandle, SpringConfig, TimerControl};
use honeybee_core::Point;
use std::cell::RefCell;
use std::rc::Rc;

/// Ring diameter at rest, in pixels
pub const RING_SIZE: f32 = 40.0;

/// Ring diameter over an interactive element, in pixels
pub const RING_HOVER_SIZE: f32 = 60.0;

/// Off-screen start position, so nothing flashes at the origin
const PARKED: f32 = -100.0;

/// Elements that enlarge the ring
const INTERACTIVE_TAGS: [&str; 5] = ["a", "button", "input", "textarea", "select"];

/// The parts of a DOM element the hover check looks at
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverTarget<'a> {
    pub tag: &'a str,
    pub role: Option<&'a str>,
    /// Carries the `data-cursor-hover` attribute
    pub cursor_hover: bool,
}

impl<'a> HoverTarget<'a> {
    pub fn tag(tag: &'a str) -> Self {
        Self {
            tag,
            role: None,
            cursor_hover: false,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.cursor_hover
            || self.role == Some("button")
            || INTERACTIVE_TAGS
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(self.tag))
    }
}

/// Whether any element from the event target up to the root is interactive
pub fn is_interactive_path(path: &[HoverTarget<'_>]) -> bool {
    path.iter().any(HoverTarget::is_interactive)
}

/// The mounted custom cursor
///
/// Holds its own [`OwnerScope`]; dropping the cursor detaches everything it
/// registered (the trail sweep and the ring springs).
#[derive(Debug)]
pub struct CustomCursor {
    ring_x: AnimatedValue,
    ring_y: AnimatedValue,
    ring_size: AnimatedValue,
    dot: Point,
    hovering: bool,
    visible: bool,
    trail: Rc<RefCell<TrailBuffer>>,
    scope: OwnerScope,
}

impl CustomCursor {
    /// Mount the cursor, or `None` on touch-primary devices where no
    /// listeners are attached and nothing renders
    pub fn mount(handle: &SchedulerHandle, device: &DeviceProfile) -> Option<Self> {
        if !device.pointer_effects_enabled() {
            tracing::debug!("custom cursor disabled on touch-primary device");
            return None;
        }

        let scope = OwnerScope::new(handle, "custom-cursor");
        let trail = Rc::new(RefCell::new(TrailBuffer::new()));

        let sweep = Rc::downgrade(&trail);
        scope.set_interval(TRAIL_SWEEP_MS, move |now| match sweep.upgrade() {
            Some(trail) => {
                trail.borrow_mut().sweep(now);
                TimerControl::Continue
            }
            None => TimerControl::Stop,
        });

        Some(Self {
            ring_x: AnimatedValue::new(&scope, PARKED, SpringConfig::cursor()),
            ring_y: AnimatedValue::new(&scope, PARKED, SpringConfig::cursor()),
            ring_size: AnimatedValue::new(&scope, RING_SIZE, SpringConfig::hover_size()),
            dot: Point::new(PARKED, PARKED),
            hovering: false,
            visible: false,
            trail,
            scope,
        })
    }

    /// Pointer moved; `path` is the hovered element and its ancestors
    pub fn on_pointer_move(&mut self, position: Point, path: &[HoverTarget<'_>]) {
        let now = self.scope.handle().now_ms();

        self.dot = position;
        self.ring_x.set_target(position.x);
        self.ring_y.set_target(position.y);
        self.trail.borrow_mut().record(PointerSample {
            position,
            timestamp_ms: now,
        });
        self.visible = true;

        let hovering = is_interactive_path(path);
        if hovering != self.hovering {
            self.hovering = hovering;
            self.ring_size
                .set_target(if hovering { RING_HOVER_SIZE } else { RING_SIZE });
        }
    }

    pub fn on_document_enter(&mut self) {
        self.visible = true;
    }

    pub fn on_document_leave(&mut self) {
        self.visible = false;
    }

    /// Nothing is rendered until the pointer has been seen in the document
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Exact pointer position
    pub fn dot(&self) -> Point {
        self.dot
    }

    /// Smoothed ring center
    pub fn ring_center(&self) -> Point {
        Point::new(self.ring_x.get(), self.ring_y.get())
    }

    pub fn ring_size(&self) -> f32 {
        self.ring_size.get()
    }

    /// Live trail dots, oldest first
    pub fn trail(&self) -> Vec<TrailDot> {
        let now = self.scope.handle().now_ms();
        self.trail.borrow().live(now).copied().collect()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.borrow().len()
    }
}
