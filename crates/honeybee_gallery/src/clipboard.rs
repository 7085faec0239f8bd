//! Clipboard writes and the transient "Copied" indicator
//!
//! Copying is fire-and-forget. A successful write shows the indicator for
//! the copied key until the feedback timer fires; a failed write is logged and
//! the indicator never appears.

use crate::error::{GalleryError, Result};
use honeybee_animation::{OwnerScope, SchedulerHandle, TimerId};
use std::cell::RefCell;
use std::rc::Rc;

/// How long the indicator stays up, in milliseconds
pub const COPY_FEEDBACK_MS: f64 = 2000.0;

/// A sink for copied text
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// In-process clipboard, optionally denying every write
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
    denied: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that behaves like a denied permission prompt
    pub fn denied() -> Self {
        Self {
            contents: None,
            denied: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.denied {
            return Err(GalleryError::Clipboard("permission denied".into()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Which copy action, if any, is currently confirmed
///
/// At most one key is shown at a time: a new copy replaces the previous key
/// and restarts the timer.
#[derive(Debug)]
pub struct CopyFeedback {
    shown: Rc<RefCell<Option<String>>>,
    timer: Option<TimerId>,
    duration_ms: f64,
    scope: OwnerScope,
}

impl CopyFeedback {
    pub fn new(handle: &SchedulerHandle) -> Self {
        Self::with_duration(handle, COPY_FEEDBACK_MS)
    }

    pub fn with_duration(handle: &SchedulerHandle, duration_ms: f64) -> Self {
        Self {
            shown: Rc::new(RefCell::new(None)),
            timer: None,
            duration_ms,
            scope: OwnerScope::new(handle, "copy-feedback"),
        }
    }

    /// Write `text` and confirm it under `key`; returns whether the write
    /// succeeded
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, key: &str, text: &str) -> bool {
        if let Err(err) = clipboard.write_text(text) {
            tracing::warn!(key, error = %err, "copy failed");
            return false;
        }

        if let Some(timer) = self.timer.take() {
            self.scope.handle().cancel_timer(timer);
        }
        *self.shown.borrow_mut() = Some(key.to_string());

        let shown = Rc::downgrade(&self.shown);
        self.timer = self.scope.set_timeout(self.duration_ms, move |_| {
            if let Some(shown) = shown.upgrade() {
                shown.borrow_mut().take();
            }
        });
        if self.timer.is_none() {
            // Nothing would ever clear the key
            self.shown.borrow_mut().take();
            tracing::debug!(key, "copied without indicator, scheduler is gone");
            return true;
        }
        tracing::debug!(key, "copied");
        true
    }

    /// Key currently showing "Copied"
    pub fn copied_key(&self) -> Option<String> {
        self.shown.borrow().clone()
    }

    pub fn is_copied(&self, key: &str) -> bool {
        self.shown.borrow().as_deref() == Some(key)
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use honeybee_animation::AnimationScheduler;

    #[test]
    fn test_indicator_shows_for_fixed_duration() {
        let scheduler = AnimationScheduler::new();
        let mut feedback = CopyFeedback::new(&scheduler.handle());
        let mut clipboard = MemoryClipboard::new();

        assert!(feedback.copy(&mut clipboard, "inter-css", "font-family: 'Inter', sans-serif;"));
        assert_eq!(clipboard.contents(), Some("font-family: 'Inter', sans-serif;"));
        assert!(feedback.is_copied("inter-css"));

        scheduler.advance(1999.0);
        assert!(feedback.is_copied("inter-css"));
        scheduler.advance(1.0);
        assert_eq!(feedback.copied_key(), None);
        assert_eq!(scheduler.timer_count(), 0);
    }

    #[test]
    fn test_denied_clipboard_never_shows_indicator() {
        let scheduler = AnimationScheduler::new();
        let mut feedback = CopyFeedback::new(&scheduler.handle());
        let mut clipboard = MemoryClipboard::denied();

        assert!(!feedback.copy(&mut clipboard, "linear-primary", "#5E6AD2"));
        assert_eq!(feedback.copied_key(), None);
        assert_eq!(clipboard.contents(), None);
        assert_eq!(scheduler.timer_count(), 0);
    }

    #[test]
    fn test_new_copy_replaces_key_and_restarts_timer() {
        let scheduler = AnimationScheduler::new();
        let mut feedback = CopyFeedback::new(&scheduler.handle());
        let mut clipboard = MemoryClipboard::new();

        feedback.copy(&mut clipboard, "lora-import", "a");
        scheduler.advance(1500.0);
        feedback.copy(&mut clipboard, "lora-css", "b");
        assert!(!feedback.is_copied("lora-import"));
        assert_eq!(scheduler.timer_count(), 1);

        // The first copy's timer must not clear the second key
        scheduler.advance(600.0);
        assert!(feedback.is_copied("lora-css"));
        scheduler.advance(1400.0);
        assert_eq!(feedback.copied_key(), None);
    }

    #[test]
    fn test_indicator_is_not_latched_without_a_scheduler() {
        let scheduler = AnimationScheduler::new();
        let mut feedback = CopyFeedback::new(&scheduler.handle());
        drop(scheduler);

        let mut clipboard = MemoryClipboard::new();
        assert!(feedback.copy(&mut clipboard, "aurora-css", "background: red;"));
        assert_eq!(clipboard.contents(), Some("background: red;"));
        assert_eq!(feedback.copied_key(), None);
    }

    #[test]
    fn test_drop_cancels_pending_timer() {
        let scheduler = AnimationScheduler::new();
        let mut feedback = CopyFeedback::with_duration(&scheduler.handle(), 500.0);
        feedback.copy(&mut MemoryClipboard::new(), "k", "v");
        assert_eq!(scheduler.timer_count(), 1);

        drop(feedback);
        assert_eq!(scheduler.timer_count(), 0);
        assert_eq!(scheduler.owner_count(), 0);
    }
}
