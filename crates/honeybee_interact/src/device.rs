//! Device gating
//!
//! Pointer-follow effects only run on devices whose primary input is a fine,
//! hover-capable pointer. Capability reports (the `pointer` and `hover` media
//! features) decide when available; the user agent is consulted only when the
//! host cannot report capabilities, and is known to be imprecise.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Platform identifiers that mark a touch-primary device
const MOBILE_USER_AGENTS: &str = "Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini";

static MOBILE_UA: LazyLock<Option<Regex>> = LazyLock::new(|| {
    RegexBuilder::new(MOBILE_USER_AGENTS)
        .case_insensitive(true)
        .build()
        .ok()
});

/// Accuracy of the primary pointing device
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerCapability {
    /// Mouse, trackpad, stylus
    Fine,
    /// Finger
    Coarse,
    /// No pointing device
    None,
    /// The host could not tell
    #[default]
    Unknown,
}

/// What the host knows about the input device
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeviceProfile {
    pub pointer: PointerCapability,
    /// Whether the primary pointer can hover, if known
    pub hover: Option<bool>,
    pub user_agent: Option<String>,
}

impl DeviceProfile {
    /// A desktop with a mouse
    pub fn desktop() -> Self {
        Self {
            pointer: PointerCapability::Fine,
            hover: Some(true),
            user_agent: None,
        }
    }

    /// Only a user agent string is known
    pub fn from_user_agent(user_agent: impl Into<String>) -> Self {
        Self {
            pointer: PointerCapability::Unknown,
            hover: None,
            user_agent: Some(user_agent.into()),
        }
    }

    pub fn is_touch_primary(&self) -> bool {
        match (self.pointer, self.hover) {
            (PointerCapability::Coarse | PointerCapability::None, _) => true,
            (PointerCapability::Fine, Some(false)) => true,
            (PointerCapability::Fine, _) => false,
            (PointerCapability::Unknown, _) => self
                .user_agent
                .as_deref()
                .is_some_and(is_mobile_user_agent),
        }
    }

    /// Whether pointer listeners should be attached and effects rendered
    pub fn pointer_effects_enabled(&self) -> bool {
        !self.is_touch_primary()
    }
}

/// User-agent heuristic for touch-primary devices
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    match MOBILE_UA.as_ref() {
        Some(re) => re.is_match(user_agent),
        None => {
            tracing::warn!("mobile user agent pattern failed to compile");
            false
        }
    }
}
