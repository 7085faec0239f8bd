//! Honeybee Interaction Effects
//!
//! Pointer-driven and timed visual embellishments. Every effect is
//! best-effort: a missing element or a touch-primary device turns the effect
//! off rather than producing an error.
//!
//! - [`PointerFollower`]: spring-smoothed pointer offset (magnetic, spotlight)
//! - [`MagneticButton`]: link or action button pulled toward the pointer
//! - [`SpotlightCard`]: pointer-tracking glow with a hover lift
//! - [`CustomCursor`]: dot, spring ring and fading trail
//! - [`LetterReveal`] / [`ScrambleText`]: text reveal state machines

pub mod cursor;
pub mod device;
pub mod follow;
pub mod magnetic;
pub mod reveal;
pub mod scramble;
pub mod spotlight;
pub mod trail;

pub use cursor::{is_interactive_path, CustomCursor, HoverTarget, RING_HOVER_SIZE, RING_SIZE};
pub use device::{is_mobile_user_agent, DeviceProfile, PointerCapability};
pub use follow::{FollowMode, PointerFollower, PointerSample};
pub use magnetic::{Activation, ButtonTarget, ClickHandler, MagneticButton, DEFAULT_STRENGTH};
pub use reveal::{
    CharPose, LetterReveal, RevealChar, RevealConfig, RevealPhase, RevealWord, CHAR_DURATION_MS,
    DEFAULT_STAGGER_S,
};
pub use scramble::{
    ScrambleConfig, ScramblePhase, ScrambleReveal, ScrambleText, SCRAMBLE_GLYPHS, SCRAMBLE_TICK_MS,
};
pub use spotlight::SpotlightCard;
pub use trail::{TrailBuffer, TrailDot, TRAIL_CAPACITY, TRAIL_MAX_AGE_MS, TRAIL_SWEEP_MS};
