//! Scramble text reveal
//!
//! Text starts as noise and resolves left to right: every tick advances the
//! resolved prefix by half a character, and positions past it show a random
//! glyph. Spaces are never scrambled. Once the whole text is resolved the
//! instance latches and never scrambles again.

use honeybee_animation::{OwnerScope, TimerControl};
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;

/// Noise glyphs; the run of underscores weights the draw toward them
pub const SCRAMBLE_GLYPHS: &[char] = &[
    '!', '<', '>', '-', '_', '\\', '/', '[', ']', '{', '}', '—', '=', '+', '*', '^', '?', '#', '_',
    '_', '_', '_', '_', '_', '_', '_',
];

/// Default tick period in milliseconds
pub const SCRAMBLE_TICK_MS: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrambleConfig {
    /// Delay before the first tick, in seconds
    pub delay_s: f64,
    pub tick_ms: f64,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            delay_s: 0.0,
            tick_ms: SCRAMBLE_TICK_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScramblePhase {
    /// Showing the original text, no tick yet
    Idle,
    /// `half_steps` ticks taken; characters before `half_steps / 2` are resolved
    Scrambling { half_steps: usize },
    /// Resolved and latched
    Done,
}

/// Scramble state for one piece of text
#[derive(Clone, Debug)]
pub struct ScrambleText {
    original: Vec<char>,
    display: String,
    phase: ScramblePhase,
}

impl ScrambleText {
    pub fn new(text: &str) -> Self {
        Self {
            original: text.chars().collect(),
            display: text.to_string(),
            phase: ScramblePhase::Idle,
        }
    }

    /// Ticks needed to resolve `len` characters at half a character per tick
    pub fn ticks_to_resolve(len: usize) -> usize {
        len * 2
    }

    pub fn original(&self) -> String {
        self.original.iter().collect()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn phase(&self) -> ScramblePhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == ScramblePhase::Done
    }

    /// Resolved prefix length (may be fractional)
    pub fn iteration(&self) -> f32 {
        match self.phase {
            ScramblePhase::Idle => 0.0,
            ScramblePhase::Scrambling { half_steps } => half_steps as f32 / 2.0,
            ScramblePhase::Done => self.original.len() as f32,
        }
    }

    /// Run one tick; returns true while more ticks are needed
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> bool {
        let half_steps = match self.phase {
            ScramblePhase::Idle => 0,
            ScramblePhase::Scrambling { half_steps } => half_steps,
            ScramblePhase::Done => return false,
        };

        self.display = self
            .original
            .iter()
            .enumerate()
            .map(|(i, &ch)| {
                if ch == ' ' {
                    ' '
                } else if i * 2 < half_steps {
                    ch
                } else {
                    SCRAMBLE_GLYPHS[rng.gen_range(0..SCRAMBLE_GLYPHS.len())]
                }
            })
            .collect();

        let half_steps = half_steps + 1;
        if half_steps >= Self::ticks_to_resolve(self.original.len()) {
            self.display = self.original();
            self.phase = ScramblePhase::Done;
            tracing::debug!(ticks = half_steps, "scramble resolved");
            false
        } else {
            self.phase = ScramblePhase::Scrambling { half_steps };
            true
        }
    }
}

/// A scramble wired to the scheduler: waits out the delay, then ticks on a
/// fixed interval until resolved
///
/// Both the delay timer and the interval belong to the scope passed to
/// [`ScrambleReveal::mount`]; releasing that scope stops the effect.
#[derive(Clone, Debug)]
pub struct ScrambleReveal {
    state: Rc<RefCell<ScrambleText>>,
}

impl ScrambleReveal {
    pub fn mount<R>(scope: &OwnerScope, text: &str, config: ScrambleConfig, rng: R) -> Self
    where
        R: Rng + 'static,
    {
        let state = Rc::new(RefCell::new(ScrambleText::new(text)));
        let reveal = Self {
            state: state.clone(),
        };

        let (Some(owner), handle) = (scope.owner(), scope.handle().clone()) else {
            return reveal;
        };

        let tick_ms = config.tick_ms;
        scope.set_timeout(config.delay_s * 1000.0, move |_| {
            let mut rng = rng;
            if state.borrow().is_done() {
                return;
            }
            handle.set_interval(owner, tick_ms, move |_| {
                if state.borrow_mut().tick(&mut rng) {
                    TimerControl::Continue
                } else {
                    TimerControl::Stop
                }
            });
        });

        reveal
    }

    pub fn display(&self) -> String {
        self.state.borrow().display().to_string()
    }

    pub fn is_done(&self) -> bool {
        self.state.borrow().is_done()
    }

    pub fn phase(&self) -> ScramblePhase {
        self.state.borrow().phase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use honeybee_animation::AnimationScheduler;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_resolves_within_bound_and_latches() {
        let mut rng = StdRng::seed_from_u64(7);
        for text in ["Honeybee", "a", "copy paste ui", "  ", "ünïcödé"] {
            let mut scramble = ScrambleText::new(text);
            let bound = ScrambleText::ticks_to_resolve(text.chars().count());

            let mut ticks = 0;
            while scramble.tick(&mut rng) {
                ticks += 1;
                assert!(ticks < bound, "{text:?} took too long");
            }
            assert_eq!(ticks + 1, bound.max(1));
            assert_eq!(scramble.display(), text);

            // Latched: further ticks change nothing
            for _ in 0..10 {
                assert!(!scramble.tick(&mut rng));
                assert_eq!(scramble.display(), text);
            }
        }
    }

    #[test]
    fn test_prefix_resolves_and_spaces_pass_through() {
        let mut rng = StdRng::seed_from_u64(42);
        let text = "ab cd";
        let mut scramble = ScrambleText::new(text);
        assert_eq!(scramble.display(), text);

        let mut half_steps = 0usize;
        while scramble.tick(&mut rng) {
            let shown: Vec<char> = scramble.display().chars().collect();
            assert_eq!(shown.len(), 5);
            assert_eq!(shown[2], ' ');
            for (i, ch) in text.chars().enumerate() {
                if i * 2 < half_steps && ch != ' ' {
                    assert_eq!(shown[i], ch);
                } else if ch != ' ' {
                    assert!(SCRAMBLE_GLYPHS.contains(&shown[i]));
                }
            }
            half_steps += 1;
            assert_eq!(scramble.iteration(), half_steps as f32 / 2.0);
        }
        assert!(scramble.is_done());
    }

    #[test]
    fn test_empty_text_finishes_on_first_tick() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut scramble = ScrambleText::new("");
        assert!(!scramble.tick(&mut rng));
        assert!(scramble.is_done());
        assert_eq!(scramble.display(), "");
    }

    #[test]
    fn test_scheduled_reveal_waits_for_delay_then_ticks() {
        let scheduler = AnimationScheduler::new();
        let scope = OwnerScope::new(&scheduler.handle(), "hero-title");
        let config = ScrambleConfig {
            delay_s: 0.3,
            ..Default::default()
        };
        let reveal = ScrambleReveal::mount(&scope, "Bees", config, StdRng::seed_from_u64(3));

        scheduler.advance(299.0);
        assert_eq!(reveal.phase(), ScramblePhase::Idle);
        assert_eq!(reveal.display(), "Bees");

        // Delay fires at 300; first tick at 330
        scheduler.advance(31.0);
        assert_eq!(reveal.phase(), ScramblePhase::Scrambling { half_steps: 1 });

        // 8 ticks in total
        scheduler.advance(30.0 * 6.0);
        assert!(!reveal.is_done());
        scheduler.advance(30.0);
        assert!(reveal.is_done());
        assert_eq!(reveal.display(), "Bees");
        assert_eq!(scheduler.timer_count(), 0);
    }

    #[test]
    fn test_unmount_stops_ticking() {
        let scheduler = AnimationScheduler::new();
        let mut scope = OwnerScope::new(&scheduler.handle(), "tagline");
        let reveal = ScrambleReveal::mount(
            &scope,
            "a long tagline",
            ScrambleConfig::default(),
            StdRng::seed_from_u64(9),
        );

        scheduler.advance(95.0);
        let frozen = reveal.phase();
        assert!(matches!(frozen, ScramblePhase::Scrambling { .. }));

        scope.release();
        assert_eq!(scheduler.timer_count(), 0);
        scheduler.advance(1000.0);
        assert_eq!(reveal.phase(), frozen);
    }
}
