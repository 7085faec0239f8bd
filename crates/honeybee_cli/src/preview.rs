//! Offline previews of the text effects
//!
//! Both effects run against a private [`AnimationScheduler`] driven by
//! explicit time steps, so a preview is the exact frame sequence the page
//! would show, without waiting on the wall clock.

use honeybee_animation::{AnimationScheduler, OwnerScope};
use honeybee_interact::{
    LetterReveal, RevealConfig, ScrambleConfig, ScrambleReveal, ScrambleText, CHAR_DURATION_MS,
};
use rand::Rng;

/// One rendered scramble frame
#[derive(Clone, Debug, PartialEq)]
pub struct ScrambleFrame {
    pub at_ms: f64,
    pub text: String,
}

/// Every frame of a scramble reveal of `text`, ending with the resolved text
pub fn scramble_frames<R>(text: &str, config: ScrambleConfig, rng: R) -> Vec<ScrambleFrame>
where
    R: Rng + 'static,
{
    let scheduler = AnimationScheduler::new();
    let scope = OwnerScope::new(&scheduler.handle(), "scramble-preview");
    let reveal = ScrambleReveal::mount(&scope, text, config, rng);

    scheduler.advance(config.delay_s * 1000.0);

    let limit = ScrambleText::ticks_to_resolve(text.chars().count()).max(1);
    let mut frames = Vec::with_capacity(limit);
    while !reveal.is_done() && frames.len() < limit {
        scheduler.advance(config.tick_ms);
        frames.push(ScrambleFrame {
            at_ms: scheduler.now_ms(),
            text: reveal.display(),
        });
    }
    frames
}

/// When one character of a letter reveal starts and comes to rest
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSlot {
    pub ch: char,
    pub word: usize,
    pub start_ms: f64,
    pub rest_ms: f64,
}

/// Per-character schedule of a letter reveal, in reading order
pub fn reveal_schedule(text: &str, config: RevealConfig) -> (Vec<RevealSlot>, f64) {
    let reveal = LetterReveal::mount(text, config, 0.0);
    let offset_ms = config.delay_s * 1000.0;

    let slots = reveal
        .words()
        .iter()
        .enumerate()
        .flat_map(|(word, w)| {
            w.chars.iter().map(move |c| RevealSlot {
                ch: c.ch,
                word,
                start_ms: offset_ms + c.delay_ms,
                rest_ms: offset_ms + c.delay_ms + CHAR_DURATION_MS,
            })
        })
        .collect();
    (slots, reveal.duration_ms())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scramble_frames_end_on_original_text() {
        let rng = StdRng::seed_from_u64(9);
        let frames = scramble_frames("Honeybee", ScrambleConfig::default(), rng);
        assert_eq!(frames.len(), ScrambleText::ticks_to_resolve(8));
        assert_eq!(frames[0].at_ms, 30.0);
        assert_eq!(frames.last().map(|f| f.text.as_str()), Some("Honeybee"));
        assert!(frames.iter().all(|f| f.text.chars().count() == 8));
    }

    #[test]
    fn test_scramble_frames_are_reproducible_per_seed() {
        let config = ScrambleConfig::default();
        let a = scramble_frames("copy paste ui", config, StdRng::seed_from_u64(5));
        let b = scramble_frames("copy paste ui", config, StdRng::seed_from_u64(5));
        assert_eq!(a, b);
        assert!(a.iter().all(|f| f.text.chars().nth(4) == Some(' ')));
    }

    #[test]
    fn test_scramble_delay_shifts_every_frame() {
        let config = ScrambleConfig {
            delay_s: 0.5,
            tick_ms: 40.0,
        };
        let frames = scramble_frames("ab", config, StdRng::seed_from_u64(1));
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].at_ms, 540.0);
        assert_eq!(frames[3].at_ms, 660.0);
    }

    #[test]
    fn test_empty_scramble_has_one_frame() {
        let frames = scramble_frames("", ScrambleConfig::default(), StdRng::seed_from_u64(1));
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].text, "");
    }

    #[test]
    fn test_reveal_schedule_staggers_by_word_length() {
        let (slots, total) = reveal_schedule("hi bee", RevealConfig::default());
        let starts: Vec<f64> = slots.iter().map(|s| s.start_ms.round()).collect();
        // "bee" is word 1 with 3 letters: (1 * 3 + i) * 50ms
        assert_eq!(starts, vec![0.0, 50.0, 150.0, 200.0, 250.0]);
        assert_eq!(slots[2].word, 1);
        assert_eq!(slots[4].rest_ms.round(), 550.0);
        assert_eq!(total.round(), 550.0);
    }

    #[test]
    fn test_reveal_schedule_includes_delay() {
        let config = RevealConfig {
            delay_s: 1.0,
            ..Default::default()
        };
        let (slots, total) = reveal_schedule("a", config);
        assert_eq!(slots[0].start_ms, 1000.0);
        assert_eq!(total, 1300.0);
    }
}
