//! Letter-by-letter text reveal
//!
//! After an initial delay every character animates from a hidden pose (shifted
//! down, rotated back, transparent) to its resting pose. Characters are
//! staggered by `(word_index * word_len + char_index) * stagger`, so the reveal
//! sweeps left to right through each word.

use honeybee_animation::{Easing, Tween};

/// Per-character animation length in milliseconds
pub const CHAR_DURATION_MS: f64 = 300.0;

/// Default stagger between characters, in seconds
pub const DEFAULT_STAGGER_S: f64 = 0.05;

/// Hidden pose: opacity, vertical offset, x rotation
const HIDDEN: CharPose = CharPose {
    opacity: 0.0,
    y: 20.0,
    rotate_x: -90.0,
};

const SHOWN: CharPose = CharPose {
    opacity: 1.0,
    y: 0.0,
    rotate_x: 0.0,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Delay before the reveal starts, in seconds
    pub delay_s: f64,
    /// Stagger unit between characters, in seconds
    pub stagger_s: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            delay_s: 0.0,
            stagger_s: DEFAULT_STAGGER_S,
        }
    }
}

/// Visual state of one character
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharPose {
    pub opacity: f32,
    pub y: f32,
    pub rotate_x: f32,
}

impl CharPose {
    fn between(progress: f32) -> Self {
        let lerp = |a: f32, b: f32| a + (b - a) * progress;
        Self {
            opacity: lerp(HIDDEN.opacity, SHOWN.opacity),
            y: lerp(HIDDEN.y, SHOWN.y),
            rotate_x: lerp(HIDDEN.rotate_x, SHOWN.rotate_x),
        }
    }

    pub fn is_resting(&self) -> bool {
        *self == SHOWN
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealChar {
    pub ch: char,
    /// Start offset relative to the beginning of the reveal
    pub delay_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealWord {
    pub chars: Vec<RevealChar>,
}

impl RevealWord {
    pub fn text(&self) -> String {
        self.chars.iter().map(|c| c.ch).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealPhase {
    /// Waiting out the initial delay
    Pending { mounted_at_ms: f64 },
    Revealing { started_at_ms: f64 },
    Done,
}

/// One text-reveal instance
#[derive(Clone, Debug)]
pub struct LetterReveal {
    words: Vec<RevealWord>,
    config: RevealConfig,
    phase: RevealPhase,
    /// Time from reveal start until the last character rests
    total_ms: f64,
}

impl LetterReveal {
    /// Lay out `text` and start the delay at `now_ms`
    pub fn mount(text: &str, config: RevealConfig, now_ms: f64) -> Self {
        let stagger_ms = config.stagger_s * 1000.0;
        let words: Vec<RevealWord> = text
            .split(' ')
            .enumerate()
            .map(|(word_index, word)| {
                let len = word.chars().count();
                RevealWord {
                    chars: word
                        .chars()
                        .enumerate()
                        .map(|(char_index, ch)| RevealChar {
                            ch,
                            delay_ms: (word_index * len + char_index) as f64 * stagger_ms,
                        })
                        .collect(),
                }
            })
            .collect();

        let total_ms = words
            .iter()
            .flat_map(|w| w.chars.iter())
            .map(|c| c.delay_ms + CHAR_DURATION_MS)
            .fold(0.0, f64::max);

        let mut reveal = Self {
            words,
            config,
            phase: RevealPhase::Pending {
                mounted_at_ms: now_ms,
            },
            total_ms,
        };
        reveal.update(now_ms);
        reveal
    }

    pub fn words(&self) -> &[RevealWord] {
        &self.words
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == RevealPhase::Done
    }

    /// Total time from mount until every character rests
    pub fn duration_ms(&self) -> f64 {
        self.config.delay_s * 1000.0 + self.total_ms
    }

    /// Apply every transition due by `now_ms`
    pub fn update(&mut self, now_ms: f64) -> RevealPhase {
        loop {
            let next = match self.phase {
                RevealPhase::Pending { mounted_at_ms } => {
                    let start = mounted_at_ms + self.config.delay_s * 1000.0;
                    (now_ms >= start).then_some(RevealPhase::Revealing {
                        started_at_ms: start,
                    })
                }
                RevealPhase::Revealing { started_at_ms } => {
                    (now_ms >= started_at_ms + self.total_ms).then_some(RevealPhase::Done)
                }
                RevealPhase::Done => None,
            };
            match next {
                Some(phase) => {
                    tracing::debug!(?phase, "letter reveal transition");
                    self.phase = phase;
                }
                None => return self.phase,
            }
        }
    }

    /// Pose of one character at `now_ms`
    pub fn pose(&self, word: usize, index: usize, now_ms: f64) -> Option<CharPose> {
        let ch = self.words.get(word)?.chars.get(index)?;
        let pose = match self.phase {
            RevealPhase::Pending { .. } => HIDDEN,
            RevealPhase::Done => SHOWN,
            RevealPhase::Revealing { started_at_ms } => {
                let tween = Tween::new(0.0, 1.0, CHAR_DURATION_MS)
                    .with_delay(ch.delay_ms)
                    .with_easing(Easing::OUT_CUBIC);
                CharPose::between(tween.sample(now_ms - started_at_ms))
            }
        };
        Some(pose)
    }

    /// Every character with its pose, grouped by word
    pub fn frame(&self, now_ms: f64) -> Vec<Vec<(char, CharPose)>> {
        self.words
            .iter()
            .enumerate()
            .map(|(w, word)| {
                word.chars
                    .iter()
                    .enumerate()
                    .filter_map(|(i, c)| self.pose(w, i, now_ms).map(|pose| (c.ch, pose)))
                    .collect()
            })
            .collect()
    }

    /// Words rejoined with single spaces
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(RevealWord::text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
