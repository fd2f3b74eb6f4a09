//! Strength profiles controlling how aggressively text is stylized.
//!
//! Five fixed profiles, selected by a level from 1 to 5. Higher levels raise
//! every probability and widen the suffix vocabulary; each level's suffix
//! pool is a strict subset of the next one, so the level-5 pool covers every
//! suffix any encoder can emit. The decoder relies on that superset when it
//! strips suffixes without knowing the original level.

/// Lowest selectable strength level.
pub const MIN_STRENGTH: u8 = 1;

/// Highest selectable strength level.
pub const MAX_STRENGTH: u8 = 5;

/// Parameters for one strength level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthProfile {
    /// Chance that a character is tested for l/r substitution.
    pub substitution_probability: f64,

    /// Chance that a non-space character is doubled.
    pub double_letter_probability: f64,

    /// Chance that the last character of a short message is quadrupled.
    pub final_stretch_probability: f64,

    /// Candidate trailing decorations; one is appended per message.
    pub suffixes: &'static [&'static str],
}

/// Profiles indexed by level, index 0 holding level 1.
const PROFILES: [StrengthProfile; 5] = [
    StrengthProfile {
        substitution_probability: 0.4,
        double_letter_probability: 0.02,
        final_stretch_probability: 0.0,
        suffixes: &[" :3", " meow~", " owo", "~"],
    },
    StrengthProfile {
        substitution_probability: 0.5,
        double_letter_probability: 0.03,
        final_stretch_probability: 0.2,
        suffixes: &[" :3", " meow~", " nya~", " owo", " uwu", "~"],
    },
    StrengthProfile {
        substitution_probability: 0.6,
        double_letter_probability: 0.04,
        final_stretch_probability: 0.4,
        suffixes: &[" :3", " meow~", " nya~", " mrrp~", " purrr", " owo", " uwu", "~"],
    },
    StrengthProfile {
        substitution_probability: 0.7,
        double_letter_probability: 0.05,
        final_stretch_probability: 0.6,
        suffixes: &[
            " :3", " meow~", " nya~", " mrrp~", " purrr", " mew~", " hisss~", " owo", " uwu", "~",
        ],
    },
    StrengthProfile {
        substitution_probability: 0.8,
        double_letter_probability: 0.06,
        final_stretch_probability: 0.8,
        suffixes: &[
            " :3", " meow~", " nya~", " mrrp~", " purrr", " nyan~", " mew~", " hisss~", " rawr~",
            " owo", " uwu", "~",
        ],
    },
];

/// Returns the profile for a strength level.
///
/// Out-of-range levels clamp to the nearest valid one.
pub fn for_level(level: u8) -> &'static StrengthProfile {
    let clamped = level.clamp(MIN_STRENGTH, MAX_STRENGTH);
    &PROFILES[(clamped - 1) as usize]
}

/// The level-5 suffix pool, a superset of every other level's pool.
pub fn all_suffixes() -> &'static [&'static str] {
    PROFILES[(MAX_STRENGTH - 1) as usize].suffixes
}
