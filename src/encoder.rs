//! Text stylization with embedded reversal markers.
//!
//! The encoder walks the input one character at a time and applies the first
//! rule whose random draw succeeds:
//! 1. Substitute "l"/"r" with "w" (keeping case), marking which letter it was
//! 2. Double the character (spaces excluded)
//! 3. Quadruple the final character of messages under three words
//! 4. Pass the character through unchanged
//!
//! A draw that succeeds but whose guard fails is consumed, and evaluation
//! falls through to the next rule for the same character. After the last
//! character, one randomly chosen suffix is appended, then the suffix
//! boundary marker, then the encoded flag. Every edit leaves a marker the
//! decoder can replay, so the output carries its own undo log.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::marker::Marker;
use crate::strength::{for_level, StrengthProfile};

/// Encodes text at the given strength level.
///
/// Non-deterministic: two calls with the same input produce different
/// output. Out-of-range levels clamp to the valid range.
pub fn encode(text: &str, level: u8) -> String {
    encode_with_rng(text, for_level(level), &mut rand::thread_rng())
}

/// Encodes text deterministically from a seed.
///
/// The same text, level, and seed always produce the same output.
pub fn encode_seeded(text: &str, level: u8, seed: u64) -> String {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    encode_with_rng(text, for_level(level), &mut rng)
}

/// Encodes text with a caller-provided profile and RNG.
///
/// All probability draws and the suffix choice come from `rng`, which makes
/// every branch reachable on demand with a forced profile.
pub fn encode_with_rng<R: Rng>(text: &str, profile: &StrengthProfile, rng: &mut R) -> String {
    let chars: Vec<char> = text.chars().collect();
    // Split on plain spaces, counting empty segments, so "a  b" is three words
    let word_count = text.split(' ').count();

    let mut output = String::with_capacity(text.len() * 2);

    for (index, &ch) in chars.iter().enumerate() {
        // Rule 1: l/r -> w substitution. A successful draw on any other
        // character is consumed and falls through.
        if chance(rng, profile.substitution_probability) {
            match ch {
                'l' | 'L' => {
                    output.push(cased_w(ch));
                    output.push(Marker::SubstitutedL.character());
                    continue;
                }
                'r' | 'R' => {
                    output.push(cased_w(ch));
                    output.push(Marker::SubstitutedR.character());
                    continue;
                }
                _ => {}
            }
        }

        // Rule 2: double the character, spaces excluded
        if chance(rng, profile.double_letter_probability) && ch != ' ' {
            output.push(ch);
            output.push(ch);
            output.push(Marker::DoubledLetter.character());
            continue;
        }

        // Rule 3: quadruple the final character of short messages
        if chance(rng, profile.final_stretch_probability)
            && word_count < 3
            && index == chars.len() - 1
        {
            for _ in 0..4 {
                output.push(ch);
            }
            output.push(Marker::StretchedFinal.character());
            continue;
        }

        // Rule 4: passthrough
        output.push(ch);
    }

    let suffix = profile
        .suffixes
        .choose(rng)
        .expect("suffix pools are never empty");
    output.push_str(suffix);
    output.push(Marker::SuffixBoundary.character());
    output.push(Marker::EncodedFlag.character());

    output
}

/// Single probability draw.
fn chance<R: Rng>(rng: &mut R, probability: f64) -> bool {
    rng.gen::<f64>() < probability
}

/// The substitute letter, matching the case of the original.
fn cased_w(original: char) -> char {
    if original.is_ascii_uppercase() {
        'W'
    } else {
        'w'
    }
}
