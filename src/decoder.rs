//! Reconstruction of original text from marker-annotated input.
//!
//! The decoder replays markers as edit instructions against an output
//! buffer that is only ever touched at its tail:
//! 1. Substitution markers overwrite the last character with "l" or "r"
//! 2. The doubled-letter marker removes the surviving duplicate
//! 3. The stretched-final marker collapses a quadruple back to one
//! 4. The suffix boundary strips the longest recognized suffix
//! 5. The encoded flag is consumed silently
//! 6. Everything else is appended in lowercase
//!
//! CRITICAL: decoding NEVER fails. Text without markers comes back as a
//! lowercase copy, a suffix lookup miss strips nothing, and marker
//! sequences that do not line up with the buffer trim only what is there.
//! Case information is discarded on purpose: substituted letters are
//! restored in lowercase and ordinary characters are lowercased, so the
//! reconstruction is a best-effort original, not a byte-exact one.

use crate::marker::Marker;
use crate::strength::all_suffixes;

/// Decodes marker-annotated text back to a best-effort original.
///
/// # Important
/// This function NEVER fails, for any input. Malformed marker sequences
/// degrade the reconstruction instead of raising errors.
pub fn decode(text: &str) -> String {
    let mut buffer = ReconstructionBuffer::new();

    for ch in text.chars() {
        match Marker::from_char(ch) {
            Some(Marker::SubstitutedL) => buffer.restore_last('l'),
            Some(Marker::SubstitutedR) => buffer.restore_last('r'),
            Some(Marker::DoubledLetter) => buffer.collapse_double(),
            Some(Marker::StretchedFinal) => buffer.collapse_stretch(),
            Some(Marker::SuffixBoundary) => buffer.strip_suffix(),
            Some(Marker::EncodedFlag) => {}
            None => buffer.push_lowercase(ch),
        }
    }

    buffer.into_string()
}

/// Output buffer for decoding, edited only at the tail.
///
/// Every operation is total: on a buffer shorter than an edit expects, the
/// edit clamps to what is actually there instead of panicking.
#[derive(Debug, Default)]
pub struct ReconstructionBuffer {
    chars: Vec<char>,
}

impl ReconstructionBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Appends the lowercase form of a character.
    pub fn push_lowercase(&mut self, ch: char) {
        self.chars.extend(ch.to_lowercase());
    }

    /// Overwrites the last character with the letter a substitution hid.
    pub fn restore_last(&mut self, original: char) {
        if let Some(last) = self.chars.last_mut() {
            *last = original;
        }
    }

    /// Removes the surviving duplicate of a doubled character.
    pub fn collapse_double(&mut self) {
        if self.chars.len() >= 2 {
            self.chars.remove(self.chars.len() - 2);
        }
    }

    /// Collapses a quadrupled trailing character back to one.
    pub fn collapse_stretch(&mut self) {
        if self.chars.is_empty() {
            return;
        }
        let end = self.chars.len() - 1;
        let start = end.saturating_sub(3);
        self.chars.drain(start..end);
    }

    /// Strips the longest known suffix the buffer currently ends with.
    ///
    /// Matches against the richest suffix pool, which covers every suffix
    /// any strength level can emit. A miss strips nothing.
    pub fn strip_suffix(&mut self) {
        let text: String = self.chars.iter().collect();
        let matched = all_suffixes()
            .iter()
            .copied()
            .filter(|suffix| text.ends_with(suffix))
            .max_by_key(|suffix| suffix.len());

        if let Some(suffix) = matched {
            let keep = self.chars.len() - suffix.chars().count();
            self.chars.truncate(keep);
        }
    }

    /// Number of characters currently held.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the buffer holds nothing yet.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Joins the buffer into the reconstructed string.
    pub fn into_string(self) -> String {
        self.chars.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode_with_rng;
    use crate::marker::Marker;
    use crate::strength::StrengthProfile;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_decode_plain_text_lowercases() {
        assert_eq!(decode("Hello World"), "hello world");
        assert_eq!(decode(""), "");
    }

    #[test]
    fn test_decode_restores_substitutions() {
        let l = Marker::SubstitutedL.character();
        let r = Marker::SubstitutedR.character();

        assert_eq!(decode(&format!("w{l}")), "l");
        assert_eq!(decode(&format!("w{r}")), "r");
        // Case is not recovered, uppercase substitutions come back lowercase
        assert_eq!(decode(&format!("W{l}")), "l");
        assert_eq!(decode(&format!("hew{l}w{l}o wow{r}ld")), "hello world");
    }

    #[test]
    fn test_decode_collapses_doubles() {
        let d = Marker::DoubledLetter.character();
        assert_eq!(decode(&format!("aa{d}")), "a");
        assert_eq!(decode(&format!("caa{d}ts")), "cats");
    }

    #[test]
    fn test_decode_double_removes_exactly_one_char() {
        let d = Marker::DoubledLetter.character();
        let input = format!("helloo{d}");
        let plain_len = "helloo".chars().count();
        assert_eq!(decode(&input).chars().count(), plain_len - 1);
    }

    #[test]
    fn test_decode_collapses_stretch() {
        let s = Marker::StretchedFinal.character();
        assert_eq!(decode(&format!("hiiii{s}")), "hi");
        assert_eq!(decode(&format!("meowwww{s}")), "meow");
    }

    #[test]
    fn test_decode_strips_suffix_at_boundary() {
        let b = Marker::SuffixBoundary.character();
        let f = Marker::EncodedFlag.character();

        assert_eq!(decode(&format!("hello meow~{b}{f}")), "hello");
        assert_eq!(decode(&format!("hello :3{b}{f}")), "hello");
        assert_eq!(decode(&format!("hello~{b}{f}")), "hello");
    }

    #[test]
    fn test_decode_prefers_longest_suffix() {
        // " meow~" and "~" both match; the longer one must win so the
        // visible text is not left holding " meow"
        let b = Marker::SuffixBoundary.character();
        assert_eq!(decode(&format!("hey meow~{b}")), "hey");
    }

    #[test]
    fn test_decode_suffix_miss_strips_nothing() {
        let b = Marker::SuffixBoundary.character();
        assert_eq!(decode(&format!("hello{b}")), "hello");
    }

    #[test]
    fn test_decode_flag_is_silent() {
        let f = Marker::EncodedFlag.character();
        assert_eq!(decode(&format!("abc{f}")), "abc");
    }

    #[test]
    fn test_decode_malformed_markers_never_panic() {
        let all_markers: String = Marker::ALL.iter().map(|m| m.character()).collect();
        assert_eq!(decode(&all_markers), "");

        let d = Marker::DoubledLetter.character();
        let s = Marker::StretchedFinal.character();
        // Edits against a too-short buffer clamp instead of failing
        assert_eq!(decode(&format!("a{d}")), "a");
        assert_eq!(decode(&format!("ab{s}")), "b");
        assert_eq!(decode(&format!("a{s}")), "a");
    }

    #[test]
    fn test_roundtrip_without_transformations() {
        let profile = StrengthProfile {
            substitution_probability: 0.0,
            double_letter_probability: 0.0,
            final_stretch_probability: 0.0,
            suffixes: &["~"],
        };
        let mut rng = ChaCha20Rng::seed_from_u64(1);

        let encoded = encode_with_rng("Hello Roll", &profile, &mut rng);
        assert_eq!(decode(&encoded), "hello roll");
    }

    #[test]
    fn test_roundtrip_with_every_rule_forced() {
        let forced = StrengthProfile {
            substitution_probability: 1.0,
            double_letter_probability: 1.0,
            final_stretch_probability: 1.0,
            suffixes: &[" meow~"],
        };
        let mut rng = ChaCha20Rng::seed_from_u64(2);

        // l/r substitute before doubling or stretching can claim them,
        // the lone "o" doubles, and every marker must undo its edit
        let encoded = encode_with_rng("roll", &forced, &mut rng);
        assert_eq!(decode(&encoded), "roll");
    }

    #[test]
    fn test_buffer_operations_clamp_on_short_buffers() {
        let mut buffer = ReconstructionBuffer::new();
        buffer.restore_last('l');
        buffer.collapse_double();
        buffer.collapse_stretch();
        buffer.strip_suffix();
        assert!(buffer.is_empty());

        buffer.push_lowercase('A');
        assert_eq!(buffer.len(), 1);
        buffer.collapse_double();
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.into_string(), "a");
    }
}
