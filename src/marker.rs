//! Invisible marker characters embedded in transformed text.
//!
//! Every edit the encoder makes is recorded inline by appending one of six
//! zero-width/invisible characters right after the edited output. None of
//! them occurs in ordinary typed text, so their presence is an unambiguous
//! signal and the decoder can replay them as edit instructions without any
//! escaping logic.

/// One reversible edit kind, identified by its invisible character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The preceding "w"/"W" replaced an "l"/"L".
    SubstitutedL,
    /// The preceding "w"/"W" replaced an "r"/"R".
    SubstitutedR,
    /// The preceding two characters are one source character, doubled.
    DoubledLetter,
    /// The preceding four characters are one source character, quadrupled.
    StretchedFinal,
    /// A decorative suffix ends here; everything back to its start is noise.
    SuffixBoundary,
    /// Terminal sentinel: the whole text is in encoded form.
    EncodedFlag,
}

impl Marker {
    /// All six markers, in encoder emission order.
    pub const ALL: [Marker; 6] = [
        Marker::SubstitutedL,
        Marker::SubstitutedR,
        Marker::DoubledLetter,
        Marker::StretchedFinal,
        Marker::SuffixBoundary,
        Marker::EncodedFlag,
    ];

    /// The invisible character carrying this marker.
    pub const fn character(self) -> char {
        match self {
            Marker::SubstitutedL => '\u{200B}',
            Marker::SubstitutedR => '\u{200C}',
            Marker::DoubledLetter => '\u{200D}',
            Marker::StretchedFinal => '\u{FEFF}',
            Marker::SuffixBoundary => '\u{2060}',
            Marker::EncodedFlag => '\u{2063}',
        }
    }

    /// Maps a character back to its marker, if it is one.
    pub fn from_char(ch: char) -> Option<Marker> {
        match ch {
            '\u{200B}' => Some(Marker::SubstitutedL),
            '\u{200C}' => Some(Marker::SubstitutedR),
            '\u{200D}' => Some(Marker::DoubledLetter),
            '\u{FEFF}' => Some(Marker::StretchedFinal),
            '\u{2060}' => Some(Marker::SuffixBoundary),
            '\u{2063}' => Some(Marker::EncodedFlag),
            _ => None,
        }
    }

    /// Human-readable name for diagnostics and inspection output.
    pub fn description(self) -> &'static str {
        match self {
            Marker::SubstitutedL => "substituted l",
            Marker::SubstitutedR => "substituted r",
            Marker::DoubledLetter => "doubled letter",
            Marker::StretchedFinal => "stretched final letter",
            Marker::SuffixBoundary => "suffix boundary",
            Marker::EncodedFlag => "encoded flag",
        }
    }
}

/// Returns true if the character is one of the six markers.
pub fn is_marker(ch: char) -> bool {
    Marker::from_char(ch).is_some()
}

/// Returns true if the text is in encoded form.
///
/// The trailing encoded-flag marker is the sole recognition signal; no
/// other inspection of the content is needed.
pub fn is_encoded(text: &str) -> bool {
    text.ends_with(Marker::EncodedFlag.character())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_are_distinct() {
        for (i, a) in Marker::ALL.iter().enumerate() {
            for b in &Marker::ALL[i + 1..] {
                assert_ne!(a.character(), b.character());
            }
        }
    }

    #[test]
    fn test_character_from_char_roundtrip() {
        for marker in Marker::ALL {
            assert_eq!(Marker::from_char(marker.character()), Some(marker));
        }
    }

    #[test]
    fn test_markers_never_occur_in_typed_text() {
        for marker in Marker::ALL {
            let ch = marker.character();
            assert!(!ch.is_ascii());
            assert!(!ch.is_alphanumeric());
            assert!(!ch.is_whitespace());
        }
    }

    #[test]
    fn test_ordinary_chars_are_not_markers() {
        for ch in "Hello, world! 123 ~:3".chars() {
            assert!(!is_marker(ch));
        }
    }

    #[test]
    fn test_is_encoded() {
        let flagged = format!("nya{}", Marker::EncodedFlag.character());
        assert!(is_encoded(&flagged));
        assert!(!is_encoded("nya"));
        assert!(!is_encoded(""));
        // Flag anywhere but the end does not count
        let inner = format!("ny{}a", Marker::EncodedFlag.character());
        assert!(!is_encoded(&inner));
    }
}
