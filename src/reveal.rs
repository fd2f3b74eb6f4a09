//! Ephemeral storage of encoded originals for the reveal toggle.
//!
//! When the user reveals an encoded message, its encoded text is parked
//! here so a second toggle can restore it verbatim, with no re-encoding
//! and no persistence. An entry exists exactly while its message is shown
//! in decoded form, and the whole cache is dropped at session end.

use std::collections::HashMap;

use crate::decoder::decode;

/// Stable identifier of a message within the host surface.
pub type MessageId = u64;

/// Toggle label offered while a message shows its encoded form.
pub const SHOW_LABEL: &str = "Show Original Message";

/// Toggle label offered while a message shows its decoded form.
pub const HIDE_LABEL: &str = "Hide Original Message";

/// RAM-only map from message id to the encoded text it is hiding.
#[derive(Debug, Default)]
pub struct RevealCache {
    originals: HashMap<MessageId, String>,
}

impl RevealCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            originals: HashMap::new(),
        }
    }

    /// Reveals a message: parks its encoded text and returns the decoded
    /// form to display.
    ///
    /// Returns `None` if the message is already revealed; the stored
    /// original is never overwritten by a repeated reveal.
    pub fn reveal(&mut self, id: MessageId, encoded: &str) -> Option<String> {
        if self.originals.contains_key(&id) {
            return None;
        }
        self.originals.insert(id, encoded.to_string());
        Some(decode(encoded))
    }

    /// Hides a message again: removes its entry and returns the parked
    /// encoded text, verbatim.
    ///
    /// Returns `None` if the message was not revealed.
    pub fn hide(&mut self, id: MessageId) -> Option<String> {
        self.originals.remove(&id)
    }

    /// Whether the message currently shows its decoded form.
    pub fn is_revealed(&self, id: MessageId) -> bool {
        self.originals.contains_key(&id)
    }

    /// The toggle label for a message, a pure function of membership.
    pub fn action_label(&self, id: MessageId) -> &'static str {
        if self.is_revealed(id) {
            HIDE_LABEL
        } else {
            SHOW_LABEL
        }
    }

    /// Number of currently revealed messages.
    pub fn len(&self) -> usize {
        self.originals.len()
    }

    /// Whether no message is revealed.
    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }

    /// Drops every parked original.
    pub fn clear(&mut self) {
        self.originals.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode_seeded;

    #[test]
    fn test_reveal_then_hide_restores_exact_original() {
        let encoded = encode_seeded("hello world", 5, 11);
        let mut cache = RevealCache::new();

        let decoded = cache.reveal(1, &encoded).unwrap();
        assert_ne!(decoded, encoded);

        let restored = cache.hide(1).unwrap();
        assert_eq!(restored, encoded);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_second_reveal_is_rejected() {
        let mut cache = RevealCache::new();
        assert!(cache.reveal(1, "some text").is_some());
        assert!(cache.reveal(1, "other text").is_none());

        // The first original survives the rejected attempt
        assert_eq!(cache.hide(1).unwrap(), "some text");
    }

    #[test]
    fn test_hide_without_reveal_returns_none() {
        let mut cache = RevealCache::new();
        assert!(cache.hide(42).is_none());
    }

    #[test]
    fn test_action_label_follows_membership() {
        let mut cache = RevealCache::new();
        assert_eq!(cache.action_label(1), SHOW_LABEL);

        cache.reveal(1, "text");
        assert_eq!(cache.action_label(1), HIDE_LABEL);
        assert_eq!(cache.action_label(2), SHOW_LABEL);

        cache.hide(1);
        assert_eq!(cache.action_label(1), SHOW_LABEL);
    }

    #[test]
    fn test_messages_toggle_independently() {
        let mut cache = RevealCache::new();
        cache.reveal(1, "first");
        cache.reveal(2, "second");
        assert_eq!(cache.len(), 2);

        cache.hide(1);
        assert!(!cache.is_revealed(1));
        assert!(cache.is_revealed(2));
        assert_eq!(cache.hide(2).unwrap(), "second");
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut cache = RevealCache::new();
        cache.reveal(1, "first");
        cache.reveal(2, "second");

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.hide(1).is_none());
        assert!(cache.hide(2).is_none());
    }
}
