//! Session state tying settings and the reveal cache together.
//!
//! The `Session` struct owns everything with a per-session lifecycle: the
//! user's settings, the reveal cache, and optionally a seeded RNG for
//! reproducible transcripts. The host surface routes every outgoing
//! message and every reveal toggle through it; `shutdown` ends the
//! session by dropping all parked originals.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::encoder::encode_with_rng;
use crate::marker::{is_encoded, Marker};
use crate::reveal::{MessageId, RevealCache};
use crate::settings::{Settings, SettingsError};
use crate::strength::for_level;

/// Display state handed back by a reveal toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealView {
    /// Text the host should now display for the message.
    pub content: String,

    /// Whether the message is now showing its decoded form.
    pub revealed: bool,
}

/// State for one host session.
pub struct Session {
    settings: Settings,
    reveals: RevealCache,
    /// Present only in seeded sessions; otherwise the thread RNG is used.
    rng: Option<ChaCha20Rng>,
}

impl Session {
    /// Creates a session with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            reveals: RevealCache::new(),
            rng: None,
        }
    }

    /// Creates a session whose outgoing encoding is seeded.
    ///
    /// Useful for reproducible transcripts; the reveal side is unaffected,
    /// decoding never draws randomness.
    pub fn seeded(settings: Settings, seed: u64) -> Self {
        Self {
            settings,
            reveals: RevealCache::new(),
            rng: Some(ChaCha20Rng::seed_from_u64(seed)),
        }
    }

    /// Runs an outgoing message through the send gate.
    ///
    /// Encodes at the configured strength when transformation is enabled
    /// and the content is non-empty; otherwise the content passes through
    /// untouched.
    pub fn process_outgoing(&mut self, content: &str) -> String {
        if !self.settings.enabled || content.is_empty() {
            return content.to_string();
        }

        let profile = for_level(self.settings.strength);
        match &mut self.rng {
            Some(rng) => encode_with_rng(content, profile, rng),
            None => encode_with_rng(content, profile, &mut rand::thread_rng()),
        }
    }

    /// Toggles a message between encoded and decoded display.
    ///
    /// Returns `None` for messages that are neither encoded nor currently
    /// revealed; the host renders no toggle control for those. A revealed
    /// message keeps the encoded flag at its end, so it stays recognizable
    /// and the toggle stays available.
    pub fn toggle_reveal(&mut self, id: MessageId, current: &str) -> Option<RevealView> {
        if self.reveals.is_revealed(id) {
            let original = self
                .reveals
                .hide(id)
                .expect("revealed entries are always cached");
            return Some(RevealView {
                content: original,
                revealed: false,
            });
        }

        if !is_encoded(current) {
            return None;
        }

        let mut content = self
            .reveals
            .reveal(id, current)
            .expect("message was not yet revealed");
        content.push(Marker::EncodedFlag.character());

        Some(RevealView {
            content,
            revealed: true,
        })
    }

    /// The toggle label for a message.
    pub fn reveal_label(&self, id: MessageId) -> &'static str {
        self.reveals.action_label(id)
    }

    /// Whether the message currently shows its decoded form.
    pub fn is_revealed(&self, id: MessageId) -> bool {
        self.reveals.is_revealed(id)
    }

    /// Number of currently revealed messages.
    pub fn revealed_count(&self) -> usize {
        self.reveals.len()
    }

    /// Read access to the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Updates the strength level, rejecting out-of-range values.
    pub fn set_strength(&mut self, level: u8) -> Result<(), SettingsError> {
        self.settings.set_strength(level)
    }

    /// Switches transformation of outgoing messages on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.settings.enabled = enabled;
    }

    /// Flips the transformation switch and returns the new state.
    pub fn toggle_enabled(&mut self) -> bool {
        self.settings.enabled = !self.settings.enabled;
        self.settings.enabled
    }

    /// Ends the session: every parked original is dropped.
    pub fn shutdown(&mut self) {
        self.reveals.clear();
    }
}
