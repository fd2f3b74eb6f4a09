//! # Kittenspeak - reversible cutesy text transformer
//!
//! Kittenspeak rewrites outgoing text into a randomized, cutesy variant and
//! can reconstruct a best-effort original later, with no storage beyond the
//! message itself.
//!
//! ## Overview
//!
//! The transformed text carries its own undo log:
//! - Each probabilistic edit (l/r to "w" substitution, letter doubling,
//!   final-letter stretching) appends an **invisible marker** character
//! - A random **suffix** from the strength level's pool is appended, closed
//!   by a suffix-boundary marker
//! - A trailing **encoded flag** identifies the text as transformed
//! - The decoder replays markers as tail edits and **never fails**, for any
//!   input
//! - Casing is intentionally lossy: reconstruction comes back lowercase
//!
//! Revealing a message parks its encoded text in a RAM-only cache so a
//! second toggle restores it verbatim. Nothing persists across sessions
//! except the user's settings file.
//!
//! ## Example Usage
//!
//! ```rust
//! use kittenspeak::{decode, encode_seeded, is_encoded};
//!
//! // Seeded for a reproducible example; `encode` draws fresh randomness
//! let encoded = encode_seeded("hello roll", 3, 7);
//! assert!(is_encoded(&encoded));
//!
//! // Best-effort original: lowercase, with every marked edit undone
//! let restored = decode(&encoded);
//! assert_eq!(restored, "hello roll");
//! ```
//!
//! ## Modules
//!
//! - [`marker`]: the six invisible marker characters and recognition
//! - [`strength`]: the five strength profiles (probabilities + suffixes)
//! - [`encoder`]: probabilistic stylization (random, seeded, injected RNG)
//! - [`decoder`]: marker-driven reconstruction (never fails)
//! - [`reveal`]: ephemeral original-text cache behind the reveal toggle
//! - [`settings`]: persisted user settings (TOML under the home directory)
//! - [`session`]: per-session owner of settings, cache, and the send gate

pub mod decoder;
pub mod encoder;
pub mod marker;
pub mod reveal;
pub mod session;
pub mod settings;
pub mod strength;

// Re-export commonly used items at the crate root
pub use decoder::{decode, ReconstructionBuffer};
pub use encoder::{encode, encode_seeded, encode_with_rng};
pub use marker::{is_encoded, is_marker, Marker};
pub use reveal::{MessageId, RevealCache, HIDE_LABEL, SHOW_LABEL};
pub use session::{RevealView, Session};
pub use settings::{Settings, SettingsError};
pub use strength::{for_level, StrengthProfile, MAX_STRENGTH, MIN_STRENGTH};
