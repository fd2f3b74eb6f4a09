//! Encode command - stylize a message at a chosen strength.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Args;

use kittenspeak::marker::Marker;
use kittenspeak::settings::Settings;
use kittenspeak::strength::for_level;
use kittenspeak::{encode, encode_seeded};

use super::CommandExecutor;

/// Encode a message into its stylized form.
///
/// Every edit leaves an invisible marker behind, so the output stays
/// fully decodable. With no text argument the message is read from stdin.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Text to encode (reads from stdin if omitted)
    pub text: Option<String>,

    /// Strength level 1-5 (defaults to the saved settings value)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub strength: Option<u8>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Render invisible markers as visible tokens like <sub-l>
    #[arg(long)]
    pub show_markers: bool,

    /// Show encoding details
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        let text = match &self.text {
            Some(text) => text.clone(),
            None => {
                eprintln!("Reading text from stdin (Ctrl+D to finish):");
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read text from stdin")?;
                buffer.trim().to_string()
            }
        };

        let strength = match self.strength {
            Some(strength) => strength,
            None => {
                Settings::load()
                    .context("Failed to load settings")?
                    .strength
            }
        };

        if self.verbose {
            let profile = for_level(strength);
            eprintln!("Strength: {}", strength);
            eprintln!(
                "  Substitution: {}%",
                (profile.substitution_probability * 100.0).round()
            );
            eprintln!(
                "  Doubling: {}%",
                (profile.double_letter_probability * 100.0).round()
            );
            eprintln!(
                "  Final stretch: {}%",
                (profile.final_stretch_probability * 100.0).round()
            );
            eprintln!("  Suffix pool: {} entries", profile.suffixes.len());
        }

        let encoded = match self.seed {
            Some(seed) => encode_seeded(&text, strength, seed),
            None => encode(&text, strength),
        };

        if self.verbose {
            let markers = encoded.chars().filter(|&c| Marker::from_char(c).is_some()).count();
            eprintln!("Markers embedded: {}", markers);
        }

        if self.show_markers {
            println!("{}", escape_markers(&encoded));
        } else {
            println!("{}", encoded);
        }

        Ok(())
    }
}

/// Replaces each invisible marker with a visible token for inspection.
fn escape_markers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match Marker::from_char(ch) {
            Some(Marker::SubstitutedL) => out.push_str("<sub-l>"),
            Some(Marker::SubstitutedR) => out.push_str("<sub-r>"),
            Some(Marker::DoubledLetter) => out.push_str("<dbl>"),
            Some(Marker::StretchedFinal) => out.push_str("<stretch>"),
            Some(Marker::SuffixBoundary) => out.push_str("<sfx>"),
            Some(Marker::EncodedFlag) => out.push_str("<flag>"),
            None => out.push(ch),
        }
    }
    out
}
