//! Inspect command - report the invisible structure of stylized text.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Args;

use kittenspeak::decode;
use kittenspeak::marker::{is_encoded, is_marker, Marker};
use kittenspeak::strength::all_suffixes;

use super::CommandExecutor;

/// Inspect stylized text: recognition flag, marker counts, and the
/// recovered original.
#[derive(Args, Debug)]
pub struct InspectCommand {
    /// Text to inspect (reads from stdin if omitted)
    pub text: Option<String>,
}

impl CommandExecutor for InspectCommand {
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

        println!("Encoded: {}", if is_encoded(&text) { "yes" } else { "no" });

        println!("Markers:");
        for marker in Marker::ALL {
            let count = text.chars().filter(|&c| c == marker.character()).count();
            println!("  {}: {}", marker.description(), count);
        }

        // Suffixes sit between the visible text and the boundary marker, so
        // match against the text with all markers stripped out.
        let visible: String = text.chars().filter(|&c| !is_marker(c)).collect();
        let suffix = all_suffixes()
            .iter()
            .copied()
            .filter(|s| visible.ends_with(s))
            .max_by_key(|s| s.len());
        match suffix {
            Some(suffix) => println!("Suffix: {:?}", suffix),
            None => println!("Suffix: none recognized"),
        }

        println!("Decoded: {}", decode(&text));

        Ok(())
    }
}
