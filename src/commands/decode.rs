//! Decode command - recover the original message from stylized text.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Args;

use kittenspeak::marker::{is_encoded, Marker};
use kittenspeak::decode;

use super::CommandExecutor;

/// Decode stylized text back to the original message.
///
/// Decoding never fails: unrecognized text passes through lowercased,
/// and stray markers degrade to no-ops. With no text argument the
/// message is read from stdin.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// Text to decode (reads from stdin if omitted)
    pub text: Option<String>,

    /// Show decoding details
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for DecodeCommand {
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

        if self.verbose {
            let markers = text.chars().filter(|&c| Marker::from_char(c).is_some()).count();
            if is_encoded(&text) {
                eprintln!("Recognized encoded text ({} markers)", markers);
            } else {
                eprintln!("Text is not flagged as encoded ({} markers)", markers);
            }
        }

        println!("{}", decode(&text));

        Ok(())
    }
}
