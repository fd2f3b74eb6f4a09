//! Kittenspeak - reversible cutesy text transformer
//!
//! A CLI tool for stylizing messages with losslessly-reversible edits.
//! Invisible markers record every change, so decoding recovers the
//! original text without side channels or stored state.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{
    ChatCommand, CommandExecutor, ConfigCommand, DecodeCommand, EncodeCommand, InspectCommand,
};

/// Kittenspeak - reversible cutesy text transformer
///
/// Stylizes text with probabilistic letter substitutions, doublings,
/// stretches, and suffixes. Every edit embeds an invisible marker, so
/// the original message can always be recovered.
#[derive(Parser)]
#[command(name = "kittenspeak")]
#[command(version = "0.1.0")]
#[command(about = "Reversible cutesy text transformer with invisible-marker decoding")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a message into its stylized form
    ///
    /// Strength 1-5 controls how aggressive the edits are. The output
    /// carries invisible markers and always decodes back to the
    /// original (lowercased) message.
    Encode(EncodeCommand),

    /// Decode stylized text back to the original message
    ///
    /// Never fails: text without markers passes through lowercased.
    Decode(DecodeCommand),

    /// Inspect stylized text: flag, marker counts, suffix, decoded form
    Inspect(InspectCommand),

    /// Start an interactive chat session with reveal toggling
    Chat(ChatCommand),

    /// Show or update persisted settings
    Config(ConfigCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(cmd) => cmd.execute(),
        Commands::Decode(cmd) => cmd.execute(),
        Commands::Inspect(cmd) => cmd.execute(),
        Commands::Chat(cmd) => cmd.execute(),
        Commands::Config(cmd) => cmd.execute(),
    }
}
