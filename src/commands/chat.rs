//! Chat command - interactive loop driving the full encode/reveal flow.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use kittenspeak::session::Session;
use kittenspeak::settings::Settings;

use super::CommandExecutor;

/// Interactive chat session.
///
/// Plain lines are sent as outgoing messages and displayed in their
/// stylized form. Lines starting with `/` are commands; `/help` lists
/// them. Settings changes made during the session are saved on exit.
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Settings file to use (defaults to ~/.kittenspeak/settings.toml)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Seed for reproducible encoding
    #[arg(long)]
    pub seed: Option<u64>,
}

impl CommandExecutor for ChatCommand {
    fn execute(&self) -> Result<()> {
        let settings = match &self.settings {
            Some(path) => Settings::load_from(path).context("Failed to load settings")?,
            None => Settings::load().context("Failed to load settings")?,
        };

        let mut session = match self.seed {
            Some(seed) => Session::seeded(settings, seed),
            None => Session::new(settings),
        };

        // Displayed transcript: reveal toggles swap entries in place.
        let mut messages: Vec<String> = Vec::new();

        println!(
            "kittenspeak chat (strength {}, /help for commands)",
            session.settings().strength
        );

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        loop {
            print!("> ");
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(command) = line.strip_prefix('/') {
                if run_command(command, &mut session, &mut messages)? {
                    break;
                }
                continue;
            }

            let sent = session.process_outgoing(line);
            println!("[{}] {}", messages.len(), sent);
            messages.push(sent);
        }

        session.shutdown();
        match &self.settings {
            Some(path) => session
                .settings()
                .save_to(path)
                .context("Failed to save settings")?,
            None => session
                .settings()
                .save()
                .context("Failed to save settings")?,
        }

        Ok(())
    }
}

/// Executes one slash command. Returns true when the loop should exit.
fn run_command(command: &str, session: &mut Session, messages: &mut [String]) -> Result<bool> {
    let mut parts = command.split_whitespace();
    match parts.next().unwrap_or("") {
        "reveal" => {
            let id: usize = match parts.next().and_then(|arg| arg.parse().ok()) {
                Some(id) => id,
                None => {
                    println!("Usage: /reveal <id>");
                    return Ok(false);
                }
            };
            if id >= messages.len() {
                println!("No message with id {}", id);
                return Ok(false);
            }
            match session.toggle_reveal(id as u64, &messages[id]) {
                Some(view) => {
                    messages[id] = view.content;
                    println!("[{}] {}", id, messages[id]);
                }
                None => println!("Message {} is not encoded", id),
            }
        }
        "strength" => match parts.next().and_then(|arg| arg.parse().ok()) {
            Some(level) => match session.set_strength(level) {
                Ok(()) => println!("Strength set to {}", level),
                Err(e) => println!("{}", e),
            },
            None => println!(
                "Strength is {} (usage: /strength <1-5>)",
                session.settings().strength
            ),
        },
        "toggle" => {
            let enabled = session.toggle_enabled();
            println!(
                "Encoding {}",
                if enabled { "enabled" } else { "disabled" }
            );
        }
        "list" => {
            if messages.is_empty() {
                println!("No messages yet");
            }
            for (id, content) in messages.iter().enumerate() {
                println!("[{}] {} ({})", id, content, session.reveal_label(id as u64));
            }
        }
        "help" => {
            println!("Commands:");
            println!("  /reveal <id>     toggle a message between stylized and original");
            println!("  /strength [1-5]  show or set encoding strength");
            println!("  /toggle          enable or disable encoding");
            println!("  /list            show the transcript with reveal labels");
            println!("  /quit            exit (settings are saved)");
        }
        "quit" | "exit" => return Ok(true),
        other => println!("Unknown command: /{} (try /help)", other),
    }
    Ok(false)
}
