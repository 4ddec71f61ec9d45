use crate::common::{Config, NumwordsError};
use crate::shell::commands::Printer;
use anyhow::Result;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::{debug, warn};

const PROMPT: &str = "numwords> ";

/// What a single line typed at the prompt asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplAction<'a> {
    Skip,
    Help,
    Exit,
    Convert(&'a str),
}

pub fn classify_line(line: &str) -> ReplAction<'_> {
    match line.trim() {
        "" => ReplAction::Skip,
        "help" => ReplAction::Help,
        "exit" | "quit" => ReplAction::Exit,
        token => ReplAction::Convert(token),
    }
}

pub fn run_repl(config: &Config, printer: &Printer) -> Result<()> {
    println!("{}", "numwords interactive shell".bright_green().bold());
    println!("Type an integer to convert it, 'help' for help, 'exit' to quit\n");

    let mut rl = DefaultEditor::new().map_err(NumwordsError::from)?;

    let history_file = history_path(config);
    if let Some(ref path) = history_file {
        if let Err(e) = rl.load_history(path) {
            debug!(path = %path.display(), error = %e, "no history loaded");
        }
    }

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => match classify_line(&line) {
                ReplAction::Skip => continue,
                ReplAction::Help => show_help(),
                ReplAction::Exit => break,
                ReplAction::Convert(token) => {
                    let _ = rl.add_history_entry(token);
                    println!("{}", printer.line(Some(token)));
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("exit");
                break;
            }
            Err(err) => return Err(NumwordsError::from(err).into()),
        }
    }

    if let Some(ref path) = history_file {
        if let Err(e) = rl.save_history(path) {
            warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }

    println!("{}", "Goodbye!".bright_green());
    Ok(())
}

fn history_path(config: &Config) -> Option<PathBuf> {
    if !config.repl.history {
        return None;
    }
    dirs::home_dir().map(|h| h.join(".numwords-history"))
}

fn show_help() {
    println!("{}", "Available commands:".bold());
    println!("  <integer>   Convert a signed 32-bit integer to English words");
    println!("  help        Show this message");
    println!("  exit, quit  Leave the shell");
}
