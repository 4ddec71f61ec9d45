use crate::common::Config;
use crate::shell::commands::{self, Printer, NO_INPUT_MESSAGE};
use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser};
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "numwords")]
#[command(about = "Converts integers into English words", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Print help, then convert any integers that were given
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Number of integers to be read from standard input (ignored if integers are on the command line)
    #[arg(short = 'n', long = "count", allow_hyphen_values = true)]
    pub count: Option<String>,

    /// Convert lines typed into an interactive prompt
    #[arg(short, long)]
    pub interactive: bool,

    /// Increase diagnostic output on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Integers to convert
    #[arg(allow_hyphen_values = true, allow_negative_numbers = true)]
    pub integers: Vec<String>,
}

/// Where the tokens for this run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    Arguments(Vec<String>),
    Stdin(usize),
    Interactive,
    Nothing,
}

impl Cli {
    /// Positional integers win over `--count`, which wins over `--interactive`.
    pub fn token_source(&self, config: &Config) -> crate::common::error::Result<TokenSource> {
        if !self.integers.is_empty() {
            if self.count.is_some() {
                debug!("integers on the command line, ignoring --count");
            }
            return Ok(TokenSource::Arguments(self.integers.clone()));
        }

        if let Some(raw) = &self.count {
            let count = commands::validate_count(raw, config.input.max_count)?;
            return Ok(TokenSource::Stdin(count));
        }

        if self.interactive {
            return Ok(TokenSource::Interactive);
        }

        Ok(TokenSource::Nothing)
    }

    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Config::load_default(),
        }
    }
}

pub fn run_cli(cli: Cli) -> Result<()> {
    let config = cli.load_config()?;
    let printer = Printer::new(&config.output);

    if cli.help {
        let help = Cli::command().render_help().to_string();
        println!("{}", help.trim_end());
    }

    match cli.token_source(&config)? {
        TokenSource::Arguments(integers) => {
            info!(count = integers.len(), "converting command line integers");
            printer.print_all(integers.iter().map(|i| Some(i.as_str())));
        }

        TokenSource::Stdin(count) => {
            info!(count, "reading integers from standard input");
            let tokens = commands::read_tokens(io::stdin().lock(), count)?;
            printer.print_all(tokens);
        }

        TokenSource::Interactive => {
            crate::shell::repl::run_repl(&config, &printer)?;
        }

        // Help on its own is a complete run
        TokenSource::Nothing if cli.help => {}

        TokenSource::Nothing => {
            println!("{}", NO_INPUT_MESSAGE);
        }
    }

    Ok(())
}
