use crate::common::config::OutputConfig;
use crate::common::error::{NumwordsError, Result};
use crate::common::LineError;
use crate::{converter, parser};
use colored::*;
use std::io::{self, BufRead, IsTerminal};
use tracing::{debug, warn};

pub const NO_INPUT_MESSAGE: &str = "No integers specified to be converted to English.";

/// Convert one token slot. `None` means the slot had no input at all.
pub fn convert_token(token: Option<&str>) -> std::result::Result<String, LineError> {
    let text = token.ok_or(LineError::MissingInput)?;
    let value = parser::parse_integer(text)?;
    Ok(converter::convert(value))
}

/// Read `count` lines. Slots past the end of input are `None`.
///
/// Bytes that are not valid UTF-8 are replaced, so such a line still yields
/// a token and fails on its own.
pub fn read_tokens<R: BufRead>(mut reader: R, count: usize) -> Result<Vec<Option<String>>> {
    let mut tokens = Vec::with_capacity(count);
    let mut buf = Vec::new();

    for _ in 0..count {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(NumwordsError::Stdin)?;
        if read == 0 {
            tokens.push(None);
            continue;
        }

        let line = buf
            .strip_suffix(b"\n")
            .map(|l| l.strip_suffix(b"\r").unwrap_or(l))
            .unwrap_or(&buf[..]);
        tokens.push(Some(String::from_utf8_lossy(line).into_owned()));
    }

    let missing = tokens.iter().filter(|t| t.is_none()).count();
    if missing > 0 {
        warn!(requested = count, missing, "input ended before all lines were read");
    }

    Ok(tokens)
}

/// Check the raw `--count` value against `1..=max`.
pub fn validate_count(raw: &str, max: usize) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(count) if (1..=max).contains(&count) => Ok(count),
        _ => Err(NumwordsError::InvalidCount { max }),
    }
}

/// Formats result lines, the words or `Error: <message>`.
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new(config: &OutputConfig) -> Self {
        let printer = if config.color && io::stdout().is_terminal() {
            Printer { color: true }
        } else {
            Printer::plain()
        };
        debug!(color = printer.color, "output printer ready");
        printer
    }

    pub fn plain() -> Self {
        Printer { color: false }
    }

    /// The output line for one token slot.
    pub fn line(&self, token: Option<&str>) -> String {
        match convert_token(token) {
            Ok(words) => words,
            Err(e) => {
                debug!(kind = %e.kind(), "token rejected");
                if self.color {
                    format!("{} {}", "Error:".red().bold(), e)
                } else {
                    format!("Error: {}", e)
                }
            }
        }
    }

    /// One line per token. A bad token never stops the ones after it.
    pub fn lines<I, S>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .map(|token| self.line(token.as_ref().map(S::as_ref)))
            .collect()
    }

    pub fn print_all<I, S>(&self, tokens: I)
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        for line in self.lines(tokens) {
            println!("{}", line);
        }
    }
}
