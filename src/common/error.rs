use thiserror::Error;

/// Failure raised by the parser for a single token.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("Non-numeric character in input.")]
    InvalidCharacter,

    #[error("Number can not be stored in a 32 bit integer.")]
    RangeOverflow,
}

/// Failure for one token slot as reported by the shell.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    #[error("No number for the given line.")]
    MissingInput,

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingInput,
    InvalidCharacter,
    RangeOverflow,
}

impl LineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LineError::MissingInput => ErrorKind::MissingInput,
            LineError::Parse(ParseError::InvalidCharacter) => ErrorKind::InvalidCharacter,
            LineError::Parse(ParseError::RangeOverflow) => ErrorKind::RangeOverflow,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::MissingInput => write!(f, "MISSING_INPUT"),
            ErrorKind::InvalidCharacter => write!(f, "INVALID_CHARACTER"),
            ErrorKind::RangeOverflow => write!(f, "RANGE_OVERFLOW"),
        }
    }
}

/// Fatal problems of the command-line shell. These end the run.
#[derive(Error, Debug)]
pub enum NumwordsError {
    #[error("Invalid argument for n, must be a positive integer between 1 and {max}.")]
    InvalidCount { max: usize },

    #[error("Problem reading from standard input.")]
    Stdin(#[source] std::io::Error),

    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

pub type Result<T> = std::result::Result<T, NumwordsError>;
