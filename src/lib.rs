// Library exports for the binary and for tests

pub mod common;
pub mod converter;
pub mod parser;
pub mod shell;

pub use common::{ErrorKind, LineError, ParseError};
pub use converter::convert;
pub use parser::{parse_integer, strip_leading_zeros};
