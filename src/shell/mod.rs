pub mod cli;
pub mod commands;
pub mod repl;

pub use cli::{run_cli, Cli};
pub use commands::{convert_token, read_tokens, Printer};
