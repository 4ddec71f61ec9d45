use clap::Parser;
use numwords::common::logging;
use numwords::shell::{run_cli, Cli};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run_cli(cli) {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}
