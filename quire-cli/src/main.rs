//! Quire command-line entry point

use clap::Parser;
use quire_cli::commands::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
