// transmux-cli/src/main.rs
//
// Binary entry point: initializes logging, parses arguments, and delegates
// to the library's run function. Exits non-zero on setup failure.

use clap::Parser;
use std::process;

use transmux_cli::cli::Cli;
use transmux_cli::terminal;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let args = Cli::parse();

    if let Err(e) = transmux_cli::run(args) {
        terminal::print_error(&e.to_string());
        process::exit(1);
    }
}
