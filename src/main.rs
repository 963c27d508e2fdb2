//! jstyle CLI entry point.

use clap::Parser;
use jstyle::cli::{self, Cli, Commands, EXIT_ERROR, EXIT_SUCCESS};

fn main() {
    jstyle::init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check(args) => match cli::run_check(&args) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_ERROR
            }
        },
        Commands::Rules => {
            cli::run_rules();
            EXIT_SUCCESS
        }
    };

    std::process::exit(exit_code);
}
