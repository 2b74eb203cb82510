//! srcdoc CLI entry point.

use clap::Parser;
use colored::Colorize;
use srcdoc::cli::{self, Cli, Commands, EXIT_ERROR};

fn main() {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Report(args) => cli::run_report(args),
        Commands::Outline(args) => cli::run_outline(args),
        Commands::Styles => cli::run_styles(),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
