//! Migramend CLI - self-healing wrapper around a Django-style migration tool

use clap::Parser;

mod cli;
mod commands;
mod context;

use cli::Cli;
use commands::common::ExitCode;
use commands::{apply, fake, repair};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        cli::Commands::Repair(args) => repair::execute(args, &cli.global).await,
        cli::Commands::Apply(args) => apply::execute(args, &cli.global).await,
        cli::Commands::Fake(args) => fake::execute(args, &cli.global).await,
    };

    if let Err(err) = result {
        // Structured ExitCode failures have already printed their
        // diagnostics; everything else is surfaced here.
        match err.downcast_ref::<ExitCode>() {
            Some(code) => std::process::exit(code.0),
            None => {
                eprintln!("Error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}
