//! # Healthbot Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `healthbot` binary.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Examples
//!
//! ```bash
//! # Chat interactively (the default command)
//! healthbot
//!
//! # One-shot question with debug logging
//! healthbot -vv ask "I have a sore throat"
//!
//! # Validate a custom dataset
//! healthbot --dataset ./health_dataset.json check
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "healthbot",
    about = "Keyword-matching health Q&A chat",
    long_about = "Answers health questions by matching keywords against a predefined\n\
                  knowledge base. Not a substitute for professional medical advice.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// JSON dataset to load instead of the configured or built-in one.
    #[arg(long, global = true, env = "HEALTHBOT_DATASET", value_name = "PATH")]
    dataset: Option<PathBuf>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Chat on stdin/stdout (default)
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Answer a single question and exit
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Load the dataset and print a summary
    Check(commands::check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let dataset = cli.dataset.as_deref();
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Chat(commands::chat::ChatArgs::default()));
    let command_result = match command {
        Commands::Chat(args) => commands::chat::handle_chat(args, dataset),
        Commands::Ask(args) => commands::ask::handle_ask(args, dataset),
        Commands::Check(args) => commands::check::handle_check(args, dataset),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
