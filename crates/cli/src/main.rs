//! # edital: internship notice drafting from the command line
//!
//! This is the main entry point for the `edital` command-line interface.

mod config;
mod form;
mod handlers;

use clap::{Parser, Subcommand};
use handlers::{ExtractArgs, GenerateArgs, PromptArgs};
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a YAML configuration file [default: ./edital.yml when present]
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Draft an internship selection notice with the configured AI provider
    Generate(GenerateArgs),
    /// Extract and show the text of reference documents
    Extract(ExtractArgs),
    /// Print the prompt that `generate` would send, without calling the AI
    Prompt(PromptArgs),
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let subscriber = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {e}");
    }

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Generate(args) => match config::get_config(cli.config.as_deref()) {
            Ok(app_config) => handlers::handle_generate(args, &app_config)
                .await
                .map_err(|e| ("Generation", e)),
            Err(e) => Err(("Configuration", e.into())),
        },
        Commands::Extract(args) => handlers::handle_extract(args)
            .await
            .map_err(|e| ("Extraction", e)),
        Commands::Prompt(args) => handlers::handle_prompt(args)
            .await
            .map_err(|e| ("Prompt", e)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err((action, e)) => {
            eprintln!("{action} failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}
