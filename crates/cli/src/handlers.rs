//! # Command Handlers
//!
//! One handler per subcommand. Progress and diagnostics go to stderr so that
//! `--stdout` output stays clean.

use crate::config::AppConfig;
use crate::form::{FormArgs, ReferenceArgs};
use anyhow::{Context, Result};
use clap::Args;
use edital::prompts::render_edital_prompt;
use edital::EditalGenerator;
use std::path::{Path, PathBuf};
use tracing::info;

/// Characters of the context shown by `extract` without `--full`.
const PREVIEW_CHARS: usize = 500;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub form: FormArgs,
    #[command(flatten)]
    pub references: ReferenceArgs,
    /// Gemini API key for this run; overrides GEMINI_API_KEY and the config file
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,
    /// Where to write the draft [default: <output_dir>/edital_<area>_<unit>.md]
    #[arg(long, short = 'o', value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,
    /// Print the draft to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Reference documents to extract
    #[arg(
        long = "reference",
        short = 'r',
        value_name = "FILE",
        num_args = 1..,
        required = true
    )]
    pub files: Vec<PathBuf>,
    /// Print the whole extracted text instead of a preview
    #[arg(long)]
    pub full: bool,
}

#[derive(Args, Debug)]
pub struct PromptArgs {
    #[command(flatten)]
    pub form: FormArgs,
    #[command(flatten)]
    pub references: ReferenceArgs,
}

pub async fn handle_generate(args: &GenerateArgs, config: &AppConfig) -> Result<()> {
    let params = args.form.to_parameters()?;

    // Fail on a missing credential before reading any reference document.
    let generator = EditalGenerator::from_config(&config.ai, args.api_key.as_deref())?;
    info!(provider = %config.ai.provider, model = %config.ai.model_name, "Generator ready.");

    let context = args.references.load_context().await;

    eprintln!("Drafting the edital, this may take a few seconds...");
    let document = generator.generate(&params, &context).await?;
    let artifact = document.into_artifact(&params);

    if args.stdout {
        print!("{}", artifact.body);
        return Ok(());
    }

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| Path::new(&config.output_dir).join(&artifact.file_name));
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(&path, &artifact.body)
        .with_context(|| format!("Failed to write draft to '{}'", path.display()))?;

    println!("Draft saved to {} ({}).", path.display(), artifact.content_type);
    Ok(())
}

pub async fn handle_extract(args: &ExtractArgs) -> Result<()> {
    let references = ReferenceArgs {
        references: args.files.clone(),
    };
    let text = references.load_context().await.as_prompt_text();

    if args.full || text.chars().count() <= PREVIEW_CHARS {
        print!("{text}");
    } else {
        let preview: String = text.chars().take(PREVIEW_CHARS).collect();
        println!("{preview}...");
    }
    Ok(())
}

pub async fn handle_prompt(args: &PromptArgs) -> Result<()> {
    let params = args.form.to_parameters()?;
    let context = args.references.load_context().await;
    println!("{}", render_edital_prompt(&params, &context));
    Ok(())
}
