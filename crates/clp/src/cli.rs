//! Command line interface
//!
//! `clp serve` runs the HTTP API (the default); `clp explain` explains a
//! file or standard input from the terminal.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use clap::{Args, Parser, Subcommand};
use clp_application::ports::services::ExplanationRequest;
use clp_infrastructure::config::RemoteProviderKind;
use clp_infrastructure::di::init_app;
use clp_server::init::load_config;

/// Command line interface for the Code Learning Platform
#[derive(Parser, Debug)]
#[command(name = "clp")]
#[command(about = "Code Learning Platform - beginner-friendly code explanations")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve,
    /// Explain a source file, or standard input when no file is given
    Explain(ExplainArgs),
}

/// Arguments of `clp explain`
#[derive(Args, Debug, Clone)]
pub struct ExplainArgs {
    /// Language of the code (e.g. python, c++, react)
    #[arg(short, long)]
    pub language: String,

    /// Skip the remote model and use local analysis only
    #[arg(long)]
    pub offline: bool,

    /// Print the full response object as JSON
    #[arg(long)]
    pub json: bool,

    /// Source file to explain
    pub file: Option<PathBuf>,
}

/// Dispatch a parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        None | Some(Command::Serve) => clp_server::run_server(cli.config.as_deref())
            .await
            .map_err(|e| anyhow!(e)),
        Some(Command::Explain(args)) => {
            let code = read_source(args.file.as_deref())?;
            let output = explain(cli.config.as_deref(), &args, code).await?;
            println!("{output}");
            Ok(())
        }
    }
}

/// Explain `code` and format the result for the terminal
///
/// Validation failures become errors carrying the caller-facing message.
pub async fn explain(
    config_path: Option<&Path>,
    args: &ExplainArgs,
    code: String,
) -> anyhow::Result<String> {
    let mut config = load_config(config_path)?;
    if args.offline {
        config.remote.provider = RemoteProviderKind::None;
    }

    let context = init_app(config).await?;
    let mut request = ExplanationRequest::new(code, args.language.clone());
    if args.offline {
        request = request.offline();
    }

    let explanation = context
        .explanation_service()
        .explain(request)
        .await
        .map_err(|e| anyhow!(e.user_message()))?;

    if args.json {
        serde_json::to_string_pretty(&explanation).context("Failed to encode explanation")
    } else {
        Ok(explanation.explanation)
    }
}

/// Read the file, or all of standard input when `path` is `None`
pub fn read_source(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut code = String::new();
            std::io::stdin()
                .read_to_string(&mut code)
                .context("Failed to read standard input")?;
            Ok(code)
        }
    }
}
