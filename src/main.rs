use anyhow::Result;
use clap::{Parser, Subcommand};
use shipsafe_client::{
    app::{Action, App, resolve_use_llm},
    config, shell,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "shipsafe", about = "Client for the ShipSafe prediction and QA backend")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL, overrides the configuration
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify an image
    Predict {
        /// Image to upload
        file: Option<PathBuf>,
    },
    /// Ask a question about the indexed docs
    Ask {
        /// Let the backend answer with its language model
        #[arg(long, conflicts_with = "no_llm")]
        llm: bool,
        /// Answer from retrieved chunks only, even if the config enables the model
        #[arg(long)]
        no_llm: bool,
        /// Number of chunks to retrieve
        #[arg(long)]
        top_k: Option<u32>,
        question: Vec<String>,
    },
    /// Check that the backend is up
    Health,
    /// Interactive shell
    Shell,
}

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging setup)
    let mut config = match config::load(cli.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(base_url) = cli.base_url {
        config.backend.base_url = base_url;
    }
    if let Command::Ask {
        top_k: Some(top_k), ..
    } = &cli.command
    {
        config.qa.top_k = *top_k;
    }
    config.validate()?;

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Logs go to stderr, rendered results to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!("Starting ShipSafe client with log level: {}", log_level);

    let interactive = matches!(cli.command, Command::Shell);
    let app = App::from_config(&config, interactive)?;

    let action = match cli.command {
        Command::Predict { file } => Action::Predict(file),
        Command::Ask {
            llm,
            no_llm,
            question,
            ..
        } => Action::Ask {
            question: question.join(" "),
            use_llm: resolve_use_llm(llm, no_llm, config.qa.use_llm),
        },
        Command::Health => Action::Health,
        Command::Shell => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            shell::run(&app, stdin).await?;
            return Ok(());
        }
    };

    // The failure was already shown to the user; only the exit code is left
    if app.run(action).await.is_err() {
        std::process::exit(1);
    }

    Ok(())
}
