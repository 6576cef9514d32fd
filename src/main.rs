// src/main.rs
mod config;
mod extractors;
mod session;
mod storage;
mod summarizer;
mod utils;

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;
use config::Settings;
use extractors::{HeadingMatch, SectionResult};
use session::Session;
use storage::DocumentStore;
use summarizer::OpenAiClient;
use utils::AppError;

/// Summarize a heading-bounded section of a markdown note
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the settings file (defaults to ./heading-summarizer.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Level of the heading whose section is summarized
    #[arg(long, global = true)]
    heading_level: Option<u8>,

    /// Name of the heading whose section is summarized
    #[arg(long, global = true)]
    heading_name: Option<String>,

    /// Level of the heading the summary is inserted under
    #[arg(long, global = true)]
    summary_level: Option<u8>,

    /// Name of the heading the summary is inserted under
    #[arg(long, global = true)]
    summary_name: Option<String>,

    /// How heading lines are matched
    #[arg(long = "match", value_enum, global = true)]
    heading_match: Option<HeadingMatch>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a settings file with defaults
    Init {
        /// API key to store in the settings file
        #[arg(long)]
        api_key: Option<String>,

        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
    /// Print the body of the configured section
    Extract {
        file: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report whether the configured heading is present
    Status {
        file: PathBuf,

        /// Keep re-checking the file and print the status when it changes
        #[arg(short, long)]
        watch: bool,

        /// Polling interval for --watch (defaults to poll_interval_ms from settings)
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Print the prompt that would be sent to the summarization API
    Prompt { file: PathBuf },
    /// Summarize the configured section and insert the summary under the summary heading
    Summarize {
        file: PathBuf,

        /// Print the updated document instead of writing it back
        #[arg(long)]
        dry_run: bool,
    },
}

impl Args {
    /// Command-line flags take precedence over the settings file.
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(level) = self.heading_level {
            settings.heading_level = level;
        }
        if let Some(name) = &self.heading_name {
            settings.heading_name = name.clone();
        }
        if let Some(level) = self.summary_level {
            settings.summary_level = level;
        }
        if let Some(name) = &self.summary_name {
            settings.summary_name = name.clone();
        }
        if let Some(mode) = self.heading_match {
            settings.heading_match = mode;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    if let Command::Init { api_key, force } = &args.command {
        return init_settings(&args, api_key.clone(), *force);
    }

    // 3. Snapshot settings and start the session
    let mut settings = Settings::load(args.config.as_deref())?;
    args.apply_overrides(&mut settings);
    let session = Session::init(settings)?;

    // 4. Run the command
    let outcome = run_command(&session, &args.command).await;
    session.shutdown();

    if let Err(e) = &outcome {
        tracing::error!("{}", e);
    }
    outcome
}

async fn run_command(session: &Session, command: &Command) -> Result<(), AppError> {
    match command {
        Command::Init { .. } => Ok(()),
        Command::Extract { file, json } => run_extract(session, file, *json),
        Command::Status { file, watch, interval_ms } => {
            if *watch {
                let interval = interval_ms.unwrap_or(session.settings().poll_interval_ms);
                watch_status(session, file, Duration::from_millis(interval.max(1))).await
            } else {
                let document = DocumentStore::new(file).read()?;
                println!("{}", session.status(document.as_deref()));
                Ok(())
            }
        }
        Command::Prompt { file } => {
            let document = read_document(file)?;
            println!("{}", session.prompt_preview(&document));
            Ok(())
        }
        Command::Summarize { file, dry_run } => run_summarize(session, file, *dry_run).await,
    }
}

fn init_settings(args: &Args, api_key: Option<String>, force: bool) -> Result<(), AppError> {
    let path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));

    let mut settings = Settings { api_key, ..Settings::default() };
    args.apply_overrides(&mut settings);
    settings.validate()?;

    if settings.api_key.is_none() {
        tracing::warn!(
            "No API key stored; set api_key in {} or export {}",
            path.display(),
            config::API_KEY_ENV
        );
    }

    let saved = storage::save_settings(&path, &settings, force)?;
    println!("Wrote settings to {}", saved.display());
    Ok(())
}

fn read_document(file: &Path) -> Result<String, AppError> {
    DocumentStore::new(file)
        .read()?
        .ok_or_else(|| AppError::Processing(format!("No such file: {}", file.display())))
}

/// JSON shape printed by `extract --json`.
#[derive(Serialize)]
struct ExtractOutput<'a> {
    file: String,
    heading_level: u8,
    heading_name: &'a str,
    #[serde(flatten)]
    result: &'a SectionResult,
    extracted_at: String,
}

fn run_extract(session: &Session, file: &Path, json: bool) -> Result<(), AppError> {
    let document = read_document(file)?;
    let result = session.extract(&document);

    if json {
        let output = ExtractOutput {
            file: file.display().to_string(),
            heading_level: session.heading().level(),
            heading_name: session.heading().name(),
            result: &result,
            extracted_at: chrono::Utc::now().to_rfc3339(),
        };
        let rendered = serde_json::to_string_pretty(&output)
            .map_err(|e| AppError::Processing(format!("Could not render JSON: {}", e)))?;
        println!("{}", rendered);
    } else if result.found {
        println!("{}", result.body);
    } else {
        tracing::warn!("Heading '{}' not found in {}", session.heading().marker(), file.display());
    }
    Ok(())
}

/// One watch tick: re-reads the document and returns the status only if it changed since `last`.
fn poll_status(session: &Session, store: &DocumentStore, last: &mut Option<String>) -> Option<String> {
    let document = match store.read() {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!("Could not read document: {}", e);
            None
        }
    };
    let status = session.status(document.as_deref());
    if last.as_deref() == Some(status.as_str()) {
        return None;
    }
    *last = Some(status.clone());
    Some(status)
}

/// Re-evaluates the status on a timer until Ctrl-C, printing whenever it changes.
async fn watch_status(session: &Session, file: &Path, interval: Duration) -> Result<(), AppError> {
    let store = DocumentStore::new(file);
    let mut ticker = tokio::time::interval(interval);
    let mut last: Option<String> = None;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    tracing::info!("Watching {} every {:?} (Ctrl-C to stop)", file.display(), interval);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(status) = poll_status(session, &store, &mut last) {
                    println!("{}", status);
                }
            }
            _ = &mut ctrl_c => {
                tracing::info!("Stopped watching {}", file.display());
                return Ok(());
            }
        }
    }
}

async fn run_summarize(session: &Session, file: &Path, dry_run: bool) -> Result<(), AppError> {
    let store = DocumentStore::new(file);
    let document = read_document(file)?;
    let client = OpenAiClient::from_settings(session.settings())?;
    tracing::debug!("Using summarization endpoint {}", client.endpoint());

    let updated = session.summarize_document(&document, &client).await?;

    if dry_run {
        println!("{}", updated);
    } else {
        store.write(&updated)?;
        println!("Summary inserted into {}", file.display());
    }
    Ok(())
}
