// Viktorina - terminal quiz runner
//
// Renders quiz questions in the terminal: a question, its answer
// variants, and a check/retake button. All quiz state lives in
// observable per-question models; the widgets subscribe for changes and
// re-render from fresh reads.
//
// Architecture:
// - Deck: questions and variants loaded from JSON (or the bundled deck)
// - Model: observable quiz state with explicit subscribe/notify
// - TUI (ratatui): widget per question over the current model
// - Logging: tracing captured to an in-memory buffer for the status bar

mod cli;
mod config;
mod deck;
mod logging;
mod model;
mod tui;

use anyhow::{bail, Result};
use clap::Parser;
use cli::Cli;
use config::{Config, LogRotation};
use deck::Deck;
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI subcommands first (config --show/--path/--reset)
    let cli = Cli::parse();
    if cli.handle_command() {
        return Ok(());
    }

    // Ensure a config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();

    // A deck given on the command line beats env and config file
    if let Some(deck) = cli.deck {
        config.deck = Some(deck);
    }

    // Capture logs in memory - stdout writes would garble the TUI.
    // Optionally also write to rotating log files.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let log_buffer = LogBuffer::new();
    let default_filter = format!("viktorina={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must stay alive for the program's duration so file logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Ok(()) => {
                    let file_appender = match config.logging.file_rotation {
                        LogRotation::Hourly => tracing_appender::rolling::hourly(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Daily => tracing_appender::rolling::daily(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Never => tracing_appender::rolling::never(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                    };

                    // Writes happen in a background thread; JSON format for
                    // structured log parsing
                    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                    Some(guard)
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    // Load the deck (warnings about suspect questions land in the buffer)
    let deck = match &config.deck {
        Some(path) => Deck::load(path)?,
        None => Deck::bundled(),
    };
    if deck.questions.is_empty() {
        bail!("Deck \"{}\" contains no questions", deck.title);
    }
    tracing::info!(
        "Deck loaded: \"{}\" ({} questions)",
        deck.title,
        deck.questions.len()
    );

    let app = App::new(deck, &config, log_buffer);
    tui::run_tui(app).await
}
