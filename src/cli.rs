// CLI module - command-line argument parsing and handlers
//
// Running with no subcommand starts the quiz TUI. The config subcommand
// manages the config file:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Viktorina - terminal quiz runner
#[derive(Parser)]
#[command(name = "viktorina")]
#[command(version = VERSION)]
#[command(about = "Terminal quiz runner", long_about = None)]
pub struct Cli {
    /// Deck file to play (JSON); defaults to the bundled sample deck
    pub deck: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

impl Cli {
    /// Handle a subcommand if one was given. Returns true if handled
    /// (the caller should exit instead of starting the TUI).
    pub fn handle_command(&self) -> bool {
        match &self.command {
            Some(Commands::Config { show, path, reset }) => {
                if *path {
                    handle_config_path();
                } else if *show {
                    handle_config_show();
                } else if *reset {
                    handle_config_reset();
                } else {
                    // No flag provided, show usage
                    println!("Usage: viktorina config [--show|--path|--reset]");
                    println!();
                    println!("Options:");
                    println!("  --show    Display effective configuration");
                    println!("  --path    Show config file path");
                    println!("  --reset   Reset config file to defaults");
                }
                true
            }
            None => false,
        }
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    match &config.deck {
        Some(deck) => println!("deck = {:?}", deck.display().to_string()),
        None => println!("deck = (bundled sample deck)"),
    }
    println!("theme = {:?}", config.theme);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());
    println!("file_prefix = {:?}", config.logging.file_prefix);
    println!("file_rotation = {:?}", config.logging.file_rotation);
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error: Could not create {}: {}", parent.display(), e);
            std::process::exit(1);
        }
    }
    match std::fs::write(&path, Config::template()) {
        Ok(()) => println!("Config reset: {}", path.display()),
        Err(e) => {
            eprintln!("Error: Could not write {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}
