//! CLI module - Command-line interface for Trendarr
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::models::content::ContentType;

/// Trendarr - Popular movie & TV catalog collector
/// Ingests TMDB popular listings into a local SQLite store
#[derive(Parser)]
#[command(name = "trendarr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect popular movies and TV shows into the store
    #[command(alias = "c")]
    Collect {
        /// Restrict the run to a single content type
        #[arg(long, value_enum)]
        content: Option<ContentType>,

        /// Override the number of popular pages fetched per content type
        #[arg(long)]
        pages: Option<u32>,
    },

    /// Show row counts for the collected tables
    #[command(alias = "s")]
    Stats,

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub async fn execute(cli: Cli, config: &Config) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Commands::Collect {
        content: None,
        pages: None,
    }) {
        Commands::Collect { content, pages } => commands::cmd_collect(config, content, pages).await,
        Commands::Stats => commands::cmd_stats(config).await,
        Commands::Init => commands::cmd_init(),
    }
}
