//! CLI for the toolcat catalog and metrics engine.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toolcat_core::config;

use commands::{
    run_checksum, run_download, run_gen_metrics, run_links, run_mood, run_show, run_stats,
    run_tool, run_visit,
};

/// Top-level CLI for the toolcat catalog.
#[derive(Debug, Parser)]
#[command(name = "toolcat")]
#[command(about = "toolcat: integrity-checked tool catalog and download metrics", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show the catalog: site contact data and the tool overview.
    Show,

    /// Show one tool in detail (highlights, capabilities, changelog).
    Tool {
        /// Tool slug, e.g. network-ai-ops.
        slug: String,
    },

    /// Resolve a tool's download links through the safety gate.
    Links {
        /// Tool slug whose downloads to resolve.
        slug: String,
    },

    /// Record a site visit in the local metrics.
    Visit,

    /// Record a download for a tool.
    Download {
        /// Tool slug, or a download href to run through the gate first.
        target: String,
    },

    /// Record the mood for a day (today unless --day is given).
    Mood {
        /// One of the fixed mood labels.
        mood: String,

        /// Day key YYYY-MM-DD; defaults to today.
        #[arg(long)]
        day: Option<String>,
    },

    /// Show the metrics dashboard: today, 7-day trend, top downloads.
    Stats,

    /// Build metrics.json from nginx access logs.
    GenMetrics {
        /// One or more nginx access log file paths.
        #[arg(long, required = true, num_args = 1..)]
        log: Vec<PathBuf>,

        /// Output JSON path.
        #[arg(long, default_value = "metrics.json")]
        output: PathBuf,
    },

    /// Compute SHA-256 of a file (e.g. to pin the catalog hash).
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Show => run_show(&cfg).await?,
            CliCommand::Tool { slug } => run_tool(&cfg, &slug).await?,
            CliCommand::Links { slug } => run_links(&cfg, &slug).await?,
            CliCommand::Visit => run_visit().await?,
            CliCommand::Download { target } => run_download(&cfg, &target).await?,
            CliCommand::Mood { mood, day } => run_mood(&mood, day.as_deref()).await?,
            CliCommand::Stats => run_stats(&cfg).await?,
            CliCommand::GenMetrics { log, output } => run_gen_metrics(&log, &output).await?,
            CliCommand::Checksum { path } => run_checksum(&path).await?,
        }

        Ok(())
    }
}
