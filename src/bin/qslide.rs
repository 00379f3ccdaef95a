//! qslide CLI - inspect the learned state store and episode history
//!
//! Read-only companion to the learning engine: reports how many
//! configurations have been learned and dumps recorded episode outcomes.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use qslide::{
    adapters::{JsonlEpisodeLog, MsgPackStore},
    ports::EpisodeLog,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qslide")]
#[command(version, about = "Inspect qslide learning data", long_about = None)]
struct Cli {
    /// Directory holding states.msgpack and episodes.jsonl
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize learned states and episode history
    Stats,

    /// Print recorded episode outcomes, oldest first
    Episodes {
        /// Only print the most recent N outcomes
        #[arg(long)]
        last: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Stats => stats(&cli.data_dir),
        Commands::Episodes { last } => episodes(&cli.data_dir, last),
    }
}

fn stats(data_dir: &std::path::Path) -> Result<()> {
    let store = MsgPackStore::new(data_dir.join("states.msgpack"));
    let log = JsonlEpisodeLog::new(data_dir.join("episodes.jsonl"));

    let states = store.state_count()?;
    let outcomes = log.all()?;

    println!("learned states: {states}");
    println!("episodes:       {}", outcomes.len());
    if let Some(best) = outcomes
        .iter()
        .map(|o| o.score)
        .max_by(|a, b| a.total_cmp(b))
    {
        println!("best score:     {best}");
    }
    if let Some(latest) = outcomes.last() {
        println!("latest score:   {} (at {:.0})", latest.score, latest.timestamp);
    }
    Ok(())
}

fn episodes(data_dir: &std::path::Path, last: Option<usize>) -> Result<()> {
    let log = JsonlEpisodeLog::new(data_dir.join("episodes.jsonl"));
    let outcomes = log.all()?;
    let skip = last.map_or(0, |n| outcomes.len().saturating_sub(n));
    for outcome in &outcomes[skip..] {
        println!("{:.3}\t{}", outcome.timestamp, outcome.score);
    }
    Ok(())
}
