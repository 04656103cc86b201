//! Command-line argument definitions.

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "yahtzee",
    version,
    about = "Score five-die rolls against the thirteen Yahtzee categories"
)]
pub struct YahtzeeCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score a roll under one rule, or under every rule
    Score {
        /// Five dice, e.g. "2,2,2,6,6" or "2 2 2 6 6"
        #[arg(long)]
        dice: String,
        /// Catalogue name, e.g. full-house or fullHouse; omit for all thirteen
        #[arg(long)]
        rule: Option<String>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List the rule catalogue
    Rules {
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
