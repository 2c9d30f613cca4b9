//! Command-line interface

use clap::{ArgAction, Parser, Subcommand};

/// Vulnwatch - security alert manager for your organization's repositories
#[derive(Parser, Debug)]
#[command(
    name = "vulnwatch",
    version,
    about = "Aggregates open security findings across an organization and alerts the owning teams",
    long_about = "Vulnwatch collects open vulnerability alerts for every repository in your \
                  organization from one or more data sources, merges them into a single view, \
                  and notifies the teams that own the affected repositories."
)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Disable Slack alerts
    #[arg(short = 'd', long, global = true)]
    pub disable_slack: bool,

    /// Suppress all console logging (mutually exclusive with 'verbose')
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// More verbose output; specify multiple times to increase verbosity
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect findings from all configured sources and send alerts
    Scan,
}

impl Cli {
    /// Resolve the effective log filter from the flags and the configured
    /// default level.
    pub fn log_level(&self, configured: &str) -> String {
        if self.quiet {
            return "off".to_string();
        }
        match self.verbose {
            0 => configured.to_string(),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}
