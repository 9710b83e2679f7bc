use clap::Parser;
use std::path::PathBuf;

use crate::types::LogLevel;

#[derive(Parser, Debug)]
#[command(name = "contribgrid")]
#[command(about = "Show a GitHub user's daily contributions for the trailing year", long_about = None)]
#[command(version)]
pub struct Cli {
    /// GitHub username to fetch immediately on startup
    pub user: Option<String>,

    /// Config file (default: <config dir>/contribgrid/config.toml)
    #[arg(long)]
    pub config: Option<String>,

    /// GraphQL endpoint, e.g. for GitHub Enterprise
    #[arg(long)]
    pub api_url: Option<String>,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,
}
