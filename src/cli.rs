//! CLI argument parsing for fxnc-fetch

use std::path::PathBuf;

use clap::Parser;

use crate::fetch::Channel;

/// Command-line arguments for fxnc-fetch
#[derive(Parser, Debug, Clone)]
#[command(name = "fxnc-fetch")]
#[command(about = "Download Function native libraries into the Unity package")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Release tag to fetch (defaults to the latest GitHub release)
    #[arg(long)]
    pub version: Option<String>,

    /// Built-in artifact table to use
    #[arg(long, value_enum, default_value_t = Channel::Full)]
    pub channel: Channel,

    /// TOML artifact table to use instead of a built-in channel
    #[arg(long, conflicts_with = "channel")]
    pub manifest: Option<PathBuf>,

    /// Directory containing the `Packages/` folder
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
