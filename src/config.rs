use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Cli;
use crate::error::{FetchError, Result};
use crate::fetch::ArtifactTable;

pub const DEFAULT_RELEASE_REPO: &str = "fxnai/fxnc";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Settings for a single fetch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// `owner/name` whose latest release tag is used when no version is given
    pub release_repo: String,
    pub api_base: String,
    /// Directory the table's `destination_root` is resolved against
    pub output_dir: PathBuf,
    pub table: ArtifactTable,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            release_repo: DEFAULT_RELEASE_REPO.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            output_dir: PathBuf::from("."),
            table: ArtifactTable::default(),
            timeout: None,
        }
    }
}

impl FetchConfig {
    /// Build the run configuration from parsed arguments, reading
    /// `--manifest` if one was given
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let table = match &cli.manifest {
            Some(path) => load_table(path)?,
            None => cli.channel.table(),
        };

        Ok(Self {
            output_dir: cli.output_dir.clone(),
            table,
            timeout: cli.timeout.map(Duration::from_secs),
            ..Self::default()
        })
    }
}

/// Read an artifact table from a TOML file
pub fn load_table(path: &Path) -> Result<ArtifactTable> {
    let text = std::fs::read_to_string(path).map_err(|e| FetchError::fs(path, e))?;
    parse_table(&text).map_err(|reason| FetchError::Config {
        path: path.to_path_buf(),
        reason,
    })
}

fn parse_table(text: &str) -> std::result::Result<ArtifactTable, String> {
    let table: ArtifactTable = toml::from_str(text).map_err(|e| e.to_string())?;
    if table.artifacts.is_empty() {
        return Err("no artifacts listed".to_string());
    }
    Ok(table)
}
