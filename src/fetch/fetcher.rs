//! Download orchestration
//!
//! Everything runs strictly in manifest order: one entry is downloaded,
//! written and (for archives) unpacked before the next request is sent.

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::extract::{extract_in_place, is_zip};
use super::github::resolve_version;
use super::manifest::{ArtifactEntry, Manifest, build_manifest};
use super::transport::Transport;
use crate::config::FetchConfig;
use crate::error::{FetchError, Result};

/// Human-readable progress, one event per completed step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchProgress {
    /// Downloaded bytes were written to `path`
    Wrote { url: String, path: PathBuf },
    /// The archive at `path` was unpacked and removed
    Extracted { path: PathBuf },
}

impl fmt::Display for FetchProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchProgress::Wrote { url, path } => {
                write!(f, "Wrote {url} to path: {}", path.display())
            }
            FetchProgress::Extracted { path } => write!(f, "Extracted {}", path.display()),
        }
    }
}

/// Resolves a release and places its artifacts on disk
pub struct Fetcher<T> {
    config: FetchConfig,
    transport: T,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(config: FetchConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// `explicit` as-is, otherwise the latest release tag
    pub async fn resolve_version(&self, explicit: Option<&str>) -> Result<String> {
        resolve_version(
            &self.transport,
            &self.config.api_base,
            &self.config.release_repo,
            explicit,
        )
        .await
    }

    /// Manifest for `version` under the configured table and output directory
    pub fn build_manifest(&self, version: &str) -> Manifest {
        build_manifest(&self.config.table, &self.config.output_dir, version)
    }

    /// Download one entry, write it out, and unpack it if it is a ZIP
    pub async fn fetch_entry(
        &self,
        entry: &ArtifactEntry,
        progress: &mut impl FnMut(FetchProgress),
    ) -> Result<()> {
        let response = self
            .transport
            .get(&entry.url)
            .await?
            .error_for_status(&entry.url)?;

        write_file(&entry.path, &response.body).await?;
        progress(FetchProgress::Wrote {
            url: entry.url.clone(),
            path: entry.path.clone(),
        });

        if is_zip(&entry.path) {
            extract_in_place(&entry.path).await?;
            progress(FetchProgress::Extracted {
                path: entry.path.clone(),
            });
        }

        Ok(())
    }

    /// Resolve, build the manifest, and fetch every entry in order
    ///
    /// The first failure aborts the run; entries already fetched stay on disk.
    pub async fn run(
        &self,
        explicit_version: Option<&str>,
        progress: &mut impl FnMut(FetchProgress),
    ) -> Result<Manifest> {
        let version = self.resolve_version(explicit_version).await?;
        let manifest = self.build_manifest(&version);
        info!(
            "Fetching {} artifacts for release {version}",
            manifest.len()
        );

        for entry in &manifest {
            self.fetch_entry(entry, progress).await?;
        }

        info!("Fetched all artifacts for release {version}");
        Ok(manifest)
    }
}

/// Create the parent directory if needed, then overwrite `path` with `bytes`
async fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!("Creating {}", parent.display());
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| FetchError::fs(parent, e))?;
    }

    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| FetchError::fs(path, e))
}
