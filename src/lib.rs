//! Fetch prebuilt Function native libraries for every Unity target platform.
//!
//! A run resolves a release tag (the latest GitHub release of `fxnai/fxnc`
//! unless one is given), expands an artifact table into a manifest of
//! `(url, path)` pairs, then downloads each artifact in order. Artifacts
//! whose destination ends in `.zip` are unpacked next to themselves and
//! deleted.

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;

pub use cli::Cli;
pub use config::FetchConfig;
pub use error::{FetchError, Result};
pub use fetch::{
    ArtifactEntry, ArtifactSpec, ArtifactTable, Channel, FetchProgress, Fetcher, HttpResponse,
    HttpTransport, Manifest, Transport, build_manifest,
};
