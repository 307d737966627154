//! Release resolution, artifact download and in-place extraction
//!
//! ## Module Organization
//!
//! - `github` - latest-release lookup
//! - `manifest` - artifact tables and per-run manifests
//! - `transport` - HTTP seam (`reqwest` in production)
//! - `extract` - ZIP unpacking next to the downloaded archive
//! - `fetcher` - the sequential fetch loop

mod extract;
mod fetcher;
mod github;
mod manifest;
mod transport;

pub use extract::is_zip;
pub use fetcher::{FetchProgress, Fetcher};
pub use github::{GitHubRelease, get_latest_release, latest_release_url, resolve_version};
pub use manifest::{
    ArtifactEntry, ArtifactSpec, ArtifactTable, Channel, DEFAULT_BASE_URL,
    DEFAULT_DESTINATION_ROOT, Manifest, build_manifest,
};
pub use transport::{HttpResponse, HttpTransport, Transport};
