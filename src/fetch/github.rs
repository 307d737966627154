//! GitHub release API interaction

use log::info;
use serde::Deserialize;

use super::transport::Transport;
use crate::error::{FetchError, Result};

/// The subset of GitHub release metadata we read
#[derive(Deserialize, Debug)]
pub struct GitHubRelease {
    pub tag_name: String,
}

/// URL of the "latest release" endpoint for `owner/name`
pub fn latest_release_url(api_base: &str, repo: &str) -> String {
    format!(
        "{}/repos/{}/releases/latest",
        api_base.trim_end_matches('/'),
        repo
    )
}

/// Fetch the latest release of `repo` (`owner/name`)
pub async fn get_latest_release(
    transport: &impl Transport,
    api_base: &str,
    repo: &str,
) -> Result<GitHubRelease> {
    let url = latest_release_url(api_base, repo);
    let response = transport.get(&url).await?.error_for_status(&url)?;

    serde_json::from_slice(&response.body).map_err(|e| FetchError::Data {
        url,
        reason: e.to_string(),
    })
}

/// Return `explicit` untouched, or look up the latest release tag
///
/// No network request is made when a version is supplied.
pub async fn resolve_version(
    transport: &impl Transport,
    api_base: &str,
    repo: &str,
    explicit: Option<&str>,
) -> Result<String> {
    if let Some(version) = explicit {
        return Ok(version.to_string());
    }

    info!("No version given, resolving latest release of {repo}");
    let release = get_latest_release(transport, api_base, repo).await?;
    info!("Latest release of {repo} is {}", release.tag_name);
    Ok(release.tag_name)
}
