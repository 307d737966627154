//! In-place ZIP extraction

use std::path::{Path, PathBuf};

use log::debug;
use zip::ZipArchive;

use crate::error::{FetchError, Result};

/// Whether `path` names a ZIP archive (exact `.zip` extension)
pub fn is_zip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "zip")
}

/// Directory an archive at `path` is unpacked into
pub fn extraction_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Unpack the archive at `path` next to itself, then delete the archive
///
/// On failure the archive and anything already unpacked are left as-is.
pub async fn extract_in_place(path: &Path) -> Result<PathBuf> {
    let archive_path = path.to_path_buf();
    let target_dir = extraction_dir(path);

    // ZIP decoding is CPU-bound and uses blocking std::fs
    let unpacked = tokio::task::spawn_blocking(move || {
        unpack(&archive_path, &target_dir)?;
        Ok::<_, FetchError>(target_dir)
    })
    .await
    .map_err(|e| FetchError::fs(path, std::io::Error::other(e)))??;

    tokio::fs::remove_file(path)
        .await
        .map_err(|e| FetchError::fs(path, e))?;

    Ok(unpacked)
}

fn unpack(archive_path: &Path, target_dir: &Path) -> Result<()> {
    let file = std::fs::File::open(archive_path).map_err(|e| FetchError::fs(archive_path, e))?;

    let archive_err = |source| FetchError::Archive {
        path: archive_path.to_path_buf(),
        source,
    };

    let mut archive = ZipArchive::new(file).map_err(archive_err)?;
    debug!(
        "Unpacking {} entries from {} into {}",
        archive.len(),
        archive_path.display(),
        target_dir.display()
    );
    archive.extract(target_dir).map_err(archive_err)
}
