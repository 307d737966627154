//! Artifact tables and per-run manifests
//!
//! An [`ArtifactTable`] is static configuration: which files the CDN serves
//! for a release and where each one lands inside the Unity package. A
//! [`Manifest`] is that table resolved against one release version and one
//! output directory.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://cdn.fxn.ai/fxnc";
pub const DEFAULT_DESTINATION_ROOT: &str = "Packages/ai.fxn.fxn3d/Plugins";

/// Built-in artifact tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Channel {
    /// Android ABIs plus single-architecture iOS, macOS and Windows
    #[default]
    Full,
    /// iOS plus per-architecture macOS and Windows, no Android
    Split,
}

const FULL: &[(&str, &str)] = &[
    ("libFunction-android-arm64-v8a.so", "Android/arm64-v8a/libFunction.so"),
    ("libFunction-android-armeabi-v7a.so", "Android/armeabi-v7a/libFunction.so"),
    ("libFunction-android-x86.so", "Android/x86/libFunction.so"),
    ("libFunction-android-x86_64.so", "Android/x86_64/libFunction.so"),
    ("Function-ios-iphoneos.framework.zip", "iOS/Function.framework.zip"),
    ("Function-macos.dylib", "macOS/Function.dylib"),
    ("Function-x64.dll", "Windows/Function.dll"),
];

const SPLIT: &[(&str, &str)] = &[
    ("Function-ios.xcframework.zip", "iOS/Function.xcframework.zip"),
    ("Function-macos-arm64.dylib", "macOS/arm64/Function.dylib"),
    ("Function-macos-x86_64.dylib", "macOS/x86_64/Function.dylib"),
    ("Function-win-x86_64.dll", "Windows/x86_64/Function.dll"),
    ("Function-win-arm64.dll", "Windows/arm64/Function.dll"),
];

impl Channel {
    fn rows(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Channel::Full => FULL,
            Channel::Split => SPLIT,
        }
    }

    pub fn table(self) -> ArtifactTable {
        ArtifactTable {
            base_url: DEFAULT_BASE_URL.to_string(),
            destination_root: PathBuf::from(DEFAULT_DESTINATION_ROOT),
            artifacts: self
                .rows()
                .iter()
                .map(|&(file, destination)| ArtifactSpec {
                    file: file.to_string(),
                    destination: PathBuf::from(destination),
                })
                .collect(),
        }
    }
}

/// One CDN file and its version-independent destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSpec {
    /// File name under `{base_url}/{version}/`
    pub file: String,
    /// Path relative to the table's `destination_root`
    pub destination: PathBuf,
}

/// Platform artifact table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactTable {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_destination_root")]
    pub destination_root: PathBuf,
    pub artifacts: Vec<ArtifactSpec>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_destination_root() -> PathBuf {
    PathBuf::from(DEFAULT_DESTINATION_ROOT)
}

impl Default for ArtifactTable {
    fn default() -> Self {
        Channel::default().table()
    }
}

/// A single download: where from, where to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactEntry {
    pub url: String,
    pub path: PathBuf,
}

/// Ordered list of downloads for one run
pub type Manifest = Vec<ArtifactEntry>;

/// Interpolate `version` into every artifact URL of `table`
///
/// Pure; destinations depend only on `table` and `output_dir`.
pub fn build_manifest(table: &ArtifactTable, output_dir: &Path, version: &str) -> Manifest {
    let base_url = table.base_url.trim_end_matches('/');
    let root = output_dir.join(&table.destination_root);

    table
        .artifacts
        .iter()
        .map(|artifact| ArtifactEntry {
            url: format!("{base_url}/{version}/{}", artifact.file),
            path: root.join(&artifact.destination),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_is_deterministic() {
        let table = Channel::Full.table();
        let a = build_manifest(&table, Path::new("."), "0.0.35");
        let b = build_manifest(&table, Path::new("."), "0.0.35");
        assert_eq!(a, b);
        assert_eq!(a.len(), 7);
    }

    #[test]
    fn version_sits_between_base_and_file() {
        for channel in [Channel::Full, Channel::Split] {
            let table = channel.table();
            let manifest = build_manifest(&table, Path::new("."), "v9.8.7");
            for (entry, artifact) in manifest.iter().zip(&table.artifacts) {
                assert_eq!(entry.url.matches("v9.8.7").count(), 1, "{}", entry.url);
                assert_eq!(
                    entry.url,
                    format!("https://cdn.fxn.ai/fxnc/v9.8.7/{}", artifact.file)
                );
            }
        }
    }

    #[test]
    fn destinations_ignore_version() {
        let table = Channel::Split.table();
        let paths = |v| {
            build_manifest(&table, Path::new("/work"), v)
                .into_iter()
                .map(|e| e.path)
                .collect::<Vec<_>>()
        };
        assert_eq!(paths("1.0.0"), paths("2.0.0-beta"));
    }

    #[test]
    fn full_channel_layout() {
        let manifest = build_manifest(&Channel::Full.table(), Path::new("/work"), "0.0.35");
        let root = Path::new("/work/Packages/ai.fxn.fxn3d/Plugins");

        assert_eq!(
            manifest[0],
            ArtifactEntry {
                url: "https://cdn.fxn.ai/fxnc/0.0.35/libFunction-android-arm64-v8a.so".into(),
                path: root.join("Android/arm64-v8a/libFunction.so"),
            }
        );
        assert_eq!(manifest[4].path, root.join("iOS/Function.framework.zip"));
        assert_eq!(manifest[6].url, "https://cdn.fxn.ai/fxnc/0.0.35/Function-x64.dll");
        assert_eq!(manifest[6].path, root.join("Windows/Function.dll"));
    }

    #[test]
    fn split_channel_has_no_android() {
        let table = Channel::Split.table();
        assert!(
            table
                .artifacts
                .iter()
                .all(|a| !a.destination.starts_with("Android"))
        );
        assert!(
            table
                .artifacts
                .iter()
                .any(|a| a.destination == Path::new("macOS/arm64/Function.dylib"))
        );
    }

    #[test]
    fn trailing_slash_on_base_url_is_ignored() {
        let table = ArtifactTable {
            base_url: "http://mirror.test/fxnc/".into(),
            destination_root: PathBuf::from("Plugins"),
            artifacts: vec![ArtifactSpec {
                file: "a.so".into(),
                destination: PathBuf::from("a.so"),
            }],
        };
        let manifest = build_manifest(&table, Path::new("out"), "1");
        assert_eq!(manifest[0].url, "http://mirror.test/fxnc/1/a.so");
        assert_eq!(manifest[0].path, Path::new("out/Plugins/a.so"));
    }
}
