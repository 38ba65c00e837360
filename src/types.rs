use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One entry of the catalog configuration before normalization. Every field
/// is optional; the finalizer fills the gaps. Keys outside this set are
/// dropped during deserialization and can never reach a client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    pub id: Option<String>,
    pub name: Option<String>,
    pub src: Option<String>,
    pub thumb_src: Option<String>,
    pub filetype: Option<String>,
}

/// A configuration entry that expands into one generated entry per image
/// file found under `$scan_dir` instead of being finalized directly.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanDirective {
    #[serde(rename = "$scan_dir")]
    pub scan_dir: PathBuf,
    #[serde(rename = "$recurse", default)]
    pub recurse: bool,
    /// When set, generated entries use the scan-root-relative path (instead
    /// of the bare file name) for their id, name and public paths.
    #[serde(rename = "$use_relative_path_as_filename_and_id", default)]
    pub relative_ids: bool,
    /// Non-directive keys of the raw entry; `filetype` seeds generated
    /// entries, everything else is overwritten per file.
    #[serde(flatten)]
    pub template: RawEntry,
}

/// A raw configuration entry: either a scan directive or a direct entry.
/// Untagged, so the presence of `$scan_dir` decides the variant.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ConfigEntry {
    Scan(ScanDirective),
    Direct(RawEntry),
}

/// Shape of the startup configuration file: either an object carrying a
/// `videoBackgroundImages` array or a bare array of entries.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CatalogFile {
    Wrapped {
        #[serde(rename = "videoBackgroundImages", default)]
        video_background_images: Vec<ConfigEntry>,
    },
    Bare(Vec<ConfigEntry>),
}

impl CatalogFile {
    pub fn into_entries(self) -> Vec<ConfigEntry> {
        match self {
            CatalogFile::Wrapped { video_background_images } => video_background_images,
            CatalogFile::Bare(entries) => entries,
        }
    }
}

/// A finalized catalog entry.
///
/// The local paths are resolution shortcuts for the router and are marked
/// `#[serde(skip)]`: the serializer structurally cannot leak them into the
/// public document.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    /// Unique across the catalog, only `[A-Za-z0-9_]`.
    pub id: String,
    /// Display name, free of path separators.
    pub name: String,
    /// Canonical public path below [`crate::sanitize::PUBLIC_PREFIX`].
    pub src: String,
    /// Same shape as `src`; equals `src` when not configured separately.
    pub thumb_src: String,
    /// Lowercase extension without leading dot.
    pub filetype: String,
    #[serde(skip)]
    pub src_localpath: Option<PathBuf>,
    #[serde(skip)]
    pub thumb_localpath: Option<PathBuf>,
}
