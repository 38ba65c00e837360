//! Catalog construction and lookup.
//!
//! The builder turns the loosely-specified raw entry list into the finalized
//! catalog: scan directives expand into one entry per discovered image file,
//! every entry gets a unique identifier, a sanitized display name, canonical
//! public paths and a resolved file type. One used-id set is carried across
//! the whole build so uniqueness holds catalog-wide.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use tracing::warn;

use crate::sanitize::{
    basename, ensure_public_path, sanitize_id, sanitize_name, strip_extension, PUBLIC_PREFIX,
};
use crate::scanner;
use crate::types::{CatalogEntry, CatalogFile, ConfigEntry, RawEntry, ScanDirective};

/// The finalized, immutable catalog plus its pre-rendered public JSON
/// document. Built once before the listener starts accepting connections and
/// never mutated afterwards.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    document: String,
}

#[derive(Serialize)]
struct PublicDocument<'a> {
    #[serde(rename = "videoBackgroundImages")]
    video_background_images: &'a [CatalogEntry],
}

/// One entry on its way through the finalizer: raw fields plus the local
/// paths a scan directive recorded for it.
#[derive(Debug, Default)]
struct PendingEntry {
    raw: RawEntry,
    src_localpath: Option<PathBuf>,
    thumb_localpath: Option<PathBuf>,
}

impl Catalog {
    /// Reads and builds the catalog from a JSON configuration file.
    ///
    /// Read and parse failures are fatal; the server must not start without
    /// a valid catalog.
    pub fn load(path: &Path) -> anyhow::Result<Catalog> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog config {}", path.display()))?;
        let file: CatalogFile = serde_json::from_str(&text)
            .with_context(|| format!("malformed catalog config {}", path.display()))?;
        Self::build(file.into_entries())
    }

    /// Expands and finalizes the raw entry list in input order. Input order
    /// (and sorted file order within a scan directive) determines id-suffix
    /// assignment deterministically.
    pub fn build(raw: Vec<ConfigEntry>) -> anyhow::Result<Catalog> {
        let mut used_ids: HashSet<String> = HashSet::new();
        let mut entries: Vec<CatalogEntry> = Vec::new();
        for config_entry in raw {
            match config_entry {
                ConfigEntry::Scan(directive) => {
                    entries.extend(expand_scan(directive, &mut used_ids));
                }
                ConfigEntry::Direct(raw_entry) => {
                    entries.push(finalize(
                        PendingEntry { raw: raw_entry, ..PendingEntry::default() },
                        &mut used_ids,
                    ));
                }
            }
        }
        let document =
            serde_json::to_string(&PublicDocument { video_background_images: &entries })
                .context("failed to render catalog document")?;
        Ok(Catalog { entries, document })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// The public JSON document. Rendered once at build time; internal fields
    /// are skipped by the serializer.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Resolves a decoded request path to a local file, by exact match
    /// against each entry's `src` and `thumb_src`. Entries without a recorded
    /// local path fall back to a derivation below `asset_root`.
    pub fn resolve(&self, public_path: &str, asset_root: &Path) -> Option<PathBuf> {
        for entry in &self.entries {
            if entry.src == public_path {
                return entry
                    .src_localpath
                    .clone()
                    .or_else(|| derive_local_path(&entry.src, asset_root));
            }
            if entry.thumb_src == public_path {
                return entry
                    .thumb_localpath
                    .clone()
                    .or_else(|| derive_local_path(&entry.thumb_src, asset_root));
            }
        }
        None
    }
}

/// Maps a public serving path back to a file below the asset root by
/// stripping the public prefix. Paths with empty, `.` or `..` segments never
/// resolve: a configured `src` cannot reach outside the asset root.
fn derive_local_path(public: &str, asset_root: &Path) -> Option<PathBuf> {
    let relative = public
        .strip_prefix(PUBLIC_PREFIX)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or_else(|| public.trim_start_matches('/'));

    let mut local = asset_root.to_path_buf();
    for segment in relative.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." {
            return None;
        }
        local.push(segment);
    }
    Some(local)
}

/// Expands a scan directive into zero or more finalized entries, one per
/// image file under the scan root. A missing or non-directory scan root
/// contributes nothing; the build carries on.
fn expand_scan(directive: ScanDirective, used_ids: &mut HashSet<String>) -> Vec<CatalogEntry> {
    let ScanDirective { scan_dir, recurse, relative_ids, template } = directive;

    match fs::metadata(&scan_dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            warn!("scan_dir is not a directory: {}", scan_dir.display());
            return Vec::new();
        }
        Err(err) => {
            warn!("scan_dir missing ({}): {}", scan_dir.display(), err);
            return Vec::new();
        }
    }

    let files = scanner::collect_image_files(&scan_dir, recurse);
    let mut generated = Vec::with_capacity(files.len());
    for file in files {
        let relative = file
            .strip_prefix(&scan_dir)
            .unwrap_or(&file)
            .to_string_lossy()
            .replace('\\', "/");
        let base = if relative_ids {
            strip_extension(&relative).to_string()
        } else {
            file.file_stem().unwrap_or_default().to_string_lossy().into_owned()
        };
        let public_name = if relative_ids {
            relative
        } else {
            file.file_name().unwrap_or_default().to_string_lossy().into_owned()
        };
        let extension = file.extension().map(|ext| ext.to_string_lossy().to_ascii_lowercase());

        let src = format!("{}/{}", PUBLIC_PREFIX, public_name);
        let raw = RawEntry {
            id: Some(base.clone()),
            name: Some(base),
            src: Some(src.clone()),
            thumb_src: Some(src),
            filetype: template.filetype.clone().or(extension),
        };
        generated.push(finalize(
            PendingEntry {
                raw,
                src_localpath: Some(file.clone()),
                thumb_localpath: Some(file),
            },
            used_ids,
        ));
    }
    generated
}

/// Finalizes one entry against the shared used-id set.
fn finalize(pending: PendingEntry, used_ids: &mut HashSet<String>) -> CatalogEntry {
    let PendingEntry { raw, src_localpath, thumb_localpath } = pending;

    let inferred_ext = infer_extension(src_localpath.as_deref(), raw.src.as_deref());

    let id_fallback = match raw.name.as_deref().filter(|name| !name.is_empty()) {
        Some(name) => name.to_string(),
        None => {
            let localpath_str =
                src_localpath.as_deref().map(|path| path.to_string_lossy().into_owned());
            let source = raw
                .src
                .as_deref()
                .filter(|src| !src.is_empty())
                .or(localpath_str.as_deref())
                .unwrap_or("");
            basename(source).to_string()
        }
    };
    let id = unique_id(raw.id.as_deref().unwrap_or(""), &id_fallback, used_ids);

    let name = {
        let stripped = strip_extension(raw.name.as_deref().unwrap_or(""));
        let sanitized = sanitize_name(if stripped.is_empty() { &id } else { stripped });
        if sanitized.is_empty() {
            id.clone()
        } else {
            sanitized
        }
    };

    let src = match raw.src.as_deref().map(str::trim).filter(|src| !src.is_empty()) {
        Some(existing) => ensure_public_path(existing),
        // No public path in the configuration: derive one from the id so the
        // entry still resolves below the asset root.
        None => {
            let synthesized = match inferred_ext.as_deref() {
                Some(ext) => format!("/{}.{}", id, ext),
                None => format!("/{}", id),
            };
            ensure_public_path(&synthesized)
        }
    };

    let thumb_src = match raw.thumb_src.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        Some(existing) => ensure_public_path(existing),
        None => src.clone(),
    };

    let filetype = raw
        .filetype
        .as_deref()
        .map(str::trim)
        .filter(|ft| !ft.is_empty())
        .map(|ft| ft.to_ascii_lowercase())
        .or(inferred_ext)
        .unwrap_or_else(|| "png".to_string());

    CatalogEntry { id, name, src, thumb_src, filetype, src_localpath, thumb_localpath }
}

/// Resolves the identifier for one entry: the sanitized explicit id, else the
/// sanitized fallback, else the literal `background`; collisions take `_1`,
/// `_2`, ... suffixes in assignment order.
fn unique_id(raw_id: &str, fallback: &str, used_ids: &mut HashSet<String>) -> String {
    let mut base = sanitize_id(strip_extension(raw_id));
    if base.is_empty() {
        base = sanitize_id(strip_extension(fallback));
    }
    if base.is_empty() {
        base = "background".to_string();
    }

    let mut candidate = base.clone();
    let mut counter = 1;
    while used_ids.contains(&candidate) {
        candidate = format!("{}_{}", base, counter);
        counter += 1;
    }
    used_ids.insert(candidate.clone());
    candidate
}

/// Infers a file extension from the recorded local path, else from the
/// configured source path. A dot-file or a trailing dot has no extension.
fn infer_extension(localpath: Option<&Path>, src: Option<&str>) -> Option<String> {
    let candidate = match localpath {
        Some(path) => path.to_string_lossy().into_owned(),
        None => src?.to_string(),
    };
    let base = basename(&candidate);
    match base.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < base.len() => {
            Some(base[dot + 1..].to_ascii_lowercase())
        }
        _ => None,
    }
}
