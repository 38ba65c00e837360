//! Image-file collection for scan directives.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extensions a scan directive picks up, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Collects the image files under `root`, one directory level deep unless
/// `recurse` is set.
///
/// Unreadable directories or entries are logged and skipped; a partial scan
/// never aborts the catalog build. The result is sorted lexicographically by
/// full path string so catalog order (and with it id-collision resolution
/// order) does not depend on filesystem iteration order.
pub fn collect_image_files(root: &Path, recurse: bool) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(root);
    if !recurse {
        walker = walker.max_depth(1);
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                match err.path() {
                    Some(path) => tracing::warn!("unable to read {}: {}", path.display(), err),
                    None => tracing::warn!("unable to read directory entry: {}", err),
                }
                continue;
            }
        };
        if entry.file_type().is_file() && is_image_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
    files
}
