use std::path::{Path, PathBuf};

use crate::core::resource::AssetError;

/// Default directory scanned for override images and cubemap archives.
pub const DEFAULT_STORAGE_DIR: &str = "/sdcard/cubemap-viewer";

/// Extensions the override scan recognizes.
const OVERRIDE_EXTENSIONS: [&str; 3] = ["bmp", "png", "zip"];

/// List override files in `dir`, sorted by name so the cycle order is
/// deterministic. A missing or unreadable directory yields an empty list.
pub fn scan_override_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_override_extension(path))
        .collect();
    files.sort();
    files
}

/// True when `path` names a cubemap archive rather than a flat image.
pub fn is_archive(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

/// Read just the header of an image file to get its pixel dimensions.
pub fn probe_image_dimensions(path: &Path) -> Result<(u32, u32), AssetError> {
    image::image_dimensions(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn has_override_extension(path: &Path) -> bool {
    extension_of(path)
        .is_some_and(|ext| OVERRIDE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

fn extension_of(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
