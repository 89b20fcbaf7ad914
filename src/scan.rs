//! Source image discovery.
//!
//! Every tool sees the image set through the same lens: top-level files of
//! the source directory, filtered by extension, sorted lexicographically.
//! Subdirectories (including the `optimized/` output tree) are ignored.
//!
//! A missing source directory yields an empty set rather than an error —
//! the callers that require the directory to exist check for it themselves.

use std::fs;
use std::io;
use std::path::Path;

/// Extensions recognized as source images (matched case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// List qualifying image filenames in `dir`, sorted.
pub fn discover_images(dir: &Path) -> io::Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut images: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| has_image_extension(name))
        .collect();

    images.sort();
    Ok(images)
}

fn has_image_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
