//! Gallery-only builder — rebuilds the gallery region from directory
//! contents, with no JSON dependency. Used for quick image-only refreshes.
//!
//! Unlike the full site builder this tool is strict: a missing source
//! directory, a missing template, an empty image set, or an absent
//! `GALLERY-START`/`GALLERY-END` marker pair all abort the run with the
//! template left byte-for-byte unchanged.

use crate::config::BuildConfig;
use crate::scan;
use crate::sections;
use crate::template::{self, MarkerError};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("source image directory not found: {0}")]
    SourceDirMissing(PathBuf),
    #[error("template not found: {0}")]
    TemplateMissing(PathBuf),
    #[error("no images found in {0}")]
    NoImages(PathBuf),
    #[error("marker error: {0}")]
    Marker(#[from] MarkerError),
}

/// Outcome of a gallery rebuild.
#[derive(Debug)]
pub struct GalleryReport {
    /// Discovered image filenames, in gallery order.
    pub images: Vec<String>,
}

pub fn build_gallery(config: &BuildConfig) -> Result<GalleryReport, GalleryError> {
    if !config.pictures_dir.is_dir() {
        return Err(GalleryError::SourceDirMissing(config.pictures_dir.clone()));
    }
    if !config.template_path.is_file() {
        return Err(GalleryError::TemplateMissing(config.template_path.clone()));
    }

    let images = scan::discover_images(&config.pictures_dir)?;
    if images.is_empty() {
        return Err(GalleryError::NoImages(config.pictures_dir.clone()));
    }

    // Image sources carry the directory path as given, e.g. "Pictures/a.jpg".
    let sources: Vec<String> = images
        .iter()
        .map(|name| format!("{}/{}", config.pictures_dir.display(), name))
        .collect();
    let fragment = sections::render_photo_grids(&sources, config.first_row_count);

    let html = fs::read_to_string(&config.template_path)?;
    let region = template::gallery_region(&html)?;
    let updated = template::splice(&html, region, &fragment.into_string());
    template::write_atomic(&config.template_path, &updated)?;

    Ok(GalleryReport { images })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    const TEMPLATE: &str = "\
<html>
<body>
    <!-- GALLERY-START (generated, do not edit) -->
    <p>old gallery</p>
    <!-- GALLERY-END -->
</body>
</html>
";

    fn test_config(root: &Path) -> BuildConfig {
        BuildConfig {
            pictures_dir: root.join("Pictures"),
            optimized_dir: root.join("Pictures/optimized"),
            content_path: root.join("data/content.json"),
            template_path: root.join("index.html"),
            ..BuildConfig::default()
        }
    }

    fn touch_images(dir: &Path, names: &[&str]) {
        fs::create_dir_all(dir).unwrap();
        for name in names {
            fs::write(dir.join(name), b"").unwrap();
        }
    }

    #[test]
    fn rebuilds_gallery_region() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        touch_images(&config.pictures_dir, &["b.jpg", "a.jpg"]);
        fs::write(&config.template_path, TEMPLATE).unwrap();

        let report = build_gallery(&config).unwrap();
        assert_eq!(report.images, vec!["a.jpg", "b.jpg"]);

        let html = fs::read_to_string(&config.template_path).unwrap();
        assert!(html.contains("<!-- GALLERY-START (generated, do not edit) -->"));
        assert!(html.contains("<!-- GALLERY-END -->"));
        assert!(!html.contains("old gallery"));
        // Sources are the directory path joined with the filename.
        let expected = format!(r#"src="{}/a.jpg""#, config.pictures_dir.display());
        assert!(html.contains(&expected));
    }

    #[test]
    fn missing_source_directory_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        fs::write(&config.template_path, TEMPLATE).unwrap();

        assert!(matches!(
            build_gallery(&config),
            Err(GalleryError::SourceDirMissing(_))
        ));
    }

    #[test]
    fn missing_template_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        touch_images(&config.pictures_dir, &["a.jpg"]);

        assert!(matches!(
            build_gallery(&config),
            Err(GalleryError::TemplateMissing(_))
        ));
    }

    #[test]
    fn empty_image_set_is_fatal_and_template_untouched() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        fs::create_dir_all(&config.pictures_dir).unwrap();
        fs::write(&config.template_path, TEMPLATE).unwrap();

        let result = build_gallery(&config);
        assert!(matches!(result, Err(GalleryError::NoImages(_))));
        assert_eq!(
            fs::read_to_string(&config.template_path).unwrap(),
            TEMPLATE
        );
    }

    #[test]
    fn absent_markers_are_fatal_and_template_untouched() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        touch_images(&config.pictures_dir, &["a.jpg"]);
        let bare = "<html><body><p>no markers here</p></body></html>\n";
        fs::write(&config.template_path, bare).unwrap();

        let result = build_gallery(&config);
        assert!(matches!(result, Err(GalleryError::Marker(_))));
        assert_eq!(fs::read_to_string(&config.template_path).unwrap(), bare);
    }
}
