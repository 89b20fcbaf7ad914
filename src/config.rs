//! Fixed build configuration.
//!
//! Everything the tools need to know — directory names, size classes,
//! quality levels, layout thresholds — lives in one immutable [`BuildConfig`]
//! constructed at process start and passed by reference into each stage.
//! There are no config files and no flags: the production values are the
//! [`Default`] impl, and tests construct a config pointing at a temp
//! directory instead of touching globals.
//!
//! ## Defaults
//!
//! ```text
//! Pictures/                  source images (flat, top-level only)
//! Pictures/optimized/        derived variants, one subdirectory per
//!                            (size class, format) pair
//! data/content.json          content document
//! index.html                 template, mutated in place
//!
//! thumb:  800px max width, JPEG q80, WebP q75
//! medium: 1200px max width, JPEG q85, WebP q80
//! gallery first row: 5 images
//! ```

use std::path::PathBuf;

/// Output width classes for derived images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// Gallery grid thumbnails.
    Thumb,
    /// Lightbox / hero / bike / motivation imagery.
    Medium,
}

impl SizeClass {
    pub const ALL: [SizeClass; 2] = [SizeClass::Thumb, SizeClass::Medium];

    pub fn name(self) -> &'static str {
        match self {
            SizeClass::Thumb => "thumb",
            SizeClass::Medium => "medium",
        }
    }
}

/// Output encodings for derived images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Webp,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Jpeg, OutputFormat::Webp];

    /// File extension, doubling as the format part of the output
    /// directory name.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Webp => "webp",
        }
    }
}

/// Resize and encoding settings for one size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSettings {
    /// Maximum output width in pixels. Narrower sources are never upscaled.
    pub max_width: u32,
    pub jpeg_quality: u8,
    pub webp_quality: u8,
}

/// Immutable configuration shared by all three tools.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Source image directory (flat; subdirectories are ignored).
    pub pictures_dir: PathBuf,
    /// Base directory for optimized variants.
    pub optimized_dir: PathBuf,
    /// JSON content document consumed by the site builder.
    pub content_path: PathBuf,
    /// HTML template carrying the marker pairs; mutated in place.
    pub template_path: PathBuf,
    pub thumb: VariantSettings,
    pub medium: VariantSettings,
    /// Gallery partition threshold: this many images go into the featured
    /// first row, the rest into the secondary grid.
    pub first_row_count: usize,
    /// Path segment prefixed to gallery image sources by the site builder.
    pub gallery_prefix: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            pictures_dir: PathBuf::from("Pictures"),
            optimized_dir: PathBuf::from("Pictures/optimized"),
            content_path: PathBuf::from("data/content.json"),
            template_path: PathBuf::from("index.html"),
            thumb: VariantSettings {
                max_width: 800,
                jpeg_quality: 80,
                webp_quality: 75,
            },
            medium: VariantSettings {
                max_width: 1200,
                jpeg_quality: 85,
                webp_quality: 80,
            },
            first_row_count: 5,
            gallery_prefix: "Pictures".to_string(),
        }
    }
}

impl BuildConfig {
    pub fn variant(&self, class: SizeClass) -> VariantSettings {
        match class {
            SizeClass::Thumb => self.thumb,
            SizeClass::Medium => self.medium,
        }
    }

    /// Output directory for a (size class, format) pair.
    ///
    /// Both size and format are readable from the path alone:
    /// `optimized/thumb-jpeg`, `optimized/medium-webp`, etc.
    pub fn variant_dir(&self, class: SizeClass, format: OutputFormat) -> PathBuf {
        self.optimized_dir
            .join(format!("{}-{}", class.name(), format.extension()))
    }

    /// Full output path for one variant of a source image stem.
    pub fn variant_path(&self, class: SizeClass, format: OutputFormat, stem: &str) -> PathBuf {
        self.variant_dir(class, format)
            .join(format!("{}.{}", stem, format.extension()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths() {
        let config = BuildConfig::default();
        assert_eq!(config.pictures_dir, PathBuf::from("Pictures"));
        assert_eq!(config.optimized_dir, PathBuf::from("Pictures/optimized"));
        assert_eq!(config.content_path, PathBuf::from("data/content.json"));
        assert_eq!(config.template_path, PathBuf::from("index.html"));
        assert_eq!(config.first_row_count, 5);
    }

    #[test]
    fn default_variant_settings() {
        let config = BuildConfig::default();
        assert_eq!(config.variant(SizeClass::Thumb).max_width, 800);
        assert_eq!(config.variant(SizeClass::Thumb).jpeg_quality, 80);
        assert_eq!(config.variant(SizeClass::Thumb).webp_quality, 75);
        assert_eq!(config.variant(SizeClass::Medium).max_width, 1200);
        assert_eq!(config.variant(SizeClass::Medium).jpeg_quality, 85);
        assert_eq!(config.variant(SizeClass::Medium).webp_quality, 80);
    }

    #[test]
    fn variant_dirs_name_size_and_format() {
        let config = BuildConfig::default();
        assert_eq!(
            config.variant_dir(SizeClass::Thumb, OutputFormat::Jpeg),
            PathBuf::from("Pictures/optimized/thumb-jpeg")
        );
        assert_eq!(
            config.variant_dir(SizeClass::Medium, OutputFormat::Webp),
            PathBuf::from("Pictures/optimized/medium-webp")
        );
    }

    #[test]
    fn variant_path_uses_stem_and_extension() {
        let config = BuildConfig::default();
        assert_eq!(
            config.variant_path(SizeClass::Thumb, OutputFormat::Jpeg, "dawn-ride"),
            PathBuf::from("Pictures/optimized/thumb-jpeg/dawn-ride.jpeg")
        );
        assert_eq!(
            config.variant_path(SizeClass::Medium, OutputFormat::Webp, "dawn-ride"),
            PathBuf::from("Pictures/optimized/medium-webp/dawn-ride.webp")
        );
    }
}
