//! Image optimizer — the first stage of the build pipeline.
//!
//! For every source image in the pictures directory, produces up to four
//! derived files: {thumb, medium} × {JPEG, WebP}, under deterministic paths
//! (`optimized/<size>-<format>/<stem>.<ext>`). The build is incremental per
//! output file: a variant is regenerated only when it is missing or older
//! (by modification time) than its source, so a source with one missing
//! variant produces only that variant.
//!
//! A source is decoded at most once per run, and only when at least one of
//! its variants is stale; each size class is resized at most once. An
//! undecodable source aborts the whole run — there is no per-file recovery.
//! A missing pictures directory is an empty result, not an error.

use crate::config::{BuildConfig, OutputFormat, SizeClass};
use crate::imaging::{self, CodecError};
use crate::output;
use crate::scan;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image processing failed: {0}")]
    Codec(#[from] CodecError),
}

/// One derived output scheduled for (re)generation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct VariantPlan {
    size_class: SizeClass,
    format: OutputFormat,
    path: PathBuf,
}

/// Outcome of an optimizer run.
#[derive(Debug, Default)]
pub struct OptimizeReport {
    /// Discovered source filenames, in processing order.
    pub sources: Vec<String>,
    /// Variants written this run.
    pub written: usize,
    /// Variants found up to date and left alone.
    pub skipped: usize,
}

pub fn optimize(config: &BuildConfig) -> Result<OptimizeReport, OptimizeError> {
    let sources = scan::discover_images(&config.pictures_dir)?;
    println!("{}", output::format_image_count(sources.len()));

    let mut report = OptimizeReport {
        sources: sources.clone(),
        ..Default::default()
    };

    let total = sources.len();
    for (index, name) in sources.iter().enumerate() {
        let source = config.pictures_dir.join(name);
        let (written, skipped) = optimize_one(config, &source, name)?;
        report.written += written;
        report.skipped += skipped;
        println!("{}", output::format_optimize_progress(index + 1, total, name));
    }

    Ok(report)
}

/// Generate the stale variants of one source image.
///
/// Returns (written, skipped) variant counts.
fn optimize_one(
    config: &BuildConfig,
    source: &Path,
    name: &str,
) -> Result<(usize, usize), OptimizeError> {
    let stem = file_stem(name);
    let source_mtime = fs::metadata(source)?.modified()?;

    let stale = plan_stale_variants(config, &stem, source_mtime)?;
    let variant_total = SizeClass::ALL.len() * OutputFormat::ALL.len();
    if stale.is_empty() {
        return Ok((0, variant_total));
    }

    let rgb = imaging::load_rgb(source)?;

    for class in SizeClass::ALL {
        let class_stale: Vec<&VariantPlan> =
            stale.iter().filter(|v| v.size_class == class).collect();
        if class_stale.is_empty() {
            continue;
        }

        let settings = config.variant(class);
        let (width, height) =
            imaging::scaled_dimensions((rgb.width(), rgb.height()), settings.max_width);
        let resized: Cow<'_, image::RgbImage> = if (width, height) == rgb.dimensions() {
            Cow::Borrowed(&rgb)
        } else {
            Cow::Owned(imaging::resize(&rgb, width, height))
        };

        for variant in class_stale {
            if let Some(parent) = variant.path.parent() {
                fs::create_dir_all(parent)?;
            }
            match variant.format {
                OutputFormat::Jpeg => {
                    imaging::encode_jpeg(&resized, &variant.path, settings.jpeg_quality)?
                }
                OutputFormat::Webp => {
                    imaging::encode_webp(&resized, &variant.path, settings.webp_quality)?
                }
            }
        }
    }

    Ok((stale.len(), variant_total - stale.len()))
}

fn file_stem(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}

/// Probe all four variant paths and keep the ones needing regeneration.
fn plan_stale_variants(
    config: &BuildConfig,
    stem: &str,
    source_mtime: SystemTime,
) -> io::Result<Vec<VariantPlan>> {
    let mut stale = Vec::new();
    for class in SizeClass::ALL {
        for format in OutputFormat::ALL {
            let path = config.variant_path(class, format, stem);
            if needs_refresh(source_mtime, &path)? {
                stale.push(VariantPlan {
                    size_class: class,
                    format,
                    path,
                });
            }
        }
    }
    Ok(stale)
}

/// A variant needs regeneration when absent or strictly older than its source.
fn needs_refresh(source_mtime: SystemTime, output: &Path) -> io::Result<bool> {
    match fs::metadata(output) {
        Ok(meta) => Ok(meta.modified()? < source_mtime),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use tempfile::TempDir;

    fn test_config(root: &Path) -> BuildConfig {
        BuildConfig {
            pictures_dir: root.join("Pictures"),
            optimized_dir: root.join("Pictures/optimized"),
            ..BuildConfig::default()
        }
    }

    fn write_jpeg(path: &Path, width: u32, height: u32) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 60])
        });
        imaging::encode_jpeg(&img, path, 90).unwrap();
    }

    #[test]
    fn missing_source_directory_is_empty_success() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());

        let report = optimize(&config).unwrap();
        assert!(report.sources.is_empty());
        assert_eq!(report.written, 0);
    }

    #[test]
    fn generates_all_four_variants() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        write_jpeg(&config.pictures_dir.join("ride.jpg"), 2000, 1000);

        let report = optimize(&config).unwrap();
        assert_eq!(report.sources, vec!["ride.jpg"]);
        assert_eq!(report.written, 4);
        assert_eq!(report.skipped, 0);

        for class in SizeClass::ALL {
            for format in OutputFormat::ALL {
                let path = config.variant_path(class, format, "ride");
                assert!(path.is_file(), "missing {}", path.display());
            }
        }
    }

    #[test]
    fn resized_dimensions_follow_the_width_contract() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        write_jpeg(&config.pictures_dir.join("wide.jpg"), 2000, 1000);
        let png = RgbImage::from_pixel(400, 300, image::Rgb([5, 5, 5]));
        png.save(config.pictures_dir.join("small.png")).unwrap();

        optimize(&config).unwrap();

        let thumb = imaging::load_rgb(&config.variant_path(
            SizeClass::Thumb,
            OutputFormat::Jpeg,
            "wide",
        ))
        .unwrap();
        assert_eq!(thumb.dimensions(), (800, 400));

        let medium = imaging::load_rgb(&config.variant_path(
            SizeClass::Medium,
            OutputFormat::Jpeg,
            "wide",
        ))
        .unwrap();
        assert_eq!(medium.dimensions(), (1200, 600));

        // Narrower than both targets: dimensions unchanged in both classes.
        for class in SizeClass::ALL {
            let img = imaging::load_rgb(&config.variant_path(class, OutputFormat::Jpeg, "small"))
                .unwrap();
            assert_eq!(img.dimensions(), (400, 300));
        }
    }

    #[test]
    fn second_run_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        write_jpeg(&config.pictures_dir.join("ride.jpg"), 1600, 900);

        let first = optimize(&config).unwrap();
        assert_eq!(first.written, 4);

        let second = optimize(&config).unwrap();
        assert_eq!(second.written, 0);
        assert_eq!(second.skipped, 4);
    }

    #[test]
    fn single_missing_variant_regenerates_only_that_variant() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        write_jpeg(&config.pictures_dir.join("ride.jpg"), 1600, 900);
        optimize(&config).unwrap();

        let victim = config.variant_path(SizeClass::Thumb, OutputFormat::Webp, "ride");
        fs::remove_file(&victim).unwrap();

        let report = optimize(&config).unwrap();
        assert_eq!(report.written, 1);
        assert_eq!(report.skipped, 3);
        assert!(victim.is_file());
    }

    #[test]
    fn corrupt_source_aborts_the_run() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        fs::create_dir_all(&config.pictures_dir).unwrap();
        fs::write(config.pictures_dir.join("broken.jpg"), b"not an image").unwrap();

        let result = optimize(&config);
        assert!(matches!(result, Err(OptimizeError::Codec(_))));
    }

    #[test]
    fn needs_refresh_rules() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out.jpeg");

        let now = SystemTime::now();
        assert!(needs_refresh(now, &out).unwrap());

        fs::write(&out, b"x").unwrap();
        let out_mtime = fs::metadata(&out).unwrap().modified().unwrap();
        // Source older than (or equal to) the output: fresh.
        assert!(!needs_refresh(out_mtime, &out).unwrap());
        // Source newer than the output: stale.
        let later = out_mtime + std::time::Duration::from_secs(5);
        assert!(needs_refresh(later, &out).unwrap());
    }
}
