//! CLI output formatting for all pipeline stages.
//!
//! Each stage has `format_*` functions (pure, no I/O, return strings) and
//! the stages or `main` decide what actually reaches stdout. Keeping the
//! formatting pure makes the lines testable without capturing output.
//!
//! The lines are a human-readable progress log, not a machine contract:
//!
//! ```text
//! Found 12 source images
//!   [1/12] 2024-tour-stage1.jpg
//!   ...
//! Optimized: 44 written, 4 up to date -> Pictures/optimized
//!
//!   hero: replaced
//!   stats: markers not found, skipping
//! Site updated: 6 sections replaced, 1 skipped (12 images)
//! ```

use crate::gallery::GalleryReport;
use crate::optimize::OptimizeReport;
use crate::site::SiteReport;
use std::path::Path;

// ============================================================================
// Optimizer
// ============================================================================

pub fn format_image_count(count: usize) -> String {
    match count {
        0 => "No source images found".to_string(),
        1 => "Found 1 source image".to_string(),
        n => format!("Found {n} source images"),
    }
}

pub fn format_optimize_progress(position: usize, total: usize, filename: &str) -> String {
    format!("  [{position}/{total}] {filename}")
}

pub fn format_optimize_summary(report: &OptimizeReport, output_base: &Path) -> String {
    format!(
        "Optimized: {} written, {} up to date -> {}",
        report.written,
        report.skipped,
        output_base.display()
    )
}

// ============================================================================
// Site builder
// ============================================================================

pub fn format_section_status(name: &str, replaced: bool) -> String {
    if replaced {
        format!("  {name}: replaced")
    } else {
        format!("  {name}: markers not found, skipping")
    }
}

pub fn format_site_summary(report: &SiteReport) -> String {
    format!(
        "Site updated: {} sections replaced, {} skipped ({} images)",
        report.replaced.len(),
        report.skipped.len(),
        report.image_count
    )
}

// ============================================================================
// Gallery-only builder
// ============================================================================

pub fn format_gallery_summary(report: &GalleryReport) -> String {
    match report.images.len() {
        1 => "Gallery updated (1 image)".to_string(),
        n => format!("Gallery updated ({n} images)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_count_pluralizes() {
        assert_eq!(format_image_count(0), "No source images found");
        assert_eq!(format_image_count(1), "Found 1 source image");
        assert_eq!(format_image_count(3), "Found 3 source images");
    }

    #[test]
    fn progress_line_shows_position_and_name() {
        assert_eq!(
            format_optimize_progress(2, 12, "ride.jpg"),
            "  [2/12] ride.jpg"
        );
    }

    #[test]
    fn optimize_summary_names_output_dir() {
        let report = OptimizeReport {
            sources: vec!["a.jpg".to_string()],
            written: 4,
            skipped: 0,
        };
        assert_eq!(
            format_optimize_summary(&report, Path::new("Pictures/optimized")),
            "Optimized: 4 written, 0 up to date -> Pictures/optimized"
        );
    }

    #[test]
    fn section_status_lines() {
        assert_eq!(format_section_status("hero", true), "  hero: replaced");
        assert_eq!(
            format_section_status("bike", false),
            "  bike: markers not found, skipping"
        );
    }

    #[test]
    fn site_summary_counts() {
        let report = SiteReport {
            replaced: vec!["hero", "stats"],
            skipped: vec!["bike"],
            image_count: 7,
        };
        assert_eq!(
            format_site_summary(&report),
            "Site updated: 2 sections replaced, 1 skipped (7 images)"
        );
    }

    #[test]
    fn gallery_summary_pluralizes() {
        let one = GalleryReport {
            images: vec!["a.jpg".to_string()],
        };
        assert_eq!(format_gallery_summary(&one), "Gallery updated (1 image)");

        let two = GalleryReport {
            images: vec!["a.jpg".to_string(), "b.jpg".to_string()],
        };
        assert_eq!(format_gallery_summary(&two), "Gallery updated (2 images)");
    }
}
