//! JSON-driven site builder — the second stage of the build pipeline.
//!
//! Renders each content section to an HTML fragment and splices it into the
//! template at the matching marker pair. Sections whose markers are absent
//! are skipped with a warning; the build succeeds with partial replacement.
//! Missing input files and content errors are fatal before any mutation.
//!
//! All filesystem work happens here: one read of the content document, one
//! read of the template, and a single atomic write of the fully updated
//! text. Section rendering itself is pure (see [`crate::sections`]).

use crate::config::BuildConfig;
use crate::content::{ContentDoc, ContentError};
use crate::output;
use crate::scan;
use crate::sections;
use crate::template::{self, MarkerError, MissingMarkers};
use maud::Markup;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("content document not found: {0}")]
    ContentMissing(PathBuf),
    #[error("template not found: {0}")]
    TemplateMissing(PathBuf),
    #[error("content error: {0}")]
    Content(#[from] ContentError),
    #[error("marker error: {0}")]
    Marker(#[from] MarkerError),
}

/// The recognized content sections, in replacement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Stats,
    Achievements,
    Gallery,
    Bike,
    Motivation,
    Footer,
}

impl Section {
    pub const ORDER: [Section; 7] = [
        Section::Hero,
        Section::Stats,
        Section::Achievements,
        Section::Gallery,
        Section::Bike,
        Section::Motivation,
        Section::Footer,
    ];

    /// Marker name of this section in the template.
    pub fn name(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Stats => "stats",
            Section::Achievements => "achievements",
            Section::Gallery => "gallery",
            Section::Bike => "bike",
            Section::Motivation => "motivation",
            Section::Footer => "footer",
        }
    }
}

/// Outcome of a site build.
#[derive(Debug, Default)]
pub struct SiteReport {
    pub replaced: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
    pub image_count: usize,
}

/// How this builder treats absent markers. The site builder is lenient;
/// the gallery-only tool is the strict one.
const MARKER_POLICY: MissingMarkers = MissingMarkers::Skip;

pub fn build_site(config: &BuildConfig) -> Result<SiteReport, SiteError> {
    if !config.content_path.is_file() {
        return Err(SiteError::ContentMissing(config.content_path.clone()));
    }
    if !config.template_path.is_file() {
        return Err(SiteError::TemplateMissing(config.template_path.clone()));
    }

    let doc = ContentDoc::load(&config.content_path)?;
    let images = scan::discover_images(&config.pictures_dir)?;
    let mut html = fs::read_to_string(&config.template_path)?;

    let mut report = SiteReport {
        image_count: images.len(),
        ..Default::default()
    };

    for section in Section::ORDER {
        let name = section.name();
        match template::section_region(&html, name) {
            Ok(region) => {
                // Markers first: a section is only extracted from the
                // document once its region is known to exist.
                let fragment = render_section(section, &doc, &images, config)?;
                html = template::splice(&html, region, &fragment.into_string());
                println!("{}", output::format_section_status(name, true));
                report.replaced.push(name);
            }
            Err(err) if err.is_missing() && MARKER_POLICY == MissingMarkers::Skip => {
                println!("{}", output::format_section_status(name, false));
                report.skipped.push(name);
            }
            Err(err) => return Err(err.into()),
        }
    }

    template::write_atomic(&config.template_path, &html)?;
    Ok(report)
}

fn render_section(
    section: Section,
    doc: &ContentDoc,
    images: &[String],
    config: &BuildConfig,
) -> Result<Markup, SiteError> {
    let markup = match section {
        Section::Hero => sections::render_hero(&doc.section(section.name())?),
        Section::Stats => {
            sections::render_stats(&doc.section::<Vec<crate::content::Stat>>(section.name())?)
        }
        Section::Achievements => sections::render_achievements(&doc.section(section.name())?),
        Section::Gallery => sections::render_gallery(images, config),
        Section::Bike => sections::render_bike(&doc.section(section.name())?),
        Section::Motivation => sections::render_motivation(&doc.section(section.name())?),
        Section::Footer => sections::render_footer(&doc.section(section.name())?),
    };
    Ok(markup)
}
