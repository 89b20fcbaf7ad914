//! Template document I/O and the marker splice protocol.
//!
//! The template contains comment-line marker pairs delimiting replaceable
//! regions. Two marker styles exist:
//!
//! - **Per-section pairs**, used by the site builder:
//!   `<!-- SECTION-START:name -->` ... `<!-- SECTION-END:name -->`
//! - **One combined pair**, used by the gallery-only tool: a line
//!   containing `<!-- GALLERY-START` (trailing text on the line is
//!   allowed) and a line containing `<!-- GALLERY-END -->`
//!
//! Markers are located structurally: lines are scanned for the literal
//! token, exactly one start and one end are required per name, and the
//! replacement covers only the interior — both marker lines survive every
//! build, including the end marker's indentation. Everything outside a
//! region is preserved byte for byte.
//!
//! The mutation itself is a whole-file read, a full in-memory rewrite, and
//! a single write-then-rename, so an interrupted run never leaves a
//! half-updated template behind.

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarkerError {
    #[error("start marker for '{0}' not found")]
    MissingStart(String),
    #[error("end marker for '{0}' not found")]
    MissingEnd(String),
    #[error("duplicate marker for '{0}'")]
    Duplicate(String),
    #[error("end marker for '{0}' precedes its start marker")]
    EndBeforeStart(String),
}

impl MarkerError {
    /// True for plain absent-marker cases — the ones a lenient builder may
    /// skip. Duplicate or inverted markers are never skippable.
    pub fn is_missing(&self) -> bool {
        matches!(self, MarkerError::MissingStart(_) | MarkerError::MissingEnd(_))
    }
}

/// What a builder does when a region's markers are absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingMarkers {
    /// Warn and leave the template untouched for that region (site builder).
    Skip,
    /// Abort the whole run (gallery-only builder).
    Fail,
}

/// Byte range of a region's interior. Marker lines sit outside the range;
/// the end marker's leading indentation belongs to the marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

/// Locate the region delimited by a named section marker pair.
pub fn section_region(template: &str, name: &str) -> Result<Region, MarkerError> {
    let start_token = format!("<!-- SECTION-START:{name} -->");
    let end_token = format!("<!-- SECTION-END:{name} -->");
    find_region(template, &start_token, &end_token, name)
}

/// Locate the region delimited by the combined gallery marker pair.
pub fn gallery_region(template: &str) -> Result<Region, MarkerError> {
    find_region(template, "<!-- GALLERY-START", "<!-- GALLERY-END -->", "gallery")
}

fn find_region(
    template: &str,
    start_token: &str,
    end_token: &str,
    name: &str,
) -> Result<Region, MarkerError> {
    let mut interior_start: Option<usize> = None;
    let mut interior_end: Option<usize> = None;
    let mut offset = 0;

    for line in template.split_inclusive('\n') {
        if line.contains(start_token) {
            if interior_start.is_some() {
                return Err(MarkerError::Duplicate(name.to_string()));
            }
            interior_start = Some(offset + line.len());
        } else if line.contains(end_token) {
            if interior_end.is_some() {
                return Err(MarkerError::Duplicate(name.to_string()));
            }
            interior_end = Some(offset);
        }
        offset += line.len();
    }

    let start = interior_start.ok_or_else(|| MarkerError::MissingStart(name.to_string()))?;
    let end = interior_end.ok_or_else(|| MarkerError::MissingEnd(name.to_string()))?;
    if end < start {
        return Err(MarkerError::EndBeforeStart(name.to_string()));
    }
    Ok(Region { start, end })
}

/// Replace a region's interior, leaving every byte outside it untouched.
///
/// The fragment is newline-terminated so the end marker keeps its own line.
pub fn splice(template: &str, region: Region, fragment: &str) -> String {
    let mut out = String::with_capacity(template.len() + fragment.len());
    out.push_str(&template[..region.start]);
    out.push_str(fragment);
    if !fragment.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&template[region.end..]);
    out
}

/// Write the updated template with a write-then-rename.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let tmp_name = match path.file_name() {
        Some(name) => {
            let mut s = name.to_os_string();
            s.push(".tmp");
            s
        }
        None => ".tmp".into(),
    };
    let tmp = path.with_file_name(tmp_name);
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}
