//! Input selection: directory scan, page ordering, and the ALL exclusion.
//!
//! [`select`] lists one directory (no recursion), keeps the files whose names
//! parse via [`naming`](crate::naming), and returns them sorted by page
//! number. Files that don't match are silently skipped — a screenshots
//! directory routinely also holds the previous collage output, notes, and so
//! on.
//!
//! [`apply_exclusion`] implements the one filtering rule: the `ALL` collage
//! drops page 112 unless the caller asks to keep it. Page 112 is the
//! boilerplate legal page that appears in every capture run but belongs in no
//! collage.

use crate::naming;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The page dropped from `ALL` collages unless `--keep-112` is passed.
pub const EXCLUDED_PAGE: u32 = 112;

/// The label value that triggers the exclusion rule.
pub const ALL_LABEL: &str = "ALL";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A screenshot discovered in the input directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    /// Page number parsed from the filename prefix.
    pub page: u32,
    /// Full path to the file.
    pub path: PathBuf,
}

/// Scan `dir` for numbered PNG screenshots, sorted ascending by page.
///
/// Page numbers need not be contiguous or unique. Duplicates are all kept;
/// the sort is stable, so entries with equal pages stay in directory
/// enumeration order. Directories with screenshot-shaped names are skipped.
pub fn select(dir: &Path) -> Result<Vec<PageEntry>, ScanError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let Some(page) = naming::parse_page_prefix(name) else {
            continue;
        };
        if !entry.file_type()?.is_file() {
            continue;
        }
        entries.push(PageEntry {
            page,
            path: entry.path(),
        });
    }
    entries.sort_by_key(|entry| entry.page);
    Ok(entries)
}

/// Drop page 112 from an `ALL` collage, preserving order.
///
/// The rule fires only when `label` equals `"ALL"` (ASCII case-insensitive)
/// and `keep_excluded` is false; any other label passes the entries through
/// untouched. An empty result is a "nothing to do" condition the caller must
/// report, not an error here.
pub fn apply_exclusion(
    entries: Vec<PageEntry>,
    label: &str,
    keep_excluded: bool,
) -> Vec<PageEntry> {
    if label.eq_ignore_ascii_case(ALL_LABEL) && !keep_excluded {
        entries
            .into_iter()
            .filter(|entry| entry.page != EXCLUDED_PAGE)
            .collect()
    } else {
        entries
    }
}
