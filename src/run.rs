//! Pipeline orchestration: select → filter → decode → compose → write.
//!
//! [`run`] is the whole program minus argument parsing and printing, which
//! keeps every terminal case testable against a temp directory. The two
//! empty-input cases are ordinary [`Outcome`]s, not errors — finding nothing
//! to do is a normal end state for this tool. A decode failure, on the other
//! hand, aborts the run before any output exists: no skip-and-continue, no
//! partial collage.

use crate::config::StitchConfig;
use crate::scan::{self, ScanError};
use crate::stitch::{self, Direction, StitchError};
use crate::write::{self, WriteError};
use image::{ImageReader, RgbImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("failed to decode {}: {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to open {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Stitch(#[from] StitchError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Per-run settings from the CLI.
#[derive(Debug, Clone)]
pub struct Options {
    pub direction: Direction,
    pub label: String,
    /// Keep page 112 in the `ALL` collage.
    pub keep_excluded: bool,
}

/// How a run ended. All three cases exit zero; only [`RunError`] fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The directory holds no numbered PNG screenshots.
    NoScreenshots,
    /// Every screenshot was page 112 and the exclusion removed them all.
    NothingAfterExclusion,
    /// The collage was written to this path.
    Written(PathBuf),
}

/// Execute one collage build over `dir`.
///
/// Single-threaded, single pass. The decoded buffers live exactly as long
/// as composition: [`stitch::compose`] consumes the `Vec` and drops every
/// buffer on its way out, success or failure.
pub fn run(dir: &Path, options: &Options, config: &StitchConfig) -> Result<Outcome, RunError> {
    let entries = scan::select(dir)?;
    if entries.is_empty() {
        return Ok(Outcome::NoScreenshots);
    }

    let entries = scan::apply_exclusion(entries, &options.label, options.keep_excluded);
    if entries.is_empty() {
        return Ok(Outcome::NothingAfterExclusion);
    }

    let mut images = Vec::with_capacity(entries.len());
    for entry in &entries {
        images.push(load_flattened(&entry.path)?);
    }

    let canvas = stitch::compose(images, options.direction, config)?;
    let path = write::write(&canvas, dir, &options.label, config)?;
    Ok(Outcome::Written(path))
}

/// Decode a PNG and flatten it to RGB, discarding any alpha channel.
fn load_flattened(path: &Path) -> Result<RgbImage, RunError> {
    let reader = ImageReader::open(path).map_err(|source| RunError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let image = reader.decode().map_err(|source| RunError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_png;
    use image::{ImageReader, Rgb};
    use tempfile::TempDir;

    fn defaults() -> Options {
        Options {
            direction: Direction::Vertical,
            label: "ALL".to_string(),
            keep_excluded: false,
        }
    }

    #[test]
    fn empty_directory_reports_no_screenshots() {
        let tmp = TempDir::new().unwrap();
        let outcome = run(tmp.path(), &defaults(), &StitchConfig::default()).unwrap();
        assert_eq!(outcome, Outcome::NoScreenshots);
        assert!(!tmp.path().join("collage_ALL.png").exists());
    }

    #[test]
    fn only_excluded_pages_reports_nothing_left() {
        let tmp = TempDir::new().unwrap();
        write_png(tmp.path(), "112_legal.png", 4, 4, [0, 0, 0]);

        let outcome = run(tmp.path(), &defaults(), &StitchConfig::default()).unwrap();
        assert_eq!(outcome, Outcome::NothingAfterExclusion);
        assert!(!tmp.path().join("collage_ALL.png").exists());
    }

    #[test]
    fn default_run_stitches_pages_in_order_without_112() {
        // Reference scenario: 10×20 + 30×20 stacked, 10×10 page excluded.
        let tmp = TempDir::new().unwrap();
        write_png(tmp.path(), "3_a.png", 10, 20, [255, 0, 0]);
        write_png(tmp.path(), "5_b.png", 30, 20, [0, 255, 0]);
        write_png(tmp.path(), "112_c.png", 10, 10, [0, 0, 255]);

        let outcome = run(tmp.path(), &defaults(), &StitchConfig::default()).unwrap();
        let Outcome::Written(path) = outcome else {
            panic!("expected a written collage, got {outcome:?}");
        };
        assert_eq!(path.file_name().unwrap(), "collage_ALL.png");

        let collage = ImageReader::open(&path).unwrap().decode().unwrap().to_rgb8();
        assert_eq!(collage.dimensions(), (30, 40));
        // page 3 on top, left-aligned, white to its right
        assert_eq!(*collage.get_pixel(5, 10), Rgb([255, 0, 0]));
        assert_eq!(*collage.get_pixel(20, 10), Rgb([255, 255, 255]));
        // page 5 below
        assert_eq!(*collage.get_pixel(20, 30), Rgb([0, 255, 0]));
    }

    #[test]
    fn keep_excluded_appends_page_112() {
        let tmp = TempDir::new().unwrap();
        write_png(tmp.path(), "3_a.png", 10, 20, [255, 0, 0]);
        write_png(tmp.path(), "5_b.png", 30, 20, [0, 255, 0]);
        write_png(tmp.path(), "112_c.png", 10, 10, [0, 0, 255]);

        let options = Options {
            keep_excluded: true,
            ..defaults()
        };
        let Outcome::Written(path) = run(tmp.path(), &options, &StitchConfig::default()).unwrap()
        else {
            panic!("expected a written collage");
        };

        let collage = ImageReader::open(&path).unwrap().decode().unwrap().to_rgb8();
        assert_eq!(collage.dimensions(), (30, 50));
        assert_eq!(*collage.get_pixel(5, 45), Rgb([0, 0, 255]));
    }

    #[test]
    fn non_all_label_keeps_112_and_names_the_file() {
        let tmp = TempDir::new().unwrap();
        write_png(tmp.path(), "112_c.png", 10, 10, [0, 0, 255]);

        let options = Options {
            label: "Chapter 7!".to_string(),
            ..defaults()
        };
        let Outcome::Written(path) = run(tmp.path(), &options, &StitchConfig::default()).unwrap()
        else {
            panic!("expected a written collage");
        };
        assert_eq!(path.file_name().unwrap(), "collage_Chapter_7_.png");
    }

    #[test]
    fn horizontal_run_stitches_left_to_right() {
        let tmp = TempDir::new().unwrap();
        write_png(tmp.path(), "1_a.png", 4, 6, [255, 0, 0]);
        write_png(tmp.path(), "2_b.png", 4, 6, [0, 255, 0]);

        let options = Options {
            direction: Direction::Horizontal,
            ..defaults()
        };
        let Outcome::Written(path) = run(tmp.path(), &options, &StitchConfig::default()).unwrap()
        else {
            panic!("expected a written collage");
        };

        let collage = ImageReader::open(&path).unwrap().decode().unwrap().to_rgb8();
        assert_eq!(collage.dimensions(), (8, 6));
        assert_eq!(*collage.get_pixel(2, 3), Rgb([255, 0, 0]));
        assert_eq!(*collage.get_pixel(6, 3), Rgb([0, 255, 0]));
    }

    #[test]
    fn alpha_inputs_are_flattened_on_load() {
        let tmp = TempDir::new().unwrap();
        let rgba = image::RgbaImage::from_pixel(3, 3, image::Rgba([10, 20, 30, 0]));
        rgba.save(tmp.path().join("1_a.png")).unwrap();

        let Outcome::Written(path) = run(tmp.path(), &defaults(), &StitchConfig::default()).unwrap()
        else {
            panic!("expected a written collage");
        };
        let collage = ImageReader::open(&path).unwrap().decode().unwrap().to_rgb8();
        // alpha is discarded, not blended against the background
        assert_eq!(*collage.get_pixel(1, 1), Rgb([10, 20, 30]));
    }

    #[test]
    fn malformed_screenshot_aborts_with_no_output() {
        let tmp = TempDir::new().unwrap();
        write_png(tmp.path(), "1_good.png", 4, 4, [0, 0, 0]);
        std::fs::write(tmp.path().join("2_bad.png"), b"this is not a png").unwrap();

        let result = run(tmp.path(), &defaults(), &StitchConfig::default());
        assert!(matches!(result, Err(RunError::Decode { .. })));
        assert!(!tmp.path().join("collage_ALL.png").exists());
    }

    #[test]
    fn duplicate_pages_both_appear() {
        let tmp = TempDir::new().unwrap();
        write_png(tmp.path(), "3_first.png", 4, 2, [255, 0, 0]);
        write_png(tmp.path(), "3_second.png", 4, 2, [0, 255, 0]);

        let Outcome::Written(path) = run(tmp.path(), &defaults(), &StitchConfig::default()).unwrap()
        else {
            panic!("expected a written collage");
        };
        let collage = ImageReader::open(&path).unwrap().decode().unwrap().to_rgb8();
        assert_eq!(collage.dimensions(), (4, 4));
    }
}
