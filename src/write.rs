//! Output naming and PNG encoding.
//!
//! The collage is written as `collage_<label>.png` next to the inputs. The
//! label is sanitized the same way for every run: each run of characters
//! outside `[A-Za-z0-9_-]` collapses to a single underscore, and an empty
//! label falls back to `ALL`.
//!
//! Encoding is two-phase: the canvas is encoded into memory first and the
//! bytes hit disk in one write, so a failed encode never leaves a partial
//! file at the output path. The preferred maximum-effort compression gets
//! one fallback to the encoder defaults if it is rejected; disk errors are
//! fatal and propagate.

use crate::config::StitchConfig;
use image::RgbImage;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PNG encode failed: {0}")]
    Encode(image::ImageError),
}

/// Collapse every run of characters outside `[A-Za-z0-9_-]` to one `_`.
///
/// The label is trimmed first; if nothing is left, the literal `ALL` is
/// substituted so the output filename is never `collage_.png`.
pub fn sanitize_label(label: &str) -> String {
    let mut out = String::new();
    let mut in_run = false;
    for ch in label.trim().chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            out.push(ch);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    if out.is_empty() {
        out.push_str(crate::scan::ALL_LABEL);
    }
    out
}

/// Output filename for a label: `collage_<sanitized>.png`.
pub fn output_file_name(label: &str) -> String {
    format!("collage_{}.png", sanitize_label(label))
}

/// Encode the canvas and write it into `dir`, returning the absolute path.
///
/// The first encode attempt uses the compression settings from `config`;
/// if the encoder rejects them (an older encoder build, for instance) the
/// canvas is re-encoded once with [`CompressionType::Default`]. That
/// fallback is a compatibility measure and is never surfaced to the user —
/// a failure of the second attempt is a real error.
pub fn write(
    canvas: &RgbImage,
    dir: &Path,
    label: &str,
    config: &StitchConfig,
) -> Result<PathBuf, WriteError> {
    let path = dir.join(output_file_name(label));

    let bytes = match encode(canvas, config.compression, config.filter) {
        Ok(bytes) => bytes,
        Err(_) => encode(canvas, CompressionType::Default, config.filter)
            .map_err(WriteError::Encode)?,
    };

    fs::write(&path, bytes)?;
    Ok(std::path::absolute(path)?)
}

fn encode(
    canvas: &RgbImage,
    compression: CompressionType,
    filter: FilterType,
) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut bytes, compression, filter);
    canvas.write_with_encoder(encoder)?;
    Ok(bytes)
}
