//! Layout math and canvas compositing.
//!
//! The compositor is split the way every geometry problem should be:
//! [`compute_layout`] is pure dimension math over `(width, height)` tuples,
//! and [`compose`] paints what the layout says. Canvas dimensions are fully
//! determined before the first pixel is written — no input is ever resized,
//! scaled, or cropped.
//!
//! ## Geometry
//!
//! Vertical stack of N images:
//!
//! ```text
//! canvas width  = max(widths)
//! canvas height = sum(heights) + margin × (N − 1)
//! image i at (0, heights[..i] + margins so far)
//! ```
//!
//! Horizontal is the mirror image. Images are origin-aligned in their slot
//! (x = 0 for vertical, y = 0 for horizontal); a narrower input leaves the
//! background color visible in the remainder. No centering.

use crate::config::StitchConfig;
use clap::ValueEnum;
use image::{RgbImage, imageops};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StitchError {
    #[error("no images to stitch")]
    EmptyInput,
}

/// Stacking direction for the collage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// Stack top-to-bottom (reading order for page screenshots).
    Vertical,
    /// Stack left-to-right.
    Horizontal,
}

/// Canvas dimensions plus the paint offset of every input, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub offsets: Vec<(u32, u32)>,
}

/// Compute canvas size and per-image offsets from input dimensions alone.
///
/// The margin sits strictly between consecutive images: N images get
/// N − 1 margins, a single image gets none. An empty input produces an
/// empty 0×0 layout; [`compose`] rejects that case before painting.
pub fn compute_layout(sizes: &[(u32, u32)], direction: Direction, margin: u32) -> Layout {
    let margin_total = margin * sizes.len().saturating_sub(1) as u32;
    let mut offsets = Vec::with_capacity(sizes.len());

    match direction {
        Direction::Vertical => {
            let mut offset_y = 0;
            for &(_, height) in sizes {
                offsets.push((0, offset_y));
                offset_y += height + margin;
            }
            Layout {
                width: sizes.iter().map(|&(w, _)| w).max().unwrap_or(0),
                height: sizes.iter().map(|&(_, h)| h).sum::<u32>() + margin_total,
                offsets,
            }
        }
        Direction::Horizontal => {
            let mut offset_x = 0;
            for &(width, _) in sizes {
                offsets.push((offset_x, 0));
                offset_x += width + margin;
            }
            Layout {
                width: sizes.iter().map(|&(w, _)| w).sum::<u32>() + margin_total,
                height: sizes.iter().map(|&(_, h)| h).max().unwrap_or(0),
                offsets,
            }
        }
    }
}

/// Paint the images onto a fresh background-filled canvas.
///
/// Fails with [`StitchError::EmptyInput`] for an empty sequence — the one
/// hard error in the normal control path; callers rule it out via the
/// emptiness checks in [`run`](crate::run). Painting is destructive
/// overwrite: inputs were flattened to RGB on load, so there is no alpha to
/// blend. The input buffers are consumed and freed when this returns,
/// success or not.
pub fn compose(
    images: Vec<RgbImage>,
    direction: Direction,
    config: &StitchConfig,
) -> Result<RgbImage, StitchError> {
    if images.is_empty() {
        return Err(StitchError::EmptyInput);
    }

    let sizes: Vec<(u32, u32)> = images.iter().map(|image| image.dimensions()).collect();
    let layout = compute_layout(&sizes, direction, config.margin);

    let mut canvas = RgbImage::from_pixel(layout.width, layout.height, config.background);
    for (image, &(x, y)) in images.iter().zip(&layout.offsets) {
        imageops::replace(&mut canvas, image, i64::from(x), i64::from(y));
    }
    Ok(canvas)
}
