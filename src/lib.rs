//! # screenstitch
//!
//! Stitches a directory of numbered PNG screenshots into a single collage,
//! stacked vertically or horizontally. Your filesystem is the data source:
//! files named `<page>_<anything>.png` are picked up and ordered by their
//! numeric page prefix; everything else in the directory is ignored.
//!
//! # Architecture: Single-Pass Pipeline
//!
//! ```text
//! 1. Select   directory  →  Vec<PageEntry>   (scan + page-number ordering)
//! 2. Filter   entries    →  entries          (drop page 112 for the ALL collage)
//! 3. Decode   entries    →  Vec<RgbImage>    (flatten to RGB, no alpha)
//! 4. Compose  images     →  RgbImage         (one canvas, no gaps, no overlaps)
//! 5. Write    canvas     →  collage_<label>.png
//! ```
//!
//! The whole run is a synchronous batch transform. Nothing is cached, nothing
//! survives between invocations, and no output file is produced unless every
//! selected input decoded and the full canvas composed.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | `<digits>_` page-prefix filename parser |
//! | [`scan`] | Directory selection, page ordering, and the page-112 exclusion |
//! | [`stitch`] | Layout math and canvas compositing |
//! | [`write`] | Label sanitization and PNG encoding with compression fallback |
//! | [`run`] | Orchestration — wires the stages into one pipeline |
//! | [`config`] | Fixed composition constants (background, margin, compression) |
//! | [`output`] | CLI status-line formatting |
//!
//! # Design Decisions
//!
//! ## No Resizing, Ever
//!
//! The canvas is sized to fit the inputs exactly: the cross-axis takes the
//! maximum input dimension, the main axis the sum. Narrower (or shorter)
//! images are painted at the origin of their slot and the white background
//! shows through the remainder. Scaling screenshots would blur text, so the
//! tool never does it.
//!
//! ## Pure-Rust Imaging
//!
//! Decode, composite, and encode all go through the `image` crate with only
//! the PNG codec compiled in. No ImageMagick, no system libraries — the
//! binary is fully self-contained.
//!
//! ## Layout as Pure Math
//!
//! [`stitch::compute_layout`] turns a list of input dimensions into canvas
//! size plus per-image offsets without touching a pixel. Every geometry
//! property (sums, maxima, margins between consecutive images only) is unit
//! tested against plain tuples; the compositor just paints what the layout
//! says.

pub mod config;
pub mod naming;
pub mod output;
pub mod run;
pub mod scan;
pub mod stitch;
pub mod write;

#[cfg(test)]
pub(crate) mod test_helpers;
