//! Fixed composition constants.
//!
//! One immutable struct carries everything the compositor and writer need:
//! background color, inter-image margin, and the PNG encoder settings. It is
//! passed explicitly into [`stitch::compose`](crate::stitch::compose) and
//! [`write::write`](crate::write::write) — there is no process-wide mutable
//! state, and nothing here is exposed as a per-run CLI option.

use image::Rgb;
use image::codecs::png::{CompressionType, FilterType};

/// Composition and encoding settings.
#[derive(Debug, Clone, Copy)]
pub struct StitchConfig {
    /// Canvas fill color, visible wherever an input is narrower or shorter
    /// than the canvas.
    pub background: Rgb<u8>,
    /// Pixels inserted strictly between consecutive images — never before
    /// the first or after the last.
    pub margin: u32,
    /// Preferred PNG compression. On encoder rejection the writer falls
    /// back to [`CompressionType::Default`] once.
    pub compression: CompressionType,
    /// PNG scanline filter strategy.
    pub filter: FilterType,
}

impl Default for StitchConfig {
    fn default() -> Self {
        Self {
            background: Rgb([255, 255, 255]),
            margin: 0,
            compression: CompressionType::Best,
            filter: FilterType::Adaptive,
        }
    }
}
