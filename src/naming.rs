//! Page-prefix filename parsing.
//!
//! Screenshots follow one convention: a decimal page number, an underscore,
//! then anything, with a `.png` extension. The extension comparison is
//! ASCII case-insensitive, so `7_map.PNG` counts.
//!
//! - `3_settings.png` → page 3
//! - `007_map.png` → page 7
//! - `112_appendix.PNG` → page 112
//! - `cover.png`, `12-intro.png`, `notes.txt` → not screenshots

/// Parse the page number from a screenshot filename.
///
/// Returns `None` for anything that is not a `<digits>_<anything>.png` name; a
/// non-match is not an error, the file is simply not a screenshot. Digit
/// runs that do not fit in `u32` are treated as non-matches as well.
pub fn parse_page_prefix(name: &str) -> Option<u32> {
    let bytes = name.as_bytes();
    if bytes.len() < 4 || !bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".png") {
        return None;
    }

    let digit_end = bytes
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(bytes.len());
    if digit_end == 0 || bytes.get(digit_end) != Some(&b'_') {
        return None;
    }

    // Slicing on an ASCII-digit boundary is always char-safe
    name[..digit_end].parse().ok()
}
