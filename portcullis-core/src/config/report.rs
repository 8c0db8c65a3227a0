//! Framing helpers for configuration diagnostics
//!
//! The firmware build script prints configuration errors inside a fixed
//! width box. Error text may quote `gate.toml`, which can hold any UTF-8,
//! so widths are counted in characters.

/// Fit a line into `width` characters
///
/// Returns the line unchanged if it fits. Otherwise returns the longest
/// prefix that leaves room for a three-character ellipsis, and `true` to
/// ask the caller to append it.
pub fn ellipsize(line: &str, width: usize) -> (&str, bool) {
    if line.chars().count() <= width {
        return (line, false);
    }

    let keep = width.saturating_sub(3);
    let end = line
        .char_indices()
        .nth(keep)
        .map(|(index, _)| index)
        .unwrap_or(line.len());
    (&line[..end], true)
}
