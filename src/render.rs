use std::io::{self, Write};

use crate::art::{BANNER, DIGIT_GLYPHS, LABEL};
use crate::consts::{GLYPH_HEIGHT, GLYPH_WIDTH, MIN_RENDER_DIGITS};

/// Error type for streaming a rendered countdown to a writer.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct RenderError(#[from] io::Error);

/// Splits the day count into decimal digit values, zero-padded on the
/// left to at least `MIN_RENDER_DIGITS` digits. Counts with more digits
/// widen naturally instead of being clamped or truncated.
fn count_digits(days: u16) -> Vec<usize> {
    format!("{days:0width$}", width = MIN_RENDER_DIGITS)
        .bytes()
        .map(|b| usize::from(b - b'0'))
        .collect()
}

/// Right-pads a glyph row with spaces to `GLYPH_WIDTH` columns.
fn pad_row(row: &str) -> String {
    format!("{row:<GLYPH_WIDTH$}")
}

/// Composes the day count into `GLYPH_HEIGHT` unindented text rows, one
/// glyph per digit, most significant digit leftmost. Every glyph is
/// padded to `GLYPH_WIDTH`, the last one included, so each row is
/// exactly `digits * GLYPH_WIDTH` characters wide.
pub fn count_lines(days: u16) -> Vec<String> {
    let digits = count_digits(days);
    (0..GLYPH_HEIGHT)
        .map(|row| {
            let mut line = String::with_capacity(digits.len() * GLYPH_WIDTH);
            for &digit in &digits {
                line.push_str(&pad_row(DIGIT_GLYPHS[digit][row]));
            }
            line
        })
        .collect()
}

/// Renders the full countdown: banner, glyph rows, a blank line, then
/// the label. Every banner and glyph line is prefixed with `indent`
/// spaces; the blank separator line carries no indent. Lines are
/// newline-terminated.
pub fn render(days: u16, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut out = String::new();

    for line in BANNER.lines() {
        out.push_str(&pad);
        out.push_str(line);
        out.push('\n');
    }

    for line in count_lines(days) {
        out.push_str(&pad);
        out.push_str(&line);
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&pad);
    out.push_str(LABEL);
    out.push('\n');

    out
}

/// Streams the rendered countdown to any writer.
///
/// # Errors
/// Returns `RenderError` if writing to `out` fails.
pub fn write_countdown<W: Write>(out: &mut W, days: u16, indent: usize) -> Result<(), RenderError> {
    out.write_all(render(days, indent).as_bytes())?;
    out.flush()?;
    Ok(())
}
