//! Display-width aware text helpers.
//!
//! Terminal cells are counted with `unicode-width`, so East Asian wide
//! glyphs occupy two columns and combining marks none. Text is composed
//! to NFC first so decomposed input measures the same as precomposed.

use unicode_normalization::UnicodeNormalization;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns the number of terminal columns `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    let composed: String = text.nfc().collect();
    UnicodeWidthStr::width(composed.as_str())
}

/// Truncates `text` to at most `width` columns without splitting a glyph.
///
/// Returns the kept prefix and its display width.
fn take_prefix_width(text: &str, width: usize) -> (String, usize) {
    let mut out = String::new();
    let mut used: usize = 0;
    for ch in text.nfc() {
        if ch.is_control() {
            continue;
        }
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        let Some(next) = used.checked_add(w) else {
            break;
        };
        if next > width {
            break;
        }
        out.push(ch);
        used = next;
    }
    (out, used)
}

/// Left-justifies `text` into exactly `width` columns.
///
/// Longer text is truncated, shorter text gets trailing spaces. A wide
/// glyph that would straddle the edge is dropped and replaced by a space.
/// Applying it twice yields the same string.
#[must_use]
pub fn fit_width(text: &str, width: usize) -> String {
    let (mut out, used) = take_prefix_width(text, width);
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Right-justifies `text` into exactly `width` columns.
#[must_use]
pub fn fit_width_right(text: &str, width: usize) -> String {
    let (kept, used) = take_prefix_width(text, width);
    let mut out = " ".repeat(width.saturating_sub(used));
    out.push_str(&kept);
    out
}

/// Formats a duration in seconds for the `length` column.
///
/// - below 100 minutes: `MM:SS` (minutes run past 59, e.g. `99:59`)
/// - below 10 hours: `H:MM:SS`
/// - otherwise: `HH:MM:SS`
#[must_use]
pub fn fmt_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if seconds < 6000 {
        format!("{:02}:{secs:02}", seconds / 60)
    } else {
        format!("{hours}:{minutes:02}:{secs:02}")
    }
}
