//! Style markers wrapped around rendered lines.
//!
//! The renderer never interprets these; a terminal layer decides what the
//! strings mean. [`Palette::ansi`] is the usual choice for a color terminal,
//! [`Palette::plain`] for pipes and tests.

/// Named style markers used by the table renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Opens the header line.
    pub underline: String,
    /// Opens even in-page rows (first, third, ...).
    pub row_even: String,
    /// Opens odd in-page rows.
    pub row_odd: String,
    /// Closes every line.
    pub reset: String,
}

impl Palette {
    /// Empty markers: output is plain text.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            underline: String::new(),
            row_even: String::new(),
            row_odd: String::new(),
            reset: String::new(),
        }
    }

    /// ANSI SGR markers: underline header, red and magenta rows.
    #[must_use]
    pub fn ansi() -> Self {
        Self {
            underline: String::from("\x1b[4m"),
            row_even: String::from("\x1b[31m"),
            row_odd: String::from("\x1b[35m"),
            reset: String::from("\x1b[0m"),
        }
    }

    /// Marker opening the `n`-th row of a page (0-based).
    #[must_use]
    pub fn row(&self, n: usize) -> &str {
        if n % 2 == 0 {
            &self.row_even
        } else {
            &self.row_odd
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}
