//! Song-title candidates, as extracted from a video description.

use super::{ItemKind, ListItem};
use crate::text::fit_width;

/// Rendering of a checked row in the `checked` column.
const CHECKED_MARK: &str = "  X  ";
/// Rendering of an unchecked row in the `checked` column.
const UNCHECKED_MARK: &str = "     ";

/// Columns a song-title row can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongTitleField {
    /// Artist name.
    Artist,
    /// Song title.
    Title,
    /// Fixed five-column check mark.
    Checked,
    /// Extraction certainty, two decimals.
    Certainty,
}

/// An `(artist, title)` guess with interactive include/exclude state.
#[derive(Debug, Clone, PartialEq)]
pub struct SongTitle {
    artist: String,
    title: String,
    certainty: f64,
    checked: bool,
}

impl SongTitle {
    /// Creates a checked candidate with full certainty.
    #[must_use]
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            certainty: 1.0,
            checked: true,
        }
    }

    /// Sets how confident the extractor was in this guess.
    #[must_use]
    pub const fn with_certainty(mut self, certainty: f64) -> Self {
        self.certainty = certainty;
        self
    }

    /// Artist fitted to `width`.
    #[must_use]
    pub fn artist(&self, width: usize) -> String {
        fit_width(&self.artist, width)
    }

    /// Title fitted to `width`.
    #[must_use]
    pub fn title(&self, width: usize) -> String {
        fit_width(&self.title, width)
    }

    /// Check mark, always five columns wide.
    #[must_use]
    pub fn checked(&self, _width: usize) -> String {
        String::from(if self.checked {
            CHECKED_MARK
        } else {
            UNCHECKED_MARK
        })
    }

    /// Extraction certainty.
    #[must_use]
    pub const fn certainty(&self) -> f64 {
        self.certainty
    }

    /// Whether this candidate is currently included.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Flips the include state.
    pub const fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

impl ListItem for SongTitle {
    type Field = SongTitleField;
    type Output = String;

    const KIND: ItemKind = ItemKind::SongTitle;

    fn parse_field(name: &str) -> Option<Self::Field> {
        match name {
            "artist" => Some(SongTitleField::Artist),
            "title" => Some(SongTitleField::Title),
            "checked" => Some(SongTitleField::Checked),
            "certainty" => Some(SongTitleField::Certainty),
            _ => None,
        }
    }

    fn field(&self, field: Self::Field, width: usize) -> String {
        match field {
            SongTitleField::Artist => self.artist(width),
            SongTitleField::Title => self.title(width),
            SongTitleField::Checked => self.checked(width),
            SongTitleField::Certainty => fit_width(&format!("{:.2}", self.certainty), width),
        }
    }

    /// `"<artist> - <title>"`, both trimmed.
    fn extract(&self) -> String {
        format!("{} - {}", self.artist.trim(), self.title.trim())
    }
}
