//! Error kinds raised by list views.

use crate::item::ItemKind;

/// Errors raised while building a list view or resolving a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum ListViewError {
    /// The item collection handed to the view was empty.
    EmptyCollection,
    /// The item collection mixed more than one item variant.
    MixedItemKinds {
        /// Variant of the first item.
        first: ItemKind,
        /// First variant found that differs from `first`.
        other: ItemKind,
    },
    /// A column names a field the item variant does not expose.
    UnknownColumn {
        /// Variant the column spec was typed against.
        kind: ItemKind,
        /// Offending column name.
        name: String,
    },
    /// A selected row does not exist in the slice it was resolved against.
    IndexOutOfRange {
        /// 1-based row number as typed by the user.
        row: usize,
        /// Number of rows that were available.
        available: usize,
    },
}

impl std::fmt::Display for ListViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCollection => write!(f, "no items in list"),
            Self::MixedItemKinds { first, other } => {
                write!(f, "more than one kind of item in list ({first} and {other})")
            }
            Self::UnknownColumn { kind, name } => {
                write!(f, "unknown column '{name}' for {kind} items")
            }
            Self::IndexOutOfRange { row, available } => {
                write!(f, "row {row} is out of range (1..={available})")
            }
        }
    }
}

impl std::error::Error for ListViewError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_view_error_display() {
        assert_eq!(ListViewError::EmptyCollection.to_string(), "no items in list");
        assert_eq!(
            ListViewError::MixedItemKinds {
                first: ItemKind::LiveStream,
                other: ItemKind::User,
            }
            .to_string(),
            "more than one kind of item in list (live_stream and user)"
        );
        assert_eq!(
            ListViewError::UnknownColumn {
                kind: ItemKind::SongTitle,
                name: String::from("views"),
            }
            .to_string(),
            "unknown column 'views' for song_title items"
        );
        assert_eq!(
            ListViewError::IndexOutOfRange {
                row: 12,
                available: 10,
            }
            .to_string(),
            "row 12 is out of range (1..=10)"
        );
    }
}
