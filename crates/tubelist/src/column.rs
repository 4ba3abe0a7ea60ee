//! Declarative column specifications.

use serde::{Deserialize, Serialize};

use crate::error::ListViewError;
use crate::item::{ItemKind, ListItem};

/// Column name of the synthetic row-number column.
pub const INDEX_COLUMN: &str = "idx";
/// Column name of the duration column every item variant supports.
pub const LENGTH_COLUMN: &str = "length";

/// Sizing rule of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SizeRepr", into = "SizeRepr")]
pub enum ColumnSize {
    /// Fixed number of terminal columns.
    Fixed(usize),
    /// Whatever width is left once every other column is placed.
    Remaining,
    /// Wide enough for the longest duration in the whole collection.
    Length,
}

/// Wire form of [`ColumnSize`]: an integer or one of two keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum SizeRepr {
    Fixed(usize),
    Symbol(String),
}

impl TryFrom<SizeRepr> for ColumnSize {
    type Error = String;

    fn try_from(repr: SizeRepr) -> Result<Self, Self::Error> {
        match repr {
            SizeRepr::Fixed(n) => Ok(Self::Fixed(n)),
            SizeRepr::Symbol(s) => match s.as_str() {
                "remaining" => Ok(Self::Remaining),
                "length" => Ok(Self::Length),
                other => Err(format!(
                    "invalid column size '{other}' (expected an integer, \"remaining\" or \"length\")"
                )),
            },
        }
    }
}

impl From<ColumnSize> for SizeRepr {
    fn from(size: ColumnSize) -> Self {
        match size {
            ColumnSize::Fixed(n) => Self::Fixed(n),
            ColumnSize::Remaining => Self::Symbol(String::from("remaining")),
            ColumnSize::Length => Self::Symbol(String::from("length")),
        }
    }
}

/// One column as written in configuration: `{ name, size, heading }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct ColumnSpec {
    /// Field name, `idx` or `length`.
    pub name: String,
    /// Sizing rule.
    pub size: ColumnSize,
    /// Header text.
    pub heading: String,
}

impl ColumnSpec {
    /// Creates a column spec.
    #[must_use]
    pub fn new(name: impl Into<String>, size: ColumnSize, heading: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            heading: heading.into(),
        }
    }
}

/// What a column displays, resolved against one item variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnField<F> {
    /// 1-based global row number.
    Index,
    /// Item length, formatted as a duration.
    Length,
    /// A variant-specific field.
    Field(F),
}

/// A column spec typed against an item variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<F> {
    /// What the column displays.
    pub field: ColumnField<F>,
    /// Sizing rule.
    pub size: ColumnSize,
    /// Header text.
    pub heading: String,
}

/// Types a column spec list against item variant `T`.
///
/// # Errors
///
/// Returns [`ListViewError::UnknownColumn`] for the first name `T` does not
/// know.
pub fn typed_columns<T: ListItem>(
    specs: &[ColumnSpec],
) -> Result<Vec<Column<T::Field>>, ListViewError> {
    specs
        .iter()
        .map(|spec| {
            let field = match spec.name.as_str() {
                INDEX_COLUMN => ColumnField::Index,
                LENGTH_COLUMN => ColumnField::Length,
                name => T::parse_field(name).map(ColumnField::Field).ok_or_else(|| {
                    ListViewError::UnknownColumn {
                        kind: T::KIND,
                        name: spec.name.clone(),
                    }
                })?,
            };
            Ok(Column {
                field,
                size: spec.size,
                heading: spec.heading.clone(),
            })
        })
        .collect()
}

/// Built-in column layout for each item variant.
#[must_use]
pub fn default_columns(kind: ItemKind) -> Vec<ColumnSpec> {
    let idx = ColumnSpec::new(INDEX_COLUMN, ColumnSize::Fixed(3), "Num");
    match kind {
        ItemKind::LiveStream => vec![
            idx,
            ColumnSpec::new("title", ColumnSize::Remaining, "Title"),
        ],
        ItemKind::SongTitle => vec![
            idx,
            ColumnSpec::new("checked", ColumnSize::Fixed(5), "Use"),
            ColumnSpec::new("artist", ColumnSize::Fixed(30), "Artist"),
            ColumnSpec::new("title", ColumnSize::Remaining, "Title"),
        ],
        ItemKind::User => vec![
            idx,
            ColumnSpec::new("name", ColumnSize::Fixed(30), "Username"),
            ColumnSpec::new("description", ColumnSize::Remaining, "Description"),
        ],
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde::Deserialize;

    use super::*;
    use crate::item::{LiveStream, LiveStreamField, SongTitle, User};

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        columns: Vec<ColumnSpec>,
    }

    #[test]
    fn test_deserialize_sizes() {
        // Arrange
        let json = r#"{"columns": [
            {"name": "idx", "size": 3, "heading": "Num"},
            {"name": "title", "size": "remaining", "heading": "Title"},
            {"name": "length", "size": "length", "heading": "Length"}
        ]}"#;

        // Act
        let parsed: Wrapper = serde_json::from_str(json).unwrap();

        // Assert
        let sizes: Vec<ColumnSize> = parsed.columns.iter().map(|c| c.size).collect();
        assert_eq!(
            sizes,
            vec![
                ColumnSize::Fixed(3),
                ColumnSize::Remaining,
                ColumnSize::Length
            ]
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_size_keyword() {
        // Arrange
        let json = r#"{"columns": [{"name": "title", "size": "half", "heading": "T"}]}"#;

        // Act
        let result: Result<Wrapper, _> = serde_json::from_str(json);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_size_serializes_back_to_keywords() {
        // Arrange
        let spec = ColumnSpec::new("title", ColumnSize::Remaining, "Title");

        // Act
        let json = serde_json::to_string(&spec).unwrap();

        // Assert
        assert_eq!(
            json,
            r#"{"name":"title","size":"remaining","heading":"Title"}"#
        );
    }

    #[test]
    fn test_typed_columns() {
        // Arrange
        let specs = vec![
            ColumnSpec::new("idx", ColumnSize::Fixed(3), "Num"),
            ColumnSpec::new("title", ColumnSize::Fixed(10), "Title"),
            ColumnSpec::new("length", ColumnSize::Length, "Length"),
        ];

        // Act
        let columns = typed_columns::<LiveStream>(&specs).unwrap();

        // Assert
        let fields: Vec<ColumnField<LiveStreamField>> = columns.iter().map(|c| c.field).collect();
        assert_eq!(
            fields,
            vec![
                ColumnField::Index,
                ColumnField::Field(LiveStreamField::Title),
                ColumnField::Length,
            ]
        );
    }

    #[test]
    fn test_typed_columns_unknown_name() {
        // Arrange
        let specs = vec![ColumnSpec::new("name", ColumnSize::Fixed(10), "Name")];

        // Act
        let result = typed_columns::<SongTitle>(&specs);

        // Assert
        assert_eq!(
            result,
            Err(ListViewError::UnknownColumn {
                kind: ItemKind::SongTitle,
                name: String::from("name"),
            })
        );
    }

    #[test]
    fn test_default_columns_type_check() {
        assert!(typed_columns::<LiveStream>(&default_columns(ItemKind::LiveStream)).is_ok());
        assert!(typed_columns::<SongTitle>(&default_columns(ItemKind::SongTitle)).is_ok());
        assert!(typed_columns::<User>(&default_columns(ItemKind::User)).is_ok());
    }
}
