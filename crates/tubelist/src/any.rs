//! A list view over whichever single item variant a data source delivered.

use serde::Serialize;

use crate::column::ColumnSpec;
use crate::error::ListViewError;
use crate::geometry::GeometrySource;
use crate::item::{ChannelRef, Item, ItemKind, LiveStream, Record, SongTitle, StreamRef, User};
use crate::style::Palette;
use crate::view::{ListView, SelectionScope};

/// Runs `$body` with `$view` bound to the inner [`ListView`], whatever its variant.
macro_rules! each_view {
    ($any:expr, $view:ident => $body:expr) => {
        match $any {
            AnyListView::LiveStreams($view) => $body,
            AnyListView::SongTitles($view) => $body,
            AnyListView::Users($view) => $body,
        }
    };
}

/// A [`ListView`] whose item variant is decided at runtime.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum AnyListView {
    /// View over live-stream results.
    LiveStreams(ListView<LiveStream>),
    /// View over song-title candidates.
    SongTitles(ListView<SongTitle>),
    /// View over channel results.
    Users(ListView<User>),
}

/// Extracted values of a selection, per variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Selected {
    /// Chosen live streams.
    Streams(Vec<StreamRef>),
    /// Chosen songs as `"artist - title"`.
    Songs(Vec<String>),
    /// Chosen channels.
    Channels(Vec<ChannelRef>),
}

impl Selected {
    /// Number of extracted values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Streams(v) => v.len(),
            Self::Songs(v) => v.len(),
            Self::Channels(v) => v.len(),
        }
    }

    /// Whether nothing was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns the variant shared by every item.
///
/// # Errors
///
/// - [`ListViewError::EmptyCollection`] for an empty slice.
/// - [`ListViewError::MixedItemKinds`] when two variants are present.
pub fn common_kind(items: &[Item]) -> Result<ItemKind, ListViewError> {
    let first = items.first().ok_or(ListViewError::EmptyCollection)?.kind();
    if let Some(other) = items.iter().map(Item::kind).find(|k| *k != first) {
        return Err(ListViewError::MixedItemKinds { first, other });
    }
    Ok(first)
}

impl AnyListView {
    /// Builds a view from items that must all be of one variant.
    ///
    /// `columns` supplies the column spec for the detected variant.
    ///
    /// # Errors
    ///
    /// - [`ListViewError::EmptyCollection`] if `items` is empty.
    /// - [`ListViewError::MixedItemKinds`] if more than one variant is present.
    /// - [`ListViewError::UnknownColumn`] if the column spec does not fit
    ///   the variant.
    pub fn from_items(
        items: Vec<Item>,
        columns: impl FnOnce(ItemKind) -> Vec<ColumnSpec>,
        geometry: impl GeometrySource + 'static,
    ) -> Result<Self, ListViewError> {
        let kind = common_kind(&items)?;
        let columns = columns(kind);
        let view = match kind {
            ItemKind::LiveStream => {
                let items = items
                    .into_iter()
                    .filter_map(|item| match item {
                        Item::LiveStream(v) => Some(v),
                        Item::SongTitle(_) | Item::User(_) => None,
                    })
                    .collect();
                Self::LiveStreams(ListView::new(&columns, items, geometry)?)
            }
            ItemKind::SongTitle => {
                let items = items
                    .into_iter()
                    .filter_map(|item| match item {
                        Item::SongTitle(v) => Some(v),
                        Item::LiveStream(_) | Item::User(_) => None,
                    })
                    .collect();
                Self::SongTitles(ListView::new(&columns, items, geometry)?)
            }
            ItemKind::User => {
                let items = items
                    .into_iter()
                    .filter_map(|item| match item {
                        Item::User(v) => Some(v),
                        Item::LiveStream(_) | Item::SongTitle(_) => None,
                    })
                    .collect();
                Self::Users(ListView::new(&columns, items, geometry)?)
            }
        };
        Ok(view)
    }

    /// Builds a view from serialized records.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_items`].
    pub fn from_records(
        records: Vec<Record>,
        columns: impl FnOnce(ItemKind) -> Vec<ColumnSpec>,
        geometry: impl GeometrySource + 'static,
    ) -> Result<Self, ListViewError> {
        let items = records.into_iter().map(Item::from).collect();
        Self::from_items(items, columns, geometry)
    }

    /// Variant of the items in this view.
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::LiveStreams(_) => ItemKind::LiveStream,
            Self::SongTitles(_) => ItemKind::SongTitle,
            Self::Users(_) => ItemKind::User,
        }
    }

    /// Sets the style markers used when rendering.
    #[must_use]
    pub fn with_palette(self, palette: Palette) -> Self {
        match self {
            Self::LiveStreams(v) => Self::LiveStreams(v.with_palette(palette)),
            Self::SongTitles(v) => Self::SongTitles(v.with_palette(palette)),
            Self::Users(v) => Self::Users(v.with_palette(palette)),
        }
    }

    /// Sets what typed row numbers refer to.
    #[must_use]
    pub fn with_scope(self, scope: SelectionScope) -> Self {
        match self {
            Self::LiveStreams(v) => Self::LiveStreams(v.with_scope(scope)),
            Self::SongTitles(v) => Self::SongTitles(v.with_scope(scope)),
            Self::Users(v) => Self::Users(v.with_scope(scope)),
        }
    }

    /// Number of items in the view.
    #[must_use]
    pub fn len(&self) -> usize {
        each_view!(self, v => v.items().len())
    }

    /// Always `false`: views are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of pages for the current terminal height.
    #[must_use]
    pub fn num_pages(&self) -> usize {
        each_view!(self, v => v.num_pages())
    }

    /// Current page, 0-based.
    #[must_use]
    pub fn page(&self) -> usize {
        each_view!(self, v => v.page())
    }

    /// Moves to page `page`, clamped to the available pages.
    pub fn set_page(&mut self, page: usize) {
        each_view!(self, v => v.set_page(page));
    }

    /// Renders the current page.
    #[must_use]
    pub fn render(&self) -> String {
        each_view!(self, v => v.render())
    }

    /// Extracts the values of the rows picked by `input`.
    ///
    /// # Errors
    ///
    /// Returns [`ListViewError::IndexOutOfRange`] if a row does not exist in
    /// the selection scope.
    pub fn select(&self, input: &str) -> Result<Selected, ListViewError> {
        Ok(match self {
            Self::LiveStreams(v) => Selected::Streams(v.select(input)?),
            Self::SongTitles(v) => Selected::Songs(v.select(input)?),
            Self::Users(v) => Selected::Channels(v.select(input)?),
        })
    }

    /// The song-title view, if this is one.
    pub const fn as_song_titles_mut(&mut self) -> Option<&mut ListView<SongTitle>> {
        match self {
            Self::SongTitles(v) => Some(v),
            Self::LiveStreams(_) | Self::Users(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;
    use crate::column::default_columns;
    use crate::geometry::Geometry;

    fn records(json: &str) -> Vec<Record> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_common_kind_empty() {
        assert_eq!(common_kind(&[]), Err(ListViewError::EmptyCollection));
    }

    #[test]
    fn test_common_kind_mixed() {
        // Arrange
        let items = vec![
            Item::from(LiveStream::new(json!({}))),
            Item::from(LiveStream::new(json!({}))),
            Item::from(User::new(json!({}))),
        ];

        // Act & Assert
        assert_eq!(
            common_kind(&items),
            Err(ListViewError::MixedItemKinds {
                first: ItemKind::LiveStream,
                other: ItemKind::User,
            })
        );
    }

    #[test]
    fn test_from_records_builds_matching_variant() {
        // Arrange
        let records = records(
            r#"[
                {"type": "user", "data": {"id": {"channelId": "c1"}, "snippet": {"title": "One"}}},
                {"type": "user", "data": {"id": {"channelId": "c2"}, "snippet": {"title": "Two"}}}
            ]"#,
        );

        // Act
        let view =
            AnyListView::from_records(records, default_columns, Geometry::fixed(80, 10)).unwrap();

        // Assert
        assert_eq!(view.kind(), ItemKind::User);
        assert_eq!(view.len(), 2);
        assert_eq!(
            view.select("2").unwrap(),
            Selected::Channels(vec![ChannelRef {
                title: String::from("Two"),
                id: String::from("c2"),
                length: String::new(),
            }])
        );
    }

    #[test]
    fn test_from_records_rejects_mixed_variants() {
        // Arrange
        let records = records(
            r#"[
                {"type": "song_title", "data": ["a", "b"]},
                {"type": "live_stream", "data": {}}
            ]"#,
        );

        // Act
        let result = AnyListView::from_records(records, default_columns, Geometry::fixed(80, 10));

        // Assert
        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some(String::from(
                "more than one kind of item in list (song_title and live_stream)"
            ))
        );
    }

    #[test]
    fn test_selected_serializes_as_plain_values() {
        // Arrange
        let selected = Selected::Streams(vec![StreamRef {
            id: String::from("id1"),
            title: String::from("A"),
            length: 0,
        }]);

        // Act
        let json = serde_json::to_string(&selected).unwrap();

        // Assert
        assert_eq!(json, r#"[{"id":"id1","title":"A","length":0}]"#);
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_toggle_through_song_title_view() {
        // Arrange
        let records = records(r#"[{"type": "song_title", "data": ["a", "b"]}]"#);
        let mut view =
            AnyListView::from_records(records, default_columns, Geometry::fixed(80, 10)).unwrap();

        // Act
        let touched = view
            .as_song_titles_mut()
            .map(|songs| songs.update_selected("1", SongTitle::toggle));

        // Assert
        assert_eq!(touched, Some(Ok(1)));
        assert!(view.render().contains(" 1          a"));
    }

    #[test]
    fn test_other_views_are_not_song_titles() {
        // Arrange
        let records = records(r#"[{"type": "live_stream", "data": {}}]"#);
        let mut view =
            AnyListView::from_records(records, default_columns, Geometry::fixed(80, 10)).unwrap();

        // Act & Assert
        assert!(view.as_song_titles_mut().is_none());
        assert!(!view.is_empty());
        assert_eq!(view.page(), 0);
        assert_eq!(view.num_pages(), 1);
    }
}
