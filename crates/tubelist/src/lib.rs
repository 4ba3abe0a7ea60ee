//! Paginated, column-aligned list views for terminal search results.
//!
//! A [`ListView`] lays out one kind of item (live streams, song-title
//! candidates or channels) as a table sized to the terminal, splits it into
//! pages and turns a free-form selection like `"1,3,5-7"` into the extracted
//! values of the chosen rows.

/// Type-erased view built from serialized records.
pub mod any;
/// Column specifications.
pub mod column;
/// Error types.
pub mod error;
/// Terminal geometry.
pub mod geometry;
/// Item variants shown in a list.
pub mod item;
/// Column width resolution.
pub mod layout;
/// Page arithmetic.
pub mod pager;
/// Table rendering.
pub mod render;
/// Selection parsing.
pub mod selection;
/// Row and header styles.
pub mod style;
/// Width-aware text fitting.
pub mod text;
/// The list view.
pub mod view;

#[allow(clippy::module_name_repetitions)]
pub use any::{AnyListView, Selected};
pub use column::{ColumnSize, ColumnSpec, default_columns};
pub use error::ListViewError;
pub use geometry::{Geometry, GeometrySource};
pub use item::{
    ChannelRef, Item, ItemKind, ListItem, LiveStream, Record, SongTitle, StreamRef, User,
};
pub use selection::parse_selection;
pub use style::Palette;
#[allow(clippy::module_name_repetitions)]
pub use view::{ListView, SelectionScope};
