//! List items: one row's domain object and its width-aware accessors.
//!
//! Every variant wraps the raw record it was built from and enumerates the
//! fields it can render. The set of variants is closed: [`Item`] names all
//! of them and [`Record`] is the serialized form a data source hands over.

mod live_stream;
mod raw;
mod record;
mod song_title;
mod user;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

pub use live_stream::{LiveStream, LiveStreamField, StreamRef};
pub use raw::{RawItem, is_falsy};
pub use record::Record;
pub use song_title::{SongTitle, SongTitleField};
pub use user::{ChannelRef, User, UserField};

/// Identifies an item variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Live-stream search result.
    LiveStream,
    /// Song-title candidate extracted from a description.
    SongTitle,
    /// Channel / user search result.
    User,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LiveStream => "live_stream",
            Self::SongTitle => "song_title",
            Self::User => "user",
        };
        f.write_str(name)
    }
}

/// Behaviour shared by every row type a list view can display.
///
/// Field accessors return text normalized to the requested width: longer
/// text is truncated, shorter text is padded with trailing spaces.
pub trait ListItem {
    /// Fields this variant can render as columns.
    type Field: Copy + Debug + Eq;
    /// Value handed to the selection callback for a chosen row.
    type Output;

    /// Variant tag.
    const KIND: ItemKind;

    /// Maps a column name to one of this variant's fields.
    fn parse_field(name: &str) -> Option<Self::Field>;

    /// Renders `field` into exactly `width` columns.
    fn field(&self, field: Self::Field, width: usize) -> String;

    /// Length in seconds; items without a duration report zero.
    fn length(&self) -> u64 {
        0
    }

    /// Produces the value surfaced when this row is selected.
    fn extract(&self) -> Self::Output;
}

/// Any item variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Live-stream result.
    LiveStream(LiveStream),
    /// Song-title candidate.
    SongTitle(SongTitle),
    /// Channel / user result.
    User(User),
}

impl Item {
    /// Returns the variant tag.
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::LiveStream(_) => ItemKind::LiveStream,
            Self::SongTitle(_) => ItemKind::SongTitle,
            Self::User(_) => ItemKind::User,
        }
    }
}

impl From<LiveStream> for Item {
    fn from(item: LiveStream) -> Self {
        Self::LiveStream(item)
    }
}

impl From<SongTitle> for Item {
    fn from(item: SongTitle) -> Self {
        Self::SongTitle(item)
    }
}

impl From<User> for Item {
    fn from(item: User) -> Self {
        Self::User(item)
    }
}
