//! Channel / user search results.

use serde::Serialize;
use serde_json::Value;

use super::raw::RawItem;
use super::{ItemKind, ListItem};
use crate::text::fit_width;

/// Columns a channel row can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    /// Channel ID (`id.channelId`).
    Id,
    /// Channel name (`snippet.title`).
    Name,
    /// Channel description (`snippet.description`).
    Description,
    /// Resource kind (`id.kind`), e.g. `youtube#channel`.
    Kind,
}

/// Selection result for a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelRef {
    /// Channel name.
    pub title: String,
    /// Channel ID.
    pub id: String,
    /// Always empty: channels have no duration.
    pub length: String,
}

/// A channel search result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct User {
    raw: RawItem,
}

impl User {
    /// Wraps a raw search-result record.
    #[must_use]
    pub const fn new(data: Value) -> Self {
        Self {
            raw: RawItem::new(data),
        }
    }

    /// Returns the underlying record.
    #[must_use]
    pub const fn raw(&self) -> &RawItem {
        &self.raw
    }

    /// Channel ID fitted to `width`.
    #[must_use]
    pub fn id(&self, width: usize) -> String {
        fit_width(self.channel_id(), width)
    }

    /// Channel name fitted to `width`.
    #[must_use]
    pub fn name(&self, width: usize) -> String {
        fit_width(self.raw.text(&["snippet", "title"]), width)
    }

    /// Description fitted to `width`.
    #[must_use]
    pub fn description(&self, width: usize) -> String {
        fit_width(self.raw.text(&["snippet", "description"]), width)
    }

    /// Resource kind fitted to `width`.
    #[must_use]
    pub fn kind(&self, width: usize) -> String {
        fit_width(self.raw.text(&["id", "kind"]), width)
    }

    fn channel_id(&self) -> &str {
        self.raw.text(&["id", "channelId"])
    }
}

impl ListItem for User {
    type Field = UserField;
    type Output = ChannelRef;

    const KIND: ItemKind = ItemKind::User;

    fn parse_field(name: &str) -> Option<Self::Field> {
        match name {
            "id" => Some(UserField::Id),
            "name" => Some(UserField::Name),
            "description" => Some(UserField::Description),
            "kind" => Some(UserField::Kind),
            _ => None,
        }
    }

    fn field(&self, field: Self::Field, width: usize) -> String {
        match field {
            UserField::Id => self.id(width),
            UserField::Name => self.name(width),
            UserField::Description => self.description(width),
            UserField::Kind => self.kind(width),
        }
    }

    fn extract(&self) -> ChannelRef {
        ChannelRef {
            title: String::from(self.raw.text(&["snippet", "title"])),
            id: String::from(self.channel_id()),
            length: String::new(),
        }
    }
}
