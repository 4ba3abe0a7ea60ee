//! Live-stream search results.

use serde::Serialize;
use serde_json::Value;

use super::raw::RawItem;
use super::{ItemKind, ListItem};
use crate::text::fit_width;

/// Columns a live-stream row can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveStreamField {
    /// Video ID (`id.videoId`).
    Id,
    /// Stream title (`snippet.title`).
    Title,
    /// Stream description (`snippet.description`).
    Description,
}

/// Selection result for a live stream: enough to queue it for playback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamRef {
    /// Video ID.
    pub id: String,
    /// Full, untruncated title.
    pub title: String,
    /// Length in seconds (zero for live content).
    pub length: u64,
}

/// A live-stream search result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LiveStream {
    raw: RawItem,
}

impl LiveStream {
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

    /// Video ID fitted to `width`.
    #[must_use]
    pub fn id(&self, width: usize) -> String {
        fit_width(self.video_id(), width)
    }

    /// Title fitted to `width`.
    #[must_use]
    pub fn title(&self, width: usize) -> String {
        fit_width(self.raw.text(&["snippet", "title"]), width)
    }

    /// Description fitted to `width`.
    #[must_use]
    pub fn description(&self, width: usize) -> String {
        fit_width(self.raw.text(&["snippet", "description"]), width)
    }

    fn video_id(&self) -> &str {
        self.raw.text(&["id", "videoId"])
    }
}

impl ListItem for LiveStream {
    type Field = LiveStreamField;
    type Output = StreamRef;

    const KIND: ItemKind = ItemKind::LiveStream;

    fn parse_field(name: &str) -> Option<Self::Field> {
        match name {
            "id" | "ytid" => Some(LiveStreamField::Id),
            "title" => Some(LiveStreamField::Title),
            "description" => Some(LiveStreamField::Description),
            _ => None,
        }
    }

    fn field(&self, field: Self::Field, width: usize) -> String {
        match field {
            LiveStreamField::Id => self.id(width),
            LiveStreamField::Title => self.title(width),
            LiveStreamField::Description => self.description(width),
        }
    }

    fn extract(&self) -> StreamRef {
        StreamRef {
            id: String::from(self.video_id()),
            title: String::from(self.raw.text(&["snippet", "title"])),
            length: self.length(),
        }
    }
}
