//! Serialized item records as produced by a data source.

use serde::Deserialize;
use serde_json::Value;

use super::{Item, LiveStream, SongTitle, User};

/// Default certainty for song-title records that do not carry one.
const fn default_certainty() -> f64 {
    1.0
}

/// One raw record, tagged with the variant it should become.
///
/// ```json
/// { "type": "live_stream", "data": { "id": { "videoId": "..." }, "snippet": { ... } } }
/// { "type": "song_title", "data": ["Artist", "Title"], "certainty": 0.8 }
/// { "type": "user", "data": { "id": { "channelId": "..." }, "snippet": { ... } } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    /// Live-stream search result.
    LiveStream {
        /// Raw search-result payload.
        data: Value,
    },
    /// Song-title candidate.
    SongTitle {
        /// `(artist, title)` pair.
        data: (String, String),
        /// Extraction certainty.
        #[serde(default = "default_certainty")]
        certainty: f64,
    },
    /// Channel / user search result.
    User {
        /// Raw search-result payload.
        data: Value,
    },
}

impl From<Record> for Item {
    fn from(record: Record) -> Self {
        match record {
            Record::LiveStream { data } => Self::LiveStream(LiveStream::new(data)),
            Record::SongTitle {
                data: (artist, title),
                certainty,
            } => Self::SongTitle(SongTitle::new(artist, title).with_certainty(certainty)),
            Record::User { data } => Self::User(User::new(data)),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]
    #![allow(clippy::panic)]

    use super::*;
    use crate::item::ItemKind;

    #[test]
    fn test_deserialize_each_variant() {
        // Arrange
        let json = r#"[
            {"type": "live_stream", "data": {"id": {"videoId": "v1"}}},
            {"type": "song_title", "data": ["Artist", "Title"], "certainty": 0.5},
            {"type": "song_title", "data": ["Other", "Song"]},
            {"type": "user", "data": {"id": {"channelId": "c1"}}}
        ]"#;

        // Act
        let records: Vec<Record> = serde_json::from_str(json).unwrap();
        let items: Vec<Item> = records.into_iter().map(Item::from).collect();

        // Assert
        let kinds: Vec<ItemKind> = items.iter().map(Item::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ItemKind::LiveStream,
                ItemKind::SongTitle,
                ItemKind::SongTitle,
                ItemKind::User
            ]
        );
        if let Item::SongTitle(song) = &items[2] {
            assert!((song.certainty() - 1.0).abs() < f64::EPSILON);
        } else {
            panic!("expected a song title");
        }
    }

    #[test]
    fn test_deserialize_rejects_unknown_type() {
        // Arrange
        let json = r#"{"type": "playlist", "data": {}}"#;

        // Act
        let result: Result<Record, _> = serde_json::from_str(json);

        // Assert
        assert!(result.is_err());
    }
}
