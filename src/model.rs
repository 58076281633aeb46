use serde::{Deserialize, Serialize};

/// One saved video for one session. All metadata fields are free-form
/// display strings taken from the search results; only `videoId` is a
/// natural key from the video platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRecord {
    #[serde(default)]
    pub video_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub channel_thumbnail: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub view_count: i64,
}

/// Client-facing bookmark shape: the record plus a display `id` derived
/// from the video id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkVideo {
    pub id: String,
    #[serde(flatten)]
    pub record: BookmarkRecord,
}

impl From<BookmarkRecord> for BookmarkVideo {
    fn from(record: BookmarkRecord) -> Self {
        BookmarkVideo {
            id: record.video_id.clone(),
            record,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveBookmark {
    #[serde(default)]
    pub video_id: String,
}
