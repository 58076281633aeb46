use futures_util::future;
use serde::{Deserialize, Serialize};

use super::format::{format_duration, format_view_count, time_ago};
use crate::config::Youtube;
use crate::error::SearchError;

/// One display-ready search result. `duration` and `viewCountText` carry the
/// formatted display strings; `viewCount` stays numeric so the bookmark
/// payload can round-trip it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub channel_id: String,
    pub channel_thumbnail: String,
    pub thumbnail_url: String,
    pub published_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time_ago: Option<String>,
    pub duration: String,
    pub view_count: i64,
    pub view_count_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSearchResults {
    pub videos: Vec<Video>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page_token: Option<String>,
}

// Wire shapes for the platform API. Only the fields we read.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
    next_page_token: Option<String>,
    prev_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchSnippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    channel_id: String,
    #[serde(default)]
    channel_title: String,
    #[serde(default)]
    published_at: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoListItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoListItem {
    content_details: ContentDetails,
    statistics: Statistics,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    #[serde(default)]
    duration: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    // The platform serializes counts as strings.
    #[serde(default)]
    view_count: String,
}

#[derive(Debug, Deserialize)]
struct ChannelListResponse {
    #[serde(default)]
    items: Vec<ChannelListItem>,
}

#[derive(Debug, Deserialize)]
struct ChannelListItem {
    snippet: ChannelSnippet,
}

#[derive(Debug, Deserialize)]
struct ChannelSnippet {
    #[serde(default)]
    thumbnails: Thumbnails,
}

pub struct YouTubeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    max_results: u32,
}

impl YouTubeClient {
    pub fn new(cfg: &Youtube) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: cfg.api_key.clone(),
            base_url: cfg.api_base_url.trim_end_matches('/').to_string(),
            max_results: cfg.max_results,
        }
    }

    /// Runs one search plus the two dependent lookups per result, and maps
    /// everything into the display-ready shape. Enrichment is concurrent
    /// across results; the first failure aborts the whole search.
    pub async fn search_videos(
        &self,
        search_term: &str,
        page_token: Option<&str>,
    ) -> Result<VideoSearchResults, SearchError> {
        if search_term.is_empty() {
            return Err(SearchError::EmptySearchTerm);
        }

        let page = self.search(search_term, page_token).await?;

        let videos = future::try_join_all(page.items.iter().map(|item| self.enrich(item))).await?;

        Ok(VideoSearchResults {
            videos,
            next_page_token: page.next_page_token,
            prev_page_token: page.prev_page_token,
        })
    }

    async fn search(
        &self,
        search_term: &str,
        page_token: Option<&str>,
    ) -> Result<SearchResponse, SearchError> {
        let mut query = vec![
            ("part", "snippet".to_string()),
            ("type", "video".to_string()),
            ("q", search_term.to_string()),
            ("key", self.api_key.clone()),
            ("maxResults", self.max_results.to_string()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }

        let response = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json::<SearchResponse>()
            .await?;

        Ok(response)
    }

    async fn enrich(&self, item: &SearchItem) -> Result<Video, SearchError> {
        let details = self.video_details(&item.id.video_id).await?;
        let channel_thumbnail = self.channel_thumbnail(&item.snippet.channel_id).await?;

        let view_count: i64 = details.statistics.view_count.parse().unwrap_or(0);
        let duration = format_duration(&details.content_details.duration)
            .unwrap_or_else(|| details.content_details.duration.clone());

        Ok(Video {
            video_id: item.id.video_id.clone(),
            title: item.snippet.title.clone(),
            description: item.snippet.description.clone(),
            channel_title: item.snippet.channel_title.clone(),
            channel_id: item.snippet.channel_id.clone(),
            channel_thumbnail,
            thumbnail_url: item
                .snippet
                .thumbnails
                .high
                .as_ref()
                .map(|t| t.url.clone())
                .unwrap_or_default(),
            published_at: item.snippet.published_at.clone(),
            published_time_ago: time_ago(&item.snippet.published_at),
            duration,
            view_count,
            view_count_text: format_view_count(view_count),
        })
    }

    async fn video_details(&self, video_id: &str) -> Result<VideoListItem, SearchError> {
        let response = self
            .http
            .get(format!("{}/videos", self.base_url))
            .query(&[
                ("part", "contentDetails,statistics"),
                ("id", video_id),
                ("key", &self.api_key),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<VideoListResponse>()
            .await?;

        response.items.into_iter().next().ok_or_else(|| {
            SearchError::MalformedResponse(format!("no content details for video {}", video_id))
        })
    }

    async fn channel_thumbnail(&self, channel_id: &str) -> Result<String, SearchError> {
        let response = self
            .http
            .get(format!("{}/channels", self.base_url))
            .query(&[("part", "snippet"), ("id", channel_id), ("key", &self.api_key)])
            .send()
            .await?
            .error_for_status()?
            .json::<ChannelListResponse>()
            .await?;

        let item = response.items.into_iter().next().ok_or_else(|| {
            SearchError::MalformedResponse(format!("no snippet for channel {}", channel_id))
        })?;

        Ok(item
            .snippet
            .thumbnails
            .default
            .map(|t| t.url)
            .unwrap_or_default())
    }
}
