//! Request payloads for collection operations.
//!
//! Create payloads default every missing, `null` or empty string field to `""`.
//! Update payloads carry only the fields to change; absent or `null` fields keep
//! their stored value. Unknown fields (including `_id`) are accepted and ignored,
//! so an update can never rewrite an item's id.

use serde::{Deserialize, Serialize};

use super::types::{NewsItem, TrendingItem, VideoItem};

fn or_empty(value: Option<String>) -> String {
    value.unwrap_or_default()
}

fn merge(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Request payload for creating a news item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateNewsRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
}

impl CreateNewsRequest {
    /// Builds the stored item under the given id.
    pub fn into_item(self, id: String) -> NewsItem {
        NewsItem {
            id,
            title: or_empty(self.title),
            category: or_empty(self.category),
            time: or_empty(self.time),
            excerpt: or_empty(self.excerpt),
            href: or_empty(self.href),
        }
    }
}

/// Request payload for updating a news item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNewsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl UpdateNewsRequest {
    /// Applies updates to an existing news item.
    pub fn apply_to(self, item: &mut NewsItem) {
        merge(&mut item.title, self.title);
        merge(&mut item.category, self.category);
        merge(&mut item.time, self.time);
        merge(&mut item.excerpt, self.excerpt);
        merge(&mut item.href, self.href);
    }
}

/// Request payload for creating a video.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoRequest {
    #[serde(default)]
    pub youtube_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateVideoRequest {
    /// Builds the stored item under the given id.
    pub fn into_item(self, id: String) -> VideoItem {
        VideoItem {
            id,
            youtube_id: or_empty(self.youtube_id),
            title: or_empty(self.title),
            channel: or_empty(self.channel),
            description: or_empty(self.description),
        }
    }
}

/// Request payload for updating a video.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateVideoRequest {
    /// Applies updates to an existing video.
    pub fn apply_to(self, item: &mut VideoItem) {
        merge(&mut item.youtube_id, self.youtube_id);
        merge(&mut item.title, self.title);
        merge(&mut item.channel, self.channel);
        merge(&mut item.description, self.description);
    }
}

/// Request payload for creating a trending entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTrendingRequest {
    /// Display rank. Missing or zero means "next position".
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
}

impl CreateTrendingRequest {
    /// Builds the stored item under the given id.
    ///
    /// `existing` is the number of entries already in the collection.
    pub fn into_item(self, id: String, existing: usize) -> TrendingItem {
        let number = self
            .number
            .filter(|n| *n != 0)
            .unwrap_or(existing as u64 + 1);

        TrendingItem {
            id,
            number,
            title: or_empty(self.title),
            description: or_empty(self.description),
            href: or_empty(self.href),
        }
    }
}

/// Request payload for updating a trending entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTrendingRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl UpdateTrendingRequest {
    /// Applies updates to an existing trending entry.
    pub fn apply_to(self, item: &mut TrendingItem) {
        if let Some(number) = self.number {
            item.number = number;
        }
        merge(&mut item.title, self.title);
        merge(&mut item.description, self.description);
        merge(&mut item.href, self.href);
    }
}
