use serde::{Deserialize, Serialize};

/// A headline on the front page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub category: String,
    /// Free-form relative time label, e.g. "2 hours ago".
    pub time: String,
    pub excerpt: String,
    /// Link to the article page, e.g. "articles/news.html".
    pub href: String,
}

/// An embedded YouTube episode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub youtube_id: String,
    pub title: String,
    pub channel: String,
    pub description: String,
}

/// A numbered entry in the trending sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub number: u64,
    pub title: String,
    pub description: String,
    pub href: String,
}

/// The unit of persistence for all three collections.
///
/// Collections missing from a stored document decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentDocument {
    pub news: Vec<NewsItem>,
    pub videos: Vec<VideoItem>,
    pub trending: Vec<TrendingItem>,
}

impl ContentDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a document from its stored JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Encodes the document as JSON text for storage.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_item_serializes_id_as_underscore_id() {
        let item = NewsItem {
            id: "news_1".to_string(),
            title: "Headline".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["_id"], "news_1");
        assert!(json.get("id").is_none());
        assert_eq!(json["title"], "Headline");
    }

    #[test]
    fn test_video_item_uses_camel_case_youtube_id() {
        let json = r#"{"_id":"video_1","youtubeId":"abc123","title":"T","channel":"C","description":"D"}"#;

        let item: VideoItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.youtube_id, "abc123");
        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["youtubeId"], "abc123");
    }

    #[test]
    fn test_missing_item_fields_default_to_empty() {
        let item: NewsItem = serde_json::from_str(r#"{"_id":"news_9","title":"Only"}"#).unwrap();

        assert_eq!(item.category, "");
        assert_eq!(item.time, "");
        assert_eq!(item.excerpt, "");
        assert_eq!(item.href, "");
    }

    #[test]
    fn test_document_missing_collections_decode_empty() {
        let doc = ContentDocument::from_json(r#"{"news":[]}"#).unwrap();

        assert!(doc.news.is_empty());
        assert!(doc.videos.is_empty());
        assert!(doc.trending.is_empty());
    }

    #[test]
    fn test_document_rejects_non_object() {
        assert!(ContentDocument::from_json("[1,2,3]").is_err());
        assert!(ContentDocument::from_json("not json").is_err());
    }
}
