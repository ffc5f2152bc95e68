//! Seed content used while the store holds no document.
//!
//! [`seed_content`] builds a fresh document on every call so requests never
//! share a mutable default.

use super::types::{ContentDocument, NewsItem, TrendingItem, VideoItem};

fn news(id: &str, title: &str, category: &str, time: &str, excerpt: &str, href: &str) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        time: time.to_string(),
        excerpt: excerpt.to_string(),
        href: href.to_string(),
    }
}

fn video(id: &str, youtube_id: &str, title: &str) -> VideoItem {
    VideoItem {
        id: id.to_string(),
        youtube_id: youtube_id.to_string(),
        title: title.to_string(),
        channel: "Your Channel".to_string(),
        description: "Embedded YouTube episode.".to_string(),
    }
}

/// Returns the default content document.
pub fn seed_content() -> ContentDocument {
    ContentDocument {
        news: vec![
            news(
                "news_1",
                "Global Climate Summit Reaches Historic Agreement",
                "Environment",
                "2 hours ago",
                "World leaders unite on unprecedented climate action plan, setting ambitious targets for carbon neutrality by 2035...",
                "articles/climate-summit.html",
            ),
            news(
                "news_2",
                "Tech Giants Announce AI Ethics Initiative",
                "Technology",
                "5 hours ago",
                "Major technology companies collaborate on new standards for responsible AI development and deployment...",
                "articles/ai-ethics-initiative.html",
            ),
            news(
                "news_3",
                "Space Tourism Industry Sees Major Breakthrough",
                "Space",
                "8 hours ago",
                "New propulsion technology makes space travel more accessible and affordable for civilian passengers...",
                "articles/space-tourism-breakthrough.html",
            ),
            news(
                "news_4",
                "Revolutionary Medical Treatment Shows Promise",
                "Health",
                "12 hours ago",
                "Clinical trials reveal breakthrough therapy could transform treatment for rare genetic disorders...",
                "articles/news.html",
            ),
        ],
        videos: vec![
            video("video_1", "JjH8AfUIB8E", "News Podcast Episode"),
            video("video_2", "45OISlCdnDk", "News Podcast Episode 2"),
            video("video_3", "fuRRCZRcE0qMAUPn", "News Podcast Episode 3"),
        ],
        trending: Vec::<TrendingItem>::new(),
    }
}
