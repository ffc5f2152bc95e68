//! The three collections of the content document behind one trait.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use super::requests::{
    CreateNewsRequest, CreateTrendingRequest, CreateVideoRequest, UpdateNewsRequest,
    UpdateTrendingRequest, UpdateVideoRequest,
};
use super::types::{ContentDocument, NewsItem, TrendingItem, VideoItem};

/// Where newly created items go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Newest first.
    Front,
    /// Insertion order.
    Back,
}

/// Identifies a collection of the content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    News,
    Videos,
    Trending,
}

impl CollectionKind {
    /// Path segment under `/api` and field name in the content document.
    pub fn resource(&self) -> &'static str {
        match self {
            CollectionKind::News => "news",
            CollectionKind::Videos => "videos",
            CollectionKind::Trending => "trending",
        }
    }

    /// Prefix of generated item ids.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            CollectionKind::News => "news",
            CollectionKind::Videos => "video",
            CollectionKind::Trending => "trending",
        }
    }

    pub fn placement(&self) -> Placement {
        match self {
            CollectionKind::News => Placement::Front,
            CollectionKind::Videos | CollectionKind::Trending => Placement::Back,
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource())
    }
}

/// An item stored in one of the content document's collections.
pub trait CollectionItem: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Payload accepted when creating an item.
    type Create: DeserializeOwned + Send + 'static;
    /// Partial payload accepted when updating an item.
    type Update: DeserializeOwned + Send + 'static;

    const KIND: CollectionKind;

    fn id(&self) -> &str;

    /// Builds a new item. `existing` holds the collection before insertion.
    fn from_create(id: String, request: Self::Create, existing: &[Self]) -> Self;

    fn apply_update(&mut self, update: Self::Update);

    fn items(doc: &ContentDocument) -> &Vec<Self>;

    fn items_mut(doc: &mut ContentDocument) -> &mut Vec<Self>;
}

impl CollectionItem for NewsItem {
    type Create = CreateNewsRequest;
    type Update = UpdateNewsRequest;

    const KIND: CollectionKind = CollectionKind::News;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, request: Self::Create, _existing: &[Self]) -> Self {
        request.into_item(id)
    }

    fn apply_update(&mut self, update: Self::Update) {
        update.apply_to(self);
    }

    fn items(doc: &ContentDocument) -> &Vec<Self> {
        &doc.news
    }

    fn items_mut(doc: &mut ContentDocument) -> &mut Vec<Self> {
        &mut doc.news
    }
}

impl CollectionItem for VideoItem {
    type Create = CreateVideoRequest;
    type Update = UpdateVideoRequest;

    const KIND: CollectionKind = CollectionKind::Videos;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, request: Self::Create, _existing: &[Self]) -> Self {
        request.into_item(id)
    }

    fn apply_update(&mut self, update: Self::Update) {
        update.apply_to(self);
    }

    fn items(doc: &ContentDocument) -> &Vec<Self> {
        &doc.videos
    }

    fn items_mut(doc: &mut ContentDocument) -> &mut Vec<Self> {
        &mut doc.videos
    }
}

impl CollectionItem for TrendingItem {
    type Create = CreateTrendingRequest;
    type Update = UpdateTrendingRequest;

    const KIND: CollectionKind = CollectionKind::Trending;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, request: Self::Create, existing: &[Self]) -> Self {
        request.into_item(id, existing.len())
    }

    fn apply_update(&mut self, update: Self::Update) {
        update.apply_to(self);
    }

    fn items(doc: &ContentDocument) -> &Vec<Self> {
        &doc.trending
    }

    fn items_mut(doc: &mut ContentDocument) -> &mut Vec<Self> {
        &mut doc.trending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_policy() {
        assert_eq!(CollectionKind::News.placement(), Placement::Front);
        assert_eq!(CollectionKind::Videos.placement(), Placement::Back);
        assert_eq!(CollectionKind::Trending.placement(), Placement::Back);
    }

    #[test]
    fn test_video_prefix_is_singular() {
        assert_eq!(CollectionKind::Videos.resource(), "videos");
        assert_eq!(CollectionKind::Videos.id_prefix(), "video");
    }

    #[test]
    fn test_items_mut_targets_matching_collection() {
        let mut doc = ContentDocument::new();

        TrendingItem::items_mut(&mut doc).push(TrendingItem::default());

        assert_eq!(doc.trending.len(), 1);
        assert!(NewsItem::items(&doc).is_empty());
        assert!(VideoItem::items(&doc).is_empty());
    }
}
