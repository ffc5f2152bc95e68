//! Pure list operations over the content document.
//!
//! Callers load the document, run one of these, then save the whole document
//! back. Nothing here performs I/O.

use super::collection::{CollectionItem, Placement};
use super::error::ContentError;
use super::types::ContentDocument;

fn not_found<T: CollectionItem>(id: &str) -> ContentError {
    ContentError::NotFound {
        collection: T::KIND,
        id: id.to_string(),
    }
}

fn position<T: CollectionItem>(doc: &ContentDocument, id: &str) -> Result<usize, ContentError> {
    T::items(doc)
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| not_found::<T>(id))
}

/// Finds the item with the given id.
pub fn find_item<'a, T: CollectionItem>(
    doc: &'a ContentDocument,
    id: &str,
) -> Result<&'a T, ContentError> {
    T::items(doc)
        .iter()
        .find(|item| item.id() == id)
        .ok_or_else(|| not_found::<T>(id))
}

/// Inserts an item according to the collection's placement policy.
pub fn insert_item<T: CollectionItem>(doc: &mut ContentDocument, item: T) {
    let items = T::items_mut(doc);
    match T::KIND.placement() {
        Placement::Front => items.insert(0, item),
        Placement::Back => items.push(item),
    }
}

/// Builds an item from a create request under `id` and inserts it.
///
/// Returns a copy of the inserted item.
pub fn create_item<T: CollectionItem>(
    doc: &mut ContentDocument,
    id: String,
    request: T::Create,
) -> T {
    let item = T::from_create(id, request, T::items(doc));
    insert_item(doc, item.clone());
    item
}

/// Shallow-merges an update into the item with the given id.
///
/// Returns a copy of the merged item.
pub fn update_item<T: CollectionItem>(
    doc: &mut ContentDocument,
    id: &str,
    update: T::Update,
) -> Result<T, ContentError> {
    let idx = position::<T>(doc, id)?;
    let item = &mut T::items_mut(doc)[idx];
    item.apply_update(update);
    Ok(item.clone())
}

/// Removes the item with the given id and returns it.
pub fn remove_item<T: CollectionItem>(
    doc: &mut ContentDocument,
    id: &str,
) -> Result<T, ContentError> {
    let idx = position::<T>(doc, id)?;
    Ok(T::items_mut(doc).remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{
        CollectionKind, CreateNewsRequest, CreateTrendingRequest, CreateVideoRequest, NewsItem,
        TrendingItem, UpdateTrendingRequest, VideoItem,
    };

    fn news(title: &str) -> CreateNewsRequest {
        CreateNewsRequest {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    fn titles<T: CollectionItem>(doc: &ContentDocument, title: impl Fn(&T) -> &str) -> Vec<&str> {
        T::items(doc).iter().map(title).collect()
    }

    #[test]
    fn test_news_is_prepended() {
        let mut doc = ContentDocument::new();

        create_item::<NewsItem>(&mut doc, "news_a".to_string(), news("A"));
        create_item::<NewsItem>(&mut doc, "news_b".to_string(), news("B"));

        assert_eq!(titles::<NewsItem>(&doc, |n| &n.title), vec!["B", "A"]);
    }

    #[test]
    fn test_videos_and_trending_are_appended() {
        let mut doc = ContentDocument::new();

        for title in ["A", "B"] {
            create_item::<VideoItem>(
                &mut doc,
                format!("video_{title}"),
                CreateVideoRequest {
                    title: Some(title.to_string()),
                    ..Default::default()
                },
            );
            create_item::<TrendingItem>(
                &mut doc,
                format!("trending_{title}"),
                CreateTrendingRequest {
                    title: Some(title.to_string()),
                    ..Default::default()
                },
            );
        }

        assert_eq!(titles::<VideoItem>(&doc, |v| &v.title), vec!["A", "B"]);
        assert_eq!(titles::<TrendingItem>(&doc, |t| &t.title), vec!["A", "B"]);
        assert_eq!(doc.trending[0].number, 1);
        assert_eq!(doc.trending[1].number, 2);
    }

    #[test]
    fn test_created_item_can_be_found() {
        let mut doc = ContentDocument::new();

        let created = create_item::<NewsItem>(&mut doc, "news_x".to_string(), news("X"));

        let found = find_item::<NewsItem>(&doc, "news_x").unwrap();
        assert_eq!(found, &created);
    }

    #[test]
    fn test_find_missing_item() {
        let doc = ContentDocument::new();

        let result = find_item::<VideoItem>(&doc, "unknown_id");

        assert_eq!(
            result,
            Err(ContentError::NotFound {
                collection: CollectionKind::Videos,
                id: "unknown_id".to_string(),
            })
        );
    }

    #[test]
    fn test_update_preserves_other_fields() {
        let mut doc = ContentDocument::new();
        let created = create_item::<TrendingItem>(
            &mut doc,
            "trending_1".to_string(),
            CreateTrendingRequest {
                title: Some("X".to_string()),
                description: Some("Desc".to_string()),
                href: Some("articles/x.html".to_string()),
                ..Default::default()
            },
        );

        let updated = update_item::<TrendingItem>(
            &mut doc,
            "trending_1",
            UpdateTrendingRequest {
                title: Some("Y".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.title, "Y");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.number, created.number);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.href, created.href);
        assert_eq!(doc.trending[0], updated);
    }

    #[test]
    fn test_update_missing_item() {
        let mut doc = ContentDocument::new();

        let result = update_item::<TrendingItem>(&mut doc, "nope", Default::default());

        assert!(matches!(result, Err(ContentError::NotFound { .. })));
    }

    #[test]
    fn test_remove_then_find_is_not_found() {
        let mut doc = ContentDocument::new();
        create_item::<NewsItem>(&mut doc, "news_a".to_string(), news("A"));
        create_item::<NewsItem>(&mut doc, "news_b".to_string(), news("B"));

        let removed = remove_item::<NewsItem>(&mut doc, "news_a").unwrap();

        assert_eq!(removed.title, "A");
        assert!(find_item::<NewsItem>(&doc, "news_a").is_err());
        assert_eq!(doc.news.len(), 1);
    }

    #[test]
    fn test_remove_missing_item() {
        let mut doc = ContentDocument::new();

        let result = remove_item::<VideoItem>(&mut doc, "video_404");

        assert!(matches!(result, Err(ContentError::NotFound { .. })));
    }
}
