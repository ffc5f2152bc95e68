//! Built-in article pages served while the store holds no edited copy.

/// Filename to HTML body, compiled into the binary.
static DEFAULT_ARTICLES: [(&str, &str); 4] = [
    (
        "climate-summit.html",
        include_str!("../../articles/climate-summit.html"),
    ),
    (
        "ai-ethics-initiative.html",
        include_str!("../../articles/ai-ethics-initiative.html"),
    ),
    (
        "space-tourism-breakthrough.html",
        include_str!("../../articles/space-tourism-breakthrough.html"),
    ),
    ("news.html", include_str!("../../articles/news.html")),
];

/// Returns the built-in HTML for `filename`, if there is one.
pub fn default_article(filename: &str) -> Option<&'static str> {
    DEFAULT_ARTICLES
        .iter()
        .find(|(name, _)| *name == filename)
        .map(|(_, html)| *html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_default_article() {
        let html = default_article("climate-summit.html").unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Global Climate Summit Reaches Historic Agreement"));
    }

    #[test]
    fn test_unknown_default_article() {
        assert!(default_article("missing.html").is_none());
        assert!(default_article("").is_none());
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(default_article("NEWS.HTML").is_none());
        assert!(default_article("news").is_none());
    }

    #[test]
    fn test_every_listed_name_resolves() {
        assert_eq!(DEFAULT_ARTICLES.len(), 4);
        for (name, html) in DEFAULT_ARTICLES.iter() {
            assert_eq!(default_article(name), Some(*html));
        }
    }
}
