//! Article pages and content negotiation.

mod defaults;

pub use defaults::default_article;

/// Returns true when the `Accept` header asks for the JSON representation.
///
/// Anything else, including a missing header, gets raw HTML.
pub fn wants_json(accept: Option<&str>) -> bool {
    accept.is_some_and(|value| value.contains("application/json"))
}

/// Picks the article body: a non-empty stored copy wins over the built-in one.
pub fn resolve_article(stored: Option<String>, filename: &str) -> Option<String> {
    stored
        .filter(|html| !html.is_empty())
        .or_else(|| default_article(filename).map(str::to_string))
}
