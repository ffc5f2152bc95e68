use std::fmt;

/// Record key of the content document inside [`Namespace::Content`].
pub const CONTENT_KEY: &str = "data";

/// Record key of the subscriber list inside [`Namespace::Subscriptions`].
pub const SUBSCRIPTIONS_KEY: &str = "emails";

/// Independently addressable partitions of the blob store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    /// Holds the single content document (news, videos, trending).
    Content,
    /// Raw article HTML keyed by filename.
    Articles,
    /// The newsletter subscriber list.
    Subscriptions,
}

impl Namespace {
    /// Returns the stable name used by storage backends.
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Content => "content",
            Namespace::Articles => "articles",
            Namespace::Subscriptions => "subscriptions",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_names_are_stable() {
        assert_eq!(Namespace::Content.as_str(), "content");
        assert_eq!(Namespace::Articles.as_str(), "articles");
        assert_eq!(Namespace::Subscriptions.as_str(), "subscriptions");
    }

    #[test]
    fn test_namespace_display() {
        assert_eq!(Namespace::Articles.to_string(), "articles");
    }
}
