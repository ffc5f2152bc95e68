//! Newsletter subscriber list operations.
//!
//! The only validation is that an address contains `@`. This is deliberately
//! looser than RFC 5322.

/// Confirmation returned to a new (or repeat) subscriber.
pub const SUBSCRIBE_CONFIRMATION: &str =
    "Thank you for subscribing! You'll be notified when new podcasts are added.";

/// Returns true when `email` looks like an address.
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@')
}

/// Adds `email` unless it is already present. Returns true when the list changed.
pub fn add_subscriber(subscribers: &mut Vec<String>, email: &str) -> bool {
    if subscribers.iter().any(|existing| existing == email) {
        return false;
    }
    subscribers.push(email.to_string());
    true
}

/// Decodes the stored subscriber list. Undecodable values yield an empty list.
pub fn decode_subscribers(json: &str) -> Vec<String> {
    serde_json::from_str(json).unwrap_or_default()
}

/// Encodes the subscriber list for storage.
pub fn encode_subscribers(subscribers: &[String]) -> serde_json::Result<String> {
    serde_json::to_string(subscribers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("reader@example.com"));
        assert!(is_valid_email("@"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_add_subscriber_is_idempotent() {
        let mut list = Vec::new();

        assert!(add_subscriber(&mut list, "a@example.com"));
        assert!(!add_subscriber(&mut list, "a@example.com"));

        assert_eq!(list, vec!["a@example.com".to_string()]);
    }

    #[test]
    fn test_add_subscriber_keeps_insertion_order() {
        let mut list = vec!["b@example.com".to_string()];

        add_subscriber(&mut list, "a@example.com");

        assert_eq!(list, vec!["b@example.com", "a@example.com"]);
    }

    #[test]
    fn test_decode_subscribers() {
        assert_eq!(
            decode_subscribers(r#"["a@example.com","b@example.com"]"#),
            vec!["a@example.com", "b@example.com"]
        );
        assert!(decode_subscribers("{}").is_empty());
        assert!(decode_subscribers("garbage").is_empty());
    }

    #[test]
    fn test_encode_subscribers() {
        let json = encode_subscribers(&["a@example.com".to_string()]).unwrap();
        assert_eq!(json, r#"["a@example.com"]"#);
    }
}
