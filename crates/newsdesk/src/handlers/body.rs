use axum::body::Bytes;
use serde::de::DeserializeOwned;

/// Decodes a JSON request body whatever its `Content-Type` header says.
///
/// Browsers posting a string body send `text/plain`, so the header is not
/// checked.
pub fn parse_json<T: DeserializeOwned>(body: &Bytes) -> serde_json::Result<T> {
    serde_json::from_slice(body)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        email: Option<String>,
    }

    #[test]
    fn test_parse_json_object() {
        let body = Bytes::from_static(br#"{"email":"a@b.c"}"#);

        let payload: Payload = parse_json(&body).unwrap();

        assert_eq!(payload.email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn test_parse_json_rejects_garbage() {
        assert!(parse_json::<Payload>(&Bytes::from_static(b"{not json")).is_err());
        assert!(parse_json::<Payload>(&Bytes::new()).is_err());
    }
}
