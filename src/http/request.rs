//! Input extraction from the inbound request.
//!
//! # Priority
//! 1. `?value=` query parameter
//! 2. `?word=` query parameter
//! 3. POST/PUT only: JSON body field `value`, then `word`
//!
//! A body that cannot be read or parsed counts as absent input; it never
//! produces its own error.

use axum::{
    body::Body,
    http::{Method, Request, Uri},
};
use serde_json::Value;

use crate::http::response::HandlerError;

/// A validated, trimmed, non-empty word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord(String);

impl TargetWord {
    /// Validate a raw candidate. Anything but a string with non-whitespace
    /// content is rejected.
    pub fn parse(raw: Option<Value>) -> Result<Self, HandlerError> {
        match raw {
            Some(Value::String(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Err(HandlerError::MissingInput)
                } else {
                    Ok(Self(trimmed.to_string()))
                }
            }
            _ => Err(HandlerError::MissingInput),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TargetWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// First non-empty of `?value=` and `?word=`.
pub fn query_word(uri: &Uri) -> Option<Value> {
    let query = uri.query()?;
    query_param(query, "value")
        .or_else(|| query_param(query, "word"))
        .map(Value::String)
}

// First occurrence only, empty counts as absent.
fn query_param(query: &str, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Methods whose body is consulted when the query string has no word.
pub fn accepts_body(method: &Method) -> bool {
    method == Method::POST || method == Method::PUT
}

/// Best-effort JSON parse. `None` means "no structured input".
pub fn try_parse_json(bytes: &[u8]) -> Option<Value> {
    serde_json::from_slice(bytes).ok()
}

/// `value` field, else `word` field. Absent and `null` fields are skipped;
/// a present non-string field is returned so validation can reject it.
pub fn body_word(body: &Value) -> Option<Value> {
    ["value", "word"]
        .iter()
        .find_map(|field| body.get(field).filter(|v| !v.is_null()).cloned())
}

/// Run the full extraction and validation for one request.
pub async fn extract_target_word(
    request: Request<Body>,
    max_body_bytes: usize,
) -> Result<TargetWord, HandlerError> {
    let (parts, body) = request.into_parts();

    let mut raw = query_word(&parts.uri);
    if raw.is_none() && accepts_body(&parts.method) {
        raw = match axum::body::to_bytes(body, max_body_bytes).await {
            Ok(bytes) => try_parse_json(&bytes).as_ref().and_then(body_word),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring unreadable request body");
                None
            }
        };
    }

    TargetWord::parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn uri(s: &str) -> Uri {
        s.parse().unwrap()
    }

    #[test]
    fn test_value_wins_over_word() {
        assert_eq!(query_word(&uri("/?value=a&word=b")), Some(json!("a")));
        assert_eq!(query_word(&uri("/?word=b&value=a")), Some(json!("a")));
    }

    #[test]
    fn test_word_used_when_value_absent_or_empty() {
        assert_eq!(query_word(&uri("/?word=hello")), Some(json!("hello")));
        assert_eq!(query_word(&uri("/?value=&word=hello")), Some(json!("hello")));
    }

    #[test]
    fn test_query_is_percent_decoded() {
        assert_eq!(query_word(&uri("/?value=caf%C3%A9")), Some(json!("café")));
        assert_eq!(query_word(&uri("/?value=two+words")), Some(json!("two words")));
        assert_eq!(query_word(&uri("/?value=%20%20")), Some(json!("  ")));
    }

    #[test]
    fn test_no_query() {
        assert_eq!(query_word(&uri("/")), None);
        assert_eq!(query_word(&uri("/?other=x")), None);
    }

    #[test]
    fn test_try_parse_json_is_silent() {
        assert_eq!(try_parse_json(b"{\"word\":\"chat\"}"), Some(json!({"word": "chat"})));
        assert_eq!(try_parse_json(b"{not json"), None);
        assert_eq!(try_parse_json(b""), None);
    }

    #[test]
    fn test_body_word_fields() {
        assert_eq!(body_word(&json!({"value": "a", "word": "b"})), Some(json!("a")));
        assert_eq!(body_word(&json!({"value": null, "word": "b"})), Some(json!("b")));
        assert_eq!(body_word(&json!({"value": 5})), Some(json!(5)));
        assert_eq!(body_word(&json!({"other": "x"})), None);
        assert_eq!(body_word(&json!(["value"])), None);
        assert_eq!(body_word(&json!("value")), None);
    }

    #[test]
    fn test_target_word_validation() {
        assert_eq!(
            TargetWord::parse(Some(json!("  chat \n"))).unwrap().as_str(),
            "chat"
        );
        assert!(TargetWord::parse(None).is_err());
        assert!(TargetWord::parse(Some(json!("   "))).is_err());
        assert!(TargetWord::parse(Some(json!(""))).is_err());
        assert!(TargetWord::parse(Some(json!(42))).is_err());
        assert!(TargetWord::parse(Some(json!({"value": "x"}))).is_err());
    }

    #[test]
    fn test_accepts_body() {
        assert!(accepts_body(&Method::POST));
        assert!(accepts_body(&Method::PUT));
        assert!(!accepts_body(&Method::GET));
        assert!(!accepts_body(&Method::DELETE));
    }

    #[tokio::test]
    async fn test_extract_prefers_query_over_body() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/?word=query")
            .body(Body::from(r#"{"value":"body"}"#))
            .unwrap();
        let word = extract_target_word(request, 1024).await.unwrap();
        assert_eq!(word.as_str(), "query");
    }

    #[tokio::test]
    async fn test_extract_ignores_body_on_get() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .body(Body::from(r#"{"value":"body"}"#))
            .unwrap();
        assert!(matches!(
            extract_target_word(request, 1024).await,
            Err(HandlerError::MissingInput)
        ));
    }

    #[tokio::test]
    async fn test_extract_oversized_body_is_absent() {
        let request = Request::builder()
            .method(Method::PUT)
            .uri("/")
            .body(Body::from(r#"{"value":"a very long word indeed"}"#))
            .unwrap();
        assert!(matches!(
            extract_target_word(request, 8).await,
            Err(HandlerError::MissingInput)
        ));
    }
}
