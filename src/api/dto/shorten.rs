//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request to shorten a single URL.
///
/// `longUrl` is kept as a raw JSON value so that any JSON type reaches
/// validation: falsy values (`null`, `false`, `0`, `""`) are reported as
/// missing, anything else is validated as text via [`Self::long_url_text`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    #[serde(default)]
    pub long_url: Option<Value>,
}

impl ShortenRequest {
    /// Text form of `longUrl`, or `None` if the field is absent or falsy.
    ///
    /// Non-string values are rendered the way a JavaScript string conversion
    /// would: `true` becomes `"true"`, numbers their decimal form, arrays their
    /// elements joined with commas and objects `"[object Object]"`.
    pub fn long_url_text(&self) -> Option<String> {
        match self.long_url.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) if s.is_empty() => None,
            value => Some(to_js_string(value)),
        }
    }
}

fn to_js_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(to_js_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text_of(body: Value) -> Option<String> {
        serde_json::from_value::<ShortenRequest>(body)
            .unwrap()
            .long_url_text()
    }

    #[test]
    fn test_request_accepts_camel_case_field() {
        assert_eq!(
            text_of(json!({ "longUrl": "https://example.com" })).as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_request_absent_and_falsy_are_none() {
        assert!(text_of(json!({})).is_none());

        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!(-0.0), json!("")] {
            assert!(text_of(json!({ "longUrl": falsy.clone() })).is_none(), "{falsy}");
        }
    }

    #[test]
    fn test_request_non_string_values_become_text() {
        assert_eq!(text_of(json!({ "longUrl": 42 })).as_deref(), Some("42"));
        assert_eq!(text_of(json!({ "longUrl": -1 })).as_deref(), Some("-1"));
        assert_eq!(text_of(json!({ "longUrl": true })).as_deref(), Some("true"));
        assert_eq!(
            text_of(json!({ "longUrl": {} })).as_deref(),
            Some("[object Object]")
        );
    }

    #[test]
    fn test_request_arrays_join_elements() {
        assert_eq!(
            text_of(json!({ "longUrl": ["example.com"] })).as_deref(),
            Some("example.com")
        );
        assert_eq!(
            text_of(json!({ "longUrl": ["a", null, ["b", 1]] })).as_deref(),
            Some("a,,b,1")
        );
        assert_eq!(text_of(json!({ "longUrl": [] })).as_deref(), Some(""));
    }

    #[test]
    fn test_response_uses_camel_case() {
        let body = serde_json::to_value(ShortenResponse {
            short_url: "http://jclip.com/abc1234".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({ "shortUrl": "http://jclip.com/abc1234" }));
    }
}
