use serde::Serialize;
use serde_json::Value;

/// Content used when the webhook answers with JSON that has no `text` field.
pub const NO_RESPONSE_FALLBACK: &str = "No response received";

#[derive(Serialize, Debug)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
}

/// Body of a successful webhook call. Only `text` is read; everything else
/// the workflow sends back is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookReply {
    pub text: Option<String>,
}

impl WebhookReply {
    pub fn from_value(value: &Value) -> Self {
        let text = match value.get("text") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            // Workflows sometimes return numbers or objects here; show them as JSON.
            Some(other) => Some(other.to_string()),
        };
        Self { text }
    }

    pub fn into_text(self) -> String {
        self.text.unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_text_falls_back() {
        let reply = WebhookReply::from_value(&json!({}));
        assert_eq!(reply.into_text(), NO_RESPONSE_FALLBACK);
    }

    #[test]
    fn test_null_text_falls_back() {
        let reply = WebhookReply::from_value(&json!({ "text": null }));
        assert_eq!(reply.into_text(), NO_RESPONSE_FALLBACK);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let reply = WebhookReply::from_value(&json!({ "text": "ok", "executionId": 42 }));
        assert_eq!(reply.into_text(), "ok");
    }

    #[test]
    fn test_non_string_text_is_rendered_as_json() {
        let reply = WebhookReply::from_value(&json!({ "text": 12 }));
        assert_eq!(reply.into_text(), "12");
    }

    #[test]
    fn test_non_object_body_has_no_text() {
        let reply = WebhookReply::from_value(&json!(["a", "b"]));
        assert_eq!(reply.into_text(), NO_RESPONSE_FALLBACK);
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&QueryRequest { query: "hello" }).unwrap();
        assert_eq!(body, r#"{"query":"hello"}"#);
    }
}
