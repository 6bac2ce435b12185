use crate::error::WebhookError;
use crate::models::WebhookReply;
use serde_json::Value;

/// Turn a finished HTTP exchange into a reply or a classified failure.
///
/// Only status 200 counts as success; any other code, including other 2xx
/// codes, is reported with its raw body.
pub fn parse_reply(status: u16, body: String) -> Result<WebhookReply, WebhookError> {
    if status != 200 {
        return Err(WebhookError::HttpStatus { status, body });
    }

    match serde_json::from_str::<Value>(&body) {
        Ok(value) => Ok(WebhookReply::from_value(&value)),
        Err(_) => Err(WebhookError::MalformedResponse { body }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::NO_RESPONSE_FALLBACK;

    #[test]
    fn test_parse_reply_with_text() {
        let reply = parse_reply(200, r#"{"text": "Revenue grew 12%"}"#.to_string()).unwrap();
        assert_eq!(reply.into_text(), "Revenue grew 12%");
    }

    #[test]
    fn test_parse_reply_without_text() {
        let reply = parse_reply(200, "{}".to_string()).unwrap();
        assert_eq!(reply.into_text(), NO_RESPONSE_FALLBACK);
    }

    #[test]
    fn test_parse_reply_invalid_json() {
        let err = parse_reply(200, "Workflow was started".to_string()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        assert_eq!(err.diagnostic().as_deref(), Some("Workflow was started"));
    }

    #[test]
    fn test_parse_reply_empty_body_is_malformed() {
        let err = parse_reply(200, String::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_parse_reply_non_200_status() {
        let err = parse_reply(404, "webhook not registered".to_string()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::HttpStatus);
        let line = err.to_string();
        assert!(line.contains("404"));
        assert!(line.contains("webhook not registered"));
    }

    #[test]
    fn test_parse_reply_other_2xx_is_not_success() {
        let err = parse_reply(204, String::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::HttpStatus);
    }
}
