use crate::api::response::parse_reply;
use crate::error::{Result, WebhookError};
use crate::models::{QueryRequest, WebhookReply};
use colored::*;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::time::{Duration, Instant};

/// HTTP side of a turn: one POST per query, no retries.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
    verbose: bool,
}

impl WebhookClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
            verbose: false,
        })
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn send(&self, query: &str) -> std::result::Result<WebhookReply, WebhookError> {
        if self.verbose {
            eprintln!(
                "{}",
                format!(
                    "[webhook] POST {} (timeout {}s)",
                    self.endpoint,
                    self.timeout.as_secs()
                )
                .dimmed()
            );
        }

        let started = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .json(&QueryRequest { query })
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if self.verbose {
            eprintln!(
                "{}",
                format!(
                    "[webhook] status {} in {} ms ({} bytes)",
                    status,
                    started.elapsed().as_millis(),
                    body.len()
                )
                .dimmed()
            );
        }

        parse_reply(status, body)
    }

    fn classify(&self, err: reqwest::Error) -> WebhookError {
        // A connect timeout reports both flags; the timeout wins.
        if err.is_timeout() {
            WebhookError::Timeout {
                secs: self.timeout.as_secs(),
            }
        } else if err.is_connect() {
            WebhookError::Connection {
                endpoint: self.endpoint.clone(),
            }
        } else {
            WebhookError::Unclassified(describe(&err))
        }
    }
}

/// Error text including its causes, since reqwest's top-level message is
/// often just "builder error".
fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Leaf;

    impl fmt::Display for Leaf {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("relative URL without a base")
        }
    }

    impl std::error::Error for Leaf {}

    #[derive(Debug)]
    struct Wrapper(Leaf);

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("builder error")
        }
    }

    impl std::error::Error for Wrapper {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_describe_includes_causes() {
        assert_eq!(
            describe(&Wrapper(Leaf)),
            "builder error: relative URL without a base"
        );
    }

    #[test]
    fn test_client_keeps_endpoint_and_timeout() {
        let client =
            WebhookClient::new("http://127.0.0.1:5678/webhook/chat", Duration::from_secs(5))
                .unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:5678/webhook/chat");
        assert_eq!(client.timeout(), Duration::from_secs(5));
    }
}
