use crate::api::WebhookClient;
use crate::config::Config;
use crate::error::{ErrorKind, Result};
use crate::models::Message;
use crate::session::Session;
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Answered,
    Failed(ErrorKind),
}

/// What the caller shows for a finished turn.
///
/// `content` is exactly what was appended to the log. `diagnostic` carries
/// raw text (an unparsable body, a hint) that is displayed but not logged.
#[derive(Debug, Clone)]
pub struct Reply {
    pub content: String,
    pub outcome: Outcome,
    pub diagnostic: Option<String>,
}

impl Reply {
    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }
}

/// Turns a query into a user message, a webhook call and exactly one
/// assistant message. Holds no per-turn state.
pub struct Dispatcher {
    client: WebhookClient,
    verbose: bool,
}

impl Dispatcher {
    pub fn new(client: WebhookClient) -> Self {
        Self {
            client,
            verbose: false,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = WebhookClient::new(config.webhook_url.clone(), config.timeout())?
            .with_verbose(config.verbose);
        Ok(Self::new(client).with_verbose(config.verbose))
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    /// Run one turn. Never fails: every outcome becomes an assistant message.
    pub async fn handle(&self, session: &mut Session, query: &str) -> Reply {
        // Logged before the call so the question survives any failure.
        session.log_mut().append(Message::user(query));

        let reply = match self.client.send(query).await {
            Ok(webhook_reply) => Reply {
                content: webhook_reply.into_text(),
                outcome: Outcome::Answered,
                diagnostic: None,
            },
            Err(err) => {
                if self.verbose {
                    eprintln!(
                        "{}",
                        format!("[session {}] turn failed: {}", session.session_id, err.kind())
                            .dimmed()
                    );
                }
                Reply {
                    content: err.to_string(),
                    outcome: Outcome::Failed(err.kind()),
                    diagnostic: err.diagnostic(),
                }
            }
        };

        session
            .log_mut()
            .append(Message::assistant(reply.content.clone()));
        reply
    }
}
