use std::fmt;

/// Failure of a single webhook round-trip.
///
/// The `Display` output is the line that ends up in the conversation, so it
/// is written for the person reading the chat rather than for a log file.
#[derive(Debug)]
pub enum WebhookError {
    /// Status 200 but the body was not JSON.
    MalformedResponse { body: String },
    HttpStatus { status: u16, body: String },
    Connection { endpoint: String },
    Timeout { secs: u64 },
    Unclassified(String),
}

/// Short machine-friendly name of a [`WebhookError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedResponse,
    HttpStatus,
    Connection,
    Timeout,
    Unclassified,
}

impl WebhookError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WebhookError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            WebhookError::HttpStatus { .. } => ErrorKind::HttpStatus,
            WebhookError::Connection { .. } => ErrorKind::Connection,
            WebhookError::Timeout { .. } => ErrorKind::Timeout,
            WebhookError::Unclassified(_) => ErrorKind::Unclassified,
        }
    }

    /// Extra text shown to the operator next to the error line but never
    /// stored in the session log.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            WebhookError::MalformedResponse { body } | WebhookError::HttpStatus { body, .. } => {
                Some(body.clone())
            }
            WebhookError::Connection { .. } => Some(
                "Make sure the workflow engine is running and the webhook is active".to_string(),
            ),
            WebhookError::Timeout { .. } | WebhookError::Unclassified(_) => None,
        }
    }
}

impl fmt::Display for WebhookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebhookError::MalformedResponse { .. } => {
                write!(f, "❌ Invalid response from the webhook")
            }
            WebhookError::HttpStatus { status, body } => write!(f, "❌ Error {}: {}", status, body),
            WebhookError::Connection { endpoint } => {
                write!(f, "❌ Cannot connect to the webhook at {}", endpoint)
            }
            WebhookError::Timeout { secs } => write!(
                f,
                "⏱️ Request timed out after {} seconds. Try a simpler query.",
                secs
            ),
            WebhookError::Unclassified(msg) => write!(f, "❌ Error: {}", msg),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::MalformedResponse => "malformed-response",
            ErrorKind::HttpStatus => "http-status",
            ErrorKind::Connection => "connection",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Unclassified => "unclassified",
        };
        f.write_str(name)
    }
}

impl std::error::Error for WebhookError {}

#[derive(Debug)]
pub enum HookchatError {
    ConfigError(String),
    HttpError(reqwest::Error),
    IoError(std::io::Error),
    YamlError(serde_yaml::Error),
    Other(String),
}

impl fmt::Display for HookchatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookchatError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            HookchatError::HttpError(e) => write!(f, "HTTP client error: {}", e),
            HookchatError::IoError(e) => write!(f, "IO error: {}", e),
            HookchatError::YamlError(e) => write!(f, "YAML error: {}", e),
            HookchatError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for HookchatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HookchatError::HttpError(e) => Some(e),
            HookchatError::IoError(e) => Some(e),
            HookchatError::YamlError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for HookchatError {
    fn from(err: reqwest::Error) -> Self {
        HookchatError::HttpError(err)
    }
}

impl From<std::io::Error> for HookchatError {
    fn from(err: std::io::Error) -> Self {
        HookchatError::IoError(err)
    }
}

impl From<serde_yaml::Error> for HookchatError {
    fn from(err: serde_yaml::Error) -> Self {
        HookchatError::YamlError(err)
    }
}

impl From<anyhow::Error> for HookchatError {
    fn from(err: anyhow::Error) -> Self {
        HookchatError::Other(format!("{:#}", err))
    }
}

pub type Result<T> = std::result::Result<T, HookchatError>;
