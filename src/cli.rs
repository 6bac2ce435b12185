use crate::error::{HookchatError, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hookchat")]
#[command(
    about = "Chat with a workflow-automation webhook from the terminal",
    long_about = None
)]
pub struct Args {
    #[arg(
        long = "webhook-url",
        help = "Webhook endpoint to send queries to (e.g., http://127.0.0.1:5678/webhook/chat)"
    )]
    pub webhook_url: Option<String>,

    #[arg(long = "timeout", help = "Request timeout in seconds (default 120)")]
    pub timeout: Option<u64>,

    #[arg(short = 'v', long = "verbose", help = "Print request diagnostics to stderr")]
    pub verbose: bool,

    #[arg(
        long = "config-init",
        help = "Write an example config file to ~/.config/hookchat/hookchat.yaml"
    )]
    pub config_init: bool,

    #[arg(help = "Ask a single question and exit instead of starting a chat")]
    pub query: Vec<String>,
}

impl Args {
    /// The one-shot query, if any words were given on the command line.
    /// Words that are all whitespace are rejected rather than sent.
    pub fn one_shot_query(&self) -> Result<Option<String>> {
        if self.query.is_empty() {
            return Ok(None);
        }

        let joined = self.query.join(" ");
        let trimmed = joined.trim();
        if trimmed.is_empty() {
            return Err(HookchatError::Other("query must not be empty".to_string()));
        }
        Ok(Some(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_query_joins_words() {
        let args = Args::parse_from(["hookchat", "top", "competitors", "in", "retail"]);
        assert_eq!(
            args.one_shot_query().unwrap().as_deref(),
            Some("top competitors in retail")
        );
    }

    #[test]
    fn test_no_words_means_interactive() {
        let args = Args::parse_from(["hookchat", "--verbose"]);
        assert!(args.verbose);
        assert!(args.one_shot_query().unwrap().is_none());
    }

    #[test]
    fn test_blank_one_shot_query_is_rejected() {
        let args = Args::parse_from(["hookchat", "   ", ""]);
        let err = args.one_shot_query().unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
