use crate::config::{Config, DisplayConfig, Readiness};
use colored::*;

pub fn readiness_label(readiness: Readiness) -> &'static str {
    match readiness {
        Readiness::Ready => "✅ Ready to connect",
        Readiness::NotConfigured => "❌ No webhook configured",
    }
}

pub fn format_banner(display: &DisplayConfig) -> String {
    format!(
        "{}\n{}\n",
        format!("💬 {}", display.title).bold(),
        display.subtitle.dimmed()
    )
}

/// The "about" and "status" side panel: what the bot does, where it sends
/// queries, and whether that endpoint is set.
pub fn format_status_panel(config: &Config) -> String {
    let endpoint = if config.webhook_url.is_empty() {
        "(none)"
    } else {
        config.webhook_url.as_str()
    };

    let mut out = String::new();
    out.push_str(&format!("{}\n", "📊 About This Chatbot".bold()));
    out.push_str(&config.display.about);
    out.push_str("\n\n");
    out.push_str(&format!("{}\n", "🔧 Status".bold()));
    out.push_str(&format!("  {}\n", endpoint.cyan()));
    out.push_str(&format!("  {}\n", readiness_label(config.readiness())));
    out
}

pub fn format_help() -> String {
    [
        "/history   Show the conversation so far",
        "/status    Show the webhook endpoint and readiness",
        "/help      Show this help",
        "/quit      End the session (also /exit or Ctrl-D)",
    ]
    .join("\n")
        + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_WEBHOOK_URL;

    fn config(url: &str) -> Config {
        Config {
            webhook_url: url.to_string(),
            timeout_secs: 120,
            verbose: false,
            display: DisplayConfig::default(),
        }
    }

    #[test]
    fn test_status_panel_shows_endpoint_and_ready() {
        colored::control::set_override(false);
        let panel = format_status_panel(&config(DEFAULT_WEBHOOK_URL));
        assert!(panel.contains(DEFAULT_WEBHOOK_URL));
        assert!(panel.contains("Ready to connect"));
        assert!(panel.contains("Research market trends"));
    }

    #[test]
    fn test_status_panel_without_endpoint() {
        colored::control::set_override(false);
        let panel = format_status_panel(&config(""));
        assert!(panel.contains("(none)"));
        assert!(panel.contains("No webhook configured"));
    }

    #[test]
    fn test_banner_has_title_and_subtitle() {
        colored::control::set_override(false);
        let banner = format_banner(&DisplayConfig::default());
        assert!(banner.starts_with("💬 Market Intelligence Chatbot\n"));
        assert!(banner.contains("competitors"));
    }
}
