pub const DEFAULT_WEBHOOK_URL: &str = "http://127.0.0.1:5678/webhook-test/chat";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub fn default_title() -> String {
    "Market Intelligence Chatbot".to_string()
}

pub fn default_subtitle() -> String {
    "Ask about market trends, competitors, and industry insights".to_string()
}

pub fn default_placeholder() -> String {
    "Type your market research question...".to_string()
}

pub fn default_about() -> String {
    [
        "This chatbot connects to your workflow webhook to:",
        "- Research market trends",
        "- Analyze competitors",
        "- Extract industry insights",
        "- Send summaries to Slack",
    ]
    .join("\n")
}
