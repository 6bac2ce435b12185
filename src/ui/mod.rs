pub mod highlight;
pub mod output;
pub mod panel;
pub mod spinner;

pub use highlight::MarkdownRenderer;
pub use output::{display_history, display_reply, format_history, format_message};
pub use panel::{format_banner, format_help, format_status_panel, readiness_label};
pub use spinner::Spinner;
