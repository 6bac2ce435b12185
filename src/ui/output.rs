use crate::api::Reply;
use crate::models::{Message, Role};
use crate::session::SessionLog;
use crate::ui::highlight::MarkdownRenderer;
use colored::*;

/// One message as it appears in the transcript, avatar first.
pub fn format_message(message: &Message, renderer: &MarkdownRenderer) -> String {
    match message.role() {
        Role::User => format!("{} {}\n", message.role().avatar(), message.content().bold()),
        Role::Assistant => format!(
            "{} {}",
            message.role().avatar(),
            renderer.render(message.content())
        ),
    }
}

/// The whole log, top to bottom.
pub fn format_history(log: &SessionLog, renderer: &MarkdownRenderer) -> String {
    if log.is_empty() {
        return format!("{}\n", "No messages yet.".dimmed());
    }

    log.iter()
        .map(|message| format_message(message, renderer))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn display_history(log: &SessionLog, renderer: &MarkdownRenderer) {
    print!("{}", format_history(log, renderer));
}

/// Show the result of a turn. Failures go to stderr in red, followed by
/// any diagnostic text that was kept out of the log.
pub fn display_reply(reply: &Reply, renderer: &MarkdownRenderer) {
    if reply.is_error() {
        eprintln!("{}", reply.content.red());
        if let Some(diagnostic) = &reply.diagnostic {
            eprintln!("{}", diagnostic.dimmed());
        }
        return;
    }

    let message = Message::assistant(reply.content.clone());
    print!("{}", format_message(&message, renderer));
}
