use crate::api::{Dispatcher, Reply};
use crate::config::Config;
use crate::session::Session;
use crate::ui::{
    display_history, display_reply, format_help, format_status_panel, MarkdownRenderer, Spinner,
};
use colored::*;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    History,
    Status,
    Help,
    Quit,
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Blank,
    Query(String),
    Command(Command),
}

/// Classify one line typed at the prompt. Blank lines never reach the
/// dispatcher.
pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Blank;
    }

    if let Some(name) = trimmed.strip_prefix('/') {
        let command = match name.to_lowercase().as_str() {
            "history" => Command::History,
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(trimmed.to_string()),
        };
        return Input::Command(command);
    }

    Input::Query(trimmed.to_string())
}

/// Run one turn with the busy indicator up, then show the result.
pub async fn run_turn(
    dispatcher: &Dispatcher,
    session: &mut Session,
    renderer: &MarkdownRenderer,
    query: &str,
) -> Reply {
    let spinner = Spinner::start("Analyzing...");
    let reply = dispatcher.handle(session, query).await;
    spinner.stop();

    display_reply(&reply, renderer);
    reply
}

/// Interactive loop: one turn at a time until `/quit` or end of input.
pub async fn run<R>(
    reader: R,
    config: &Config,
    dispatcher: &Dispatcher,
    session: &mut Session,
    renderer: &MarkdownRenderer,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    println!("{}", config.display.placeholder.dimmed());

    let mut lines = reader.lines();
    loop {
        print!("{} ", "›".cyan().bold());
        io::stdout().flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => {
                println!();
                break;
            }
        };

        match parse_input(&line) {
            Input::Blank => continue,
            Input::Query(query) => {
                run_turn(dispatcher, session, renderer, &query).await;
                println!();
            }
            Input::Command(Command::History) => display_history(session.log(), renderer),
            Input::Command(Command::Status) => print!("{}", format_status_panel(config)),
            Input::Command(Command::Help) => print!("{}", format_help()),
            Input::Command(Command::Quit) => break,
            Input::Command(Command::Unknown(name)) => {
                eprintln!("{}", format!("Unknown command: {} (try /help)", name).yellow());
            }
        }
    }

    if config.verbose {
        eprintln!(
            "{}",
            format!(
                "[session {}] ended after {} turn(s)",
                session.session_id,
                session.turns()
            )
            .dimmed()
        );
    }

    Ok(())
}
