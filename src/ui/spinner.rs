use colored::*;
use std::io::{self, IsTerminal, Write};
use std::time::Duration;
use tokio::task::JoinHandle;

static FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Busy indicator on stderr while a turn is in flight. Does nothing when
/// stderr is not a terminal.
pub struct Spinner {
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    pub fn start(label: &str) -> Self {
        if !io::stderr().is_terminal() {
            return Self { handle: None };
        }

        let label = label.to_string();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(100));
            for frame in FRAMES.iter().cycle() {
                interval.tick().await;
                eprint!("\r{} {}", frame.cyan(), label.dimmed());
                let _ = io::stderr().flush();
            }
        });

        Self {
            handle: Some(handle),
        }
    }

    pub fn stop(mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            eprint!("\r\x1b[2K");
            let _ = io::stderr().flush();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.clear();
    }
}
