mod log;

pub use log::SessionLog;

use chrono::{DateTime, Local};
use uuid::Uuid;

/// State held for the lifetime of one user's conversation.
///
/// A session starts with an empty log and is dropped when the user leaves;
/// nothing is written to disk.
#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: String,
    pub started_at: DateTime<Local>,
    log: SessionLog,
}

impl Session {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            started_at: Local::now(),
            log: SessionLog::new(),
        }
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub(crate) fn log_mut(&mut self) -> &mut SessionLog {
        &mut self.log
    }

    /// Number of completed or in-flight turns.
    pub fn turns(&self) -> usize {
        self.log
            .iter()
            .filter(|m| m.role() == crate::models::Role::User)
            .count()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Message;

    #[test]
    fn test_sessions_get_distinct_ids() {
        let a = Session::new();
        let b = Session::new();
        assert_ne!(a.session_id, b.session_id);
        assert!(a.log().is_empty());
    }

    #[test]
    fn test_turns_counts_user_messages() {
        let mut session = Session::new();
        session.log_mut().append(Message::user("one"));
        session.log_mut().append(Message::assistant("1"));
        session.log_mut().append(Message::user("two"));
        assert_eq!(session.turns(), 2);
    }
}
