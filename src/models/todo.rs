use chrono::{DateTime, TimeZone, Utc};

/// Completion state of a task.
///
/// `Done` always carries the completion time, so a task can never be marked
/// completed without a timestamp or keep one after being reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Pending,
    Done { at: DateTime<Utc> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,                    // ⇔ id (ms since epoch at creation)
    pub text: String,               // ⇔ text, stored as entered
    pub due: Option<DateTime<Utc>>, // ⇔ dueDate
    pub completion: Completion,     // ⇔ completed + completedAt
}

impl Todo {
    /// New pending task.
    pub fn new(id: i64, text: impl Into<String>, due: Option<DateTime<Utc>>) -> Self {
        Self {
            id,
            text: text.into(),
            due,
            completion: Completion::Pending,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.completion, Completion::Done { .. })
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        match self.completion {
            Completion::Done { at } => Some(at),
            Completion::Pending => None,
        }
    }

    /// Flip the completion flag. Completing stamps `now`, reopening clears it.
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        self.completion = match self.completion {
            Completion::Pending => Completion::Done { at: now },
            Completion::Done { .. } => Completion::Pending,
        };
    }

    /// Creation time, recovered from the id.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.id).single()
    }

    /// Pending and past its due date.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.is_completed() && self.due.is_some_and(|d| d < now)
    }
}
