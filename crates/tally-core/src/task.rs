use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::id::TaskId;
use crate::time_format::TimeFormat;

/// One todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier, unique within a session.
    pub id: TaskId,
    /// Trimmed, non-empty display text.
    pub text: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation time. Display only.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Task {
    /// Build an open task from user input, or `None` when the text is blank.
    #[must_use]
    pub fn new(text: &str, created_at: OffsetDateTime) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id: TaskId::new(),
            text: text.to_owned(),
            completed: false,
            created_at,
        })
    }

    /// Flip the completion flag.
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Creation time rendered with `format`.
    #[must_use]
    pub fn time_label(&self, format: &TimeFormat) -> String {
        format.render(self.created_at)
    }

    /// Text for the status column.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed ✔"
        } else {
            "Not Completed ✘"
        }
    }

    /// Caption of the action that flips the flag.
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        if self.completed { "Undo" } else { "Done" }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use time::macros::datetime;

    #[test]
    fn new_trims_text_and_starts_open() {
        let at = datetime!(2024-05-01 09:00 UTC);
        let task = Task::new("  Buy milk \n", at).expect("text is not blank");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.created_at, at);
    }

    #[test]
    fn new_rejects_blank_text() {
        let at = datetime!(2024-05-01 09:00 UTC);
        assert!(Task::new("", at).is_none());
        assert!(Task::new("   ", at).is_none());
        assert!(Task::new("\t\n", at).is_none());
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut task = Task::new("A", datetime!(2024-05-01 09:00 UTC)).expect("text is not blank");
        task.toggle();
        assert!(task.completed);
        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn labels_follow_completion() {
        let mut task = Task::new("A", datetime!(2024-05-01 09:00 UTC)).expect("text is not blank");
        assert_eq!(task.status_label(), "Not Completed ✘");
        assert_eq!(task.toggle_label(), "Done");
        task.toggle();
        assert_eq!(task.status_label(), "Completed ✔");
        assert_eq!(task.toggle_label(), "Undo");
    }

    #[test]
    fn time_label_uses_given_format() {
        let task = Task::new("A", datetime!(2024-05-01 14:03:09 UTC)).expect("text is not blank");
        assert_eq!(task.time_label(&TimeFormat::default()), "14:03:09");
    }

    #[test]
    fn serializes_creation_time_as_rfc3339() {
        let task = Task::new("A", datetime!(2024-05-01 14:03:09 UTC)).expect("text is not blank");
        let json = serde_json::to_value(&task).expect("must serialize");
        assert_eq!(json["created_at"], "2024-05-01T14:03:09Z");
        assert_eq!(json["completed"], false);
    }
}
