//! Quick Lecture Logger
//!
//! Form model for logging a taught lecture. Submitting waits a simulated
//! latency, raises a notice and resets the form; the input itself is
//! discarded.

use serde::{Deserialize, Serialize};

use crate::notice::Notice;

/// How much of the planned topic a lecture covered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CompletionLevel {
    #[serde(rename = "Fully Covered")]
    FullyCovered,
    #[serde(rename = "Partially Covered")]
    PartiallyCovered,
    #[serde(rename = "Introduction Only")]
    IntroductionOnly,
}

impl CompletionLevel {
    pub fn all() -> &'static [CompletionLevel] {
        &[
            CompletionLevel::FullyCovered,
            CompletionLevel::PartiallyCovered,
            CompletionLevel::IntroductionOnly,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompletionLevel::FullyCovered => "Fully Covered",
            CompletionLevel::PartiallyCovered => "Partially Covered",
            CompletionLevel::IntroductionOnly => "Introduction Only",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|level| level.label() == label)
    }
}

/// A selectable (value, label) pair
pub type FormOption = (&'static str, &'static str);

/// Subjects offered by the subject selector
pub const SUBJECT_OPTIONS: &[FormOption] = &[
    ("CS301", "Data Structures & Algorithms"),
    ("CS302", "Database Management Systems"),
    ("CS303", "Operating Systems"),
    ("CS304", "Computer Networks"),
];

/// Units offered by the unit selector
pub const UNIT_OPTIONS: &[FormOption] = &[
    ("unit1", "Unit 1: Introduction"),
    ("unit2", "Unit 2: Linear Structures"),
    ("unit3", "Unit 3: Non-Linear Structures"),
    ("unit4", "Unit 4: Advanced Trees"),
];

/// Raw form state. Every field is free text as typed; only `subject` and
/// `topic` are checked, and only for presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureLogForm {
    pub subject: String,
    pub unit: String,
    pub topic: String,
    /// Minutes
    pub duration: String,
    pub students_present: String,
    pub room: String,
    pub notes: String,
    pub completion_level: String,
}

impl LectureLogForm {
    pub fn has_required_fields(&self) -> bool {
        !self.subject.is_empty() && !self.topic.is_empty()
    }

    /// The submit button is enabled iff this returns true
    pub fn can_submit(&self, in_progress: bool) -> bool {
        !in_progress && self.has_required_fields()
    }

    /// Complete a simulated submission: produce the notice and reset the form
    pub fn submit(&mut self) -> Notice {
        let notice = Notice::lecture_logged(&self.topic);
        tracing::info!(subject = %self.subject, topic = %self.topic, "Lecture logged");
        self.reset();
        notice
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A previously logged teaching session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureLog {
    pub id: u32,
    pub subject: String,
    pub topic: String,
    /// Minutes
    pub duration: u32,
    /// "YYYY-MM-DD HH:MM"
    pub timestamp: String,
    pub students_present: u32,
    pub completion_level: CompletionLevel,
}

/// Latest logged sessions shown next to the form
pub fn recent_logs() -> Vec<LectureLog> {
    vec![
        LectureLog {
            id: 1,
            subject: "CS301".to_string(),
            topic: "Binary Trees - Traversal Methods".to_string(),
            duration: 50,
            timestamp: "2024-06-10 10:00".to_string(),
            students_present: 42,
            completion_level: CompletionLevel::FullyCovered,
        },
        LectureLog {
            id: 2,
            subject: "CS302".to_string(),
            topic: "SQL Joins and Subqueries".to_string(),
            duration: 45,
            timestamp: "2024-06-10 11:00".to_string(),
            students_present: 38,
            completion_level: CompletionLevel::PartiallyCovered,
        },
        LectureLog {
            id: 3,
            subject: "CS303".to_string(),
            topic: "Process Scheduling Algorithms".to_string(),
            duration: 60,
            timestamp: "2024-06-09 14:00".to_string(),
            students_present: 45,
            completion_level: CompletionLevel::FullyCovered,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LectureLogForm {
        LectureLogForm {
            subject: "CS301".to_string(),
            topic: "Binary Tree Traversal Methods".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_submit_enabled_with_subject_and_topic() {
        let form = filled();
        assert!(form.can_submit(false));
    }

    #[test]
    fn test_clearing_required_field_disables_submit() {
        let mut form = filled();
        form.subject.clear();
        assert!(!form.can_submit(false));

        let mut form = filled();
        form.topic.clear();
        assert!(!form.can_submit(false));
    }

    #[test]
    fn test_optional_fields_do_not_matter() {
        let mut form = filled();
        form.duration = "not a number".to_string();
        assert!(form.can_submit(false));
    }

    #[test]
    fn test_in_progress_disables_submit() {
        assert!(!filled().can_submit(true));
    }

    #[test]
    fn test_submit_resets_form() {
        let mut form = filled();
        form.room = "Room 101".to_string();

        let notice = form.submit();
        assert_eq!(notice.title, "Lecture Logged Successfully!");
        assert_eq!(
            notice.description,
            "Binary Tree Traversal Methods has been recorded in under 30 seconds."
        );
        assert_eq!(form, LectureLogForm::default());
    }

    #[test]
    fn test_completion_level_labels() {
        for level in CompletionLevel::all() {
            assert_eq!(CompletionLevel::from_label(level.label()), Some(*level));
            let json = serde_json::to_string(level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.label()));
        }
        assert_eq!(CompletionLevel::from_label("Skipped"), None);
    }

    #[test]
    fn test_recent_logs() {
        let logs = recent_logs();
        assert_eq!(logs.len(), 3);
        assert_eq!(logs[1].completion_level, CompletionLevel::PartiallyCovered);
    }
}
