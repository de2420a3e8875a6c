//! Core data types for syllabus coverage tracking
//!
//! This module defines the fundamental types used throughout the crate:
//! - `Subject`: A course with its overall pace and next deadline
//! - `Syllabus`: The unit/subtopic breakdown of one subject
//! - `Unit` and `Subtopic`: The trackable pieces of syllabus content
//! - `PaceStatus`, `UnitStatus` and `TopicStatus`: Classification enums
//!
//! All of these are immutable fixtures; nothing here mutates after construction
//! except through the builder methods.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a subtopic, unique within one syllabus
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct SubtopicId(pub u32);

impl fmt::Display for SubtopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SubtopicId {
    fn from(id: u32) -> Self {
        SubtopicId(id)
    }
}

/// How a subject is tracking against its teaching plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PaceStatus {
    Ahead,
    OnTrack,
    /// Behind schedule. Analytics data calls the same state "at-risk".
    #[serde(alias = "at-risk")]
    Behind,
}

impl PaceStatus {
    /// Get all statuses for iteration
    pub fn all() -> &'static [PaceStatus] {
        &[PaceStatus::Ahead, PaceStatus::OnTrack, PaceStatus::Behind]
    }

    /// Human readable badge label
    pub fn label(&self) -> &'static str {
        match self {
            PaceStatus::Ahead => "Ahead",
            PaceStatus::OnTrack => "On Track",
            PaceStatus::Behind => "Behind",
        }
    }

    /// Badge label used by the exam readiness tracker
    pub fn risk_label(&self) -> &'static str {
        match self {
            PaceStatus::Behind => "At Risk",
            other => other.label(),
        }
    }
}

impl fmt::Display for PaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaceStatus::Ahead => write!(f, "ahead"),
            PaceStatus::OnTrack => write!(f, "on-track"),
            PaceStatus::Behind => write!(f, "behind"),
        }
    }
}

/// Coverage state of a whole unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum UnitStatus {
    Completed,
    InProgress,
    Pending,
}

impl UnitStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UnitStatus::Completed => "Completed",
            UnitStatus::InProgress => "In Progress",
            UnitStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitStatus::Completed => write!(f, "completed"),
            UnitStatus::InProgress => write!(f, "in-progress"),
            UnitStatus::Pending => write!(f, "pending"),
        }
    }
}

/// Coverage state of a single subtopic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TopicStatus {
    Completed,
    InProgress,
    Pending,
    /// Explicitly parked until its dependencies are taught
    Blocked,
}

impl TopicStatus {
    /// Get all statuses for iteration
    pub fn all() -> &'static [TopicStatus] {
        &[
            TopicStatus::Completed,
            TopicStatus::InProgress,
            TopicStatus::Pending,
            TopicStatus::Blocked,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TopicStatus::Completed => "Completed",
            TopicStatus::InProgress => "In Progress",
            TopicStatus::Pending => "Pending",
            TopicStatus::Blocked => "Blocked",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TopicStatus::Completed)
    }
}

impl fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopicStatus::Completed => write!(f, "completed"),
            TopicStatus::InProgress => write!(f, "in-progress"),
            TopicStatus::Pending => write!(f, "pending"),
            TopicStatus::Blocked => write!(f, "blocked"),
        }
    }
}

/// A subject shown on the overview dashboard
///
/// `status` is a stored field, never derived from `progress`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subject {
    pub id: u32,
    /// Course code, e.g. "CS301"
    pub code: String,
    pub name: String,
    /// Completion percentage (0-100)
    pub progress: u8,
    pub status: PaceStatus,
    pub total_units: u32,
    /// Units covered so far; fractional when a unit is partly taught
    pub completed_units: f64,
    pub next_deadline: NaiveDate,
}

impl Subject {
    /// "Units: 4.5/6" style summary
    pub fn units_summary(&self) -> String {
        format!("Units: {}/{}", self.completed_units, self.total_units)
    }
}

/// Smallest trackable unit of syllabus content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subtopic {
    pub id: SubtopicId,
    pub title: String,
    pub status: TopicStatus,
    /// Id of another subtopic in the same syllabus that should be taught first
    #[serde(default)]
    pub prerequisite: Option<SubtopicId>,
    #[serde(default)]
    pub lecture_count: u32,
}

impl Subtopic {
    /// Create a subtopic with no prerequisite and no lectures logged
    pub fn new(id: u32, title: impl Into<String>, status: TopicStatus) -> Self {
        Self {
            id: SubtopicId(id),
            title: title.into(),
            status,
            prerequisite: None,
            lecture_count: 0,
        }
    }

    /// Builder method: declare a prerequisite
    pub fn requires(mut self, prerequisite: u32) -> Self {
        self.prerequisite = Some(SubtopicId(prerequisite));
        self
    }

    /// Builder method: set the lecture count
    pub fn lectures(mut self, count: u32) -> Self {
        self.lecture_count = count;
        self
    }
}

/// A named grouping of subtopics with its own progress and hour budget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Unit {
    pub id: u32,
    pub title: String,
    /// Stored completion percentage (0-100), independent of subtopic states
    pub progress: u8,
    pub status: UnitStatus,
    pub estimated_hours: u32,
    pub actual_hours: u32,
    pub subtopics: Vec<Subtopic>,
}

impl Unit {
    /// Create an empty pending unit
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            progress: 0,
            status: UnitStatus::Pending,
            estimated_hours: 0,
            actual_hours: 0,
            subtopics: Vec::new(),
        }
    }

    /// Builder method: set stored progress and status
    pub fn progress(mut self, progress: u8, status: UnitStatus) -> Self {
        self.progress = progress.min(100);
        self.status = status;
        self
    }

    /// Builder method: set estimated and actual hours
    pub fn hours(mut self, estimated: u32, actual: u32) -> Self {
        self.estimated_hours = estimated;
        self.actual_hours = actual;
        self
    }

    /// Builder method: append a subtopic
    pub fn subtopic(mut self, subtopic: Subtopic) -> Self {
        self.subtopics.push(subtopic);
        self
    }

    /// "14h / 12h • 3 topics" header line
    pub fn hours_summary(&self) -> String {
        format!(
            "{}h / {}h • {} topics",
            self.actual_hours,
            self.estimated_hours,
            self.subtopics.len()
        )
    }
}

/// Unit/subtopic breakdown of a single subject
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Syllabus {
    pub subject: String,
    pub code: String,
    /// Declared number of units in the curriculum (may exceed `units.len()`)
    pub total_units: u32,
    pub units: Vec<Unit>,
}

impl Syllabus {
    /// All subtopics across all units, in unit order
    pub fn subtopics(&self) -> impl Iterator<Item = &Subtopic> {
        self.units.iter().flat_map(|unit| unit.subtopics.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_names() {
        assert_eq!(serde_json::to_string(&PaceStatus::OnTrack).unwrap(), "\"on-track\"");
        assert_eq!(serde_json::to_string(&TopicStatus::InProgress).unwrap(), "\"in-progress\"");

        let at_risk: PaceStatus = serde_json::from_str("\"at-risk\"").unwrap();
        assert_eq!(at_risk, PaceStatus::Behind);
        assert_eq!(at_risk.risk_label(), "At Risk");
    }

    #[test]
    fn test_display_matches_serde() {
        for status in TopicStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
        for status in PaceStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }

    #[test]
    fn test_subtopic_builder() {
        let topic = Subtopic::new(2, "Abstract Data Types", TopicStatus::Completed)
            .requires(1)
            .lectures(3);
        assert_eq!(topic.prerequisite, Some(SubtopicId(1)));
        assert_eq!(topic.lecture_count, 3);
    }

    #[test]
    fn test_missing_prerequisite_deserializes_as_none() {
        let json = r#"{"id": 1, "title": "Basic Concepts", "status": "completed"}"#;
        let topic: Subtopic = serde_json::from_str(json).unwrap();
        assert_eq!(topic.prerequisite, None);
        assert_eq!(topic.lecture_count, 0);
    }

    #[test]
    fn test_unit_summary() {
        let unit = Unit::new(1, "Intro")
            .hours(12, 14)
            .subtopic(Subtopic::new(1, "a", TopicStatus::Completed))
            .subtopic(Subtopic::new(2, "b", TopicStatus::Pending));
        assert_eq!(unit.hours_summary(), "14h / 12h • 2 topics");
    }
}
