//! Prerequisite alerts
//!
//! A subtopic may name another subtopic of the same syllabus as its
//! prerequisite. The dependency is checked exactly one hop deep: there is no
//! transitive closure and no cycle detection.
//!
//! An alert fires for subtopic `S` with prerequisite `P` iff
//! - `P` exists in the syllabus,
//! - `P` is not completed, and
//! - `S` is not blocked.
//!
//! A prerequisite id that does not resolve is a silent miss.

use std::collections::HashMap;

use serde::Serialize;

use super::types::{Subtopic, SubtopicId, Syllabus, TopicStatus};

/// Lookup of subtopics by id across every unit of a syllabus
#[derive(Debug, Default)]
pub struct TopicIndex<'a> {
    by_id: HashMap<SubtopicId, &'a Subtopic>,
}

impl<'a> TopicIndex<'a> {
    /// Index every subtopic of the syllabus. The first occurrence of a
    /// duplicated id wins.
    pub fn build(syllabus: &'a Syllabus) -> Self {
        Self::from_subtopics(syllabus.subtopics())
    }

    /// Index an arbitrary flattened collection of subtopics
    pub fn from_subtopics(subtopics: impl IntoIterator<Item = &'a Subtopic>) -> Self {
        let mut by_id = HashMap::new();
        for subtopic in subtopics {
            by_id.entry(subtopic.id).or_insert(subtopic);
        }
        Self { by_id }
    }

    pub fn get(&self, id: SubtopicId) -> Option<&'a Subtopic> {
        self.by_id.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Display-only warning that a subtopic's prerequisite has not been covered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrerequisiteAlert {
    /// The subtopic carrying the warning
    pub subtopic: SubtopicId,
    pub prerequisite: SubtopicId,
    pub prerequisite_title: String,
    pub prerequisite_status: TopicStatus,
}

impl PrerequisiteAlert {
    pub fn message(&self) -> String {
        format!("Prerequisite \"{}\" not completed", self.prerequisite_title)
    }
}

/// Check a single subtopic against its direct prerequisite
pub fn prerequisite_alert(subtopic: &Subtopic, index: &TopicIndex<'_>) -> Option<PrerequisiteAlert> {
    let prerequisite_id = subtopic.prerequisite?;
    let prerequisite = index.get(prerequisite_id)?;

    if prerequisite.status.is_completed() || subtopic.status == TopicStatus::Blocked {
        return None;
    }

    Some(PrerequisiteAlert {
        subtopic: subtopic.id,
        prerequisite: prerequisite_id,
        prerequisite_title: prerequisite.title.clone(),
        prerequisite_status: prerequisite.status,
    })
}

impl Syllabus {
    /// Build the id index for this syllabus
    pub fn index(&self) -> TopicIndex<'_> {
        TopicIndex::build(self)
    }

    /// Every prerequisite alert in unit/subtopic order
    pub fn prerequisite_alerts(&self) -> Vec<PrerequisiteAlert> {
        let index = self.index();
        let alerts: Vec<_> = self
            .subtopics()
            .filter_map(|subtopic| prerequisite_alert(subtopic, &index))
            .collect();

        tracing::debug!(
            code = %self.code,
            alerts = alerts.len(),
            "Computed prerequisite alerts"
        );

        alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllabus::fixtures::data_structures_syllabus;
    use crate::syllabus::types::Unit;

    fn syllabus_of(subtopics: Vec<Subtopic>) -> Syllabus {
        let unit = subtopics
            .into_iter()
            .fold(Unit::new(1, "Unit"), |unit, s| unit.subtopic(s));
        Syllabus {
            subject: "Test".to_string(),
            code: "T100".to_string(),
            total_units: 1,
            units: vec![unit],
        }
    }

    #[test]
    fn test_no_prerequisite_no_alert() {
        let syllabus = syllabus_of(vec![Subtopic::new(1, "a", TopicStatus::Pending)]);
        assert!(syllabus.prerequisite_alerts().is_empty());
    }

    #[test]
    fn test_incomplete_prerequisite_alerts() {
        let syllabus = syllabus_of(vec![
            Subtopic::new(1, "Basics", TopicStatus::InProgress),
            Subtopic::new(2, "Next", TopicStatus::Pending).requires(1),
        ]);
        let alerts = syllabus.prerequisite_alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].subtopic, SubtopicId(2));
        assert_eq!(alerts[0].message(), "Prerequisite \"Basics\" not completed");
    }

    #[test]
    fn test_blocked_subtopic_never_alerts() {
        let syllabus = syllabus_of(vec![
            Subtopic::new(1, "Basics", TopicStatus::Pending),
            Subtopic::new(2, "Next", TopicStatus::Blocked).requires(1),
        ]);
        assert!(syllabus.prerequisite_alerts().is_empty());
    }

    #[test]
    fn test_completed_subtopic_still_alerts_on_incomplete_prerequisite() {
        let syllabus = syllabus_of(vec![
            Subtopic::new(1, "Basics", TopicStatus::Pending),
            Subtopic::new(2, "Next", TopicStatus::Completed).requires(1),
        ]);
        assert_eq!(syllabus.prerequisite_alerts().len(), 1);
    }

    #[test]
    fn test_missing_prerequisite_is_silent() {
        let syllabus = syllabus_of(vec![Subtopic::new(2, "Next", TopicStatus::Pending).requires(99)]);
        assert!(syllabus.prerequisite_alerts().is_empty());
    }

    #[test]
    fn test_shared_prerequisite_checked_independently() {
        let syllabus = syllabus_of(vec![
            Subtopic::new(1, "Basics", TopicStatus::Pending),
            Subtopic::new(2, "Left", TopicStatus::Pending).requires(1),
            Subtopic::new(3, "Right", TopicStatus::Blocked).requires(1),
            Subtopic::new(4, "Middle", TopicStatus::InProgress).requires(1),
        ]);
        let alerted: Vec<_> = syllabus
            .prerequisite_alerts()
            .into_iter()
            .map(|a| a.subtopic)
            .collect();
        assert_eq!(alerted, vec![SubtopicId(2), SubtopicId(4)]);
    }

    #[test]
    fn test_one_hop_only() {
        // 3 -> 2 -> 1 where only 1 is incomplete: 3 must not alert
        let syllabus = syllabus_of(vec![
            Subtopic::new(1, "Root", TopicStatus::Pending),
            Subtopic::new(2, "Mid", TopicStatus::Completed).requires(1),
            Subtopic::new(3, "Leaf", TopicStatus::Pending).requires(2),
        ]);
        let alerted: Vec<_> = syllabus
            .prerequisite_alerts()
            .into_iter()
            .map(|a| a.subtopic)
            .collect();
        assert_eq!(alerted, vec![SubtopicId(2)]);
    }

    #[test]
    fn test_self_cycle_does_not_loop() {
        let syllabus = syllabus_of(vec![Subtopic::new(1, "Loop", TopicStatus::Pending).requires(1)]);
        assert_eq!(syllabus.prerequisite_alerts().len(), 1);
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let first = Subtopic::new(1, "First", TopicStatus::Completed);
        let second = Subtopic::new(1, "Second", TopicStatus::Pending);
        let index = TopicIndex::from_subtopics([&first, &second]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(SubtopicId(1)).map(|s| s.title.as_str()), Some("First"));
    }

    #[test]
    fn test_sample_syllabus_alerts() {
        let syllabus = data_structures_syllabus();
        let alerts = syllabus.prerequisite_alerts();
        let pairs: Vec<_> = alerts
            .iter()
            .map(|a| (a.subtopic.0, a.prerequisite_title.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (7, "Stacks and Queues"),
                (8, "Stacks and Queues"),
                (10, "Binary Trees"),
                (11, "Tree Traversals"),
            ]
        );
    }

    #[test]
    fn test_index_spans_units() {
        let syllabus = data_structures_syllabus();
        let index = syllabus.index();
        assert_eq!(index.len(), 14);
        // Subtopic 8 lives in unit 3 but depends on 6 from unit 2
        assert_eq!(index.get(SubtopicId(6)).map(|s| s.title.as_str()), Some("Stacks and Queues"));
    }
}
