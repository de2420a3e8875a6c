//! Sample data shown by the dashboard
//!
//! There is no backend; every view renders these fixtures.

use chrono::NaiveDate;

use super::types::{PaceStatus, Subject, Subtopic, Syllabus, TopicStatus, Unit, UnitStatus};

/// Department-wide headline figures on the overview tab
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DepartmentSummary {
    pub total_subjects: u32,
    pub semesters: u32,
    pub behind_schedule: u32,
    /// Exam readiness percentage
    pub exam_readiness: u8,
}

pub fn department_summary() -> DepartmentSummary {
    DepartmentSummary {
        total_subjects: 12,
        semesters: 4,
        behind_schedule: 3,
        exam_readiness: 87,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Subjects listed in the progress overview
pub fn subjects() -> Vec<Subject> {
    vec![
        Subject {
            id: 1,
            code: "CS301".to_string(),
            name: "Data Structures & Algorithms".to_string(),
            progress: 78,
            status: PaceStatus::OnTrack,
            total_units: 6,
            completed_units: 4.5,
            next_deadline: date(2024, 6, 15),
        },
        Subject {
            id: 2,
            code: "CS302".to_string(),
            name: "Database Management Systems".to_string(),
            progress: 45,
            status: PaceStatus::Behind,
            total_units: 5,
            completed_units: 2.2,
            next_deadline: date(2024, 6, 12),
        },
        Subject {
            id: 3,
            code: "CS303".to_string(),
            name: "Operating Systems".to_string(),
            progress: 85,
            status: PaceStatus::Ahead,
            total_units: 7,
            completed_units: 6.0,
            next_deadline: date(2024, 6, 18),
        },
    ]
}

/// CS301 unit/topic breakdown used by the syllabus mapping view
pub fn data_structures_syllabus() -> Syllabus {
    use TopicStatus::*;

    Syllabus {
        subject: "Data Structures & Algorithms".to_string(),
        code: "CS301".to_string(),
        total_units: 6,
        units: vec![
            Unit::new(1, "Introduction to Data Structures")
                .progress(100, UnitStatus::Completed)
                .hours(12, 14)
                .subtopic(Subtopic::new(1, "Basic Concepts", Completed).lectures(2))
                .subtopic(Subtopic::new(2, "Abstract Data Types", Completed).requires(1).lectures(3))
                .subtopic(Subtopic::new(3, "Algorithm Analysis", Completed).requires(2).lectures(4)),
            Unit::new(2, "Linear Data Structures")
                .progress(85, UnitStatus::InProgress)
                .hours(18, 16)
                .subtopic(Subtopic::new(4, "Arrays and Strings", Completed).requires(3).lectures(4))
                .subtopic(Subtopic::new(5, "Linked Lists", Completed).requires(4).lectures(5))
                .subtopic(Subtopic::new(6, "Stacks and Queues", InProgress).requires(5).lectures(3))
                .subtopic(Subtopic::new(7, "Applications", Pending).requires(6)),
            Unit::new(3, "Non-Linear Data Structures")
                .progress(45, UnitStatus::InProgress)
                .hours(20, 8)
                .subtopic(Subtopic::new(8, "Trees - Introduction", Completed).requires(6).lectures(3))
                .subtopic(Subtopic::new(9, "Binary Trees", InProgress).requires(8).lectures(2))
                .subtopic(Subtopic::new(10, "Tree Traversals", Pending).requires(9))
                .subtopic(Subtopic::new(11, "Binary Search Trees", Pending).requires(10)),
            Unit::new(4, "Advanced Trees")
                .progress(0, UnitStatus::Pending)
                .hours(16, 0)
                .subtopic(Subtopic::new(12, "AVL Trees", Blocked).requires(11))
                .subtopic(Subtopic::new(13, "B-Trees", Blocked).requires(12))
                .subtopic(Subtopic::new(14, "Red-Black Trees", Blocked).requires(13)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllabus_shape() {
        let syllabus = data_structures_syllabus();
        assert_eq!(syllabus.units.len(), 4);
        assert_eq!(syllabus.total_units, 6);
        assert_eq!(syllabus.subtopics().count(), 14);
    }

    #[test]
    fn test_subtopic_ids_are_unique() {
        let syllabus = data_structures_syllabus();
        let mut ids: Vec<_> = syllabus.subtopics().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 14);
    }

    #[test]
    fn test_fixture_roundtrips_through_json() {
        let syllabus = data_structures_syllabus();
        let json = serde_json::to_string(&syllabus).unwrap();
        let back: Syllabus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, syllabus);
    }

    #[test]
    fn test_subject_units_summary() {
        let subjects = subjects();
        assert_eq!(subjects[0].units_summary(), "Units: 4.5/6");
        assert_eq!(subjects[2].units_summary(), "Units: 6/7");
    }
}
