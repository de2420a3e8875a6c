//! Syllabus Model
//!
//! Subjects, units and subtopics plus the two pieces of derived state the
//! dashboard shows:
//!
//! - **types**: Core data structures (Subject, Syllabus, Unit, Subtopic)
//! - **fixtures**: The hardcoded sample data every view renders
//! - **prerequisites**: Id index and the one-hop prerequisite alert rule
//! - **rollup**: Mean/sum aggregates for the syllabus header
//!
//! # Example
//!
//! ```rust
//! use syllabus_sync::syllabus::fixtures::data_structures_syllabus;
//!
//! let syllabus = data_structures_syllabus();
//! assert_eq!(syllabus.overall_progress(), 58);
//! assert_eq!(syllabus.hours_logged(), 38);
//!
//! for alert in syllabus.prerequisite_alerts() {
//!     println!("topic {}: {}", alert.subtopic, alert.message());
//! }
//! ```

pub mod fixtures;
pub mod prerequisites;
pub mod rollup;
pub mod types;

pub use fixtures::{data_structures_syllabus, department_summary, subjects, DepartmentSummary};
pub use prerequisites::{prerequisite_alert, PrerequisiteAlert, TopicIndex};
pub use rollup::{
    average_subject_progress, hours_estimated, hours_logged, mean_percent, overall_progress,
    SyllabusRollup,
};
pub use types::{PaceStatus, Subject, Subtopic, SubtopicId, Syllabus, TopicStatus, Unit, UnitStatus};
