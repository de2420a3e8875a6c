//! # SyllabusSync
//!
//! Academic syllabus coverage tracking for faculty and heads of department.
//! The library holds the domain model and every computation the dashboard
//! shows; the `syllabus-ui` crate renders it in the browser and the
//! `syllabus-sync` binary renders it in a terminal.
//!
//! ## Modules
//!
//! - [`syllabus`]: Units, subtopics, prerequisite alerts and progress rollups
//! - [`session`]: Simulated login, session persistence and route guarding
//! - [`logger`]: Quick lecture logging form
//! - [`heatmap`]: Mock teaching-activity heatmap
//! - [`analytics`]: Coverage analytics series and key metrics
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use syllabus_sync::syllabus::data_structures_syllabus;
//!
//! let syllabus = data_structures_syllabus();
//! for alert in syllabus.prerequisite_alerts() {
//!     println!("{}: {}", alert.subtopic, alert.message());
//! }
//!
//! let rollup = syllabus.rollup();
//! assert_eq!(rollup.overall_progress, 58);
//! ```

pub mod analytics;
pub mod config;
#[cfg(feature = "cli")]
pub mod export;
pub mod heatmap;
pub mod logger;
pub mod notice;
pub mod session;
pub mod syllabus;

// Re-export top-level types for convenience
pub use syllabus::{
    PaceStatus, PrerequisiteAlert, Subject, Subtopic, SubtopicId, Syllabus, SyllabusRollup,
    TopicIndex, TopicStatus, Unit, UnitStatus,
};

pub use session::{
    FileStore, MemoryStore, Role, Route, SessionError, SessionGate, SessionRecord,
    SessionResult, SessionState, SessionStore,
};

pub use analytics::{Analytics, KeyMetrics, Period, SubjectFilter};
pub use heatmap::{Heatmap, Intensity};
pub use logger::{CompletionLevel, LectureLogForm};
pub use notice::{Notice, NoticeKind};

pub use config::{Config, ConfigError, LoggingConfig};
