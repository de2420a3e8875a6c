//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod analytics;
pub mod chart;
pub mod heatmap;
pub mod loading;
pub mod quick_logger;
pub mod stat_card;
pub mod subject_progress;
pub mod syllabus_mapping;
pub mod toast;

pub use analytics::AnalyticsDashboard;
pub use heatmap::ProgressHeatmap;
pub use loading::InlineLoading;
pub use quick_logger::QuickLogger;
pub use stat_card::StatCard;
pub use subject_progress::SubjectProgress;
pub use syllabus_mapping::SyllabusMapping;
pub use toast::Toast;
