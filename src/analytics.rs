//! Coverage Analytics
//!
//! Static chart series for the analytics tab and the few aggregates derived
//! from them (key metric cards).

use chrono::NaiveDate;
use serde::Serialize;

use crate::syllabus::rollup::mean_percent;
use crate::syllabus::types::PaceStatus;

/// Subject codes charted by the analytics tab, in series order
pub const SUBJECT_CODES: [&str; 4] = ["CS301", "CS302", "CS303", "CS304"];

/// Series colors matching `SUBJECT_CODES`
pub const SERIES_COLORS: [&str; 4] = ["#3B82F6", "#10B981", "#8B5CF6", "#F59E0B"];

/// Reporting period selector. Display-only: the sample series do not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    Month,
    Semester,
    Year,
}

impl Period {
    pub fn all() -> &'static [Period] {
        &[Period::Week, Period::Month, Period::Semester, Period::Year]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Week => "This Week",
            Period::Month => "This Month",
            Period::Semester => "Semester",
            Period::Year => "Academic Year",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Semester => "semester",
            Period::Year => "year",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.key() == key)
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::Semester
    }
}

/// Subject selector: all subjects or a single code
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum SubjectFilter {
    #[default]
    All,
    Code(String),
}

impl SubjectFilter {
    /// Parse a selector value; "all" or an empty string select everything
    pub fn from_key(key: &str) -> Self {
        match key {
            "" | "all" => SubjectFilter::All,
            code => SubjectFilter::Code(code.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            SubjectFilter::All => "all",
            SubjectFilter::Code(code) => code,
        }
    }

    pub fn includes(&self, code: &str) -> bool {
        match self {
            SubjectFilter::All => true,
            SubjectFilter::Code(selected) => selected == code,
        }
    }
}

/// Cumulative completion of each subject at the end of one week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyProgress {
    pub week: String,
    /// Percentages in `SUBJECT_CODES` order
    pub values: [u8; 4],
}

/// One line of the weekly progress chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub points: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectCompletion {
    pub name: &'static str,
    pub value: u8,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeachingVelocity {
    pub month: &'static str,
    /// Topics planned
    pub planned: u32,
    /// Topics actually covered
    pub actual: u32,
    /// Percent of plan achieved
    pub efficiency: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExamReadiness {
    pub subject: &'static str,
    pub current: u8,
    pub projected: u8,
    pub exam_date: NaiveDate,
    pub status: PaceStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplianceLevel {
    Compliant,
    OnTrack,
    NeedsReview,
}

impl ComplianceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceLevel::Compliant => "Compliant",
            ComplianceLevel::OnTrack => "On Track",
            ComplianceLevel::NeedsReview => "Needs Review",
        }
    }
}

/// One accreditation readiness figure (NAAC/NBA)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceItem {
    pub name: &'static str,
    pub value: u8,
    pub level: ComplianceLevel,
}

/// Figures on the four key metric cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyMetrics {
    /// Mean of subject completion, unrounded (73.75 for the sample)
    pub average_progress: f64,
    /// Topics per week
    pub teaching_velocity: f64,
    /// round(mean(projected readiness))
    pub exam_readiness: u8,
    pub risk_subjects: usize,
    /// Codes of the at-risk subjects
    pub at_risk: Vec<&'static str>,
}

/// All analytics data behind the tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    pub weekly_progress: Vec<WeeklyProgress>,
    pub subject_completion: Vec<SubjectCompletion>,
    pub teaching_velocity: Vec<TeachingVelocity>,
    pub exam_readiness: Vec<ExamReadiness>,
    pub compliance: Vec<ComplianceItem>,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl Analytics {
    /// The sample data set
    pub fn sample() -> Self {
        let weekly = [
            [15, 10, 20, 12],
            [28, 22, 35, 25],
            [42, 35, 48, 38],
            [58, 45, 62, 52],
            [72, 58, 75, 65],
            [78, 65, 82, 70],
        ];

        Self {
            weekly_progress: weekly
                .iter()
                .enumerate()
                .map(|(i, values)| WeeklyProgress {
                    week: format!("Week {}", i + 1),
                    values: *values,
                })
                .collect(),
            subject_completion: vec![
                SubjectCompletion { name: "CS301 - DSA", value: 78, color: SERIES_COLORS[0] },
                SubjectCompletion { name: "CS302 - DBMS", value: 65, color: SERIES_COLORS[1] },
                SubjectCompletion { name: "CS303 - OS", value: 82, color: SERIES_COLORS[2] },
                SubjectCompletion { name: "CS304 - Networks", value: 70, color: SERIES_COLORS[3] },
            ],
            teaching_velocity: vec![
                TeachingVelocity { month: "Jan", planned: 25, actual: 28, efficiency: 112 },
                TeachingVelocity { month: "Feb", planned: 30, actual: 27, efficiency: 90 },
                TeachingVelocity { month: "Mar", planned: 28, actual: 32, efficiency: 114 },
                TeachingVelocity { month: "Apr", planned: 35, actual: 33, efficiency: 94 },
                TeachingVelocity { month: "May", planned: 32, actual: 35, efficiency: 109 },
                TeachingVelocity { month: "Jun", planned: 25, actual: 22, efficiency: 88 },
            ],
            exam_readiness: vec![
                ExamReadiness {
                    subject: "CS301",
                    current: 78,
                    projected: 95,
                    exam_date: date(2024, 7, 15),
                    status: PaceStatus::OnTrack,
                },
                ExamReadiness {
                    subject: "CS302",
                    current: 65,
                    projected: 88,
                    exam_date: date(2024, 7, 17),
                    status: PaceStatus::Behind,
                },
                ExamReadiness {
                    subject: "CS303",
                    current: 82,
                    projected: 98,
                    exam_date: date(2024, 7, 19),
                    status: PaceStatus::Ahead,
                },
                ExamReadiness {
                    subject: "CS304",
                    current: 70,
                    projected: 92,
                    exam_date: date(2024, 7, 21),
                    status: PaceStatus::OnTrack,
                },
            ],
            compliance: vec![
                ComplianceItem { name: "Syllabus Coverage", value: 92, level: ComplianceLevel::Compliant },
                ComplianceItem { name: "Learning Outcomes", value: 89, level: ComplianceLevel::OnTrack },
                ComplianceItem { name: "Assessment Coverage", value: 76, level: ComplianceLevel::NeedsReview },
            ],
        }
    }

    /// Weekly progress lines for the selected subjects
    pub fn series(&self, filter: &SubjectFilter) -> Vec<Series> {
        SUBJECT_CODES
            .iter()
            .enumerate()
            .filter(|(_, code)| filter.includes(code))
            .map(|(i, code)| Series {
                name: code,
                color: SERIES_COLORS[i],
                points: self.weekly_progress.iter().map(|w| w.values[i]).collect(),
            })
            .collect()
    }

    pub fn week_labels(&self) -> Vec<&str> {
        self.weekly_progress.iter().map(|w| w.week.as_str()).collect()
    }

    pub fn key_metrics(&self) -> KeyMetrics {
        let completion = &self.subject_completion;
        let average_progress = if completion.is_empty() {
            0.0
        } else {
            completion.iter().map(|c| c.value as f64).sum::<f64>() / completion.len() as f64
        };

        let at_risk: Vec<_> = self
            .exam_readiness
            .iter()
            .filter(|r| r.status == PaceStatus::Behind)
            .map(|r| r.subject)
            .collect();

        KeyMetrics {
            average_progress,
            teaching_velocity: 2.8,
            exam_readiness: mean_percent(self.exam_readiness.iter().map(|r| r.projected)),
            risk_subjects: at_risk.len(),
            at_risk,
        }
    }

    /// Largest planned/actual value, for chart scaling
    pub fn velocity_max(&self) -> u32 {
        self.teaching_velocity
            .iter()
            .map(|v| v.planned.max(v.actual))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_metrics() {
        let metrics = Analytics::sample().key_metrics();
        assert!((metrics.average_progress - 73.75).abs() < f64::EPSILON);
        assert_eq!(metrics.exam_readiness, 93);
        assert_eq!(metrics.risk_subjects, 1);
        assert_eq!(metrics.at_risk, vec!["CS302"]);
    }

    #[test]
    fn test_series_filter() {
        let analytics = Analytics::sample();
        assert_eq!(analytics.series(&SubjectFilter::All).len(), 4);

        let only = analytics.series(&SubjectFilter::from_key("CS303"));
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].name, "CS303");
        assert_eq!(only[0].points, vec![20, 35, 48, 62, 75, 82]);
        assert_eq!(only[0].color, "#8B5CF6");
    }

    #[test]
    fn test_unknown_subject_filter_is_empty() {
        let analytics = Analytics::sample();
        assert!(analytics.series(&SubjectFilter::from_key("CS999")).is_empty());
    }

    #[test]
    fn test_period_keys() {
        assert_eq!(Period::default(), Period::Semester);
        for period in Period::all() {
            assert_eq!(Period::from_key(period.key()), Some(*period));
        }
        assert_eq!(Period::Year.label(), "Academic Year");
    }

    #[test]
    fn test_velocity_max() {
        assert_eq!(Analytics::sample().velocity_max(), 35);
    }

    #[test]
    fn test_week_labels() {
        let analytics = Analytics::sample();
        assert_eq!(analytics.week_labels().first(), Some(&"Week 1"));
        assert_eq!(analytics.week_labels().len(), 6);
    }
}
