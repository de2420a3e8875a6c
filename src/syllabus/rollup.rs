//! Rollup aggregation
//!
//! Pure reductions over fixed collections, recomputed on every render.
//! Unit progress is a stored field; the subtopic-derived figure is exposed
//! alongside it so the two can be compared, never substituted.

use serde::Serialize;

use super::types::{Subject, Syllabus, Unit};

/// Round a non-negative mean to the nearest whole percent (half rounds up)
pub(crate) fn round_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Arithmetic mean of percentages, rounded. An empty input yields 0.
pub fn mean_percent(values: impl IntoIterator<Item = u8>) -> u8 {
    let (sum, count) = values
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), v| (sum + v as u64, count + 1));
    if count == 0 {
        return 0;
    }
    round_percent(sum as f64 / count as f64)
}

/// Overall progress: round(mean(unit.progress))
pub fn overall_progress(units: &[Unit]) -> u8 {
    mean_percent(units.iter().map(|u| u.progress))
}

/// Hours logged: sum(unit.actual_hours)
pub fn hours_logged(units: &[Unit]) -> u32 {
    units.iter().map(|u| u.actual_hours).sum()
}

/// Planned hours: sum(unit.estimated_hours)
pub fn hours_estimated(units: &[Unit]) -> u32 {
    units.iter().map(|u| u.estimated_hours).sum()
}

/// Average progress across the overview subjects
pub fn average_subject_progress(subjects: &[Subject]) -> u8 {
    mean_percent(subjects.iter().map(|s| s.progress))
}

impl Unit {
    pub fn completed_subtopics(&self) -> usize {
        self.subtopics
            .iter()
            .filter(|s| s.status.is_completed())
            .count()
    }

    pub fn lectures_logged(&self) -> u32 {
        self.subtopics.iter().map(|s| s.lecture_count).sum()
    }

    /// Share of completed subtopics as a rounded percentage.
    /// A unit without subtopics derives 0.
    pub fn derived_progress(&self) -> u8 {
        if self.subtopics.is_empty() {
            return 0;
        }
        round_percent(100.0 * self.completed_subtopics() as f64 / self.subtopics.len() as f64)
    }

    /// Derived minus stored progress; non-zero means the two disagree
    pub fn progress_drift(&self) -> i16 {
        self.derived_progress() as i16 - self.progress as i16
    }
}

/// Header figures of the syllabus mapping view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyllabusRollup {
    pub total_units: u32,
    pub overall_progress: u8,
    pub hours_logged: u32,
    pub hours_estimated: u32,
    pub lectures_logged: u32,
    pub completed_subtopics: usize,
    pub total_subtopics: usize,
}

impl Syllabus {
    pub fn overall_progress(&self) -> u8 {
        overall_progress(&self.units)
    }

    pub fn hours_logged(&self) -> u32 {
        hours_logged(&self.units)
    }

    pub fn rollup(&self) -> SyllabusRollup {
        let rollup = SyllabusRollup {
            total_units: self.total_units,
            overall_progress: self.overall_progress(),
            hours_logged: self.hours_logged(),
            hours_estimated: hours_estimated(&self.units),
            lectures_logged: self.units.iter().map(Unit::lectures_logged).sum(),
            completed_subtopics: self.units.iter().map(Unit::completed_subtopics).sum(),
            total_subtopics: self.subtopics().count(),
        };
        tracing::debug!(code = %self.code, ?rollup, "Computed syllabus rollup");
        rollup
    }

    /// Units whose stored progress disagrees with their subtopic states
    pub fn drifting_units(&self) -> Vec<(&Unit, i16)> {
        self.units
            .iter()
            .map(|unit| (unit, unit.progress_drift()))
            .filter(|(_, drift)| *drift != 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllabus::fixtures::{data_structures_syllabus, subjects};
    use crate::syllabus::types::{Subtopic, TopicStatus, UnitStatus};

    fn unit(progress: u8, actual: u32) -> Unit {
        Unit::new(1, "u").progress(progress, UnitStatus::InProgress).hours(0, actual)
    }

    #[test]
    fn test_overall_progress_rounds_mean() {
        let units: Vec<_> = [100, 85, 45, 0].iter().map(|p| unit(*p, 0)).collect();
        // 230 / 4 = 57.5 rounds up
        assert_eq!(overall_progress(&units), 58);
    }

    #[test]
    fn test_overall_progress_empty_is_zero() {
        assert_eq!(overall_progress(&[]), 0);
    }

    #[test]
    fn test_hours_logged_sums() {
        let units: Vec<_> = [14, 16, 8, 0].iter().map(|h| unit(0, *h)).collect();
        assert_eq!(hours_logged(&units), 38);
    }

    #[test]
    fn test_sample_rollup() {
        let rollup = data_structures_syllabus().rollup();
        assert_eq!(rollup.total_units, 6);
        assert_eq!(rollup.overall_progress, 58);
        assert_eq!(rollup.hours_logged, 38);
        assert_eq!(rollup.hours_estimated, 66);
        assert_eq!(rollup.lectures_logged, 26);
        assert_eq!(rollup.completed_subtopics, 6);
        assert_eq!(rollup.total_subtopics, 14);
    }

    #[test]
    fn test_average_subject_progress() {
        // (78 + 45 + 85) / 3 = 69.33
        assert_eq!(average_subject_progress(&subjects()), 69);
    }

    #[test]
    fn test_derived_progress_and_drift() {
        let syllabus = data_structures_syllabus();
        let non_linear = &syllabus.units[2];
        assert_eq!(non_linear.progress, 45);
        // 1 of 4 completed
        assert_eq!(non_linear.derived_progress(), 25);
        assert_eq!(non_linear.progress_drift(), -20);

        let intro = &syllabus.units[0];
        assert_eq!(intro.progress_drift(), 0);
    }

    #[test]
    fn test_drifting_units_reported() {
        let syllabus = data_structures_syllabus();
        let drifting: Vec<_> = syllabus.drifting_units().iter().map(|(u, _)| u.id).collect();
        // unit 2: stored 85 vs 2/4 = 50, unit 3: stored 45 vs 25
        assert_eq!(drifting, vec![2, 3]);
    }

    #[test]
    fn test_empty_unit_derives_zero() {
        let empty = Unit::new(9, "empty");
        assert_eq!(empty.derived_progress(), 0);

        let all_done = Unit::new(9, "done")
            .subtopic(Subtopic::new(1, "a", TopicStatus::Completed))
            .subtopic(Subtopic::new(2, "b", TopicStatus::Completed));
        assert_eq!(all_done.derived_progress(), 100);
    }
}
