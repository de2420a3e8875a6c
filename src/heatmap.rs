//! Progress Heatmap
//!
//! Mock teaching activity for the last N weeks (12 by default). Values are
//! drawn from the caller's random source at render time, so two renders
//! never agree unless the caller seeds the generator.

use chrono::{Days, Duration, NaiveDate};
use rand::Rng;
use serde::Serialize;

use crate::syllabus::rollup::round_percent;

/// Column headers of the grid
pub const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Number of trailing weeks in the weekly summary
pub const SUMMARY_WEEKS: usize = 4;

/// Longest grid `Heatmap::generate` will build (ten years)
pub const MAX_WEEKS: usize = 520;

/// Activity bucket of a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    None,
    Low,
    Medium,
    High,
}

impl Intensity {
    /// Bucket an unrounded progress value
    pub fn classify(progress: f64) -> Self {
        if progress > 80.0 {
            Intensity::High
        } else if progress > 50.0 {
            Intensity::Medium
        } else if progress > 20.0 {
            Intensity::Low
        } else {
            Intensity::None
        }
    }

    pub fn all() -> &'static [Intensity] {
        &[Intensity::None, Intensity::Low, Intensity::Medium, Intensity::High]
    }

    /// Legend label
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::None => "No Activity",
            Intensity::Low => "Low",
            Intensity::Medium => "Medium",
            Intensity::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapDay {
    pub date: NaiveDate,
    /// Rounded progress (0-100)
    pub progress: u8,
    pub intensity: Intensity,
    /// Topics covered, 1..=5
    pub topics: u8,
}

impl HeatmapDay {
    pub fn tooltip(&self) -> String {
        format!(
            "{}: {}% progress, {} topics covered",
            self.date.format("%Y-%m-%d"),
            self.progress,
            self.topics
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapWeek {
    pub week_start: NaiveDate,
    pub days: Vec<HeatmapDay>,
}

impl HeatmapWeek {
    /// round(sum(day progress) / 7)
    pub fn progress(&self) -> u8 {
        let total: u32 = self.days.iter().map(|d| d.progress as u32).sum();
        round_percent(total as f64 / DAY_LABELS.len() as f64)
    }
}

/// Direction shown under a summary week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Improving,
    NeedsFocus,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Improving => "Improving",
            Trend::NeedsFocus => "Needs Focus",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekSummary {
    /// "Week 9" .. "Week 12"
    pub label: String,
    pub progress: u8,
    pub trend: Trend,
}

/// Generated activity grid, oldest week first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    pub weeks: Vec<HeatmapWeek>,
}

impl Heatmap {
    /// Generate `weeks` weeks ending at `today`. Week `i` (counting back from
    /// the newest) starts `7 * i` days before today.
    ///
    /// `weeks` is capped at [`MAX_WEEKS`]; weeks that would start before the
    /// earliest representable date are left out.
    pub fn generate<R: Rng + ?Sized>(today: NaiveDate, weeks: usize, rng: &mut R) -> Self {
        let weeks = (0..weeks.min(MAX_WEEKS) as u64)
            .rev()
            .filter_map(|i| today.checked_sub_days(Days::new(7 * i)))
            .map(|week_start| {
                let days = (0..DAY_LABELS.len())
                    .map(|j| {
                        let progress: f64 = rng.random::<f64>() * 100.0;
                        HeatmapDay {
                            date: week_start + Duration::days(j as i64),
                            progress: round_percent(progress),
                            intensity: Intensity::classify(progress),
                            topics: rng.random_range(1..=5),
                        }
                    })
                    .collect();
                HeatmapWeek { week_start, days }
            })
            .collect();

        Self { weeks }
    }

    /// Row label for the week at `index`: W12 for the oldest, W1 for the newest
    pub fn row_label(&self, index: usize) -> String {
        format!("W{}", self.weeks.len() - index)
    }

    /// Summary of the trailing weeks. A week is improving when it beats the
    /// previous summary week; the first summary week never is.
    pub fn summary(&self) -> Vec<WeekSummary> {
        let start = self.weeks.len().saturating_sub(SUMMARY_WEEKS);
        let tail = &self.weeks[start..];

        tail.iter()
            .enumerate()
            .map(|(index, week)| {
                let progress = week.progress();
                let improving = index > 0 && progress > tail[index - 1].progress();
                WeekSummary {
                    label: format!("Week {}", start + index + 1),
                    progress,
                    trend: if improving {
                        Trend::Improving
                    } else {
                        Trend::NeedsFocus
                    },
                }
            })
            .collect()
    }

    pub fn days(&self) -> impl Iterator<Item = &HeatmapDay> {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn day(progress: u8) -> HeatmapDay {
        HeatmapDay {
            date: today(),
            progress,
            intensity: Intensity::classify(progress as f64),
            topics: 1,
        }
    }

    fn week(progress: u8) -> HeatmapWeek {
        HeatmapWeek {
            week_start: today(),
            days: (0..7).map(|_| day(progress)).collect(),
        }
    }

    #[test]
    fn test_intensity_thresholds() {
        assert_eq!(Intensity::classify(80.0), Intensity::Medium);
        assert_eq!(Intensity::classify(80.01), Intensity::High);
        assert_eq!(Intensity::classify(50.0), Intensity::Low);
        assert_eq!(Intensity::classify(20.0), Intensity::None);
        assert_eq!(Intensity::classify(20.5), Intensity::Low);
    }

    #[test]
    fn test_generate_shape_and_dates() {
        let mut rng = SmallRng::seed_from_u64(7);
        let heatmap = Heatmap::generate(today(), 12, &mut rng);

        assert_eq!(heatmap.weeks.len(), 12);
        assert!(heatmap.weeks.iter().all(|w| w.days.len() == 7));
        assert_eq!(heatmap.weeks[11].week_start, today());
        assert_eq!(heatmap.weeks[0].week_start, today() - Duration::days(77));
        assert_eq!(heatmap.weeks[0].days[6].date, today() - Duration::days(71));
    }

    #[test]
    fn test_generate_caps_weeks() {
        let mut rng = SmallRng::seed_from_u64(3);
        let heatmap = Heatmap::generate(today(), usize::MAX, &mut rng);
        assert_eq!(heatmap.weeks.len(), MAX_WEEKS);
        assert_eq!(heatmap.weeks[MAX_WEEKS - 1].week_start, today());

        // Near the start of the calendar the older weeks are dropped
        let early = NaiveDate::MIN + Duration::days(10);
        let heatmap = Heatmap::generate(early, 4, &mut rng);
        assert_eq!(heatmap.weeks.len(), 2);
        assert_eq!(heatmap.weeks[1].week_start, early);
    }

    #[test]
    fn test_generated_values_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        let heatmap = Heatmap::generate(today(), 12, &mut rng);
        for d in heatmap.days() {
            assert!(d.progress <= 100);
            assert!((1..=5).contains(&d.topics));
        }
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a = Heatmap::generate(today(), 12, &mut SmallRng::seed_from_u64(1));
        let b = Heatmap::generate(today(), 12, &mut SmallRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_row_labels() {
        let heatmap = Heatmap::generate(today(), 12, &mut SmallRng::seed_from_u64(3));
        assert_eq!(heatmap.row_label(0), "W12");
        assert_eq!(heatmap.row_label(11), "W1");
    }

    #[test]
    fn test_week_progress_divides_by_seven() {
        let mut w = week(0);
        w.days[0].progress = 70;
        assert_eq!(w.progress(), 10);
    }

    #[test]
    fn test_summary_trends() {
        let mut weeks: Vec<_> = (0..8).map(|_| week(10)).collect();
        weeks.extend([week(50), week(40), week(60), week(60)]);
        let heatmap = Heatmap { weeks };

        let summary = heatmap.summary();
        let labels: Vec<_> = summary.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Week 9", "Week 10", "Week 11", "Week 12"]);

        let trends: Vec<_> = summary.iter().map(|s| s.trend).collect();
        assert_eq!(
            trends,
            vec![Trend::NeedsFocus, Trend::NeedsFocus, Trend::Improving, Trend::NeedsFocus]
        );
    }

    #[test]
    fn test_summary_shorter_than_four_weeks() {
        let heatmap = Heatmap { weeks: vec![week(10), week(20)] };
        let summary = heatmap.summary();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].label, "Week 1");
        assert_eq!(summary[1].trend, Trend::Improving);
    }

    #[test]
    fn test_tooltip() {
        assert_eq!(day(42).tooltip(), "2024-06-10: 42% progress, 1 topics covered");
    }
}
