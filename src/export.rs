//! CSV export of the chart data
//!
//! Writes the weekly progress series or a generated heatmap to any writer.

use std::io::Write;

use crate::analytics::{Analytics, SubjectFilter, SUBJECT_CODES};
use crate::heatmap::Heatmap;

/// Export errors
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// `week,CS301,...` with one row per week, restricted to `filter`
pub fn weekly_progress_csv<W: Write>(
    analytics: &Analytics,
    filter: &SubjectFilter,
    out: W,
) -> ExportResult<()> {
    let mut writer = csv::Writer::from_writer(out);

    let columns: Vec<usize> = (0..SUBJECT_CODES.len())
        .filter(|&i| filter.includes(SUBJECT_CODES[i]))
        .collect();

    let mut header = vec!["week"];
    header.extend(columns.iter().map(|&i| SUBJECT_CODES[i]));
    writer.write_record(&header)?;

    for week in &analytics.weekly_progress {
        let mut row = vec![week.week.clone()];
        row.extend(columns.iter().map(|&i| week.values[i].to_string()));
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// `date,progress,intensity,topics` with one row per day, oldest first
pub fn heatmap_csv<W: Write>(heatmap: &Heatmap, out: W) -> ExportResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["date", "progress", "intensity", "topics"])?;

    for day in heatmap.days() {
        writer.write_record([
            day.date.format("%Y-%m-%d").to_string(),
            day.progress.to_string(),
            day.intensity.label().to_string(),
            day.topics.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_weekly_progress_all_subjects() {
        let mut out = Vec::new();
        weekly_progress_csv(&Analytics::sample(), &SubjectFilter::All, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "week,CS301,CS302,CS303,CS304");
        assert_eq!(lines[1], "Week 1,15,10,20,12");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_weekly_progress_single_subject() {
        let mut out = Vec::new();
        let filter = SubjectFilter::from_key("CS302");
        weekly_progress_csv(&Analytics::sample(), &filter, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().next(), Some("week,CS302"));
        assert_eq!(text.lines().last(), Some("Week 6,65"));
    }

    #[test]
    fn test_heatmap_rows() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let heatmap = Heatmap::generate(today, 2, &mut SmallRng::seed_from_u64(5));

        let mut out = Vec::new();
        heatmap_csv(&heatmap, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1 + 14);
        assert!(text.lines().nth(1).unwrap().starts_with("2024-06-03,"));
    }
}
