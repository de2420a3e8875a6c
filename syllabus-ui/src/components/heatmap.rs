//! Progress Heatmap Component
//!
//! Teaching activity grid for the last weeks plus a short weekly summary.
//! Regenerated with fresh random values every time the component mounts.

use leptos::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use syllabus_sync::heatmap::{Heatmap, HeatmapDay, Intensity, Trend, WeekSummary, DAY_LABELS};

use crate::state::global::GlobalState;

/// Seed from the browser's random source
fn browser_rng() -> SmallRng {
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64 ^ js_sys::Date::now() as u64;
    SmallRng::seed_from_u64(seed)
}

/// Tailwind classes for an intensity bucket
pub fn intensity_class(intensity: Intensity) -> &'static str {
    match intensity {
        Intensity::High => "bg-green-600 hover:bg-green-700",
        Intensity::Medium => "bg-green-400 hover:bg-green-500",
        Intensity::Low => "bg-green-200 hover:bg-green-300",
        Intensity::None => "bg-gray-100 hover:bg-gray-200",
    }
}

#[component]
pub fn ProgressHeatmap() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let today = chrono::Local::now().date_naive();
    let heatmap = Heatmap::generate(today, state.heatmap_weeks(), &mut browser_rng());
    let summary = heatmap.summary();

    let rows = heatmap
        .weeks
        .iter()
        .enumerate()
        .map(|(index, week)| {
            let label = heatmap.row_label(index);
            let cells = week
                .days
                .iter()
                .cloned()
                .map(|day| view! { <HeatmapCell day=day /> })
                .collect_view();
            view! {
                <div class="grid grid-cols-8 gap-1 items-center">
                    <div class="text-xs text-gray-500 pr-2">{label}</div>
                    {cells}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="bg-white/80 rounded-lg shadow-lg p-6">
            <div class="flex items-center justify-between mb-6">
                <div>
                    <h2 class="text-lg font-semibold flex items-center gap-2">
                        <span>"📅"</span>
                        "Progress Heatmap"
                    </h2>
                    <p class="text-sm text-gray-500">
                        {format!("Teaching activity over the last {} weeks", heatmap.weeks.len())}
                    </p>
                </div>
                <div class="flex items-center gap-4 text-sm">
                    {Intensity::all()
                        .iter()
                        .map(|intensity| view! {
                            <div class="flex items-center gap-2">
                                <div class=format!("w-3 h-3 rounded-sm {}", intensity_class(*intensity)) />
                                <span>{intensity.label()}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="space-y-4">
                // Day labels
                <div class="grid grid-cols-8 gap-1 text-xs text-gray-500">
                    <div />
                    {DAY_LABELS
                        .iter()
                        .map(|day| view! { <div class="text-center font-medium">{*day}</div> })
                        .collect_view()}
                </div>

                <div class="space-y-1">{rows}</div>

                <div class="mt-6 pt-6 border-t border-gray-200">
                    <h4 class="text-sm font-medium mb-3">"Weekly Progress Summary"</h4>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        {summary
                            .into_iter()
                            .map(|week| view! { <SummaryCard week=week /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn HeatmapCell(day: HeatmapDay) -> impl IntoView {
    view! {
        <div
            class=format!(
                "w-8 h-8 rounded-sm cursor-pointer transition-all duration-200 {} \
                 flex items-center justify-center group relative",
                intensity_class(day.intensity)
            )
            title=day.tooltip()
        >
            <div class="opacity-0 group-hover:opacity-100 absolute -top-12 left-1/2 -translate-x-1/2
                        bg-black text-white text-xs px-2 py-1 rounded whitespace-nowrap pointer-events-none z-10">
                {day.date.format("%Y-%m-%d").to_string()}
                <br />
                {format!("{}% • {} topics", day.progress, day.topics)}
            </div>
        </div>
    }
}

#[component]
fn SummaryCard(week: WeekSummary) -> impl IntoView {
    let (icon, badge) = match week.trend {
        Trend::Improving => ("↗", "bg-green-100 text-green-800"),
        Trend::NeedsFocus => ("↘", "bg-yellow-100 text-yellow-800"),
    };

    view! {
        <div class="text-center p-3 bg-gray-50 rounded-lg">
            <div class="text-lg font-bold">{format!("{}%", week.progress)}</div>
            <div class="text-xs text-gray-500">{week.label}</div>
            <div class="flex items-center justify-center mt-1">
                <span class=format!("px-2 py-0.5 rounded text-xs font-medium {}", badge)>
                    {format!("{} {}", icon, week.trend.label())}
                </span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllabus_sync::config::Config;

    #[test]
    fn test_intensity_classes_are_distinct() {
        let classes: Vec<_> = Intensity::all().iter().map(|i| intensity_class(*i)).collect();
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_grid_follows_configured_weeks() {
        let mut config = Config::parse("[heatmap]\nweeks = 6\n").unwrap();
        let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);

        let heatmap = Heatmap::generate(today, config.heatmap.weeks, &mut rng);
        assert_eq!(heatmap.weeks.len(), 6);
        assert_eq!(heatmap.row_label(0), "W6");

        config.heatmap = Default::default();
        let heatmap = Heatmap::generate(today, config.heatmap.weeks, &mut rng);
        assert_eq!(heatmap.row_label(0), "W12");
    }
}
