//! Analytics Dashboard Component
//!
//! Coverage trends, velocity, exam readiness and accreditation compliance.

use leptos::*;
use syllabus_sync::analytics::{
    Analytics, ComplianceItem, ComplianceLevel, ExamReadiness, KeyMetrics, Period, SubjectFilter,
    SUBJECT_CODES,
};

use crate::components::chart::{CompletionPieChart, ProgressLineChart, VelocityBarChart};
use crate::components::subject_progress::ProgressBar;
use crate::components::StatCard;
use crate::state::global::log;

/// Caption under the risk subjects card
pub fn risk_caption(metrics: &KeyMetrics) -> String {
    if metrics.at_risk.is_empty() {
        "All subjects on track".to_string()
    } else {
        format!("{} needs attention", metrics.at_risk.join(", "))
    }
}

fn compliance_classes(level: ComplianceLevel) -> (&'static str, &'static str, &'static str) {
    match level {
        ComplianceLevel::Compliant => ("bg-green-50", "text-green-600", "bg-green-100 text-green-800"),
        ComplianceLevel::OnTrack => ("bg-blue-50", "text-blue-600", "bg-blue-100 text-blue-800"),
        ComplianceLevel::NeedsReview => ("bg-yellow-50", "text-yellow-600", "bg-yellow-100 text-yellow-800"),
    }
}

#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let analytics = Analytics::sample();
    let metrics = analytics.key_metrics();

    let (period, set_period) = create_signal(Period::default());
    let (subject, set_subject) = create_signal(SubjectFilter::All);

    let series = {
        let analytics = analytics.clone();
        Signal::derive(move || subject.with(|filter| analytics.series(filter)))
    };
    let labels: Vec<String> = analytics.week_labels().into_iter().map(String::from).collect();
    let velocity_max = analytics.velocity_max();
    let Analytics {
        subject_completion,
        teaching_velocity,
        exam_readiness,
        compliance,
        ..
    } = analytics;

    let on_export = move |_| {
        log(&format!(
            "Export requested: period={}, subject={}",
            period.get_untracked().key(),
            subject.with_untracked(|s| s.key().to_string())
        ));
    };

    // "CS301 - DSA" style labels share their order with the subject codes
    let subject_options: Vec<(&'static str, &'static str)> = SUBJECT_CODES
        .iter()
        .zip(subject_completion.iter())
        .map(|(code, completion)| (*code, completion.name))
        .collect();

    view! {
        <div class="space-y-6">
            <div class="bg-white/80 rounded-lg shadow-lg p-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h2 class="text-lg font-semibold flex items-center gap-2">
                            <span>"📊"</span>
                            "Live Coverage Analytics"
                        </h2>
                        <p class="text-sm text-gray-500">
                            "Comprehensive progress tracking and predictive insights"
                        </p>
                    </div>
                    <div class="flex items-center gap-3">
                        <select
                            class="w-32 border border-gray-300 rounded-lg px-3 py-2 bg-white"
                            prop:value=move || period.get().key()
                            on:change=move |ev| {
                                if let Some(p) = Period::from_key(&event_target_value(&ev)) {
                                    set_period.set(p);
                                }
                            }
                        >
                            {Period::all()
                                .iter()
                                .map(|p| view! { <option value=p.key()>{p.label()}</option> })
                                .collect_view()}
                        </select>
                        <select
                            class="w-40 border border-gray-300 rounded-lg px-3 py-2 bg-white"
                            prop:value=move || subject.with(|s| s.key().to_string())
                            on:change=move |ev| set_subject.set(SubjectFilter::from_key(&event_target_value(&ev)))
                        >
                            <option value="all">"All Subjects"</option>
                            {subject_options
                                .into_iter()
                                .map(|(code, label)| view! { <option value=code>{label}</option> })
                                .collect_view()}
                        </select>
                        <button
                            on:click=on_export
                            class="border border-gray-300 rounded-lg px-4 py-2 text-sm hover:bg-gray-100"
                        >
                            "⬇ Export"
                        </button>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard
                    title="Average Progress"
                    value=format!("{}%", metrics.average_progress)
                    caption="+5.2% from last week"
                    icon="📈"
                />
                <StatCard
                    title="Teaching Velocity"
                    value=format!("{} topics/week", metrics.teaching_velocity)
                    caption="On target for completion"
                    icon="⏱"
                />
                <StatCard
                    title="Exam Readiness"
                    value=format!("{}%", metrics.exam_readiness)
                    caption="Projected completion rate"
                    icon="🎯"
                />
                <StatCard
                    title="Risk Subjects"
                    value=metrics.risk_subjects.to_string()
                    caption=risk_caption(&metrics)
                    icon="⚠"
                />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <ChartCard title="Weekly Progress Trend" description="Subject-wise completion percentage over time">
                    <ProgressLineChart series=series labels=labels />
                </ChartCard>
                <ChartCard title="Subject Completion Distribution" description="Current completion status across subjects">
                    <CompletionPieChart data=subject_completion />
                </ChartCard>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <ChartCard title="Teaching Velocity & Efficiency" description="Planned vs actual teaching progress">
                    <VelocityBarChart data=teaching_velocity max=velocity_max />
                </ChartCard>
                <ChartCard title="Exam Readiness Tracker" description="Projected completion by exam dates">
                    <div class="space-y-4">
                        {exam_readiness
                            .into_iter()
                            .map(|readiness| view! { <ReadinessRow readiness=readiness /> })
                            .collect_view()}
                    </div>
                </ChartCard>
            </div>

            <ComplianceReport items=compliance />
        </div>
    }
}

#[component]
fn ChartCard(title: &'static str, description: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="bg-white/80 rounded-lg shadow-lg p-6">
            <h3 class="text-lg font-semibold">{title}</h3>
            <p class="text-sm text-gray-500 mb-4">{description}</p>
            {children()}
        </div>
    }
}

#[component]
fn ReadinessRow(readiness: ExamReadiness) -> impl IntoView {
    let (_, badge) = crate::components::subject_progress::pace_classes(readiness.status);

    view! {
        <div class="space-y-2">
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <span class="font-medium">{readiness.subject}</span>
                    <span class=format!("px-2 py-0.5 rounded text-xs font-medium {}", badge)>
                        {readiness.status.risk_label()}
                    </span>
                </div>
                <span class="text-sm text-gray-500">
                    {readiness.exam_date.format("%Y-%m-%d").to_string()}
                </span>
            </div>
            <div class="space-y-1">
                <div class="flex justify-between text-xs">
                    <span>{format!("Current: {}%", readiness.current)}</span>
                    <span>{format!("Projected: {}%", readiness.projected)}</span>
                </div>
                <ProgressBar value=readiness.current />
            </div>
        </div>
    }
}

#[component]
fn ComplianceReport(items: Vec<ComplianceItem>) -> impl IntoView {
    view! {
        <div class="bg-white/80 rounded-lg shadow-lg p-6">
            <h2 class="text-lg font-semibold flex items-center gap-2">
                <span>"🏅"</span>
                "NAAC/NBA Compliance Report"
            </h2>
            <p class="text-sm text-gray-500 mb-6">"Automated accreditation readiness assessment"</p>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {items
                    .into_iter()
                    .map(|item| {
                        let (panel, figure, badge) = compliance_classes(item.level);
                        view! {
                            <div class=format!("text-center p-4 rounded-lg {}", panel)>
                                <div class=format!("text-2xl font-bold {}", figure)>{format!("{}%", item.value)}</div>
                                <div class="text-sm text-gray-500">{item.name}</div>
                                <span class=format!("inline-block mt-2 px-2 py-0.5 rounded text-xs font-medium {}", badge)>
                                    {item.level.label()}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="mt-6 flex gap-3">
                <button class="bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700
                               text-white rounded-lg px-4 py-2 text-sm font-semibold">
                    "⬇ Generate NAAC Report"
                </button>
                <button class="border border-gray-300 rounded-lg px-4 py-2 text-sm hover:bg-gray-100">
                    "⬇ NBA Documentation"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_caption() {
        let metrics = Analytics::sample().key_metrics();
        assert_eq!(risk_caption(&metrics), "CS302 needs attention");

        let calm = KeyMetrics { at_risk: vec![], risk_subjects: 0, ..metrics };
        assert_eq!(risk_caption(&calm), "All subjects on track");
    }
}
