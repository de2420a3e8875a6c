//! Syllabus Mapping Component
//!
//! Collapsible unit cards listing subtopics, lecture counts, declared
//! dependencies and prerequisite alerts.

use leptos::*;
use std::collections::HashSet;
use syllabus_sync::syllabus::{data_structures_syllabus, prerequisite_alert, Subtopic, TopicStatus, Unit};

use super::subject_progress::ProgressBar;

/// Badge classes keyed by the status' kebab-case name
fn badge_class(status: &str) -> &'static str {
    match status {
        "completed" => "bg-green-100 text-green-800",
        "in-progress" => "bg-blue-100 text-blue-800",
        "blocked" => "bg-red-100 text-red-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

fn status_icon(status: TopicStatus) -> (&'static str, &'static str) {
    match status {
        TopicStatus::Completed => ("✔", "text-green-600"),
        TopicStatus::InProgress => ("◔", "text-blue-600"),
        TopicStatus::Blocked => ("⚠", "text-red-600"),
        TopicStatus::Pending => ("○", "text-gray-400"),
    }
}

#[component]
fn StatusBadge(#[prop(into)] key: String, label: &'static str) -> impl IntoView {
    view! {
        <span class=format!("px-2 py-0.5 rounded text-xs font-medium {}", badge_class(&key))>
            {label}
        </span>
    }
}

#[component]
pub fn SyllabusMapping() -> impl IntoView {
    let syllabus = data_structures_syllabus();
    let rollup = syllabus.rollup();
    let open_units = create_rw_signal(HashSet::from([1u32]));

    let toggle_unit = move |id: u32| {
        open_units.update(|open| {
            if !open.remove(&id) {
                open.insert(id);
            }
        });
    };

    let index = syllabus.index();
    let units = syllabus
        .units
        .iter()
        .map(|unit| {
            let alerts: Vec<_> = unit
                .subtopics
                .iter()
                .map(|subtopic| prerequisite_alert(subtopic, &index).map(|a| a.message()))
                .collect();
            let id = unit.id;
            let open = Signal::derive(move || open_units.with(|open| open.contains(&id)));

            view! { <UnitCard unit=unit.clone() alerts=alerts open=open on_toggle=toggle_unit /> }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            // Header
            <div class="bg-white/80 rounded-lg shadow-lg p-6">
                <div class="flex items-center justify-between mb-6">
                    <div>
                        <h2 class="text-lg font-semibold flex items-center gap-2">
                            <span>"📘"</span>
                            "Smart Syllabus Mapping"
                        </h2>
                        <p class="text-sm text-gray-500">
                            {format!("{} ({}) - Unit-Topic Breakdown", syllabus.subject, syllabus.code)}
                        </p>
                    </div>
                    <button
                        type="button"
                        class="bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700
                               text-white rounded-lg px-4 py-2 text-sm font-medium"
                    >
                        "+ Add Topic"
                    </button>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <div class="text-center p-4 bg-blue-50 rounded-lg">
                        <div class="text-2xl font-bold text-blue-600">{rollup.total_units}</div>
                        <div class="text-sm text-gray-500">"Total Units"</div>
                    </div>
                    <div class="text-center p-4 bg-green-50 rounded-lg">
                        <div class="text-2xl font-bold text-green-600">
                            {format!("{}%", rollup.overall_progress)}
                        </div>
                        <div class="text-sm text-gray-500">"Overall Progress"</div>
                    </div>
                    <div class="text-center p-4 bg-purple-50 rounded-lg">
                        <div class="text-2xl font-bold text-purple-600">
                            {format!("{}h", rollup.hours_logged)}
                        </div>
                        <div class="text-sm text-gray-500">"Hours Logged"</div>
                    </div>
                </div>
            </div>

            {units}
        </div>
    }
}

#[component]
fn UnitCard(
    unit: Unit,
    /// Alert message per subtopic, in subtopic order
    alerts: Vec<Option<String>>,
    open: Signal<bool>,
    on_toggle: impl Fn(u32) + Copy + 'static,
) -> impl IntoView {
    let id = unit.id;
    let drift = unit.progress_drift();
    let derived = unit.derived_progress();

    let subtopics = unit
        .subtopics
        .iter()
        .cloned()
        .zip(alerts)
        .map(|(subtopic, alert)| view! { <SubtopicRow subtopic=subtopic alert=alert /> })
        .collect_view();

    view! {
        <div class="bg-white/80 rounded-lg shadow-lg">
            <div
                class="p-6 cursor-pointer hover:bg-gray-50/50 transition-colors"
                on:click=move |_| on_toggle(id)
            >
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <span class="text-gray-400 w-4">{move || if open.get() { "▾" } else { "▸" }}</span>
                        <div>
                            <h3 class="text-lg font-semibold">{format!("Unit {}: {}", unit.id, unit.title)}</h3>
                            <p class="text-sm text-gray-500">{unit.hours_summary()}</p>
                            {(drift != 0).then(|| view! {
                                <p class="text-xs text-gray-400">
                                    {format!("Topic statuses suggest {}%", derived)}
                                </p>
                            })}
                        </div>
                    </div>
                    <div class="flex items-center gap-3">
                        <StatusBadge key=unit.status.to_string() label=unit.status.label() />
                        <div class="text-right w-20">
                            <div class="text-lg font-bold">{format!("{}%", unit.progress)}</div>
                            <ProgressBar value=unit.progress />
                        </div>
                    </div>
                </div>
            </div>

            <div class="px-6 pb-6 space-y-3" class:hidden=move || !open.get()>
                {subtopics}
            </div>
        </div>
    }
}

#[component]
fn SubtopicRow(subtopic: Subtopic, alert: Option<String>) -> impl IntoView {
    let (icon, icon_class) = status_icon(subtopic.status);

    view! {
        <div class="border rounded-lg p-4 hover:bg-gray-50/50 transition-colors">
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <span class=format!("w-4 text-center {}", icon_class)>{icon}</span>
                    <div>
                        <h4 class="font-medium">{subtopic.title.clone()}</h4>
                        <div class="flex items-center gap-3 text-sm text-gray-500">
                            <span>{format!("{} lectures logged", subtopic.lecture_count)}</span>
                            {subtopic.prerequisite.map(|p| view! {
                                <span class="flex items-center gap-1">
                                    <span>"🔗"</span>
                                    {format!("Depends on Topic {}", p)}
                                </span>
                            })}
                        </div>
                        {alert.map(|message| view! {
                            <div class="flex items-center gap-2 text-xs text-red-600 mt-1">
                                <span>"⚠"</span>
                                {message}
                            </div>
                        })}
                    </div>
                </div>
                <div class="flex items-center gap-2">
                    <StatusBadge key=subtopic.status.to_string() label=subtopic.status.label() />
                    <button type="button" class="px-3 py-1 border border-gray-300 rounded-lg text-sm hover:bg-gray-100">
                        "Log Lecture"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllabus_sync::syllabus::TopicIndex;

    #[test]
    fn test_badge_classes_follow_status_names() {
        assert_eq!(badge_class(&TopicStatus::Blocked.to_string()), "bg-red-100 text-red-800");
        assert_eq!(badge_class(&TopicStatus::InProgress.to_string()), "bg-blue-100 text-blue-800");
        assert_eq!(badge_class(&TopicStatus::Pending.to_string()), "bg-gray-100 text-gray-800");
    }

    #[test]
    fn test_sample_alert_messages() {
        let syllabus = data_structures_syllabus();
        let index = TopicIndex::build(&syllabus);
        let messages: Vec<_> = syllabus
            .subtopics()
            .filter_map(|s| prerequisite_alert(s, &index))
            .map(|a| a.message())
            .collect();
        assert_eq!(messages[0], "Prerequisite \"Stacks and Queues\" not completed");
        assert_eq!(messages.len(), 4);
    }
}
