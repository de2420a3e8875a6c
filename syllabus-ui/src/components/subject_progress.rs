//! Subject Progress Component
//!
//! Completion bar, pace badge and next deadline per subject.

use leptos::*;
use syllabus_sync::syllabus::{PaceStatus, Subject};

/// Dot and badge classes for a pace status
pub fn pace_classes(status: PaceStatus) -> (&'static str, &'static str) {
    match status {
        PaceStatus::Ahead => ("bg-green-500", "bg-green-100 text-green-800"),
        PaceStatus::OnTrack => ("bg-blue-500", "bg-blue-100 text-blue-800"),
        PaceStatus::Behind => ("bg-red-500", "bg-red-100 text-red-800"),
    }
}

#[component]
pub fn SubjectProgress(subjects: Vec<Subject>) -> impl IntoView {
    view! {
        <div class="bg-white/80 rounded-lg shadow-lg p-6">
            <h2 class="text-lg font-semibold">"Subject Progress Overview"</h2>
            <p class="text-sm text-gray-500 mb-6">"Track completion status across all subjects"</p>

            <div class="space-y-6">
                {subjects
                    .into_iter()
                    .map(|subject| view! { <SubjectRow subject=subject /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SubjectRow(subject: Subject) -> impl IntoView {
    let (dot, badge) = pace_classes(subject.status);

    view! {
        <div class="space-y-3">
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class=format!("w-3 h-3 rounded-full {}", dot) />
                    <div>
                        <h4 class="font-medium">{subject.name.clone()}</h4>
                        <p class="text-sm text-gray-500">{subject.code.clone()}</p>
                    </div>
                </div>
                <div class="flex items-center gap-3">
                    <span class=format!("px-2 py-0.5 rounded text-xs font-medium {}", badge)>
                        {subject.status.label()}
                    </span>
                    <span class="text-sm font-medium">{format!("{}%", subject.progress)}</span>
                </div>
            </div>

            <ProgressBar value=subject.progress />

            <div class="flex justify-between text-xs text-gray-500">
                <span>{subject.units_summary()}</span>
                <span>{format!("Next: {}", subject.next_deadline.format("%Y-%m-%d"))}</span>
            </div>
        </div>
    }
}

/// Horizontal progress bar (0-100)
#[component]
pub fn ProgressBar(
    value: u8,
    #[prop(default = "h-2")]
    height: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("w-full bg-gray-200 rounded-full overflow-hidden {}", height)>
            <div
                class="h-full bg-blue-600 rounded-full"
                style=format!("width: {}%", value.min(100))
            />
        </div>
    }
}
