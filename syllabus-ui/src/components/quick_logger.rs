//! Quick Logger Component
//!
//! Lecture logging form next to the list of recent logs.

use gloo_timers::callback::Timeout;
use leptos::*;
use syllabus_sync::logger::{
    recent_logs, CompletionLevel, FormOption, LectureLog, LectureLogForm, SUBJECT_OPTIONS,
    UNIT_OPTIONS,
};

use crate::components::InlineLoading;
use crate::state::global::GlobalState;

type Getter = fn(&LectureLogForm) -> &String;
type Setter = fn(&mut LectureLogForm, String);

/// Badge classes for a completion level
pub fn completion_class(level: CompletionLevel) -> &'static str {
    match level {
        CompletionLevel::FullyCovered => "bg-green-100 text-green-800",
        CompletionLevel::PartiallyCovered => "bg-yellow-100 text-yellow-800",
        CompletionLevel::IntroductionOnly => "bg-blue-100 text-blue-800",
    }
}

#[component]
pub fn QuickLogger() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let form = create_rw_signal(LectureLogForm::default());
    let (logging, set_logging) = create_signal(false);

    let can_submit = create_memo(move |_| form.with(|f| f.can_submit(logging.get())));

    let on_log = move |_| {
        if !can_submit.get_untracked() {
            return;
        }
        set_logging.set(true);

        let state = state.clone();
        Timeout::new(state.latency_ms(), move || {
            // The tab may have been switched away in the meantime
            if let Some(notice) = form.try_update(|f| f.submit()) {
                state.show_notice(notice);
            }
            let _ = set_logging.try_set(false);
        })
        .forget();
    };

    let completion_options: Vec<FormOption> = CompletionLevel::all()
        .iter()
        .map(|level| (level.label(), level.label()))
        .collect();

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="bg-white/80 rounded-lg shadow-lg p-6">
                <h2 class="text-lg font-semibold flex items-center gap-2">
                    <span>"⏱"</span>
                    "Quick Lecture Logger"
                </h2>
                <p class="text-sm text-gray-500 mb-6">"Log your completed lecture in under 30 seconds"</p>

                <div class="space-y-4">
                    <div class="grid grid-cols-2 gap-4">
                        <SelectField
                            id="subject" label="Subject" placeholder="Select subject"
                            options=SUBJECT_OPTIONS.to_vec() show_value=true
                            form=form get=|f| &f.subject set=|f, v| f.subject = v
                        />
                        <SelectField
                            id="unit" label="Unit" placeholder="Select unit"
                            options=UNIT_OPTIONS.to_vec()
                            form=form get=|f| &f.unit set=|f, v| f.unit = v
                        />
                    </div>

                    <TextField
                        id="topic" label="Topic Covered" placeholder="e.g., Binary Tree Traversal Methods"
                        form=form get=|f| &f.topic set=|f, v| f.topic = v
                    />

                    <div class="grid grid-cols-2 gap-4">
                        <TextField
                            id="duration" label="Duration (minutes)" placeholder="50" kind="number"
                            form=form get=|f| &f.duration set=|f, v| f.duration = v
                        />
                        <TextField
                            id="students" label="Students Present" placeholder="45" kind="number"
                            form=form get=|f| &f.students_present set=|f, v| f.students_present = v
                        />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <TextField
                            id="room" label="Room/Location" placeholder="Room 101"
                            form=form get=|f| &f.room set=|f, v| f.room = v
                        />
                        <SelectField
                            id="completion" label="Completion Level" placeholder="Select level"
                            options=completion_options
                            form=form get=|f| &f.completion_level set=|f, v| f.completion_level = v
                        />
                    </div>

                    <div class="space-y-2">
                        <label for="notes" class="text-sm font-medium">"Additional Notes (Optional)"</label>
                        <textarea
                            id="notes"
                            rows="3"
                            placeholder="Any important observations, student feedback, or next session planning..."
                            class="w-full border border-gray-300 rounded-lg px-3 py-2"
                            prop:value=move || form.with(|f| f.notes.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.notes = value);
                            }
                        />
                    </div>

                    <button
                        on:click=on_log
                        disabled=move || !can_submit.get()
                        class="w-full bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700
                               hover:to-purple-700 disabled:opacity-60 disabled:cursor-not-allowed text-white
                               rounded-lg py-2 font-semibold flex items-center justify-center space-x-2"
                    >
                        {move || if logging.get() {
                            view! {
                                <InlineLoading />
                                <span>"Logging..."</span>
                            }.into_view()
                        } else {
                            view! { <span>"✔ Log Lecture (30s)"</span> }.into_view()
                        }}
                    </button>
                </div>
            </div>

            <RecentLogs logs=recent_logs() />
        </div>
    }
}

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")]
    kind: &'static str,
    form: RwSignal<LectureLogForm>,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id class="text-sm font-medium">{label}</label>
            <input
                id=id
                type=kind
                placeholder=placeholder
                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

#[component]
fn SelectField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    options: Vec<FormOption>,
    /// Prefix each label with its value ("CS301 - ...")
    #[prop(optional)]
    show_value: bool,
    form: RwSignal<LectureLogForm>,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id class="text-sm font-medium">{label}</label>
            <select
                id=id
                class="w-full border border-gray-300 rounded-lg px-3 py-2 bg-white"
                prop:value=move || form.with(|f| get(f).clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            >
                <option value="" disabled selected>{placeholder}</option>
                {options
                    .into_iter()
                    .map(|(value, text)| {
                        let text = if show_value { format!("{} - {}", value, text) } else { text.to_string() };
                        view! { <option value=value>{text}</option> }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn RecentLogs(logs: Vec<LectureLog>) -> impl IntoView {
    view! {
        <div class="bg-white/80 rounded-lg shadow-lg p-6">
            <h2 class="text-lg font-semibold flex items-center gap-2">
                <span>"🕒"</span>
                "Recent Lecture Logs"
            </h2>
            <p class="text-sm text-gray-500 mb-6">"Your latest logged teaching sessions"</p>

            <div class="space-y-4">
                {logs
                    .into_iter()
                    .map(|log| view! {
                        <div class="border rounded-lg p-4 hover:bg-gray-50/50 transition-colors">
                            <div class="flex items-start justify-between mb-2">
                                <div>
                                    <h4 class="font-medium">{log.topic}</h4>
                                    <p class="text-sm text-gray-500">{log.subject}</p>
                                </div>
                                <span class=format!(
                                    "px-2 py-0.5 rounded text-xs font-medium {}",
                                    completion_class(log.completion_level)
                                )>
                                    {log.completion_level.label()}
                                </span>
                            </div>
                            <div class="grid grid-cols-2 gap-4 text-sm text-gray-500">
                                <span>{format!("📅 {}", log.timestamp)}</span>
                                <span>{format!("🕒 {} minutes", log.duration)}</span>
                                <span>{format!("👥 {} students", log.students_present)}</span>
                                <span>"📍 Logged via mobile"</span>
                            </div>
                        </div>
                    })
                    .collect_view()}

                <button type="button" class="w-full border border-gray-300 rounded-lg py-2 text-sm hover:bg-gray-100">
                    "+ View All Logs"
                </button>
            </div>
        </div>
    }
}
