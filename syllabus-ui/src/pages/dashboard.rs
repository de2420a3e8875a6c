//! Dashboard Page
//!
//! Header with the signed-in user, department stat cards and the four tabs.

use leptos::*;
use leptos_router::*;
use syllabus_sync::session::Route;
use syllabus_sync::syllabus::{average_subject_progress, department_summary, subjects};

use crate::components::{
    AnalyticsDashboard, ProgressHeatmap, QuickLogger, StatCard, SubjectProgress, SyllabusMapping,
};
use crate::state::global::GlobalState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Syllabus,
    Analytics,
    QuickLog,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Overview, Tab::Syllabus, Tab::Analytics, Tab::QuickLog];

    fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Syllabus => "Syllabus Mapping",
            Tab::Analytics => "Analytics",
            Tab::QuickLog => "Quick Logger",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Tab::Overview => "📊",
            Tab::Syllabus => "📘",
            Tab::Analytics => "📈",
            Tab::QuickLog => "⏱",
        }
    }
}

/// Dashboard page, guarded by the session
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    move || match state.redirect_for(Route::Dashboard) {
        Some(target) => view! { <Redirect path=target.path() /> }.into_view(),
        None => view! { <DashboardContent /> }.into_view(),
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let (active_tab, set_active_tab) = create_signal(Tab::Overview);

    view! {
        <Header />

        <div class="max-w-7xl mx-auto px-4 py-8">
            // Navigation tabs
            <div class="flex flex-wrap gap-2 mb-8">
                {Tab::ALL
                    .into_iter()
                    .map(|tab| view! {
                        <TabButton tab=tab active=active_tab on_click=move |_| set_active_tab.set(tab) />
                    })
                    .collect_view()}
            </div>

            {move || match active_tab.get() {
                Tab::Overview => view! { <Overview /> }.into_view(),
                Tab::Syllabus => view! { <SyllabusMapping /> }.into_view(),
                Tab::Analytics => view! { <AnalyticsDashboard /> }.into_view(),
                Tab::QuickLog => view! { <QuickLogger /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let user = state.user;
    let on_logout = move |_| {
        state.logout();
        navigate(Route::Login.path(), Default::default());
    };

    view! {
        <header class="bg-white/80 border-b border-gray-200 sticky top-0 z-40">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <span class="text-2xl">"📘"</span>
                        <div>
                            <h1 class="text-xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                                "SyllabusSync"
                            </h1>
                            <p class="text-xs text-gray-500">"Academic Progress Tracker"</p>
                        </div>
                    </div>

                    <div class="flex items-center gap-4">
                        <div class="text-right">
                            <p class="text-sm font-medium">
                                {move || user.with(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_default())}
                            </p>
                            <p class="text-xs text-gray-500 capitalize">
                                {move || user.with(|u| u.as_ref().map(|u| u.subtitle()).unwrap_or_default())}
                            </p>
                        </div>
                        <button
                            on:click=on_logout
                            class="px-3 py-1.5 border border-gray-300 rounded-lg text-sm hover:bg-gray-100"
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
fn TabButton(
    tab: Tab,
    active: ReadSignal<Tab>,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "flex items-center gap-2 px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if active.get() == tab {
                    format!("{} bg-blue-600 text-white", base)
                } else {
                    format!("{} border border-gray-300 bg-white hover:bg-gray-100", base)
                }
            }
        >
            <span>{tab.icon()}</span>
            {tab.label()}
        </button>
    }
}

#[component]
fn Overview() -> impl IntoView {
    let summary = department_summary();
    let subjects = subjects();
    let average = average_subject_progress(&subjects);

    view! {
        <div class="space-y-8">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard
                    title="Total Subjects"
                    value=summary.total_subjects.to_string()
                    caption=format!("Across {} semesters", summary.semesters)
                    icon="📘"
                />
                <StatCard
                    title="Average Progress"
                    value=format!("{}%", average)
                    caption="+5% from last week"
                    icon="📈"
                />
                <StatCard
                    title="Behind Schedule"
                    value=summary.behind_schedule.to_string()
                    caption="Need attention"
                    icon="⚠"
                />
                <StatCard
                    title="Exam Readiness"
                    value=format!("{}%", summary.exam_readiness)
                    caption="NAAC compliant"
                    icon="🎯"
                />
            </div>

            <SubjectProgress subjects=subjects />

            <ProgressHeatmap />
        </div>
    }
}
