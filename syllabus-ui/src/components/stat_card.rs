//! Stat Card Component
//!
//! Headline figure with a caption, used for the department overview and the
//! analytics key metrics.

use leptos::*;

#[component]
pub fn StatCard(
    #[prop(into)]
    title: String,
    #[prop(into)]
    value: String,
    #[prop(into)]
    caption: String,
    #[prop(default = "")]
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white/80 rounded-lg shadow-lg p-4">
            <div class="flex items-center justify-between pb-2">
                <h3 class="text-sm font-medium">{title}</h3>
                <span class="text-base">{icon}</span>
            </div>
            <div class="text-2xl font-bold">{value}</div>
            <p class="text-xs text-gray-500">{caption}</p>
        </div>
    }
}
