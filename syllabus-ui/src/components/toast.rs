//! Toast Notification Component
//!
//! Shows success and error notices.

use leptos::*;
use syllabus_sync::notice::{Notice, NoticeKind};

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let success = state.success;
    let error = state.error;

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            // Success toast
            {move || {
                success.get().map(|notice| view! { <ToastMessage notice=notice /> })
            }}

            // Error toast, dismissable
            {move || {
                let state = state.clone();
                error.get().map(|notice| view! {
                    <div on:click=move |_| state.clear_error() class="cursor-pointer">
                        <ToastMessage notice=notice />
                    </div>
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(notice: Notice) -> impl IntoView {
    let (icon, bg_class) = match notice.kind {
        NoticeKind::Success => ("✓", "bg-green-600"),
        NoticeKind::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div class=format!(
            "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <div>
                <p class="text-sm font-semibold">{notice.title}</p>
                <p class="text-sm">{notice.description}</p>
            </div>
        </div>
    }
}
