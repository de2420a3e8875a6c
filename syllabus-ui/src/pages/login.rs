//! Login Page
//!
//! Simulated sign-in: any non-empty email and password are accepted after a
//! short delay.

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::*;
use syllabus_sync::notice::Notice;
use syllabus_sync::session::Route;

use crate::components::InlineLoading;
use crate::state::global::{log, GlobalState};

#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_loading.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        let email = email.get_untracked();
        let password = password.get_untracked();

        Timeout::new(state.latency_ms(), move || {
            match state.login(&email, &password) {
                Ok(_) => {
                    state.show_notice(Notice::login_succeeded());
                    navigate(Route::Index.path(), Default::default());
                }
                Err(e) => {
                    log(&format!("Login failed: {}", e));
                    state.show_notice(Notice::login_failed());
                }
            }
            // The page may already be gone after navigating
            let _ = set_loading.try_set(false);
        })
        .forget();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center p-4">
            <div class="w-full max-w-md">
                <div class="text-center mb-8">
                    <div class="flex justify-center items-center gap-2 mb-4 text-3xl">
                        <span>"📘"</span>
                        <span>"🎓"</span>
                    </div>
                    <h1 class="text-3xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        "SyllabusSync"
                    </h1>
                    <p class="text-gray-500 mt-2">"Real-Time Academic Progress Tracker"</p>
                </div>

                <div class="shadow-lg rounded-lg bg-white/80 p-6">
                    <h2 class="text-2xl font-semibold text-center">"Welcome Back"</h2>
                    <p class="text-sm text-gray-500 text-center mb-6">
                        "Sign in to track academic progress"
                    </p>

                    <form on:submit=on_submit class="space-y-4">
                        <div class="space-y-2">
                            <label for="email" class="text-sm font-medium">"Email"</label>
                            <input
                                id="email"
                                type="email"
                                placeholder="faculty@university.edu"
                                required
                                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="space-y-2">
                            <label for="password" class="text-sm font-medium">"Password"</label>
                            <input
                                id="password"
                                type="password"
                                required
                                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>

                        <button
                            type="submit"
                            disabled=move || loading.get()
                            class="w-full bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700
                                   hover:to-purple-700 disabled:opacity-60 text-white rounded-lg py-2
                                   font-semibold flex items-center justify-center space-x-2"
                        >
                            {move || if loading.get() {
                                view! {
                                    <InlineLoading />
                                    <span>"Signing In..."</span>
                                }.into_view()
                            } else {
                                view! { <span>"Sign In"</span> }.into_view()
                            }}
                        </button>
                    </form>

                    <div class="mt-6 text-center text-sm text-gray-500">
                        <p>"Demo Accounts:"</p>
                        <p>"Faculty: faculty@demo.com"</p>
                        <p>"HOD: hod@demo.com"</p>
                        <p>"Password: any"</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
