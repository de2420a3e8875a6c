//! Index Page
//!
//! `/` never renders content of its own; it forwards to the dashboard or the
//! login screen depending on the session.

use leptos::*;
use leptos_router::*;
use syllabus_sync::session::Route;

use crate::state::global::GlobalState;

#[component]
pub fn Index() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    move || {
        let target = state.redirect_for(Route::Index).unwrap_or(Route::Login);
        view! { <Redirect path=target.path() /> }
    }
}
