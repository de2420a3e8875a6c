//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::{Dashboard, Index, Login};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gradient-to-br from-blue-50 via-white to-purple-50 text-gray-900">
                <Routes>
                    <Route path="/" view=Index />
                    <Route path="/login" view=Login />
                    <Route path="/dashboard" view=Dashboard />
                    <Route path="/*any" view=NotFound />
                </Routes>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();
    create_effect(move |_| {
        crate::state::global::log(&format!(
            "404: no route for {}",
            location.pathname.get()
        ));
    });

    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-xl text-gray-600 mb-6">"Oops! Page not found"</p>
            <A href="/" class="text-blue-600 hover:text-blue-800 underline">
                "Return to Home"
            </A>
        </div>
    }
}
