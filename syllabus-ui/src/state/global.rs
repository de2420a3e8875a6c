//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use syllabus_sync::config::{Config, HeatmapConfig, UiConfig};
use syllabus_sync::notice::{Notice, NoticeKind};
use syllabus_sync::session::{Route, SessionError, SessionGate, SessionRecord, SessionResult};

use super::session::LocalStorageStore;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Signed-in user, mirrored from the session gate
    pub user: RwSignal<Option<SessionRecord>>,
    /// Success notification (for toasts)
    pub success: RwSignal<Option<Notice>>,
    /// Error notification (for toasts)
    pub error: RwSignal<Option<Notice>>,
    /// Session state machine over localStorage
    gate: StoredValue<SessionGate<LocalStorageStore>>,
    /// Timing settings
    pub ui: StoredValue<UiConfig>,
    /// Activity grid settings
    pub heatmap: StoredValue<HeatmapConfig>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let config = Config::default();
    let store = LocalStorageStore::new(config.session.storage_key.clone());
    let gate = SessionGate::load(store, config.session.department.clone());

    let state = GlobalState {
        user: create_rw_signal(gate.current_user().cloned()),
        success: create_rw_signal(None),
        error: create_rw_signal(None),
        gate: store_value(gate),
        ui: store_value(config.ui),
        heatmap: store_value(config.heatmap),
    };

    provide_context(state);
}

impl GlobalState {
    pub fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    /// Where a navigation to `route` should go instead, if anywhere
    pub fn redirect_for(&self, route: Route) -> Option<Route> {
        // Subscribe to session changes
        self.user.with(|_| ());
        self.gate.with_value(|gate| gate.redirect_for(route))
    }

    pub fn login(&self, email: &str, password: &str) -> SessionResult<SessionRecord> {
        let mut result = None;
        self.gate.update_value(|gate| result = Some(gate.login(email, password)));

        let record = result
            .unwrap_or_else(|| Err(SessionError::Storage("session gate disposed".to_string())))?;
        self.user.set(Some(record.clone()));
        Ok(record)
    }

    pub fn logout(&self) {
        let mut result = Ok(());
        self.gate.update_value(|gate| result = gate.logout());
        if let Err(e) = result {
            log(&format!("Failed to clear session: {}", e));
        }
        self.user.set(None);
    }

    /// Simulated request latency in milliseconds
    pub fn latency_ms(&self) -> u32 {
        self.ui.with_value(|ui| ui.simulated_latency_ms)
    }

    /// Number of weeks in the activity heatmap
    pub fn heatmap_weeks(&self) -> usize {
        self.heatmap.with_value(|heatmap| heatmap.weeks)
    }

    /// Show a notice (auto-clears after timeout)
    pub fn show_notice(&self, notice: Notice) {
        let (signal, timeout) = match notice.kind {
            NoticeKind::Success => (self.success, self.ui.with_value(|ui| ui.success_toast_ms)),
            NoticeKind::Error => (self.error, self.ui.with_value(|ui| ui.error_toast_ms)),
        };

        signal.set(Some(notice));
        gloo_timers::callback::Timeout::new(timeout, move || {
            signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

/// Log to the browser console
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}
