//! Session gate
//!
//! Two states, `Anonymous` and `Authenticated`. The initial state is read
//! from the store at load time; login and logout are the only transitions.
//! Route guarding is derived from the current state.

use super::error::SessionResult;
use super::record::SessionRecord;
use super::store::SessionStore;

/// Client-side routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Index,
    Login,
    Dashboard,
    NotFound,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Index => "/",
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::NotFound => "/404",
        }
    }

    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Index,
            "/login" => Route::Login,
            "/dashboard" => Route::Dashboard,
            _ => Route::NotFound,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated(SessionRecord),
}

/// Session state machine over a store
pub struct SessionGate<S: SessionStore> {
    store: S,
    state: SessionState,
    department: String,
}

impl<S: SessionStore> SessionGate<S> {
    /// Restore the session from the store.
    ///
    /// A record that fails to parse is cleared and the gate starts
    /// anonymous. A store read failure also starts anonymous.
    pub fn load(store: S, department: impl Into<String>) -> Self {
        let state = match store.load() {
            Ok(Some(raw)) => match SessionRecord::from_json(&raw) {
                Ok(record) => SessionState::Authenticated(record),
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding malformed session record");
                    if let Err(e) = store.clear() {
                        tracing::warn!(error = %e, "Failed to clear malformed session record");
                    }
                    SessionState::Anonymous
                }
            },
            Ok(None) => SessionState::Anonymous,
            Err(e) => {
                tracing::warn!(error = %e, "Session store unreadable, starting anonymous");
                SessionState::Anonymous
            }
        };

        Self {
            store,
            state,
            department: department.into(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&SessionRecord> {
        match &self.state {
            SessionState::Authenticated(record) => Some(record),
            SessionState::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// anonymous -> authenticated. Also replaces an existing session.
    pub fn login(&mut self, email: &str, password: &str) -> SessionResult<SessionRecord> {
        let record = match SessionRecord::authenticate(email, password, &self.department) {
            Ok(record) => record,
            Err(e) => {
                tracing::info!("Login rejected: {}", e);
                return Err(e);
            }
        };

        self.store.save(&record.to_json()?)?;
        tracing::info!(email = %record.email, role = %record.role, "Logged in");

        self.state = SessionState::Authenticated(record.clone());
        Ok(record)
    }

    /// authenticated -> anonymous, clearing the stored record.
    ///
    /// The gate is anonymous afterwards even when clearing the store fails;
    /// the store error is still returned.
    pub fn logout(&mut self) -> SessionResult<()> {
        let cleared = self.store.clear();
        if let SessionState::Authenticated(record) = &self.state {
            tracing::info!(email = %record.email, "Logged out");
        }
        self.state = SessionState::Anonymous;
        cleared
    }

    /// Where a navigation to `route` should be redirected, if anywhere
    pub fn redirect_for(&self, route: Route) -> Option<Route> {
        match (route, self.is_authenticated()) {
            (Route::Index, true) => Some(Route::Dashboard),
            (Route::Index, false) => Some(Route::Login),
            (Route::Dashboard, false) => Some(Route::Login),
            _ => None,
        }
    }

    /// Final route after following redirects
    pub fn resolve(&self, route: Route) -> Route {
        let mut current = route;
        while let Some(next) = self.redirect_for(current) {
            current = next;
        }
        current
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::error::SessionError;
    use crate::session::record::Role;
    use crate::session::store::MemoryStore;

    const DEPT: &str = "Computer Science";

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::from_path("/"), Route::Index);
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
        assert_eq!(Route::Dashboard.path(), "/dashboard");
    }

    #[test]
    fn test_starts_anonymous_without_record() {
        let gate = SessionGate::load(MemoryStore::new(), DEPT);
        assert_eq!(gate.state(), &SessionState::Anonymous);
        assert_eq!(gate.resolve(Route::Index), Route::Login);
        assert_eq!(gate.resolve(Route::Dashboard), Route::Login);
    }

    #[test]
    fn test_login_persists_record() {
        let store = MemoryStore::new();
        let mut gate = SessionGate::load(&store, DEPT);

        let record = gate.login("x@x.com", "y").unwrap();
        assert_eq!(record.role, Role::Faculty);

        let raw = store.load().unwrap().unwrap();
        let stored = SessionRecord::from_json(&raw).unwrap();
        assert_eq!(stored.email, "x@x.com");
        assert_eq!(gate.resolve(Route::Index), Route::Dashboard);
    }

    #[test]
    fn test_rejected_login_stays_anonymous() {
        let store = MemoryStore::new();
        let mut gate = SessionGate::load(&store, DEPT);

        assert!(matches!(gate.login("x@x.com", ""), Err(SessionError::EmptyCredentials)));
        assert!(!gate.is_authenticated());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_restores_existing_record() {
        let record = SessionRecord::authenticate("hod@x.com", "pw", DEPT).unwrap();
        let store = MemoryStore::with_record(record.to_json().unwrap());

        let gate = SessionGate::load(store, DEPT);
        assert_eq!(gate.current_user().map(|r| r.role), Some(Role::Hod));
        assert_eq!(gate.redirect_for(Route::Dashboard), None);
    }

    #[test]
    fn test_logout_clears_and_redirects() {
        let store = MemoryStore::new();
        {
            let mut gate = SessionGate::load(&store, DEPT);
            gate.login("x@x.com", "y").unwrap();
            gate.logout().unwrap();
            assert!(!gate.is_authenticated());
        }

        assert_eq!(store.load().unwrap(), None);
        let reloaded = SessionGate::load(&store, DEPT);
        assert_eq!(reloaded.resolve(Route::Dashboard), Route::Login);
    }

    /// Store that accepts writes but refuses to clear
    #[derive(Default)]
    struct StuckStore(MemoryStore);

    impl SessionStore for StuckStore {
        fn load(&self) -> SessionResult<Option<String>> {
            self.0.load()
        }

        fn save(&self, raw: &str) -> SessionResult<()> {
            self.0.save(raw)
        }

        fn clear(&self) -> SessionResult<()> {
            Err(SessionError::Storage("clear refused".to_string()))
        }
    }

    #[test]
    fn test_logout_is_anonymous_even_if_clear_fails() {
        let mut gate = SessionGate::load(StuckStore::default(), DEPT);
        gate.login("x@x.com", "y").unwrap();

        assert!(matches!(gate.logout(), Err(SessionError::Storage(_))));
        assert!(!gate.is_authenticated());
        assert_eq!(gate.redirect_for(Route::Dashboard), Some(Route::Login));
    }

    #[test]
    fn test_malformed_record_is_cleared() {
        let store = MemoryStore::with_record("{not json");
        let gate = SessionGate::load(&store, DEPT);

        assert_eq!(gate.state(), &SessionState::Anonymous);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_login_page_is_never_redirected() {
        let mut gate = SessionGate::load(MemoryStore::new(), DEPT);
        assert_eq!(gate.redirect_for(Route::Login), None);
        gate.login("a@b.c", "d").unwrap();
        assert_eq!(gate.redirect_for(Route::Login), None);
        assert_eq!(gate.redirect_for(Route::NotFound), None);
    }
}
