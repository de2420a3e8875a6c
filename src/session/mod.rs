//! Session Simulation
//!
//! A simulated login that persists one JSON record and a gate that routes
//! between the login screen and the dashboard based on it:
//!
//! - **record**: `SessionRecord` and role derivation
//! - **store**: `SessionStore` trait with memory and file implementations
//! - **gate**: `SessionGate` state machine and route redirects
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use syllabus_sync::session::{MemoryStore, Role, Route, SessionGate};
//!
//! let mut gate = SessionGate::load(MemoryStore::new(), "Computer Science");
//! assert_eq!(gate.resolve(Route::Index), Route::Login);
//!
//! let user = gate.login("hod@demo.com", "any").unwrap();
//! assert_eq!(user.role, Role::Hod);
//! assert_eq!(gate.resolve(Route::Index), Route::Dashboard);
//! ```

pub mod error;
pub mod gate;
pub mod record;
pub mod store;

pub use error::{SessionError, SessionResult};
pub use gate::{Route, SessionGate, SessionState};
pub use record::{Role, SessionRecord};
pub use store::{FileStore, MemoryStore, SessionStore};

/// localStorage key holding the session record
pub const DEFAULT_STORAGE_KEY: &str = "syllabusSync_user";
