//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod index;
pub mod login;

pub use dashboard::Dashboard;
pub use index::Index;
pub use login::Login;
