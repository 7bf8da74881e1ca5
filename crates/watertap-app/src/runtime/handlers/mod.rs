//! Effect handlers for the app runtime.
//!
//! Handlers are pure async functions that return `UiEvent`. They perform the
//! server call and never touch `AppState`; the runtime spawns them and feeds
//! the returned event back through the inbox.

pub mod auth;
pub mod home;

pub use auth::*;
pub use home::*;
