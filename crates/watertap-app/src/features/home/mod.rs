//! Home screen feature slice.
//!
//! Exists only while a session token is held. Usage data for one day is
//! fetched on request; a refused token ends the session.

mod state;
mod update;

pub use state::{HomeState, UsageState};
pub use update::{UsageResolution, handle_usage_result, request_usage};
