//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct state mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

use chrono::NaiveDate;
use watertap_core::api::{Credentials, SignupForm};

use crate::auth::SessionToken;
use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Stop the application.
    Quit,

    /// Call the login endpoint; the result comes back as `LoginCompleted`.
    SpawnLogin {
        task: TaskId,
        credentials: Credentials,
    },

    /// Call the signup endpoint; the result comes back as `SignupCompleted`.
    SpawnSignup { task: TaskId, form: SignupForm },

    /// Fetch one day of usage data with the session token.
    FetchUsage {
        task: TaskId,
        token: SessionToken,
        date: NaiveDate,
    },
}
