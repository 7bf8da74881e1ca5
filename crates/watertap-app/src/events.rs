//! Events consumed by the reducer.
//!
//! User input and async completions share this type. Completions are sent
//! by effect handlers into the runtime inbox and re-enter the reducer on the
//! runtime's task, which is the only place state is mutated.

use chrono::NaiveDate;
use watertap_core::api::{ApiError, LoginOutcome, SignupForm, SignupOutcome, UsageRecord};

use crate::common::TaskId;
use crate::nav::{NavModifiers, Route};

#[derive(Debug)]
pub enum UiEvent {
    /// User pressed "Login".
    SubmitLogin { email: String, password: String },
    /// Login endpoint answered (or failed to).
    LoginCompleted {
        task: TaskId,
        result: Result<LoginOutcome, ApiError>,
    },
    /// Ends the session.
    Logout,

    /// User submitted the signup form.
    SubmitSignup(SignupForm),
    SignupCompleted {
        task: TaskId,
        result: Result<SignupOutcome, ApiError>,
    },
    /// Clears the transient signup message on the login screen.
    DismissSignupMessage,

    /// Home screen asks for one day of usage data.
    RequestUsage { date: NaiveDate },
    UsageLoaded {
        task: TaskId,
        date: NaiveDate,
        result: Result<Vec<UsageRecord>, ApiError>,
    },

    Nav(NavEvent),

    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Select(Route),
    SelectWith(Route, NavModifiers),
    Pop,
}
