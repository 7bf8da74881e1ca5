//! Application state.
//!
//! One `AppState` lives inside `AppRuntime` for the whole session. Only the
//! reducer in `update.rs` mutates it.

use crate::auth::AuthState;
use crate::common::{TaskSeq, Tasks};
use crate::home::HomeState;
use crate::nav::{Navigator, Route};
use crate::signup::SignupState;

#[derive(Debug, Default)]
pub struct AppState {
    pub should_quit: bool,
    pub auth: AuthState,
    pub signup: SignupState,
    /// Present while logged in with a usable token.
    pub home: Option<HomeState>,
    pub nav: Navigator<Route>,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops everything tied to the session.
    pub(crate) fn end_session(&mut self) {
        crate::auth::logout(&mut self.auth, &mut self.tasks);
        self.tasks.usage.clear();
        self.home = None;
    }
}
