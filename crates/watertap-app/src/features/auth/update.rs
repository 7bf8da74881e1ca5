//! Auth feature reducer.
//!
//! Handles login submission, completion processing and logout.

use tracing::{debug, info, warn};
use watertap_core::api::{ApiError, Credentials, LoginOutcome};
use watertap_core::validation;

use super::state::{AuthState, ErrorKind, SessionState, SessionToken};
use crate::common::{TaskId, TaskSeq, Tasks};
use crate::effects::UiEffect;

/// Starts a login attempt.
///
/// Returns no effects when the submission is refused: a login already in
/// flight, an existing session, or an empty field. Only the last case leaves
/// a note (in `auth.validation`); `auth.session` is untouched by all three.
pub fn submit_login(
    auth: &mut AuthState,
    tasks: &mut Tasks,
    seq: &mut TaskSeq,
    email: String,
    password: String,
) -> Vec<UiEffect> {
    if tasks.login.is_running() {
        debug!("login already in flight, ignoring submission");
        return vec![];
    }
    if auth.session.is_authenticated() {
        debug!("already logged in, ignoring submission");
        return vec![];
    }
    if let Err(err) = validation::validate_login(&email, &password) {
        debug!(error = %err, "login form refused");
        auth.validation = Some(err);
        return vec![];
    }

    let task = seq.next_id();
    tasks.login.start(task);
    auth.session = SessionState::Authenticating { task };
    auth.validation = None;
    info!(?task, %email, "login started");

    vec![UiEffect::SpawnLogin {
        task,
        credentials: Credentials::new(email, password),
    }]
}

/// Applies a login completion.
///
/// Returns the token to hand to the home screen when the login produced a
/// usable one. Results of tasks that are no longer active are dropped.
pub fn handle_login_result(
    auth: &mut AuthState,
    tasks: &mut Tasks,
    task: TaskId,
    result: Result<LoginOutcome, ApiError>,
) -> Option<SessionToken> {
    if !tasks.login.finish_if_active(task) {
        debug!(?task, "dropping stale login result");
        return None;
    }

    match result {
        Ok(outcome) if outcome.is_success() => {
            let token = SessionToken::new(outcome.token.unwrap_or_default());
            auth.session = SessionState::LoggedIn {
                token: token.clone(),
            };
            if token.is_empty() {
                warn!("login succeeded without a token, home screen not opened");
                return None;
            }
            info!("logged in");
            Some(token)
        }
        Ok(outcome) => {
            warn!(status = outcome.status_code, "login refused");
            auth.session = SessionState::Failed {
                kind: ErrorKind::Auth,
                status: Some(outcome.status_code),
            };
            None
        }
        Err(err) => {
            warn!(error = %err, "login request failed");
            auth.session = SessionState::Failed {
                kind: ErrorKind::Unknown,
                status: None,
            };
            None
        }
    }
}

/// Ends the session. Any login still in flight is forgotten.
pub fn logout(auth: &mut AuthState, tasks: &mut Tasks) {
    tasks.login.clear();
    auth.session = SessionState::LoggedOut;
    auth.validation = None;
    info!("logged out");
}
