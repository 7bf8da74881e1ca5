//! Signup feature reducer.

use tracing::{debug, info, warn};
use watertap_core::api::{ApiError, SignupForm, SignupOutcome};
use watertap_core::validation;

use super::state::{SignupBridgeState, SignupState};
use crate::common::{TaskId, TaskSeq, Tasks};
use crate::effects::UiEffect;

pub fn submit_signup(
    signup: &mut SignupState,
    tasks: &mut Tasks,
    seq: &mut TaskSeq,
    form: SignupForm,
) -> Vec<UiEffect> {
    if tasks.signup.is_running() {
        debug!("signup already in flight, ignoring submission");
        return vec![];
    }
    if let Err(err) = validation::validate_signup(&form) {
        debug!(error = %err, "signup form refused");
        signup.validation = Some(err);
        return vec![];
    }

    let task = seq.next_id();
    tasks.signup.start(task);
    signup.bridge = SignupBridgeState::default();
    signup.validation = None;
    signup.error = None;
    info!(?task, email = %form.email, "signup started");

    vec![UiEffect::SpawnSignup { task, form }]
}

pub fn handle_signup_result(
    signup: &mut SignupState,
    tasks: &mut Tasks,
    task: TaskId,
    result: Result<SignupOutcome, ApiError>,
) {
    if !tasks.signup.finish_if_active(task) {
        debug!(?task, "dropping stale signup result");
        return;
    }

    signup.bridge = SignupBridgeState::default();
    match result {
        Ok(SignupOutcome::Created) => {
            info!("account created");
            signup.bridge.user_created = true;
        }
        Ok(SignupOutcome::AlreadyExists) => {
            info!("account already exists");
            signup.bridge.user_exists = true;
        }
        Ok(SignupOutcome::Rejected { message }) => {
            warn!(%message, "signup refused");
            signup.error = Some(message);
        }
        Ok(SignupOutcome::Unexpected { status }) => {
            warn!(status, "unexpected signup status");
            signup.error = Some(format!("Signup failed (status {status})"));
        }
        Err(err) => {
            warn!(error = %err, "signup request failed");
            signup.error = Some(format!("Signup failed: {err}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use watertap_core::validation::{PasswordRule, ValidationError};

    use super::*;
    use crate::signup::DisplayMessage;

    fn form(password: &str) -> SignupForm {
        SignupForm {
            name: "Gary".to_string(),
            email: "gary@example.com".to_string(),
            password: password.to_string(),
        }
    }

    fn start(signup: &mut SignupState, tasks: &mut Tasks, seq: &mut TaskSeq) -> TaskId {
        match submit_signup(signup, tasks, seq, form("Str0ng_pw")).as_slice() {
            [UiEffect::SpawnSignup { task, .. }] => *task,
            other => panic!("expected SpawnSignup, got {other:?}"),
        }
    }

    #[test]
    fn test_weak_password_blocks_call() {
        let mut signup = SignupState::default();
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();

        let effects = submit_signup(&mut signup, &mut tasks, &mut seq, form("weak"));

        assert!(effects.is_empty());
        assert!(!tasks.signup.is_running());
        assert_eq!(
            signup.validation,
            Some(ValidationError::WeakPassword(PasswordRule::TooShort))
        );
    }

    #[test]
    fn test_created_sets_bridge() {
        let mut signup = SignupState::default();
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();
        let task = start(&mut signup, &mut tasks, &mut seq);

        handle_signup_result(&mut signup, &mut tasks, task, Ok(SignupOutcome::Created));

        assert_eq!(signup.bridge.message(), Some(DisplayMessage::AccountCreated));
        assert_eq!(signup.error, None);
    }

    #[test]
    fn test_exists_sets_bridge() {
        let mut signup = SignupState::default();
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();
        let task = start(&mut signup, &mut tasks, &mut seq);

        handle_signup_result(
            &mut signup,
            &mut tasks,
            task,
            Ok(SignupOutcome::AlreadyExists),
        );

        assert_eq!(signup.bridge.message(), Some(DisplayMessage::AccountExists));
    }

    #[test]
    fn test_rejection_clears_bridge_and_keeps_message() {
        let mut signup = SignupState::default();
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();
        let task = start(&mut signup, &mut tasks, &mut seq);
        signup.bridge = SignupBridgeState {
            user_created: true,
            user_exists: true,
        };

        handle_signup_result(
            &mut signup,
            &mut tasks,
            task,
            Ok(SignupOutcome::Rejected {
                message: "Invalid email".to_string(),
            }),
        );

        assert_eq!(signup.bridge.message(), None);
        assert_eq!(signup.error.as_deref(), Some("Invalid email"));
    }

    #[test]
    fn test_one_signup_in_flight() {
        let mut signup = SignupState::default();
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();
        start(&mut signup, &mut tasks, &mut seq);

        let effects = submit_signup(&mut signup, &mut tasks, &mut seq, form("Str0ng_pw"));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_stale_signup_result_is_dropped() {
        let mut signup = SignupState::default();
        let mut tasks = Tasks::default();

        handle_signup_result(&mut signup, &mut tasks, TaskId(9), Ok(SignupOutcome::Created));

        assert_eq!(signup.bridge, SignupBridgeState::default());
    }
}
