//! Reducer: `(state, event) -> effects`.
//!
//! Every state change goes through [`update`]. It performs no I/O; anything
//! that talks to the server comes back as a [`UiEffect`] for the runtime.

use tracing::debug;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::home::{HomeState, UsageResolution};
use crate::signup::SignupBridgeState;
use crate::state::AppState;
use crate::{auth, home, nav, signup};

pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::SubmitLogin { email, password } => auth::submit_login(
            &mut app.auth,
            &mut app.tasks,
            &mut app.task_seq,
            email,
            password,
        ),
        UiEvent::LoginCompleted { task, result } => {
            if let Some(token) =
                auth::handle_login_result(&mut app.auth, &mut app.tasks, task, result)
            {
                app.home = Some(HomeState::new(token));
            }
            vec![]
        }
        UiEvent::Logout => {
            app.end_session();
            vec![]
        }
        UiEvent::SubmitSignup(form) => {
            signup::submit_signup(&mut app.signup, &mut app.tasks, &mut app.task_seq, form)
        }
        UiEvent::SignupCompleted { task, result } => {
            signup::handle_signup_result(&mut app.signup, &mut app.tasks, task, result);
            vec![]
        }
        UiEvent::DismissSignupMessage => {
            app.signup.bridge = SignupBridgeState::default();
            vec![]
        }
        UiEvent::RequestUsage { date } => {
            home::request_usage(app.home.as_mut(), &mut app.tasks, &mut app.task_seq, date)
        }
        UiEvent::UsageLoaded { task, date, result } => {
            let resolution =
                home::handle_usage_result(app.home.as_mut(), &mut app.tasks, task, date, result);
            if resolution == UsageResolution::TokenRejected {
                app.end_session();
            }
            vec![]
        }
        UiEvent::Nav(event) => {
            nav::handle_nav_event(&mut app.nav, event);
            vec![]
        }
        UiEvent::Quit => {
            debug!("quit requested");
            vec![UiEffect::Quit]
        }
    }
}
