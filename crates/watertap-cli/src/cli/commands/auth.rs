//! Login command handler.

use anyhow::{Result, bail};
use tracing::info;
use watertap_app::AppRuntime;
use watertap_app::auth::SessionState;
use watertap_app::events::UiEvent;
use watertap_app::state::AppState;
use watertap_core::api::AuthApi;

use super::password_or_stdin;

pub async fn login(
    api: impl AuthApi,
    email: String,
    password: Option<String>,
    print_token: bool,
) -> Result<()> {
    let password = password_or_stdin(password).await?;
    let mut runtime = AppRuntime::new(api);
    login_session(&mut runtime, email, password).await?;

    println!("Logged in");
    if print_token && let Some(token) = runtime.state.auth.token() {
        println!("{}", token.expose());
    }
    Ok(())
}

/// Runs one login through the runtime and fails unless it produced a session.
pub(crate) async fn login_session<A: AuthApi>(
    runtime: &mut AppRuntime<A>,
    email: String,
    password: String,
) -> Result<()> {
    info!(%email, "logging in");
    runtime.dispatch(UiEvent::SubmitLogin { email, password });
    runtime.settle().await;
    ensure_logged_in(&runtime.state)
}

fn ensure_logged_in(state: &AppState) -> Result<()> {
    match &state.auth.session {
        SessionState::LoggedIn { .. } => Ok(()),
        SessionState::Failed {
            kind,
            status: Some(code),
        } => bail!("{} (status {code})", kind.message()),
        SessionState::Failed { kind, status: None } => bail!("{}", kind.message()),
        SessionState::LoggedOut | SessionState::Authenticating { .. } => {
            match state.auth.error_message() {
                Some(message) => bail!("{message}"),
                None => bail!("Login did not complete"),
            }
        }
    }
}
