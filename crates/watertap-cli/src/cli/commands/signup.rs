//! Signup command handler.

use anyhow::{Result, bail};
use watertap_app::AppRuntime;
use watertap_app::events::UiEvent;
use watertap_core::api::{AuthApi, SignupForm};

use super::password_or_stdin;

pub async fn run(
    api: impl AuthApi,
    name: String,
    email: String,
    password: Option<String>,
) -> Result<()> {
    let password = password_or_stdin(password).await?;
    let mut runtime = AppRuntime::new(api);
    runtime.dispatch(UiEvent::SubmitSignup(SignupForm {
        name,
        email,
        password,
    }));
    runtime.settle().await;

    let signup = &runtime.state.signup;
    if let Some(err) = signup.validation {
        bail!("Invalid signup form: {err}");
    }
    if let Some(err) = &signup.error {
        bail!("{err}");
    }
    match signup.bridge.message() {
        Some(message) => {
            println!("{}", message.text());
            Ok(())
        }
        None => bail!("Signup did not complete"),
    }
}
