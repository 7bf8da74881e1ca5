use std::sync::Arc;

use tracing::debug;
use watertap_core::api::{AuthApi, Credentials, SignupForm};

use crate::common::TaskId;
use crate::events::UiEvent;

pub async fn login<A: AuthApi>(api: Arc<A>, task: TaskId, credentials: Credentials) -> UiEvent {
    debug!(?task, "login request in flight");
    let result = api.login(&credentials.email, &credentials.password).await;
    UiEvent::LoginCompleted { task, result }
}

pub async fn signup<A: AuthApi>(api: Arc<A>, task: TaskId, form: SignupForm) -> UiEvent {
    let result = api.signup(&form).await;
    UiEvent::SignupCompleted { task, result }
}
