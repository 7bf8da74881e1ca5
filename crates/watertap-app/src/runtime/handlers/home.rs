use std::sync::Arc;

use chrono::NaiveDate;
use watertap_core::api::AuthApi;

use crate::auth::SessionToken;
use crate::common::TaskId;
use crate::events::UiEvent;

pub async fn fetch_usage<A: AuthApi>(
    api: Arc<A>,
    task: TaskId,
    token: SessionToken,
    date: NaiveDate,
) -> UiEvent {
    let result = api.user_data(token.expose(), date).await;
    UiEvent::UsageLoaded { task, date, result }
}
