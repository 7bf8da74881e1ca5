//! Home feature reducer.

use chrono::NaiveDate;
use tracing::{debug, info, warn};
use watertap_core::api::{ApiError, UsageRecord};

use super::state::{HomeState, UsageState};
use crate::common::{TaskId, TaskSeq, Tasks};
use crate::effects::UiEffect;

/// What the top-level reducer must do after a usage completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageResolution {
    Applied,
    Stale,
    /// The server no longer accepts the token; the session must end.
    TokenRejected,
}

pub fn request_usage(
    home: Option<&mut HomeState>,
    tasks: &mut Tasks,
    seq: &mut TaskSeq,
    date: NaiveDate,
) -> Vec<UiEffect> {
    let Some(home) = home else {
        debug!("usage requested without a session");
        return vec![];
    };
    if tasks.usage.is_running() {
        debug!("usage request already in flight");
        return vec![];
    }

    let task = seq.next_id();
    tasks.usage.start(task);
    home.usage = UsageState::Loading { date };

    vec![UiEffect::FetchUsage {
        task,
        token: home.token().clone(),
        date,
    }]
}

pub fn handle_usage_result(
    home: Option<&mut HomeState>,
    tasks: &mut Tasks,
    task: TaskId,
    date: NaiveDate,
    result: Result<Vec<UsageRecord>, ApiError>,
) -> UsageResolution {
    if !tasks.usage.finish_if_active(task) {
        debug!(?task, "dropping stale usage result");
        return UsageResolution::Stale;
    }
    let Some(home) = home else {
        return UsageResolution::Stale;
    };

    match result {
        Ok(records) => {
            info!(%date, count = records.len(), "usage loaded");
            home.usage = UsageState::Loaded { date, records };
            UsageResolution::Applied
        }
        Err(ApiError::Unauthorized) => {
            warn!("session token refused by server");
            UsageResolution::TokenRejected
        }
        Err(err) => {
            warn!(error = %err, "usage request failed");
            home.usage = UsageState::Failed {
                date,
                message: err.to_string(),
            };
            UsageResolution::Applied
        }
    }
}
