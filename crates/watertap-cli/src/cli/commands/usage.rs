//! Usage command handler.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use comfy_table::{ContentArrangement, Table};
use tracing::debug;
use watertap_app::AppRuntime;
use watertap_app::events::UiEvent;
use watertap_app::home::UsageState;
use watertap_core::api::{AuthApi, UsageRecord, total_water};

use super::auth::login_session;
use super::password_or_stdin;

pub async fn run(
    api: impl AuthApi,
    email: String,
    password: Option<String>,
    date: NaiveDate,
) -> Result<()> {
    let password = password_or_stdin(password).await?;
    let mut runtime = AppRuntime::new(api);
    login_session(&mut runtime, email, password).await?;

    if runtime.state.home.is_none() {
        bail!("Server issued no session token");
    }
    runtime.dispatch(UiEvent::RequestUsage { date });
    runtime.settle().await;

    let Some(home) = runtime.state.home.as_ref() else {
        bail!("Session expired: the server refused the token");
    };
    match &home.usage {
        UsageState::Loaded { records, .. } => {
            debug!(count = records.len(), %date, "usage records received");
            if records.is_empty() {
                println!("No usage recorded on {date}");
            } else {
                println!("{}", render_table(records));
                println!("Total: {:.2}", total_water(records));
            }
            Ok(())
        }
        UsageState::Failed { message, .. } => bail!("Failed to load usage: {message}"),
        UsageState::Idle | UsageState::Loading { .. } => bail!("Usage request did not complete"),
    }
}

fn render_table(records: &[UsageRecord]) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Session", "Sink", "Sensor", "Amount", "Duration", "Start", "End", "Error",
    ]);

    for record in records {
        table.add_row(vec![
            record.session_id.as_str(),
            record.sink_id.as_str(),
            record.sensor_id.as_str(),
            record.water_amount.as_str(),
            record.duration.as_str(),
            record.start_time.as_str(),
            record.end_time.as_str(),
            if record.is_error() { "yes" } else { "" },
        ]);
    }

    table.to_string()
}
