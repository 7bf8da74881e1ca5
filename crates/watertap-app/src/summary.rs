//! Plain-text snapshot of the app state, for line-oriented front ends.

use std::fmt::Write as _;

use crate::auth::SessionState;
use crate::home::UsageState;
use crate::state::AppState;

pub fn session_line(app: &AppState) -> String {
    match &app.auth.session {
        SessionState::LoggedOut => "session: logged out".to_string(),
        SessionState::Authenticating { .. } => "session: authenticating".to_string(),
        SessionState::LoggedIn { .. } => "session: logged in".to_string(),
        SessionState::Failed { status, .. } => match status {
            Some(status) => format!("session: login failed (status {status})"),
            None => "session: login failed".to_string(),
        },
    }
}

pub fn nav_line(app: &AppState) -> String {
    let path = app
        .nav
        .entries()
        .map(|entry| entry.screen.title())
        .collect::<Vec<_>>()
        .join(" > ");
    let top = app.nav.top().screen;
    let back = if app.nav.back_visible() {
        "shown"
    } else {
        "hidden"
    };
    format!("nav: {path} | {} | back {back}", top.content())
}

fn usage_line(usage: &UsageState) -> Option<String> {
    match usage {
        UsageState::Idle => None,
        UsageState::Loading { date } => Some(format!("usage: loading {date}")),
        UsageState::Loaded { date, records } => Some(format!(
            "usage: {} session(s) on {date}, {:.2} total",
            records.len(),
            watertap_core::api::total_water(records)
        )),
        UsageState::Failed { date, message } => {
            Some(format!("usage: failed for {date}: {message}"))
        }
    }
}

/// Multi-line status block: session, messages, home and navigation.
pub fn status_text(app: &AppState) -> String {
    let mut out = session_line(app);
    if let Some(message) = app.auth.error_message() {
        let _ = write!(out, "\nerror: {message}");
    }
    if let Some(message) = app.signup.bridge.message() {
        let _ = write!(out, "\nsignup: {}", message.text());
    }
    if let Some(err) = &app.signup.validation {
        let _ = write!(out, "\nsignup: {err}");
    }
    if let Some(err) = &app.signup.error {
        let _ = write!(out, "\nsignup: {err}");
    }
    if let Some(line) = app.home.as_ref().and_then(|home| usage_line(&home.usage)) {
        out.push('\n');
        out.push_str(&line);
    }
    out.push('\n');
    out.push_str(&nav_line(app));
    out
}
