//! Nav command handler.

use anyhow::{Context, Result};
use tracing::debug;
use watertap_app::events::{NavEvent, UiEvent};
use watertap_app::nav::Route;
use watertap_app::state::AppState;
use watertap_app::{summary, update};

pub fn parse_step(step: &str) -> Result<NavEvent> {
    if step.eq_ignore_ascii_case("back") {
        return Ok(NavEvent::Pop);
    }
    let route: Route = step
        .parse()
        .with_context(|| format!("invalid step `{step}`"))?;
    Ok(NavEvent::Select(route))
}

pub fn run(steps: &[String]) -> Result<()> {
    let events = steps
        .iter()
        .map(|step| parse_step(step))
        .collect::<Result<Vec<_>>>()?;

    debug!(steps = events.len(), "replaying navigation steps");
    let mut state = AppState::new();
    for event in events {
        update::update(&mut state, UiEvent::Nav(event));
    }

    println!("depth: {}", state.nav.len());
    println!("{}", summary::nav_line(&state));
    Ok(())
}
