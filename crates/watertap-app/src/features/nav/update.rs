use tracing::debug;

use super::route::Route;
use super::stack::Navigator;
use crate::events::NavEvent;

pub fn handle_nav_event(nav: &mut Navigator<Route>, event: NavEvent) {
    match event {
        NavEvent::Select(route) => nav.select(route),
        NavEvent::SelectWith(route, modifiers) => nav.select_with(route, modifiers),
        NavEvent::Pop => {
            if nav.pop().is_none() {
                debug!("back at root, nothing to pop");
            }
        }
    }
}
