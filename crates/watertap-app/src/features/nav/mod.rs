//! Typed navigation stack.
//!
//! ## Module Structure
//!
//! - `route.rs`: `Routable` seam plus the app's `Route`/`Screen` pair
//! - `stack.rs`: `Navigator`, a push/pop stack that never loses its root
//! - `update.rs`: applies `NavEvent`s

mod route;
mod stack;
mod update;

pub use route::{NavModifiers, Routable, Route, Screen, UnknownRoute};
pub use stack::{Entry, Navigator};
pub use update::handle_nav_event;
