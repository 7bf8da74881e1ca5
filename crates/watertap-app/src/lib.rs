//! WaterTap client application core.
//!
//! Elm-style: `state` is mutated only by the reducer in `update`, which turns
//! `events` into `effects`; `runtime` executes the effects and feeds their
//! results back as events.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod runtime;
pub mod state;
pub mod summary;
pub mod update;

pub use features::{auth, home, nav, signup};
pub use runtime::AppRuntime;
