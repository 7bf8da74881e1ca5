//! Signup feature slice.
//!
//! The signup flow produces the bridge flags; the login screen only reads
//! them through [`observe_signup_bridge`].

mod state;
mod update;

pub use state::{DisplayMessage, SignupBridgeState, SignupState, observe_signup_bridge};
pub use update::{handle_signup_result, submit_signup};
