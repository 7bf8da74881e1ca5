//! Login session feature slice.
//!
//! ## Module Structure
//!
//! - `state.rs`: `SessionState` machine, `AuthState` and the session token
//! - `update.rs`: login submission, completion handling and logout

mod state;
mod update;

pub use state::{AuthState, ErrorKind, SessionState, SessionToken};
pub use update::{handle_login_result, logout, submit_login};
