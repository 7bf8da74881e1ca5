//! Feature slices (state/update per slice).

pub mod auth;
pub mod home;
pub mod nav;
pub mod signup;
