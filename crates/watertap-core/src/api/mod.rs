//! Client side of the WaterTap web server API.
//!
//! `AuthApi` is the seam the application runtime talks to. `WaterTapClient`
//! implements it over HTTP; tests substitute scripted implementations.

mod client;
mod types;

use std::future::Future;

use chrono::NaiveDate;
pub use client::{ACCESS_TOKEN_HEADER, WaterTapClient};
pub use types::{
    Credentials, LOGIN_CREATED, LoginOutcome, SignupForm, SignupOutcome, UsageRecord, total_water,
};

/// Failure to obtain a usable answer from the server.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid base URL `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server rejected the session token")]
    Unauthorized,
    #[error("server returned status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    InvalidBody(#[from] serde_json::Error),
    /// The task running the request panicked or was cancelled.
    #[error("request interrupted: {0}")]
    Interrupted(String),
}

/// Operations the client needs from the authentication server.
pub trait AuthApi: Send + Sync + 'static {
    /// `POST /login`. Any HTTP status is an `Ok` outcome; only failures that
    /// produce no status are errors.
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<LoginOutcome, ApiError>> + Send;

    /// `POST /signup`.
    fn signup(
        &self,
        form: &SignupForm,
    ) -> impl Future<Output = Result<SignupOutcome, ApiError>> + Send;

    /// `GET /api/user-data` for one day, authorized by the session token.
    fn user_data(
        &self,
        token: &str,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<UsageRecord>, ApiError>> + Send;
}
