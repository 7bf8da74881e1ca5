use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, warn};
use url::Url;

use super::types::{MessageBody, TokenBody};
use super::{
    ApiError, AuthApi, LOGIN_CREATED, LoginOutcome, SignupForm, SignupOutcome, UsageRecord,
};
use crate::config::Config;

/// Header the server reads the session token from.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// HTTP client for the WaterTap web server.
#[derive(Debug, Clone)]
pub struct WaterTapClient {
    base_url: Url,
    http: reqwest::Client,
}

impl WaterTapClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// Endpoints are resolved relative to the base, so a base with a path
    /// prefix (`https://host/tap`) keeps that prefix.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let parsed = Url::parse(&normalized).map_err(|source| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: parsed,
            http: builder.build()?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(config.effective_base_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|source| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                source,
            })
    }
}

impl AuthApi for WaterTapClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, ApiError> {
        let url = self.endpoint("login")?;
        debug!(%url, "sending login request");

        let response = self
            .http
            .post(url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != LOGIN_CREATED {
            debug!(status, "login refused");
            return Ok(LoginOutcome::rejected(status));
        }

        let token = match response.json::<TokenBody>().await {
            Ok(body) => Some(body.token),
            Err(err) => {
                warn!(error = %err, "login succeeded without a readable token");
                None
            }
        };

        Ok(LoginOutcome {
            status_code: status,
            token,
            error_code: None,
        })
    }

    async fn signup(&self, form: &SignupForm) -> Result<SignupOutcome, ApiError> {
        let url = self.endpoint("signup")?;
        debug!(%url, email = %form.email, "sending signup request");

        let response = self.http.post(url).json(form).send().await?;

        let outcome = match response.status().as_u16() {
            201 => SignupOutcome::Created,
            202 => SignupOutcome::AlreadyExists,
            422 => {
                let message = match response.json::<MessageBody>().await {
                    Ok(body) => body.message,
                    Err(_) => "Invalid signup details".to_string(),
                };
                SignupOutcome::Rejected { message }
            }
            status => SignupOutcome::Unexpected { status },
        };
        Ok(outcome)
    }

    async fn user_data(&self, token: &str, date: NaiveDate) -> Result<Vec<UsageRecord>, ApiError> {
        let mut url = self.endpoint("api/user-data")?;
        url.query_pairs_mut()
            .append_pair("date", &date.format("%Y-%m-%d").to_string());
        debug!(%url, "fetching usage data");

        let response = self
            .http
            .get(url)
            .header(ACCESS_TOKEN_HEADER, token)
            .send()
            .await?;

        match response.status().as_u16() {
            200 => {
                // The server sends JSON without a JSON content type.
                let body = response.text().await?;
                Ok(serde_json::from_str(&body)?)
            }
            401 => Err(ApiError::Unauthorized),
            status => Err(ApiError::Status(status)),
        }
    }
}
