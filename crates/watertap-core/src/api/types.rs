//! Wire and outcome types for the WaterTap web server.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status the server uses to signal a successful login.
pub const LOGIN_CREATED: u16 = 201;

/// Login credentials. `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of a login call that produced an HTTP status.
///
/// `error_code` carries the status of a non-201 response; the server sends
/// no richer error code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub status_code: u16,
    pub token: Option<String>,
    pub error_code: Option<u16>,
}

impl LoginOutcome {
    pub fn created(token: impl Into<String>) -> Self {
        Self {
            status_code: LOGIN_CREATED,
            token: Some(token.into()),
            error_code: None,
        }
    }

    pub fn rejected(status_code: u16) -> Self {
        Self {
            status_code,
            token: None,
            error_code: Some(status_code),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == LOGIN_CREATED
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenBody {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessageBody {
    pub message: String,
}

/// Signup request body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// How the server answered a signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// 201: account created.
    Created,
    /// 202: an account with this email already exists.
    AlreadyExists,
    /// 422: the server refused the form.
    Rejected { message: String },
    /// Any other status.
    Unexpected { status: u16 },
}

/// One water usage session as reported by `/api/user-data`.
///
/// The server sends every field as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    #[serde(rename = "session ID")]
    pub session_id: String,
    #[serde(rename = "sink ID")]
    pub sink_id: String,
    #[serde(rename = "sensor ID")]
    pub sensor_id: String,
    #[serde(rename = "water amount")]
    pub water_amount: String,
    pub duration: String,
    #[serde(rename = "start time")]
    pub start_time: String,
    #[serde(rename = "end time")]
    pub end_time: String,
    pub date: String,
    #[serde(rename = "is error")]
    pub is_error: String,
}

impl UsageRecord {
    pub fn water_amount(&self) -> Option<f64> {
        self.water_amount.trim().parse().ok()
    }

    /// The server stringifies a Python bool or an int flag.
    pub fn is_error(&self) -> bool {
        matches!(self.is_error.trim(), "True" | "true" | "1")
    }
}

/// Sum of the parseable water amounts, skipping sessions flagged as errors.
pub fn total_water(records: &[UsageRecord]) -> f64 {
    records
        .iter()
        .filter(|r| !r.is_error())
        .filter_map(UsageRecord::water_amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(amount: &str, is_error: &str) -> UsageRecord {
        UsageRecord {
            session_id: "1".to_string(),
            sink_id: "2".to_string(),
            sensor_id: "3".to_string(),
            water_amount: amount.to_string(),
            duration: "12".to_string(),
            start_time: "08:00:00".to_string(),
            end_time: "08:00:12".to_string(),
            date: "04/18/2024".to_string(),
            is_error: is_error.to_string(),
        }
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("gary@example.com", "hunter2");
        let debug = format!("{creds:?}");
        assert!(debug.contains("gary@example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_login_outcome_success_is_201_only() {
        assert!(LoginOutcome::created("abc").is_success());
        assert!(!LoginOutcome::rejected(200).is_success());
        assert!(!LoginOutcome::rejected(401).is_success());
    }

    #[test]
    fn test_usage_record_deserializes_server_keys() {
        let json = r#"{
            "session ID": "7", "sink ID": "1", "sensor ID": "4",
            "water amount": "2.5", "duration": "30",
            "start time": "07:15:00", "end time": "07:15:30",
            "date": "04/18/2024", "is error": "False"
        }"#;
        let record: UsageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.session_id, "7");
        assert_eq!(record.water_amount(), Some(2.5));
        assert!(!record.is_error());
    }

    #[test]
    fn test_total_water_skips_errors_and_garbage() {
        let records = vec![
            record("1.5", "False"),
            record("2.0", "0"),
            record("9.0", "True"),
            record("n/a", "False"),
        ];
        assert!((total_water(&records) - 3.5).abs() < f64::EPSILON);
    }
}
