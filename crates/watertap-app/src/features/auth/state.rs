//! Auth state types.

use std::fmt;

use watertap_core::validation::ValidationError;

use crate::common::TaskId;

/// Bearer token issued by the server on login.
///
/// `Debug` never prints the value; use [`SessionToken::expose`] where the
/// raw string is needed (request headers, `--print-token`).
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("SessionToken(<empty>)")
        } else {
            f.write_str("SessionToken(<redacted>)")
        }
    }
}

/// Why the last login attempt did not produce a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field was empty; nothing was sent.
    Validation,
    /// The server answered with a non-201 status.
    Auth,
    /// No answer at all (connection refused, timeout, ...).
    Unknown,
}

impl ErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::Validation => "Email and password are required",
            ErrorKind::Auth => "Incorrect username or password",
            ErrorKind::Unknown => "Could not reach the server",
        }
    }
}

/// Login session lifecycle.
///
/// `LoggedOut -> Authenticating -> LoggedIn | Failed`. A failed session can
/// be resubmitted; `LoggedIn` only leaves through logout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    Authenticating {
        task: TaskId,
    },
    LoggedIn {
        token: SessionToken,
    },
    Failed {
        kind: ErrorKind,
        /// HTTP status of the refusal, absent for transport failures.
        status: Option<u16>,
    },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::LoggedIn { .. })
    }

    pub fn is_authenticating(&self) -> bool {
        matches!(self, SessionState::Authenticating { .. })
    }

    pub fn token(&self) -> Option<&SessionToken> {
        match self {
            SessionState::LoggedIn { token } => Some(token),
            _ => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            SessionState::Failed { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Auth slice of the app state.
#[derive(Debug, Default)]
pub struct AuthState {
    pub session: SessionState,
    /// Reason the last submission was refused before reaching the server.
    /// Kept apart from `session` so a refused submission never changes it.
    pub validation: Option<ValidationError>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn token(&self) -> Option<&SessionToken> {
        self.session.token()
    }

    /// Error flag as seen by the login screen.
    ///
    /// A failed server round trip wins over a pending validation note.
    pub fn last_error_kind(&self) -> Option<ErrorKind> {
        self.session.error_kind().or_else(|| {
            self.validation
                .is_some()
                .then_some(ErrorKind::Validation)
        })
    }

    /// Text the login screen shows under the form, if any.
    pub fn error_message(&self) -> Option<String> {
        if let Some(kind) = self.session.error_kind() {
            return Some(kind.message().to_string());
        }
        self.validation.map(|err| {
            let text = err.to_string();
            let mut chars = text.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => text,
            }
        })
    }
}
