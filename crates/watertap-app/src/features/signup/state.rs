use watertap_core::validation::ValidationError;

/// Message shown on the login screen after a signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMessage {
    AccountCreated,
    AccountExists,
}

impl DisplayMessage {
    pub fn text(self) -> &'static str {
        match self {
            DisplayMessage::AccountCreated => "User has been created!",
            DisplayMessage::AccountExists => "User already exists",
        }
    }
}

/// Flags the signup flow leaves for the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignupBridgeState {
    pub user_created: bool,
    pub user_exists: bool,
}

impl SignupBridgeState {
    pub fn message(self) -> Option<DisplayMessage> {
        observe_signup_bridge(self.user_created, self.user_exists)
    }
}

/// Maps the bridge flags to the message the login screen shows.
///
/// Contradictory flags (both set) show nothing.
pub fn observe_signup_bridge(user_created: bool, user_exists: bool) -> Option<DisplayMessage> {
    match (user_created, user_exists) {
        (true, false) => Some(DisplayMessage::AccountCreated),
        (false, true) => Some(DisplayMessage::AccountExists),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct SignupState {
    pub bridge: SignupBridgeState,
    /// Form refused before reaching the server.
    pub validation: Option<ValidationError>,
    /// Server refusal or transport failure of the last attempt.
    pub error: Option<String>,
}
