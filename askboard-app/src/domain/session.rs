use serde::{Deserialize, Serialize};

/// Key under which the session context is stored in the server-side session.
pub const SESSION_KEY: &str = "askboard.session";

/// Identity and credential handed over by the external auth provider.
///
/// Lives only on the server; views receive the display name, never the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub display_name: String,
    pub token: String,
}

impl SessionContext {
    pub fn new(display_name: String, token: String) -> Self {
        Self {
            display_name,
            token,
        }
    }
}
