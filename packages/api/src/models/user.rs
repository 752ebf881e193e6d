//! # User model for the signed-in administrator
//!
//! [`UserInfo`] is the client-safe view of a user that crosses the server/client
//! boundary via Dioxus server functions. It is stored as-is in the server session,
//! so it must stay `Serialize + Deserialize`. The dashboard only relies on `id`
//! (for the profile link) and `email` (shown in the profile trigger); `name` is
//! optional and missing from older session payloads.

use serde::{Deserialize, Serialize};

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_name() {
        let user = UserInfo {
            id: "1".to_string(),
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
        };
        assert_eq!(user.display_name(), "Ada");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserInfo {
            id: "1".to_string(),
            email: "ada@example.com".to_string(),
            name: None,
        };
        assert_eq!(user.display_name(), "ada@example.com");
    }

    #[test]
    fn test_session_payload_without_name() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id":"42","email":"ops@example.com"}"#).unwrap();
        assert_eq!(user.id, "42");
        assert_eq!(user.name, None);
    }
}
