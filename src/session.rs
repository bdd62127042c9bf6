//! Authenticated session context.
//!
//! The token and the current user are handed to whatever needs them
//! explicitly; nothing in the crate reads them from ambient storage.

use serde::Deserialize;

/// The logged-in staff session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    token: String,
    user_name: String,
}

#[derive(Deserialize)]
struct StoredUser {
    nombre: Option<String>,
    name: Option<String>,
}

impl SessionContext {
    /// Creates a session from a token and the user's display name.
    pub fn new(token: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_name: user_name.into(),
        }
    }

    /// Creates a session from a token and the user record saved at login.
    ///
    /// The record is JSON with a `nombre` or `name` key; an unreadable
    /// record leaves the user name empty.
    pub fn from_stored_user(token: impl Into<String>, stored_user: &str) -> Self {
        let user_name = serde_json::from_str::<StoredUser>(stored_user)
            .ok()
            .and_then(|u| u.nombre.filter(|n| !n.is_empty()).or(u.name))
            .unwrap_or_default();
        Self::new(token, user_name)
    }

    /// The bearer token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The user's display name, used as the default "attended by" value.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// The `Authorization` header value.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_header() {
        let session = SessionContext::new("abc123", "Ana");
        assert_eq!(session.authorization(), "Bearer abc123");
    }

    #[test]
    fn test_user_name_from_stored_record() {
        let session = SessionContext::from_stored_user("t", r#"{"nombre":"Ana","rol":"admin"}"#);
        assert_eq!(session.user_name(), "Ana");

        let session = SessionContext::from_stored_user("t", r#"{"name":"Luis"}"#);
        assert_eq!(session.user_name(), "Luis");
    }

    #[test]
    fn test_unreadable_stored_record() {
        let session = SessionContext::from_stored_user("t", "not json");
        assert_eq!(session.user_name(), "");
        assert_eq!(session.token(), "t");
    }
}
