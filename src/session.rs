//! The authenticated session model

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Role identifier for standard portal users
pub const ROLE_USER: &str = "USER";

/// Role identifier for administrators
pub const ROLE_ADMIN: &str = "ADMIN";

/// The authenticated identity and role set for the current client.
///
/// A session is either fully populated (non-empty token and at least one
/// role) or fully empty; no partial state is valid at rest. `Default` is the
/// empty, unauthenticated session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential, empty when unauthenticated
    #[serde(default)]
    pub token: String,

    /// Assigned roles, empty when unauthenticated
    #[serde(default)]
    pub roles: BTreeSet<String>,

    /// Display identity, if the backend provided one
    #[serde(default)]
    pub username: Option<String>,
}

impl Session {
    /// True iff both the token and the role set are populated
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty() && !self.roles.is_empty()
    }

    /// Check whether the session carries the given role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn test_default_session_is_unauthenticated() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.token.is_empty());
        assert!(session.roles.is_empty());
    }

    #[test]
    fn test_token_without_roles_is_unauthenticated() {
        let session = Session {
            token: "abc123".to_string(),
            roles: BTreeSet::new(),
            username: None,
        };
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_roles_without_token_is_unauthenticated() {
        let session = Session {
            token: String::new(),
            roles: roles(&[ROLE_USER]),
            username: None,
        };
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_populated_session_is_authenticated() {
        let session = Session {
            token: "abc123".to_string(),
            roles: roles(&[ROLE_USER, ROLE_ADMIN]),
            username: Some("alice".to_string()),
        };
        assert!(session.is_authenticated());
        assert!(session.has_role(ROLE_ADMIN));
        assert!(!session.has_role("AUDITOR"));
    }
}
