//! Session management for the StockPilot portal
//!
//! The session manager is the only component that mutates authentication
//! state: it performs the login round-trip, persists the resulting session,
//! and republishes it to synchronous readers (route guards, navigation).
//!
//! Overlapping logins follow a newest-wins policy: each issued login takes a
//! generation number, and a completing login commits only if no newer login
//! (or logout) happened since. Superseded results are discarded and reported
//! as [`Error::Superseded`].

use crate::config::Config;
use crate::error::{Error, Result};
use crate::session::Session;
use crate::store::{CredentialStore, FileStore};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Login request sent to the backend
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Login response from the backend
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub roles: Vec<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Registration request sent to the backend
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Owner of the client's authentication state
///
/// Constructed once at startup and shared by reference with every consumer;
/// the in-memory session is rehydrated from the credential store so a
/// restarted client stays logged in.
pub struct SessionManager {
    config: Config,
    http_client: reqwest::Client,
    store: Arc<dyn CredentialStore>,
    current: RwLock<Session>,
    /// Generation of the most recently issued login or logout
    login_generation: AtomicU64,
    /// Serializes the supersession check, durable save, and republish
    commit: Mutex<()>,
}

impl SessionManager {
    /// Create a session manager with a file-backed credential store
    pub fn new(config: Config) -> Result<Self> {
        let store = Arc::new(FileStore::new(&config.storage_dir)?);
        Self::with_store(config, store)
    }

    /// Create a session manager over a caller-provided credential store
    pub fn with_store(config: Config, store: Arc<dyn CredentialStore>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        let initial = store.load();
        if initial.is_authenticated() {
            debug!(username = ?initial.username, "Rehydrated persisted session");
        }

        Ok(Self {
            config,
            http_client,
            store,
            current: RwLock::new(initial),
            login_generation: AtomicU64::new(0),
            commit: Mutex::new(()),
        })
    }

    /// Authenticate against the backend and publish the resulting session
    ///
    /// On success the durable copy is written before the in-memory session is
    /// republished, so readers never observe a session without a matching
    /// durable copy. On any failure the session is left untouched. Returns
    /// the role set so the caller can decide where to navigate.
    pub async fn login(&self, username: &str, password: &str) -> Result<BTreeSet<String>> {
        let generation = self.login_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let url = format!("{}{}", self.config.base_url, self.config.login_path);

        let response = self
            .http_client
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|e| Error::Authentication(format!("login request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Authentication(format!(
                "login rejected with status {}: {}",
                status, body
            )));
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| Error::Authentication(format!("malformed login response: {}", e)))?;

        if body.token.is_empty() || body.roles.is_empty() {
            return Err(Error::Authentication(
                "login response missing token or roles".to_string(),
            ));
        }

        let session = Session {
            token: body.token,
            roles: body.roles.into_iter().collect(),
            username: body.username,
        };

        let _commit = self.commit.lock();
        if self.login_generation.load(Ordering::SeqCst) != generation {
            warn!(username, "Discarding superseded login response");
            return Err(Error::Superseded);
        }
        self.store.save(&session)?;
        let roles = session.roles.clone();
        *self.current.write() = session;
        info!(username, role_count = roles.len(), "Login succeeded");

        Ok(roles)
    }

    /// Register a new portal account; touches no session state
    pub async fn register(&self, registration: &Registration) -> Result<()> {
        let url = format!("{}{}", self.config.base_url, self.config.register_path);

        let response = self
            .http_client
            .post(&url)
            .json(registration)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::from_status(status, body));
        }

        debug!(username = %registration.username, "Registration accepted");
        Ok(())
    }

    /// Clear the session in memory and in durable storage; never fails
    ///
    /// Also supersedes any login still in flight, so a stale response cannot
    /// resurrect the session after the user logged out.
    pub fn logout(&self) {
        let _commit = self.commit.lock();
        self.login_generation.fetch_add(1, Ordering::SeqCst);
        *self.current.write() = Session::default();
        self.store.clear();
        info!("Logged out");
    }

    /// Synchronous snapshot of the current session; no network or disk access
    pub fn current_session(&self) -> Session {
        self.current.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_serialization() {
        let req = LoginRequest {
            username: "alice",
            password: "secret",
        };
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["username"], "alice");
        assert_eq!(json["password"], "secret");
    }

    #[test]
    fn test_login_response_deserialization() {
        let json = r#"{"token":"abc123","roles":["ADMIN","USER"],"username":"alice"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.token, "abc123");
        assert_eq!(response.roles, vec!["ADMIN", "USER"]);
        assert_eq!(response.username.as_deref(), Some("alice"));
    }

    #[test]
    fn test_login_response_username_is_optional() {
        let json = r#"{"token":"abc123","roles":["USER"]}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();

        assert!(response.username.is_none());
    }

    #[test]
    fn test_invalid_user_agent_is_a_config_error() {
        let config = Config::new("http://localhost:8080").with_user_agent("bad\nagent");

        let result = SessionManager::with_store(config, Arc::new(crate::store::MemoryStore::new()));

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_registration_uses_camel_case_on_the_wire() {
        let registration = Registration {
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(&registration).unwrap();

        assert_eq!(json["firstName"], "Alice");
        assert_eq!(json["lastName"], "Smith");
        assert!(json.get("first_name").is_none());
    }
}
