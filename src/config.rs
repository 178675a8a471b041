//! Session core configuration

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the StockPilot session core
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the StockPilot backend
    pub base_url: String,

    /// Path of the login endpoint
    pub login_path: String,

    /// Path of the registration endpoint
    pub register_path: String,

    /// Directory holding the persisted session document
    pub storage_dir: PathBuf,

    /// Request timeout
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,
}

impl Config {
    /// Create a new configuration with the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            login_path: "/auth/login".to_string(),
            register_path: "/auth/register".to_string(),
            storage_dir: PathBuf::from(".stockpilot"),
            timeout: Duration::from_secs(30),
            user_agent: format!("StockPilot-Session-Rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set a custom login endpoint path
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Set a custom registration endpoint path
    pub fn with_register_path(mut self, path: impl Into<String>) -> Self {
        self.register_path = path.into();
        self
    }

    /// Set the directory for the persisted session document
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set custom user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
