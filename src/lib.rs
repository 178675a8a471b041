//! # StockPilot Session Core for Rust
//!
//! Client-side session core for the StockPilot inventory portal: login and
//! registration against the platform backend, durable credential storage
//! across restarts, role-based route-guard decisions, and role-driven
//! navigation construction.
//!
//! ## Features
//!
//! - **Session Manager**: the single owner of authentication state, with
//!   login/logout transitions and a synchronous view of the current session
//! - **Credential Store**: atomic JSON persistence that degrades corrupt or
//!   partial data to "logged out" instead of failing
//! - **Authorization Gate**: a pure decision function consulted before
//!   rendering any role-restricted view
//! - **Navigation Builder**: fixed common/user/admin menu blocks assembled
//!   from the current role set
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stockpilot_session::{Config, SessionManager};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new("https://api.stockpilot.example")
//!         .with_storage_dir("/var/lib/stockpilot");
//!
//!     let manager = SessionManager::new(config)?;
//!
//!     let roles = manager.login("alice", "secret").await?;
//!     println!("Logged in with roles: {:?}", roles);
//!
//!     let entries = stockpilot_session::nav::build(&manager.current_session().roles);
//!     println!("{} navigation entries visible", entries.len());
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod authz;
pub mod config;
pub mod error;
pub mod nav;
pub mod session;
pub mod store;

// Re-export main types
pub use auth::{LoginResponse, Registration, SessionManager};
pub use authz::{decide, Decision};
pub use config::Config;
pub use error::{Error, Result};
pub use nav::NavEntry;
pub use session::{Session, ROLE_ADMIN, ROLE_USER};
pub use store::{CredentialStore, FileStore, MemoryStore};
