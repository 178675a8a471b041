//! Durable credential storage
//!
//! Persists the session as a single JSON document so a restarted client picks
//! up where it left off. Corrupt or partial durable data degrades to the
//! empty session instead of surfacing an error to the caller.

use crate::error::Result;
use crate::session::Session;
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Durable persistence for the current session
pub trait CredentialStore: Send + Sync {
    /// Read the persisted session; any anomaly yields the empty session
    fn load(&self) -> Session;

    /// Persist the session; no partial write is observable to other readers
    fn save(&self, session: &Session) -> Result<()>;

    /// Remove the persisted session; absorbs failures
    fn clear(&self);
}

/// File-backed credential store
///
/// Keeps one `session.json` document in the configured data directory. Saves
/// go through a temp file and rename so a reader never sees a torn write.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given data directory, creating it if needed
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        fs::create_dir_all(data_dir.as_ref())?;
        Ok(Self {
            path: data_dir.as_ref().join("session.json"),
        })
    }
}

impl CredentialStore for FileStore {
    fn load(&self) -> Session {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Session::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read session file, treating as logged out");
                return Session::default();
            }
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if session.is_authenticated() => session,
            Ok(session) => {
                if !session.token.is_empty() || !session.roles.is_empty() {
                    warn!("Partially populated session on disk, treating as logged out");
                }
                Session::default()
            }
            Err(e) => {
                warn!(error = %e, "Malformed session file, treating as logged out");
                Session::default()
            }
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        let body = serde_json::to_vec(session)?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, &body)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!(path = %self.path.display(), "Saved session");
        Ok(())
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Cleared persisted session"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(error = %e, "Failed to remove session file"),
        }
    }
}

/// In-process credential store for tests and embedders without disk persistence
#[derive(Default)]
pub struct MemoryStore {
    session: Mutex<Session>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Session {
        self.session.lock().clone()
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self.session.lock() = session.clone();
        Ok(())
    }

    fn clear(&self) {
        *self.session.lock() = Session::default();
    }
}
