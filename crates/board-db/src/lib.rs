pub mod error;
pub mod queries;
pub mod schema;

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use rusqlite::Connection;
use tracing::{info, trace};
use uuid::Uuid;

pub use error::{Result, StoreError};

pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the discussion store.
///
/// The handle itself holds no open connection for file databases: every
/// request opens its own [`Session`] and closes it when done.
pub struct Database {
    target: PathBuf,
    busy_timeout: Duration,
    // In-memory databases vanish with their last connection, so one is kept
    // open for the lifetime of the handle.
    _keepalive: Option<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: &Path, busy_timeout: Duration) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for concurrent reads
        conn.pragma_update(None, "journal_mode", "WAL")?;

        schema::ensure(&conn)?;

        info!("Database opened at {}", path.display());
        Ok(Self {
            target: path.to_path_buf(),
            busy_timeout,
            _keepalive: None,
        })
    }

    /// Private shared-cache in-memory database. Each call gets a fresh,
    /// empty store.
    pub fn open_in_memory() -> Result<Self> {
        let uri = format!("file:board-{}?mode=memory&cache=shared", Uuid::new_v4().simple());
        let conn = Connection::open(&uri)?;
        schema::ensure(&conn)?;

        Ok(Self {
            target: PathBuf::from(uri),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            _keepalive: Some(Mutex::new(conn)),
        })
    }

    /// Open a store session. The connection is closed when the session drops.
    pub fn session(&self) -> Result<Session> {
        let conn = Connection::open(&self.target)?;
        conn.busy_timeout(self.busy_timeout)?;
        trace!("store session opened");
        Ok(Session { conn })
    }

    /// Run `f` against a fresh session, closing it on every exit path.
    pub fn with_session<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Session) -> Result<T>,
    {
        let mut session = self.session()?;
        f(&mut session)
    }
}

/// One request's connection to the store.
pub struct Session {
    conn: Connection,
}

impl Drop for Session {
    fn drop(&mut self) {
        trace!("store session closed");
    }
}
