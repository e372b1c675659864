use rusqlite::Connection;
use tracing::info;

use crate::error::Result;

/// Create the discussions table if it does not exist yet.
///
/// `discussion_id` is assigned by the application (max + 1), not by SQLite,
/// so the column is a plain INTEGER PRIMARY KEY without AUTOINCREMENT.
pub fn ensure(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS discussions (
            discussion_id   INTEGER PRIMARY KEY,
            title           TEXT NOT NULL,
            content         TEXT NOT NULL,
            email           TEXT NOT NULL,
            timestamp       TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_discussions_email
            ON discussions(email);
        ",
    )?;

    info!("Discussion schema ready");
    Ok(())
}
