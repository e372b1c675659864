use board_types::models::{Discussion, DiscussionPatch, NewDiscussion};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Row, TransactionBehavior};
use tracing::info;

use crate::Session;
use crate::error::{Result, StoreError};

const SELECT_DISCUSSION: &str =
    "SELECT discussion_id, title, content, email, timestamp FROM discussions";

impl Session {
    pub fn list_all(&self) -> Result<Vec<Discussion>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_DISCUSSION} ORDER BY discussion_id"))?;

        let rows = stmt
            .query_map([], discussion_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    pub fn list_by_author(&self, email: &str) -> Result<Vec<Discussion>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SELECT_DISCUSSION} WHERE email = ?1 ORDER BY discussion_id"
        ))?;

        let rows = stmt
            .query_map([email], discussion_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    pub fn get(&self, id: i64) -> Result<Discussion> {
        query_discussion(&self.conn, id)
    }

    /// Insert a new discussion with id = current max + 1.
    ///
    /// The max read and the insert share an immediate transaction, so a
    /// concurrent create waits on the write lock instead of picking the same id.
    pub fn create(&mut self, new: NewDiscussion) -> Result<Discussion> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let max_id: Option<i64> =
            tx.query_row("SELECT MAX(discussion_id) FROM discussions", [], |row| {
                row.get(0)
            })?;
        let id = max_id.unwrap_or(0) + 1;
        let created_at = Utc::now();

        tx.execute(
            "INSERT INTO discussions (discussion_id, title, content, email, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![id, &new.title, &new.content, &new.author_email, created_at],
        )?;
        tx.commit()?;

        info!(id, author = %new.author_email, "discussion added");
        Ok(Discussion {
            id,
            title: new.title,
            content: new.content,
            author_email: new.author_email,
            created_at,
        })
    }

    /// Apply `patch` to discussion `id`. `timestamp` is never written.
    pub fn update(&mut self, id: i64, patch: DiscussionPatch) -> Result<Discussion> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut discussion = query_discussion(&tx, id)?;
        patch.apply_to(&mut discussion);

        tx.execute(
            "UPDATE discussions SET title = ?2, content = ?3, email = ?4 WHERE discussion_id = ?1",
            rusqlite::params![
                id,
                &discussion.title,
                &discussion.content,
                &discussion.author_email
            ],
        )?;
        tx.commit()?;

        info!(id, "discussion updated");
        Ok(discussion)
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM discussions WHERE discussion_id = ?1", [id])?;

        if removed == 0 {
            return Err(StoreError::NotFound(id));
        }

        info!(id, "discussion deleted");
        Ok(())
    }
}

fn query_discussion(conn: &Connection, id: i64) -> Result<Discussion> {
    conn.query_row(
        &format!("{SELECT_DISCUSSION} WHERE discussion_id = ?1"),
        [id],
        discussion_from_row,
    )
    .optional()?
    .ok_or(StoreError::NotFound(id))
}

fn discussion_from_row(row: &Row<'_>) -> rusqlite::Result<Discussion> {
    Ok(Discussion {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        author_email: row.get(3)?,
        created_at: row.get(4)?,
    })
}
