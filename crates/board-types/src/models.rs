use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single post on the board.
///
/// Field names on the wire match the original service (`discussion_id`,
/// `email`, `timestamp`) so existing clients keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discussion {
    #[serde(rename = "discussion_id")]
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(rename = "email")]
    pub author_email: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating a discussion. The id and creation time are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewDiscussion {
    pub title: String,
    pub content: String,
    pub author_email: String,
}

/// Partial update: `None` leaves the stored value unchanged.
///
/// There is deliberately no `created_at` here, the creation time is immutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscussionPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_email: Option<String>,
}

impl DiscussionPatch {
    /// Apply the patch in memory.
    pub fn apply_to(self, discussion: &mut Discussion) {
        if let Some(title) = self.title {
            discussion.title = title;
        }
        if let Some(content) = self.content {
            discussion.content = content;
        }
        if let Some(author_email) = self.author_email {
            discussion.author_email = author_email;
        }
    }
}
