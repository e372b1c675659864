use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::DiscussionPatch;

// -- Board forms --

#[derive(Debug, Deserialize)]
pub struct PostDiscussionForm {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct RequestDeleteForm {
    pub discussion_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct RequestEditForm {
    pub discussion_id: i64,
    pub new_title: String,
    pub new_content: String,
}

// -- JSON edit --

/// Body of `PUT /discussions/{email}/edit/{discussion_id}`.
#[derive(Debug, Default, Deserialize)]
pub struct DiscussionUpdate {
    /// Overrides the id in the path when present.
    pub discussion_id: Option<i64>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub email: Option<String>,
    /// Accepted for compatibility with older clients. Never stored.
    pub timestamp: Option<DateTime<Utc>>,
}

impl DiscussionUpdate {
    pub fn into_patch(self) -> DiscussionPatch {
        DiscussionPatch {
            title: self.title,
            content: self.content,
            author_email: self.email,
        }
    }
}
