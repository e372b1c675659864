//! Browser-facing board: HTML view and the form endpoints behind it.
//! Every form action answers with a 303 back to the author's board URL.

use axum::{
    Form,
    extract::{Path, State},
    response::{Html, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use board_types::api::{PostDiscussionForm, RequestDeleteForm, RequestEditForm};
use board_types::models::{DiscussionPatch, NewDiscussion};
use tracing::debug;

use crate::discussions::{amend, remove};
use crate::error::ApiError;
use crate::paths::author_path;
use crate::selection::{select_author as remember_author, selected_author};
use crate::state::{AppState, with_store};
use crate::view::render_board;

pub async fn select_author(Path(email): Path<String>, jar: CookieJar) -> (CookieJar, Redirect) {
    debug!("Selected author {}", email);
    (remember_author(jar, &email), Redirect::to("/discussions"))
}

pub async fn show_board(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Html<String>, ApiError> {
    let discussions = with_store(&state, |s| s.list_all()).await?;
    let author = selected_author(&jar);
    Ok(Html(render_board(&discussions, author.as_deref())))
}

/// The post is attributed to the selected author; the path email is only
/// used when this client never selected one.
pub async fn post_discussion(
    State(state): State<AppState>,
    Path(email): Path<String>,
    jar: CookieJar,
    Form(form): Form<PostDiscussionForm>,
) -> Result<Redirect, ApiError> {
    let author_email = selected_author(&jar).unwrap_or_else(|| email.clone());
    let new = NewDiscussion {
        title: form.title,
        content: form.content,
        author_email,
    };

    with_store(&state, move |s| s.create(new)).await?;
    Ok(back_to(&email))
}

pub async fn request_delete(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Form(form): Form<RequestDeleteForm>,
) -> Result<Redirect, ApiError> {
    remove(&state, form.discussion_id).await?;
    Ok(back_to(&email))
}

pub async fn request_edit(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Form(form): Form<RequestEditForm>,
) -> Result<Redirect, ApiError> {
    let patch = DiscussionPatch {
        title: Some(form.new_title),
        content: Some(form.new_content),
        author_email: Some(email.clone()),
    };

    amend(&state, form.discussion_id, patch).await?;
    Ok(back_to(&email))
}

fn back_to(email: &str) -> Redirect {
    Redirect::to(&author_path(email, &[]))
}
