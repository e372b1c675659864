pub mod board;
pub mod discussions;
pub mod error;
pub mod paths;
pub mod selection;
pub mod state;
pub mod view;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub use state::{AppState, AppStateInner};

/// All discussion routes. Layers (tracing, CORS) are added by the binary.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(discussions::hello))
        .route("/discussions", get(board::show_board))
        .route("/discussions/all", get(discussions::list_all))
        .route("/discussions/{email}", get(board::select_author))
        .route("/discussions/{email}/mydiscussions", get(discussions::my_discussions))
        .route("/discussions/{email}/post", post(board::post_discussion))
        .route("/discussions/{email}/request_delete", post(board::request_delete))
        .route("/discussions/{email}/delete/{discussion_id}", delete(discussions::delete_discussion))
        .route("/discussions/{email}/request_edit", post(board::request_edit))
        .route("/discussions/{email}/edit/{discussion_id}", put(discussions::edit_discussion))
        .with_state(state)
}
