use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use board_db::StoreError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Swap the message of a `NotFound`; other errors pass through.
    pub fn with_detail(self, detail: &str) -> Self {
        match self {
            ApiError::NotFound(_) => ApiError::NotFound(detail.to_string()),
            other => other,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(format!("Discussion {id} not found")),
            other => ApiError::Internal(other.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": detail }))).into_response()
            }
            ApiError::Internal(err) => {
                error!("request failed: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_maps_to_404() {
        let resp = ApiError::from(StoreError::NotFound(3)).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn with_detail_leaves_internal_alone() {
        let err = ApiError::Internal(anyhow::anyhow!("boom")).with_detail("nope");
        assert!(matches!(err, ApiError::Internal(_)));

        let err = ApiError::NotFound("x".into()).with_detail("nope");
        assert_eq!(err.to_string(), "nope");
    }
}
