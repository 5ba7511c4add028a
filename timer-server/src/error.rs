use serde_json::json;
use timer_persistence::StoreError;
use warp::Reply;
use warp::http::StatusCode;
use warp::reply::Response;

/// Failure of a single request. Converts into exactly one HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Reply for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation(message) => {
                warp::reply::with_status(message, status).into_response()
            }
            ApiError::Store(StoreError::NotFound) => warp::reply::with_status(
                warp::reply::json(&json!({ "message": "Not found" })),
                status,
            )
            .into_response(),
            // Store details never leave the server.
            ApiError::Store(_) => warp::reply::with_status(
                warp::reply::json(&json!({ "message": "Internal server error" })),
                status,
            )
            .into_response(),
        }
    }
}
