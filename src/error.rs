use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::store::MAX_CODE_ATTEMPTS;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiError {
    #[error("paste not found")]
    NotFound,
    #[error("paste content is empty")]
    EmptyContent,
    #[error("could not allocate an unused code in {MAX_CODE_ATTEMPTS} attempts")]
    CodeSpaceExhausted,
    #[error("backing store unavailable")]
    Unavailable { source: sqlx::Error },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::EmptyContent => StatusCode::BAD_REQUEST,
            ApiError::CodeSpaceExhausted => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        };

        (status_code, format!("{self}")).into_response()
    }
}

// Lookups use `fetch_optional`, so `RowNotFound` never reaches this
// conversion; an absent paste is `Ok(None)`, never `Unavailable`.
impl From<sqlx::Error> for ApiError {
    fn from(source: sqlx::Error) -> Self {
        ApiError::Unavailable { source }
    }
}
