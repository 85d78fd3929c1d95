use actix_web::{error, http::StatusCode, HttpResponse, ResponseError};

use crate::store::StoreError;

/// Every failure leaves the endpoint as `{"success": false, "message": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{0}")]
    MalformedBody(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    Blocking(#[from] error::BlockingError),
}

impl ApiError {
    fn message(&self) -> String {
        match self {
            ApiError::Store(StoreError::Database(_)) | ApiError::Store(StoreError::Hash(_)) => {
                "Internal server error".to_string()
            }
            err => err.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::DuplicateAccount) => StatusCode::CONFLICT,
            ApiError::Store(StoreError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            ApiError::Store(StoreError::MissingField(_)) | ApiError::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Database(_))
            | ApiError::Store(StoreError::Hash(_))
            | ApiError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("request failed: {self}");
        } else {
            log::debug!("request rejected with {status}: {self}");
        }

        HttpResponse::build(status).json(serde_json::json!({
            "success": false,
            "message": self.message(),
        }))
    }
}

/// Turns extractor failures on JSON bodies into the endpoint's error shape.
pub fn json_error_handler(
    err: error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> error::Error {
    ApiError::MalformedBody(err.to_string()).into()
}
