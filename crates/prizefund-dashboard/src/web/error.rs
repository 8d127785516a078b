//! HTTP mapping for `FundError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use prizefund_core::error::{ErrorCode, FundError};

/// Handler error: a `FundError` rendered as `{code, msg}` JSON.
#[derive(Debug)]
pub struct ApiError(pub FundError);

impl From<FundError> for ApiError {
    fn from(e: FundError) -> Self {
        Self(e)
    }
}

pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::BadRequest | ErrorCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
        ErrorCode::NotAllowed => StatusCode::FORBIDDEN,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.code();
        let body = json!({
            "code": code.as_str(),
            "msg": self.0.to_string(),
        });
        (status_for(code), Json(body)).into_response()
    }
}
