use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use serde_json::Value;
use tracing::error;

use crate::db::StoreError;

#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<Value>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(json!({"error": message})),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        error!("store error: {}", err);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
    }
}

// Bad bodies are not a separate class here; they surface like any other failure.
impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        error!("rejected request body: {}", rejection.body_text());
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, &rejection.body_text())
    }
}
