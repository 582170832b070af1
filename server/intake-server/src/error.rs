//! Error types for the intake server.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use intake_engine::IntakeError;
use thiserror::Error;
use tracing::warn;

use crate::types::ErrorOutput;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Body not JSON, missing a required field, or a field of the wrong type.
  #[error("{0}")]
  BadRequest(String),

  #[error("Auth failed")]
  Unauthorized,

  /// Unknown incident id; the detail is for logs only.
  #[error("Not found")]
  NotFound(String),
}

impl From<serde_json::Error> for ApiError {
  fn from(e: serde_json::Error) -> Self {
    warn!("rejected payload: {}", e);
    Self::BadRequest(e.to_string())
  }
}

impl From<IntakeError> for ApiError {
  fn from(e: IntakeError) -> Self {
    Self::NotFound(e.to_string())
  }
}

impl ApiError {
  pub fn status_code(&self) -> StatusCode {
    match self {
      Self::BadRequest(_) => StatusCode::BAD_REQUEST,
      Self::Unauthorized => StatusCode::UNAUTHORIZED,
      Self::NotFound(_) => StatusCode::NOT_FOUND,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    (self.status_code(), Json(ErrorOutput::new(self.to_string()))).into_response()
  }
}

/// Startup and serving failures.
#[derive(Debug, Error)]
pub enum ServerError {
  #[error("config: {0}")]
  Config(String),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
  use super::*;
  use intake_engine::IncidentId;

  #[test]
  fn status_codes() {
    assert_eq!(
      ApiError::BadRequest("x".into()).into_response().status(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      ApiError::Unauthorized.into_response().status(),
      StatusCode::UNAUTHORIZED
    );
    assert_eq!(
      ApiError::from(IntakeError::NotFound(IncidentId(3)))
        .into_response()
        .status(),
      StatusCode::NOT_FOUND
    );
  }

  #[test]
  fn malformed_json_is_bad_request() {
    let e = serde_json::from_slice::<serde_json::Value>(b"{oops").unwrap_err();
    let err = ApiError::from(e);
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
  }

  #[test]
  fn not_found_message_is_generic() {
    let err = ApiError::from(IntakeError::NotFound(IncidentId(3)));
    assert_eq!(err.to_string(), "Not found");
  }
}
