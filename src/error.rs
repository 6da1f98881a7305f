//! Tagged error type for the challenge boundary.
//!
//! Internally we distinguish configuration, upstream, and validation
//! failures; externally every failure collapses to the same fallback shape
//! `{ error, fallbackResponse }` with a fixed apology message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use crate::protocol::ErrorOut;

/// Fixed user-facing apology. Identical in every failure path; the `error`
/// field carries the diagnostic detail.
pub const FALLBACK_MESSAGE: &str =
  "Mi dispiace, al momento non riesco a elaborare la tua richiesta. Riprova tra qualche istante.";

#[derive(Debug, Error)]
pub enum ServiceError {
  /// Required upstream credential is absent; no request can succeed until fixed.
  #[error("configuration error: {0}")]
  Configuration(String),
  /// Any failure from the completion API: HTTP status, network, decoding.
  #[error("upstream error: {0}")]
  Upstream(String),
  /// Malformed challenge request (e.g. blank prompt).
  #[error("validation error: {0}")]
  Validation(String),
}

impl ServiceError {
  /// The external contract knows only 200 and 500: every failure cause maps
  /// to the same status. The enum exists for logs and tests, not the wire.
  pub fn status(&self) -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
  }
}

impl IntoResponse for ServiceError {
  fn into_response(self) -> Response {
    error!(target: "challenge", error = %self, "Challenge request failed");
    let body = ErrorOut {
      error: self.to_string(),
      fallback_response: FALLBACK_MESSAGE.to_string(),
    };
    (self.status(), Json(body)).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_cause_maps_to_500() {
    for err in [
      ServiceError::Configuration("no key".into()),
      ServiceError::Upstream("HTTP 429".into()),
      ServiceError::Validation("empty".into()),
    ] {
      assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
  }

  #[test]
  fn responses_carry_the_mapped_status() {
    let resp = ServiceError::Upstream("HTTP 503: overloaded".into()).into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let resp = ServiceError::Validation("prompt must not be empty".into()).into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn fallback_message_is_non_empty_and_stable() {
    assert!(!FALLBACK_MESSAGE.trim().is_empty());
    assert!(FALLBACK_MESSAGE.starts_with("Mi dispiace"));
  }
}
