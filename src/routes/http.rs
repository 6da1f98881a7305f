//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs parameters and basic result info.

use std::sync::Arc;
use axum::{extract::State, Json, response::IntoResponse};
use tracing::{info, instrument};

use crate::error::ServiceError;
use crate::logic::run_challenge;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state, body), fields(challenge_type = %body.challenge_type, prompt_len = body.prompt.len()))]
pub async fn http_post_challenge(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ChallengeIn>,
) -> Result<Json<ChallengeOut>, ServiceError> {
  let out = run_challenge(&state, &body).await?;
  info!(target: "challenge", challenge_type = %out.challenge_type, response_len = out.response.len(), "HTTP challenge served");
  Ok(Json(out))
}
