//! Core challenge behavior shared by the HTTP handlers.
//!
//! One invocation = one template resolution + one completion call. No state
//! is carried between calls; the template table is immutable compiled-in data.

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::ChallengeType;
use crate::error::ServiceError;
use crate::protocol::{ChallengeIn, ChallengeOut};
use crate::state::AppState;
use crate::templates::system_prompt;
use crate::util::trunc_for_log;

/// Run one challenge end to end: resolve the template, make the single
/// completion call, wrap the raw text with the echoed tag and a timestamp.
#[instrument(
  level = "info",
  skip(state, req),
  fields(challenge_type = %req.challenge_type, prompt_len = req.prompt.len())
)]
pub async fn run_challenge(state: &AppState, req: &ChallengeIn) -> Result<ChallengeOut, ServiceError> {
  let request_id = Uuid::new_v4();

  if req.prompt.trim().is_empty() {
    return Err(ServiceError::Validation("prompt must not be empty".into()));
  }

  // Unknown tags are not an error: fall back to the base instruction set.
  let kind = ChallengeType::from_tag(&req.challenge_type);
  if kind.is_none() {
    warn!(target: "challenge", %request_id, tag = %req.challenge_type, "Unrecognized challenge type; using base instructions");
  }
  let system = system_prompt(kind, &req.user_profile);

  let openai = state.openai.as_ref().ok_or_else(|| {
    ServiceError::Configuration("OPENAI_API_KEY not set; cannot reach the completion API".into())
  })?;

  let text = openai.complete(&system, &req.prompt).await?;
  info!(
    target: "challenge",
    %request_id,
    response_preview = %trunc_for_log(&text, 80),
    "Challenge completed"
  );

  Ok(ChallengeOut {
    response: text,
    challenge_type: req.challenge_type.clone(),
    timestamp: Utc::now().to_rfc3339(),
  })
}
