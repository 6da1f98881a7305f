//! Public request/response DTOs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::UserProfile;

/// Incoming challenge request. `challenge_type` stays a raw string here so
/// the response can echo it verbatim even when the tag is unrecognized;
/// resolution to the enum happens in `logic`.
#[derive(Debug, Deserialize)]
pub struct ChallengeIn {
    pub prompt: String,
    #[serde(rename = "challengeType")]
    pub challenge_type: String,
    #[serde(rename = "userProfile", default)]
    pub user_profile: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct ChallengeOut {
    /// Raw text of the model's first completion choice, unmodified.
    pub response: String,
    #[serde(rename = "challengeType")]
    pub challenge_type: String,
    /// RFC 3339, server generated.
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorOut {
    pub error: String,
    #[serde(rename = "fallbackResponse")]
    pub fallback_response: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
