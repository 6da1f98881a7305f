//! Domain models: challenge types and the user profile interpolated into prompts.

use serde::{Deserialize, Serialize};

/// Which output shape should the model produce?
///
/// Tags arrive as free-form strings from the browser; `from_tag` resolves the
/// five known ones and leaves everything else to the base instruction set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeType {
  /// Professional email with the [OGGETTO: ...] subject-line convention.
  Email,
  /// Compact analysis: 3 insights, 2 risks, 1 next step.
  Analysis,
  /// Numbered idea list.
  Brainstorming,
  /// Four-step problem-solving framework.
  ProblemSolving,
  /// Short pitch structure.
  Presentation,
}

impl ChallengeType {
  pub const ALL: [ChallengeType; 5] = [
    ChallengeType::Email,
    ChallengeType::Analysis,
    ChallengeType::Brainstorming,
    ChallengeType::ProblemSolving,
    ChallengeType::Presentation,
  ];

  /// Resolve a wire tag. Unknown tags are not an error: callers fall back
  /// to the base instruction set and echo the tag back unchanged.
  pub fn from_tag(tag: &str) -> Option<Self> {
    match tag {
      "email" => Some(ChallengeType::Email),
      "analysis" => Some(ChallengeType::Analysis),
      "brainstorming" => Some(ChallengeType::Brainstorming),
      "problem_solving" => Some(ChallengeType::ProblemSolving),
      "presentation" => Some(ChallengeType::Presentation),
      _ => None,
    }
  }

  pub fn tag(&self) -> &'static str {
    match self {
      ChallengeType::Email => "email",
      ChallengeType::Analysis => "analysis",
      ChallengeType::Brainstorming => "brainstorming",
      ChallengeType::ProblemSolving => "problem_solving",
      ChallengeType::Presentation => "presentation",
    }
  }
}

/// Profile fields interpolated verbatim into the persona preamble.
/// All fields are free text; missing fields default to empty strings.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UserProfile {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub role: String,
  #[serde(default, rename = "currentChallenge")]
  pub current_challenge: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_tags_round_trip() {
    for kind in ChallengeType::ALL {
      assert_eq!(ChallengeType::from_tag(kind.tag()), Some(kind));
    }
  }

  #[test]
  fn unknown_tags_resolve_to_none() {
    assert_eq!(ChallengeType::from_tag("poetry"), None);
    assert_eq!(ChallengeType::from_tag(""), None);
    // Tags are matched exactly: no trimming, no case folding.
    assert_eq!(ChallengeType::from_tag("Email"), None);
    assert_eq!(ChallengeType::from_tag(" email"), None);
  }

  #[test]
  fn profile_deserializes_camel_case_and_defaults() {
    let p: UserProfile =
      serde_json::from_str(r#"{"name":"Ada","role":"PM","currentChallenge":"email difficili"}"#)
        .unwrap();
    assert_eq!(p.current_challenge, "email difficili");

    let empty: UserProfile = serde_json::from_str("{}").unwrap();
    assert!(empty.name.is_empty() && empty.role.is_empty() && empty.current_challenge.is_empty());
  }
}
