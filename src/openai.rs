//! Minimal OpenAI client for the challenge service.
//!
//! We only call chat.completions, non-streaming, with one fixed model.
//! Calls are instrumented and log model name, latency, and token usage
//! (never message contents).
//!
//! NOTE: We never log the API key.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{instrument, info};

use crate::config::CompletionConfig;
use crate::error::ServiceError;

#[derive(Clone)]
pub struct OpenAi {
  pub client: reqwest::Client,
  api_key: String,
  pub base_url: String,
  pub completion: CompletionConfig,
}

impl OpenAi {
  /// Construct a client against an explicit endpoint. `from_env` and tests
  /// pointing at a local stub upstream both go through here.
  pub fn new(api_key: String, base_url: String, completion: &CompletionConfig) -> Option<Self> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(completion.request_timeout_secs))
      .build()
      .ok()?;

    Some(Self { client, api_key, base_url, completion: completion.clone() })
  }

  /// Construct the client if we find OPENAI_API_KEY; otherwise return None.
  pub fn from_env(completion: &CompletionConfig) -> Option<Self> {
    let api_key = std::env::var("OPENAI_API_KEY").ok()?;
    let base_url =
      std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
    Self::new(api_key, base_url, completion)
  }

  /// Single non-streaming chat completion: system + user, fixed sampling.
  /// Returns the raw text of the first choice, unmodified.
  #[instrument(
    level = "info",
    skip(self, system, user),
    fields(model = %self.completion.model, system_len = system.len(), user_len = user.len())
  )]
  pub async fn complete(&self, system: &str, user: &str) -> Result<String, ServiceError> {
    let url = format!("{}/chat/completions", self.base_url);
    let req = ChatCompletionRequest {
      model: self.completion.model.clone(),
      messages: vec![
        ChatMessageReq { role: "system".into(), content: system.into() },
        ChatMessageReq { role: "user".into(), content: user.into() },
      ],
      temperature: self.completion.temperature,
      max_tokens: Some(self.completion.max_tokens),
    };

    let start = std::time::Instant::now();
    let res = self.client.post(&url)
      .header(USER_AGENT, "learningbites-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
      .json(&req).send().await
      .map_err(|e| ServiceError::Upstream(e.to_string()))?;

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      let msg = extract_openai_error(&body).unwrap_or(body);
      return Err(ServiceError::Upstream(format!("OpenAI HTTP {}: {}", status, msg)));
    }

    let body: ChatCompletionResponse =
      res.json().await.map_err(|e| ServiceError::Upstream(e.to_string()))?;
    if let Some(usage) = &body.usage {
      info!(
        prompt_tokens = ?usage.prompt_tokens,
        completion_tokens = ?usage.completion_tokens,
        total_tokens = ?usage.total_tokens,
        elapsed = ?start.elapsed(),
        "OpenAI usage"
      );
    }

    body
      .choices
      .into_iter()
      .next()
      .and_then(|c| c.message.content)
      .ok_or_else(|| ServiceError::Upstream("OpenAI response had no completion choice".into()))
  }
}

// --- Chat DTOs ---

#[derive(Serialize)]
struct ChatCompletionRequest {
  model: String,
  messages: Vec<ChatMessageReq>,
  temperature: f32,
  #[serde(skip_serializing_if = "Option::is_none")]
  max_tokens: Option<u32>,
}
#[derive(Serialize)]
struct ChatMessageReq { role: String, content: String }

#[derive(Deserialize)]
struct ChatCompletionResponse {
  choices: Vec<ChatChoice>,
  #[serde(default)] usage: Option<Usage>,
}
#[derive(Deserialize)]
struct ChatChoice { message: ChatMessageResp }
#[derive(Deserialize)]
struct ChatMessageResp { content: Option<String> }
#[derive(Deserialize)]
struct Usage {
  #[serde(default)] prompt_tokens: Option<u32>,
  #[serde(default)] completion_tokens: Option<u32>,
  #[serde(default)] total_tokens: Option<u32>,
}

/// Try to extract a clean error message from an OpenAI error body.
fn extract_openai_error(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct EWrap { error: EObj }
  #[derive(Deserialize)]
  struct EObj { message: String }
  match serde_json::from_str::<EWrap>(body) {
    Ok(w) => Some(w.error.message),
    Err(_) => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn request_serializes_two_messages_and_the_token_cap() {
    let req = ChatCompletionRequest {
      model: "gpt-4o-mini".into(),
      messages: vec![
        ChatMessageReq { role: "system".into(), content: "sys".into() },
        ChatMessageReq { role: "user".into(), content: "hi".into() },
      ],
      temperature: 0.7,
      max_tokens: Some(1000),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["messages"].as_array().unwrap().len(), 2);
    assert_eq!(json["messages"][0]["role"], "system");
    assert_eq!(json["max_tokens"], 1000);
    // f32 goes through f64 on the wire; compare with a tolerance.
    assert!((json["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
  }

  #[test]
  fn response_first_choice_text_is_taken_as_is() {
    let body = r#"{
      "choices": [{"message": {"content": "  Ciao!  "}}],
      "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
    }"#;
    let parsed: ChatCompletionResponse = serde_json::from_str(body).unwrap();
    let text = parsed.choices.into_iter().next().unwrap().message.content.unwrap();
    // Whitespace preserved: the handler must not mutate the model output.
    assert_eq!(text, "  Ciao!  ");
  }

  #[test]
  fn extract_openai_error_reads_the_nested_message() {
    let body = r#"{"error":{"message":"Rate limit reached","type":"rate_limit_error"}}"#;
    assert_eq!(extract_openai_error(body).as_deref(), Some("Rate limit reached"));
    assert_eq!(extract_openai_error("not json"), None);
  }
}
