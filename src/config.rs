//! Loading service configuration (completion model + sampling) from TOML.
//!
//! See `ServiceConfig` and `CompletionConfig` for the expected schema.
//! Defaults reproduce the browser contract exactly; the TOML file is an
//! operator override, not a requirement.

use serde::Deserialize;
use tracing::{info, error};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct ServiceConfig {
  #[serde(default)]
  pub completion: CompletionConfig,
}

/// Settings for the single outbound chat-completion call.
#[derive(Clone, Debug, Deserialize)]
pub struct CompletionConfig {
  pub model: String,
  pub temperature: f32,
  pub max_tokens: u32,
  pub request_timeout_secs: u64,
}

impl Default for CompletionConfig {
  fn default() -> Self {
    Self {
      model: "gpt-4o-mini".into(),
      temperature: 0.7,
      max_tokens: 1000,
      request_timeout_secs: 20,
    }
  }
}

/// Attempt to load `ServiceConfig` from SERVICE_CONFIG_PATH. On any parsing/IO
/// error, returns None and the caller falls back to defaults.
pub fn load_service_config_from_env() -> Option<ServiceConfig> {
  let path = std::env::var("SERVICE_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<ServiceConfig>(&s) {
      Ok(cfg) => {
        info!(target: "learningbites_backend", %path, "Loaded service config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "learningbites_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "learningbites_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
