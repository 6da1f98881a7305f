//! Application state: the optional OpenAI client.
//!
//! The service is stateless per request: nothing here mutates after startup,
//! so concurrent invocations share only the client and its reqwest pool.
//! Completion settings live inside the client; they are logged once here.

use tracing::{info, instrument, warn};

use crate::config::load_service_config_from_env;
use crate::openai::OpenAi;

#[derive(Clone)]
pub struct AppState {
    /// None when OPENAI_API_KEY is absent; every challenge request then
    /// fails with the fallback message without any outbound call.
    pub openai: Option<OpenAi>,
}

impl AppState {
    /// Build state from env: load TOML overrides (if any), init the client.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let config = load_service_config_from_env().unwrap_or_default();

        let openai = OpenAi::from_env(&config.completion);
        if let Some(oa) = &openai {
            info!(
                target: "learningbites_backend",
                base_url = %oa.base_url,
                model = %oa.completion.model,
                temperature = oa.completion.temperature,
                max_tokens = oa.completion.max_tokens,
                "OpenAI enabled."
            );
        } else {
            warn!(
                target: "learningbites_backend",
                "OpenAI disabled (no OPENAI_API_KEY). Challenge requests will return the fallback message."
            );
        }

        Self { openai }
    }
}
