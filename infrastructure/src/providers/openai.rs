//! OpenAI-compatible generation gateway
//!
//! Implements [`GenerationGateway`] against a Chat Completions endpoint.
//! Works with api.openai.com and any compatible proxy via
//! `OPENAI_BASE_URL`. Roles are routed to configurable models: the
//! facilitator benefits from a reasoning-oriented model while personas
//! and the analysts run on a conversational one.

use crate::config::ConfigError;
use async_trait::async_trait;
use panel_application::{GatewayError, GenerationGateway, GenerationRequest, ParticipantRole};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

/// Configuration for the OpenAI-compatible gateway
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    /// Model answering as the personas
    pub persona_model: String,
    /// Model driving the facilitator decisions
    pub facilitator_model: String,
    /// Model running the two analysis extractions
    pub analyst_model: String,
    pub timeout: Duration,
}

impl OpenAiConfig {
    /// Build from the environment: `OPENAI_API_KEY` is required,
    /// `OPENAI_BASE_URL` and `OPENAI_MODEL` are optional
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::MissingEnv("OPENAI_API_KEY"))?;
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model =
            std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            persona_model: model.clone(),
            facilitator_model: model.clone(),
            analyst_model: model,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        })
    }

    pub fn with_persona_model(mut self, model: impl Into<String>) -> Self {
        self.persona_model = model.into();
        self
    }

    pub fn with_facilitator_model(mut self, model: impl Into<String>) -> Self {
        self.facilitator_model = model.into();
        self
    }

    pub fn with_analyst_model(mut self, model: impl Into<String>) -> Self {
        self.analyst_model = model.into();
        self
    }

    /// The model serving a participant role
    pub fn model_for(&self, role: &ParticipantRole) -> &str {
        match role {
            ParticipantRole::Facilitator => &self.facilitator_model,
            ParticipantRole::Persona(_) => &self.persona_model,
            ParticipantRole::SentimentAnalyst | ParticipantRole::Summarizer => {
                &self.analyst_model
            }
        }
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequestBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Deserialize)]
struct ChatMessageOut {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageOut,
}

#[derive(Deserialize)]
struct ChatResponseBody {
    choices: Vec<ChatChoice>,
}

/// Gateway adapter for OpenAI-compatible Chat Completions backends
pub struct OpenAiGateway {
    config: OpenAiConfig,
    client: reqwest::Client,
}

impl OpenAiGateway {
    pub fn new(config: OpenAiConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl GenerationGateway for OpenAiGateway {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GatewayError> {
        let model = self.config.model_for(&request.role);
        debug!(role = %request.role, model, "Dispatching generation request");

        let body = ChatRequestBody {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status, detail
            )));
        }

        let parsed: ChatResponseBody = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(GatewayError::EmptyCompletion);
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> OpenAiConfig {
        OpenAiConfig {
            api_key: "test-key".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            persona_model: DEFAULT_MODEL.to_string(),
            facilitator_model: DEFAULT_MODEL.to_string(),
            analyst_model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_model_routing_per_role() {
        let config = config()
            .with_facilitator_model("o4-mini")
            .with_analyst_model("o3");

        assert_eq!(config.model_for(&ParticipantRole::Facilitator), "o4-mini");
        assert_eq!(
            config.model_for(&ParticipantRole::Persona("Alice".to_string())),
            "gpt-4o"
        );
        assert_eq!(config.model_for(&ParticipantRole::SentimentAnalyst), "o3");
        assert_eq!(config.model_for(&ParticipantRole::Summarizer), "o3");
    }

    #[test]
    fn test_request_body_serialization() {
        let body = ChatRequestBody {
            model: "gpt-4o",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "be brief",
                },
                ChatMessage {
                    role: "user",
                    content: "hello",
                },
            ],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hello");
    }

    #[test]
    fn test_response_body_deserialization() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": "hi"}}]}"#;
        let parsed: ChatResponseBody = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("hi")
        );
    }
}
