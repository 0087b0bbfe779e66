//! OpenAI-compatible chat completion client.
//!
//! Works against any server exposing `POST /v1/chat/completions` with bearer
//! authentication; point `base_url` at it.

use async_trait::async_trait;
use ideascore_application::{GenerationError, TextGenerator};
use ideascore_domain::truncate;
use serde::{Deserialize, Serialize};
use tracing::debug;

const COMPLETIONS_PATH: &str = "/v1/chat/completions";
/// Longest error body excerpt (bytes) carried into a [`GenerationError`].
const ERROR_EXCERPT_CHARS: usize = 200;

pub struct OpenAiTextGenerator {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiTextGenerator {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            model: model.into(),
            temperature: 0.3,
            max_tokens: 1500,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn request_body<'a>(&'a self, system: &'a str, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiTextGenerator {
    fn model_name(&self) -> &str {
        &self.model
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self.api_key.as_ref().ok_or(GenerationError::NotConfigured)?;

        let response = self
            .client
            .post(format!("{}{}", self.base_url, COMPLETIONS_PATH))
            .bearer_auth(api_key)
            .json(&self.request_body(system, prompt))
            .send()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(GenerationError::Request(format!(
                "HTTP {}: {}",
                status.as_u16(),
                truncate(body.trim(), ERROR_EXCERPT_CHARS)
            )));
        }

        let content = parse_content(&body)?;
        debug!("{} returned {} chars", self.model, content.len());
        Ok(content)
    }
}

fn parse_content(body: &str) -> Result<String, GenerationError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::Malformed(e.to_string()))?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or_else(|| GenerationError::Malformed("response has no message content".to_string()))
}
