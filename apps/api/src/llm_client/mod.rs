//! LLM client. The single point of entry for all text-generation provider calls.
//!
//! ARCHITECTURAL RULE: No other module may call the provider API directly.
//! All LLM interactions MUST go through this module.
//!
//! Model: gpt-4o at temperature 0.7, fixed.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// The model used for all generation calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4o";
pub const TEMPERATURE: f32 = 0.7;

const QUOTA_CODE: &str = "insufficient_quota";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited (status {status}): {message}")]
    RateLimited { status: u16, message: String },

    #[error("Quota exhausted (status {status}): {message}")]
    QuotaExhausted { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// How a failed provider call should be treated by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Quota exhausted or rate limited. The caller may substitute local output.
    Quota,
    /// Anything else. The request fails.
    Fatal,
}

impl LlmError {
    pub fn class(&self) -> FailureClass {
        match self {
            LlmError::RateLimited { .. } | LlmError::QuotaExhausted { .. } => FailureClass::Quota,
            LlmError::Http(_) | LlmError::Api { .. } | LlmError::Parse(_) | LlmError::EmptyContent => {
                FailureClass::Fatal
            }
        }
    }
}

/// A text-generation backend. `LlmClient` is the production implementation;
/// tests substitute an in-process stub.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends a single user prompt and returns the generated text verbatim.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the text of the first choice, if it has any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
    #[serde(default, rename = "type")]
    error_type: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

/// Turns a non-success provider response into a classified error.
///
/// 429 is always quota-class; an `insufficient_quota` code or type is
/// quota-class regardless of status.
fn classify_error_response(status: u16, body: &str) -> LlmError {
    let parsed = serde_json::from_str::<ProviderError>(body).ok();
    let quota_coded = parsed.as_ref().is_some_and(|e| {
        e.error.code.as_deref() == Some(QUOTA_CODE)
            || e.error.error_type.as_deref() == Some(QUOTA_CODE)
    });
    let message = parsed
        .map(|e| e.error.message)
        .unwrap_or_else(|| body.to_string());

    if quota_coded {
        LlmError::QuotaExhausted { status, message }
    } else if status == 429 {
        LlmError::RateLimited { status, message }
    } else {
        LlmError::Api { status, message }
    }
}

/// The single LLM client used by the generation service.
/// Wraps an OpenAI-compatible chat completions endpoint. One request per
/// call: no retries, no streaming.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    completions_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, base_url: &str) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_key,
            completions_url: format!("{}/chat/completions", base_url.trim_end_matches('/')),
        })
    }

    /// Makes a raw call to the provider, returning the full response object.
    pub async fn call(&self, prompt: &str) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.completions_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = classify_error_response(status.as_u16(), &body);
            warn!("LLM API returned {}: {}", status, error);
            return Err(error);
        }

        let body = response.text().await?;
        let chat_response: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }
}

#[async_trait]
impl CompletionProvider for LlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}
