//! Document generation: prompt synthesis, then one provider call with quota fallback.
//!
//! Flow: build_prompt → provider.complete → on quota-class failure,
//!       render_fallback; on any other failure, GenerationError.
//!
//! Quota exhaustion and rate limiting are the only failures recovered by
//! substitution. Everything else fails the request.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::generation::fallback::render_fallback;
use crate::generation::synthesizer::build_prompt;
use crate::llm_client::{CompletionProvider, FailureClass, LlmError};
use crate::models::form::GenerationRequest;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Generation failed: {0}")]
    Failed(#[source] LlmError),
}

/// Where generated text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Model,
    Fallback,
}

impl ContentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentSource::Model => "model",
            ContentSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedText {
    pub content: String,
    pub source: ContentSource,
}

/// Generates document text through a pluggable completion provider.
///
/// Carried in `AppState` behind an `Arc`.
#[derive(Clone)]
pub struct DocumentGenerator {
    provider: Arc<dyn CompletionProvider>,
}

impl DocumentGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Generates the document for `request`.
    ///
    /// Steps:
    /// 1. build_prompt() → prompt text
    /// 2. provider.complete() → text, returned verbatim on success
    /// 3. quota-class failure → render_fallback()
    /// 4. any other failure → GenerationError::Failed
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedText, GenerationError> {
        info!(
            "Generating {} in language '{}'",
            request.document_type.as_str(),
            request.language
        );

        let prompt = build_prompt(request);

        match self.provider.complete(&prompt).await {
            Ok(content) => Ok(GeneratedText {
                content,
                source: ContentSource::Model,
            }),
            Err(e) => match e.class() {
                FailureClass::Quota => {
                    warn!("Provider quota exhausted or rate limited, using fallback document: {e}");
                    Ok(GeneratedText {
                        content: render_fallback(request),
                        source: ContentSource::Fallback,
                    })
                }
                FailureClass::Fatal => {
                    error!("Document generation failed: {e}");
                    Err(GenerationError::Failed(e))
                }
            },
        }
    }
}
