//! Shared fixtures for generation and handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use serde_json::{json, Value};

use crate::config::Config;
use crate::generation::generator::DocumentGenerator;
use crate::llm_client::{CompletionProvider, LlmError};
use crate::models::form::GenerationRequest;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::MemoryDocumentStore;

/// The Jane Doe resume request used across the test suite.
pub fn sample_request_json() -> Value {
    json!({
        "documentType": "resume",
        "language": "en",
        "basicInfo": {
            "name": "Jane Doe",
            "jobTitle": "Engineer",
            "age": 30,
            "country": "NL",
            "yearsExperience": 5,
            "email": "jane@x.com",
            "phone": "+311234",
            "location": "Amsterdam"
        },
        "workExperience": [{
            "jobTitle": "Dev",
            "companyName": "Acme",
            "startDate": "2020-01",
            "endDate": "2023-01",
            "responsibilities": "Built things"
        }],
        "education": [{
            "degree": "BSc CS",
            "institution": "UvA",
            "startDate": "2016",
            "endDate": "2019"
        }],
        "skills": {
            "technicalSkills": "TS, Go",
            "softSkills": "Leadership",
            "languageSkills": "English, Dutch"
        }
    })
}

pub fn sample_request() -> GenerationRequest {
    serde_json::from_value(sample_request_json()).expect("fixture matches schema")
}

/// What the stub provider should do on each call.
#[derive(Clone, Copy)]
pub enum StubBehavior {
    Reply(&'static str),
    QuotaExhausted,
    RateLimited,
    Unauthorized,
    Empty,
}

pub struct StubProvider {
    behavior: StubBehavior,
    pub prompts: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn new(behavior: StubBehavior) -> Self {
        Self {
            behavior,
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.behavior {
            StubBehavior::Reply(text) => Ok(text.to_string()),
            StubBehavior::QuotaExhausted => Err(LlmError::QuotaExhausted {
                status: 429,
                message: "You exceeded your current quota".to_string(),
            }),
            StubBehavior::RateLimited => Err(LlmError::RateLimited {
                status: 429,
                message: "Rate limit reached".to_string(),
            }),
            StubBehavior::Unauthorized => Err(LlmError::Api {
                status: 401,
                message: "Incorrect API key provided".to_string(),
            }),
            StubBehavior::Empty => Err(LlmError::EmptyContent),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        openai_api_key: "test-key".to_string(),
        openai_base_url: "http://127.0.0.1:0/v1".to_string(),
        port: 0,
        environment: "test".to_string(),
        rust_log: "debug".to_string(),
    }
}

/// App state over an empty in-memory store and a stub provider.
pub fn test_state(behavior: StubBehavior) -> (AppState, Arc<StubProvider>) {
    let stub = Arc::new(StubProvider::new(behavior));
    let state = AppState {
        store: Arc::new(MemoryDocumentStore::new()),
        generator: DocumentGenerator::new(stub.clone()),
        config: test_config(),
    };
    (state, stub)
}

pub fn test_router(behavior: StubBehavior) -> (Router, Arc<StubProvider>) {
    let (state, stub) = test_state(behavior);
    (build_router(state), stub)
}
