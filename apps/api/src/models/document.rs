use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::form::{DocumentType, GenerationRequest};

/// A stored document. `generated_content` is either absent or a complete
/// document for `document_type`; there is no partial state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDocument {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub language: String,
    pub data: GenerationRequest,
    pub generated_content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `DocumentStore::create`. `language` defaults to `"en"`.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub document_type: DocumentType,
    pub language: Option<String>,
    pub data: GenerationRequest,
    pub generated_content: Option<String>,
}

impl NewDocument {
    pub fn from_request(request: GenerationRequest, generated_content: String) -> Self {
        Self {
            document_type: request.document_type,
            language: Some(request.language.clone()),
            data: request,
            generated_content: Some(generated_content),
        }
    }
}

/// Partial update merged into an existing record; `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct DocumentUpdate {
    pub document_type: Option<DocumentType>,
    pub language: Option<String>,
    pub data: Option<GenerationRequest>,
    pub generated_content: Option<String>,
}

impl DocumentUpdate {
    pub fn from_request(request: GenerationRequest, generated_content: String) -> Self {
        Self {
            document_type: Some(request.document_type),
            language: Some(request.language.clone()),
            data: Some(request),
            generated_content: Some(generated_content),
        }
    }

    pub fn apply(self, document: &mut GeneratedDocument) {
        if let Some(document_type) = self.document_type {
            document.document_type = document_type;
        }
        if let Some(language) = self.language {
            document.language = language;
        }
        if let Some(data) = self.data {
            document.data = data;
        }
        if let Some(content) = self.generated_content {
            document.generated_content = Some(content);
        }
    }
}
