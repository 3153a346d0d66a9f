//! Axum route handlers for the Documents API.
//!
//! | Method   | Path                  | Notes |
//! |----------|-----------------------|-------|
//! | `POST`   | `/api/documents`      | Validate → generate → create |
//! | `GET`    | `/api/documents`      | All records |
//! | `GET`    | `/api/documents/:id`  | 404 if absent |
//! | `PUT`    | `/api/documents/:id`  | Validate → generate → update, 404 if absent |
//! | `DELETE` | `/api/documents/:id`  | 404 if absent |
//!
//! Successful generation responses carry `X-Generation-Source: model|fallback`.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderName,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::ContentSource;
use crate::models::document::{DocumentUpdate, GeneratedDocument, NewDocument};
use crate::state::AppState;
use crate::validation::parse_request;

pub const GENERATION_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-generation-source");

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Ids that are not UUIDs cannot name a stored document.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::document_not_found())
}

fn generated_response(source: ContentSource, document: GeneratedDocument) -> Response {
    ([(GENERATION_SOURCE_HEADER, source.as_str())], Json(document)).into_response()
}

/// POST /api/documents
///
/// Body: GenerationRequest. No generation is attempted if validation fails.
pub async fn handle_create_document(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    const FAILURE: &str = "Failed to create document";

    let request = parse_request(&body)?;

    let generated = state
        .generator
        .generate(&request)
        .await
        .map_err(AppError::generation(FAILURE))?;

    let document = state
        .store
        .create(NewDocument::from_request(request, generated.content))
        .await
        .map_err(AppError::store(FAILURE))?;

    info!(
        "Created document {} ({}, source={})",
        document.id,
        document.document_type.as_str(),
        generated.source.as_str()
    );

    Ok(generated_response(generated.source, document))
}

/// GET /api/documents
pub async fn handle_list_documents(
    State(state): State<AppState>,
) -> Result<Json<Vec<GeneratedDocument>>, AppError> {
    let documents = state
        .store
        .list()
        .await
        .map_err(AppError::store("Failed to list documents"))?;
    Ok(Json(documents))
}

/// GET /api/documents/:id
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GeneratedDocument>, AppError> {
    let id = parse_id(&id)?;
    state
        .store
        .get(id)
        .await
        .map_err(AppError::store("Failed to fetch document"))?
        .map(Json)
        .ok_or_else(AppError::document_not_found)
}

/// PUT /api/documents/:id
///
/// Regenerates content from the new body and replaces the record's data.
/// Unknown ids are rejected before the provider is called.
pub async fn handle_update_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, AppError> {
    const FAILURE: &str = "Failed to update document";

    let request = parse_request(&body)?;
    let id = parse_id(&id)?;

    if state
        .store
        .get(id)
        .await
        .map_err(AppError::store(FAILURE))?
        .is_none()
    {
        return Err(AppError::document_not_found());
    }

    let generated = state
        .generator
        .generate(&request)
        .await
        .map_err(AppError::generation(FAILURE))?;

    // The record may have been deleted while the provider call was in flight.
    let document = state
        .store
        .update(id, DocumentUpdate::from_request(request, generated.content))
        .await
        .map_err(AppError::store(FAILURE))?
        .ok_or_else(AppError::document_not_found)?;

    info!(
        "Regenerated document {} (source={})",
        document.id,
        generated.source.as_str()
    );

    Ok(generated_response(generated.source, document))
}

/// DELETE /api/documents/:id
pub async fn handle_delete_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id)?;
    let existed = state
        .store
        .delete(id)
        .await
        .map_err(AppError::store("Failed to delete document"))?;

    if !existed {
        return Err(AppError::document_not_found());
    }

    info!("Deleted document {id}");
    Ok(Json(MessageResponse {
        message: "Document deleted successfully",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt as _;

    use crate::generation::test_support::{sample_request_json, test_router, StubBehavior};

    async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        router.oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create(router: &Router) -> Value {
        let response = send(
            router.clone(),
            "POST",
            "/api/documents",
            Some(sample_request_json()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    #[tokio::test]
    async fn test_post_generates_and_stores_document() {
        let (router, stub) = test_router(StubBehavior::Reply("Polished CV"));

        let response = send(router.clone(), "POST", "/api/documents", Some(sample_request_json())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(&GENERATION_SOURCE_HEADER).unwrap(),
            "model"
        );

        let document = body_json(response).await;
        assert_eq!(document["type"], "resume");
        assert_eq!(document["language"], "en");
        assert_eq!(document["generatedContent"], "Polished CV");
        assert_eq!(document["data"], sample_request_json());
        assert_eq!(document["createdAt"], document["updatedAt"]);
        assert_eq!(stub.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_post_with_quota_exhausted_returns_fallback_as_success() {
        let (router, _) = test_router(StubBehavior::QuotaExhausted);

        let response = send(router, "POST", "/api/documents", Some(sample_request_json())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(&GENERATION_SOURCE_HEADER).unwrap(),
            "fallback"
        );

        let content = body_json(response).await["generatedContent"]
            .as_str()
            .unwrap()
            .to_string();
        for needle in ["Jane Doe", "Engineer", "Acme", "TS, Go", "WORK EXPERIENCE"] {
            assert!(content.contains(needle), "missing {needle}");
        }
    }

    #[tokio::test]
    async fn test_post_invalid_body_is_400_without_generation() {
        let (router, stub) = test_router(StubBehavior::Reply("unused"));
        let mut body = sample_request_json();
        body["basicInfo"]["email"] = json!("nope");
        body["skills"]["technicalSkills"] = json!("");

        let response = send(router, "POST", "/api/documents", Some(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error = body_json(response).await;
        assert_eq!(error["message"], "Validation error");
        assert_eq!(
            error["errors"],
            json!([
                {"path": ["basicInfo", "email"], "message": "Valid email is required"},
                {"path": ["skills", "technicalSkills"], "message": "Technical skills are required"}
            ])
        );
        assert!(stub.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_post_malformed_json_is_400() {
        let (router, _) = test_router(StubBehavior::Reply("unused"));
        let request = Request::builder()
            .method("POST")
            .uri("/api/documents")
            .header("content-type", "application/json")
            .body(Body::from("{\"documentType\":"))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error = body_json(response).await;
        assert_eq!(error["errors"][0]["path"], json!([]));
    }

    #[tokio::test]
    async fn test_post_fatal_provider_error_is_generic_500() {
        let (router, _) = test_router(StubBehavior::Unauthorized);

        let response = send(router.clone(), "POST", "/api/documents", Some(sample_request_json())).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Failed to create document"})
        );

        let list = send(router, "GET", "/api/documents", None).await;
        assert_eq!(body_json(list).await, json!([]));
    }

    #[tokio::test]
    async fn test_get_returns_stored_record() {
        let (router, _) = test_router(StubBehavior::Reply("CV"));
        let created = create(&router).await;
        let id = created["id"].as_str().unwrap();

        let response = send(router, "GET", &format!("/api/documents/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);
    }

    #[tokio::test]
    async fn test_get_unknown_or_malformed_id_is_404() {
        let (router, _) = test_router(StubBehavior::Reply("CV"));

        for uri in [
            format!("/api/documents/{}", Uuid::new_v4()),
            "/api/documents/not-a-uuid".to_string(),
        ] {
            let response = send(router.clone(), "GET", &uri, None).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_eq!(
                body_json(response).await,
                json!({"message": "Document not found"})
            );
        }
    }

    #[tokio::test]
    async fn test_put_regenerates_and_updates() {
        let (router, stub) = test_router(StubBehavior::Reply("Lettre"));
        let created = create(&router).await;
        let id = created["id"].as_str().unwrap();

        let mut body = sample_request_json();
        body["documentType"] = json!("cover-letter");
        body["language"] = json!("fr");

        let response = send(router, "PUT", &format!("/api/documents/{id}"), Some(body.clone())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let updated = body_json(response).await;
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["type"], "cover-letter");
        assert_eq!(updated["language"], "fr");
        assert_eq!(updated["data"], body);
        assert_eq!(updated["createdAt"], created["createdAt"]);

        let prompts = stub.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[1].contains("Language: French (Français)"));
    }

    #[tokio::test]
    async fn test_put_unknown_id_is_404_without_generation() {
        let (router, stub) = test_router(StubBehavior::Reply("unused"));

        let response = send(
            router,
            "PUT",
            &format!("/api/documents/{}", Uuid::new_v4()),
            Some(sample_request_json()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(stub.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_put_invalid_body_is_400() {
        let (router, _) = test_router(StubBehavior::Reply("CV"));
        let created = create(&router).await;
        let id = created["id"].as_str().unwrap();

        let response = send(
            router,
            "PUT",
            &format!("/api/documents/{id}"),
            Some(json!({"documentType": "resume"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_returns_all_documents() {
        let (router, _) = test_router(StubBehavior::Reply("CV"));
        let first = create(&router).await;
        let second = create(&router).await;

        let response = send(router, "GET", "/api/documents", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let list = body_json(response).await;
        let ids: Vec<&Value> = list.as_array().unwrap().iter().map(|d| &d["id"]).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&&first["id"]));
        assert!(ids.contains(&&second["id"]));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_404() {
        let (router, _) = test_router(StubBehavior::Reply("CV"));
        let created = create(&router).await;
        let uri = format!("/api/documents/{}", created["id"].as_str().unwrap());

        let response = send(router.clone(), "DELETE", &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Document deleted successfully"})
        );

        let response = send(router.clone(), "GET", &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(router, "DELETE", &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_reports_status() {
        let (router, _) = test_router(StubBehavior::Reply("CV"));

        let response = send(router, "GET", "/api/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let health = body_json(response).await;
        assert_eq!(health["status"], "healthy");
        assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(health["environment"], "test");
        assert!(health["timestamp"].as_str().is_some());
    }
}
