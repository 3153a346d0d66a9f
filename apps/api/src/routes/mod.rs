pub mod health;

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::AppError;
use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    finish(api_routes(), state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/documents",
            get(handlers::handle_list_documents).post(handlers::handle_create_document),
        )
        .route(
            "/api/documents/:id",
            get(handlers::handle_get_document)
                .put(handlers::handle_update_document)
                .delete(handlers::handle_delete_document),
        )
}

/// Applies the outer layers shared by every route and binds the state.
fn finish(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Converts a handler panic into the same generic 500 body as any other internal error.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
