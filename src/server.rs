//! HTTP facade over the function index scanner
//!
//! The facade owns no state of its own: the repository root comes from a
//! caller-supplied provider, and every request recomputes the catalog from
//! the filesystem. Error translation happens only here; the scanner layers
//! below propagate everything.

use crate::error::ScanError;
use crate::scanner;
use crate::types::{ErrorBody, FunctionRecord};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Yields the current repository root, owned by the surrounding platform.
/// `None` means no repository is loaded.
pub type RootProvider = Arc<dyn Fn() -> Option<PathBuf> + Send + Sync>;

/// Build the facade router: `GET /` answers with the JSON function catalog.
pub fn router(provider: RootProvider) -> Router {
    Router::new()
        .route("/", get(function_index))
        .with_state(provider)
}

/// Serve the facade until the listener is torn down.
pub async fn serve(bind: &str, provider: RootProvider) -> anyhow::Result<()> {
    let app = router(provider);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!("Serving function index on http://{}/", bind);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn function_index(State(provider): State<RootProvider>) -> Response {
    let Some(root) = provider() else {
        // Deliberate configuration signal, distinct from scan failures
        return error_response(
            StatusCode::BAD_REQUEST,
            ScanError::RepositoryNotLoaded.to_string(),
        );
    };

    // The scanner is synchronous by contract; keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || scanner::scan(&root)).await;

    match result {
        Ok(Ok(records)) => catalog_response(records),
        Ok(Err(err)) => error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        Err(err) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Scan task failed: {}", err),
        ),
    }
}

fn catalog_response(records: Vec<FunctionRecord>) -> Response {
    (StatusCode::OK, Json(records)).into_response()
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}
