//! HTTP API server.
//!
//! Exposes `POST /ask` for FAQ-grounded answers and `GET /health`.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::error::SupportError;
use crate::inference::{HuggingFaceGateway, InferenceGateway};
use crate::rag::{AskResponse, SupportEngine};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Shared application state.
pub(crate) struct AppState {
    engine: SupportEngine,
}

/// Run the HTTP API server.
pub async fn run_serve(
    host: Option<String>,
    port: Option<u16>,
    settings: Settings,
) -> anyhow::Result<()> {
    if let Err(e) = preflight::check(Operation::Serve, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'hf-support doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let gateway: Arc<dyn InferenceGateway> = Arc::new(HuggingFaceGateway::new(&settings.inference)?);
    let engine = SupportEngine::from_settings(&settings, gateway)?;
    let faq_path = engine.faq_path().display().to_string();

    let app = router(Arc::new(AppState { engine }));

    let host = host.unwrap_or_else(|| settings.server.host.clone());
    let port = port.unwrap_or(settings.server.port);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("HF Support Agent");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    Output::kv("Model", &settings.inference.model);
    Output::kv("FAQ file", &faq_path);
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Ask", "POST /ask");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    info!(%addr, model = %settings.inference.model, "Server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Build the API router.
pub(crate) fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    Router::new()
        .route("/health", get(health))
        .route("/ask", post(ask))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct AskRequest {
    question: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

/// Errors returned to HTTP clients as `{"detail": ...}`.
#[derive(Debug)]
enum ApiError {
    /// The question failed validation.
    BadRequest(String),
    /// The request body could not be decoded.
    Rejected(StatusCode, String),
    /// Anything that went wrong on our side or upstream.
    Internal(String),
}

impl From<SupportError> for ApiError {
    fn from(err: SupportError) -> Self {
        if err.is_client_error() {
            ApiError::BadRequest(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::Rejected(status, detail) => (status, detail),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal error: {}", message),
            ),
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    error!("Request handler panicked: {}", message);
    ApiError::Internal(message).into_response()
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn ask(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let Json(req) = payload?;

    match state.engine.ask(&req.question).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            if !e.is_client_error() {
                error!("Failed to answer question: {:?}", e);
            }
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::stub::StubGateway;
    use axum::body::Body;
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn write_faqs(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("faqs.csv");
        std::fs::write(
            &path,
            "question,answer\n\
             How do I reset my password,Click forgot password\n\
             How do I contact support,Email us\n",
        )
        .unwrap();
        path
    }

    fn app(gateway: Arc<StubGateway>, faq_path: std::path::PathBuf) -> Router {
        router(Arc::new(AppState {
            engine: SupportEngine::new(gateway, faq_path),
        }))
    }

    async fn post_ask(app: Router, body: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/ask")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_ask_success() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = Arc::new(StubGateway::answering("Click 'Forgot password' on the login page."));
        let app = app(gateway, write_faqs(&dir));

        let (status, body) =
            post_ask(app, r#"{"question": "how do I reset my password please"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "answer": "Click 'Forgot password' on the login page.",
                "relevant_faqs": [
                    {"question": "How do I reset my password", "answer": "Click forgot password"},
                    {"question": "How do I contact support", "answer": "Email us"}
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_blank_question_is_400() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = Arc::new(StubGateway::answering("unused"));
        let app = app(gateway.clone(), dir.path().join("missing.csv"));

        let (status, body) = post_ask(app, r#"{"question": "   "}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "Question cannot be empty."}));
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_faq_file_is_500() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = Arc::new(StubGateway::answering("unused"));
        let app = app(gateway, dir.path().join("missing.csv"));

        let (status, body) = post_ask(app, r#"{"question": "where is my order?"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.starts_with("Internal error: Could not read FAQ file"));
    }

    #[tokio::test]
    async fn test_gateway_failure_is_500() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = Arc::new(StubGateway::failing("model overloaded"));
        let app = app(gateway, write_faqs(&dir));

        let (status, body) = post_ask(app, r#"{"question": "contact support"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"detail": "Internal error: Inference request failed: IO error: model overloaded"})
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = Arc::new(StubGateway::answering("unused"));
        let app = app(gateway.clone(), write_faqs(&dir));

        let (status, body) = post_ask(app, r#"{"query": "wrong field"}"#).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("question"));
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(Arc::new(StubGateway::answering("")), write_faqs(&dir));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_panic_payload_becomes_internal_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
