//! Hugging Face Inference API gateway.

use super::{create_http_client, InferenceGateway};
use crate::config::InferenceSettings;
use crate::error::{Result, SupportError};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    options: InferenceOptions,
}

/// Cold models answer 503 unless asked to block until loaded.
#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

/// Calls `POST {base_url}/{model}` and returns the response body verbatim.
pub struct HuggingFaceGateway {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    token: Option<String>,
}

impl HuggingFaceGateway {
    /// Create a gateway from inference settings.
    pub fn new(settings: &InferenceSettings) -> Result<Self> {
        if settings.model.trim().is_empty() {
            return Err(SupportError::Config("Inference model id is empty".to_string()));
        }

        let client = create_http_client(Duration::from_secs(settings.timeout_secs))?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/{}",
                settings.base_url.trim_end_matches('/'),
                settings.model
            ),
            model: settings.model.clone(),
            token: settings.token.clone(),
        })
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InferenceGateway for HuggingFaceGateway {
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&InferenceRequest {
                inputs: prompt,
                options: InferenceOptions {
                    wait_for_model: true,
                },
            });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SupportError::Upstream(format!("{}: {}", self.model, e)))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| SupportError::Upstream(format!("{}: {}", self.model, e)))?;
        let body = String::from_utf8(bytes.to_vec()).map_err(|e| {
            SupportError::Upstream(format!("{} returned a non UTF-8 body: {}", self.model, e))
        })?;

        if !status.is_success() {
            return Err(SupportError::Upstream(format!(
                "{} returned {}: {}",
                self.model, status, body
            )));
        }

        debug!("Received {} bytes from {}", body.len(), self.model);
        Ok(body)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, http::HeaderMap, http::StatusCode, routing::post, Json, Router};

    async fn spawn_mock(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/models", addr)
    }

    fn settings(base_url: &str, token: Option<&str>) -> InferenceSettings {
        InferenceSettings {
            model: "google/flan-t5-base".to_string(),
            base_url: base_url.to_string(),
            timeout_secs: 5,
            token: token.map(str::to_string),
        }
    }

    #[test]
    fn test_endpoint_joins_base_url_and_model() {
        let gateway = HuggingFaceGateway::new(&settings("https://example.test/models/", None)).unwrap();
        assert_eq!(gateway.endpoint(), "https://example.test/models/google/flan-t5-base");
        assert_eq!(gateway.model(), "google/flan-t5-base");
    }

    #[test]
    fn test_empty_model_is_config_error() {
        let mut s = settings("https://example.test/models", None);
        s.model = "  ".to_string();
        assert!(matches!(
            HuggingFaceGateway::new(&s),
            Err(SupportError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_generate_returns_raw_body() {
        let app = Router::new().route(
            "/models/{org}/{name}",
            post(
                |Path((org, name)): Path<(String, String)>,
                 headers: HeaderMap,
                 Json(body): Json<serde_json::Value>| async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    format!(
                        "[{{\"generated_text\":\"{}/{} {} {}\"}}]",
                        org,
                        name,
                        auth,
                        body["inputs"].as_str().unwrap_or_default()
                    )
                },
            ),
        );
        let base_url = spawn_mock(app).await;

        let gateway = HuggingFaceGateway::new(&settings(&base_url, Some("hf_test"))).unwrap();
        let answer = gateway.generate("Answer:").await.unwrap();

        assert_eq!(
            answer,
            "[{\"generated_text\":\"google/flan-t5-base Bearer hf_test Answer:\"}]"
        );
    }

    #[tokio::test]
    async fn test_generate_omits_auth_without_token() {
        let app = Router::new().route(
            "/models/{org}/{name}",
            post(|headers: HeaderMap| async move {
                headers.contains_key("authorization").to_string()
            }),
        );
        let base_url = spawn_mock(app).await;

        let gateway = HuggingFaceGateway::new(&settings(&base_url, None)).unwrap();
        assert_eq!(gateway.generate("hi").await.unwrap(), "false");
    }

    #[tokio::test]
    async fn test_generate_waits_for_cold_model() {
        let app = Router::new().route(
            "/models/{org}/{name}",
            post(|Json(body): Json<serde_json::Value>| async move { body.to_string() }),
        );
        let base_url = spawn_mock(app).await;

        let gateway = HuggingFaceGateway::new(&settings(&base_url, None)).unwrap();
        let sent: serde_json::Value =
            serde_json::from_str(&gateway.generate("hi").await.unwrap()).unwrap();

        assert_eq!(sent["inputs"], "hi");
        assert_eq!(sent["options"]["wait_for_model"], true);
    }

    #[tokio::test]
    async fn test_error_status_is_upstream_error() {
        let app = Router::new().route(
            "/models/{org}/{name}",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "Model is currently loading") }),
        );
        let base_url = spawn_mock(app).await;

        let gateway = HuggingFaceGateway::new(&settings(&base_url, None)).unwrap();
        let err = gateway.generate("hi").await.unwrap_err();

        assert!(matches!(err, SupportError::Upstream(_)));
        let message = err.to_string();
        assert!(message.contains("503"));
        assert!(message.contains("Model is currently loading"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_upstream_error() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway =
            HuggingFaceGateway::new(&settings(&format!("http://{}/models", addr), None)).unwrap();
        let err = gateway.generate("hi").await.unwrap_err();
        assert!(matches!(err, SupportError::Upstream(_)));
    }
}
