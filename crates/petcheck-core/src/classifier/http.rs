//! Classifier backed by an HTTP classification service.
//!
//! POSTs the base64-encoded image and the architecture name to
//! `<endpoint>/classify` and expects `{"label": "..."}` back.

use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::provider::Classifier;
use crate::error::ClassifyError;
use crate::types::Architecture;

pub struct HttpClassifier {
    endpoint: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpClassifier {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            timeout,
        }
    }
}

/// /classify request body.
#[derive(Serialize)]
struct ClassifyRequest<'a> {
    image: String,
    media_type: &'a str,
    arch: &'a str,
}

/// /classify response.
#[derive(Deserialize)]
struct ClassifyResponse {
    label: String,
}

/// MIME type from the file extension.
fn media_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => "image/jpeg",
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    fn name(&self) -> &str {
        "http"
    }

    async fn classify(&self, image: &Path, arch: Architecture) -> Result<String, ClassifyError> {
        let bytes = tokio::fs::read(image).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ClassifyError::ImageNotFound(image.to_path_buf())
            } else {
                ClassifyError::Http {
                    path: image.to_path_buf(),
                    message: format!("failed to read image: {e}"),
                }
            }
        })?;

        let body = ClassifyRequest {
            image: base64::engine::general_purpose::STANDARD.encode(&bytes),
            media_type: media_type(image),
            arch: arch.as_str(),
        };

        let url = format!("{}/classify", self.endpoint);
        let resp = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClassifyError::Timeout {
                        path: image.to_path_buf(),
                        timeout_ms: self.timeout.as_millis() as u64,
                    }
                } else {
                    ClassifyError::Http {
                        path: image.to_path_buf(),
                        message: format!("request to {url} failed: {e}"),
                    }
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ClassifyError::Http {
                path: image.to_path_buf(),
                message: format!("HTTP {status}: {text}"),
            });
        }

        let parsed: ClassifyResponse = resp.json().await.map_err(|e| ClassifyError::Http {
            path: image.to_path_buf(),
            message: format!("invalid response body: {e}"),
        })?;

        let label = parsed.label.trim().to_string();
        if label.is_empty() {
            return Err(ClassifyError::NoLabel {
                path: image.to_path_buf(),
            });
        }
        Ok(label)
    }
}
