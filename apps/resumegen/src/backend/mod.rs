//! Backend client — the single point of entry for all calls to the external
//! resume service (PDF/DOCX artifact generation and AI text rewriting).
//!
//! No other module may talk to the service directly. The service is a black
//! box: requests are fired without retries and without a client-side timeout;
//! a failed call surfaces as a [`BackendError`] for the caller to catch, and
//! never mutates local state.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::document::ResumeDocument;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// The downloadable artifact formats the backend can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Pdf,
    Docx,
}

impl ArtifactKind {
    /// Filename offered to the save-as-download primitive.
    pub fn filename(self) -> &'static str {
        match self {
            ArtifactKind::Pdf => "resume.pdf",
            ArtifactKind::Docx => "resume.docx",
        }
    }

    fn endpoint(self) -> &'static str {
        match self {
            ArtifactKind::Pdf => "/generate/pdf",
            ArtifactKind::Docx => "/generate/docx",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

/// Artifact request body: the document fields plus the selected layout id
/// under the `template` key.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    #[serde(flatten)]
    document: &'a ResumeDocument,
    template: &'a str,
}

#[derive(Debug, Serialize)]
struct OptimizeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct OptimizeResponse {
    optimized_text: String,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    summary: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait seam
// ────────────────────────────────────────────────────────────────────────────

/// The four operations of the external service, behind an object-safe trait
/// so the session controller can run against a stub in tests.
#[async_trait]
pub trait ResumeBackend: Send + Sync {
    /// Requests a rendered artifact for the document under the given layout.
    async fn generate_artifact(
        &self,
        doc: &ResumeDocument,
        layout: &str,
        kind: ArtifactKind,
    ) -> Result<Bytes, BackendError>;

    /// Rewrites a free-text passage to be more professional.
    async fn optimize_text(&self, text: &str) -> Result<String, BackendError>;

    /// Generates a profile summary from the whole document.
    async fn generate_summary(&self, doc: &ResumeDocument) -> Result<String, BackendError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP implementation
// ────────────────────────────────────────────────────────────────────────────

/// Production implementation speaking JSON over HTTP to the configured
/// backend base URL.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, BackendError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl ResumeBackend for HttpBackend {
    async fn generate_artifact(
        &self,
        doc: &ResumeDocument,
        layout: &str,
        kind: ArtifactKind,
    ) -> Result<Bytes, BackendError> {
        let request = GenerateRequest {
            document: doc,
            template: layout,
        };
        let response = self.post_json(kind.endpoint(), &request).await?;
        let bytes = response.bytes().await?;

        debug!(
            "artifact received: {} ({} bytes)",
            kind.filename(),
            bytes.len()
        );
        Ok(bytes)
    }

    async fn optimize_text(&self, text: &str) -> Result<String, BackendError> {
        let response = self
            .post_json("/ai/optimize", &OptimizeRequest { text })
            .await?;
        let body: OptimizeResponse = response.json().await?;
        Ok(body.optimized_text)
    }

    async fn generate_summary(&self, doc: &ResumeDocument) -> Result<String, BackendError> {
        let response = self.post_json("/ai/summary", doc).await?;
        let body: SummaryResponse = response.json().await?;
        Ok(body.summary)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::PersonalField;

    #[test]
    fn test_generate_request_flattens_document_beside_template() {
        let mut doc = ResumeDocument::default();
        doc.set_personal_field(PersonalField::FullName, "Ada Lovelace");
        doc.skills = vec!["Rust".to_string()];

        let request = GenerateRequest {
            document: &doc,
            template: "modern",
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["template"], "modern");
        assert_eq!(value["personal"]["fullName"], "Ada Lovelace");
        assert_eq!(value["skills"][0], "Rust");
    }

    #[test]
    fn test_artifact_filenames() {
        assert_eq!(ArtifactKind::Pdf.filename(), "resume.pdf");
        assert_eq!(ArtifactKind::Docx.filename(), "resume.docx");
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let backend = HttpBackend::new("http://localhost:8000/".to_string());
        assert_eq!(backend.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_optimize_response_shape() {
        let body: OptimizeResponse =
            serde_json::from_str(r#"{"optimized_text": "Polished."}"#).unwrap();
        assert_eq!(body.optimized_text, "Polished.");
    }
}
