//! The session controller: owns the resume document and style config for one
//! editing session, guards the asynchronous backend calls with a per-field
//! in-flight set, and triggers artifact downloads.
#![allow(dead_code)]
//!
//! All mutations happen on the single logical UI thread; the only suspension
//! points are the backend calls. A failed call leaves the document untouched
//! and always clears its in-flight key.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info};

use crate::backend::{ArtifactKind, ResumeBackend};
use crate::download::save_artifact;
use crate::errors::AppError;
use crate::models::document::ResumeDocument;
use crate::render::{render, RenderedResume};
use crate::style::{resolve, StyleConfig, TemplatePreset};

// ────────────────────────────────────────────────────────────────────────────
// In-flight tracking
// ────────────────────────────────────────────────────────────────────────────

/// Identifies the field an AI request targets. Requests for distinct keys may
/// be in flight simultaneously; a second request for the same key is
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Summary,
    Experience(usize),
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Summary => write!(f, "summary"),
            FieldKey::Experience(index) => write!(f, "experience:{index}"),
        }
    }
}

/// The set of keys with a request currently in flight.
#[derive(Debug, Default)]
pub struct InFlight {
    keys: HashSet<FieldKey>,
}

impl InFlight {
    /// Marks a key in flight. Returns false when it already was — the
    /// hard guard against double submission.
    pub fn begin(&mut self, key: FieldKey) -> bool {
        self.keys.insert(key)
    }

    pub fn finish(&mut self, key: FieldKey) {
        self.keys.remove(&key);
    }

    pub fn is_busy(&self, key: FieldKey) -> bool {
        self.keys.contains(&key)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Session
// ────────────────────────────────────────────────────────────────────────────

pub struct Session {
    pub document: ResumeDocument,
    pub config: StyleConfig,
    backend: Arc<dyn ResumeBackend>,
    in_flight: InFlight,
    download_dir: PathBuf,
}

impl Session {
    /// Starts an empty session with the default style (modern / blue / sans).
    pub fn new(backend: Arc<dyn ResumeBackend>, download_dir: &Path) -> Self {
        Session {
            document: ResumeDocument::default(),
            config: StyleConfig::default(),
            backend,
            in_flight: InFlight::default(),
            download_dir: download_dir.to_path_buf(),
        }
    }

    pub fn with_document(mut self, document: ResumeDocument) -> Self {
        self.document = document;
        self
    }

    /// Adopts a gallery preset as the active style. Selecting a preset always
    /// clears any custom accent override.
    pub fn apply_preset(&mut self, preset: &TemplatePreset) {
        self.config = StyleConfig::new(&preset.layout, &preset.color, &preset.font);
    }

    /// Pure read: resolves the active config and renders the document.
    pub fn render_preview(&self) -> RenderedResume {
        render(&self.document, &resolve(&self.config))
    }

    // ── AI operations ───────────────────────────────────────────────────────

    /// Rewrites the profile summary through the backend. Returns `Ok(false)`
    /// without calling out when there is no summary text to polish.
    pub async fn polish_summary(&mut self) -> Result<bool, AppError> {
        let Some(text) = self
            .document
            .personal
            .summary
            .clone()
            .filter(|s| !s.is_empty())
        else {
            return Ok(false);
        };

        let key = FieldKey::Summary;
        if !self.in_flight.begin(key) {
            return Err(AppError::RequestInFlight(key.to_string()));
        }

        let result = self.backend.optimize_text(&text).await;
        self.in_flight.finish(key);

        match result {
            Ok(polished) => {
                self.document.personal.summary = Some(polished);
                Ok(true)
            }
            Err(err) => {
                error!("summary polish failed: {err}");
                Err(err.into())
            }
        }
    }

    /// Generates a summary from the whole document, filling or overwriting
    /// the summary field.
    pub async fn generate_summary(&mut self) -> Result<(), AppError> {
        let key = FieldKey::Summary;
        if !self.in_flight.begin(key) {
            return Err(AppError::RequestInFlight(key.to_string()));
        }

        let result = self.backend.generate_summary(&self.document).await;
        self.in_flight.finish(key);

        match result {
            Ok(summary) => {
                self.document.personal.summary = Some(summary);
                Ok(())
            }
            Err(err) => {
                error!("summary generation failed: {err}");
                Err(err.into())
            }
        }
    }

    /// Rewrites one experience description. Returns `Ok(false)` for an
    /// out-of-range index or an empty description.
    pub async fn polish_experience(&mut self, index: usize) -> Result<bool, AppError> {
        let Some(text) = self
            .document
            .experience
            .get(index)
            .and_then(|entry| entry.description.clone())
            .filter(|s| !s.is_empty())
        else {
            return Ok(false);
        };

        let key = FieldKey::Experience(index);
        if !self.in_flight.begin(key) {
            return Err(AppError::RequestInFlight(key.to_string()));
        }

        let result = self.backend.optimize_text(&text).await;
        self.in_flight.finish(key);

        match result {
            Ok(polished) => {
                if let Some(entry) = self.document.experience.get_mut(index) {
                    entry.description = Some(polished);
                }
                Ok(true)
            }
            Err(err) => {
                error!("experience polish failed: {err}");
                Err(err.into())
            }
        }
    }

    // ── Downloads ───────────────────────────────────────────────────────────

    /// Requests the artifact for the current document and layout, then saves
    /// it under its canonical filename. Returns the written path.
    pub async fn download(&self, kind: ArtifactKind) -> Result<PathBuf, AppError> {
        let bytes = self
            .backend
            .generate_artifact(&self.document, &self.config.layout, kind)
            .await
            .map_err(|err| {
                error!("artifact request failed: {err}");
                err
            })?;

        let path = save_artifact(&self.download_dir, kind, &bytes)?;
        info!("saved {}", path.display());
        Ok(path)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use bytes::Bytes;

    use crate::backend::BackendError;
    use crate::models::document::{ExperienceField, PersonalField};

    /// Scripted stand-in for the external service.
    #[derive(Default)]
    struct StubBackend {
        fail: bool,
        optimize_calls: AtomicUsize,
    }

    impl StubBackend {
        fn failing() -> Self {
            StubBackend {
                fail: true,
                ..StubBackend::default()
            }
        }

        fn err() -> BackendError {
            BackendError::Api {
                status: 500,
                message: "stub failure".to_string(),
            }
        }
    }

    #[async_trait]
    impl ResumeBackend for StubBackend {
        async fn generate_artifact(
            &self,
            _doc: &ResumeDocument,
            _layout: &str,
            _kind: ArtifactKind,
        ) -> Result<Bytes, BackendError> {
            if self.fail {
                return Err(Self::err());
            }
            Ok(Bytes::from_static(b"%PDF-1.7 stub artifact"))
        }

        async fn optimize_text(&self, text: &str) -> Result<String, BackendError> {
            self.optimize_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Self::err());
            }
            Ok(format!("Polished: {text}"))
        }

        async fn generate_summary(&self, _doc: &ResumeDocument) -> Result<String, BackendError> {
            if self.fail {
                return Err(Self::err());
            }
            Ok("Generated summary.".to_string())
        }
    }

    fn make_session(backend: StubBackend) -> Session {
        Session::new(Arc::new(backend), Path::new("."))
    }

    #[test]
    fn test_field_key_display() {
        assert_eq!(FieldKey::Summary.to_string(), "summary");
        assert_eq!(FieldKey::Experience(2).to_string(), "experience:2");
    }

    #[test]
    fn test_in_flight_rejects_second_begin() {
        let mut in_flight = InFlight::default();
        assert!(in_flight.begin(FieldKey::Summary));
        assert!(!in_flight.begin(FieldKey::Summary));
        // A different key is unaffected.
        assert!(in_flight.begin(FieldKey::Experience(0)));

        in_flight.finish(FieldKey::Summary);
        assert!(!in_flight.is_busy(FieldKey::Summary));
        assert!(in_flight.begin(FieldKey::Summary));
    }

    #[tokio::test]
    async fn test_polish_summary_replaces_text() {
        let mut session = make_session(StubBackend::default());
        session
            .document
            .set_personal_field(PersonalField::Summary, "I do things.");

        assert!(session.polish_summary().await.unwrap());
        assert_eq!(
            session.document.personal.summary.as_deref(),
            Some("Polished: I do things.")
        );
        assert!(!session.in_flight.is_busy(FieldKey::Summary));
    }

    #[tokio::test]
    async fn test_polish_summary_is_noop_without_text() {
        let stub = Arc::new(StubBackend::default());
        let mut session = Session::new(stub.clone(), Path::new("."));

        assert!(!session.polish_summary().await.unwrap());
        // The backend was never called.
        assert_eq!(stub.optimize_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_polish_summary_failure_leaves_document_unchanged() {
        let mut session = make_session(StubBackend::failing());
        session
            .document
            .set_personal_field(PersonalField::Summary, "Original text.");

        let result = session.polish_summary().await;
        assert!(matches!(result, Err(AppError::Backend(_))));
        assert_eq!(
            session.document.personal.summary.as_deref(),
            Some("Original text.")
        );
        // The in-flight key is cleared on the failure path.
        assert!(!session.in_flight.is_busy(FieldKey::Summary));
    }

    #[tokio::test]
    async fn test_double_submission_is_rejected() {
        let mut session = make_session(StubBackend::default());
        session
            .document
            .set_personal_field(PersonalField::Summary, "Text.");

        session.in_flight.begin(FieldKey::Summary);
        let result = session.polish_summary().await;
        assert!(matches!(result, Err(AppError::RequestInFlight(_))));
        // The pre-existing flight's key is NOT cleared by the rejection.
        assert!(session.in_flight.is_busy(FieldKey::Summary));
    }

    #[tokio::test]
    async fn test_distinct_keys_do_not_block_each_other() {
        let mut session = make_session(StubBackend::default());
        session
            .document
            .set_personal_field(PersonalField::Summary, "Text.");

        // An experience request in flight does not block the summary.
        session.in_flight.begin(FieldKey::Experience(0));
        assert!(session.polish_summary().await.unwrap());
    }

    #[tokio::test]
    async fn test_generate_summary_overwrites_existing() {
        let mut session = make_session(StubBackend::default());
        session
            .document
            .set_personal_field(PersonalField::Summary, "Old.");

        session.generate_summary().await.unwrap();
        assert_eq!(
            session.document.personal.summary.as_deref(),
            Some("Generated summary.")
        );
    }

    #[tokio::test]
    async fn test_polish_experience_targets_one_entry() {
        let mut session = make_session(StubBackend::default());
        session.document.append_experience();
        session.document.append_experience();
        session
            .document
            .set_experience_field(0, ExperienceField::Description, "First.");
        session
            .document
            .set_experience_field(1, ExperienceField::Description, "Second.");

        assert!(session.polish_experience(1).await.unwrap());
        assert_eq!(
            session.document.experience[0].description.as_deref(),
            Some("First.")
        );
        assert_eq!(
            session.document.experience[1].description.as_deref(),
            Some("Polished: Second.")
        );
    }

    #[tokio::test]
    async fn test_polish_experience_out_of_range_is_noop() {
        let mut session = make_session(StubBackend::default());
        assert!(!session.polish_experience(7).await.unwrap());
    }

    #[tokio::test]
    async fn test_download_writes_artifact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let backend: Arc<dyn ResumeBackend> = Arc::new(StubBackend::default());
        let session = Session::new(backend, dir.path());

        let path = session.download(ArtifactKind::Pdf).await.unwrap();
        assert_eq!(
            std::fs::read(&path).unwrap(),
            b"%PDF-1.7 stub artifact".to_vec()
        );
    }

    #[tokio::test]
    async fn test_download_failure_surfaces_backend_error() {
        let dir = tempfile::tempdir().unwrap();
        let backend: Arc<dyn ResumeBackend> = Arc::new(StubBackend::failing());
        let session = Session::new(backend, dir.path());

        let result = session.download(ArtifactKind::Docx).await;
        assert!(matches!(result, Err(AppError::Backend(_))));
        assert!(!dir.path().join("resume.docx").exists());
    }

    #[test]
    fn test_apply_preset_clears_custom_color() {
        let mut session = make_session(StubBackend::default());
        session.config = StyleConfig::with_custom_color("modern", "sans", "#123456");

        let preset = crate::style::template_gallery()
            .iter()
            .find(|p| p.name == "Goldman Sachs")
            .unwrap();
        session.apply_preset(preset);

        assert_eq!(session.config.layout, "classic");
        assert_eq!(session.config.color, "blue");
        assert_eq!(session.config.font, "serif");
        assert!(session.config.custom_color.is_none());
    }

    #[test]
    fn test_render_preview_reflects_current_state() {
        let mut session = make_session(StubBackend::default());
        session
            .document
            .set_personal_field(PersonalField::FullName, "Ada Lovelace");

        let rendered = session.render_preview();
        assert_eq!(rendered.layout, crate::render::Layout::Modern);
        assert_eq!(rendered.accent, "#2563EB");
    }
}
