use std::io;

use thiserror::Error;

use crate::backend::BackendError;

/// Application-level error type. Only the network boundary and the filesystem
/// download step can fail at runtime — the document model, the style
/// resolver, and the renderer are total and never surface here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("request already in flight for {0}")]
    RequestInFlight(String),

    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("download error: {0}")]
    Download(#[from] io::Error),
}

impl AppError {
    /// The generic notice shown to the user. Detail stays in the logs; the
    /// document is left untouched by whatever failed.
    pub fn user_notice(&self) -> &'static str {
        match self {
            AppError::RequestInFlight(_) => "A request for this field is already running.",
            AppError::Backend(_) => "The resume service is unavailable. Please try again.",
            AppError::Download(_) => "Failed to save the file. Please try again.",
        }
    }
}
