//! Client-side save-as-download: writes a fetched artifact to disk under its
//! canonical filename.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::backend::ArtifactKind;

/// Saves artifact bytes as `resume.pdf` / `resume.docx` inside `dir`,
/// creating the directory if needed. Returns the written path.
pub fn save_artifact(dir: &Path, kind: ArtifactKind, bytes: &[u8]) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(kind.filename());
    fs::write(&path, bytes)?;
    Ok(path)
}
