use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::sink::{SaveError, SaveReceipt, StorySink};
use crate::story::SavePayload;

/// Writes each story as pretty JSON under a directory.
///
/// File name is `<slug>-<kind>.json`; saving again overwrites it. Writes go
/// through a temporary file and a rename.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, payload: &SavePayload) -> PathBuf {
        self.dir
            .join(format!("{}-{}.json", slugify(&payload.title), payload.kind.label()))
    }
}

#[async_trait]
impl StorySink for FileSink {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn save(&self, payload: SavePayload) -> Result<SaveReceipt, SaveError> {
        payload.validate()?;

        let path = self.path_for(&payload);
        let json = serde_json::to_vec_pretty(&payload)?;
        let io_error = |source| SaveError::Io {
            path: path.clone(),
            source,
        };

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(io_error)?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json).await.map_err(io_error)?;
        tokio::fs::rename(&tmp, &path).await.map_err(io_error)?;

        tracing::info!(
            path = %path.display(),
            kind = payload.kind.label(),
            slides = payload.slides.len(),
            "Story saved"
        );
        Ok(SaveReceipt {
            kind: payload.kind,
            location: path.display().to_string(),
            saved_at: SystemTime::now(),
        })
    }
}

/// Read a payload previously written by [`FileSink`].
pub async fn load_payload(path: &Path) -> Result<SavePayload, SaveError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| SaveError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Lowercase ASCII alphanumerics joined by single dashes.
fn slugify(title: &str) -> String {
    let mut slug = String::new();
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}
