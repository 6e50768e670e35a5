//! Turning user-selected image files into displayable slide references.
//!
//! An image slide stores a `data:` URI so a saved story is self-contained.

use base64::Engine;
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Failed to read image '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image '{path}' is {size} bytes, limit is {limit}")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("'{path}' is not a supported image: {source}")]
    Unsupported {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Not an image data URI")]
    NotDataUri,

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Reads image files and encodes them as `data:` URIs.
#[derive(Debug, Clone)]
pub struct ImageLoader {
    max_bytes: u64,
}

impl ImageLoader {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    /// Read `path` and produce a `data:image/...;base64,` reference.
    ///
    /// The content must decode as an image; the extension is not trusted.
    pub async fn load(&self, path: &Path) -> Result<String, MediaError> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|source| MediaError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        if metadata.len() > self.max_bytes {
            return Err(MediaError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit: self.max_bytes,
            });
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| MediaError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let format = image::guess_format(&bytes).map_err(|source| MediaError::Unsupported {
            path: path.to_path_buf(),
            source,
        })?;
        image::load_from_memory_with_format(&bytes, format).map_err(|source| {
            MediaError::Unsupported {
                path: path.to_path_buf(),
                source,
            }
        })?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), ?format, "Image loaded");
        Ok(encode_data_uri(format, &bytes))
    }
}

pub fn encode_data_uri(format: ImageFormat, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", format.to_mime_type(), encoded)
}

/// Decode a reference produced by [`ImageLoader::load`].
pub fn decode_data_uri(uri: &str) -> Result<DynamicImage, MediaError> {
    let (header, payload) = uri
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(','))
        .ok_or(MediaError::NotDataUri)?;
    if !header.ends_with(";base64") {
        return Err(MediaError::NotDataUri);
    }
    let bytes = base64::engine::general_purpose::STANDARD.decode(payload)?;
    Ok(image::load_from_memory(&bytes)?)
}
