use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::modules::portfolio::domain::entities::DATA_URL_PREFIX;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageRejection {
    #[error("Not an image: {0}")]
    NotAnImage(String),

    #[error("Image too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    TooLarge { max_bytes: u64, actual_bytes: u64 },
}

/// Rules for turning a user-selected image into an inline data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePolicy {
    pub max_file_size_bytes: u64,
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
        }
    }
}

impl ImagePolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024; // 5MiB
    pub const MIME_PREFIX: &'static str = "image/";

    pub fn new(max_file_size_bytes: u64) -> Self {
        Self {
            max_file_size_bytes,
        }
    }

    /// Type is checked before size.
    pub fn check(&self, mime_type: &str, size_bytes: u64) -> Result<(), ImageRejection> {
        if !mime_type.starts_with(Self::MIME_PREFIX) {
            return Err(ImageRejection::NotAnImage(mime_type.to_string()));
        }

        if size_bytes > self.max_file_size_bytes {
            return Err(ImageRejection::TooLarge {
                max_bytes: self.max_file_size_bytes,
                actual_bytes: size_bytes,
            });
        }

        Ok(())
    }

    /// `data:<mime>;base64,<payload>`
    pub fn to_data_url(&self, mime_type: &str, bytes: &[u8]) -> Result<String, ImageRejection> {
        self.check(mime_type, bytes.len() as u64)?;

        Ok(format!(
            "{DATA_URL_PREFIX}{mime_type};base64,{}",
            STANDARD.encode(bytes)
        ))
    }
}
