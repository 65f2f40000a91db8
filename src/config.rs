use std::env;

use anyhow::Context;

use crate::modules::portfolio::domain::policies::ImagePolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub image_policy: ImagePolicy,
    /// Limit for JSON edit bodies, independent of the image limit.
    pub json_max_bytes: usize,
}

impl AppConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8080;
    /// Room for a `setProjects` echoing a snapshot full of base64 data URLs.
    pub const DEFAULT_JSON_MAX_BYTES: usize = 64 * 1024 * 1024; // 64MiB

    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Blank values fall back to defaults; unparsable numbers are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = read("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());

        let port = match read("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {raw}"))?,
            None => Self::DEFAULT_PORT,
        };

        let max_bytes = match read("IMAGE_MAX_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid IMAGE_MAX_BYTES value: {raw}"))?,
            None => ImagePolicy::DEFAULT_MAX_FILE_SIZE_BYTES,
        };

        if max_bytes == 0 {
            anyhow::bail!("IMAGE_MAX_BYTES must be greater than zero");
        }

        let json_max_bytes = match read("JSON_MAX_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid JSON_MAX_BYTES value: {raw}"))?,
            None => Self::DEFAULT_JSON_MAX_BYTES,
        };

        if json_max_bytes == 0 {
            anyhow::bail!("JSON_MAX_BYTES must be greater than zero");
        }

        Ok(Self {
            host,
            port,
            image_policy: ImagePolicy::new(max_bytes),
            json_max_bytes,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Raw upload bodies; oversize images up to this size still get the typed 413.
    pub fn payload_limit_bytes(&self) -> usize {
        usize::try_from(self.image_policy.max_file_size_bytes.saturating_mul(2))
            .unwrap_or(usize::MAX)
    }
}
