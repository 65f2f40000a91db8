use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::PortfolioStoreError;
use crate::modules::portfolio::domain::entities::{EntryId, ImageSource, Portfolio};
use crate::modules::portfolio::domain::patch::{EntryPatch, PatchField, PersonalInfoPatch, ProjectPatch};
use crate::modules::portfolio::domain::policies::ImageRejection;
use crate::modules::portfolio::domain::sections::update_keyed;
use crate::modules::portfolio::domain::snapshot::PortfolioSnapshot;

//
// ──────────────────────────────────────────────────────────
// Ingest Image Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageTarget {
    Avatar,
    Project(EntryId),
}

impl ImageTarget {
    /// What the target holds now; `None` when the project does not exist.
    pub fn current_source(&self, portfolio: &Portfolio) -> Option<ImageSource> {
        match self {
            ImageTarget::Avatar => Some(portfolio.personal_info.avatar_source()),
            ImageTarget::Project(id) => portfolio
                .projects
                .iter()
                .find(|p| &p.id == id)
                .map(|p| p.image_source()),
        }
    }

    /// Stores `image_url` verbatim on the target field.
    pub fn apply(&self, portfolio: &Portfolio, image_url: String) -> Portfolio {
        match self {
            ImageTarget::Avatar => {
                let patch = PersonalInfoPatch {
                    avatar: PatchField::Value(image_url),
                    ..Default::default()
                };
                portfolio.with_personal_info(patch.merge_into(&portfolio.personal_info))
            }
            ImageTarget::Project(id) => {
                let patch = ProjectPatch {
                    image_url: PatchField::Value(image_url),
                    ..Default::default()
                };
                portfolio.with_projects(update_keyed(&portfolio.projects, id, &patch))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub target: ImageTarget,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestImageError {
    #[error("Not an image: {0}")]
    NotAnImage(String),

    #[error("Image too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    TooLarge { max_bytes: u64, actual_bytes: u64 },

    #[error("Store error: {0}")]
    StoreError(String),
}

impl From<ImageRejection> for IngestImageError {
    fn from(err: ImageRejection) -> Self {
        match err {
            ImageRejection::NotAnImage(mime) => IngestImageError::NotAnImage(mime),
            ImageRejection::TooLarge {
                max_bytes,
                actual_bytes,
            } => IngestImageError::TooLarge {
                max_bytes,
                actual_bytes,
            },
        }
    }
}

impl From<PortfolioStoreError> for IngestImageError {
    fn from(err: PortfolioStoreError) -> Self {
        match err {
            PortfolioStoreError::Unavailable(msg) => IngestImageError::StoreError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait IngestImageUseCase: Send + Sync {
    async fn execute(&self, upload: ImageUpload) -> Result<PortfolioSnapshot, IngestImageError>;
}
