use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    ImageUpload, IngestImageError, IngestImageUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioStore;
use crate::modules::portfolio::domain::entities::Portfolio;
use crate::modules::portfolio::domain::policies::ImagePolicy;
use crate::modules::portfolio::domain::snapshot::PortfolioSnapshot;

pub struct IngestImageService<S>
where
    S: PortfolioStore,
{
    store: S,
    policy: ImagePolicy,
}

impl<S> IngestImageService<S>
where
    S: PortfolioStore,
{
    pub fn new(store: S, policy: ImagePolicy) -> Self {
        Self { store, policy }
    }
}

#[async_trait]
impl<S> IngestImageUseCase for IngestImageService<S>
where
    S: PortfolioStore + Send + Sync,
{
    async fn execute(&self, upload: ImageUpload) -> Result<PortfolioSnapshot, IngestImageError> {
        // Encoding happens outside the store; the result lands on whatever
        // snapshot is current once it is ready.
        let data_url = self
            .policy
            .to_data_url(&upload.mime_type, &upload.bytes)
            .map_err(|rejection| {
                warn!(target_field = ?upload.target, "Image rejected: {}", rejection);
                IngestImageError::from(rejection)
            })?;

        let target = upload.target;
        info!(
            target_field = ?target,
            size_bytes = upload.bytes.len(),
            "Image ingested as data URL"
        );

        self.store
            .replace_with(Box::new(move |portfolio: &Portfolio| {
                match target.current_source(portfolio) {
                    Some(previous) => {
                        debug!(target_field = ?target, previous = ?previous, "Replacing image")
                    }
                    None => warn!(target_field = ?target, "Image target no longer exists"),
                }
                target.apply(portfolio, data_url)
            }))
            .await
            .map_err(IngestImageError::from)
    }
}
