use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::PortfolioStoreError;
use crate::modules::portfolio::domain::snapshot::PortfolioSnapshot;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResetPortfolioError {
    #[error("Store error: {0}")]
    StoreError(String),
}

impl From<PortfolioStoreError> for ResetPortfolioError {
    fn from(err: PortfolioStoreError) -> Self {
        match err {
            PortfolioStoreError::Unavailable(msg) => ResetPortfolioError::StoreError(msg),
        }
    }
}

/// Ends the current editing session and starts a fresh one.
#[async_trait]
pub trait ResetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioSnapshot, ResetPortfolioError>;
}
