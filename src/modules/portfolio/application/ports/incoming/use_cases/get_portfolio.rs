use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::PortfolioStoreError;
use crate::modules::portfolio::domain::snapshot::PortfolioSnapshot;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPortfolioError {
    #[error("Store error: {0}")]
    StoreError(String),
}

impl From<PortfolioStoreError> for GetPortfolioError {
    fn from(err: PortfolioStoreError) -> Self {
        match err {
            PortfolioStoreError::Unavailable(msg) => GetPortfolioError::StoreError(msg),
        }
    }
}

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioSnapshot, GetPortfolioError>;
}
