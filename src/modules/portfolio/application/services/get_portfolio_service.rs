use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioStore;
use crate::modules::portfolio::domain::snapshot::PortfolioSnapshot;

#[derive(Debug, Clone)]
pub struct GetPortfolioService<S>
where
    S: PortfolioStore,
{
    store: S,
}

impl<S> GetPortfolioService<S>
where
    S: PortfolioStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetPortfolioUseCase for GetPortfolioService<S>
where
    S: PortfolioStore + Send + Sync,
{
    async fn execute(&self) -> Result<PortfolioSnapshot, GetPortfolioError> {
        self.store.current().await.map_err(GetPortfolioError::from)
    }
}
