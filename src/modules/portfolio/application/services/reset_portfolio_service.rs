use async_trait::async_trait;
use tracing::info;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    ResetPortfolioError, ResetPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioStore;
use crate::modules::portfolio::domain::snapshot::PortfolioSnapshot;

#[derive(Debug, Clone)]
pub struct ResetPortfolioService<S>
where
    S: PortfolioStore,
{
    store: S,
}

impl<S> ResetPortfolioService<S>
where
    S: PortfolioStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ResetPortfolioUseCase for ResetPortfolioService<S>
where
    S: PortfolioStore + Send + Sync,
{
    async fn execute(&self) -> Result<PortfolioSnapshot, ResetPortfolioError> {
        let snapshot = self.store.reset().await?;
        info!("Portfolio session reset");
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::adapter::outgoing::InMemoryPortfolioStore;
    use crate::modules::portfolio::domain::entities::Portfolio;

    #[tokio::test]
    async fn reset_returns_fresh_snapshot() {
        let store = InMemoryPortfolioStore::new();
        store
            .replace_with(Box::new(|p: &Portfolio| p.with_theme(None)))
            .await
            .unwrap();
        let service = ResetPortfolioService::new(store.clone());

        let snapshot = service.execute().await.unwrap();

        assert_eq!(snapshot.revision, 0);
        assert_eq!(snapshot.portfolio, Portfolio::default());
        assert_eq!(store.current().await.unwrap(), snapshot);
    }
}
