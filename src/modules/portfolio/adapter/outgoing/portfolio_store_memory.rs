// src/modules/portfolio/adapter/outgoing/portfolio_store_memory.rs

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioEdit, PortfolioStore, PortfolioStoreError,
};
use crate::modules::portfolio::domain::snapshot::PortfolioSnapshot;

/// Session store living in process memory. Clones share the same snapshot.
#[derive(Clone)]
pub struct InMemoryPortfolioStore {
    snapshot: Arc<RwLock<PortfolioSnapshot>>,
}

impl InMemoryPortfolioStore {
    pub fn new() -> Self {
        Self::with_snapshot(PortfolioSnapshot::initial())
    }

    pub fn with_snapshot(snapshot: PortfolioSnapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(snapshot)),
        }
    }
}

impl Default for InMemoryPortfolioStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PortfolioStore for InMemoryPortfolioStore {
    async fn current(&self) -> Result<PortfolioSnapshot, PortfolioStoreError> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn replace_with(
        &self,
        edit: PortfolioEdit,
    ) -> Result<PortfolioSnapshot, PortfolioStoreError> {
        // Held across the edit so concurrent edits apply one after another.
        let mut guard = self.snapshot.write().await;
        let next = guard.succeed(edit(&guard.portfolio));
        *guard = next.clone();
        Ok(next)
    }

    async fn reset(&self) -> Result<PortfolioSnapshot, PortfolioStoreError> {
        let mut guard = self.snapshot.write().await;
        *guard = PortfolioSnapshot::initial();
        Ok(guard.clone())
    }
}
