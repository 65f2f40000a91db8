// src/modules/portfolio/application/ports/outgoing/portfolio_store.rs

use async_trait::async_trait;

use crate::modules::portfolio::domain::entities::Portfolio;
use crate::modules::portfolio::domain::snapshot::PortfolioSnapshot;

/// Derives the next portfolio from the one current at the time it runs.
pub type PortfolioEdit = Box<dyn FnOnce(&Portfolio) -> Portfolio + Send>;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioStoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (holds the single session snapshot)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioStore: Send + Sync {
    async fn current(&self) -> Result<PortfolioSnapshot, PortfolioStoreError>;

    /// Read-modify-write as one step: no other edit runs between reading the
    /// current portfolio and storing the result.
    async fn replace_with(
        &self,
        edit: PortfolioEdit,
    ) -> Result<PortfolioSnapshot, PortfolioStoreError>;

    /// Discards the document and starts over from the default portfolio.
    async fn reset(&self) -> Result<PortfolioSnapshot, PortfolioStoreError>;
}
