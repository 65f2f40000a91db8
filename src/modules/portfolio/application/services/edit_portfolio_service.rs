use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    EditPortfolioError, EditPortfolioUseCase, PortfolioCommand,
};
use crate::modules::portfolio::application::ports::outgoing::{
    IdGenerator, PortfolioEdit, PortfolioStore,
};
use crate::modules::portfolio::domain::entities::Portfolio;
use crate::modules::portfolio::domain::snapshot::PortfolioSnapshot;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct EditPortfolioService<S, G>
where
    S: PortfolioStore,
    G: IdGenerator,
{
    store: S,
    ids: Arc<G>,
}

impl<S, G> EditPortfolioService<S, G>
where
    S: PortfolioStore,
    G: IdGenerator,
{
    pub fn new(store: S, ids: Arc<G>) -> Self {
        Self { store, ids }
    }
}

#[async_trait]
impl<S, G> EditPortfolioUseCase for EditPortfolioService<S, G>
where
    S: PortfolioStore + Send + Sync,
    G: IdGenerator + 'static,
{
    async fn execute(
        &self,
        command: PortfolioCommand,
    ) -> Result<PortfolioSnapshot, EditPortfolioError> {
        let kind = command.kind();
        let ids = Arc::clone(&self.ids);
        let edit: PortfolioEdit =
            Box::new(move |portfolio: &Portfolio| command.apply_to(portfolio, ids.as_ref()));

        match self.store.replace_with(edit).await {
            Ok(snapshot) => {
                debug!(command = kind, revision = snapshot.revision, "Portfolio edited");
                Ok(snapshot)
            }
            Err(e) => {
                error!(command = kind, "Failed to apply portfolio edit: {}", e);
                Err(EditPortfolioError::from(e))
            }
        }
    }
}
