use std::sync::Arc;

use actix_web::web;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    EditPortfolioUseCase, GetPortfolioUseCase, IngestImageUseCase, ResetPortfolioUseCase,
};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::domain::snapshot::PortfolioSnapshot;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    get: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    edit: Arc<dyn EditPortfolioUseCase + Send + Sync>,
    ingest_image: Arc<dyn IngestImageUseCase + Send + Sync>,
    reset: Arc<dyn ResetPortfolioUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get: StubGetPortfolioUseCase::success(PortfolioSnapshot::initial()),
            edit: StubEditPortfolioUseCase::success(PortfolioSnapshot::initial()),
            ingest_image: StubIngestImageUseCase::success(PortfolioSnapshot::initial()),
            reset: StubResetPortfolioUseCase::success(PortfolioSnapshot::initial()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_portfolio(mut self, uc: Arc<dyn GetPortfolioUseCase + Send + Sync>) -> Self {
        self.get = uc;
        self
    }

    pub fn with_edit_portfolio(mut self, uc: Arc<dyn EditPortfolioUseCase + Send + Sync>) -> Self {
        self.edit = uc;
        self
    }

    pub fn with_ingest_image(mut self, uc: Arc<dyn IngestImageUseCase + Send + Sync>) -> Self {
        self.ingest_image = uc;
        self
    }

    pub fn with_reset_portfolio(
        mut self,
        uc: Arc<dyn ResetPortfolioUseCase + Send + Sync>,
    ) -> Self {
        self.reset = uc;
        self
    }

    /// Wires real use cases, e.g. services over an in-memory store.
    pub fn with_use_cases(mut self, use_cases: PortfolioUseCases) -> Self {
        self.get = use_cases.get;
        self.edit = use_cases.edit;
        self.ingest_image = use_cases.ingest_image;
        self.reset = use_cases.reset;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: PortfolioUseCases {
                get: self.get,
                edit: self.edit,
                ingest_image: self.ingest_image,
                reset: self.reset,
            },
        })
    }
}
