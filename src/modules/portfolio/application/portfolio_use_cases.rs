use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    EditPortfolioUseCase, GetPortfolioUseCase, IngestImageUseCase, ResetPortfolioUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub edit: Arc<dyn EditPortfolioUseCase + Send + Sync>,
    pub ingest_image: Arc<dyn IngestImageUseCase + Send + Sync>,
    pub reset: Arc<dyn ResetPortfolioUseCase + Send + Sync>,
}
