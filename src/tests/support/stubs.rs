use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    EditPortfolioError, EditPortfolioUseCase, GetPortfolioError, GetPortfolioUseCase,
    ImageUpload, IngestImageError, IngestImageUseCase, PortfolioCommand, ResetPortfolioError,
    ResetPortfolioUseCase,
};
use crate::modules::portfolio::domain::snapshot::PortfolioSnapshot;

// ============================================================
// Get
// ============================================================

pub struct StubGetPortfolioUseCase {
    pub result: Result<PortfolioSnapshot, GetPortfolioError>,
}

#[async_trait]
impl GetPortfolioUseCase for StubGetPortfolioUseCase {
    async fn execute(&self) -> Result<PortfolioSnapshot, GetPortfolioError> {
        self.result.clone()
    }
}

impl StubGetPortfolioUseCase {
    pub fn success(snapshot: PortfolioSnapshot) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(snapshot),
        })
    }

    pub fn error(err: GetPortfolioError) -> Arc<Self> {
        Arc::new(Self { result: Err(err) })
    }
}

// ============================================================
// Edit
// ============================================================

pub struct StubEditPortfolioUseCase {
    pub result: Result<PortfolioSnapshot, EditPortfolioError>,
}

#[async_trait]
impl EditPortfolioUseCase for StubEditPortfolioUseCase {
    async fn execute(
        &self,
        _command: PortfolioCommand,
    ) -> Result<PortfolioSnapshot, EditPortfolioError> {
        self.result.clone()
    }
}

impl StubEditPortfolioUseCase {
    pub fn success(snapshot: PortfolioSnapshot) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(snapshot),
        })
    }

    pub fn error(err: EditPortfolioError) -> Arc<Self> {
        Arc::new(Self { result: Err(err) })
    }
}

// ============================================================
// Ingest image
// ============================================================

pub struct StubIngestImageUseCase {
    pub result: Result<PortfolioSnapshot, IngestImageError>,
}

#[async_trait]
impl IngestImageUseCase for StubIngestImageUseCase {
    async fn execute(&self, _upload: ImageUpload) -> Result<PortfolioSnapshot, IngestImageError> {
        self.result.clone()
    }
}

impl StubIngestImageUseCase {
    pub fn success(snapshot: PortfolioSnapshot) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(snapshot),
        })
    }

    pub fn error(err: IngestImageError) -> Arc<Self> {
        Arc::new(Self { result: Err(err) })
    }
}

// ============================================================
// Reset
// ============================================================

pub struct StubResetPortfolioUseCase {
    pub result: Result<PortfolioSnapshot, ResetPortfolioError>,
}

#[async_trait]
impl ResetPortfolioUseCase for StubResetPortfolioUseCase {
    async fn execute(&self) -> Result<PortfolioSnapshot, ResetPortfolioError> {
        self.result.clone()
    }
}

impl StubResetPortfolioUseCase {
    pub fn success(snapshot: PortfolioSnapshot) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(snapshot),
        })
    }

    pub fn error(err: ResetPortfolioError) -> Arc<Self> {
        Arc::new(Self { result: Err(err) })
    }
}
