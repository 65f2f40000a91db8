mod edit_portfolio;
mod get_portfolio;
mod ingest_image;
mod reset_portfolio;

pub use edit_portfolio::{EditPortfolioError, EditPortfolioUseCase, PortfolioCommand};
pub use get_portfolio::{GetPortfolioError, GetPortfolioUseCase};
pub use ingest_image::{ImageTarget, ImageUpload, IngestImageError, IngestImageUseCase};
pub use reset_portfolio::{ResetPortfolioError, ResetPortfolioUseCase};
