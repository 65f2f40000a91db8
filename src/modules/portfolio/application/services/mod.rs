pub mod edit_portfolio_service;
pub mod get_portfolio_service;
pub mod ingest_image_service;
pub mod reset_portfolio_service;

pub use edit_portfolio_service::EditPortfolioService;
pub use get_portfolio_service::GetPortfolioService;
pub use ingest_image_service::IngestImageService;
pub use reset_portfolio_service::ResetPortfolioService;
