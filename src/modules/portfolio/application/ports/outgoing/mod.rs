pub mod id_generator;
pub mod portfolio_store;

pub use id_generator::IdGenerator;
pub use portfolio_store::{PortfolioEdit, PortfolioStore, PortfolioStoreError};
