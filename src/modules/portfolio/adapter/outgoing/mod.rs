pub mod id_generator_uuid;
pub mod portfolio_store_memory;

pub use id_generator_uuid::UuidIdGenerator;
pub use portfolio_store_memory::InMemoryPortfolioStore;
