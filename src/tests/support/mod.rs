pub mod app_state_builder;
pub mod portfolio_fixtures;
pub mod sequential_id_generator;
pub mod stubs;
