pub mod entities;
pub mod patch;
pub mod policies;
pub mod sections;
pub mod snapshot;
