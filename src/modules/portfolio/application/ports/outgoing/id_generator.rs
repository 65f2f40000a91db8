use crate::modules::portfolio::domain::entities::EntryId;

/// Source of ids for new projects, experience and education entries.
/// Implementations must never hand out the same id twice in one process.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> EntryId;
}
