use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::IdGenerator;
use crate::modules::portfolio::domain::entities::EntryId;

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> EntryId {
        EntryId::new(Uuid::new_v4().to_string())
    }
}
