use std::sync::atomic::{AtomicU64, Ordering};

use crate::modules::portfolio::application::ports::outgoing::IdGenerator;
use crate::modules::portfolio::domain::entities::EntryId;

/// Monotonic `<prefix>-<n>` ids, starting at 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> EntryId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        EntryId::new(format!("{}-{}", self.prefix, n))
    }
}

#[test]
fn sequential_ids_increase() {
    let generator = SequentialIdGenerator::new("project");

    assert_eq!(generator.next_id(), EntryId::new("project-1"));
    assert_eq!(generator.next_id(), EntryId::new("project-2"));
}
