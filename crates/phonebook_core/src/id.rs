//! Identifier generation for new contacts.

use std::cell::Cell;
use uuid::Uuid;

/// Source of fresh contact ids.
///
/// Ids are statistically unique; the store still rejects collisions with
/// ids already in use.
pub trait IdGenerator {
    fn generate(&self) -> String;
}

/// Random v4 UUID ids in simple (hyphen-less) form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Deterministic `"{prefix}-{n}"` ids, counting up from `start`.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    prefix: String,
    next: Cell<u64>,
}

impl SequenceIdGenerator {
    pub fn new(prefix: impl Into<String>, start: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: Cell::new(start),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.get();
        self.next.set(n.wrapping_add(1));
        format!("{}-{n}", self.prefix)
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for &T {
    fn generate(&self) -> String {
        (**self).generate()
    }
}
