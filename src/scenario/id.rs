//! Identifier sources for steps and scenarios.

#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

/// Supplies identifiers for steps and for scenario groups.
#[cfg_attr(test, automock)]
pub trait IdSource: Send + Sync {
    /// Return a fresh identifier.
    fn next_id(&self) -> String;
}

/// Random version 4 UUIDs in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
