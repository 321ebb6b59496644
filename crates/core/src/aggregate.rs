//! Aggregate root trait for the domain models.

use crate::error::{DomainError, DomainResult};

/// Aggregate root marker + minimal interface.
///
/// Aggregates mutate their own state in place and reject changes that would
/// break an invariant by returning a [`DomainError`]. Loading and saving is
/// left to the application layer.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;
}

/// Raise `error` unless `condition` holds.
///
/// ```ignore
/// ensure(!self.is_closed(), DomainError::invariant("reservation already closed"))?;
/// ```
pub fn ensure(condition: bool, error: DomainError) -> DomainResult<()> {
    if condition { Ok(()) } else { Err(error) }
}
