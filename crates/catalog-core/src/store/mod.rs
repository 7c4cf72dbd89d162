//! Storage abstraction for Catalog Search.
//!
//! The [`Catalog`] trait is the only view the resolvers have of the data:
//! an ordered, read-only slice of items. The catalog is fully populated
//! before anything reads from it and never changes afterwards, so
//! implementations need no interior mutability.
//!
//! Implementations must be `Send + Sync` so one instance can be shared
//! across request handlers.

pub mod memory;
pub mod seed;

use crate::models::Item;

/// Read-only access to the canonical item sequence.
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`all`](Catalog::all) | Every item, in catalog order |
/// | [`len`](Catalog::len) | Number of items |
pub trait Catalog: Send + Sync {
    /// Every item in catalog order. Repeated calls return the same slice.
    fn all(&self) -> &[Item];

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}
