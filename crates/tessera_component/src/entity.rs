//! Entity identity and allocation.
//!
//! Entities carry no data of their own — an [`EntityId`] is just a name that
//! components and managers agree on. The same handle doubles as a component's
//! back-reference to its owner: pure lookup, no ownership, never used to keep
//! the entity alive.

/// A unique entity identifier.
///
/// Zero is reserved as the [`INVALID`](EntityId::INVALID) sentinel, which is
/// what a component's back-reference holds before attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl EntityId {
    /// The null / invalid entity sentinel.
    pub const INVALID: EntityId = EntityId(0);

    /// Create an entity ID from a raw `u64` identifier.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Returns `true` if this is a valid (non-zero) entity ID.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Hands out entity IDs in strictly increasing order.
///
/// Each manager owns one allocator and names its entities through it. IDs
/// are never recycled: once an entity is reaped its ID stays retired, so a
/// back-reference held by some long-lived component can go stale but can
/// never silently start naming a different entity.
#[derive(Debug)]
pub struct EntityAllocator {
    next_id: u64,
}

impl EntityAllocator {
    /// Creates a fresh allocator. The first allocated ID is 1; 0 stays
    /// reserved for [`EntityId::INVALID`].
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Allocates the next entity ID.
    pub fn allocate(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        EntityId(id)
    }

    /// Returns how many IDs this allocator has handed out.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.next_id - 1
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_roundtrip_and_validity() {
        let e = EntityId::from_raw(42);
        assert_eq!(e.id(), 42);
        assert!(e.is_valid());
        assert!(!EntityId::INVALID.is_valid());
        assert_eq!(EntityId::default(), EntityId::INVALID);
    }

    #[test]
    fn test_allocation_starts_past_the_sentinel() {
        let mut alloc = EntityAllocator::new();
        let first = alloc.allocate();
        assert!(first.is_valid());
        assert_ne!(first, EntityId::INVALID);
    }

    #[test]
    fn test_allocation_is_strictly_increasing() {
        let mut alloc = EntityAllocator::default();
        let mut previous = EntityId::INVALID;
        for expected_count in 1..=5 {
            let id = alloc.allocate();
            assert!(id > previous);
            assert_eq!(alloc.count(), expected_count);
            previous = id;
        }
    }

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId::from_raw(7).to_string(), "Entity(7)");
    }
}
