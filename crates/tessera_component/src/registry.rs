//! Process-wide component-type registry.
//!
//! Every distinct component type is assigned a [`ComponentTypeId`] — a small
//! integer, handed out lazily on first use and stable for the lifetime of the
//! process. Entities use the ID to index fixed-size lookup structures, which
//! is what makes typed attach/query/fetch O(1) with no hashing on the hot
//! path.
//!
//! The ID space is bounded by [`MAX_COMPONENT_TYPES`]. Exceeding it is
//! reported as [`RegistryError::CapacityExceeded`] rather than silently
//! corrupting the fixed-size tables.
//!
//! The registry is the one piece of process-wide state in the runtime. It is
//! reachable through [`TypeRegistry::global`], initialised on first use and
//! never reset. Separate instances can be constructed for tests.

use std::any::TypeId;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use thiserror::Error;
use tracing::debug;

use crate::component::Component;

/// The maximum number of distinct component types per process.
///
/// This is a configuration constant: it fixes the width of every entity's
/// lookup table and presence mask, trading a small fixed per-entity overhead
/// for constant-time typed access. It must not exceed the presence-mask
/// width (`u64`).
pub const MAX_COMPONENT_TYPES: usize = 64;

const _: () = assert!(MAX_COMPONENT_TYPES <= u64::BITS as usize);

/// A stable, process-wide small integer identifying a component type.
///
/// IDs are assigned monotonically starting at 0 and index directly into an
/// entity's lookup table and presence mask. The mapping from type to ID is
/// injective and never changes within one process run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentTypeId(u8);

impl ComponentTypeId {
    /// Returns the ID as a table index (`0..MAX_COMPONENT_TYPES`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ComponentTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ComponentType({})", self.0)
    }
}

/// Errors raised by the component-type registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A new component type would not fit in the fixed-size ID space.
    ///
    /// This is unrecoverable at the offending attach site: the lookup-table
    /// layout is a process-wide invariant sized by the capacity.
    #[error("component type capacity exceeded: at most {capacity} distinct component types")]
    CapacityExceeded {
        /// The configured capacity that was exhausted.
        capacity: usize,
    },
}

/// Resolve-or-assign service for [`ComponentTypeId`]s.
///
/// The registry has exactly two lookup operations: [`resolve`](Self::resolve)
/// (assigning an ID on first use) and [`lookup`](Self::lookup) (query-only).
/// Presence checks go through `lookup` so that asking about a type that was
/// never attached does not burn a slot in the bounded ID space.
#[derive(Debug)]
pub struct TypeRegistry {
    /// Assigned IDs, keyed by the Rust type.
    ids: DashMap<TypeId, ComponentTypeId>,
    /// Next raw ID to hand out. Only moves forward; once the capacity is
    /// exhausted every further assignment fails.
    next: AtomicUsize,
    /// Upper bound on assigned IDs.
    capacity: usize,
}

static GLOBAL: LazyLock<TypeRegistry> = LazyLock::new(TypeRegistry::new);

impl TypeRegistry {
    /// Creates a registry with the full [`MAX_COMPONENT_TYPES`] capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MAX_COMPONENT_TYPES)
    }

    /// Creates a registry with a reduced capacity. Useful for exercising the
    /// capacity limit without declaring dozens of types.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`MAX_COMPONENT_TYPES`], since assigned
    /// IDs must stay valid indices into fixed-size entity tables.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity <= MAX_COMPONENT_TYPES,
            "registry capacity cannot exceed MAX_COMPONENT_TYPES"
        );
        Self {
            ids: DashMap::new(),
            next: AtomicUsize::new(0),
            capacity,
        }
    }

    /// Returns the process-wide registry.
    ///
    /// Initialised on first use; never reset. All entities resolve their
    /// component types against this instance, which is what makes IDs stable
    /// across every entity and manager in the process.
    #[must_use]
    pub fn global() -> &'static TypeRegistry {
        &GLOBAL
    }

    /// Resolves the ID for component type `T`, assigning the next free ID if
    /// `T` has not been seen before.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::CapacityExceeded`] if `T` is new and the ID
    /// space is full.
    pub fn resolve<T: Component>(&self) -> Result<ComponentTypeId, RegistryError> {
        match self.ids.entry(TypeId::of::<T>()) {
            Entry::Occupied(entry) => Ok(*entry.get()),
            Entry::Vacant(entry) => {
                let raw = self.next.fetch_add(1, Ordering::Relaxed);
                if raw >= self.capacity {
                    return Err(RegistryError::CapacityExceeded {
                        capacity: self.capacity,
                    });
                }
                let id = ComponentTypeId(raw as u8);
                debug!(
                    component = std::any::type_name::<T>(),
                    id = raw,
                    "assigned component type id"
                );
                entry.insert(id);
                Ok(id)
            }
        }
    }

    /// Returns the ID for component type `T` if one has been assigned.
    ///
    /// Never assigns: querying for a type that was never attached anywhere
    /// leaves the ID space untouched.
    #[must_use]
    pub fn lookup<T: Component>(&self) -> Option<ComponentTypeId> {
        self.ids.get(&TypeId::of::<T>()).map(|id| *id)
    }

    /// Returns the number of component types assigned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if no component types have been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Alpha;
    struct Beta;
    struct Gamma;

    impl Component for Alpha {}
    impl Component for Beta {}
    impl Component for Gamma {}

    #[test]
    fn test_resolve_is_stable() {
        let registry = TypeRegistry::new();
        let first = registry.resolve::<Alpha>().unwrap();
        let second = registry.resolve::<Alpha>().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_types_get_distinct_ids() {
        let registry = TypeRegistry::new();
        let a = registry.resolve::<Alpha>().unwrap();
        let b = registry.resolve::<Beta>().unwrap();
        let c = registry.resolve::<Gamma>().unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_ids_are_assigned_in_resolve_order() {
        let registry = TypeRegistry::new();
        assert_eq!(registry.resolve::<Alpha>().unwrap().index(), 0);
        assert_eq!(registry.resolve::<Beta>().unwrap().index(), 1);
        assert_eq!(registry.resolve::<Gamma>().unwrap().index(), 2);
    }

    #[test]
    fn test_lookup_never_assigns() {
        let registry = TypeRegistry::new();
        assert!(registry.lookup::<Alpha>().is_none());
        assert!(registry.is_empty());

        let resolved = registry.resolve::<Alpha>().unwrap();
        assert_eq!(registry.lookup::<Alpha>(), Some(resolved));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_capacity_exceeded_is_reported() {
        let registry = TypeRegistry::with_capacity(2);
        registry.resolve::<Alpha>().unwrap();
        registry.resolve::<Beta>().unwrap();

        let err = registry.resolve::<Gamma>().unwrap_err();
        assert!(matches!(
            err,
            RegistryError::CapacityExceeded { capacity: 2 }
        ));

        // Types that made it in before the limit are unaffected.
        assert!(registry.lookup::<Alpha>().is_some());
        assert!(registry.lookup::<Gamma>().is_none());
    }

    #[test]
    fn test_global_registry_is_one_instance() {
        let a = TypeRegistry::global();
        let b = TypeRegistry::global();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    #[should_panic(expected = "registry capacity cannot exceed")]
    fn test_oversized_capacity_panics() {
        let _ = TypeRegistry::with_capacity(MAX_COMPONENT_TYPES + 1);
    }
}
