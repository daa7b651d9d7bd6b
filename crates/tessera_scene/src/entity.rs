//! The [`Entity`] composition root — a typed component registry.
//!
//! An entity owns a heterogeneous, append-only set of components and indexes
//! them by [`ComponentTypeId`]. Two fixed-size structures make typed access
//! O(1):
//!
//! - a lookup table mapping type ID → position in the owned collection, and
//! - a presence mask with one bit per type ID.
//!
//! Both are sized by [`MAX_COMPONENT_TYPES`], so the per-entity overhead is
//! proportional to the global type capacity, not to the number of components
//! actually attached — the trade that buys constant-time attach/query/fetch
//! with no hashing or dynamic type lookup.

use std::any::Any;

use tracing::trace;

use tessera_component::{Component, EntityId, MAX_COMPONENT_TYPES, TypeRegistry};

use crate::error::SceneError;

/// A composition root owning a set of components, indexed by component type.
///
/// Entities are created by a [`Manager`](crate::Manager) and composed by
/// attaching components. The component collection is append-only: there is
/// no detach operation, only whole-entity reaping via
/// [`destroy`](Entity::destroy) and the manager's
/// [`clean`](crate::Manager::clean).
pub struct Entity {
    /// Identity handle, also handed to components as their back-reference.
    id: EntityId,
    /// Logical-deletion flag. Cleared by [`destroy`](Entity::destroy),
    /// consumed by the manager's reap pass.
    active: bool,
    /// Owned components in attach order.
    components: Vec<Box<dyn Component>>,
    /// Lookup table: type ID → index into `components`.
    slots: [Option<usize>; MAX_COMPONENT_TYPES],
    /// Presence mask: one bit per type ID.
    mask: u64,
}

impl Entity {
    /// Creates an empty, active entity. Only the manager constructs entities.
    pub(crate) fn new(id: EntityId) -> Self {
        Self {
            id,
            active: true,
            components: Vec::new(),
            slots: [None; MAX_COMPONENT_TYPES],
            mask: 0,
        }
    }

    /// Returns this entity's identifier.
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Returns `true` until [`destroy`](Entity::destroy) is called.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Marks this entity for reaping.
    ///
    /// Purely a logical marker: components stay alive and keep receiving
    /// `update`/`render` until the manager's next
    /// [`clean`](crate::Manager::clean) pass removes the entity. Idempotent —
    /// destroying an already-inactive entity is a no-op.
    pub fn destroy(&mut self) {
        self.active = false;
    }

    /// Returns the number of components attached to this entity.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Attaches a component, taking ownership of it.
    ///
    /// The component receives its back-reference
    /// ([`Component::attached`]), is recorded in the lookup table and
    /// presence mask under its type's ID, is appended to the owned
    /// collection, and then has [`Component::initialize`] invoked — exactly
    /// once, before any other hook. Returns a typed reference to the
    /// just-attached component.
    ///
    /// # Errors
    ///
    /// - [`SceneError::DuplicateComponent`] if a component of type `T` is
    ///   already attached. At most one component per concrete type is
    ///   allowed; silent shadowing is not.
    /// - [`SceneError::Registry`] if `T` is a new type and the process-wide
    ///   ID space is exhausted.
    pub fn attach<T: Component>(&mut self, component: T) -> Result<&mut T, SceneError> {
        let type_id = TypeRegistry::global().resolve::<T>()?;
        let bit = 1u64 << type_id.index();
        if self.mask & bit != 0 {
            return Err(SceneError::DuplicateComponent {
                component: std::any::type_name::<T>(),
                entity: self.id,
            });
        }

        let mut boxed: Box<dyn Component> = Box::new(component);
        boxed.attached(self.id);

        let slot = self.components.len();
        self.components.push(boxed);
        self.slots[type_id.index()] = Some(slot);
        self.mask |= bit;

        self.components[slot].initialize();
        trace!(
            entity = %self.id,
            component = std::any::type_name::<T>(),
            "component attached"
        );

        let any: &mut dyn Any = self.components[slot].as_mut();
        Ok(any
            .downcast_mut::<T>()
            .expect("slot holds the component just attached"))
    }

    /// Returns `true` if a component of exact type `T` is attached.
    ///
    /// O(1) mask test. Asking about a type that was never attached anywhere
    /// in the process is fine and does not consume a type-ID slot.
    #[must_use]
    pub fn has<T: Component>(&self) -> bool {
        TypeRegistry::global()
            .lookup::<T>()
            .is_some_and(|id| self.mask & (1u64 << id.index()) != 0)
    }

    /// Returns a shared reference to the attached component of type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::ComponentNotFound`] if no component of type `T`
    /// is attached.
    pub fn get<T: Component>(&self) -> Result<&T, SceneError> {
        let slot = self.slot_of::<T>()?;
        let any: &dyn Any = self.components[slot].as_ref();
        Ok(any
            .downcast_ref::<T>()
            .expect("lookup table points at a component of the queried type"))
    }

    /// Returns a mutable reference to the attached component of type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::ComponentNotFound`] if no component of type `T`
    /// is attached.
    pub fn get_mut<T: Component>(&mut self) -> Result<&mut T, SceneError> {
        let slot = self.slot_of::<T>()?;
        let any: &mut dyn Any = self.components[slot].as_mut();
        Ok(any
            .downcast_mut::<T>()
            .expect("lookup table points at a component of the queried type"))
    }

    /// Resolves the owned-collection index for type `T`, if attached.
    fn slot_of<T: Component>(&self) -> Result<usize, SceneError> {
        TypeRegistry::global()
            .lookup::<T>()
            .and_then(|id| self.slots[id.index()])
            .ok_or_else(|| SceneError::ComponentNotFound {
                component: std::any::type_name::<T>(),
                entity: self.id,
            })
    }

    /// Invokes `initialize` on every owned component, in attach order.
    ///
    /// Components attached through [`attach`](Entity::attach) are already
    /// initialised individually; this aggregate hook exists for drivers that
    /// want an explicit whole-entity setup pass.
    pub fn initialize(&mut self) {
        for component in &mut self.components {
            component.initialize();
        }
    }

    /// Invokes `update` on every owned component, in attach order.
    pub fn update(&mut self) {
        for component in &mut self.components {
            component.update();
        }
    }

    /// Invokes `render` on every owned component, in attach order.
    pub fn render(&mut self) {
        for component in &mut self.components {
            component.render();
        }
    }
}

impl std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("active", &self.active)
            .field("components", &self.components.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Shared log of hook invocations, for asserting call order.
    type HookLog = Rc<RefCell<Vec<&'static str>>>;

    struct ProbeA {
        log: HookLog,
    }

    struct ProbeB {
        log: HookLog,
    }

    impl Component for ProbeA {
        fn update(&mut self) {
            self.log.borrow_mut().push("a:update");
        }

        fn render(&mut self) {
            self.log.borrow_mut().push("a:render");
        }
    }

    impl Component for ProbeB {
        fn update(&mut self) {
            self.log.borrow_mut().push("b:update");
        }

        fn render(&mut self) {
            self.log.borrow_mut().push("b:render");
        }
    }

    #[derive(Debug, Default)]
    struct Counter {
        owner: EntityId,
        init_calls: u32,
        update_calls: u32,
        render_calls: u32,
    }

    impl Component for Counter {
        fn attached(&mut self, owner: EntityId) {
            self.owner = owner;
        }

        fn initialize(&mut self) {
            self.init_calls += 1;
        }

        fn update(&mut self) {
            self.update_calls += 1;
        }

        fn render(&mut self) {
            self.render_calls += 1;
        }
    }

    #[derive(Debug)]
    struct Unattached;

    impl Component for Unattached {}

    #[test]
    fn test_attach_then_query_and_fetch() {
        let mut entity = Entity::new(EntityId::from_raw(1));
        assert!(!entity.has::<Counter>());

        entity.attach(Counter::default()).unwrap();

        assert!(entity.has::<Counter>());
        assert_eq!(entity.component_count(), 1);

        let counter = entity.get::<Counter>().unwrap();
        assert_eq!(counter.init_calls, 1);
    }

    #[test]
    fn test_attach_assigns_back_reference_before_initialize() {
        let mut entity = Entity::new(EntityId::from_raw(17));
        let counter = entity.attach(Counter::default()).unwrap();
        assert_eq!(counter.owner, EntityId::from_raw(17));
        assert_eq!(counter.init_calls, 1);
    }

    #[test]
    fn test_duplicate_attach_is_rejected() {
        let mut entity = Entity::new(EntityId::from_raw(2));
        entity.attach(Counter::default()).unwrap();

        let err = entity.attach(Counter::default()).unwrap_err();
        assert!(matches!(err, SceneError::DuplicateComponent { .. }));

        // The first instance is untouched and still reachable.
        assert_eq!(entity.component_count(), 1);
        assert_eq!(entity.get::<Counter>().unwrap().init_calls, 1);
    }

    #[test]
    fn test_get_absent_component_fails() {
        let mut entity = Entity::new(EntityId::from_raw(3));
        entity.attach(Counter::default()).unwrap();

        assert!(!entity.has::<Unattached>());
        let err = entity.get::<Unattached>().unwrap_err();
        assert!(matches!(err, SceneError::ComponentNotFound { .. }));
    }

    #[test]
    fn test_hooks_run_once_per_cycle() {
        let mut entity = Entity::new(EntityId::from_raw(4));
        entity.attach(Counter::default()).unwrap();

        entity.update();
        entity.render();
        entity.update();
        entity.render();

        let counter = entity.get::<Counter>().unwrap();
        assert_eq!(counter.init_calls, 1);
        assert_eq!(counter.update_calls, 2);
        assert_eq!(counter.render_calls, 2);
    }

    #[test]
    fn test_forwarding_preserves_attach_order() {
        let log: HookLog = Rc::new(RefCell::new(Vec::new()));
        let mut entity = Entity::new(EntityId::from_raw(5));
        entity.attach(ProbeA { log: Rc::clone(&log) }).unwrap();
        entity.attach(ProbeB { log: Rc::clone(&log) }).unwrap();

        entity.update();
        entity.render();

        assert_eq!(
            *log.borrow(),
            vec!["a:update", "b:update", "a:render", "b:render"]
        );
    }

    #[test]
    fn test_get_mut_mutates_in_place() {
        let mut entity = Entity::new(EntityId::from_raw(6));
        entity.attach(Counter::default()).unwrap();

        entity.get_mut::<Counter>().unwrap().update_calls = 41;
        entity.update();
        assert_eq!(entity.get::<Counter>().unwrap().update_calls, 42);
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut entity = Entity::new(EntityId::from_raw(7));
        assert!(entity.is_active());

        entity.destroy();
        assert!(!entity.is_active());

        entity.destroy();
        assert!(!entity.is_active());

        // Components stay alive and keep running until the reap pass.
        entity.attach(Counter::default()).unwrap();
        entity.update();
        assert_eq!(entity.get::<Counter>().unwrap().update_calls, 1);
    }
}
