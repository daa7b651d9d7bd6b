//! The [`Manager`] — owner of a population of entities.
//!
//! The manager drives the per-cycle lifecycle: an external driver calls
//! [`update`](Manager::update) and [`render`](Manager::render) once per
//! cycle, and [`clean`](Manager::clean) whenever it decides to reap. The
//! manager imposes no timing model of its own.

use tracing::{debug, trace};

use tessera_component::{EntityAllocator, EntityId};

use crate::entity::Entity;

/// Owns a population of [`Entity`] instances and drives their lifecycle.
///
/// Entities are kept in insertion order. An entity leaves the population
/// only through the reap pass: [`Entity::destroy`] marks it inactive, and
/// the next [`clean`](Manager::clean) removes it, dropping its components.
#[derive(Debug, Default)]
pub struct Manager {
    /// ID source for entities created by this manager.
    allocator: EntityAllocator,
    /// Owned entities in insertion order.
    entities: Vec<Entity>,
}

impl Manager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allocator: EntityAllocator::new(),
            entities: Vec::new(),
        }
    }

    /// Creates a new entity, takes ownership of it, and returns a reference
    /// for composition.
    ///
    /// The caller is expected to [`attach`](Entity::attach) components on the
    /// returned reference; the manager imposes no constraints on composition.
    pub fn add_entity(&mut self) -> &mut Entity {
        let id = self.allocator.allocate();
        trace!(entity = %id, "entity added");
        self.entities.push(Entity::new(id));
        self.entities
            .last_mut()
            .expect("entity was just appended")
    }

    /// Forwards `update` to every owned entity, in insertion order.
    ///
    /// Inactive entities are not skipped — they are merely pending removal
    /// and keep running until the next [`clean`](Manager::clean).
    pub fn update(&mut self) {
        for entity in &mut self.entities {
            entity.update();
        }
    }

    /// Forwards `render` to every owned entity, in insertion order.
    ///
    /// The driver is expected to call this after [`update`](Manager::update)
    /// within a cycle; the manager only guarantees ordering within each pass.
    pub fn render(&mut self) {
        for entity in &mut self.entities {
            entity.render();
        }
    }

    /// Removes every inactive entity in one stable pass.
    ///
    /// Removed entities are dropped, cascading to their owned components.
    /// The relative order of surviving entities is preserved. Never called
    /// implicitly — the driver decides when to reap, and must not call this
    /// from inside an `update`/`render` pass.
    pub fn clean(&mut self) {
        let before = self.entities.len();
        self.entities.retain(Entity::is_active);
        let reaped = before - self.entities.len();
        if reaped > 0 {
            debug!(reaped, remaining = self.entities.len(), "reaped inactive entities");
        }
    }

    /// Returns the number of owned entities, inactive ones included.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the manager owns no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Looks up an owned entity by ID.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    /// Looks up an owned entity by ID, mutably.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|entity| entity.id() == id)
    }

    /// Iterates over owned entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterates mutably over owned entities in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }
}
