//! Core [`Component`] trait — the contract every attachable capability
//! satisfies.
//!
//! A component is a unit of run-time behaviour owned by exactly one entity.
//! The contract is three lifecycle hooks plus a one-shot back-reference
//! assignment; everything else (state, side effects, accessors) is up to the
//! concrete component.
//!
//! ## Call order and cardinality
//!
//! For a component attached to an entity that stays registered with a
//! manager:
//!
//! 1. [`attached`](Component::attached) — exactly once, at attach time.
//! 2. [`initialize`](Component::initialize) — exactly once, immediately after.
//! 3. [`update`](Component::update) then [`render`](Component::render) —
//!    exactly once per manager cycle, in attach order within the entity.
//!
//! No hook returns a value or reports failure. A component that cannot set
//! itself up is expected to leave itself in a safe default state; error
//! policy beyond that is the concrete component's own business.

use std::any::Any;

use crate::entity::EntityId;

/// The core component trait.
///
/// The `Any` supertrait lets the owning entity recover the concrete type
/// from a boxed trait object, which is how the typed `get`/`get_mut`
/// accessors work.
///
/// All hooks have empty default bodies — a component overrides only the ones
/// it cares about.
///
/// # Examples
///
/// ```rust
/// use tessera_component::{Component, EntityId};
///
/// struct Heartbeat {
///     owner: EntityId,
///     beats: u64,
/// }
///
/// impl Component for Heartbeat {
///     fn attached(&mut self, owner: EntityId) {
///         self.owner = owner;
///     }
///
///     fn update(&mut self) {
///         self.beats += 1;
///     }
/// }
/// ```
pub trait Component: Any {
    /// Called exactly once when the component is attached to its owning
    /// entity, before [`initialize`](Component::initialize).
    ///
    /// `owner` is a plain lookup handle — it carries no ownership and must
    /// never be used to extend or end the entity's lifetime. A component
    /// that needs the back-reference stores it; the default does nothing.
    fn attached(&mut self, owner: EntityId) {
        let _ = owner;
    }

    /// One-shot setup, invoked exactly once, immediately after attachment.
    fn initialize(&mut self) {}

    /// Per-cycle simulation step.
    fn update(&mut self) {}

    /// Per-cycle presentation step, invoked after `update` for the same
    /// entity.
    fn render(&mut self) {}
}
