//! # tessera_component
//!
//! The "C" of the tessera runtime — defines what a component is, how a
//! component type is identified, and how entities are named.
//!
//! This crate provides:
//!
//! - [`Component`] trait — the lifecycle contract all attachable capabilities
//!   must satisfy.
//! - [`ComponentTypeId`] — stable, process-wide small-integer type IDs used
//!   to index fixed-size lookup structures.
//! - [`TypeRegistry`] — the resolve-or-assign service behind those IDs.
//! - [`EntityId`] / [`EntityAllocator`] — lightweight entity identifiers and
//!   their monotonic allocator.

pub mod component;
pub mod entity;
pub mod registry;

pub use component::Component;
pub use entity::{EntityAllocator, EntityId};
pub use registry::{ComponentTypeId, MAX_COMPONENT_TYPES, RegistryError, TypeRegistry};
