//! # tessera_scene
//!
//! Composition layer of the tessera runtime: entities that own typed
//! component sets, and the manager that owns the entity population.
//!
//! This crate provides:
//!
//! - [`Entity`] — a composition root with O(1) typed attach/query/fetch,
//!   backed by a fixed-size lookup table and presence mask.
//! - [`Manager`] — owner of the entity population; forwards the per-cycle
//!   hooks and reaps inactive entities on demand.
//! - [`SceneError`] — composition and query failures.
//!
//! ## Usage
//!
//! ```rust
//! use tessera_component::Component;
//! use tessera_scene::Manager;
//!
//! #[derive(Default)]
//! struct Spin {
//!     angle: f32,
//! }
//!
//! impl Component for Spin {
//!     fn update(&mut self) {
//!         self.angle += 0.1;
//!     }
//! }
//!
//! let mut manager = Manager::new();
//! let entity = manager.add_entity();
//! entity.attach(Spin::default()).unwrap();
//!
//! // Driver cycle: update, render, reap when convenient.
//! manager.update();
//! manager.render();
//! manager.clean();
//! ```

pub mod entity;
pub mod error;
pub mod manager;

pub use entity::Entity;
pub use error::SceneError;
pub use manager::Manager;
