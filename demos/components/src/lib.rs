//! Example component definitions for the tessera runtime.
//!
//! These demonstrate how to implement the [`Component`] contract: override
//! the hooks you need, store the owner handle from
//! [`attached`](Component::attached) if you want it, and expose whatever
//! typed accessors your application calls for.

use tracing::trace;

use tessera_component::{Component, EntityId};

/// A 2D position advanced by a fixed per-cycle velocity.
#[derive(Debug)]
pub struct Position {
    owner: EntityId,
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
}

impl Position {
    /// Create a position that moves by `(vx, vy)` each update.
    ///
    /// The coordinates themselves start undefined; `initialize` zeroes them
    /// at attach time.
    #[must_use]
    pub fn with_velocity(vx: f32, vy: f32) -> Self {
        Self {
            owner: EntityId::INVALID,
            x: f32::NAN,
            y: f32::NAN,
            vx,
            vy,
        }
    }

    /// Current x coordinate.
    #[must_use]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Current y coordinate.
    #[must_use]
    pub fn y(&self) -> f32 {
        self.y
    }
}

impl Component for Position {
    fn attached(&mut self, owner: EntityId) {
        self.owner = owner;
    }

    fn initialize(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
    }

    fn update(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    fn render(&mut self) {
        trace!(entity = %self.owner, x = self.x, y = self.y, "position");
    }
}

/// A display-name tag, mainly useful for log output.
#[derive(Debug)]
pub struct Label {
    owner: EntityId,
    name: String,
}

impl Label {
    /// Create a new label.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            owner: EntityId::INVALID,
            name: name.into(),
        }
    }

    /// The entity's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Component for Label {
    fn attached(&mut self, owner: EntityId) {
        self.owner = owner;
    }

    fn render(&mut self) {
        trace!(entity = %self.owner, name = %self.name, "label");
    }
}
