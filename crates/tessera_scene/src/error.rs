//! Scene-layer error types.

use tessera_component::{EntityId, RegistryError};

/// Errors that can occur while composing or querying an entity.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The process-wide type registry refused a new component type.
    #[error("type registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A typed fetch found no component of the requested type.
    #[error("component '{component}' not found on entity {entity}")]
    ComponentNotFound {
        /// Type name of the requested component.
        component: &'static str,
        /// The entity that was queried.
        entity: EntityId,
    },

    /// A component of this type is already attached to the entity.
    ///
    /// At most one component per concrete type may be attached; attaching a
    /// second is rejected rather than silently shadowing the first.
    #[error("component '{component}' already attached to entity {entity}")]
    DuplicateComponent {
        /// Type name of the offending component.
        component: &'static str,
        /// The entity it was attached to.
        entity: EntityId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_failure_surfaces_as_scene_error() {
        // The same `?` conversion Entity::attach leans on when the type
        // registry refuses a new component type.
        fn exhaust() -> Result<(), SceneError> {
            Err(RegistryError::CapacityExceeded { capacity: 64 })?;
            Ok(())
        }

        let err = exhaust().unwrap_err();
        assert!(matches!(
            err,
            SceneError::Registry(RegistryError::CapacityExceeded { capacity: 64 })
        ));
        assert!(err.to_string().starts_with("type registry error"));
    }
}
