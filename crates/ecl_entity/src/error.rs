//! Error types for the host boundary and the entity layer.
//!
//! Lookups never produce errors; absence is reported as `None` or an empty
//! vector. Only operations that ask the host to do something can fail.

use ecl_component::ObjectId;

use crate::host::PrefabId;

/// Errors a [`HostEngine`](crate::HostEngine) reports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The host has no object with this ID.
    #[error("unknown object: {0}")]
    UnknownObject(ObjectId),

    /// The host has no prefab with this ID.
    #[error("unknown prefab: {0}")]
    UnknownPrefab(PrefabId),

    /// Reparenting would make an object its own ancestor.
    #[error("cannot parent {child} under {parent}: would create a cycle")]
    ParentCycle {
        /// The object being reparented.
        child: ObjectId,
        /// The requested parent.
        parent: ObjectId,
    },
}

/// Errors returned by [`World`](crate::World) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EclError {
    /// The host rejected a request.
    #[error("host error: {0}")]
    Host(#[from] HostError),

    /// The object has no active entity, e.g. it was already destroyed.
    #[error("{0} is not a registered entity")]
    NotRegistered(ObjectId),

    /// The object does not exist in the host.
    #[error("{0} does not exist in the host")]
    UnknownObject(ObjectId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_error_converts() {
        let err: EclError = HostError::UnknownPrefab(PrefabId(3)).into();
        assert_eq!(err, EclError::Host(HostError::UnknownPrefab(PrefabId(3))));
        assert_eq!(err.to_string(), "host error: unknown prefab: Prefab(3)");
    }

    #[test]
    fn test_not_registered_message() {
        let err = EclError::NotRegistered(ObjectId(5));
        assert_eq!(err.to_string(), "Object(5) is not a registered entity");
    }
}
