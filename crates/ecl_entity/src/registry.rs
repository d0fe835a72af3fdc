//! Entity registry — the ordered list of live entities.
//!
//! Queries are linear scans in registration order. Removal preserves the
//! order of the remaining entities, so iteration is stable across
//! unregistrations.

use ecl_component::ObjectId;
use tracing::debug;

use crate::entity::Entity;

/// All currently active entities, in registration order.
#[derive(Debug, Default)]
pub struct Registry {
    entities: Vec<Entity>,
}

impl Registry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Create a new empty registry with room for `capacity` entities.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    /// Append an entity.
    ///
    /// The entity's object must be valid and not already registered. This is
    /// only checked in debug builds.
    pub fn register(&mut self, entity: Entity) {
        debug_assert!(entity.object().is_valid(), "registered the invalid object");
        debug_assert!(
            !self.contains(entity.object()),
            "{} registered twice",
            entity.object()
        );
        debug!(object = %entity.object(), "registered entity");
        self.entities.push(entity);
    }

    /// Remove the entity for `object`, returning it.
    ///
    /// Unregistering an object that is not present is a no-op.
    pub fn unregister(&mut self, object: ObjectId) -> Option<Entity> {
        let pos = self.position(object)?;
        debug!(object = %object, "unregistered entity");
        Some(self.entities.remove(pos))
    }

    /// Returns the first entity, in registration order, satisfying `predicate`.
    pub fn find_first(&self, mut predicate: impl FnMut(&Entity) -> bool) -> Option<&Entity> {
        self.entities.iter().find(|entity| predicate(*entity))
    }

    /// Returns every entity satisfying `predicate`, in registration order.
    pub fn find_all(&self, mut predicate: impl FnMut(&Entity) -> bool) -> Vec<&Entity> {
        self.entities
            .iter()
            .filter(|entity| predicate(*entity))
            .collect()
    }

    /// Returns the entity for `object`.
    #[must_use]
    pub fn get(&self, object: ObjectId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.object() == object)
    }

    /// Returns the entity for `object` mutably.
    pub fn get_mut(&mut self, object: ObjectId) -> Option<&mut Entity> {
        self.entities
            .iter_mut()
            .find(|entity| entity.object() == object)
    }

    /// Returns `true` if `object` has a registered entity.
    #[must_use]
    pub fn contains(&self, object: ObjectId) -> bool {
        self.position(object).is_some()
    }

    /// Returns an iterator over all entities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Returns the objects of all registered entities in registration order.
    #[must_use]
    pub fn objects(&self) -> Vec<ObjectId> {
        self.entities.iter().map(Entity::object).collect()
    }

    /// Returns the number of registered entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if no entity is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn position(&self, object: ObjectId) -> Option<usize> {
        self.entities
            .iter()
            .position(|entity| entity.object() == object)
    }
}
