//! A registry paired with the host engine whose objects it tracks.
//!
//! A [`World`] is where entities come to life and go away. The host calls
//! [`World::on_activate`] when an entity-carrying object goes live (or the
//! world does it itself from [`World::spawn`]), and [`World::destroy`] is the
//! one sanctioned way to remove an entity together with its object.
//!
//! Lookups scan the registry in registration order and never fail: a miss is
//! `None` or an empty vector.

use ecl_component::{Component, ComponentSet, Filter, ObjectId};
use ecl_math::{Quat, Vec3};
use tracing::{debug, info, warn};

use crate::config::WorldConfig;
use crate::entity::Entity;
use crate::error::EclError;
use crate::host::{HostEngine, HostEngineExt, PrefabId};
use crate::registry::Registry;
use crate::tags::IntTag;

/// What [`World::spawn`] should create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnSource<'a> {
    /// Instantiate a copy of a registered prefab.
    Prefab(PrefabId),
    /// Create an empty object with this name.
    Named(&'a str),
    /// Create an empty object named after
    /// [`WorldConfig::default_entity_name`].
    Unnamed,
}

/// Where [`World::spawn`] should put the new object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// World-space position.
    pub position: Vec3,
    /// World-space rotation.
    pub rotation: Quat,
    /// Object to parent the new object under, if any.
    pub parent: Option<ObjectId>,
}

impl Placement {
    /// The origin with no rotation and no parent.
    pub const ORIGIN: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        parent: None,
    };

    /// Place at `position` with no rotation and no parent.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::ORIGIN
        }
    }

    /// Set the rotation.
    #[must_use]
    pub fn rotated(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the parent.
    #[must_use]
    pub fn under(mut self, parent: ObjectId) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// A registry of live entities bound to the host engine that owns their
/// objects.
#[derive(Debug)]
pub struct World<H: HostEngine> {
    host: H,
    registry: Registry,
    config: WorldConfig,
}

impl<H: HostEngine> World<H> {
    /// Create a world over `host` with the default configuration.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_config(host, WorldConfig::default())
    }

    /// Create a world over `host` with the given configuration.
    #[must_use]
    pub fn with_config(host: H, config: WorldConfig) -> Self {
        Self {
            host,
            registry: Registry::with_capacity(config.registry_capacity),
            config,
        }
    }

    /// Returns the host engine.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host engine mutably.
    ///
    /// Objects destroyed directly through the host stay registered until
    /// [`World::on_deactivate`] is called for them.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the entity registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the world configuration.
    #[must_use]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Activation hook: register the entity for `object`.
    ///
    /// Marks the object as carrying a façade if it does not already. Calling
    /// this for an object that is already active returns the existing entity
    /// without registering it again.
    ///
    /// # Errors
    ///
    /// Returns [`EclError::UnknownObject`] if the host has no such object.
    pub fn on_activate(&mut self, object: ObjectId) -> Result<&mut Entity, EclError> {
        if !self.host.contains(object) {
            return Err(EclError::UnknownObject(object));
        }
        if !self.host.carries_entity(object) {
            self.host.attach_entity(object)?;
        }
        if !self.registry.contains(object) {
            self.registry.register(Entity::new(object));
        }
        self.registry
            .get_mut(object)
            .ok_or(EclError::NotRegistered(object))
    }

    /// Deactivation hook: drop the entity for `object` from the registry
    /// without touching the host.
    ///
    /// For host integrations that tear objects down themselves. Deactivating
    /// an object that is not registered is a no-op.
    pub fn on_deactivate(&mut self, object: ObjectId) -> Option<Entity> {
        self.registry.unregister(object)
    }

    /// Destroy an entity: unregister it, then have the host destroy its
    /// object. Entities on descendants the host destroys along with it are
    /// unregistered as well.
    ///
    /// # Errors
    ///
    /// Returns [`EclError::NotRegistered`] if `object` has no active entity,
    /// which includes destroying the same entity twice. The host is not
    /// contacted in that case.
    ///
    /// Returns [`EclError::Host`] if the host fails to destroy the object,
    /// for example because it was already torn down through
    /// [`World::host_mut`]. The entity is unregistered even then.
    pub fn destroy(&mut self, object: ObjectId) -> Result<(), EclError> {
        if self.registry.unregister(object).is_none() {
            warn!(object = %object, "destroy requested for an unregistered object");
            return Err(EclError::NotRegistered(object));
        }

        let destroyed = self.host.destroy_object(object)?;
        let mut descendants = 0usize;
        for child in destroyed.into_iter().filter(|child| *child != object) {
            if self.registry.unregister(child).is_some() {
                descendants += 1;
            }
        }

        info!(object = %object, descendants, "destroyed entity");
        Ok(())
    }

    /// Returns the entity for `object`, if it is active.
    #[must_use]
    pub fn entity(&self, object: ObjectId) -> Option<&Entity> {
        self.registry.get(object)
    }

    /// Returns the entity for `object` mutably, if it is active.
    pub fn entity_mut(&mut self, object: ObjectId) -> Option<&mut Entity> {
        self.registry.get_mut(object)
    }

    /// Returns the component of type `T` on `object`, if any.
    #[must_use]
    pub fn get<T: Component>(&self, object: ObjectId) -> Option<&T> {
        self.host.get::<T>(object)
    }

    /// Returns `true` if `object` carries a component of type `T`.
    #[must_use]
    pub fn have<T: Component>(&self, object: ObjectId) -> bool {
        self.host.has::<T>(object)
    }

    /// Returns the first entity, in registration order, tagged with `tag`.
    #[must_use]
    pub fn find_with(&self, tag: IntTag) -> Option<&Entity> {
        self.registry.find_first(|entity| entity.has_tag(tag))
    }

    /// Returns every entity tagged with `tag`, in registration order.
    #[must_use]
    pub fn find_all_with(&self, tag: IntTag) -> Vec<&Entity> {
        self.registry.find_all(|entity| entity.has_tag(tag))
    }

    /// Returns the first entity, in registration order, whose object carries
    /// a `T` component.
    #[must_use]
    pub fn find_with_component<T: Component>(&self) -> Option<&Entity> {
        let host = &self.host;
        self.registry
            .find_first(|entity| host.has::<T>(entity.object()))
    }

    /// Returns every entity whose object carries a `T` component, in
    /// registration order.
    #[must_use]
    pub fn find_all_with_component<T: Component>(&self) -> Vec<&Entity> {
        let host = &self.host;
        self.registry
            .find_all(|entity| host.has::<T>(entity.object()))
    }

    /// Build a filter requiring every component type in `Q`.
    #[must_use]
    pub fn filter<Q: ComponentSet>(&self) -> Filter {
        Filter::make::<Q>()
    }

    /// Returns every entity whose object carries all the component types
    /// `filter` requires, in registration order.
    #[must_use]
    pub fn query(&self, filter: &Filter) -> Vec<&Entity> {
        let host = &self.host;
        self.registry.find_all(|entity| {
            filter.matches(|ty| host.component(entity.object(), ty).is_some())
        })
    }

    /// Spawn an object through the host, place it, and return its entity.
    ///
    /// A prefab that already carries a façade keeps it; otherwise one is
    /// attached. Either way the object ends up with exactly one registered
    /// entity.
    ///
    /// # Errors
    ///
    /// Returns [`EclError::UnknownObject`] if `placement.parent` does not
    /// exist (checked before anything is created), or the host's error if
    /// instantiation or placement fails.
    pub fn spawn(
        &mut self,
        source: SpawnSource<'_>,
        placement: Placement,
    ) -> Result<&mut Entity, EclError> {
        if let Some(parent) = placement.parent
            && !self.host.contains(parent)
        {
            return Err(EclError::UnknownObject(parent));
        }

        let object = match source {
            SpawnSource::Prefab(prefab) => self.host.instantiate(prefab)?,
            SpawnSource::Named(name) => self.host.create_object(name),
            SpawnSource::Unnamed => self.host.create_object(&self.config.default_entity_name),
        };

        let reused = self.host.carries_entity(object);
        self.host.set_position(object, placement.position)?;
        self.host.set_rotation(object, placement.rotation)?;
        if let Some(parent) = placement.parent {
            self.host.set_parent(object, parent)?;
        }

        debug!(object = %object, reused_facade = reused, "spawned object");
        self.on_activate(object)
    }
}
