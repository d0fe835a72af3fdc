//! The host engine contract.
//!
//! The entity layer owns no objects. Creating, placing, and tearing down
//! objects, and looking up the components attached to them, are all asked
//! of a [`HostEngine`].

use std::any::Any;

use ecl_component::{Component, ComponentTypeId, ObjectId};
use ecl_math::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::HostError;

/// Identifies a spawnable template registered with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrefabId(pub u64);

impl std::fmt::Display for PrefabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Prefab({})", self.0)
    }
}

/// Operations the entity layer needs from a host engine.
pub trait HostEngine {
    /// Create an empty object with the given name.
    fn create_object(&mut self, name: &str) -> ObjectId;

    /// Instantiate a copy of a prefab.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownPrefab`] if the prefab is not registered.
    fn instantiate(&mut self, prefab: PrefabId) -> Result<ObjectId, HostError>;

    /// Destroy an object.
    ///
    /// Returns every object torn down by the call: `object` itself plus any
    /// descendants destroyed with it.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownObject`] if the object does not exist.
    fn destroy_object(&mut self, object: ObjectId) -> Result<Vec<ObjectId>, HostError>;

    /// Set an object's world-space position.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownObject`] if the object does not exist.
    fn set_position(&mut self, object: ObjectId, position: Vec3) -> Result<(), HostError>;

    /// Set an object's world-space rotation.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownObject`] if the object does not exist.
    fn set_rotation(&mut self, object: ObjectId, rotation: Quat) -> Result<(), HostError>;

    /// Reparent an object.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownObject`] if either object does not exist
    /// and [`HostError::ParentCycle`] if `parent` is `object` or one of its
    /// descendants.
    fn set_parent(&mut self, object: ObjectId, parent: ObjectId) -> Result<(), HostError>;

    /// Look up the component of the given type attached to an object.
    fn component(&self, object: ObjectId, type_id: ComponentTypeId) -> Option<&dyn Any>;

    /// Returns `true` if the object carries an entity façade.
    fn carries_entity(&self, object: ObjectId) -> bool;

    /// Mark an object as carrying an entity façade.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownObject`] if the object does not exist.
    fn attach_entity(&mut self, object: ObjectId) -> Result<(), HostError>;

    /// Returns `true` if the object exists.
    fn contains(&self, object: ObjectId) -> bool;
}

/// Typed component access for any [`HostEngine`].
pub trait HostEngineExt: HostEngine {
    /// Returns the component of type `T` attached to `object`, if any.
    fn get<T: Component>(&self, object: ObjectId) -> Option<&T> {
        self.component(object, T::component_type_id())?
            .downcast_ref::<T>()
    }

    /// Returns `true` if `object` carries a component of type `T`.
    fn has<T: Component>(&self, object: ObjectId) -> bool {
        self.get::<T>(object).is_some()
    }
}

impl<H: HostEngine + ?Sized> HostEngineExt for H {}
