//! Objects stored by the scene host.

use std::any::Any;
use std::collections::HashMap;

use ecl_component::{ComponentTypeId, ObjectId};
use ecl_math::Transform3D;

/// One object living in a [`SceneHost`](crate::SceneHost).
pub struct SceneObject {
    /// Display name.
    pub name: String,
    /// World-space transform.
    pub transform: Transform3D,
    /// Parent object, if any.
    pub parent: Option<ObjectId>,
    /// Direct children, in attachment order.
    pub children: Vec<ObjectId>,
    /// Whether the object carries an entity façade.
    pub carries_entity: bool,
    pub(crate) components: HashMap<ComponentTypeId, Box<dyn Any>>,
}

impl SceneObject {
    /// Create an object at the origin with no components.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform3D::IDENTITY,
            parent: None,
            children: Vec::new(),
            carries_entity: false,
            components: HashMap::new(),
        }
    }

    /// Returns the number of components attached.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

impl std::fmt::Debug for SceneObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneObject")
            .field("name", &self.name)
            .field("transform", &self.transform)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("carries_entity", &self.carries_entity)
            .field("components", &self.components.len())
            .finish()
    }
}
