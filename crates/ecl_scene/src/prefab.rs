//! Prefab templates.
//!
//! A [`Prefab`] describes an object to stamp out: its name, whether it
//! already carries an entity façade, and a factory per component so every
//! instance gets its own fresh copies.

use std::any::Any;

use ecl_component::{Component, ComponentTypeId};

type Factory = Box<dyn Fn() -> Box<dyn Any>>;

/// A template the scene host can instantiate.
pub struct Prefab {
    pub(crate) name: String,
    pub(crate) carries_entity: bool,
    pub(crate) components: Vec<(ComponentTypeId, Factory)>,
}

impl Prefab {
    /// Create a prefab with no components and no façade.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            carries_entity: false,
            components: Vec::new(),
        }
    }

    /// Give every instance a clone of `component`.
    ///
    /// A later call for the same component type replaces the earlier one.
    #[must_use]
    pub fn with_component<T: Component + Clone>(mut self, component: T) -> Self {
        let type_id = T::component_type_id();
        self.components.retain(|(ty, _)| *ty != type_id);
        let factory: Factory = Box::new(move || Box::new(component.clone()) as Box<dyn Any>);
        self.components.push((type_id, factory));
        self
    }

    /// Mark instances as already carrying an entity façade.
    #[must_use]
    pub fn with_entity(mut self) -> Self {
        self.carries_entity = true;
        self
    }

    /// Returns the prefab name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for Prefab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prefab")
            .field("name", &self.name)
            .field("carries_entity", &self.carries_entity)
            .field("components", &self.components.len())
            .finish()
    }
}
