//! The in-memory scene host.

use std::any::Any;
use std::collections::HashMap;

use ecl_component::{Component, ComponentTypeId, ObjectAllocator, ObjectId};
use ecl_entity::{HostEngine, HostError, PrefabId};
use ecl_math::{Quat, Transform3D, Vec3};
use tracing::debug;

use crate::object::SceneObject;
use crate::prefab::Prefab;

/// A host engine keeping every object in memory.
///
/// Destroying an object destroys its whole subtree. The destroyed IDs are
/// reported parent first, then descendants depth first.
#[derive(Debug, Default)]
pub struct SceneHost {
    allocator: ObjectAllocator,
    objects: HashMap<ObjectId, SceneObject>,
    prefabs: Vec<Prefab>,
}

impl SceneHost {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allocator: ObjectAllocator::new(),
            objects: HashMap::new(),
            prefabs: Vec::new(),
        }
    }

    /// Register a prefab and return the ID to instantiate it with.
    pub fn register_prefab(&mut self, prefab: Prefab) -> PrefabId {
        let id = PrefabId(self.prefabs.len() as u64);
        debug!(prefab = %id, name = prefab.name(), "registered prefab");
        self.prefabs.push(prefab);
        id
    }

    /// Attach `component` to `object`, replacing any component of the same
    /// type.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownObject`] if the object does not exist.
    pub fn add_component<T: Component>(
        &mut self,
        object: ObjectId,
        component: T,
    ) -> Result<(), HostError> {
        let target = self.object_mut(object)?;
        target
            .components
            .insert(T::component_type_id(), Box::new(component));
        Ok(())
    }

    /// Detach and return the `T` component of `object`, if any.
    pub fn remove_component<T: Component>(&mut self, object: ObjectId) -> Option<T> {
        let target = self.objects.get_mut(&object)?;
        let boxed = target.components.remove(&T::component_type_id())?;
        boxed.downcast::<T>().ok().map(|component| *component)
    }

    /// Returns the object with this ID.
    #[must_use]
    pub fn object(&self, object: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&object)
    }

    /// Returns the object's name.
    #[must_use]
    pub fn name(&self, object: ObjectId) -> Option<&str> {
        self.objects.get(&object).map(|o| o.name.as_str())
    }

    /// Returns the object's transform.
    #[must_use]
    pub fn transform(&self, object: ObjectId) -> Option<Transform3D> {
        self.objects.get(&object).map(|o| o.transform)
    }

    /// Returns the object's parent.
    #[must_use]
    pub fn parent(&self, object: ObjectId) -> Option<ObjectId> {
        self.objects.get(&object).and_then(|o| o.parent)
    }

    /// Returns the object's direct children; empty for unknown objects.
    #[must_use]
    pub fn children(&self, object: ObjectId) -> &[ObjectId] {
        self.objects
            .get(&object)
            .map(|o| o.children.as_slice())
            .unwrap_or_default()
    }

    /// Returns the number of live objects.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    fn object_mut(&mut self, object: ObjectId) -> Result<&mut SceneObject, HostError> {
        self.objects
            .get_mut(&object)
            .ok_or(HostError::UnknownObject(object))
    }

    fn insert(&mut self, scene_object: SceneObject) -> ObjectId {
        let id = self.allocator.allocate();
        self.objects.insert(id, scene_object);
        id
    }

    /// `object` followed by all its descendants, depth first.
    fn subtree(&self, object: ObjectId) -> Vec<ObjectId> {
        let mut out = Vec::new();
        let mut stack = vec![object];
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    fn is_ancestor_or_self(&self, candidate: ObjectId, of: ObjectId) -> bool {
        let mut current = Some(of);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.parent(id);
        }
        false
    }
}

impl HostEngine for SceneHost {
    fn create_object(&mut self, name: &str) -> ObjectId {
        let id = self.insert(SceneObject::new(name));
        debug!(object = %id, name, "created object");
        id
    }

    fn instantiate(&mut self, prefab: PrefabId) -> Result<ObjectId, HostError> {
        let template = self
            .prefabs
            .get(prefab.0 as usize)
            .ok_or(HostError::UnknownPrefab(prefab))?;

        let mut scene_object = SceneObject::new(template.name.clone());
        scene_object.carries_entity = template.carries_entity;
        for (type_id, factory) in &template.components {
            scene_object.components.insert(*type_id, factory());
        }

        let id = self.insert(scene_object);
        debug!(object = %id, prefab = %prefab, "instantiated prefab");
        Ok(id)
    }

    fn destroy_object(&mut self, object: ObjectId) -> Result<Vec<ObjectId>, HostError> {
        let parent = self
            .objects
            .get(&object)
            .ok_or(HostError::UnknownObject(object))?
            .parent;

        if let Some(parent) = parent
            && let Some(parent) = self.objects.get_mut(&parent)
        {
            parent.children.retain(|child| *child != object);
        }

        let destroyed = self.subtree(object);
        for id in &destroyed {
            self.objects.remove(id);
        }
        debug!(object = %object, count = destroyed.len(), "destroyed objects");
        Ok(destroyed)
    }

    fn set_position(&mut self, object: ObjectId, position: Vec3) -> Result<(), HostError> {
        self.object_mut(object)?.transform.position = position;
        Ok(())
    }

    fn set_rotation(&mut self, object: ObjectId, rotation: Quat) -> Result<(), HostError> {
        self.object_mut(object)?.transform.rotation = rotation;
        Ok(())
    }

    fn set_parent(&mut self, object: ObjectId, parent: ObjectId) -> Result<(), HostError> {
        if !self.objects.contains_key(&parent) {
            return Err(HostError::UnknownObject(parent));
        }
        let old_parent = self.object_mut(object)?.parent;
        if self.is_ancestor_or_self(object, parent) {
            return Err(HostError::ParentCycle {
                child: object,
                parent,
            });
        }

        if let Some(old) = old_parent
            && let Some(old) = self.objects.get_mut(&old)
        {
            old.children.retain(|child| *child != object);
        }
        self.object_mut(parent)?.children.push(object);
        self.object_mut(object)?.parent = Some(parent);
        Ok(())
    }

    fn component(&self, object: ObjectId, type_id: ComponentTypeId) -> Option<&dyn Any> {
        let component = self.objects.get(&object)?.components.get(&type_id)?;
        Some(&**component)
    }

    fn carries_entity(&self, object: ObjectId) -> bool {
        self.objects.get(&object).is_some_and(|o| o.carries_entity)
    }

    fn attach_entity(&mut self, object: ObjectId) -> Result<(), HostError> {
        self.object_mut(object)?.carries_entity = true;
        Ok(())
    }

    fn contains(&self, object: ObjectId) -> bool {
        self.objects.contains_key(&object)
    }
}

#[cfg(test)]
mod tests {
    use ecl_entity::HostEngineExt;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Health(f32);

    impl Component for Health {
        fn type_name() -> &'static str {
            "Health"
        }
    }

    #[test]
    fn test_create_object() {
        let mut scene = SceneHost::new();
        let id = scene.create_object("Crate");
        assert!(scene.contains(id));
        assert_eq!(scene.name(id), Some("Crate"));
        assert_eq!(scene.transform(id), Some(Transform3D::IDENTITY));
        assert!(!scene.carries_entity(id));
    }

    #[test]
    fn test_component_lookup() {
        let mut scene = SceneHost::new();
        let id = scene.create_object("Player");
        assert!(!scene.has::<Health>(id));

        scene.add_component(id, Health(10.0)).unwrap();
        scene.add_component(id, Health(12.0)).unwrap();
        assert_eq!(scene.get::<Health>(id), Some(&Health(12.0)));
        assert_eq!(scene.object(id).map(SceneObject::component_count), Some(1));

        assert_eq!(scene.remove_component::<Health>(id), Some(Health(12.0)));
        assert!(!scene.has::<Health>(id));
    }

    #[test]
    fn test_add_component_to_unknown_object() {
        let mut scene = SceneHost::new();
        assert_eq!(
            scene.add_component(ObjectId(42), Health(1.0)),
            Err(HostError::UnknownObject(ObjectId(42)))
        );
    }

    #[test]
    fn test_instantiate_gives_independent_components() {
        let mut scene = SceneHost::new();
        let prefab = scene.register_prefab(Prefab::new("Orc").with_component(Health(5.0)));

        let a = scene.instantiate(prefab).unwrap();
        let b = scene.instantiate(prefab).unwrap();
        assert_ne!(a, b);

        scene.add_component(a, Health(1.0)).unwrap();
        assert_eq!(scene.get::<Health>(a), Some(&Health(1.0)));
        assert_eq!(scene.get::<Health>(b), Some(&Health(5.0)));
        assert_eq!(scene.name(b), Some("Orc"));
    }

    #[test]
    fn test_instantiate_unknown_prefab() {
        let mut scene = SceneHost::new();
        assert_eq!(
            scene.instantiate(PrefabId(3)),
            Err(HostError::UnknownPrefab(PrefabId(3)))
        );
    }

    #[test]
    fn test_destroy_takes_subtree() {
        let mut scene = SceneHost::new();
        let root = scene.create_object("root");
        let child = scene.create_object("child");
        let grandchild = scene.create_object("grandchild");
        let other = scene.create_object("other");
        scene.set_parent(child, root).unwrap();
        scene.set_parent(grandchild, child).unwrap();

        let destroyed = scene.destroy_object(root).unwrap();
        assert_eq!(destroyed, vec![root, child, grandchild]);
        assert_eq!(scene.object_count(), 1);
        assert!(scene.contains(other));
    }

    #[test]
    fn test_destroy_detaches_from_parent() {
        let mut scene = SceneHost::new();
        let root = scene.create_object("root");
        let child = scene.create_object("child");
        scene.set_parent(child, root).unwrap();

        scene.destroy_object(child).unwrap();
        assert!(scene.children(root).is_empty());
        assert_eq!(
            scene.destroy_object(child),
            Err(HostError::UnknownObject(child))
        );
    }

    #[test]
    fn test_reparent_moves_child() {
        let mut scene = SceneHost::new();
        let a = scene.create_object("a");
        let b = scene.create_object("b");
        let child = scene.create_object("child");

        scene.set_parent(child, a).unwrap();
        scene.set_parent(child, b).unwrap();
        assert!(scene.children(a).is_empty());
        assert_eq!(scene.children(b), &[child]);
        assert_eq!(scene.parent(child), Some(b));
    }

    #[test]
    fn test_parent_cycle_rejected() {
        let mut scene = SceneHost::new();
        let a = scene.create_object("a");
        let b = scene.create_object("b");
        scene.set_parent(b, a).unwrap();

        assert_eq!(
            scene.set_parent(a, b),
            Err(HostError::ParentCycle { child: a, parent: b })
        );
        assert_eq!(
            scene.set_parent(a, a),
            Err(HostError::ParentCycle { child: a, parent: a })
        );
    }

    #[test]
    fn test_transform_setters() {
        let mut scene = SceneHost::new();
        let id = scene.create_object("mover");
        let rotation = Quat::from_rotation_z(1.0);
        scene.set_position(id, Vec3::new(1.0, 2.0, 3.0)).unwrap();
        scene.set_rotation(id, rotation).unwrap();

        let transform = scene.transform(id).unwrap();
        assert_eq!(transform.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(transform.rotation, rotation);
    }
}
