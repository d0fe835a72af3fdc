//! The entity façade.
//!
//! An [`Entity`] is identified by the host object it wraps. Its tag set and
//! event bag are created on first mutable access, so entities that never use
//! them cost nothing beyond the object ID.

use ecl_component::ObjectId;

use crate::events::Events;
use crate::tags::{IntTag, Tags};

/// Binds one host object to its tags, events, and registry membership.
#[derive(Debug)]
pub struct Entity {
    object: ObjectId,
    tags: Option<Tags>,
    events: Option<Events>,
}

impl Entity {
    /// Create the façade for `object`. It is not registered until handed to a
    /// [`Registry`](crate::Registry).
    #[must_use]
    pub fn new(object: ObjectId) -> Self {
        Self {
            object,
            tags: None,
            events: None,
        }
    }

    /// Returns the host object this entity wraps.
    #[must_use]
    pub fn object(&self) -> ObjectId {
        self.object
    }

    /// Returns the tag set, creating it on first use.
    pub fn tags(&mut self) -> &mut Tags {
        self.tags.get_or_insert_with(Tags::new)
    }

    /// Returns the tag set if it has been created.
    #[must_use]
    pub fn tags_if_created(&self) -> Option<&Tags> {
        self.tags.as_ref()
    }

    /// Returns `true` if the entity carries `tag`.
    ///
    /// Never allocates: an entity without a tag set has no tags.
    #[must_use]
    pub fn has_tag(&self, tag: IntTag) -> bool {
        self.tags.as_ref().is_some_and(|tags| tags.have(tag))
    }

    /// Returns the event bag, creating it on first use.
    pub fn events(&mut self) -> &mut Events {
        self.events.get_or_insert_with(Events::new)
    }

    /// Returns the event bag if it has been created.
    #[must_use]
    pub fn events_if_created(&self) -> Option<&Events> {
        self.events.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entity_has_no_sub_objects() {
        let entity = Entity::new(ObjectId(1));
        assert_eq!(entity.object(), ObjectId(1));
        assert!(entity.tags_if_created().is_none());
        assert!(entity.events_if_created().is_none());
    }

    #[test]
    fn test_tags_created_lazily() {
        let mut entity = Entity::new(ObjectId(1));
        assert!(!entity.has_tag(IntTag(3)));
        assert!(entity.tags_if_created().is_none());

        entity.tags().add(IntTag(3));
        assert!(entity.has_tag(IntTag(3)));
        assert_eq!(entity.tags_if_created().map(Tags::len), Some(1));
    }

    #[test]
    fn test_tags_reused_after_creation() {
        let mut entity = Entity::new(ObjectId(1));
        entity.tags().add(IntTag(1));
        entity.tags().add(IntTag(2));
        assert_eq!(entity.tags().len(), 2);
    }

    #[test]
    fn test_events_created_lazily() {
        let mut entity = Entity::new(ObjectId(1));
        entity.events().subscribe("spawned", |_| {});
        assert_eq!(
            entity
                .events_if_created()
                .map(|events| events.handler_count("spawned")),
            Some(1)
        );
    }
}
