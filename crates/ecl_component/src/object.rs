//! Host object identifiers and allocation utilities.
//!
//! An [`ObjectId`] names one object living inside the host engine. The entity
//! layer never owns objects; it only refers to them by ID.

use serde::{Deserialize, Serialize};

/// A unique host object identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// The null / invalid object sentinel.
    pub const INVALID: ObjectId = ObjectId(0);

    /// Returns `true` if this is a valid (non-zero) object ID.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Object({})", self.0)
    }
}

/// Allocates monotonically increasing object IDs.
///
/// IDs are never recycled, so a destroyed object's ID can never alias a newer
/// object in a stale lookup.
#[derive(Debug)]
pub struct ObjectAllocator {
    next_id: u64,
}

impl ObjectAllocator {
    /// Creates a new allocator. IDs start at 1 (0 is reserved for [`ObjectId::INVALID`]).
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Allocates a fresh object ID.
    pub fn allocate(&mut self) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;
        ObjectId(id)
    }
}

impl Default for ObjectAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_creation() {
        let o = ObjectId(42);
        assert!(o.is_valid());
        assert_eq!(o.to_string(), "Object(42)");
    }

    #[test]
    fn test_object_invalid() {
        assert!(!ObjectId::INVALID.is_valid());
        assert_eq!(ObjectId::INVALID, ObjectId(0));
    }

    #[test]
    fn test_allocator_produces_unique_ids() {
        let mut alloc = ObjectAllocator::new();
        let o1 = alloc.allocate();
        let o2 = alloc.allocate();
        let o3 = alloc.allocate();
        assert_eq!([o1, o2, o3], [ObjectId(1), ObjectId(2), ObjectId(3)]);
        assert!(o1.is_valid());
    }

    #[test]
    fn test_object_serialization_roundtrip() {
        let object = ObjectId(999);
        let bytes = rmp_serde::to_vec(&object).unwrap();
        let restored: ObjectId = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(object, restored);
    }
}
