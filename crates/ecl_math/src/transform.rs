//! 3D transform.
//!
//! [`Transform3D`] is host-owned object state, not game logic, so it is not a
//! component: filters never select on it and it is read and written through
//! the host's transform operations instead.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A 3D transform representing position, rotation, and scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transform3D {
    /// World-space position.
    pub position: Vec3,
    /// Rotation as a unit quaternion.
    pub rotation: Quat,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Transform3D {
    /// The identity transform: origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transform() {
        let t = Transform3D::IDENTITY;
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let t = Transform3D {
            position: Vec3::new(1.0, 2.0, 3.0),
            ..Transform3D::IDENTITY
        };
        let bytes = rmp_serde::to_vec(&t).unwrap();
        let restored: Transform3D = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(t, restored);
    }
}
