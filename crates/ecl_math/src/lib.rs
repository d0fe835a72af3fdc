//! # ecl_math
//!
//! Math types for the entity convenience layer. Re-exports [`glam`] for
//! linear algebra and defines [`Transform3D`], the spatial state a host keeps
//! for every object.

pub mod transform;

// Re-export glam types for convenience.
pub use glam::{Quat, Vec3};

pub use transform::Transform3D;
