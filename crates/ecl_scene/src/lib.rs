//! # ecl_scene
//!
//! An in-memory [`HostEngine`](ecl_entity::HostEngine) implementation.
//!
//! [`SceneHost`] keeps named objects with transforms, a parent/child
//! hierarchy, typed components, and prefab templates. It backs the demo
//! binary and the end-to-end tests, and serves as a worked example of what a
//! real engine integration has to provide.

pub mod object;
pub mod prefab;
pub mod scene;

pub use object::SceneObject;
pub use prefab::Prefab;
pub use scene::SceneHost;
