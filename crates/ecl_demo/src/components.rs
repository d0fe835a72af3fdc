//! Component definitions used by the demo scene.

use ecl_component::Component;
use ecl_math::Vec3;

/// A 3D velocity component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    /// Linear velocity in world units per second.
    pub linear: Vec3,
}

impl Velocity {
    /// Create a new velocity.
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            linear: Vec3::new(x, y, z),
        }
    }
}

impl Component for Velocity {
    fn type_name() -> &'static str {
        "Velocity"
    }
}

/// A health component with current and maximum hit points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Health {
    /// Current hit points.
    pub current: f32,
    /// Maximum hit points.
    pub max: f32,
}

impl Health {
    /// Create a new health component at full HP.
    #[must_use]
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }
}

impl Component for Health {
    fn type_name() -> &'static str {
        "Health"
    }
}

/// Marks objects the player controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerControlled;

impl Component for PlayerControlled {
    fn type_name() -> &'static str {
        "PlayerControlled"
    }
}
