//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{EffectKind, ObjectKind};
use crate::types::ObjectId;

/// Link from an entity to its scene-collaborator object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneHandle(pub ObjectId);

/// A destructible gallery target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target {
    /// Half the cube edge length.
    pub half_extent: f32,
}

/// Static room geometry (floor, walls, ceiling).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Environment {
    pub kind: ObjectKind,
}

/// A bullet travelling along a fixed ray.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Unit direction of travel.
    pub direction: Vec3,
    /// Speed in units/s.
    pub speed: f32,
    /// Distance left before the bullet expires.
    pub remaining_distance: f32,
    /// Whether the bullet resolves hits along its path (ballistic) or is
    /// feedback for an already-resolved hitscan shot.
    pub collides: bool,
}

/// A transient visual effect with a time budget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    /// Seconds left before the effect expires.
    pub remaining_secs: f32,
    /// Vertical acceleration applied to the effect's velocity (particles).
    pub gravity: f32,
}

/// The pursuit enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Inactive enemies are not rendered, cannot be shot and do not pursue.
    pub active: bool,
    /// Seconds until an inactive enemy respawns.
    pub respawn_secs: f32,
}
