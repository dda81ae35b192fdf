//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Player action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Forward,
    Back,
    Left,
    Right,
    Jump,
}

impl Action {
    /// Map a keyboard event code to its action.
    /// Arrow keys and WASD are aliases of the same four movement actions.
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" | "KeyW" => Some(Action::Forward),
            "ArrowDown" | "KeyS" => Some(Action::Back),
            "ArrowLeft" | "KeyA" => Some(Action::Left),
            "ArrowRight" | "KeyD" => Some(Action::Right),
            "Space" => Some(Action::Jump),
            _ => None,
        }
    }
}

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Control gate is off (pointer not locked). Nothing is simulated.
    #[default]
    Inactive,
    /// Control gate is on; frames are simulated.
    Active,
    /// The pursuit enemy reached the player. Terminal until reset.
    Caught,
}

/// How a shot is resolved against the scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponModel {
    /// Instant ray resolution; the spawned bullet is visual only.
    #[default]
    Hitscan,
    /// The bullet travels over frames and re-casts along each path segment.
    Ballistic,
}

/// What happens visually when a target is destroyed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitEffectStyle {
    /// The target simply disappears.
    #[default]
    Remove,
    /// Particle burst plus a stain decal; wall hits leave an impact decal.
    Burst,
}

/// Category of an object registered with the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Floor,
    Wall,
    Ceiling,
    Target,
    Enemy,
    Bullet,
    Particle,
    Tracer,
    Decal,
}

impl ObjectKind {
    /// Static room geometry acting as a raycast obstacle.
    pub fn is_environment(self) -> bool {
        matches!(self, ObjectKind::Floor | ObjectKind::Wall | ObjectKind::Ceiling)
    }
}

/// Transient visual effect kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Explosion particle, gravity-affected.
    Particle,
    /// Line along a shot's path.
    Tracer,
    /// Stain or impact mark on a surface.
    Decal,
}

/// Result of resolving one shot or one bullet path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// Nearest hit was a target, which was destroyed.
    Target,
    /// Nearest hit was the pursuit enemy.
    Enemy,
    /// Nearest hit was room geometry.
    Environment,
    /// Nothing within range.
    Miss,
}
