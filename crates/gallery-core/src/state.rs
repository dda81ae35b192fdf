//! Frame snapshot: the complete visible state handed to the renderer after
//! each step.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::{EffectKind, SessionPhase};
use crate::events::{AudioEvent, SimEvent};
use crate::types::{ObjectId, SimTime};

/// Complete session state after one frame step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    pub player: PlayerView,
    pub targets: Vec<TargetView>,
    pub projectiles: Vec<ProjectileView>,
    pub effects: Vec<EffectView>,
    pub enemy: Option<EnemyView>,
    pub events: Vec<SimEvent>,
    pub audio_events: Vec<AudioEvent>,
    pub score: ScoreView,
}

/// Player transform and motion state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    /// Integrated camera position (without walk bob).
    pub position: Vec3,
    /// Camera position the renderer should use (with walk bob).
    pub eye: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Camera-relative horizontal velocity (x = right, y = forward).
    pub velocity: Vec2,
    pub vertical_velocity: f32,
    pub grounded: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetView {
    pub object: ObjectId,
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub object: ObjectId,
    pub position: Vec3,
    pub remaining_distance: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EffectView {
    pub object: ObjectId,
    pub kind: EffectKind,
    pub position: Vec3,
    pub remaining_secs: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Vec3,
    pub active: bool,
    /// Distance to the player's integrated position.
    pub distance_to_player: f32,
}

/// Running score for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub shots_fired: u32,
    pub targets_destroyed: u32,
    pub targets_total: u32,
    pub enemy_kills: u32,
}
