//! Systems that operate on the simulation world each frame.
//!
//! Systems are plain functions over borrowed state. They do not own state:
//! everything lives in components, the player record or the engine.

pub mod cleanup;
pub mod effects;
pub mod fire;
pub mod input;
pub mod movement;
pub mod projectiles;
pub mod pursuit;
pub mod snapshot;

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use gallery_core::config::SessionConfig;
use gallery_core::events::{AudioEvent, SimEvent};
use gallery_scene::SceneGraph;

use crate::session::ScoreState;

/// Mutable engine state needed to resolve shots and their consequences.
pub struct FrameContext<'a, S: SceneGraph> {
    pub world: &'a mut World,
    pub scene: &'a mut S,
    pub rng: &'a mut ChaCha8Rng,
    pub config: &'a SessionConfig,
    pub score: &'a mut ScoreState,
    pub events: &'a mut Vec<SimEvent>,
    pub audio_events: &'a mut Vec<AudioEvent>,
    /// Entities to remove once the current pass finishes.
    pub despawn_buffer: &'a mut Vec<Entity>,
}
