//! Events emitted by the simulation for audio and renderer feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::EffectKind;
use crate::types::ObjectId;

/// Fire-and-forget cues for the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A shot was fired.
    Shot,
    /// A target or the enemy was destroyed.
    Destroy,
    /// A shot struck room geometry.
    Clang,
}

/// State changes reported to the renderer and the session owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    ShotFired {
        origin: Vec3,
        direction: Vec3,
    },
    TargetDestroyed {
        object: ObjectId,
        point: Vec3,
    },
    EnvironmentHit {
        object: ObjectId,
        point: Vec3,
    },
    EnemyDestroyed {
        point: Vec3,
    },
    EnemyRespawned {
        position: Vec3,
    },
    ProjectileExpired {
        object: ObjectId,
    },
    EffectExpired {
        object: ObjectId,
        kind: EffectKind,
    },
    /// The last target of the gallery was destroyed.
    GalleryCleared,
    /// The pursuit enemy came within the capture threshold.
    PlayerCaught {
        distance: f32,
    },
    SessionReset,
}
