//! Snapshot system: queries the ECS world and builds a complete FrameSnapshot.
//!
//! This system is read-only. It never modifies the world.

use glam::Vec3;
use hecs::World;

use gallery_core::components::*;
use gallery_core::enums::SessionPhase;
use gallery_core::events::{AudioEvent, SimEvent};
use gallery_core::state::*;
use gallery_core::types::{Position, SimTime};

use crate::player::PlayerState;
use crate::session::ScoreState;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SessionPhase,
    player: &PlayerState,
    score: &ScoreState,
    events: Vec<SimEvent>,
    audio_events: Vec<AudioEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        phase,
        player: player.view(),
        targets: build_targets(world),
        projectiles: build_projectiles(world),
        effects: build_effects(world),
        enemy: build_enemy(world, player.position),
        events,
        audio_events,
        score: score.view(),
    }
}

fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&Target, &Position, &SceneHandle)>()
        .iter()
        .map(|(_, (_, pos, handle))| TargetView {
            object: handle.0,
            position: pos.0,
        })
        .collect();
    targets.sort_by_key(|t| t.object);
    targets
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &SceneHandle)>()
        .iter()
        .map(|(_, (projectile, pos, handle))| ProjectileView {
            object: handle.0,
            position: pos.0,
            remaining_distance: projectile.remaining_distance,
        })
        .collect();
    projectiles.sort_by_key(|p| p.object);
    projectiles
}

fn build_effects(world: &World) -> Vec<EffectView> {
    let mut effects: Vec<EffectView> = world
        .query::<(&Effect, &Position, &SceneHandle)>()
        .iter()
        .map(|(_, (effect, pos, handle))| EffectView {
            object: handle.0,
            kind: effect.kind,
            position: pos.0,
            remaining_secs: effect.remaining_secs,
        })
        .collect();
    effects.sort_by_key(|e| e.object);
    effects
}

fn build_enemy(world: &World, player: Vec3) -> Option<EnemyView> {
    world
        .query::<(&Enemy, &Position)>()
        .iter()
        .next()
        .map(|(_, (enemy, pos))| EnemyView {
            position: pos.0,
            active: enemy.active,
            distance_to_player: pos.0.distance(player),
        })
}
