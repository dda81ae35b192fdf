//! Pursuit enemy: straight-line chase on the floor plane, capture check and
//! respawn after being shot.

use glam::{Vec2, Vec3};
use hecs::World;
use tracing::info;

use gallery_core::components::{Enemy, SceneHandle};
use gallery_core::config::{PursuitConfig, RoomConfig};
use gallery_core::events::SimEvent;
use gallery_core::types::Position;
use gallery_scene::SceneGraph;

use crate::world_setup;

/// Step toward `player` on the x-z plane without overshooting. The enemy
/// stays at `height`.
pub fn advance(enemy: Vec3, player: Vec3, speed: f32, height: f32, dt: f32) -> Vec3 {
    let to_player = Vec2::new(player.x - enemy.x, player.z - enemy.z);
    let distance = to_player.length();
    let step = (speed * dt).min(distance);
    let offset = if distance > 0.0 {
        to_player / distance * step
    } else {
        Vec2::ZERO
    };
    Vec3::new(enemy.x + offset.x, height, enemy.z + offset.y)
}

/// Room corner farthest from `player`, inset to the walkable area.
pub fn farthest_corner(player: Vec3, room: &RoomConfig, height: f32) -> Vec3 {
    let limit = room.walkable_half_extent();
    let corners = [
        Vec3::new(-limit, height, -limit),
        Vec3::new(limit, height, -limit),
        Vec3::new(-limit, height, limit),
        Vec3::new(limit, height, limit),
    ];
    // Strictly greater keeps the first corner on ties.
    corners
        .into_iter()
        .fold((corners[0], f32::NEG_INFINITY), |best, corner| {
            let d = corner.distance_squared(player);
            if d > best.1 {
                (corner, d)
            } else {
                best
            }
        })
        .0
}

/// Move the enemy and tick its respawn timer. Returns the separation if the
/// enemy caught the player this frame.
pub fn run<S: SceneGraph>(
    world: &mut World,
    scene: &mut S,
    player: Vec3,
    pursuit: &PursuitConfig,
    room: &RoomConfig,
    dt: f32,
    events: &mut Vec<SimEvent>,
) -> Option<f32> {
    if dt <= 0.0 {
        return None;
    }

    let mut caught = None;
    for (_entity, (enemy, position, handle)) in
        world.query_mut::<(&mut Enemy, &mut Position, &mut SceneHandle)>()
    {
        if !enemy.active {
            enemy.respawn_secs -= dt;
            if enemy.respawn_secs <= 0.0 {
                let spawn = farthest_corner(player, room, pursuit.height);
                position.0 = spawn;
                handle.0 = world_setup::add_enemy_object(scene, pursuit, spawn);
                enemy.active = true;
                enemy.respawn_secs = 0.0;
                events.push(SimEvent::EnemyRespawned { position: spawn });
                info!(x = spawn.x, z = spawn.z, "enemy respawned");
            }
            continue;
        }

        position.0 = advance(position.0, player, pursuit.speed, pursuit.height, dt);
        if let Err(err) = scene.set_position(handle.0, position.0) {
            tracing::warn!(%err, "enemy object missing from scene");
        }

        let distance = position.0.distance(player);
        if distance < pursuit.capture_distance {
            caught = Some(distance);
        }
    }
    caught
}
