//! Movement integrator.
//!
//! Damping, then input acceleration, then camera-relative displacement, then
//! the boundary and vertical clamps, then the walk-cycle bob.

use glam::Vec2;

use gallery_core::config::{MovementConfig, RoomConfig};
use gallery_core::types::{horizontal_forward, horizontal_right};

use crate::player::{InputState, PlayerState};

/// Integrate one frame of player movement. `dt` must already be clamped.
pub fn run(
    player: &mut PlayerState,
    input: &mut InputState,
    movement: &MovementConfig,
    room: &RoomConfig,
    dt: f32,
) {
    damp(&mut player.velocity, movement.damping, dt);
    accelerate(&mut player.velocity, input, movement.acceleration, dt);
    integrate_horizontal(player, room, dt);

    if movement.vertical {
        integrate_vertical(player, input.jump_requested, movement, room, dt);
    } else {
        player.position.y = movement.player_height;
        player.vertical_velocity = 0.0;
        player.grounded = true;
    }
    input.jump_requested = false;

    update_bob(player, movement, dt);
}

/// Exponential decay toward zero. The factor never goes negative, so the
/// velocity never reverses sign.
pub fn damp(velocity: &mut Vec2, damping: f32, dt: f32) {
    *velocity *= (1.0 - damping * dt).max(0.0);
}

/// Additive impulse along the normalized input direction.
pub fn accelerate(velocity: &mut Vec2, input: &InputState, acceleration: f32, dt: f32) {
    let direction = Vec2::new(
        input.right as i32 as f32 - input.left as i32 as f32,
        input.forward as i32 as f32 - input.back as i32 as f32,
    )
    .normalize_or_zero();

    if input.forward || input.back {
        velocity.y += direction.y * acceleration * dt;
    }
    if input.left || input.right {
        velocity.x += direction.x * acceleration * dt;
    }
}

fn integrate_horizontal(player: &mut PlayerState, room: &RoomConfig, dt: f32) {
    let forward = horizontal_forward(player.yaw);
    let right = horizontal_right(player.yaw);
    player.position += right * (player.velocity.x * dt) + forward * (player.velocity.y * dt);

    let limit = room.walkable_half_extent();
    player.position.x = player.position.x.clamp(-limit, limit);
    player.position.z = player.position.z.clamp(-limit, limit);
}

fn integrate_vertical(
    player: &mut PlayerState,
    jump_requested: bool,
    movement: &MovementConfig,
    room: &RoomConfig,
    dt: f32,
) {
    // Airborne jump requests are dropped.
    if jump_requested && player.grounded {
        player.vertical_velocity = movement.jump_velocity;
        player.grounded = false;
    }

    player.vertical_velocity += movement.gravity * dt;
    player.position.y += player.vertical_velocity * dt;

    let ceiling = room.max_player_height();
    if player.position.y > ceiling {
        player.position.y = ceiling;
        player.vertical_velocity = player.vertical_velocity.min(0.0);
    }

    if player.position.y <= movement.player_height {
        player.position.y = movement.player_height;
        player.vertical_velocity = 0.0;
        player.grounded = true;
    } else {
        player.grounded = false;
    }
}

fn update_bob(player: &mut PlayerState, movement: &MovementConfig, dt: f32) {
    let moving = player.velocity.length() > movement.bob_min_speed;
    if player.grounded && moving {
        player.walk_phase += movement.bob_rate * dt;
        player.bob_offset = movement.bob_amplitude * player.walk_phase.sin().abs();
    } else {
        player.walk_phase = 0.0;
        player.bob_offset = 0.0;
    }
}
