//! Input accumulator: key transitions and mouse look.

use std::f32::consts::TAU;

use gallery_core::constants::MAX_PITCH;
use gallery_core::enums::Action;

use crate::player::{InputState, PlayerState};

/// Apply a key-down or key-up. Unmapped keys are ignored.
pub fn apply_key(input: &mut InputState, code: &str, pressed: bool) -> Option<Action> {
    let action = Action::from_key_code(code)?;
    input.set(action, pressed);
    Some(action)
}

/// Rotate the camera. Pitch is clamped short of straight up/down.
pub fn apply_look(player: &mut PlayerState, yaw_delta: f32, pitch_delta: f32) {
    if !yaw_delta.is_finite() || !pitch_delta.is_finite() {
        return;
    }
    player.yaw = (player.yaw + yaw_delta).rem_euclid(TAU);
    player.pitch = (player.pitch + pitch_delta).clamp(-MAX_PITCH, MAX_PITCH);
}
