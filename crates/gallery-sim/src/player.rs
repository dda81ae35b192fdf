//! Player and input records.
//!
//! Stored directly on the `Simulator`, NOT as ECS entities: there is exactly
//! one player and every system reads it.

use glam::{Vec2, Vec3};

use gallery_core::config::SessionConfig;
use gallery_core::enums::Action;
use gallery_core::state::PlayerView;
use gallery_core::types::view_direction;

/// Movement flags held between key-down and key-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    /// One-shot trigger, consumed by the next movement integration.
    pub jump_requested: bool,
}

impl InputState {
    /// Apply a key transition. Last event wins.
    pub fn set(&mut self, action: Action, pressed: bool) {
        match action {
            Action::Forward => self.forward = pressed,
            Action::Back => self.back = pressed,
            Action::Left => self.left = pressed,
            Action::Right => self.right = pressed,
            Action::Jump => {
                if pressed {
                    self.jump_requested = true;
                }
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any_movement(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }
}

/// Player transform and motion state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    /// Integrated camera position (walk bob excluded).
    pub position: Vec3,
    /// Camera-relative horizontal velocity: x = right, y = forward.
    pub velocity: Vec2,
    pub vertical_velocity: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub grounded: bool,
    /// Walk-cycle phase (radians).
    pub walk_phase: f32,
    /// Current walk-bob offset added to the eye height.
    pub bob_offset: f32,
}

impl PlayerState {
    /// Standing at the configured spawn, facing -z.
    pub fn spawn(config: &SessionConfig) -> Self {
        let spawn = config.room.spawn;
        Self {
            position: Vec3::new(spawn.x, config.movement.player_height, spawn.y),
            velocity: Vec2::ZERO,
            vertical_velocity: 0.0,
            yaw: 0.0,
            pitch: 0.0,
            grounded: true,
            walk_phase: 0.0,
            bob_offset: 0.0,
        }
    }

    /// Camera position used for rendering and for firing.
    pub fn eye(&self) -> Vec3 {
        self.position + Vec3::Y * self.bob_offset
    }

    pub fn view_direction(&self) -> Vec3 {
        view_direction(self.yaw, self.pitch)
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            position: self.position,
            eye: self.eye(),
            yaw: self.yaw,
            pitch: self.pitch,
            velocity: self.velocity,
            vertical_velocity: self.vertical_velocity,
            grounded: self.grounded,
        }
    }
}
