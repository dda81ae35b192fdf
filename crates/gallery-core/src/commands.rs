//! Input commands delivered by the input collaborator.
//!
//! Commands are queued and processed at the start of the next frame step.

use serde::{Deserialize, Serialize};

/// All possible input events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputCommand {
    /// A key was pressed (`KeyboardEvent.code` naming).
    KeyDown { code: String },
    /// A key was released.
    KeyUp { code: String },
    /// Mouse look, already scaled to radians.
    Look { yaw_delta: f32, pitch_delta: f32 },
    /// Fire once along the current view direction.
    Fire,
    /// The control gate (pointer lock) was engaged or released.
    SetControlActive { active: bool },
    /// Rebuild the session from its configuration.
    Reset,
}

impl InputCommand {
    pub fn key_down(code: &str) -> Self {
        InputCommand::KeyDown {
            code: code.to_string(),
        }
    }

    pub fn key_up(code: &str) -> Self {
        InputCommand::KeyUp {
            code: code.to_string(),
        }
    }
}
