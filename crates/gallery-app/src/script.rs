//! Timed input scripts for demo runs.
//!
//! A script is a list of commands stamped with the wall or simulated time at
//! which they should be delivered. Scripts load from JSON so runs can be
//! replayed.

use std::path::Path;

use serde::{Deserialize, Serialize};

use gallery_core::commands::InputCommand;

use crate::error::AppError;

/// A single scripted command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedInput {
    /// Seconds since the run started.
    pub at_secs: f32,
    pub command: InputCommand,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoScript {
    pub inputs: Vec<ScriptedInput>,
    /// Index of the next undelivered input.
    #[serde(skip)]
    cursor: usize,
}

impl DemoScript {
    /// Build a script, ordering inputs by time. Inputs sharing a timestamp
    /// keep their given order.
    pub fn new(mut inputs: Vec<ScriptedInput>) -> Self {
        inputs.sort_by(|a, b| a.at_secs.total_cmp(&b.at_secs));
        Self { inputs, cursor: 0 }
    }

    pub fn from_json_str(source: &str) -> Result<Self, AppError> {
        let script: DemoScript = serde_json::from_str(source)?;
        Ok(Self::new(script.inputs))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Walk forward, fire a few shots while turning, then strafe.
    pub fn sweep() -> Self {
        let at = |at_secs: f32, command: InputCommand| ScriptedInput { at_secs, command };
        let look = |yaw_delta: f32| InputCommand::Look {
            yaw_delta,
            pitch_delta: 0.0,
        };
        Self::new(vec![
            at(0.0, InputCommand::SetControlActive { active: true }),
            at(0.2, InputCommand::key_down("KeyW")),
            at(1.2, InputCommand::key_up("KeyW")),
            at(1.5, InputCommand::Fire),
            at(2.0, look(0.3)),
            at(2.1, InputCommand::Fire),
            at(2.6, look(-0.6)),
            at(2.7, InputCommand::Fire),
            at(3.0, InputCommand::key_down("KeyD")),
            at(3.5, InputCommand::key_up("KeyD")),
            at(3.6, look(0.3)),
            at(4.0, InputCommand::Fire),
            at(4.5, InputCommand::key_down("Space")),
        ])
    }

    /// Commands due at `elapsed_secs` that were not delivered yet.
    pub fn due(&mut self, elapsed_secs: f32) -> Vec<InputCommand> {
        let start = self.cursor;
        while self
            .inputs
            .get(self.cursor)
            .is_some_and(|input| input.at_secs <= elapsed_secs)
        {
            self.cursor += 1;
        }
        self.inputs[start..self.cursor]
            .iter()
            .map(|input| input.command.clone())
            .collect()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.inputs.len()
    }

    /// Timestamp of the last input.
    pub fn duration_secs(&self) -> f32 {
        self.inputs.last().map_or(0.0, |input| input.at_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_delivers_each_input_once() {
        let mut script = DemoScript::sweep();
        let total = script.inputs.len();

        let first = script.due(0.0);
        assert_eq!(first, vec![InputCommand::SetControlActive { active: true }]);
        assert!(script.due(0.0).is_empty());

        let mut delivered = first.len();
        let mut t = 0.0;
        while t < 6.0 {
            t += 0.05;
            delivered += script.due(t).len();
        }
        assert_eq!(delivered, total);
        assert!(script.is_finished());
    }

    #[test]
    fn test_new_orders_by_time() {
        let script = DemoScript::new(vec![
            ScriptedInput {
                at_secs: 2.0,
                command: InputCommand::Fire,
            },
            ScriptedInput {
                at_secs: 1.0,
                command: InputCommand::key_down("KeyW"),
            },
            ScriptedInput {
                at_secs: 1.0,
                command: InputCommand::key_down("KeyA"),
            },
        ]);
        let order: Vec<_> = script.inputs.iter().map(|i| i.command.clone()).collect();
        assert_eq!(
            order,
            vec![
                InputCommand::key_down("KeyW"),
                InputCommand::key_down("KeyA"),
                InputCommand::Fire,
            ]
        );
        assert_eq!(script.duration_secs(), 2.0);
    }

    #[test]
    fn test_script_from_json() {
        let json = r#"{
            "inputs": [
                { "at_secs": 0.5, "command": { "type": "Fire" } },
                { "at_secs": 0.0, "command": { "type": "SetControlActive", "active": true } },
                { "at_secs": 0.1, "command": { "type": "Look", "yaw_delta": 0.2, "pitch_delta": 0.0 } }
            ]
        }"#;
        let mut script = DemoScript::from_json_str(json).unwrap();
        assert_eq!(script.inputs.len(), 3);
        assert_eq!(
            script.due(0.2),
            vec![
                InputCommand::SetControlActive { active: true },
                InputCommand::Look {
                    yaw_delta: 0.2,
                    pitch_delta: 0.0
                },
            ]
        );
    }

    #[test]
    fn test_bad_script_rejected() {
        let result = DemoScript::from_json_str(r#"{ "inputs": [ { "at_secs": 1.0 } ] }"#);
        assert!(matches!(result, Err(AppError::Json(_))));
    }
}
