//! Auto-aim driver: turns toward the most pressing object in the latest
//! snapshot and fires at a fixed cadence.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use gallery_core::commands::InputCommand;
use gallery_core::state::{FrameSnapshot, PlayerView};

/// Wrap an angle into `[-PI, PI)`.
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Yaw and pitch deltas that point the camera at `point`.
pub fn look_toward(player: &PlayerView, point: Vec3) -> Option<(f32, f32)> {
    let d = point - player.eye;
    let horizontal = Vec2::new(d.x, d.z).length();
    if horizontal < f32::EPSILON {
        return None;
    }
    let yaw = (-d.x).atan2(-d.z);
    let pitch = d.y.atan2(horizontal);
    Some((wrap_angle(yaw - player.yaw), pitch - player.pitch))
}

/// The active enemy first, otherwise the nearest target.
pub fn choose_aim_point(snapshot: &FrameSnapshot) -> Option<Vec3> {
    if let Some(enemy) = snapshot.enemy.filter(|e| e.active) {
        return Some(enemy.position);
    }
    let eye = snapshot.player.eye;
    snapshot
        .targets
        .iter()
        .map(|t| t.position)
        .min_by(|a, b| a.distance_squared(eye).total_cmp(&b.distance_squared(eye)))
}

#[derive(Debug, Clone)]
pub struct AutoAim {
    pub fire_interval_secs: f32,
    next_fire_secs: f32,
    engaged: bool,
    last_frame: Option<u64>,
}

impl AutoAim {
    pub fn new(fire_interval_secs: f32) -> Self {
        Self {
            fire_interval_secs,
            next_fire_secs: 0.0,
            engaged: false,
            last_frame: None,
        }
    }

    /// Commands for this poll. Engages the control gate first; afterwards
    /// acts at most once per simulated frame.
    pub fn commands(&mut self, elapsed_secs: f32, latest: Option<&FrameSnapshot>) -> Vec<InputCommand> {
        if !self.engaged {
            self.engaged = true;
            return vec![InputCommand::SetControlActive { active: true }];
        }

        let Some(snapshot) = latest else {
            return Vec::new();
        };
        if self.last_frame == Some(snapshot.time.frame) {
            return Vec::new();
        }
        self.last_frame = Some(snapshot.time.frame);

        let Some(point) = choose_aim_point(snapshot) else {
            return Vec::new();
        };

        let mut commands = Vec::new();
        if let Some((yaw_delta, pitch_delta)) = look_toward(&snapshot.player, point) {
            commands.push(InputCommand::Look {
                yaw_delta,
                pitch_delta,
            });
        }
        if elapsed_secs >= self.next_fire_secs {
            commands.push(InputCommand::Fire);
            self.next_fire_secs = elapsed_secs + self.fire_interval_secs;
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::state::{EnemyView, TargetView};
    use gallery_core::types::{view_direction, ObjectId};

    fn player_at(eye: Vec3, yaw: f32) -> PlayerView {
        PlayerView {
            position: eye,
            eye,
            yaw,
            ..Default::default()
        }
    }

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-5);
        assert!((wrap_angle(-3.0 * PI / 2.0) - PI / 2.0).abs() < 1e-5);
        assert!((wrap_angle(0.25) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_look_toward_points_view_at_target() {
        let player = player_at(Vec3::new(0.0, 2.0, 60.0), 1.0);
        let point = Vec3::new(-20.0, 2.5, 30.0);
        let (dy, dp) = look_toward(&player, point).unwrap();

        let dir = view_direction(player.yaw + dy, player.pitch + dp);
        let expected = (point - player.eye).normalize();
        assert!(dir.distance(expected) < 1e-4);
    }

    #[test]
    fn test_look_toward_directly_above_is_none() {
        let player = player_at(Vec3::new(0.0, 2.0, 0.0), 0.0);
        assert!(look_toward(&player, Vec3::new(0.0, 10.0, 0.0)).is_none());
    }

    #[test]
    fn test_choose_prefers_active_enemy() {
        let mut snapshot = FrameSnapshot {
            player: player_at(Vec3::new(0.0, 2.0, 60.0), 0.0),
            ..Default::default()
        };
        snapshot.targets = vec![
            TargetView {
                object: ObjectId(1),
                position: Vec3::new(0.0, 2.5, 0.0),
            },
            TargetView {
                object: ObjectId(2),
                position: Vec3::new(5.0, 2.5, 40.0),
            },
        ];
        assert_eq!(choose_aim_point(&snapshot), Some(Vec3::new(5.0, 2.5, 40.0)));

        snapshot.enemy = Some(EnemyView {
            position: Vec3::new(0.0, 2.5, -80.0),
            active: true,
            distance_to_player: 140.0,
        });
        assert_eq!(choose_aim_point(&snapshot), Some(Vec3::new(0.0, 2.5, -80.0)));

        snapshot.enemy = snapshot.enemy.map(|e| EnemyView { active: false, ..e });
        assert_eq!(choose_aim_point(&snapshot), Some(Vec3::new(5.0, 2.5, 40.0)));
    }

    #[test]
    fn test_auto_aim_fires_on_cadence() {
        let mut aim = AutoAim::new(0.5);
        assert_eq!(
            aim.commands(0.0, None),
            vec![InputCommand::SetControlActive { active: true }]
        );

        let mut snapshot = FrameSnapshot {
            player: player_at(Vec3::new(0.0, 2.0, 60.0), 0.0),
            targets: vec![TargetView {
                object: ObjectId(1),
                position: Vec3::new(0.0, 2.0, 0.0),
            }],
            ..Default::default()
        };

        snapshot.time.frame = 1;
        let first = aim.commands(0.1, Some(&snapshot));
        assert!(first.contains(&InputCommand::Fire));
        // Same frame again: nothing.
        assert!(aim.commands(0.1, Some(&snapshot)).is_empty());

        snapshot.time.frame = 2;
        let second = aim.commands(0.2, Some(&snapshot));
        assert!(!second.contains(&InputCommand::Fire));

        snapshot.time.frame = 3;
        let third = aim.commands(0.6, Some(&snapshot));
        assert!(third.contains(&InputCommand::Fire));
    }
}
