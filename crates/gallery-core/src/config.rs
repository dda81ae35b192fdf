//! Session configuration.
//!
//! One `SessionConfig` selects the variant behaviour of the simulator
//! (weapon model, verticality, hit effects, pursuit enemy). Every section
//! falls back to its defaults, so a TOML file only needs the fields it
//! changes.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{HitEffectStyle, WeaponModel};

/// Configuration errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Complete configuration for one simulation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed for target placement and particle bursts.
    pub seed: u64,
    pub movement: MovementConfig,
    pub weapon: WeaponConfig,
    pub effects: EffectsConfig,
    pub room: RoomConfig,
    pub targets: TargetConfig,
    /// Present only in the chasing-enemy variant.
    pub pursuit: Option<PursuitConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub damping: f32,
    pub acceleration: f32,
    /// Enables gravity, jumping and the ceiling clamp.
    pub vertical: bool,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub player_height: f32,
    pub bob_rate: f32,
    pub bob_amplitude: f32,
    pub bob_min_speed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    pub model: WeaponModel,
    pub bullet_speed: f32,
    pub bullet_max_distance: f32,
    pub hitscan_range: f32,
    /// Tracer lifetime; `None` disables tracers.
    pub tracer_secs: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub style: HitEffectStyle,
    pub particle_count: u32,
    pub particle_speed: f32,
    pub particle_life_secs: f32,
    pub particle_gravity: f32,
    pub decal_life_secs: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    pub half_extent: f32,
    pub height: f32,
    pub wall_thickness: f32,
    pub wall_margin: f32,
    /// Adds ceiling geometry (and is required for the vertical clamp to be
    /// meaningful to the renderer).
    pub ceiling: bool,
    pub ceiling_margin: f32,
    /// Player spawn on the floor plane (x, z).
    pub spawn: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub count: u32,
    pub size: f32,
    pub spread: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PursuitConfig {
    pub speed: f32,
    pub height: f32,
    pub radius: f32,
    pub capture_distance: f32,
    pub respawn_delay_secs: f32,
    /// Enemy spawn on the floor plane (x, z).
    pub spawn: Vec2,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            movement: MovementConfig::default(),
            weapon: WeaponConfig::default(),
            effects: EffectsConfig::default(),
            room: RoomConfig::default(),
            targets: TargetConfig::default(),
            pursuit: None,
        }
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            damping: MOVE_DAMPING,
            acceleration: MOVE_ACCELERATION,
            vertical: false,
            gravity: PLAYER_GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            player_height: PLAYER_HEIGHT,
            bob_rate: BOB_RATE,
            bob_amplitude: BOB_AMPLITUDE,
            bob_min_speed: BOB_MIN_SPEED,
        }
    }
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            model: WeaponModel::Hitscan,
            bullet_speed: BULLET_SPEED,
            bullet_max_distance: BULLET_MAX_DISTANCE,
            hitscan_range: HITSCAN_RANGE,
            tracer_secs: None,
        }
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            style: HitEffectStyle::Remove,
            particle_count: BURST_PARTICLE_COUNT,
            particle_speed: BURST_PARTICLE_SPEED,
            particle_life_secs: BURST_PARTICLE_LIFE_SECS,
            particle_gravity: PARTICLE_GRAVITY,
            decal_life_secs: DECAL_LIFE_SECS,
        }
    }
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            half_extent: ROOM_HALF_EXTENT,
            height: ROOM_HEIGHT,
            wall_thickness: WALL_THICKNESS,
            wall_margin: WALL_MARGIN,
            ceiling: false,
            ceiling_margin: CEILING_MARGIN,
            spawn: Vec2::from_array(PLAYER_SPAWN),
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            count: TARGET_COUNT,
            size: TARGET_SIZE,
            spread: TARGET_SPREAD,
            height: TARGET_HEIGHT,
        }
    }
}

impl Default for PursuitConfig {
    fn default() -> Self {
        Self {
            speed: ENEMY_SPEED,
            height: ENEMY_HEIGHT,
            radius: ENEMY_RADIUS,
            capture_distance: CAPTURE_DISTANCE,
            respawn_delay_secs: ENEMY_RESPAWN_SECS,
            spawn: Vec2::from_array(ENEMY_SPAWN),
        }
    }
}

impl RoomConfig {
    /// Largest |x| or |z| the player may reach.
    pub fn walkable_half_extent(&self) -> f32 {
        self.half_extent - self.wall_thickness * 0.5 - self.wall_margin
    }

    /// Highest camera height allowed under the ceiling.
    pub fn max_player_height(&self) -> f32 {
        self.height - self.ceiling_margin
    }
}

impl SessionConfig {
    /// Static gallery: hitscan shots, targets vanish on hit.
    pub fn gallery() -> Self {
        Self::default()
    }

    /// Enclosed arena: gravity and jumping, ceiling, tracers, burst effects.
    pub fn arena() -> Self {
        let mut config = Self::default();
        config.movement.vertical = true;
        config.room.ceiling = true;
        config.weapon.tracer_secs = Some(TRACER_SECS);
        config.effects.style = HitEffectStyle::Burst;
        config
    }

    /// Ballistic bullets that resolve hits while travelling.
    pub fn ballistic() -> Self {
        let mut config = Self::default();
        config.weapon.model = WeaponModel::Ballistic;
        config.effects.style = HitEffectStyle::Burst;
        config
    }

    /// A chasing enemy that ends the session when it reaches the player.
    pub fn chase() -> Self {
        let mut config = Self::default();
        config.effects.style = HitEffectStyle::Burst;
        config.pursuit = Some(PursuitConfig::default());
        config
    }

    /// Parse from TOML, then validate.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the integrator or the room layout cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.movement;
        if m.damping < 0.0 || m.damping * MAX_FRAME_DT > 1.0 {
            return Err(invalid(
                "movement.damping",
                format!("must be within 0..={}", 1.0 / MAX_FRAME_DT),
            ));
        }
        positive("movement.acceleration", m.acceleration)?;
        positive("movement.player_height", m.player_height)?;
        if m.vertical {
            if m.gravity >= 0.0 {
                return Err(invalid("movement.gravity", "must be negative".into()));
            }
            positive("movement.jump_velocity", m.jump_velocity)?;
            if self.room.max_player_height() <= m.player_height {
                return Err(invalid(
                    "room.height",
                    "ceiling leaves no headroom above the player".into(),
                ));
            }
        }

        let w = &self.weapon;
        positive("weapon.bullet_speed", w.bullet_speed)?;
        positive("weapon.bullet_max_distance", w.bullet_max_distance)?;
        positive("weapon.hitscan_range", w.hitscan_range)?;
        if let Some(secs) = w.tracer_secs {
            positive("weapon.tracer_secs", secs)?;
        }

        let e = &self.effects;
        positive("effects.particle_life_secs", e.particle_life_secs)?;
        positive("effects.decal_life_secs", e.decal_life_secs)?;

        let r = &self.room;
        positive("room.half_extent", r.half_extent)?;
        if r.walkable_half_extent() <= 0.0 {
            return Err(invalid("room.wall_margin", "walls leave no floor".into()));
        }
        if r.spawn.x.abs() > r.walkable_half_extent() || r.spawn.y.abs() > r.walkable_half_extent()
        {
            return Err(invalid("room.spawn", "outside the walkable area".into()));
        }

        let t = &self.targets;
        if t.count > 0 {
            positive("targets.size", t.size)?;
            if t.spread * 0.5 + t.size * 0.5 > r.half_extent {
                return Err(invalid("targets.spread", "targets would leave the room".into()));
            }
        }

        if let Some(p) = &self.pursuit {
            positive("pursuit.speed", p.speed)?;
            positive("pursuit.radius", p.radius)?;
            positive("pursuit.capture_distance", p.capture_distance)?;
            if p.respawn_delay_secs < 0.0 {
                return Err(invalid("pursuit.respawn_delay_secs", "must not be negative".into()));
            }
            if p.spawn.distance(r.spawn) <= p.capture_distance {
                return Err(invalid(
                    "pursuit.spawn",
                    "enemy would start within capture distance".into(),
                ));
            }
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {value}")))
    }
}
