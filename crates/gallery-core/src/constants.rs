//! Simulation constants and tuning parameters.

/// Upper bound on a single frame delta (seconds). Larger deltas (tab stalls)
/// are integrated as exactly this value.
pub const MAX_FRAME_DT: f32 = 0.1;

// --- Movement ---

/// Exponential damping rate of horizontal velocity (1/s).
pub const MOVE_DAMPING: f32 = 10.0;

/// Input acceleration along the active movement axis (units/s²).
pub const MOVE_ACCELERATION: f32 = 400.0;

/// Camera height when standing on the floor.
pub const PLAYER_HEIGHT: f32 = 2.0;

/// Gravity acting on the player in the vertical variant (units/s²).
pub const PLAYER_GRAVITY: f32 = -800.0;

/// Vertical velocity applied by a jump.
pub const JUMP_VELOCITY: f32 = 150.0;

/// Distance kept between the camera and the ceiling.
pub const CEILING_MARGIN: f32 = 1.0;

/// Distance kept between the camera and the inner face of a wall.
pub const WALL_MARGIN: f32 = 1.0;

/// Walk-cycle phase advance rate (radians per second).
pub const BOB_RATE: f32 = 8.0;

/// Peak vertical offset of the walk-cycle bob.
pub const BOB_AMPLITUDE: f32 = 0.15;

/// Horizontal speed above which the player counts as moving for the bob.
pub const BOB_MIN_SPEED: f32 = 0.5;

/// Pitch limit (radians) keeping the view direction off the poles.
pub const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

// --- Weapon ---

/// Bullet speed (units/s).
pub const BULLET_SPEED: f32 = 400.0;

/// Distance a bullet travels before it expires.
pub const BULLET_MAX_DISTANCE: f32 = 200.0;

/// Bullet visual radius.
pub const BULLET_RADIUS: f32 = 0.2;

/// Maximum hitscan range (camera far plane).
pub const HITSCAN_RANGE: f32 = 1000.0;

/// Tracer lifetime in the variants that draw tracers (seconds).
pub const TRACER_SECS: f32 = 0.1;

// --- Hit effects ---

/// Particles spawned per destroyed target.
pub const BURST_PARTICLE_COUNT: u32 = 12;

/// Initial particle speed scale (units/s).
pub const BURST_PARTICLE_SPEED: f32 = 20.0;

/// Particle lifetime (seconds).
pub const BURST_PARTICLE_LIFE_SECS: f32 = 1.0;

/// Gravity acting on explosion particles (units/s²).
pub const PARTICLE_GRAVITY: f32 = -30.0;

/// Particle visual radius.
pub const PARTICLE_RADIUS: f32 = 0.3;

/// Stain/impact decal lifetime (seconds).
pub const DECAL_LIFE_SECS: f32 = 5.0;

/// Decal visual radius.
pub const DECAL_RADIUS: f32 = 1.5;

// --- Room ---

/// Half the room's floor edge (the floor is 200 x 200).
pub const ROOM_HALF_EXTENT: f32 = 100.0;

/// Wall and ceiling height.
pub const ROOM_HEIGHT: f32 = 20.0;

/// Wall thickness.
pub const WALL_THICKNESS: f32 = 2.0;

/// Player spawn on the floor plane (x, z).
pub const PLAYER_SPAWN: [f32; 2] = [0.0, 60.0];

// --- Targets ---

/// Targets placed in the gallery.
pub const TARGET_COUNT: u32 = 5;

/// Target cube edge length.
pub const TARGET_SIZE: f32 = 5.0;

/// Side of the square (centred on the origin) targets are scattered over.
pub const TARGET_SPREAD: f32 = 80.0;

/// Height of target centres.
pub const TARGET_HEIGHT: f32 = 2.5;

// --- Pursuit ---

/// Enemy pursuit speed (units/s).
pub const ENEMY_SPEED: f32 = 6.0;

/// Fixed height of the enemy's centre.
pub const ENEMY_HEIGHT: f32 = 2.5;

/// Enemy collision radius.
pub const ENEMY_RADIUS: f32 = 1.5;

/// Distance below which the enemy catches the player.
pub const CAPTURE_DISTANCE: f32 = 3.0;

/// Delay before a shot enemy respawns (seconds).
pub const ENEMY_RESPAWN_SECS: f32 = 3.0;

/// Enemy spawn on the floor plane (x, z).
pub const ENEMY_SPAWN: [f32; 2] = [0.0, -80.0];
