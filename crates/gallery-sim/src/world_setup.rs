//! Entity spawn factories for setting up the simulation world.
//!
//! Every factory registers the entity's visual with the scene collaborator
//! and stores the returned handle on the entity, so cleanup can discard
//! both together.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gallery_core::components::*;
use gallery_core::config::{EffectsConfig, PursuitConfig, RoomConfig, SessionConfig, TargetConfig};
use gallery_core::constants::{BULLET_RADIUS, DECAL_RADIUS, PARTICLE_RADIUS};
use gallery_core::enums::{EffectKind, ObjectKind};
use gallery_core::types::{ObjectId, Position, Velocity};
use gallery_scene::{SceneGraph, SceneObject, Shape};

/// Decals sit this far off their surface to avoid z-fighting.
const DECAL_OFFSET: f32 = 0.01;

/// Set up a fresh session world: room, targets and (if configured) the enemy.
/// Returns the number of targets placed.
pub fn setup_session<S: SceneGraph>(
    world: &mut World,
    scene: &mut S,
    rng: &mut ChaCha8Rng,
    config: &SessionConfig,
) -> u32 {
    spawn_room(world, scene, &config.room);
    let placed = spawn_targets(world, scene, rng, &config.targets);
    if let Some(pursuit) = &config.pursuit {
        spawn_enemy(world, scene, pursuit);
    }
    placed
}

/// Floor, four walls and optionally a ceiling.
pub fn spawn_room<S: SceneGraph>(world: &mut World, scene: &mut S, room: &RoomConfig) {
    let he = room.half_extent;
    let half_height = room.height * 0.5;
    let half_thickness = room.wall_thickness * 0.5;

    spawn_static(
        world,
        scene,
        ObjectKind::Floor,
        Vec3::new(0.0, -0.5, 0.0),
        Vec3::new(he, 0.5, he),
    );

    let walls = [
        (Vec3::new(0.0, half_height, -he), Vec3::new(he, half_height, half_thickness)),
        (Vec3::new(0.0, half_height, he), Vec3::new(he, half_height, half_thickness)),
        (Vec3::new(-he, half_height, 0.0), Vec3::new(half_thickness, half_height, he)),
        (Vec3::new(he, half_height, 0.0), Vec3::new(half_thickness, half_height, he)),
    ];
    for (center, half_extents) in walls {
        spawn_static(world, scene, ObjectKind::Wall, center, half_extents);
    }

    if room.ceiling {
        spawn_static(
            world,
            scene,
            ObjectKind::Ceiling,
            Vec3::new(0.0, room.height + 0.5, 0.0),
            Vec3::new(he, 0.5, he),
        );
    }
}

fn spawn_static<S: SceneGraph>(
    world: &mut World,
    scene: &mut S,
    kind: ObjectKind,
    center: Vec3,
    half_extents: Vec3,
) -> hecs::Entity {
    let id = scene.add_object(SceneObject::new(kind, Shape::Box { half_extents }, center));
    world.spawn((Environment { kind }, Position(center), SceneHandle(id)))
}

/// Scatter cube targets over the configured square.
pub fn spawn_targets<S: SceneGraph>(
    world: &mut World,
    scene: &mut S,
    rng: &mut ChaCha8Rng,
    targets: &TargetConfig,
) -> u32 {
    let half_extent = targets.size * 0.5;
    for _ in 0..targets.count {
        let x = (rng.gen::<f32>() - 0.5) * targets.spread;
        let z = (rng.gen::<f32>() - 0.5) * targets.spread;
        spawn_target(world, scene, Vec3::new(x, targets.height, z), half_extent);
    }
    targets.count
}

/// Spawn a single cube target.
pub fn spawn_target<S: SceneGraph>(
    world: &mut World,
    scene: &mut S,
    position: Vec3,
    half_extent: f32,
) -> ObjectId {
    let id = scene.add_object(SceneObject::new(
        ObjectKind::Target,
        Shape::Box {
            half_extents: Vec3::splat(half_extent),
        },
        position,
    ));
    world.spawn((Target { half_extent }, Position(position), SceneHandle(id)));
    id
}

/// Spawn the pursuit enemy at its configured spawn point.
pub fn spawn_enemy<S: SceneGraph>(
    world: &mut World,
    scene: &mut S,
    pursuit: &PursuitConfig,
) -> hecs::Entity {
    let position = Vec3::new(pursuit.spawn.x, pursuit.height, pursuit.spawn.y);
    let id = add_enemy_object(scene, pursuit, position);
    world.spawn((
        Enemy {
            active: true,
            respawn_secs: 0.0,
        },
        Position(position),
        SceneHandle(id),
    ))
}

pub fn add_enemy_object<S: SceneGraph>(
    scene: &mut S,
    pursuit: &PursuitConfig,
    position: Vec3,
) -> ObjectId {
    scene.add_object(SceneObject::new(
        ObjectKind::Enemy,
        Shape::Sphere {
            radius: pursuit.radius,
        },
        position,
    ))
}

/// Spawn a bullet at `origin` travelling along `direction`.
pub fn spawn_bullet<S: SceneGraph>(
    world: &mut World,
    scene: &mut S,
    origin: Vec3,
    direction: Vec3,
    speed: f32,
    range: f32,
    collides: bool,
) -> ObjectId {
    let id = scene.add_object(SceneObject::new(
        ObjectKind::Bullet,
        Shape::Sphere {
            radius: BULLET_RADIUS,
        },
        origin,
    ));
    world.spawn((
        Projectile {
            direction,
            speed,
            remaining_distance: range,
            collides,
        },
        Position(origin),
        SceneHandle(id),
    ));
    id
}

/// Spawn an explosion of gravity-affected particles around `point`.
pub fn spawn_burst<S: SceneGraph>(
    world: &mut World,
    scene: &mut S,
    rng: &mut ChaCha8Rng,
    effects: &EffectsConfig,
    point: Vec3,
) {
    for _ in 0..effects.particle_count {
        let direction = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(0.2..1.0),
            rng.gen_range(-1.0..1.0),
        )
        .normalize_or_zero();
        let speed = effects.particle_speed * rng.gen_range(0.5..1.0);

        let id = scene.add_object(SceneObject::new(
            ObjectKind::Particle,
            Shape::Sphere {
                radius: PARTICLE_RADIUS,
            },
            point,
        ));
        world.spawn((
            Effect {
                kind: EffectKind::Particle,
                remaining_secs: effects.particle_life_secs,
                gravity: effects.particle_gravity,
            },
            Position(point),
            Velocity(direction * speed),
            SceneHandle(id),
        ));
    }
}

/// Spawn a stain or impact decal on the surface at `point`.
pub fn spawn_decal<S: SceneGraph>(
    world: &mut World,
    scene: &mut S,
    point: Vec3,
    normal: Vec3,
    life_secs: f32,
) -> ObjectId {
    let position = point + normal * DECAL_OFFSET;
    let id = scene.add_object(SceneObject::new(
        ObjectKind::Decal,
        Shape::Disc {
            normal,
            radius: DECAL_RADIUS,
        },
        position,
    ));
    world.spawn((
        Effect {
            kind: EffectKind::Decal,
            remaining_secs: life_secs,
            gravity: 0.0,
        },
        Position(position),
        SceneHandle(id),
    ));
    id
}

/// Spawn a tracer line from `start` to `end`.
pub fn spawn_tracer<S: SceneGraph>(
    world: &mut World,
    scene: &mut S,
    start: Vec3,
    end: Vec3,
    life_secs: f32,
) -> ObjectId {
    let id = scene.add_object(SceneObject::new(
        ObjectKind::Tracer,
        Shape::Segment { end },
        start,
    ));
    world.spawn((
        Effect {
            kind: EffectKind::Tracer,
            remaining_secs: life_secs,
            gravity: 0.0,
        },
        Position(start),
        SceneHandle(id),
    ));
    id
}
