//! Fire resolver: turns a Fire command into a hit, a bullet and feedback.
//!
//! Hitscan shots resolve the nearest hit instantly and spawn a visual-only
//! bullet. Ballistic shots spawn a colliding bullet and resolve later in the
//! projectile pass through the same `resolve_hit` policy.

use hecs::{Entity, World};
use tracing::{debug, info};

use gallery_core::components::{Enemy, Environment, SceneHandle, Target};
use gallery_core::enums::{HitEffectStyle, ShotOutcome, WeaponModel};
use gallery_core::events::{AudioEvent, SimEvent};
use gallery_core::types::{ObjectId, Position};
use gallery_scene::{Ray, RayHit, SceneGraph};
use glam::Vec3;

use super::FrameContext;
use crate::player::PlayerState;
use crate::world_setup;

/// Fire one shot from the player's eye along the view direction.
///
/// Returns the outcome for hitscan shots, `None` when resolution is deferred
/// to a ballistic bullet.
pub fn fire<S: SceneGraph>(
    ctx: &mut FrameContext<'_, S>,
    player: &PlayerState,
) -> Option<ShotOutcome> {
    let config = ctx.config;
    let weapon = &config.weapon;
    let origin = player.eye();
    let ray = Ray::new(origin, player.view_direction())?;

    ctx.score.shots_fired += 1;
    ctx.audio_events.push(AudioEvent::Shot);
    ctx.events.push(SimEvent::ShotFired {
        origin,
        direction: ray.direction,
    });
    debug!(shot = ctx.score.shots_fired, model = ?weapon.model, "shot fired");

    match weapon.model {
        WeaponModel::Hitscan => {
            let mut candidates = collect_candidates(ctx.world);
            let hit = ctx.scene.cast_ray(&ray, weapon.hitscan_range, &candidates);
            let (outcome, travel) = match hit {
                Some(hit) => (resolve_hit(ctx, &hit, &mut candidates), hit.distance),
                None => (ShotOutcome::Miss, weapon.hitscan_range),
            };

            world_setup::spawn_bullet(
                ctx.world,
                ctx.scene,
                origin,
                ray.direction,
                weapon.bullet_speed,
                travel.min(weapon.bullet_max_distance),
                false,
            );
            if let Some(secs) = weapon.tracer_secs {
                world_setup::spawn_tracer(ctx.world, ctx.scene, origin, ray.at(travel), secs);
            }
            Some(outcome)
        }
        WeaponModel::Ballistic => {
            world_setup::spawn_bullet(
                ctx.world,
                ctx.scene,
                origin,
                ray.direction,
                weapon.bullet_speed,
                weapon.bullet_max_distance,
                true,
            );
            None
        }
    }
}

/// Scene objects a shot may strike: live targets, room geometry and the
/// active enemy.
pub fn collect_candidates(world: &World) -> Vec<ObjectId> {
    let mut candidates = Vec::new();
    for (_entity, (handle, _target)) in world.query::<(&SceneHandle, &Target)>().iter() {
        candidates.push(handle.0);
    }
    for (_entity, (handle, _env)) in world.query::<(&SceneHandle, &Environment)>().iter() {
        candidates.push(handle.0);
    }
    for (_entity, (handle, enemy)) in world.query::<(&SceneHandle, &Enemy)>().iter() {
        if enemy.active {
            candidates.push(handle.0);
        }
    }
    candidates
}

/// Entity owning the given scene object.
pub fn find_by_handle(world: &World, object: ObjectId) -> Option<Entity> {
    world
        .query::<&SceneHandle>()
        .iter()
        .find(|(_, handle)| handle.0 == object)
        .map(|(entity, _)| entity)
}

/// Apply the consequences of a hit. A destroyed object is dropped from
/// `candidates` so later rays in the same pass cannot strike it again.
pub fn resolve_hit<S: SceneGraph>(
    ctx: &mut FrameContext<'_, S>,
    hit: &RayHit,
    candidates: &mut Vec<ObjectId>,
) -> ShotOutcome {
    let Some(entity) = find_by_handle(ctx.world, hit.object) else {
        return ShotOutcome::Miss;
    };

    if ctx.world.get::<&Target>(entity).is_ok() {
        destroy_target(ctx, entity, hit, candidates);
        return ShotOutcome::Target;
    }

    if ctx.world.get::<&Enemy>(entity).is_ok() {
        destroy_enemy(ctx, entity, hit, candidates);
        return ShotOutcome::Enemy;
    }

    if ctx.world.get::<&Environment>(entity).is_ok() {
        ctx.audio_events.push(AudioEvent::Clang);
        ctx.events.push(SimEvent::EnvironmentHit {
            object: hit.object,
            point: hit.point,
        });
        if ctx.config.effects.style == HitEffectStyle::Burst {
            world_setup::spawn_decal(
                ctx.world,
                ctx.scene,
                hit.point,
                hit.normal,
                ctx.config.effects.decal_life_secs,
            );
        }
        return ShotOutcome::Environment;
    }

    ShotOutcome::Miss
}

fn destroy_target<S: SceneGraph>(
    ctx: &mut FrameContext<'_, S>,
    entity: Entity,
    hit: &RayHit,
    candidates: &mut Vec<ObjectId>,
) {
    let center = ctx
        .world
        .get::<&Position>(entity)
        .map(|p| p.0)
        .unwrap_or(hit.point);

    ctx.despawn_buffer.push(entity);
    candidates.retain(|&c| c != hit.object);

    ctx.score.targets_destroyed += 1;
    ctx.audio_events.push(AudioEvent::Destroy);
    ctx.events.push(SimEvent::TargetDestroyed {
        object: hit.object,
        point: hit.point,
    });
    info!(
        object = hit.object.0,
        distance = hit.distance,
        remaining = ctx.score.targets_remaining(),
        "target destroyed"
    );

    let effects = &ctx.config.effects;
    if effects.style == HitEffectStyle::Burst {
        world_setup::spawn_burst(ctx.world, ctx.scene, ctx.rng, effects, hit.point);
        // Stain on the floor under the target.
        world_setup::spawn_decal(
            ctx.world,
            ctx.scene,
            Vec3::new(center.x, 0.0, center.z),
            Vec3::Y,
            effects.decal_life_secs,
        );
    }

    if ctx.score.targets_total > 0 && ctx.score.targets_remaining() == 0 && !ctx.score.cleared {
        ctx.score.cleared = true;
        ctx.events.push(SimEvent::GalleryCleared);
        info!(shots = ctx.score.shots_fired, "gallery cleared");
    }
}

fn destroy_enemy<S: SceneGraph>(
    ctx: &mut FrameContext<'_, S>,
    entity: Entity,
    hit: &RayHit,
    candidates: &mut Vec<ObjectId>,
) {
    let respawn_secs = ctx
        .config
        .pursuit
        .as_ref()
        .map_or(0.0, |p| p.respawn_delay_secs);

    match ctx.world.get::<&mut Enemy>(entity) {
        Ok(mut enemy) if enemy.active => {
            enemy.active = false;
            enemy.respawn_secs = respawn_secs;
        }
        _ => return,
    }

    // The entity stays in the world; only its visual goes away until respawn.
    if let Err(err) = ctx.scene.remove_object(hit.object) {
        tracing::warn!(%err, "enemy object missing from scene");
    }
    candidates.retain(|&c| c != hit.object);

    ctx.score.enemy_kills += 1;
    ctx.audio_events.push(AudioEvent::Destroy);
    ctx.events.push(SimEvent::EnemyDestroyed { point: hit.point });
    info!(kills = ctx.score.enemy_kills, respawn_secs, "enemy destroyed");

    let effects = &ctx.config.effects;
    if effects.style == HitEffectStyle::Burst {
        world_setup::spawn_burst(ctx.world, ctx.scene, ctx.rng, effects, hit.point);
    }
}
