//! Projectile lifecycle: advance bullets, resolve ballistic hits, expire
//! bullets whose distance budget runs out.

use glam::Vec3;
use hecs::Entity;
use tracing::{debug, warn};

use gallery_core::components::{Projectile, SceneHandle};
use gallery_core::events::SimEvent;
use gallery_core::types::{ObjectId, Position};
use gallery_scene::{Ray, SceneGraph};

use super::fire::{collect_candidates, resolve_hit};
use super::FrameContext;

pub fn run<S: SceneGraph>(ctx: &mut FrameContext<'_, S>, dt: f32) {
    if dt <= 0.0 {
        return;
    }

    let bullets: Vec<(Entity, Projectile, Vec3, ObjectId)> = ctx
        .world
        .query::<(&Projectile, &Position, &SceneHandle)>()
        .iter()
        .map(|(entity, (projectile, pos, handle))| (entity, *projectile, pos.0, handle.0))
        .collect();
    if bullets.is_empty() {
        return;
    }

    let mut candidates = collect_candidates(ctx.world);

    for (entity, projectile, position, handle) in bullets {
        let travel = (projectile.speed * dt).min(projectile.remaining_distance.max(0.0));

        if projectile.collides && travel > 0.0 {
            let hit = Ray::new(position, projectile.direction)
                .and_then(|ray| ctx.scene.cast_ray(&ray, travel, &candidates));
            if let Some(hit) = hit {
                let outcome = resolve_hit(ctx, &hit, &mut candidates);
                debug!(bullet = handle.0, ?outcome, distance = hit.distance, "bullet hit");
                ctx.despawn_buffer.push(entity);
                continue;
            }
        }

        let new_position = position + projectile.direction * travel;
        let remaining = projectile.remaining_distance - travel;
        if let Ok(mut p) = ctx.world.get::<&mut Projectile>(entity) {
            p.remaining_distance = remaining;
        }
        if let Ok(mut pos) = ctx.world.get::<&mut Position>(entity) {
            pos.0 = new_position;
        }

        if remaining <= 0.0 {
            ctx.despawn_buffer.push(entity);
            ctx.events.push(SimEvent::ProjectileExpired { object: handle });
        } else if let Err(err) = ctx.scene.set_position(handle, new_position) {
            warn!(%err, "bullet object missing from scene");
        }
    }
}
