//! Effect lifecycle: particle motion and time-budget expiry.

use hecs::{Entity, World};
use tracing::warn;

use gallery_core::components::{Effect, SceneHandle};
use gallery_core::events::SimEvent;
use gallery_core::types::{Position, Velocity};
use gallery_scene::SceneGraph;

pub fn run<S: SceneGraph>(
    world: &mut World,
    scene: &mut S,
    dt: f32,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    if dt <= 0.0 {
        return;
    }

    for (entity, (effect, position, velocity, handle)) in world.query_mut::<(
        &mut Effect,
        &mut Position,
        Option<&mut Velocity>,
        &SceneHandle,
    )>() {
        effect.remaining_secs -= dt;
        if effect.remaining_secs <= 0.0 {
            despawn_buffer.push(entity);
            events.push(SimEvent::EffectExpired {
                object: handle.0,
                kind: effect.kind,
            });
            continue;
        }

        if let Some(velocity) = velocity {
            velocity.0.y += effect.gravity * dt;
            position.0 += velocity.0 * dt;
            if let Err(err) = scene.set_position(handle.0, position.0) {
                warn!(%err, "effect object missing from scene");
            }
        }
    }
}
