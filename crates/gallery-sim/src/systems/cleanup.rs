//! Cleanup system: despawns buffered entities and discards their scene
//! objects.

use hecs::{Entity, World};
use tracing::warn;

use gallery_core::components::{Enemy, SceneHandle};
use gallery_scene::SceneGraph;

/// Drain `despawn_buffer`. Entities already gone (listed twice) are skipped,
/// so each scene object is removed at most once.
pub fn run<S: SceneGraph>(world: &mut World, scene: &mut S, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let handle = world.get::<&SceneHandle>(entity).ok().map(|h| h.0);
        if world.despawn(entity).is_err() {
            continue;
        }
        if let Some(id) = handle {
            if let Err(err) = scene.remove_object(id) {
                warn!(%err, "despawned entity had no scene object");
            }
        }
    }
}

/// Remove every entity and its scene object. Inactive enemies have already
/// given up their object.
pub fn clear_world<S: SceneGraph>(world: &mut World, scene: &mut S) {
    for (_entity, (handle, enemy)) in world.query::<(&SceneHandle, Option<&Enemy>)>().iter() {
        if enemy.map_or(true, |e| e.active) {
            if let Err(err) = scene.remove_object(handle.0) {
                warn!(%err, "scene object already removed");
            }
        }
    }
    world.clear();
}
