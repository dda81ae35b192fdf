//! Headless scene graph with real ray queries.
//!
//! Keeps every registered object in an ordered map and answers `cast_ray`
//! with a linear scan over the candidate set. Object ids are never reused.

use std::collections::BTreeMap;

use glam::Vec3;

use gallery_core::enums::ObjectKind;
use gallery_core::types::ObjectId;

use crate::graph::{SceneError, SceneGraph, SceneObject};
use crate::ray::{nearest_hit, Ray, RayHit};

#[derive(Debug, Default)]
pub struct CollisionScene {
    objects: BTreeMap<ObjectId, SceneObject>,
    next_id: u32,
}

impl CollisionScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// Number of live objects of one kind.
    pub fn count_kind(&self, kind: ObjectKind) -> usize {
        self.objects.values().filter(|o| o.kind == kind).count()
    }
}

impl SceneGraph for CollisionScene {
    fn add_object(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.insert(id, object);
        id
    }

    fn remove_object(&mut self, id: ObjectId) -> Result<(), SceneError> {
        self.objects
            .remove(&id)
            .map(|_| ())
            .ok_or(SceneError::UnknownObject(id))
    }

    fn set_position(&mut self, id: ObjectId, position: Vec3) -> Result<(), SceneError> {
        let object = self
            .objects
            .get_mut(&id)
            .ok_or(SceneError::UnknownObject(id))?;
        object.position = position;
        Ok(())
    }

    fn cast_ray(&self, ray: &Ray, max_distance: f32, candidates: &[ObjectId]) -> Option<RayHit> {
        let hits = candidates.iter().filter_map(|&id| {
            let object = self.objects.get(&id)?;
            let (distance, normal) = object.shape.intersect(object.position, ray)?;
            (distance <= max_distance).then(|| RayHit {
                object: id,
                point: ray.at(distance),
                distance,
                normal,
            })
        });
        nearest_hit(hits)
    }
}
