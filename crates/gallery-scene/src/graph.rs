//! The scene capability the simulator depends on.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use gallery_core::enums::ObjectKind;
use gallery_core::types::ObjectId;

use crate::ray::{Ray, RayHit, Shape};

/// Errors reported by a scene implementation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("unknown scene object {0:?}")]
    UnknownObject(ObjectId),
}

/// Description of an object handed to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub kind: ObjectKind,
    pub shape: Shape,
    pub position: Vec3,
}

impl SceneObject {
    pub fn new(kind: ObjectKind, shape: Shape, position: Vec3) -> Self {
        Self {
            kind,
            shape,
            position,
        }
    }
}

/// Render/scene collaborator.
///
/// `cast_ray` considers only the objects listed in `candidates` and returns
/// the nearest intersection no farther than `max_distance`.
pub trait SceneGraph {
    fn add_object(&mut self, object: SceneObject) -> ObjectId;

    fn remove_object(&mut self, id: ObjectId) -> Result<(), SceneError>;

    fn set_position(&mut self, id: ObjectId, position: Vec3) -> Result<(), SceneError>;

    fn cast_ray(&self, ray: &Ray, max_distance: f32, candidates: &[ObjectId]) -> Option<RayHit>;
}
