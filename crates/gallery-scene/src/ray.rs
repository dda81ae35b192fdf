//! Rays, collision shapes and ray/shape intersection.
//!
//! Intersections only report surfaces the ray enters from outside; a ray
//! starting inside a shape does not hit that shape.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use gallery_core::types::ObjectId;

/// Direction components smaller than this are treated as parallel to a slab.
const PARALLEL_EPSILON: f32 = 1e-8;

/// A half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`. Returns `None` for a zero direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Nearest intersection reported by a ray query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    pub object: ObjectId,
    pub point: Vec3,
    pub distance: f32,
    /// Surface normal at the hit point, facing the ray origin.
    pub normal: Vec3,
}

/// Geometry attached to a scene object, relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned box.
    Box { half_extents: Vec3 },
    Sphere { radius: f32 },
    /// Line from the object position to `end` (tracers). Not collidable.
    Segment { end: Vec3 },
    /// Flat disc on a surface (decals). Not collidable.
    Disc { normal: Vec3, radius: f32 },
}

impl Shape {
    /// Distance and normal of the first surface `ray` enters.
    pub fn intersect(&self, position: Vec3, ray: &Ray) -> Option<(f32, Vec3)> {
        match *self {
            Shape::Box { half_extents } => intersect_box(ray, position, half_extents),
            Shape::Sphere { radius } => intersect_sphere(ray, position, radius),
            Shape::Segment { .. } | Shape::Disc { .. } => None,
        }
    }
}

/// Slab test against an axis-aligned box.
pub fn intersect_box(ray: &Ray, center: Vec3, half_extents: Vec3) -> Option<(f32, Vec3)> {
    let min = center - half_extents;
    let max = center + half_extents;

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    let mut normal = Vec3::ZERO;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let dir = ray.direction[axis];

        if dir.abs() < PARALLEL_EPSILON {
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }

        let mut t1 = (min[axis] - origin) / dir;
        let mut t2 = (max[axis] - origin) / dir;
        // Entering through the min face means the outward normal points to -axis.
        let mut face = -1.0;
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
            face = 1.0;
        }

        if t1 > t_near {
            t_near = t1;
            normal = Vec3::ZERO;
            normal[axis] = face;
        }
        t_far = t_far.min(t2);

        if t_near > t_far {
            return None;
        }
    }

    if t_near < 0.0 {
        return None;
    }
    Some((t_near, normal))
}

pub fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<(f32, Vec3)> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let t = -b - discriminant.sqrt();
    if t < 0.0 {
        return None;
    }
    let normal = (ray.at(t) - center).normalize_or_zero();
    Some((t, normal))
}

/// Pick the intersection with minimum distance.
pub fn nearest_hit(hits: impl IntoIterator<Item = RayHit>) -> Option<RayHit> {
    hits.into_iter()
        .fold(None, |best: Option<RayHit>, hit| match best {
            Some(current) if current.distance <= hit.distance => Some(current),
            _ => Some(hit),
        })
}
