//! Tests for ray intersection and the collision scene.

use glam::Vec3;

use gallery_core::enums::ObjectKind;
use gallery_core::types::ObjectId;

use crate::collision::CollisionScene;
use crate::graph::{SceneError, SceneGraph, SceneObject};
use crate::ray::{intersect_box, intersect_sphere, nearest_hit, Ray, RayHit, Shape};

fn forward_ray() -> Ray {
    Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Z).unwrap()
}

fn unit_box(kind: ObjectKind, z: f32) -> SceneObject {
    SceneObject::new(
        kind,
        Shape::Box {
            half_extents: Vec3::splat(0.5),
        },
        Vec3::new(0.0, 2.0, z),
    )
}

fn hit_at(id: u32, distance: f32) -> RayHit {
    RayHit {
        object: ObjectId(id),
        point: Vec3::new(0.0, 0.0, -distance),
        distance,
        normal: Vec3::Z,
    }
}

#[test]
fn test_ray_rejects_zero_direction() {
    assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_none());
    let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -4.0)).unwrap();
    assert!((ray.direction.length() - 1.0).abs() < 1e-6);
}

#[test]
fn test_box_hit_distance_and_normal() {
    let ray = forward_ray();
    let (t, normal) = intersect_box(&ray, Vec3::new(0.0, 2.0, -10.0), Vec3::splat(1.0)).unwrap();
    assert!((t - 9.0).abs() < 1e-5, "front face at z=-9, got t={t}");
    assert_eq!(normal, Vec3::Z);
}

#[test]
fn test_box_miss_and_behind() {
    let ray = forward_ray();
    // Off to the side.
    assert!(intersect_box(&ray, Vec3::new(5.0, 2.0, -10.0), Vec3::splat(1.0)).is_none());
    // Behind the origin.
    assert!(intersect_box(&ray, Vec3::new(0.0, 2.0, 10.0), Vec3::splat(1.0)).is_none());
    // Origin inside the box.
    assert!(intersect_box(&ray, Vec3::new(0.0, 2.0, 0.0), Vec3::splat(1.0)).is_none());
}

#[test]
fn test_box_hit_from_above() {
    let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y).unwrap();
    let (t, normal) =
        intersect_box(&ray, Vec3::new(0.0, -0.5, 0.0), Vec3::new(100.0, 0.5, 100.0)).unwrap();
    assert!((t - 10.0).abs() < 1e-5);
    assert_eq!(normal, Vec3::Y);
}

#[test]
fn test_sphere_hit() {
    let ray = forward_ray();
    let (t, normal) = intersect_sphere(&ray, Vec3::new(0.0, 2.0, -10.0), 2.0).unwrap();
    assert!((t - 8.0).abs() < 1e-5);
    assert!((normal - Vec3::Z).length() < 1e-5);
    assert!(intersect_sphere(&ray, Vec3::new(3.0, 2.0, -10.0), 2.0).is_none());
}

#[test]
fn test_visual_shapes_are_not_collidable() {
    let ray = forward_ray();
    let segment = Shape::Segment {
        end: Vec3::new(0.0, 2.0, -50.0),
    };
    assert!(segment.intersect(Vec3::new(0.0, 2.0, -1.0), &ray).is_none());
    let disc = Shape::Disc {
        normal: Vec3::Z,
        radius: 3.0,
    };
    assert!(disc.intersect(Vec3::new(0.0, 2.0, -5.0), &ray).is_none());
}

#[test]
fn test_nearest_hit_selects_minimum_distance() {
    let hits = vec![hit_at(0, 5.0), hit_at(1, 12.0), hit_at(2, 3.0)];
    let nearest = nearest_hit(hits).unwrap();
    assert_eq!(nearest.object, ObjectId(2));
    assert_eq!(nearest.distance, 3.0);
    assert!(nearest_hit(Vec::new()).is_none());
}

#[test]
fn test_cast_ray_uses_candidates_and_range() {
    let mut scene = CollisionScene::new();
    let near = scene.add_object(unit_box(ObjectKind::Target, -5.5));
    let far = scene.add_object(unit_box(ObjectKind::Target, -20.5));
    let ray = forward_ray();

    let hit = scene.cast_ray(&ray, 100.0, &[near, far]).unwrap();
    assert_eq!(hit.object, near);
    assert!((hit.distance - 5.0).abs() < 1e-5);

    // The near box is not a candidate, so the far one is reported.
    let hit = scene.cast_ray(&ray, 100.0, &[far]).unwrap();
    assert_eq!(hit.object, far);

    // Out of range.
    assert!(scene.cast_ray(&ray, 4.0, &[near, far]).is_none());
}

#[test]
fn test_add_move_remove() {
    let mut scene = CollisionScene::new();
    let a = scene.add_object(unit_box(ObjectKind::Wall, -3.0));
    let b = scene.add_object(unit_box(ObjectKind::Target, -3.0));
    assert_ne!(a, b);
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.count_kind(ObjectKind::Target), 1);

    scene.set_position(b, Vec3::new(1.0, 2.0, 3.0)).unwrap();
    assert_eq!(scene.get(b).unwrap().position, Vec3::new(1.0, 2.0, 3.0));

    scene.remove_object(a).unwrap();
    assert!(!scene.contains(a));
    assert_eq!(scene.remove_object(a), Err(SceneError::UnknownObject(a)));
    assert_eq!(
        scene.set_position(a, Vec3::ZERO),
        Err(SceneError::UnknownObject(a))
    );

    // Ids are not reused after removal.
    let c = scene.add_object(unit_box(ObjectKind::Decal, 0.0));
    assert_ne!(c, a);
}
