//! Scene collaborator for GALLERY.
//!
//! The simulator never talks to a renderer directly. It registers objects,
//! moves them and casts rays through the [`SceneGraph`] capability, so the
//! core can run against a real scene graph or the headless
//! [`CollisionScene`] used by tests and the demo runner.

pub use gallery_core as core;

pub mod collision;
pub mod graph;
pub mod ray;

pub use collision::CollisionScene;
pub use graph::{SceneError, SceneGraph, SceneObject};
pub use ray::{nearest_hit, Ray, RayHit, Shape};

#[cfg(test)]
mod tests;
