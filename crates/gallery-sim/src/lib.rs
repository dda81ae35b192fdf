//! Frame simulator for GALLERY.
//!
//! Owns the hecs ECS world and the player record, runs one variable-length
//! frame step at a time, and produces `FrameSnapshot`s for the renderer and
//! audio collaborators.

pub mod engine;
pub mod player;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::Simulator;
pub use gallery_core as core;
pub use gallery_scene as scene;
