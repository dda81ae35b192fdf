//! GALLERY headless runner.
//!
//! This crate wires the simulator to a frame loop: a game-loop thread fed by
//! a command channel for wall-clock runs, a fixed-step runner for
//! reproducible runs, and the drivers that produce input for both.

pub mod aim;
pub mod cli;
pub mod error;
pub mod game_loop;
pub mod logging;
pub mod runner;
pub mod script;
pub mod session;
pub mod state;

pub use error::AppError;
pub use gallery_core as core;
