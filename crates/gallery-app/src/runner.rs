//! Demo runners.
//!
//! `run_fixed` steps the simulator with a constant interval and no sleeping,
//! so equal seeds and drivers reproduce the same report. `run_realtime`
//! hands the simulator to the game loop thread and drives it by wall clock.

use std::time::Instant;

use tracing::info;

use gallery_core::commands::InputCommand;
use gallery_core::enums::SessionPhase;
use gallery_core::state::FrameSnapshot;
use gallery_scene::SceneGraph;
use gallery_sim::Simulator;

use crate::aim::AutoAim;
use crate::error::AppError;
use crate::game_loop;
use crate::script::DemoScript;
use crate::session::SessionHandle;
use crate::state::RunReport;

/// Source of input commands for a run.
#[derive(Debug, Clone)]
pub enum Driver {
    Script(DemoScript),
    AutoAim(AutoAim),
}

impl Driver {
    pub fn commands(&mut self, elapsed_secs: f32, latest: Option<&FrameSnapshot>) -> Vec<InputCommand> {
        match self {
            Driver::Script(script) => script.due(elapsed_secs),
            Driver::AutoAim(aim) => aim.commands(elapsed_secs, latest),
        }
    }
}

/// Step `sim` for `seconds` at `fps` with a constant interval. Stops early
/// when the player is caught.
pub fn run_fixed<S: SceneGraph>(
    sim: &mut Simulator<S>,
    driver: &mut Driver,
    seconds: f32,
    fps: u32,
) -> RunReport {
    let fps = fps.max(1);
    let dt = 1.0 / fps as f32;
    let frames = (seconds.max(0.0) * fps as f32).ceil() as u64;

    let mut report = RunReport::default();
    let mut latest: Option<FrameSnapshot> = None;
    for frame in 0..frames {
        let elapsed = frame as f32 * dt;
        sim.queue_commands(driver.commands(elapsed, latest.as_ref()));
        let snapshot = sim.step(dt);
        report.observe(&snapshot);

        let caught = snapshot.phase == SessionPhase::Caught;
        latest = Some(snapshot);
        if caught {
            info!(frame, "run ended: player caught");
            break;
        }
    }
    report
}

/// Run `sim` on the game loop thread for `seconds` of wall-clock time.
pub fn run_realtime<S>(
    sim: Simulator<S>,
    driver: &mut Driver,
    seconds: f32,
    fps: u32,
) -> Result<RunReport, AppError>
where
    S: SceneGraph + Send + 'static,
{
    let handle = SessionHandle::new();
    handle.start(sim, fps)?;

    let poll = game_loop::frame_duration(fps);
    let started = Instant::now();
    while started.elapsed().as_secs_f32() < seconds {
        let latest = handle.snapshot()?;
        for command in driver.commands(started.elapsed().as_secs_f32(), latest.as_ref()) {
            handle.send(command)?;
        }
        if latest.is_some_and(|s| s.phase == SessionPhase::Caught) {
            info!("run ended: player caught");
            break;
        }
        std::thread::sleep(poll);
    }

    handle.shutdown()
}
