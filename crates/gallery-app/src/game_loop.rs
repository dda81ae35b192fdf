//! Game loop thread: runs the simulator at a target frame rate and stores
//! snapshots for polling.
//!
//! The simulator is built by the caller and moved into the thread. Commands
//! arrive via `mpsc` channel. Each frame steps with the measured wall-clock
//! interval; the simulator clamps long frames itself.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use gallery_core::state::FrameSnapshot;
use gallery_scene::SceneGraph;
use gallery_sim::Simulator;

use crate::error::AppError;
use crate::state::{GameLoopCommand, RunReport};

pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Nominal duration of one frame at `fps`.
pub fn frame_duration(fps: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(fps.max(1)))
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the handle yielding the run report.
pub fn spawn_game_loop<S>(
    sim: Simulator<S>,
    fps: u32,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<RunReport>), AppError>
where
    S: SceneGraph + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("gallery-game-loop".into())
        .spawn(move || run_game_loop(sim, fps, cmd_rx, &latest_snapshot))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop<S: SceneGraph>(
    mut sim: Simulator<S>,
    fps: u32,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) -> RunReport {
    let frame = frame_duration(fps);
    let mut report = RunReport::default();
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;
    info!(fps, "game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(cmd)) => sim.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!(frames = report.frames, "game loop stopped");
                    return report;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one frame by the measured interval
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;
        let snapshot = sim.step(dt);
        report.observe(&snapshot);

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next frame
        next_frame_time += frame;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame * 2 {
            // Too far behind, reset to avoid catch-up spiral
            debug!(behind_ms = (now - next_frame_time).as_millis() as u64, "frame overrun");
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::commands::InputCommand;
    use gallery_core::config::SessionConfig;
    use gallery_core::enums::SessionPhase;
    use gallery_scene::CollisionScene;

    fn simulator() -> Simulator<CollisionScene> {
        Simulator::new(SessionConfig::gallery(), CollisionScene::new()).unwrap()
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Input(InputCommand::Fire)).unwrap();
        tx.send(GameLoopCommand::Input(InputCommand::key_down("KeyW")))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], GameLoopCommand::Input(InputCommand::Fire)));
        assert!(matches!(
            &commands[1],
            GameLoopCommand::Input(InputCommand::KeyDown { code }) if code == "KeyW"
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_frame_duration_constant() {
        // 60Hz = 16.666ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(
            frame_duration(DEFAULT_FRAME_RATE).as_nanos(),
            expected_nanos as u128
        );
        assert_eq!(frame_duration(0), Duration::from_secs(1));
    }

    #[test]
    fn test_loop_steps_and_shuts_down() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(simulator(), 120, latest.clone()).unwrap();

        tx.send(GameLoopCommand::Input(InputCommand::SetControlActive {
            active: true,
        }))
        .unwrap();
        std::thread::sleep(Duration::from_millis(100));

        let snapshot = latest.lock().unwrap().clone().expect("snapshot stored");
        assert_eq!(snapshot.phase, SessionPhase::Active);
        assert!(snapshot.time.frame > 0);

        tx.send(GameLoopCommand::Shutdown).unwrap();
        let report = handle.join().unwrap();
        assert!(report.frames > 0);
        assert_eq!(report.phase, SessionPhase::Active);
    }

    #[test]
    fn test_loop_stops_when_sender_dropped() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(simulator(), 120, latest).unwrap();
        drop(tx);
        let report = handle.join().unwrap();
        assert_eq!(report.phase, SessionPhase::Inactive);
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut sim = simulator();
        sim.queue_command(InputCommand::SetControlActive { active: true });
        for _ in 0..20 {
            sim.queue_command(InputCommand::Fire);
            sim.step(1.0 / 60.0);
        }

        let snapshot = sim.step(1.0 / 60.0);
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }
}
