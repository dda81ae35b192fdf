//! Types shared between the game loop thread and its callers.

use serde::{Deserialize, Serialize};

use gallery_core::commands::InputCommand;
use gallery_core::enums::SessionPhase;
use gallery_core::events::SimEvent;
use gallery_core::state::{FrameSnapshot, ScoreView};

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// An input command to forward to the simulator.
    Input(InputCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Summary of a finished run, accumulated frame by frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub frames: u64,
    /// Simulated seconds (frames while inactive do not count).
    pub sim_secs: f64,
    pub phase: SessionPhase,
    pub score: ScoreView,
    pub cleared_at_secs: Option<f64>,
    pub caught_at_secs: Option<f64>,
}

impl RunReport {
    pub fn observe(&mut self, snapshot: &FrameSnapshot) {
        self.frames += 1;
        self.sim_secs = snapshot.time.elapsed_secs;
        self.phase = snapshot.phase;
        self.score = snapshot.score;
        for event in &snapshot.events {
            match event {
                SimEvent::GalleryCleared => {
                    self.cleared_at_secs.get_or_insert(snapshot.time.elapsed_secs);
                }
                SimEvent::PlayerCaught { .. } => {
                    self.caught_at_secs.get_or_insert(snapshot.time.elapsed_secs);
                }
                SimEvent::SessionReset => {
                    self.cleared_at_secs = None;
                    self.caught_at_secs = None;
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_records_first_clear() {
        let mut report = RunReport::default();
        let mut snapshot = FrameSnapshot::default();
        snapshot.time.elapsed_secs = 1.5;
        snapshot.events.push(SimEvent::GalleryCleared);
        report.observe(&snapshot);

        snapshot.time.elapsed_secs = 2.0;
        report.observe(&snapshot);

        assert_eq!(report.frames, 2);
        assert_eq!(report.sim_secs, 2.0);
        assert_eq!(report.cleared_at_secs, Some(1.5));
        assert_eq!(report.caught_at_secs, None);
    }

    #[test]
    fn test_report_reset_clears_outcomes() {
        let mut report = RunReport::default();
        let mut snapshot = FrameSnapshot::default();
        snapshot.events.push(SimEvent::PlayerCaught { distance: 2.0 });
        report.observe(&snapshot);
        assert!(report.caught_at_secs.is_some());

        snapshot.events = vec![SimEvent::SessionReset];
        report.observe(&snapshot);
        assert!(report.caught_at_secs.is_none());
    }
}
