//! Running score tracked by the engine.

use gallery_core::state::ScoreView;

#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreState {
    pub shots_fired: u32,
    pub targets_destroyed: u32,
    pub targets_total: u32,
    pub enemy_kills: u32,
    /// Set once `GalleryCleared` has been reported.
    pub cleared: bool,
}

impl ScoreState {
    pub fn targets_remaining(&self) -> u32 {
        self.targets_total.saturating_sub(self.targets_destroyed)
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            shots_fired: self.shots_fired,
            targets_destroyed: self.targets_destroyed,
            targets_total: self.targets_total,
            enemy_kills: self.enemy_kills,
        }
    }
}
