//! Frame simulator, the core of the session.
//!
//! `Simulator` owns the hecs ECS world, the player record and the scene
//! collaborator. It processes input commands at the frame boundary, runs
//! every system once per `step`, and produces `FrameSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use gallery_core::commands::InputCommand;
use gallery_core::config::{ConfigError, SessionConfig};
use gallery_core::constants::MAX_FRAME_DT;
use gallery_core::enums::SessionPhase;
use gallery_core::events::{AudioEvent, SimEvent};
use gallery_core::state::FrameSnapshot;
use gallery_core::types::SimTime;
use gallery_scene::SceneGraph;

use crate::player::{InputState, PlayerState};
use crate::session::ScoreState;
use crate::systems::{self, FrameContext};
use crate::world_setup;

/// Clamp a raw frame interval into `0..=MAX_FRAME_DT`. Non-finite or
/// negative intervals become zero.
pub fn clamp_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    }
}

/// The frame simulator. Owns the ECS world and all session state.
pub struct Simulator<S: SceneGraph> {
    world: World,
    scene: S,
    config: SessionConfig,
    time: SimTime,
    /// Pointer-lock style control gate.
    control_active: bool,
    caught: bool,
    player: PlayerState,
    input: InputState,
    rng: ChaCha8Rng,
    command_queue: VecDeque<InputCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
    audio_events: Vec<AudioEvent>,
    score: ScoreState,
}

impl<S: SceneGraph> Simulator<S> {
    /// Validate `config`, then build the room, targets and enemy in `scene`.
    pub fn new(config: SessionConfig, scene: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut sim = Self {
            world: World::new(),
            scene,
            time: SimTime::default(),
            control_active: false,
            caught: false,
            player: PlayerState::spawn(&config),
            input: InputState::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            audio_events: Vec::new(),
            score: ScoreState::default(),
            config,
        };
        sim.populate();
        info!(
            seed = sim.config.seed,
            model = ?sim.config.weapon.model,
            targets = sim.score.targets_total,
            pursuit = sim.config.pursuit.is_some(),
            "session created"
        );
        Ok(sim)
    }

    fn populate(&mut self) {
        let placed =
            world_setup::setup_session(&mut self.world, &mut self.scene, &mut self.rng, &self.config);
        self.score = ScoreState {
            targets_total: placed,
            ..Default::default()
        };
        self.player = PlayerState::spawn(&self.config);
    }

    /// Queue an input command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: InputCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = InputCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the session by one frame of `dt` seconds and return the
    /// resulting snapshot. `dt` is clamped to `MAX_FRAME_DT`.
    pub fn step(&mut self, dt: f32) -> FrameSnapshot {
        let dt = clamp_dt(dt);
        self.process_commands();
        systems::cleanup::run(&mut self.world, &mut self.scene, &mut self.despawn_buffer);

        if self.phase() == SessionPhase::Active {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase(),
            &self.player,
            &self.score,
            events,
            audio_events,
        )
    }

    /// Inactive until control is granted; caught ends the session until reset.
    pub fn phase(&self) -> SessionPhase {
        if self.caught {
            SessionPhase::Caught
        } else if self.control_active {
            SessionPhase::Active
        } else {
            SessionPhase::Inactive
        }
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get a read-only reference to the scene collaborator.
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Tear down every entity and rebuild the session from the config.
    /// The RNG stream continues, so a reset layout differs from the first.
    pub fn reset(&mut self) {
        systems::cleanup::clear_world(&mut self.world, &mut self.scene);
        self.despawn_buffer.clear();
        self.input.clear();
        self.caught = false;
        self.time = SimTime::default();
        self.populate();
        self.events.push(SimEvent::SessionReset);
        info!(targets = self.score.targets_total, "session reset");
    }

    /// Place an extra target (for tests needing a known layout).
    #[cfg(test)]
    pub fn spawn_target(
        &mut self,
        position: glam::Vec3,
        half_extent: f32,
    ) -> gallery_core::types::ObjectId {
        self.score.targets_total += 1;
        world_setup::spawn_target(&mut self.world, &mut self.scene, position, half_extent)
    }

    /// Remove every target (for tests needing an empty gallery).
    #[cfg(test)]
    pub fn clear_targets(&mut self) {
        let targets: Vec<Entity> = self
            .world
            .query::<&gallery_core::components::Target>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        self.despawn_buffer.extend(targets);
        systems::cleanup::run(&mut self.world, &mut self.scene, &mut self.despawn_buffer);
        self.score.targets_total = 0;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single input command.
    fn handle_command(&mut self, command: InputCommand) {
        match command {
            InputCommand::KeyDown { code } => {
                if !self.control_active {
                    return;
                }
                if systems::input::apply_key(&mut self.input, &code, true).is_none() {
                    trace!(code = %code, "unmapped key");
                }
            }
            // Releases are honoured even while the gate is closed.
            InputCommand::KeyUp { code } => {
                systems::input::apply_key(&mut self.input, &code, false);
            }
            InputCommand::Look {
                yaw_delta,
                pitch_delta,
            } => {
                if self.phase() == SessionPhase::Active {
                    systems::input::apply_look(&mut self.player, yaw_delta, pitch_delta);
                }
            }
            InputCommand::Fire => {
                if self.phase() != SessionPhase::Active {
                    debug!(phase = ?self.phase(), "fire ignored");
                    return;
                }
                let player = self.player;
                let mut ctx = FrameContext {
                    world: &mut self.world,
                    scene: &mut self.scene,
                    rng: &mut self.rng,
                    config: &self.config,
                    score: &mut self.score,
                    events: &mut self.events,
                    audio_events: &mut self.audio_events,
                    despawn_buffer: &mut self.despawn_buffer,
                };
                systems::fire::fire(&mut ctx, &player);
                // Destroyed targets must be gone before the next shot.
                systems::cleanup::run(&mut self.world, &mut self.scene, &mut self.despawn_buffer);
            }
            InputCommand::SetControlActive { active } => {
                if active != self.control_active {
                    info!(active, "control gate changed");
                }
                if !active {
                    self.input.clear();
                }
                self.control_active = active;
            }
            InputCommand::Reset => self.reset(),
        }
    }

    /// Run all systems in order for one frame.
    fn run_systems(&mut self, dt: f32) {
        // 1. Player movement
        systems::movement::run(
            &mut self.player,
            &mut self.input,
            &self.config.movement,
            &self.config.room,
            dt,
        );

        // 2. Bullets travel and ballistic hits resolve
        {
            let mut ctx = FrameContext {
                world: &mut self.world,
                scene: &mut self.scene,
                rng: &mut self.rng,
                config: &self.config,
                score: &mut self.score,
                events: &mut self.events,
                audio_events: &mut self.audio_events,
                despawn_buffer: &mut self.despawn_buffer,
            };
            systems::projectiles::run(&mut ctx, dt);
        }
        systems::cleanup::run(&mut self.world, &mut self.scene, &mut self.despawn_buffer);

        // 3. Particles, decals and tracers
        systems::effects::run(
            &mut self.world,
            &mut self.scene,
            dt,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        systems::cleanup::run(&mut self.world, &mut self.scene, &mut self.despawn_buffer);

        // 4. Pursuit enemy
        if let Some(pursuit) = &self.config.pursuit {
            let caught = systems::pursuit::run(
                &mut self.world,
                &mut self.scene,
                self.player.position,
                pursuit,
                &self.config.room,
                dt,
                &mut self.events,
            );
            if let Some(distance) = caught {
                self.caught = true;
                self.input.clear();
                self.events.push(SimEvent::PlayerCaught { distance });
                info!(distance, elapsed = self.time.elapsed_secs, "player caught");
            }
        }
    }
}
