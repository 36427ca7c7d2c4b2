//! Game state machine and fixed-tick driver
//!
//! Two durable phases: Idle (no driver running) and Running. Game over is
//! transient — the step that observes a hazard contact emits the run's
//! high-score candidate and lands back in Idle.

use crate::consts::*;
use crate::highscores::HighScoreTable;
use crate::input::InputState;
use crate::sim::{self, GameSession};
use crate::storage::ScoreStore;

/// Durable phases of the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No driver running
    Idle,
    /// Fixed-rate driver active
    Running,
}

/// High-score candidate emitted when a run ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Final score at the moment of hazard contact
    pub score: u64,
}

/// Ties a deferred input reset to the run it was scheduled in
///
/// A swipe schedules a velocity reset ~100ms out; the token makes sure a
/// reset scheduled during one run cannot clobber the velocity of a later
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetToken {
    generation: u64,
}

/// The state machine: owns the session, the shared input state, and the
/// phase transitions
#[derive(Debug, Clone)]
pub struct Game {
    phase: GamePhase,
    session: GameSession,
    input: InputState,
    /// Bumped on every successful `start`; guards deferred input resets
    generation: u64,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: GamePhase::Idle,
            session: GameSession::new(seed),
            input: InputState::new(),
            generation: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Shared input state, mutated by the input collaborator between ticks
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Token identifying the current run, for scheduling deferred resets
    pub fn reset_token(&self) -> ResetToken {
        ResetToken {
            generation: self.generation,
        }
    }

    /// Begin a run: reset the session and transition Idle → Running
    ///
    /// A re-entrant call while Running is a guarded no-op; returns whether a
    /// new run actually started.
    pub fn start(&mut self) -> bool {
        if self.phase == GamePhase::Running {
            return false;
        }
        self.generation += 1;
        self.session.reset();
        self.phase = GamePhase::Running;
        log::info!("run {} started (seed {})", self.generation, self.session.seed);
        true
    }

    /// Run one fixed tick (Running only)
    ///
    /// Reads the input state's current values — last write wins, no queuing —
    /// then advances the simulation. Returns the high-score candidate when
    /// this tick ended the run.
    pub fn step(&mut self) -> Option<RunSummary> {
        if self.phase != GamePhase::Running {
            return None;
        }

        self.session.ship.dx = self.input.dx;
        self.session.speed_multiplier = self.input.speed_multiplier;

        let outcome = sim::tick(&mut self.session);
        if outcome.game_over {
            self.phase = GamePhase::Idle;
            log::info!(
                "run {} over after {} ticks, score {}",
                self.generation,
                self.session.ticks,
                self.session.score
            );
            return Some(RunSummary {
                score: self.session.score,
            });
        }
        None
    }

    /// Apply a deferred swipe-velocity reset if it belongs to the current run
    pub fn apply_deferred_reset(&mut self, token: ResetToken) {
        if token.generation == self.generation {
            self.input.dx = 0.0;
        } else {
            log::debug!("ignoring stale velocity reset from run {}", token.generation);
        }
    }
}

/// Record a finished run against the leaderboard
///
/// The name comes from the score-prompt collaborator; a cancelled or empty
/// prompt means nothing is recorded and the final score is only reported.
/// Returns whether an entry was written.
pub fn submit_run(
    summary: &RunSummary,
    name: Option<&str>,
    table: &mut HighScoreTable,
    store: &mut dyn ScoreStore,
) -> bool {
    match name {
        Some(name) if !name.is_empty() => {
            table.add_score(name, summary.score);
            store.save_table(table);
            true
        }
        _ => {
            log::info!("final score {} (not recorded)", summary.score);
            false
        }
    }
}

/// Fixed-rate driver: accumulates wall-clock time and steps the game at
/// `TICK_RATE`
///
/// Drift under load is tolerated, not corrected; the substep cap keeps a
/// long frame from spiraling. Stepping stops the moment a run ends.
#[derive(Debug, Clone, Default)]
pub struct TickDriver {
    accumulator: f32,
}

impl TickDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed elapsed wall-clock seconds; returns the summary if a run ended
    /// during this frame
    pub fn advance(&mut self, game: &mut Game, elapsed: f32) -> Option<RunSummary> {
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;

            if let Some(summary) = game.step() {
                self.accumulator = 0.0;
                return Some(summary);
            }
        }

        // Shed backlog we will never catch up on
        if self.accumulator >= SIM_DT {
            self.accumulator = self.accumulator.rem_euclid(SIM_DT);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::sim::Hazard;
    use crate::storage::MemoryStore;
    use glam::Vec2;

    fn hazard_on_ship(game: &Game) -> Hazard {
        Hazard {
            pos: game.session().ship.pos - Vec2::new(0.0, 1.0),
            size: 20.0,
            fall_speed: 1.0,
        }
    }

    #[test]
    fn start_is_idempotent_while_running() {
        let mut game = Game::new(5);
        assert!(game.start());

        for _ in 0..30 {
            let _ = game.step();
        }
        game.session.score = 70;
        let ticks = game.session().ticks;

        assert!(!game.start());
        assert_eq!(game.session().score, 70);
        assert_eq!(game.session().ticks, ticks);
        assert_eq!(game.phase(), GamePhase::Running);
    }

    #[test]
    fn step_outside_running_is_inert() {
        let mut game = Game::new(5);
        assert!(game.step().is_none());
        assert_eq!(game.session().ticks, 0);
    }

    #[test]
    fn hazard_contact_transitions_to_idle_exactly_once() {
        let mut game = Game::new(5);
        game.start();
        game.session.score = 30;
        game.session.hazards.push(hazard_on_ship(&game));

        let summary = game.step().expect("run should end");
        assert_eq!(summary.score, 30);
        assert_eq!(game.phase(), GamePhase::Idle);

        // Further steps do nothing until the next start
        assert!(game.step().is_none());
    }

    #[test]
    fn step_reads_current_input_values() {
        let mut game = Game::new(5);
        game.start();

        game.input_mut().key_down(Key::Right);
        game.input_mut().key_down(Key::SpeedBoost);
        let x_before = game.session().ship.pos.x;
        let _ = game.step();

        assert_eq!(game.session().ship.pos.x, x_before + SHIP_SPEED);
        assert_eq!(game.session().speed_multiplier, 2.0);

        game.input_mut().key_up(Key::Right);
        game.input_mut().key_up(Key::SpeedBoost);
        let x_held = game.session().ship.pos.x;
        let _ = game.step();
        assert_eq!(game.session().ship.pos.x, x_held);
        assert_eq!(game.session().speed_multiplier, 1.0);
    }

    #[test]
    fn stale_reset_token_is_ignored() {
        let mut game = Game::new(5);
        game.start();
        let stale = game.reset_token();

        // Run ends, a new run starts, player swipes again
        game.session.hazards.push(hazard_on_ship(&game));
        let _ = game.step().expect("run should end");
        game.start();
        game.input_mut().dx = SHIP_SPEED;

        game.apply_deferred_reset(stale);
        assert_eq!(game.input().dx, SHIP_SPEED);

        // The current run's token still works
        let fresh = game.reset_token();
        game.apply_deferred_reset(fresh);
        assert_eq!(game.input().dx, 0.0);
    }

    #[test]
    fn submit_run_records_named_scores_only() {
        let mut table = HighScoreTable::new();
        let mut store = MemoryStore::new();
        let summary = RunSummary { score: 90 };

        assert!(!submit_run(&summary, None, &mut table, &mut store));
        assert!(!submit_run(&summary, Some(""), &mut table, &mut store));
        assert!(table.entries.is_empty());

        assert!(submit_run(&summary, Some("Ava"), &mut table, &mut store));
        assert_eq!(table.entries.len(), 1);
        assert_eq!(store.load_table().entries, table.entries);
    }

    #[test]
    fn driver_steps_at_fixed_rate() {
        let mut game = Game::new(5);
        game.start();
        let mut driver = TickDriver::new();

        // Two nominal frames worth of time → two ticks
        let _ = driver.advance(&mut game, 2.0 * SIM_DT);
        assert_eq!(game.session().ticks, 2);

        // A tiny slice accumulates without ticking
        let _ = driver.advance(&mut game, SIM_DT / 4.0);
        assert_eq!(game.session().ticks, 2);
    }

    #[test]
    fn driver_caps_substeps_on_a_long_frame() {
        let mut game = Game::new(5);
        game.start();
        let mut driver = TickDriver::new();

        let _ = driver.advance(&mut game, 1.0);
        assert_eq!(game.session().ticks, MAX_SUBSTEPS as u64);
    }

    #[test]
    fn driver_stops_stepping_when_the_run_ends() {
        let mut game = Game::new(5);
        game.start();
        game.session.hazards.push(hazard_on_ship(&game));
        let mut driver = TickDriver::new();

        let summary = driver.advance(&mut game, 4.0 * SIM_DT);
        assert!(summary.is_some());
        assert_eq!(game.session().ticks, 1);
    }
}
