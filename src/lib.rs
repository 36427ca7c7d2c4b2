//! Astro Dodge - a falling-obstacle arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, scoring)
//! - `game`: State machine and fixed-tick driver
//! - `input`: Keyboard/touch translation into shared velocity state
//! - `render`: Read-only draw-list construction for a renderer
//! - `highscores`: Top-5 leaderboard
//! - `storage`: High-score persistence collaborator

pub mod game;
pub mod highscores;
pub mod input;
pub mod platform;
pub mod render;
pub mod sim;
pub mod storage;

pub use game::{Game, GamePhase, RunSummary, TickDriver};
pub use highscores::{HighScoreEntry, HighScoreTable};
pub use storage::ScoreStore;

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ship defaults
    pub const SHIP_WIDTH: f32 = 40.0;
    pub const SHIP_HEIGHT: f32 = 40.0;
    /// Horizontal movement speed (pixels per tick)
    pub const SHIP_SPEED: f32 = 5.0;
    /// Ship's fixed distance from the bottom edge
    pub const SHIP_BOTTOM_MARGIN: f32 = 60.0;

    /// Hazard spawn chance per tick
    pub const HAZARD_SPAWN_CHANCE: f32 = 0.02;
    /// Hazard edge length range, uniform [min, max)
    pub const HAZARD_MIN_SIZE: f32 = 10.0;
    pub const HAZARD_MAX_SIZE: f32 = 50.0;

    /// Pickup spawn chance per tick
    pub const PICKUP_SPAWN_CHANCE: f32 = 0.01;
    /// Pickup edge length (fixed)
    pub const PICKUP_SIZE: f32 = 20.0;
    /// Chance a spawned pickup grants the score multiplier
    pub const MULTIPLIER_GRANT_CHANCE: f32 = 0.05;
    /// Chance a non-grant pickup is a double-value bonus
    pub const BONUS_CHANCE: f32 = 0.10;

    /// Fall speed range for hazards and pickups, uniform [min, max)
    pub const FALL_SPEED_MIN: f32 = 1.0;
    pub const FALL_SPEED_MAX: f32 = 3.0;

    /// Score multiplier duration (15 seconds at 60 ticks/sec)
    pub const MULTIPLIER_DURATION_TICKS: u32 = 15 * TICK_RATE;

    /// Minimum horizontal travel for a touch gesture to count as a swipe
    pub const SWIPE_THRESHOLD: f32 = 50.0;
    /// Delay before a swipe's velocity is reset (~100ms at 60 ticks/sec)
    pub const SWIPE_RESET_DELAY_TICKS: u32 = 6;
}
