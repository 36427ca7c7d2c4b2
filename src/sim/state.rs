//! Game session state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::consts::*;

/// The player's ship
///
/// Created once per session and only ever repositioned; y stays fixed at
/// `FIELD_HEIGHT - SHIP_BOTTOM_MARGIN`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal movement speed (pixels per tick)
    pub speed: f32,
    /// Current horizontal velocity, written by input handlers
    pub dx: f32,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                FIELD_WIDTH / 2.0 - SHIP_WIDTH / 2.0,
                FIELD_HEIGHT - SHIP_BOTTOM_MARGIN,
            ),
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
            speed: SHIP_SPEED,
            dx: 0.0,
        }
    }
}

impl Ship {
    /// Recenter at the bottom of the field with no horizontal velocity
    pub fn recenter(&mut self) {
        self.pos = Vec2::new(
            FIELD_WIDTH / 2.0 - self.width / 2.0,
            FIELD_HEIGHT - SHIP_BOTTOM_MARGIN,
        );
        self.dx = 0.0;
    }

    /// Clamp x so the ship stays fully inside `[0, field_width]`
    pub fn clamp_to_field(&mut self, field_width: f32) {
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        } else if self.pos.x + self.width > field_width {
            self.pos.x = field_width - self.width;
        }
    }

    /// Apply current velocity and re-establish the field-bounds invariant
    pub fn advance(&mut self) {
        self.pos.x += self.dx;
        self.clamp_to_field(FIELD_WIDTH);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(self.width, self.height))
    }
}

/// A falling hazard (square). Any contact with the ship ends the run.
#[derive(Debug, Clone, PartialEq)]
pub struct Hazard {
    pub pos: Vec2,
    /// Edge length (hazards are square)
    pub size: f32,
    /// Fall speed in pixels per tick, before the game-speed multiplier
    pub fall_speed: f32,
}

impl Hazard {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(self.size))
    }
}

/// Pickup variants
///
/// The variants are mutually exclusive: a multiplier grant never awards
/// points, regardless of anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    /// Base award
    Plain,
    /// Double the base award
    Bonus,
    /// Activates the timed score multiplier instead of awarding points
    MultiplierGrant,
}

impl PickupKind {
    /// Points awarded on collection, given the current multiplier state
    pub fn award(self, multiplier_active: bool) -> u64 {
        match self {
            PickupKind::Plain => {
                if multiplier_active {
                    20
                } else {
                    10
                }
            }
            PickupKind::Bonus => {
                if multiplier_active {
                    40
                } else {
                    20
                }
            }
            PickupKind::MultiplierGrant => 0,
        }
    }
}

/// A falling pickup (star)
#[derive(Debug, Clone, PartialEq)]
pub struct Pickup {
    pub pos: Vec2,
    pub size: f32,
    pub fall_speed: f32,
    pub kind: PickupKind,
}

impl Pickup {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(self.size))
    }
}

/// Timed score-doubling power-up
///
/// Active iff ticks remain; a re-grant simply resets the countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreMultiplier {
    pub ticks_remaining: u32,
}

impl ScoreMultiplier {
    pub fn active(&self) -> bool {
        self.ticks_remaining > 0
    }

    /// Activate (or re-activate) for the full duration
    pub fn grant(&mut self) {
        self.ticks_remaining = MULTIPLIER_DURATION_TICKS;
    }

    /// Count down one tick; expires on reaching zero
    pub fn tick(&mut self) {
        if self.ticks_remaining > 0 {
            self.ticks_remaining -= 1;
        }
    }

    /// Whole seconds left for display (rounded up)
    pub fn seconds_remaining(&self) -> u32 {
        self.ticks_remaining.div_ceil(TICK_RATE)
    }
}

/// Complete per-run simulation state
///
/// One instance is owned by the tick driver and passed to every operation;
/// nothing here is process-global.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving all spawn decisions
    pub rng: Pcg32,
    /// Simulation tick counter
    pub ticks: u64,
    pub score: u64,
    pub multiplier: ScoreMultiplier,
    /// Global game-speed multiplier (1 normal, 2 while boost is held)
    pub speed_multiplier: f32,
    pub ship: Ship,
    /// Active hazards; membership only, order does not matter
    pub hazards: Vec<Hazard>,
    /// Active pickups; membership only, order does not matter
    pub pickups: Vec<Pickup>,
}

impl GameSession {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ticks: 0,
            score: 0,
            multiplier: ScoreMultiplier::default(),
            speed_multiplier: 1.0,
            ship: Ship::default(),
            hazards: Vec::new(),
            pickups: Vec::new(),
        }
    }

    /// Reset for a new run: score zeroed, entities cleared, ship recentered
    ///
    /// The RNG is left alone so back-to-back runs differ.
    pub fn reset(&mut self) {
        self.ticks = 0;
        self.score = 0;
        self.multiplier = ScoreMultiplier::default();
        self.speed_multiplier = 1.0;
        self.ship.recenter();
        self.hazards.clear();
        self.pickups.clear();
    }
}
