//! Axis-aligned bounding-box collision tests and scoring
//!
//! Hazard contact raises a single game-over signal per tick no matter how
//! many hazards overlap; pickups are consumed through a retained-set filter
//! so removal never skips a neighbor.

use glam::Vec2;

use super::state::{GameSession, PickupKind};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Strict AABB overlap: shared edges do not count as contact
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }
}

/// Test every hazard and pickup against the ship
///
/// Collected pickups are resolved in collection order, so a multiplier grant
/// doubles awards for pickups gathered later in the same tick. Returns true
/// if any hazard touched the ship.
pub fn resolve_collisions(session: &mut GameSession) -> bool {
    let ship = session.ship.bounds();

    let game_over = session.hazards.iter().any(|h| h.bounds().overlaps(&ship));

    let mut collected: Vec<PickupKind> = Vec::new();
    session.pickups.retain(|pickup| {
        if pickup.bounds().overlaps(&ship) {
            collected.push(pickup.kind);
            false
        } else {
            true
        }
    });

    for kind in collected {
        match kind {
            PickupKind::MultiplierGrant => session.multiplier.grant(),
            kind => session.score += kind.award(session.multiplier.active()),
        }
    }

    game_over
}
