//! Probabilistic per-tick entity spawning
//!
//! Both spawn checks are independent; in any given tick both, either, or
//! neither may fire. All randomness comes from the session's seeded RNG.

use glam::Vec2;
use rand::Rng;

use super::state::{GameSession, Hazard, Pickup, PickupKind};
use crate::consts::*;

/// With probability `HAZARD_SPAWN_CHANCE`, add one hazard at the top of the
/// field, fully in-bounds horizontally, starting just off-screen.
pub fn maybe_spawn_hazard(session: &mut GameSession) {
    if session.rng.random::<f32>() >= HAZARD_SPAWN_CHANCE {
        return;
    }

    let size = session.rng.random_range(HAZARD_MIN_SIZE..HAZARD_MAX_SIZE);
    let x = session.rng.random_range(0.0..FIELD_WIDTH - size);
    let fall_speed = session.rng.random_range(FALL_SPEED_MIN..FALL_SPEED_MAX);

    session.hazards.push(Hazard {
        pos: Vec2::new(x, -size),
        size,
        fall_speed,
    });
}

/// With probability `PICKUP_SPAWN_CHANCE`, add one pickup at the top of the
/// field. The multiplier-grant roll takes precedence; the bonus roll is only
/// made when the grant roll misses, so the variants stay mutually exclusive.
pub fn maybe_spawn_pickup(session: &mut GameSession) {
    if session.rng.random::<f32>() >= PICKUP_SPAWN_CHANCE {
        return;
    }

    let x = session.rng.random_range(0.0..FIELD_WIDTH - PICKUP_SIZE);
    let fall_speed = session.rng.random_range(FALL_SPEED_MIN..FALL_SPEED_MAX);
    let kind = if session.rng.random::<f32>() < MULTIPLIER_GRANT_CHANCE {
        PickupKind::MultiplierGrant
    } else if session.rng.random::<f32>() < BONUS_CHANCE {
        PickupKind::Bonus
    } else {
        PickupKind::Plain
    };

    session.pickups.push(Pickup {
        pos: Vec2::new(x, -PICKUP_SIZE),
        size: PICKUP_SIZE,
        fall_speed,
        kind,
    });
}
