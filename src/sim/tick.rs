//! Fixed timestep simulation tick
//!
//! One tick advances the ship, runs the spawners, moves and prunes falling
//! entities, resolves collisions, then counts the multiplier down. The order
//! is fixed; the driver in `game` owns the session and reacts to the
//! game-over signal.

use super::collision::resolve_collisions;
use super::spawn::{maybe_spawn_hazard, maybe_spawn_pickup};
use super::state::GameSession;
use crate::consts::FIELD_HEIGHT;

/// What the driver needs to know about a completed tick
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct TickOutcome {
    /// A hazard touched the ship; exactly one end-of-run transition follows
    pub game_over: bool,
}

/// Advance the session by one fixed tick
pub fn tick(session: &mut GameSession) -> TickOutcome {
    session.ticks += 1;

    session.ship.advance();

    maybe_spawn_hazard(session);
    maybe_spawn_pickup(session);

    advance_falling(session);

    let game_over = resolve_collisions(session);

    session.multiplier.tick();

    TickOutcome { game_over }
}

/// Motion & cleanup: apply fall speeds, drop anything past the bottom edge
///
/// Pruning goes through `retain` so removing one entity never skips the next
/// one in the same pass.
fn advance_falling(session: &mut GameSession) {
    let speed_multiplier = session.speed_multiplier;

    for hazard in &mut session.hazards {
        hazard.pos.y += hazard.fall_speed * speed_multiplier;
    }
    session.hazards.retain(|h| h.pos.y <= FIELD_HEIGHT);

    for pickup in &mut session.pickups {
        pickup.pos.y += pickup.fall_speed * speed_multiplier;
    }
    session.pickups.retain(|p| p.pos.y <= FIELD_HEIGHT);
}
