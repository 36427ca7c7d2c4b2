//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! A tick runs spawn → motion/cleanup → collision/scoring → multiplier timer,
//! in that order.

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, resolve_collisions};
pub use spawn::{maybe_spawn_hazard, maybe_spawn_pickup};
pub use state::{GameSession, Hazard, Pickup, PickupKind, ScoreMultiplier, Ship};
pub use tick::{TickOutcome, tick};
