//! Read-only draw-list construction
//!
//! Builds a `Scene` snapshot of the session once per tick for the render
//! collaborator. Nothing here mutates simulation state; whether the ship is
//! drawn from its sprite or the placeholder rectangle is the renderer's
//! concern (the sprite may simply not be loaded yet).

use glam::Vec2;
use std::f32::consts::PI;

use crate::sim::collision::Rect;
use crate::sim::state::{GameSession, PickupKind};

/// Star glyph radii (fixed, independent of the pickup's collision box)
pub const STAR_OUTER_RADIUS: f32 = 20.0;
pub const STAR_INNER_RADIUS: f32 = 10.0;

/// Star fill/stroke color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarColor {
    /// Plain and bonus pickups
    Yellow,
    /// Multiplier-grant pickups
    Pink,
}

/// One pickup, ready to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarGlyph {
    pub center: Vec2,
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub color: StarColor,
    /// Overlay a "2X" label (bonus pickups)
    pub show_bonus_tag: bool,
}

/// Everything the renderer draws for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub ship: Rect,
    pub hazards: Vec<Rect>,
    pub stars: Vec<StarGlyph>,
    /// Countdown text, present only while the multiplier is active
    pub multiplier_label: Option<String>,
}

/// Snapshot the session into a draw list
pub fn compose(session: &GameSession) -> Scene {
    let stars = session
        .pickups
        .iter()
        .map(|pickup| StarGlyph {
            center: pickup.pos + Vec2::splat(pickup.size / 2.0),
            outer_radius: STAR_OUTER_RADIUS,
            inner_radius: STAR_INNER_RADIUS,
            color: match pickup.kind {
                PickupKind::MultiplierGrant => StarColor::Pink,
                _ => StarColor::Yellow,
            },
            show_bonus_tag: pickup.kind == PickupKind::Bonus,
        })
        .collect();

    let multiplier_label = session.multiplier.active().then(|| {
        format!("Double Score: {}s", session.multiplier.seconds_remaining())
    });

    Scene {
        ship: session.ship.bounds(),
        hazards: session.hazards.iter().map(|h| h.bounds()).collect(),
        stars,
        multiplier_label,
    }
}

/// Outline of a 5-point star, alternating outer and inner radii
///
/// Point 0 sits straight up from the center; the rest step clockwise by a
/// tenth of a turn.
pub fn star_points(center: Vec2, outer_radius: f32, inner_radius: f32) -> [Vec2; 10] {
    let step = PI / 5.0;
    std::array::from_fn(|i| {
        let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
        let angle = i as f32 * step;
        Vec2::new(
            center.x + radius * angle.sin(),
            center.y - radius * angle.cos(),
        )
    })
}
