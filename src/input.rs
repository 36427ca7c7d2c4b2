//! Input translation: keyboard and touch into shared velocity state
//!
//! Handlers run as ordinary callbacks on the same thread as the driver; they
//! mutate `InputState` between ticks and the state machine reads the current
//! values at tick time. Last write wins.

use crate::consts::*;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// ArrowLeft
    Left,
    /// ArrowRight
    Right,
    /// ArrowDown, doubles the game speed while held
    SpeedBoost,
}

/// Shared ship-velocity and game-speed state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputState {
    /// Horizontal ship velocity (±`SHIP_SPEED` or 0)
    pub dx: f32,
    /// Global game-speed multiplier (1 normal, 2 while boost held)
    pub speed_multiplier: f32,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            dx: 0.0,
            speed_multiplier: 1.0,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.dx = -SHIP_SPEED,
            Key::Right => self.dx = SHIP_SPEED,
            Key::SpeedBoost => self.speed_multiplier = 2.0,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left | Key::Right => self.dx = 0.0,
            Key::SpeedBoost => self.speed_multiplier = 1.0,
        }
    }
}

/// Tracks one horizontal touch gesture
///
/// A swipe past `SWIPE_THRESHOLD` yields a velocity impulse; the embedding
/// shell applies it to `InputState` and schedules the deferred reset
/// (`SWIPE_RESET_DELAY_TICKS` later) with the current run's `ResetToken`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: f32,
    last_x: f32,
    active: bool,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = x;
        self.last_x = x;
        self.active = true;
    }

    pub fn touch_move(&mut self, x: f32) {
        if self.active {
            self.last_x = x;
        }
    }

    /// End the gesture; returns the ship velocity it produced, if any
    pub fn touch_end(&mut self) -> Option<f32> {
        if !self.active {
            return None;
        }
        self.active = false;

        let travel = self.last_x - self.start_x;
        if travel > SWIPE_THRESHOLD {
            Some(SHIP_SPEED)
        } else if travel < -SWIPE_THRESHOLD {
            Some(-SHIP_SPEED)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_set_and_clear_velocity() {
        let mut input = InputState::new();

        input.key_down(Key::Left);
        assert_eq!(input.dx, -SHIP_SPEED);
        input.key_down(Key::Right);
        assert_eq!(input.dx, SHIP_SPEED);
        input.key_up(Key::Right);
        assert_eq!(input.dx, 0.0);
    }

    #[test]
    fn boost_key_toggles_speed_multiplier() {
        let mut input = InputState::new();
        assert_eq!(input.speed_multiplier, 1.0);

        input.key_down(Key::SpeedBoost);
        assert_eq!(input.speed_multiplier, 2.0);
        input.key_up(Key::SpeedBoost);
        assert_eq!(input.speed_multiplier, 1.0);
    }

    #[test]
    fn swipe_past_threshold_moves_the_ship() {
        let mut swipe = SwipeTracker::new();

        swipe.touch_start(100.0);
        swipe.touch_move(100.0 + SWIPE_THRESHOLD + 1.0);
        assert_eq!(swipe.touch_end(), Some(SHIP_SPEED));

        swipe.touch_start(200.0);
        swipe.touch_move(200.0 - SWIPE_THRESHOLD - 1.0);
        assert_eq!(swipe.touch_end(), Some(-SHIP_SPEED));
    }

    #[test]
    fn short_swipe_is_ignored() {
        let mut swipe = SwipeTracker::new();
        swipe.touch_start(100.0);
        swipe.touch_move(100.0 + SWIPE_THRESHOLD);
        // Exactly at the threshold does not count
        assert_eq!(swipe.touch_end(), None);
        // Ending again without a new gesture yields nothing
        assert_eq!(swipe.touch_end(), None);
    }
}
