// Shared helpers for driving the controller with synthetic frame timestamps.

use smart_battle::{BattleController, BattleUpdate};
use std::time::Duration;

/// Monotonic fake clock handing out frame timestamps.
pub struct FrameClock {
    now: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { now: Duration::ZERO }
    }

    /// Advance wall time by `dt` seconds and deliver one frame.
    pub fn step(&mut self, controller: &mut BattleController, dt: f32) -> Option<BattleUpdate> {
        self.now += Duration::from_secs_f32(dt);
        controller.frame(self.now)
    }

    /// Let wall time pass without delivering a frame (e.g. while paused).
    pub fn jump(&mut self, seconds: f32) {
        self.now += Duration::from_secs_f32(seconds);
    }
}
