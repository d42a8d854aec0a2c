use std::{env, time::Duration};

// Runtime constants (not gameplay tuning).

/// Frame interval for the driving loop; overridable via `SMART_BATTLE_FPS`.
pub fn frame_interval() -> Duration {
    let fps = env::var("SMART_BATTLE_FPS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|value| (1..=1000).contains(value))
        .unwrap_or(60);
    Duration::from_millis(1000 / fps)
}

pub const COMMAND_CHANNEL_CAPACITY: usize = 64;
pub const UPDATE_BROADCAST_CAPACITY: usize = 128;
