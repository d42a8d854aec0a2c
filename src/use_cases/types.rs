// Use-case level inputs/outputs for the battle loop.

use crate::domain::UnitSnapshot;
use serde::{Deserialize, Serialize};

/// Battle lifecycle state exposed to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleStatus {
    Idle,
    Running,
    Paused,
    Victory,
    Defeat,
}

/// Terminal result reported by an engine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// Presentation hint attached to every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventTone {
    Ally,
    Enemy,
    System,
}

/// Immutable log record for the battle timeline.
#[derive(Debug, Clone, Serialize)]
pub struct BattleEvent {
    pub id: u64,
    pub tick: u64,
    pub timestamp: f32,
    pub summary: String,
    pub tone: EventTone,
}

/// Cumulative counters for the current battle. Reset together with the
/// roster; monotonically non-decreasing in between.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BattleMetrics {
    pub ticks: u64,
    pub elapsed_seconds: f32,
    pub teammate_damage_inflicted: f32,
    pub enemy_damage_inflicted: f32,
}

/// Closed set of movement pace presets. The multiplier applies to teammate
/// speed only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpeedMode {
    Standard,
    Fast,
    VeryFast,
}

impl SpeedMode {
    pub const ALL: [SpeedMode; 3] = [SpeedMode::Standard, SpeedMode::Fast, SpeedMode::VeryFast];

    pub fn id(&self) -> &'static str {
        match self {
            SpeedMode::Standard => "standard",
            SpeedMode::Fast => "fast",
            SpeedMode::VeryFast => "veryFast",
        }
    }

    /// Resolves a presentation-layer mode id. Unknown ids yield `None`;
    /// callers fall back to the multiplier-1 mode to keep the simulation
    /// advanceable.
    pub fn from_id(id: &str) -> Option<SpeedMode> {
        Self::ALL.iter().copied().find(|mode| mode.id() == id)
    }

    pub fn multiplier(&self) -> f32 {
        match self {
            SpeedMode::Standard => 1.0,
            SpeedMode::Fast => 1.55,
            SpeedMode::VeryFast => 2.15,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpeedMode::Standard => "1. Стандарт",
            SpeedMode::Fast => "2. Быстро",
            SpeedMode::VeryFast => "3. Очень быстро",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SpeedMode::Standard => "Классический темп",
            SpeedMode::Fast => "Ускоренное наступление",
            SpeedMode::VeryFast => "Блиц-контроль карты",
        }
    }
}

/// Live battle configuration. A pure modifier: changing it mid-battle never
/// resets unit state.
#[derive(Debug, Clone, Copy)]
pub struct BattleSettings {
    pub damage_multiplier: f32,
    pub speed_mode: SpeedMode,
}

impl Default for BattleSettings {
    fn default() -> Self {
        Self {
            damage_multiplier: 1.5,
            speed_mode: SpeedMode::Fast,
        }
    }
}

/// Commands accepted from the presentation layer.
#[derive(Debug, Clone)]
pub enum BattleCommand {
    Start,
    Pause,
    Reset,
    SetDamageMultiplier(f32),
    SetSpeedMode(String),
}

/// Snapshot of the battle published after each processed frame. Value
/// copies only; consumers never hold references into live state.
#[derive(Debug, Clone, Serialize)]
pub struct BattleUpdate {
    pub tick: u64,
    pub status: BattleStatus,
    pub units: Vec<UnitSnapshot>,
    pub events: Vec<BattleEvent>,
    pub metrics: BattleMetrics,
}
