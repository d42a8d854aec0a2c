// Use cases layer: engine step orchestration and battle lifecycle.

pub mod controller;
pub mod engine;
pub mod types;

pub use controller::BattleController;
pub use types::{
    BattleCommand, BattleEvent, BattleMetrics, BattleOutcome, BattleSettings, BattleStatus,
    BattleUpdate, EventTone, SpeedMode,
};
