pub mod domain;
pub mod frameworks;
pub mod use_cases;

pub use domain::{Unit, UnitId, UnitRole, UnitSnapshot};
pub use frameworks::runtime::BattleHandle;
pub use use_cases::{
    BattleCommand, BattleController, BattleEvent, BattleMetrics, BattleSettings, BattleStatus,
    BattleUpdate, EventTone, SpeedMode,
};
