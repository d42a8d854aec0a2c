// Domain layer: core simulation types and rules.

pub mod state;
pub mod systems;
pub mod tuning;

pub use state::{spawn_roster, Unit, UnitId, UnitRole, UnitSnapshot};
