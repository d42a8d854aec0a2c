use crate::domain::state::{Unit, UnitRole};
use crate::domain::tuning::ARRIVE_EPSILON;

/// Recompute effective speeds from the active speed-mode multiplier.
/// Only teammates scale; enemy speed is fixed at its base value.
pub fn apply_speed(units: &mut [Unit], speed_multiplier: f32) {
    for unit in units.iter_mut() {
        unit.speed = match unit.role {
            UnitRole::Teammate => unit.base_speed * speed_multiplier,
            UnitRole::Enemy => unit.base_speed,
        };
    }
}

/// Advance the unit straight toward the target position. Travel is capped at
/// the remaining distance so a fast unit never overshoots its target. `dist`
/// is the distance to the target at the start of the tick.
pub fn pursue(unit: &mut Unit, target_x: f32, target_y: f32, dist: f32, dt: f32) {
    if dist <= ARRIVE_EPSILON {
        return;
    }
    let travel = (unit.speed * dt).min(dist);
    unit.x += (target_x - unit.x) / dist * travel;
    unit.y += (target_y - unit.y) / dist * travel;
}
