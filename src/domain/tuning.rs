// Gameplay tuning constants (not runtime configuration).

/// Per-side roster tuning. Spawn order doubles as the unit index.
#[derive(Debug, Clone, Copy)]
pub struct SquadTuning {
    pub spawns: [(f32, f32); 3],
    pub max_hp: f32,
    pub base_speed: f32,
    pub attack_cooldown: f32,
    pub base_damage: f32,
}

pub fn teammate_tuning() -> SquadTuning {
    SquadTuning {
        spawns: [(120.0, 140.0), (110.0, 260.0), (130.0, 380.0)],
        max_hp: 180.0,
        base_speed: 110.0,
        attack_cooldown: 0.75,
        base_damage: 26.0,
    }
}

pub fn enemy_tuning() -> SquadTuning {
    SquadTuning {
        spawns: [(660.0, 160.0), (680.0, 260.0), (650.0, 360.0)],
        max_hp: 160.0,
        base_speed: 90.0,
        attack_cooldown: 0.95,
        base_damage: 18.0,
    }
}

/// Maximum distance at which a unit can land a hit.
pub const ATTACK_RANGE: f32 = 48.0;

/// Units stop closing in once they are this near their target.
pub const ARRIVE_EPSILON: f32 = 1.0;
