use crate::domain::state::{Unit, UnitRole};
use tracing::debug;

/// Result of a landed hit, reported back to the engine for event and metric
/// bookkeeping.
#[derive(Debug, Clone, Copy)]
pub struct HitReport {
    pub damage: f32,
    pub lethal: bool,
}

/// Apply one attack from `attacker` to `target`. The caller has already
/// verified range, cooldown readiness and that the target is alive.
///
/// The damage multiplier scales teammate attacks only; enemies always deal
/// their base damage. Hp is floored at zero and `alive` is recomputed, then
/// the attacker's cooldown timer restarts.
pub fn strike(
    units: &mut [Unit],
    attacker: usize,
    target: usize,
    damage_multiplier: f32,
) -> HitReport {
    let multiplier = match units[attacker].role {
        UnitRole::Teammate => damage_multiplier,
        UnitRole::Enemy => 1.0,
    };
    let damage = units[attacker].base_damage * multiplier;

    let victim = &mut units[target];
    victim.hp = (victim.hp - damage).max(0.0);
    victim.alive = victim.hp > 0.0;
    let lethal = !victim.alive;

    units[attacker].attack_timer = units[attacker].attack_cooldown;

    debug!(
        attacker = %units[attacker].id,
        target = %units[target].id,
        damage,
        target_hp = units[target].hp,
        lethal,
        "unit hit"
    );

    HitReport { damage, lethal }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::spawn_roster;

    #[test]
    fn when_teammate_strikes_then_multiplier_applies_and_cooldown_restarts() {
        let mut units = spawn_roster(1.0);
        let report = strike(&mut units, 0, 3, 1.5);
        assert_eq!(report.damage, 26.0 * 1.5);
        assert!(!report.lethal);
        assert_eq!(units[3].hp, 160.0 - 39.0);
        assert_eq!(units[0].attack_timer, units[0].attack_cooldown);
    }

    #[test]
    fn when_enemy_strikes_then_multiplier_is_ignored() {
        let mut units = spawn_roster(1.0);
        let report = strike(&mut units, 3, 0, 2.5);
        assert_eq!(report.damage, 18.0);
        assert_eq!(units[0].hp, 180.0 - 18.0);
    }

    #[test]
    fn when_hit_drains_hp_then_target_dies_at_exactly_zero() {
        let mut units = spawn_roster(1.0);
        units[3].hp = 10.0;
        let report = strike(&mut units, 0, 3, 1.0);
        assert!(report.lethal);
        assert_eq!(units[3].hp, 0.0);
        assert!(!units[3].alive);
        assert_eq!(units[3].alive, units[3].hp > 0.0);
    }
}
