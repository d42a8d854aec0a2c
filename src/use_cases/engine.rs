// Combat engine: the authoritative per-tick state transition.

use crate::domain::state::{Unit, UnitRole};
use crate::domain::systems::{combat, movement, targeting};
use crate::domain::tuning::ATTACK_RANGE;
use crate::use_cases::types::{BattleEvent, BattleMetrics, BattleOutcome, EventTone};

/// Upper bound on a single step's delta, in seconds. The controller clamps
/// raw frame deltas to this value so a stalled frame schedule (for example a
/// backgrounded host) cannot turn into one huge catch-up step.
pub const MAX_DELTA_SECONDS: f32 = 0.08;

/// Resolved numeric configuration for one step. The engine only ever sees
/// multipliers, never mode identifiers.
#[derive(Debug, Clone, Copy)]
pub struct StepConfig {
    pub damage_multiplier: f32,
    pub speed_multiplier: f32,
}

#[derive(Debug, Default)]
pub struct StepOutput {
    /// Events produced this step, most recent first.
    pub events: Vec<BattleEvent>,
    pub outcome: Option<BattleOutcome>,
}

/// Advance the battle by one step. Mutates `units` in place; the caller owns
/// the roster across calls. `delta_seconds` must already be clamped to
/// [`MAX_DELTA_SECONDS`].
///
/// Per call: apply the speed configuration, bail out with a terminal outcome
/// if a side is already empty, advance metrics, then per living unit in
/// roster order resolve its target, close in, run down its cooldown and
/// attack when in range and ready. A final liveness check reports the
/// outcome of this step's combat. When both sides are empty at once the
/// teammate side losing takes precedence and the outcome is `Defeat`.
pub fn step(
    units: &mut [Unit],
    delta_seconds: f32,
    cfg: StepConfig,
    metrics: &mut BattleMetrics,
    event_seq: &mut u64,
) -> StepOutput {
    debug_assert!(
        delta_seconds <= MAX_DELTA_SECONDS + f32::EPSILON,
        "caller must clamp frame deltas"
    );

    movement::apply_speed(units, cfg.speed_multiplier);

    if let Some(outcome) = terminal_outcome(units) {
        return StepOutput {
            events: Vec::new(),
            outcome: Some(outcome),
        };
    }

    metrics.ticks += 1;
    metrics.elapsed_seconds += delta_seconds;

    let mut events: Vec<BattleEvent> = Vec::new();
    for i in 0..units.len() {
        if !units[i].alive {
            continue;
        }

        let target = targeting::select_target(units, i);

        // Cooldown runs down even while a unit has nothing left to chase.
        let Some(t) = target else {
            units[i].attack_timer = (units[i].attack_timer - delta_seconds).max(0.0);
            continue;
        };

        // Range is checked against the distance at the start of the unit's
        // action, before this tick's movement.
        let (target_x, target_y) = (units[t].x, units[t].y);
        let dist = units[i].distance_to(&units[t]);

        movement::pursue(&mut units[i], target_x, target_y, dist, delta_seconds);
        units[i].attack_timer = (units[i].attack_timer - delta_seconds).max(0.0);

        if dist <= ATTACK_RANGE && units[i].attack_timer <= 0.0 && units[t].alive {
            let report = combat::strike(units, i, t, cfg.damage_multiplier);

            let tone = match units[i].role {
                UnitRole::Teammate => EventTone::Ally,
                UnitRole::Enemy => EventTone::Enemy,
            };
            match units[i].role {
                UnitRole::Teammate => metrics.teammate_damage_inflicted += report.damage,
                UnitRole::Enemy => metrics.enemy_damage_inflicted += report.damage,
            }

            let attacker = units[i].id.display_name();
            let victim = units[t].id.display_name();
            events.insert(
                0,
                make_event(
                    event_seq,
                    metrics,
                    format!("{attacker} наносит {:.0} урона по {victim}.", report.damage),
                    tone,
                ),
            );
            if report.lethal {
                events.insert(
                    0,
                    make_event(
                        event_seq,
                        metrics,
                        format!("{attacker} устраняет {victim}."),
                        tone,
                    ),
                );
            }
        }
    }

    StepOutput {
        events,
        outcome: terminal_outcome(units),
    }
}

/// Defeat wins when both sides are emptied at once: a roster with no living
/// teammates reads as "allies lost" regardless of the enemy side.
fn terminal_outcome(units: &[Unit]) -> Option<BattleOutcome> {
    let teammates_alive = units
        .iter()
        .any(|u| u.alive && u.role == UnitRole::Teammate);
    let enemies_alive = units.iter().any(|u| u.alive && u.role == UnitRole::Enemy);

    if !teammates_alive {
        Some(BattleOutcome::Defeat)
    } else if !enemies_alive {
        Some(BattleOutcome::Victory)
    } else {
        None
    }
}

fn make_event(
    event_seq: &mut u64,
    metrics: &BattleMetrics,
    summary: String,
    tone: EventTone,
) -> BattleEvent {
    let id = *event_seq;
    *event_seq += 1;
    BattleEvent {
        id,
        tick: metrics.ticks,
        timestamp: metrics.elapsed_seconds,
        summary,
        tone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::spawn_roster;

    fn cfg() -> StepConfig {
        StepConfig {
            damage_multiplier: 1.0,
            speed_multiplier: 1.0,
        }
    }

    fn run_step(units: &mut Vec<Unit>, dt: f32) -> StepOutput {
        let mut metrics = BattleMetrics::default();
        let mut seq = 0;
        step(units, dt, cfg(), &mut metrics, &mut seq)
    }

    #[test]
    fn when_both_sides_are_empty_then_defeat_takes_precedence() {
        let mut units = spawn_roster(1.0);
        for unit in &mut units {
            unit.hp = 0.0;
            unit.alive = false;
        }
        let output = run_step(&mut units, 0.05);
        assert_eq!(output.outcome, Some(BattleOutcome::Defeat));
        assert!(output.events.is_empty());
    }

    #[test]
    fn when_a_side_is_already_empty_then_no_tick_is_processed() {
        let mut units = spawn_roster(1.0);
        for enemy in &mut units[3..] {
            enemy.hp = 0.0;
            enemy.alive = false;
        }
        let positions: Vec<(f32, f32)> = units.iter().map(|u| (u.x, u.y)).collect();
        let mut metrics = BattleMetrics::default();
        let mut seq = 0;
        let output = step(&mut units, 0.05, cfg(), &mut metrics, &mut seq);
        assert_eq!(output.outcome, Some(BattleOutcome::Victory));
        assert_eq!(metrics.ticks, 0);
        assert_eq!(metrics.elapsed_seconds, 0.0);
        let after: Vec<(f32, f32)> = units.iter().map(|u| (u.x, u.y)).collect();
        assert_eq!(positions, after);
    }

    #[test]
    fn when_attacker_is_ready_and_in_range_then_hit_lands_and_cooldown_gates() {
        let mut units = spawn_roster(1.0);
        // Park ally-0 within range of enemy-0 and isolate the rest.
        units[0].x = units[3].x - 10.0;
        units[0].y = units[3].y;
        // Keep the enemy from swinging back so only ally hits are counted.
        units[3].attack_timer = 100.0;
        for other in [1, 2, 4, 5] {
            units[other].hp = 0.0;
            units[other].alive = false;
        }
        let mut metrics = BattleMetrics::default();
        let mut seq = 0;

        let first = step(&mut units, 0.05, cfg(), &mut metrics, &mut seq);
        assert_eq!(first.events.len(), 1);
        assert_eq!(units[3].hp, 160.0 - 26.0);
        assert_eq!(metrics.teammate_damage_inflicted, 26.0);

        // Not enough accumulated delta for a second hit yet.
        let second = step(&mut units, 0.05, cfg(), &mut metrics, &mut seq);
        assert!(second.events.is_empty());
        assert_eq!(units[3].hp, 160.0 - 26.0);

        // Accumulate past the 0.75 s cooldown; the next step may fire again.
        for _ in 0..14 {
            step(&mut units, 0.05, cfg(), &mut metrics, &mut seq);
        }
        assert!(units[3].hp <= 160.0 - 52.0);
    }

    #[test]
    fn when_hit_is_lethal_then_kill_event_precedes_hit_event() {
        let mut units = spawn_roster(1.0);
        units[0].x = units[3].x - 10.0;
        units[0].y = units[3].y;
        units[3].hp = 20.0;
        for other in [1, 2, 4, 5] {
            units[other].hp = 0.0;
            units[other].alive = false;
        }
        let output = run_step(&mut units, 0.05);
        assert_eq!(output.outcome, Some(BattleOutcome::Victory));
        assert_eq!(output.events.len(), 2);
        // Most recent first: the kill record sits ahead of the hit record.
        assert!(output.events[0].summary.contains("устраняет"));
        assert!(output.events[1].summary.contains("наносит"));
        assert!(output.events[0].id > output.events[1].id);
    }

    #[test]
    fn when_step_runs_then_hp_stays_within_bounds_and_alive_matches_hp() {
        let mut units = spawn_roster(1.0);
        let mut metrics = BattleMetrics::default();
        let mut seq = 0;
        for _ in 0..200 {
            let before: Vec<f32> = units.iter().map(|u| u.hp).collect();
            let output = step(&mut units, 0.05, cfg(), &mut metrics, &mut seq);
            for (unit, prev) in units.iter().zip(before) {
                assert!(unit.hp <= prev);
                assert!(unit.hp >= 0.0 && unit.hp <= unit.max_hp);
                assert_eq!(unit.alive, unit.hp > 0.0);
            }
            if output.outcome.is_some() {
                break;
            }
        }
    }

    #[test]
    fn when_units_are_apart_then_they_close_in_without_overshoot() {
        let mut units = spawn_roster(1.0);
        let before = units[0].distance_to(&units[3]);
        run_step(&mut units, 0.05);
        let after = units[0].distance_to(&units[3]);
        assert!(after < before);
    }
}
