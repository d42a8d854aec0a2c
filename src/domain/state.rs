// Domain-level simulation entities and snapshot types.

use crate::domain::tuning::{self, SquadTuning};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitRole {
    Teammate,
    Enemy,
}

/// Stable unit identifier: role plus spawn index, rendered as `ally-0`,
/// `enemy-2` and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitId {
    pub role: UnitRole,
    pub index: usize,
}

impl UnitId {
    /// Human-readable name used in event summaries.
    pub fn display_name(&self) -> String {
        match self.role {
            UnitRole::Teammate => format!("Союзник {}", self.index),
            UnitRole::Enemy => format!("Противник {}", self.index),
        }
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            UnitRole::Teammate => write!(f, "ally-{}", self.index),
            UnitRole::Enemy => write!(f, "enemy-{}", self.index),
        }
    }
}

impl Serialize for UnitId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

pub struct Unit {
    pub id: UnitId,
    pub role: UnitRole,
    pub x: f32,
    pub y: f32,

    // Combat state.
    pub hp: f32,
    pub max_hp: f32,
    pub attack_cooldown: f32,
    pub attack_timer: f32, // seconds until the next allowed hit
    pub base_damage: f32,
    pub alive: bool,

    // Movement state. `speed` is recomputed from the active speed mode on
    // every step; `base_speed` never changes.
    pub base_speed: f32,
    pub speed: f32,

    // Sticky reference to the current opponent, if any.
    pub target_id: Option<UnitId>,
}

impl Unit {
    pub fn distance_to(&self, other: &Unit) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitSnapshot {
    pub id: UnitId,
    pub role: UnitRole,
    pub x: f32,
    pub y: f32,
    pub hp: f32,
    pub max_hp: f32,
    pub attack_timer: f32,
    pub attack_cooldown: f32,
    pub alive: bool,
}

impl From<&Unit> for UnitSnapshot {
    fn from(u: &Unit) -> Self {
        Self {
            id: u.id,
            role: u.role,
            x: u.x,
            y: u.y,
            hp: u.hp,
            max_hp: u.max_hp,
            attack_timer: u.attack_timer,
            attack_cooldown: u.attack_cooldown,
            alive: u.alive,
        }
    }
}

fn spawn_squad(role: UnitRole, squad: &SquadTuning, speed_multiplier: f32, out: &mut Vec<Unit>) {
    for (index, &(x, y)) in squad.spawns.iter().enumerate() {
        out.push(Unit {
            id: UnitId { role, index },
            role,
            x,
            y,
            hp: squad.max_hp,
            max_hp: squad.max_hp,
            attack_cooldown: squad.attack_cooldown,
            attack_timer: 0.0,
            base_damage: squad.base_damage,
            alive: true,
            base_speed: squad.base_speed,
            speed: squad.base_speed * speed_multiplier,
            target_id: None,
        });
    }
}

/// Build the fixed battle roster: three teammates, then three enemies, at
/// their spawn coordinates. The speed multiplier applies to teammates only.
pub fn spawn_roster(speed_multiplier: f32) -> Vec<Unit> {
    let mut units = Vec::with_capacity(6);
    spawn_squad(
        UnitRole::Teammate,
        &tuning::teammate_tuning(),
        speed_multiplier,
        &mut units,
    );
    spawn_squad(UnitRole::Enemy, &tuning::enemy_tuning(), 1.0, &mut units);
    units
}
