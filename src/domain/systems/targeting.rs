use crate::domain::state::Unit;

/// Resolve the roster index of the unit's target for this tick.
///
/// Targeting is sticky: while the stored target id still points at a living
/// opponent it is kept, even if another opponent is now closer. Otherwise
/// the nearest living opponent by Euclidean distance is selected; ties
/// resolve to the first-encountered minimum in roster order (stable but not
/// load-bearing). Returns `None` and clears the stored id when no opponent
/// is left alive.
pub fn select_target(units: &mut [Unit], idx: usize) -> Option<usize> {
    let unit = &units[idx];

    if let Some(target_id) = unit.target_id {
        if let Some(pos) = units
            .iter()
            .position(|u| u.id == target_id && u.alive && u.role != unit.role)
        {
            return Some(pos);
        }
    }

    let mut nearest: Option<(usize, f32)> = None;
    for (i, candidate) in units.iter().enumerate() {
        if !candidate.alive || candidate.role == unit.role {
            continue;
        }
        let dist = unit.distance_to(candidate);
        if nearest.is_none_or(|(_, best)| dist < best) {
            nearest = Some((i, dist));
        }
    }

    units[idx].target_id = nearest.map(|(i, _)| units[i].id);
    nearest.map(|(i, _)| i)
}
