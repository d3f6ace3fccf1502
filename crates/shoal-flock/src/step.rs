//! One agent, one tick.

use log::debug;
use shoal_agent::{AgentStore, MovementState};
use shoal_core::{AgentId, Area, look_rotation, turn_towards};
use shoal_target::TargetPool;

use crate::{FlockForces, TargetEvent, mix_direction, seek_direction};

/// Clamp a host-supplied `dt` to something the step can use: negative,
/// NaN and infinite values become zero.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() { dt.max(0.0) } else { 0.0 }
}

/// Advance `agent` by `dt` seconds.
///
/// `forces` must have been computed from the previous-tick state (see
/// [`flock_forces`][crate::flock_forces]); this function only writes
/// `agent`'s own rows and the flag of the target it claims or releases.
///
/// Order of evaluation:
///
/// 1. A dwelling agent only runs its timer.  When it reaches
///    `time_at_interest_point` the target is released and the agent goes
///    back to Roaming.  It does not move on this tick either way.
/// 2. Otherwise the closest available target is resolved.  With none, the
///    agent's current forward heading stands in for the seek direction and
///    the agent stays Roaming.
/// 3. The state is re-derived from the target distance, the move direction
///    mixed, and the position advanced by `speed * dt` along it.
/// 4. The new position is clamped into `area`, reflecting the direction on
///    each clamped axis, and the orientation turns toward the (reflected)
///    direction by `rotation_speed * dt`.
/// 5. An agent that has arrived claims its target and starts dwelling.
pub fn advance_agent(
    agent:  AgentId,
    agents: &mut AgentStore,
    pool:   &mut TargetPool,
    forces: &FlockForces,
    area:   &Area,
    dt:     f32,
) -> Option<TargetEvent> {
    let i = agent.index();
    let dt = sanitize_dt(dt);
    let config = &agents.config[i];

    // ── Dwelling: timer only ──────────────────────────────────────────────
    if agents.movement[i].is_dwelling() {
        agents.dwell_elapsed[i] += dt;
        if agents.dwell_elapsed[i] < config.time_at_interest_point {
            return None;
        }

        let released = agents.target[i].take();
        agents.movement[i] = MovementState::Roaming;
        agents.dwell_elapsed[i] = 0.0;

        return released.map(|target| {
            pool.activate(target);
            debug!("{agent} released {target}");
            TargetEvent::Released { agent, target }
        });
    }

    // ── Target resolution ─────────────────────────────────────────────────
    let pos = agents.position[i];
    let resolved = pool.closest_available(pos).map(|t| (t.id, t.position));
    agents.target[i] = resolved.map(|(id, _)| id);

    let (seek, next_state, final_approach) = match resolved {
        Some((_, target_pos)) => {
            let distance = pos.distance(target_pos);
            (
                seek_direction(pos, target_pos),
                MovementState::from_distance(distance, config),
                distance <= config.stopping_moving_distance,
            )
        }
        None => (agents.forward(agent), MovementState::Roaming, false),
    };

    // ── Move ──────────────────────────────────────────────────────────────
    let mut direction = mix_direction(seek, final_approach, forces, config.cohesion_weight);
    let mut new_pos = pos + direction.normalize_or_zero() * config.effective_speed() * dt;

    area.reflect(&mut new_pos, &mut direction);
    agents.position[i] = new_pos;

    // ── Turn ──────────────────────────────────────────────────────────────
    if let Some(facing) = look_rotation(direction) {
        agents.orientation[i] = turn_towards(agents.orientation[i], facing, config.rotation_speed * dt);
    }

    agents.movement[i] = next_state;

    // ── Claim on arrival ──────────────────────────────────────────────────
    if next_state.is_dwelling() {
        agents.dwell_elapsed[i] = 0.0;
        if let Some((target, _)) = resolved {
            pool.deactivate(target);
            debug!("{agent} claimed {target}");
            return Some(TargetEvent::Claimed { agent, target });
        }
    }

    None
}
