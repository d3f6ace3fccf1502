//! Neighbour-based flocking forces.

use shoal_agent::MovementState;
use shoal_core::{AgentId, Vec3};

use crate::FlockContext;

/// The three flocking terms for one agent in one tick.
///
/// `avoidance` and `alignment` are raw sums over neighbours.  `cohesion` is
/// already normalized (or zero); its weight is applied when the terms are
/// mixed into a move direction.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlockForces {
    pub avoidance: Vec3,
    pub alignment: Vec3,
    pub cohesion:  Vec3,
}

impl FlockForces {
    pub const ZERO: FlockForces = FlockForces {
        avoidance: Vec3::ZERO,
        alignment: Vec3::ZERO,
        cohesion:  Vec3::ZERO,
    };

    /// Sum of the three terms with `cohesion_weight` applied to cohesion.
    #[inline]
    pub fn combined(&self, cohesion_weight: f32) -> Vec3 {
        self.avoidance + self.alignment + self.cohesion * cohesion_weight
    }
}

/// Scan every other agent and accumulate `agent`'s flocking forces.
///
/// Agents in the Approaching state are skipped as contributors (they are on
/// their final run-in and no longer flock); Dwelling and Roaming agents
/// contribute.  Each radius is tested independently with a strict `<`.
///
/// Cohesion averages the in-radius positions over the *total* agent count,
/// not the in-radius count, then points from `agent` toward that value.  It
/// is only computed when the position sum is non-zero.
pub fn flock_forces(agent: AgentId, ctx: &FlockContext<'_>) -> FlockForces {
    let agents = ctx.agents;
    let i = agent.index();
    let config = &agents.config[i];
    let pos = ctx.position(agent);

    let mut forces = FlockForces::ZERO;
    let mut cohesion_sum = Vec3::ZERO;

    for other in agents.agent_ids() {
        if other == agent || ctx.movement(other) == MovementState::Approaching {
            continue;
        }

        let other_pos = ctx.position(other);
        let distance = pos.distance(other_pos);

        if distance < config.avoidance_radius {
            forces.avoidance += (pos - other_pos).normalize_or_zero();
        }
        if distance < config.alignment_distance {
            forces.alignment += agents.forward(other);
        }
        if distance < config.cohesion_radius {
            cohesion_sum += other_pos;
        }
    }

    if cohesion_sum != Vec3::ZERO {
        let centre = cohesion_sum / ctx.agent_count() as f32;
        forces.cohesion = (centre - pos).normalize_or_zero();
    }

    forces
}
