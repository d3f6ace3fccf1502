//! Turning a target and the flocking forces into a move direction.

use shoal_core::Vec3;

use crate::FlockForces;

/// Unit vector from `position` toward `target`, or zero when they coincide.
#[inline]
pub fn seek_direction(position: Vec3, target: Vec3) -> Vec3 {
    (target - position).normalize_or_zero()
}

/// Combine the seek term with the flocking forces.
///
/// On the final approach (`final_approach == true`) the school is ignored and
/// the agent heads straight for its target.  Otherwise the result is the
/// unnormalized sum `seek + avoidance + alignment + cohesion * weight`.
///
/// `seek` is either [`seek_direction`] or, with no target available, the
/// agent's current forward heading.
#[inline]
pub fn mix_direction(seek: Vec3, final_approach: bool, forces: &FlockForces, cohesion_weight: f32) -> Vec3 {
    if final_approach {
        seek
    } else {
        seek + forces.combined(cohesion_weight)
    }
}
