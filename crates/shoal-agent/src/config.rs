//! Immutable per-agent tuning.

use shoal_core::{ShoalError, ShoalResult};

/// Motion and flocking parameters for one agent (or a whole school, shared
/// through an `Arc`).
///
/// Created once when agents are spawned and never mutated by the simulation.
/// Distances are in scene units, times in seconds.
///
/// Values are not range-checked.  Non-positive values degrade instead of
/// failing: a speed or rotation speed `<= 0` yields no motion or no turning,
/// a radius `<= 0` never matches a neighbour, and a dwell time `<= 0`
/// releases the target on the first dwelling tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Linear speed, units per second.
    pub speed: f32,
    /// Fraction of the remaining turn applied per second (per-tick slerp
    /// factor is `rotation_speed * dt`).
    pub rotation_speed: f32,
    /// Neighbours closer than this push the agent away.
    pub avoidance_radius: f32,
    /// Neighbours closer than this contribute their heading.
    pub alignment_distance: f32,
    /// Neighbours closer than this pull the agent toward the school.
    pub cohesion_radius: f32,
    /// Multiplier on the (normalized) cohesion term only.
    pub cohesion_weight: f32,
    /// Inside this distance of its target the agent ignores the school and
    /// heads straight in.
    pub stopping_moving_distance: f32,
    /// Inside this distance the agent has arrived and starts dwelling.
    /// Expected to be `<= stopping_moving_distance`.
    pub stopping_reach_distance: f32,
    /// Seconds spent dwelling at a claimed target before releasing it.
    pub time_at_interest_point: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            speed:                    3.0,
            rotation_speed:           2.0,
            avoidance_radius:         2.0,
            alignment_distance:       5.0,
            cohesion_radius:          5.0,
            cohesion_weight:          1.0,
            stopping_moving_distance: 1.0,
            stopping_reach_distance:  0.5,
            time_at_interest_point:   5.0,
        }
    }
}

impl AgentConfig {
    /// Speed actually used for motion: negative values move nothing.
    #[inline]
    pub fn effective_speed(&self) -> f32 {
        self.speed.max(0.0)
    }

    /// `true` if arriving is at least as strict as the final-approach
    /// threshold.  Violations still run but skip the Approaching state.
    #[inline]
    pub fn has_ordered_stopping_distances(&self) -> bool {
        self.stopping_reach_distance <= self.stopping_moving_distance
    }

    /// Reject values the simulation cannot degrade from (NaN, infinity).
    pub fn validate(&self) -> ShoalResult<()> {
        let fields = [
            ("speed",                    self.speed),
            ("rotation_speed",           self.rotation_speed),
            ("avoidance_radius",         self.avoidance_radius),
            ("alignment_distance",       self.alignment_distance),
            ("cohesion_radius",          self.cohesion_radius),
            ("cohesion_weight",          self.cohesion_weight),
            ("stopping_moving_distance", self.stopping_moving_distance),
            ("stopping_reach_distance",  self.stopping_reach_distance),
            ("time_at_interest_point",   self.time_at_interest_point),
        ];
        match fields.iter().find(|(_, v)| !v.is_finite()) {
            Some((name, v)) => Err(ShoalError::Config(format!("agent {name} must be finite, got {v}"))),
            None => Ok(()),
        }
    }
}
