//! Per-agent movement state.

use crate::AgentConfig;

/// Where an agent is in its seek-and-dwell cycle.
///
/// Re-derived from the distance to the current target on every moving tick
/// (nothing is sticky), except `Dwelling`, which only ends when the dwell
/// timer runs out.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementState {
    /// Travelling with the school toward a target (or with no target).
    #[default]
    Roaming,
    /// Final approach: inside `stopping_moving_distance`, flocking ignored.
    /// Agents in this state also stop influencing their neighbours.
    Approaching,
    /// Arrived and holding a claimed target until the dwell timer expires.
    Dwelling,
}

impl MovementState {
    /// State implied by the distance to the current target.
    pub fn from_distance(distance: f32, config: &AgentConfig) -> Self {
        if distance <= config.stopping_reach_distance {
            MovementState::Dwelling
        } else if distance <= config.stopping_moving_distance {
            MovementState::Approaching
        } else {
            MovementState::Roaming
        }
    }

    #[inline]
    pub fn is_dwelling(self) -> bool {
        matches!(self, MovementState::Dwelling)
    }

    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            MovementState::Roaming     => "roaming",
            MovementState::Approaching => "approaching",
            MovementState::Dwelling    => "dwelling",
        }
    }
}

impl std::fmt::Display for MovementState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
