//! Core agent storage: `AgentStore` (SoA data).
//!
//! Every `Vec` field has exactly `count` elements and `AgentId` is the index
//! into all of them:
//!
//! ```ignore
//! let pos = store.position[agent.index()];
//! ```
//!
//! The simulation never resizes the store after it is built; hosts spawn
//! agents up front through [`AgentStoreBuilder`][crate::AgentStoreBuilder].

use std::sync::Arc;

use shoal_core::{AgentId, Quat, ShoalError, ShoalResult, TargetId, Vec3, forward};

use crate::{AgentConfig, MovementState};

/// The part of an agent's state a renderer needs.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentPose {
    pub position:    Vec3,
    pub orientation: Quat,
}

/// Structure-of-Arrays storage for all agent state.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Kinematics ────────────────────────────────────────────────────────
    /// World-space position.
    pub position: Vec<Vec3>,

    /// Facing; the agent's forward axis is `orientation * +Z`.
    pub orientation: Vec<Quat>,

    // ── Seek-and-dwell state ──────────────────────────────────────────────
    /// Target currently pursued or occupied.  `None` before the first
    /// resolution, after a release, or while the pool has nothing available.
    pub target: Vec<Option<TargetId>>,

    pub movement: Vec<MovementState>,

    /// Seconds spent at the claimed target.  Only meaningful while Dwelling.
    pub dwell_elapsed: Vec<f32>,

    // ── Tuning ────────────────────────────────────────────────────────────
    /// Shared, read-only tuning.  Agents spawned with the same `Arc` share
    /// one allocation.
    pub config: Vec<Arc<AgentConfig>>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// World-space forward direction of `agent`.
    #[inline]
    pub fn forward(&self, agent: AgentId) -> Vec3 {
        forward(self.orientation[agent.index()])
    }

    /// Position and orientation of `agent`.
    pub fn pose(&self, agent: AgentId) -> ShoalResult<AgentPose> {
        if agent.index() >= self.count {
            return Err(ShoalError::AgentNotFound(agent));
        }
        Ok(AgentPose {
            position:    self.position[agent.index()],
            orientation: self.orientation[agent.index()],
        })
    }

    /// Number of agents currently in `state`.
    pub fn count_in(&self, state: MovementState) -> usize {
        self.movement.iter().filter(|&&s| s == state).count()
    }

    /// The agent dwelling at `target`, if any.
    pub fn holder_of(&self, target: TargetId) -> Option<AgentId> {
        self.agent_ids().find(|a| {
            self.movement[a.index()].is_dwelling() && self.target[a.index()] == Some(target)
        })
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn new(
        position:    Vec<Vec3>,
        orientation: Vec<Quat>,
        config:      Vec<Arc<AgentConfig>>,
    ) -> Self {
        let count = position.len();
        debug_assert_eq!(orientation.len(), count);
        debug_assert_eq!(config.len(), count);

        Self {
            count,
            position,
            orientation,
            target:        vec![None; count],
            movement:      vec![MovementState::Roaming; count],
            dwell_elapsed: vec![0.0; count],
            config,
        }
    }
}
