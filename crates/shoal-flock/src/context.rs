//! Read-only school state shared by every force computation in a tick.

use shoal_agent::{AgentStore, MovementState};
use shoal_core::{AgentId, Vec3};

/// A read-only snapshot of the school for the force phase.
///
/// Built once per tick, before any agent is moved.  While it is alive the
/// borrow checker guarantees nobody writes to the store, so every agent's
/// forces come from the same previous-tick state.
#[derive(Copy, Clone)]
pub struct FlockContext<'a> {
    pub agents: &'a AgentStore,
}

impl<'a> FlockContext<'a> {
    #[inline]
    pub fn new(agents: &'a AgentStore) -> Self {
        Self { agents }
    }

    /// Total number of agents, including ones that do not contribute forces.
    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents.count
    }

    #[inline]
    pub fn position(&self, agent: AgentId) -> Vec3 {
        self.agents.position[agent.index()]
    }

    #[inline]
    pub fn movement(&self, agent: AgentId) -> MovementState {
        self.agents.movement[agent.index()]
    }
}
