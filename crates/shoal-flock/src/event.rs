use shoal_core::{AgentId, TargetId};

/// A change in target ownership produced by [`advance_agent`][crate::advance_agent].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TargetEvent {
    /// `agent` arrived at `target` and now holds it.
    Claimed { agent: AgentId, target: TargetId },
    /// `agent` finished dwelling and returned `target` to the pool.
    Released { agent: AgentId, target: TargetId },
}

impl TargetEvent {
    pub fn agent(&self) -> AgentId {
        match *self {
            TargetEvent::Claimed { agent, .. } | TargetEvent::Released { agent, .. } => agent,
        }
    }

    pub fn target(&self) -> TargetId {
        match *self {
            TargetEvent::Claimed { target, .. } | TargetEvent::Released { target, .. } => target,
        }
    }
}
