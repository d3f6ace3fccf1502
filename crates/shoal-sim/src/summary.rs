use shoal_agent::{AgentStore, MovementState};
use shoal_core::Tick;

/// Per-tick counts reported to [`SimObserver::on_tick_end`][crate::SimObserver::on_tick_end].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// The tick that just finished.
    pub tick:        Tick,
    pub roaming:     usize,
    pub approaching: usize,
    pub dwelling:    usize,
    /// Targets claimed during this tick.
    pub claimed:     usize,
    /// Targets released during this tick.
    pub released:    usize,
}

impl TickSummary {
    /// Count agents per state after the apply phase.
    pub(crate) fn collect(tick: Tick, agents: &AgentStore, claimed: usize, released: usize) -> Self {
        let mut summary = TickSummary { tick, claimed, released, ..TickSummary::default() };
        for state in &agents.movement {
            match state {
                MovementState::Roaming     => summary.roaming += 1,
                MovementState::Approaching => summary.approaching += 1,
                MovementState::Dwelling    => summary.dwelling += 1,
            }
        }
        summary
    }

    pub fn agent_count(&self) -> usize {
        self.roaming + self.approaching + self.dwelling
    }
}
