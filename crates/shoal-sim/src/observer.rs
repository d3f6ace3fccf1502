//! Simulation observer trait for progress reporting and data collection.

use log::{debug, info};
use shoal_agent::AgentStore;
use shoal_core::Tick;
use shoal_flock::TargetEvent;
use shoal_target::TargetPool;

use crate::TickSummary;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] (and therefore by
/// `run` / `run_ticks`) at key points in the tick.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: renderer bridge
///
/// ```rust,ignore
/// struct PushToScene<'a> { scene: &'a mut Scene }
///
/// impl SimObserver for PushToScene<'_> {
///     fn on_snapshot(&mut self, _tick: Tick, agents: &AgentStore, _targets: &TargetPool) {
///         for agent in agents.agent_ids() {
///             self.scene.set_pose(agent, agents.pose(agent).unwrap());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every claim and release, in the order they happened.
    fn on_target_event(&mut self, _tick: Tick, _event: &TargetEvent) {}

    /// Called at the end of each tick with per-state counts.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to the whole school and pool.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore, _targets: &TargetPool) {}

    /// Called once after the final tick of `Sim::run` completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// A [`SimObserver`] that reports progress through the `log` facade.
///
/// Tick summaries are logged at `info` every `interval` ticks; claims and
/// releases at `debug`.
pub struct LogObserver {
    pub interval: u64,
}

impl LogObserver {
    pub fn new(interval: u64) -> Self {
        Self { interval }
    }
}

impl SimObserver for LogObserver {
    fn on_target_event(&mut self, tick: Tick, event: &TargetEvent) {
        let verb = match event {
            TargetEvent::Claimed { .. } => "claimed",
            TargetEvent::Released { .. } => "released",
        };
        debug!("{tick}: {} {verb} {}", event.agent(), event.target());
    }

    fn on_tick_end(&mut self, s: &TickSummary) {
        if self.interval > 0 && s.tick.0 % self.interval == 0 {
            info!(
                "{}: roaming {} | approaching {} | dwelling {} | claims {} | releases {}",
                s.tick, s.roaming, s.approaching, s.dwelling, s.claimed, s.released,
            );
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        info!("simulation finished at {final_tick}");
    }
}
