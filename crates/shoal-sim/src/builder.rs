//! Fluent builder for constructing a [`Sim`].

use log::{info, warn};
use shoal_agent::AgentStore;
use shoal_core::{AgentId, SimClock, SimConfig};
use shoal_target::TargetPool;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: tick length, total ticks, area, …
/// - [`AgentStore`]: from [`shoal_agent::AgentStoreBuilder`]
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                 |
/// |-----------------|-------------------------|
/// | `.targets(p)`   | `TargetPool::empty()`   |
///
/// # Example
///
/// ```rust,ignore
/// let agents = AgentStoreBuilder::new(AgentConfig::default())
///     .scatter(50, &config.area, &mut rng)
///     .build();
/// let mut sim = SimBuilder::new(config, agents)
///     .targets(TargetPool::from_positions(points))
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    agents:  AgentStore,
    targets: Option<TargetPool>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, agents: AgentStore) -> Self {
        Self { config, agents, targets: None }
    }

    /// Supply the points of interest.
    ///
    /// If not called, the pool is empty and every agent roams along its
    /// current heading with flocking applied.
    pub fn targets(mut self, targets: TargetPool) -> Self {
        self.targets = Some(targets);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    ///
    /// Rejects a non-finite area, a negative or non-finite `dt_secs`,
    /// `num_threads == Some(0)`, non-finite spawn poses and any agent whose
    /// [`AgentConfig`][shoal_agent::AgentConfig] fails validation.  A reach
    /// distance larger than the moving distance is accepted with a warning.
    pub fn build(self) -> SimResult<Sim> {
        self.config.area.validate()?;

        if !self.config.dt_secs.is_finite() || self.config.dt_secs < 0.0 {
            return Err(SimError::Config(format!(
                "dt_secs must be finite and non-negative, got {}",
                self.config.dt_secs,
            )));
        }
        if self.config.num_threads == Some(0) {
            return Err(SimError::Config("num_threads must be at least 1".into()));
        }

        // ── Per-agent checks ──────────────────────────────────────────────
        let mut unordered = 0usize;
        for agent in self.agents.agent_ids() {
            let i = agent.index();
            let config = &self.agents.config[i];
            config
                .validate()
                .map_err(|source| SimError::AgentConfig { agent, source })?;
            if !config.has_ordered_stopping_distances() {
                unordered += 1;
            }
            check_pose(agent, &self.agents)?;
        }
        if unordered > 0 {
            warn!(
                "{unordered} agent(s) have stopping_reach_distance > stopping_moving_distance; \
                 they claim targets without a final approach"
            );
        }

        let targets = self.targets.unwrap_or_else(TargetPool::empty);
        if targets.is_empty() {
            info!("no targets supplied; the school will roam");
        }

        #[cfg(feature = "parallel")]
        let workers = match self.config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::Config(format!("thread pool: {e}")))?,
            ),
            None => None,
        };

        info!(
            "built simulation: {} agents, {} targets, {} ticks of {:.4} s",
            self.agents.count,
            targets.len(),
            self.config.total_ticks,
            self.config.dt_secs,
        );

        Ok(Sim {
            clock:   SimClock::new(),
            config:  self.config,
            agents:  self.agents,
            targets,
            #[cfg(feature = "parallel")]
            workers,
        })
    }
}

fn check_pose(agent: AgentId, agents: &AgentStore) -> SimResult<()> {
    let i = agent.index();
    if !agents.position[i].is_finite() || !agents.orientation[i].is_finite() {
        return Err(SimError::Config(format!("{agent} has a non-finite spawn pose")));
    }
    Ok(())
}
