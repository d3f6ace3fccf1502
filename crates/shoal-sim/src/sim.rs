//! The `Sim` struct and its tick loop.

use shoal_agent::AgentStore;
use shoal_core::{AgentId, SimClock, SimConfig, Tick};
use shoal_flock::{FlockContext, FlockForces, TargetEvent, advance_agent, flock_forces, sanitize_dt};
use shoal_target::TargetPool;

use crate::{SimObserver, TickSummary};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim` owns the school, the target pool and the clock, and drives the
/// two-phase tick:
///
/// 1. **Force phase** (read-only, optionally parallel with the `parallel`
///    feature): avoidance, alignment and cohesion for every non-dwelling
///    agent, computed from the school as it stood at the start of the tick.
/// 2. **Apply phase** (sequential, ascending `AgentId`): each agent resolves
///    its target against the *live* pool, moves, turns, and claims or
///    releases.  A target claimed by agent 3 is already gone when agent 4
///    looks.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (tick length, total ticks, area, …).
    pub config: SimConfig,

    /// Tick counter and accumulated simulated seconds.
    pub clock: SimClock,

    /// The school (SoA arrays).
    pub agents: AgentStore,

    /// Points of interest and their availability flags.
    pub targets: TargetPool,

    /// Dedicated worker pool when `config.num_threads` is set.
    #[cfg(feature = "parallel")]
    pub(crate) workers: Option<rayon::ThreadPool>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()` with fixed
    /// `config.dt_secs` steps, then call `on_sim_end`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let dt = self.config.dt_secs;
        while self.clock.current_tick < self.config.end_tick() {
            self.step(dt, observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks of `config.dt_secs` (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        let dt = self.config.dt_secs;
        for _ in 0..n {
            self.step(dt, observer);
        }
    }

    /// Advance every agent by `dt` seconds.
    ///
    /// This is the entry point for hosts that own the frame clock.  A
    /// negative or non-finite `dt` is treated as zero: dwell timers and
    /// positions stay put, but target resolution and claims still run.
    pub fn step<O: SimObserver>(&mut self, dt: f32, observer: &mut O) -> TickSummary {
        let now = self.clock.current_tick;
        let dt = sanitize_dt(dt);
        observer.on_tick_start(now);

        let events = self.process_tick(dt);

        let mut claimed = 0;
        let mut released = 0;
        for event in &events {
            match event {
                TargetEvent::Claimed { .. } => claimed += 1,
                TargetEvent::Released { .. } => released += 1,
            }
            observer.on_target_event(now, event);
        }

        let summary = TickSummary::collect(now, &self.agents, claimed, released);
        observer.on_tick_end(&summary);
        if self.config.output_interval_ticks > 0
            && now.0 % self.config.output_interval_ticks == 0
        {
            observer.on_snapshot(now, &self.agents, &self.targets);
        }

        self.clock.advance(dt);
        summary
    }

    /// The tick the next `step` call will process.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, dt: f32) -> Vec<TargetEvent> {
        // ── Phase 1: forces from the start-of-tick snapshot ───────────────
        let forces = self.compute_forces();

        // ── Phase 2: apply in ascending AgentId order ─────────────────────
        //
        // The only writer of the pool.  Claims made here are visible to every
        // later agent in the same pass.
        let mut events = Vec::new();
        for (i, agent_forces) in forces.iter().enumerate() {
            let agent = AgentId(i as u32);
            if let Some(event) = advance_agent(
                agent,
                &mut self.agents,
                &mut self.targets,
                agent_forces,
                &self.config.area,
                dt,
            ) {
                events.push(event);
            }
        }
        events
    }

    /// Flocking forces for every agent, indexed by `AgentId`.
    ///
    /// Dwelling agents get [`FlockForces::ZERO`]; they do not move this tick.
    /// With the `parallel` Cargo feature the scan runs on Rayon's thread pool
    /// (or the dedicated pool built from `config.num_threads`).
    fn compute_forces(&self) -> Vec<FlockForces> {
        let ctx = FlockContext::new(&self.agents);
        let forces_for = |agent: AgentId| {
            if ctx.movement(agent).is_dwelling() {
                FlockForces::ZERO
            } else {
                flock_forces(agent, &ctx)
            }
        };

        #[cfg(not(feature = "parallel"))]
        {
            self.agents.agent_ids().map(forces_for).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let count = self.agents.count as u32;
            let scan = || -> Vec<FlockForces> {
                (0..count).into_par_iter().map(AgentId).map(forces_for).collect()
            };
            match &self.workers {
                Some(pool) => pool.install(scan),
                None       => scan(),
            }
        }
    }
}
