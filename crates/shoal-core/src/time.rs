//! Simulation time model.
//!
//! # Design
//!
//! Time advances in discrete ticks, each carrying an explicit `dt` in
//! seconds supplied by the host (or the fixed `SimConfig::dt_secs` when the
//! simulation drives itself).  `Tick` counts steps; `SimClock` also sums the
//! seconds actually simulated, since hosts may feed a variable frame time.
//!
//! Nothing in the core reads a wall clock, so any run can be replayed
//! exactly from its `dt` sequence.

use std::fmt;

use crate::Area;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and the simulated seconds elapsed so far.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
    /// Sum of every `dt` fed to `advance`, in seconds.  Accumulated in `f64`
    /// so long runs at small `dt` do not drift.
    pub elapsed_secs: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick of `dt` seconds.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.elapsed_secs += dt as f64;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2} s)", self.current_tick, self.elapsed_secs)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Seconds per tick used by `Sim::run` / `Sim::run_ticks`.  Hosts that
    /// step with their own frame time ignore it.
    pub dt_secs: f32,

    /// Total ticks `Sim::run` simulates.
    pub total_ticks: u64,

    /// Master RNG seed for scatter spawning.  The same seed always produces
    /// the same initial scene.
    pub seed: u64,

    /// Worker thread count for the parallel force phase.  `None` uses Rayon's
    /// global pool.  Ignored without the `parallel` feature.
    pub num_threads: Option<usize>,

    /// Call `SimObserver::on_snapshot` every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// The volume every agent is kept inside.
    pub area: Area,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Total simulated seconds covered by `run`.
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        self.total_ticks as f64 * self.dt_secs as f64
    }
}

impl Default for SimConfig {
    /// 60 Hz for one simulated minute inside the default `Area`.
    fn default() -> Self {
        Self {
            dt_secs:               1.0 / 60.0,
            total_ticks:           3_600,
            seed:                  0,
            num_threads:           None,
            output_interval_ticks: 60,
            area:                  Area::default(),
        }
    }
}
