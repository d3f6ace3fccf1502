//! `shoal-sim`: tick loop orchestrator for the shoal fish-school simulation.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for each tick (dt seconds):
//!   ① Forces: snapshot the school and compute avoidance / alignment /
//!              cohesion for every agent that is not dwelling
//!              (parallel with the `parallel` feature).
//!   ② Apply: for each agent in ascending AgentId order:
//!                Dwelling      → advance the dwell timer, release on timeout
//!                otherwise     → resolve the closest available target,
//!                                move, reflect at the walls, turn,
//!                                claim the target on arrival
//!   ③ Report: TargetEvents, TickSummary and periodic snapshots go to the
//!              SimObserver.
//! ```
//!
//! Phase ① never observes a position written in phase ② of the same tick,
//! so the outcome does not depend on agent processing order.  Phase ② is the
//! only writer of the target pool, which serializes claims.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the force phase on Rayon's thread pool.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use shoal_agent::{AgentConfig, AgentStoreBuilder};
//! use shoal_core::{SimConfig, SimRng};
//! use shoal_sim::{NoopObserver, SimBuilder};
//! use shoal_target::TargetPool;
//!
//! let config = SimConfig::default();
//! let mut rng = SimRng::new(config.seed);
//! let agents = AgentStoreBuilder::new(AgentConfig::default())
//!     .scatter(100, &config.area, &mut rng)
//!     .build();
//! let mut sim = SimBuilder::new(config, agents)
//!     .targets(TargetPool::from_positions(points))
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod summary;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{LogObserver, NoopObserver, SimObserver};
pub use sim::Sim;
pub use summary::TickSummary;
