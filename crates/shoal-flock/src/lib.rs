//! `shoal-flock`: the per-agent decision-and-motion update.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`context`]  | `FlockContext<'a>`: read-only previous-tick view of the school |
//! | [`forces`]   | `FlockForces` and the all-pairs neighbour scan                 |
//! | [`steering`] | target direction, fallback heading, move-direction mixing      |
//! | [`step`]     | `advance_agent`: one agent, one tick                          |
//! | [`event`]    | `TargetEvent` (claimed / released)                             |
//!
//! # Design notes
//!
//! A tick is split in two, mirroring the simulation loop in `shoal-sim`:
//!
//! 1. **Force phase** (read-only, may run in parallel): for every agent that
//!    is not dwelling, [`flock_forces`] scans the whole school through a
//!    [`FlockContext`].  Nothing is mutated, so every agent sees the same
//!    previous-tick state regardless of processing order.
//!
//! 2. **Apply phase** (sequential, ascending `AgentId`): [`advance_agent`]
//!    runs the dwell timer, resolves the closest available target against
//!    the live pool, moves, reflects, turns, and claims.  Because this phase
//!    owns `&mut TargetPool`, two agents can never claim the same target.
//!
//! The neighbour scan is O(n²) per tick with no spatial index.

pub mod context;
pub mod event;
pub mod forces;
pub mod steering;
pub mod step;


pub use context::FlockContext;
pub use event::TargetEvent;
pub use forces::{FlockForces, flock_forces};
pub use steering::{mix_direction, seek_direction};
pub use step::{advance_agent, sanitize_dt};
