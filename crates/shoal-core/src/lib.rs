//! `shoal-core`: foundational types for the `shoal` fish-school simulation.
//!
//! This crate is a dependency of every other `shoal-*` crate.  It has no
//! `shoal-*` dependencies and few external ones (`glam`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `TargetId`                                 |
//! | [`area`]        | `Area`: the axis-aligned box agents are kept inside  |
//! | [`heading`]     | `forward`, `look_rotation`, `turn_towards`            |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `SimRng` (seeded, simulation-level)                   |
//! | [`error`]       | `ShoalError`, `ShoalResult`                           |
//!
//! `glam`'s [`Vec3`] and [`Quat`] are re-exported so downstream crates agree
//! on one math library version.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod area;
pub mod error;
pub mod heading;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use area::Area;
pub use error::{ShoalError, ShoalResult};
pub use glam::{Quat, Vec3};
pub use heading::{forward, look_rotation, turn_towards};
pub use ids::{AgentId, TargetId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
