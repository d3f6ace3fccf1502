//! `shoal-agent`: per-agent tuning and Structure-of-Arrays agent storage.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`config`]      | `AgentConfig`: immutable motion and flocking tuning      |
//! | [`state`]       | `MovementState`: Roaming / Approaching / Dwelling        |
//! | [`store`]       | `AgentStore` (SoA arrays), `AgentPose`                    |
//! | [`builder`]     | `AgentStoreBuilder` (fluent construction)                 |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on all public value types. |

pub mod builder;
pub mod config;
pub mod state;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use config::AgentConfig;
pub use state::MovementState;
pub use store::{AgentPose, AgentStore};
