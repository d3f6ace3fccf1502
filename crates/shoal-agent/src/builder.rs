//! Fluent builder for constructing an `AgentStore`.
//!
//! # Usage
//!
//! ```rust
//! use shoal_agent::{AgentConfig, AgentStoreBuilder};
//! use shoal_core::{Area, Quat, SimRng, Vec3};
//!
//! let mut rng = SimRng::new(42);
//! let store = AgentStoreBuilder::new(AgentConfig::default())
//!     .spawn(Vec3::ZERO, Quat::IDENTITY)
//!     .scatter(99, &Area::default(), &mut rng)
//!     .build();
//!
//! assert_eq!(store.count, 100);
//! ```

use std::sync::Arc;

use shoal_core::{Area, Quat, SimRng, Vec3};

use crate::{AgentConfig, AgentStore};

/// Fluent builder for [`AgentStore`].
///
/// Every agent starts Roaming with no target and a zero dwell timer.
pub struct AgentStoreBuilder {
    default_config: Arc<AgentConfig>,
    position:       Vec<Vec3>,
    orientation:    Vec<Quat>,
    config:         Vec<Arc<AgentConfig>>,
}

impl AgentStoreBuilder {
    /// Create a builder whose agents use `config` unless told otherwise.
    pub fn new(config: AgentConfig) -> Self {
        Self::shared(Arc::new(config))
    }

    /// Like [`new`](Self::new) but reuses an existing shared config.
    pub fn shared(config: Arc<AgentConfig>) -> Self {
        Self {
            default_config: config,
            position:       Vec::new(),
            orientation:    Vec::new(),
            config:         Vec::new(),
        }
    }

    /// Add one agent with the default config.
    pub fn spawn(self, position: Vec3, orientation: Quat) -> Self {
        let config = Arc::clone(&self.default_config);
        self.spawn_with(position, orientation, config)
    }

    /// Add one agent with its own config.
    pub fn spawn_with(mut self, position: Vec3, orientation: Quat, config: Arc<AgentConfig>) -> Self {
        self.position.push(position);
        self.orientation.push(orientation);
        self.config.push(config);
        self
    }

    /// Add `count` agents at uniform random positions inside `area`, each
    /// with a random heading.
    pub fn scatter(mut self, count: usize, area: &Area, rng: &mut SimRng) -> Self {
        for _ in 0..count {
            let position = rng.point_in(area);
            let heading  = rng.heading();
            self = self.spawn(position, heading);
        }
        self
    }

    /// Number of agents added so far.
    pub fn len(&self) -> usize {
        self.position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    /// Construct the `AgentStore`.
    pub fn build(self) -> AgentStore {
        AgentStore::new(self.position, self.orientation, self.config)
    }
}
