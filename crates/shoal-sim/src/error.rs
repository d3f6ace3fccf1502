use shoal_core::{AgentId, ShoalError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent {agent} has invalid tuning: {source}")]
    AgentConfig {
        agent:  AgentId,
        #[source]
        source: ShoalError,
    },

    #[error(transparent)]
    Core(#[from] ShoalError),
}

pub type SimResult<T> = Result<T, SimError>;
