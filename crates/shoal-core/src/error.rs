//! Framework error type.
//!
//! Errors only ever come out of construction and validation.  The per-tick
//! path handles degenerate input by policy and never returns an error.

use thiserror::Error;

use crate::{AgentId, TargetId};

/// The top-level error type for `shoal-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum ShoalError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("duplicate target id {0}")]
    DuplicateTarget(TargetId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `shoal-*` crates.
pub type ShoalResult<T> = Result<T, ShoalError>;
