//! `shoal-target`: the interest points agents seek, claim and dwell at.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`target`]  | `Target`: identity, position, availability flag             |
//! | [`pool`]    | `TargetPool`: id-keyed store with claim/release and lookup  |
//!
//! # Claim model
//!
//! A target is *available* until an agent arrives at it.  The arriving agent
//! claims it ([`TargetPool::deactivate`]) and releases it
//! ([`TargetPool::activate`]) when its dwell timer runs out.  Lookups that
//! miss (unknown id, empty pool) are silent no-ops: the pool is a best-effort
//! shared resource, not a strict contract.

pub mod pool;
pub mod target;


pub use pool::TargetPool;
pub use target::Target;
