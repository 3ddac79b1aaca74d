//! Broodmind: a per-frame Zerg decision policy.
//!
//! The host framework owns the game; this crate reads its per-frame snapshot,
//! runs a fixed list of policies over it and submits the resulting action
//! requests. The modules are exposed for the driver binary, integration
//! tests and benchmarks.

pub mod agent;
pub mod evaluator;
pub mod game;
pub mod host;
pub mod policy;
