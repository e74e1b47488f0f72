// Matching core: pairwise scoring of engineers against positions, plus the
// query helpers the presentation layer uses to slice the resulting set.
// Nothing in here touches shared state; callers pass snapshots in.

pub mod engine;
pub mod filter;
pub mod handlers;
