// Demo and load-test data: seeded random populations plus fixed fixtures.

pub mod fixtures;
pub mod generator;
pub mod handlers;
