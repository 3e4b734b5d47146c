/// captime library crate — exposes internal modules for integration tests.
///
/// All modules are re-exported publicly so that `tests/` integration tests
/// can access the rate, duration, and report functions via `use captime::rate::*`.
pub mod duration;
pub mod error;
pub mod figures;
pub mod rate;
pub mod report;
