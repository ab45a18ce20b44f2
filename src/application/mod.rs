//! Application actions.

mod latest;

pub use latest::LatestAction;
