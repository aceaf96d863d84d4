//! Configuration for the mapping and planning pipeline.
//!
//! Configuration is loaded from YAML. Every field carries an individual
//! serde default, so a partial file (or none at all) yields a complete,
//! usable configuration. Values are validated once at construction time;
//! the rest of the crate assumes a valid configuration and never
//! re-checks.

mod defaults;
mod error;
mod ghana;
mod map;
mod planner;

pub use error::ConfigError;
pub use ghana::GhanaConfig;
pub use map::MapSection;
pub use planner::PlannerSection;
