pub mod constants;
pub mod engine;
pub mod transforms;

pub use constants::{PhysicalConstants, COMPOSITE_WEIGHT, SPECTRAL_DECAY, VELOCITY_DECAY};
pub use engine::{score_sample, score_table, ScoredRow};
pub use transforms::{disequilibrium, earth_likeness, life_probability, zone_weight};
