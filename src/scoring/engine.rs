use super::constants::PhysicalConstants;
use super::transforms::{disequilibrium, earth_likeness, life_probability, zone_weight};
use crate::horizons::types::StateSample;

/// A state sample extended with the four derived metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRow {
    pub sample: StateSample,
    pub disequilibrium: f64,
    pub zone_weight: f64,
    pub life_probability: f64,
    pub earth_likeness: f64,
}

/// Score a single sample, honoring the transform dependency order:
/// disequilibrium and zone weight first, then life probability (needs both),
/// then earth-likeness (needs disequilibrium).
///
/// Input wiring follows the reference model: S_env is the x coordinate,
/// D_KL is |vx|, A_env is |vy|; the zone weight reads (x, z).
pub fn score_sample(sample: &StateSample, constants: &PhysicalConstants) -> ScoredRow {
    let delta_j = disequilibrium(sample.x, sample.vx.abs(), sample.vy.abs(), constants);
    let ghz = zone_weight(sample.x, sample.z, constants);
    let p_life = life_probability(delta_j, ghz, constants);
    let iels = earth_likeness(delta_j, sample.vx, sample.vy);

    ScoredRow {
        sample: sample.clone(),
        disequilibrium: delta_j,
        zone_weight: ghz,
        life_probability: p_life,
        earth_likeness: iels,
    }
}

/// Score every sample of a body's table. Rows are independent; output order
/// matches input order.
pub fn score_table(table: &[StateSample], constants: &PhysicalConstants) -> Vec<ScoredRow> {
    table
        .iter()
        .map(|sample| score_sample(sample, constants))
        .collect()
}
