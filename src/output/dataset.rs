use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::scoring::ScoredRow;

/// One exported row: the raw state, the four derived metrics, and the body
/// tag. Field order here is the exported column order — downstream
/// consumers depend on it, so treat it as a wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub timestamp: DateTime<Utc>,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
    pub disequilibrium: f64,
    #[serde(rename = "zoneWeight")]
    pub zone_weight: f64,
    #[serde(rename = "lifeProbability")]
    pub life_probability: f64,
    #[serde(rename = "earthLikeness")]
    pub earth_likeness: f64,
    pub body: String,
}

impl DatasetRow {
    pub fn from_scored(body: &str, row: ScoredRow) -> Self {
        Self {
            timestamp: row.sample.timestamp,
            x: row.sample.x,
            y: row.sample.y,
            z: row.sample.z,
            vx: row.sample.vx,
            vy: row.sample.vy,
            vz: row.sample.vz,
            disequilibrium: row.disequilibrium,
            zone_weight: row.zone_weight,
            life_probability: row.life_probability,
            earth_likeness: row.earth_likeness,
            body: body.to_string(),
        }
    }
}

/// All bodies' scored rows concatenated, body-major, time-ascending within
/// each body. Built once per run and immutable afterward.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnifiedDataset {
    pub rows: Vec<DatasetRow>,
}

/// Per-body aggregate, derived from the dataset on demand, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySummary {
    pub body: String,
    pub rows: usize,
    pub mean_life_probability: f64,
    pub mean_earth_likeness: f64,
}

impl UnifiedDataset {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Arithmetic means of lifeProbability and earthLikeness per body, in
    /// order of first appearance (= configured body order).
    pub fn summarize(&self) -> Vec<BodySummary> {
        let mut summaries: Vec<BodySummary> = Vec::new();

        for row in &self.rows {
            match summaries.iter_mut().find(|s| s.body == row.body) {
                Some(summary) => {
                    summary.rows += 1;
                    summary.mean_life_probability += row.life_probability;
                    summary.mean_earth_likeness += row.earth_likeness;
                }
                None => summaries.push(BodySummary {
                    body: row.body.clone(),
                    rows: 1,
                    mean_life_probability: row.life_probability,
                    mean_earth_likeness: row.earth_likeness,
                }),
            }
        }

        for summary in &mut summaries {
            let n = summary.rows as f64;
            summary.mean_life_probability /= n;
            summary.mean_earth_likeness /= n;
        }

        summaries
    }
}

/// Write the dataset as CSV atomically so a concurrent `serve` never sees a
/// half-written file. Creates the parent directory if needed.
pub fn write_csv(path: &Path, dataset: &UnifiedDataset) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory {}", parent.display())
            })?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    {
        let mut writer = csv::Writer::from_writer(&mut file);
        for row in &dataset.rows {
            writer.serialize(row).context("Failed to serialize dataset row")?;
        }
        writer.flush().context("Failed to flush dataset CSV")?;
    }

    file.commit()
        .with_context(|| format!("Failed to save dataset at {}", path.display()))?;

    Ok(())
}

/// Reload an exported dataset as a flat list of records.
pub fn read_csv(path: &Path) -> Result<UnifiedDataset> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open dataset at {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: DatasetRow = record
            .with_context(|| format!("Failed to parse dataset row in {}", path.display()))?;
        rows.push(row);
    }

    Ok(UnifiedDataset { rows })
}
