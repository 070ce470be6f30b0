use anyhow::Result;

use crate::config::Config;
use crate::error::BodyError;
use crate::horizons::{BodyTable, HorizonsClient};
use crate::output::{DatasetRow, UnifiedDataset};
use crate::scoring::{score_table, PhysicalConstants};

/// Score an ordered list of `(name, table)` pairs into one unified dataset.
///
/// Pure phase of the pipeline: runs the transform chain over every body and
/// concatenates the results body-major, time-ascending within each body.
/// Adding a body is a data change, not a code change.
pub fn score_bodies(
    bodies: &[(String, BodyTable)],
    constants: &PhysicalConstants,
) -> UnifiedDataset {
    let mut rows = Vec::with_capacity(bodies.iter().map(|(_, t)| t.len()).sum());

    for (name, table) in bodies {
        for scored in score_table(table, constants) {
            rows.push(DatasetRow::from_scored(name, scored));
        }
    }

    UnifiedDataset { rows }
}

/// Fetch every configured body and score the ones that succeed.
///
/// Bodies are processed sequentially in config order. A body whose fetch or
/// parse fails is skipped with a warning and its typed error collected; the
/// run only fails outright when no body succeeds.
///
/// This is called from main.rs for `run` and is the single place where the
/// external ephemeris producer meets the scoring core.
pub async fn run_pipeline(
    client: &HorizonsClient,
    config: &Config,
    verbose: bool,
) -> Result<(UnifiedDataset, Vec<BodyError>)> {
    let mut tables: Vec<(String, BodyTable)> = Vec::new();
    let mut failures: Vec<BodyError> = Vec::new();

    for body in &config.bodies {
        if verbose {
            eprintln!(
                "Fetching {} ({} around {})...",
                body.name, body.target, body.center
            );
        }

        match client.fetch_vectors(body, &config.range).await {
            Ok(table) => {
                if verbose {
                    eprintln!("  {} samples", table.len());
                }
                tables.push((body.name.clone(), table));
            }
            Err(e) => {
                eprintln!("Warning: skipping {}: {}", body.name, e);
                failures.push(e);
            }
        }
    }

    if tables.is_empty() && !config.bodies.is_empty() {
        anyhow::bail!("All bodies failed. Check your network connection and body identifiers.");
    }

    let dataset = score_bodies(&tables, &config.constants);

    if verbose {
        eprintln!(
            "Scored {} rows across {} bodies",
            dataset.len(),
            tables.len()
        );
    }

    Ok((dataset, failures))
}
