use anyhow::{Context, Result};
use chrono::Duration as ChronoDuration;
use tokio_retry::{strategy::ExponentialBackoff, Retry};

use crate::config::{BodyConfig, TimeRange};
use crate::error::BodyError;
use crate::horizons::parse::parse_vector_table;
use crate::horizons::types::{BodyTable, StateSample};

const HORIZONS_API: &str = "https://ssd.jpl.nasa.gov/api/horizons.api";

/// Client for the JPL Horizons vector-table API.
pub struct HorizonsClient {
    http: reqwest::Client,
}

impl HorizonsClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .context("Failed to create Horizons HTTP client")?;
        Ok(Self { http })
    }

    /// Build the vector-table request URL for one body over a time range.
    pub fn vectors_url(target: &str, center: &str, range: &TimeRange, step: &str) -> String {
        format!(
            "{HORIZONS_API}?format=text&TABLE_TYPE=VECTORS\
             &COMMAND='{target}'&CENTER='{center}'\
             &START_TIME='{start}'&STOP_TIME='{stop}'&STEP_SIZE='{step}'\
             &OUT_UNITS=KM-S&VEC_TABLE=3",
            start = range.start,
            stop = range.stop,
        )
    }

    /// Fetch and parse one body's ephemeris table.
    ///
    /// Retries transient failures with exponential backoff (3 attempts).
    /// Timestamps are synthesized as `start + i * step`, matching the
    /// one-row-per-step contract of the vector table.
    pub async fn fetch_vectors(
        &self,
        body: &BodyConfig,
        range: &TimeRange,
    ) -> Result<BodyTable, BodyError> {
        let step_str = range
            .horizons_step()
            .map_err(BodyError::Configuration)?;
        let step = range
            .step_duration()
            .map_err(BodyError::Configuration)
            .and_then(|d| {
                ChronoDuration::from_std(d)
                    .map_err(|e| BodyError::Configuration(format!("step out of range: {}", e)))
            })?;
        let url = Self::vectors_url(&body.target, &body.center, range, &step_str);

        let retry_strategy = ExponentialBackoff::from_millis(100)
            .max_delay(std::time::Duration::from_secs(5))
            .take(3);

        let text = Retry::spawn(retry_strategy, || async {
            let response = self
                .http
                .get(&url)
                .send()
                .await
                .map_err(describe_request_error)?;
            let status = response.status();
            if !status.is_success() {
                return Err(format!("Horizons returned HTTP {}", status));
            }
            response
                .text()
                .await
                .map_err(|e| format!("failed to read response body: {}", e))
        })
        .await
        .map_err(|reason| BodyError::UpstreamFetch {
            body: body.name.clone(),
            reason,
        })?;

        let raw = parse_vector_table(&body.name, &text)?;
        if raw.is_empty() {
            return Err(BodyError::UpstreamFetch {
                body: body.name.clone(),
                reason: "response contained no parseable state rows".to_string(),
            });
        }

        let start = range.start_datetime();
        let table = raw
            .into_iter()
            .enumerate()
            .map(|(i, [x, y, z, vx, vy, vz])| StateSample {
                timestamp: start + step * (i as i32),
                x,
                y,
                z,
                vx,
                vy,
                vz,
            })
            .collect();

        Ok(table)
    }
}

fn describe_request_error(e: reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        format!("request failed: {}", e)
    }
}
