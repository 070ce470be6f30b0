use chrono::{DateTime, Utc};

/// One ephemeris timestep for one body.
///
/// Positions are in km, velocities in km/s (Horizons `OUT_UNITS=KM-S`).
/// Immutable once produced by the fetch layer.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSample {
    pub timestamp: DateTime<Utc>,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
}

/// Time-ordered samples for a single body, one per step, timestamps
/// strictly increasing and evenly spaced at the configured step size.
pub type BodyTable = Vec<StateSample>;
