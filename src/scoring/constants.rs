use serde::{Deserialize, Serialize};

/// Physical constants feeding the transforms.
///
/// Passed explicitly into every transform rather than living in global
/// state, so tests can run with alternate values. Field defaults are the
/// reference calibration, applied per field so a config may override just
/// one of them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PhysicalConstants {
    /// Reduced Planck constant ħ (J·s). Must be non-zero; δJ divides by it.
    #[serde(default = "default_hbar")]
    pub hbar: f64,

    /// Coupling constant λ in the δJ formula.
    #[serde(default = "default_lambda")]
    pub lambda: f64,

    /// Ω_A frequency (Hz) scaling the life-probability decay.
    #[serde(default = "default_omega_a")]
    pub omega_a: f64,

    /// Characteristic galactic radius D (kpc) for the zone weight.
    #[serde(default = "default_ghz_radius")]
    pub ghz_radius: f64,

    /// Galactic disk scale height H (kpc).
    #[serde(default = "default_ghz_scale_height")]
    pub ghz_scale_height: f64,

    /// Fractal dimension D_f of the stellar distribution.
    #[serde(default = "default_ghz_fractal_dimension")]
    pub ghz_fractal_dimension: f64,
}

fn default_hbar() -> f64 {
    1.054e-34
}

fn default_lambda() -> f64 {
    1e-36
}

fn default_omega_a() -> f64 {
    7.83
}

fn default_ghz_radius() -> f64 {
    8.0
}

fn default_ghz_scale_height() -> f64 {
    0.3
}

fn default_ghz_fractal_dimension() -> f64 {
    1.8
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            hbar: default_hbar(),
            lambda: default_lambda(),
            omega_a: default_omega_a(),
            ghz_radius: default_ghz_radius(),
            ghz_scale_height: default_ghz_scale_height(),
            ghz_fractal_dimension: default_ghz_fractal_dimension(),
        }
    }
}

/// Earth-likeness decay rate applied to δJ (k1).
pub const SPECTRAL_DECAY: f64 = 100.0;

/// Earth-likeness decay rate applied to the velocity proxies (k2).
pub const VELOCITY_DECAY: f64 = 1e-3;

/// Weight applied once to the sum of the three earth-likeness sub-scores.
/// Deliberately 0.33 and not 1/3: the composite saturates at 0.99, which is
/// part of the inherited calibration. Do not "fix" this.
pub const COMPOSITE_WEIGHT: f64 = 0.33;
