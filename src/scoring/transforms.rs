//! The four scalar transforms. All are pure, row-local, and defined for any
//! finite input; the only precondition (ħ ≠ 0) is enforced by config
//! validation before a pipeline run starts.

use super::constants::{PhysicalConstants, COMPOSITE_WEIGHT, SPECTRAL_DECAY, VELOCITY_DECAY};

/// Informational disequilibrium: δJ = |S_env/ħ + D_KL − λ·A_env|.
///
/// Unbounded and non-negative.
pub fn disequilibrium(s_env: f64, d_kl: f64, a_env: f64, constants: &PhysicalConstants) -> f64 {
    (s_env / constants.hbar + d_kl - constants.lambda * a_env).abs()
}

/// Galactic-habitable-zone weight: A_F = exp(−(R/D)^D_f − (|z|/H)^D_f).
///
/// In (0, 1] for finite non-negative inputs; exactly 1 at the origin. The
/// absolute value of `z` keeps the exponent base non-negative, which matters
/// because D_f is non-integer.
pub fn zone_weight(r: f64, z: f64, constants: &PhysicalConstants) -> f64 {
    let d_f = constants.ghz_fractal_dimension;
    let radial = (r / constants.ghz_radius).powf(d_f);
    let vertical = (z.abs() / constants.ghz_scale_height).powf(d_f);
    (-radial - vertical).exp()
}

/// Life probability: exp(−|δJ| / (ħ·Ω_A)) · A_F, clamped to [0, 1].
///
/// The clamp is a hard contract; callers rely on the output staying in
/// [0, 1] no matter how large δJ is.
pub fn life_probability(delta_j: f64, zone_weight: f64, constants: &PhysicalConstants) -> f64 {
    let raw = (-delta_j.abs() / (constants.hbar * constants.omega_a)).exp() * zone_weight;
    raw.clamp(0.0, 1.0)
}

/// Earth-likeness score: three exponential sub-scores (spectral from δJ,
/// magnetic from vx, infrared from vy) combined with a single 0.33 weight
/// and clamped to [0, 1].
pub fn earth_likeness(delta_j: f64, vx: f64, vy: f64) -> f64 {
    let spectral = (-delta_j.abs() * SPECTRAL_DECAY).exp();
    let magnetic = (-vx.abs() * VELOCITY_DECAY).exp();
    let infrared = (-vy.abs() * VELOCITY_DECAY).exp();
    (COMPOSITE_WEIGHT * (spectral + magnetic + infrared)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> PhysicalConstants {
        PhysicalConstants::default()
    }

    #[test]
    fn test_disequilibrium_zero_inputs() {
        assert_eq!(disequilibrium(0.0, 0.0, 0.0, &defaults()), 0.0);
    }

    #[test]
    fn test_disequilibrium_reference_scenario() {
        // S_env = ħ cancels the division; D_KL and A_env contribute nothing.
        let c = defaults();
        let dj = disequilibrium(1.054e-34, 0.0, 0.0, &c);
        assert!((dj - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disequilibrium_non_negative() {
        let c = defaults();
        assert!(disequilibrium(-5.0e-34, 0.0, 1e30, &c) >= 0.0);
    }

    #[test]
    fn test_zone_weight_is_one_at_origin() {
        assert_eq!(zone_weight(0.0, 0.0, &defaults()), 1.0);
    }

    #[test]
    fn test_zone_weight_reference_scenario() {
        // R = D, z = 0 collapses the exponent to -1.
        let w = zone_weight(8.0, 0.0, &defaults());
        assert!((w - (-1.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_zone_weight_in_unit_interval() {
        let c = defaults();
        for &(r, z) in &[(0.0, 0.0), (1.0, 0.1), (8.0, 0.3), (50.0, 2.0), (1e4, 1e3)] {
            let w = zone_weight(r, z, &c);
            assert!(w > 0.0 && w <= 1.0, "zone_weight({}, {}) = {}", r, z, w);
        }
    }

    #[test]
    fn test_zone_weight_negative_z_uses_magnitude() {
        let c = defaults();
        let above = zone_weight(4.0, 0.2, &c);
        let below = zone_weight(4.0, -0.2, &c);
        assert_eq!(above, below);
        assert!(below.is_finite());
    }

    #[test]
    fn test_zone_weight_decays_with_distance() {
        let c = defaults();
        assert!(zone_weight(16.0, 0.0, &c) < zone_weight(8.0, 0.0, &c));
        assert!(zone_weight(8.0, 0.6, &c) < zone_weight(8.0, 0.0, &c));
    }

    #[test]
    fn test_life_probability_bounded() {
        let c = defaults();
        for &(dj, ghz) in &[(0.0, 1.0), (1e10, 1.0), (0.0, 0.0), (1.0, 0.5)] {
            let p = life_probability(dj, ghz, &c);
            assert!((0.0..=1.0).contains(&p), "P_life({}, {}) = {}", dj, ghz, p);
        }
    }

    #[test]
    fn test_life_probability_clamps_oversized_zone_weight() {
        // The formula cannot exceed 1 with a zone weight in [0, 1], but the
        // clamp must hold even for out-of-range collaborator input.
        let p = life_probability(0.0, 5.0, &defaults());
        assert_eq!(p, 1.0);
    }

    #[test]
    fn test_life_probability_large_delta_j_vanishes() {
        // Any macroscopic δJ divided by ħ·Ω_A underflows exp to zero.
        let p = life_probability(1.0, 1.0, &defaults());
        assert_eq!(p, 0.0);
    }

    #[test]
    fn test_earth_likeness_bounded() {
        for &(dj, vx, vy) in &[(0.0, 0.0, 0.0), (1e6, 1e6, 1e6), (0.01, 30.0, 5.0)] {
            let s = earth_likeness(dj, vx, vy);
            assert!((0.0..=1.0).contains(&s), "IELS({}, {}, {}) = {}", dj, vx, vy, s);
        }
    }

    #[test]
    fn test_earth_likeness_saturates_below_one() {
        // At perfect sub-scores the composite is 0.33 * 3 = 0.99, not 1.
        // Inherited calibration; a change here breaks compatibility.
        let s = earth_likeness(0.0, 0.0, 0.0);
        assert!((s - 0.99).abs() < 1e-12);
    }

    #[test]
    fn test_earth_likeness_velocity_sign_irrelevant() {
        assert_eq!(
            earth_likeness(0.0, 29.8, -5.2),
            earth_likeness(0.0, -29.8, 5.2)
        );
    }
}
