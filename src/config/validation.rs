use std::collections::HashSet;

use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.bodies.is_empty() {
        errors.push("bodies: at least one body must be configured".to_string());
    }

    let mut seen = HashSet::new();
    for (i, body) in config.bodies.iter().enumerate() {
        if body.name.trim().is_empty() {
            errors.push(format!("bodies[{}].name: must not be empty", i));
        }
        if body.target.trim().is_empty() {
            errors.push(format!("bodies[{}].target: must not be empty", i));
        }
        if !seen.insert(body.name.clone()) {
            errors.push(format!("bodies[{}].name: duplicate body '{}'", i, body.name));
        }
    }

    if config.range.start >= config.range.stop {
        errors.push(format!(
            "range: start ({}) must be before stop ({})",
            config.range.start, config.range.stop
        ));
    }
    if let Err(e) = config.range.horizons_step() {
        errors.push(format!("range.step: {}", e));
    }

    // hbar = 0 would make the disequilibrium transform divide by zero and
    // propagate silently. Fatal here.
    let c = &config.constants;
    if c.hbar == 0.0 {
        errors.push("constants.hbar: must be non-zero".to_string());
    }
    if c.omega_a <= 0.0 {
        errors.push("constants.omega_a: must be positive".to_string());
    }
    if c.ghz_radius <= 0.0 {
        errors.push("constants.ghz_radius: must be positive".to_string());
    }
    if c.ghz_scale_height <= 0.0 {
        errors.push("constants.ghz_scale_height: must be positive".to_string());
    }
    if c.ghz_fractal_dimension <= 0.0 {
        errors.push("constants.ghz_fractal_dimension: must be positive".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BodyConfig, TimeRange};
    use crate::scoring::PhysicalConstants;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn valid_config() -> Config {
        Config {
            bodies: vec![
                BodyConfig {
                    name: "Earth".to_string(),
                    target: "earth".to_string(),
                    center: "@sun".to_string(),
                },
                BodyConfig {
                    name: "Europa".to_string(),
                    target: "502".to_string(),
                    center: "@jupiter".to_string(),
                },
            ],
            range: TimeRange {
                start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                stop: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
                step: "1d".to_string(),
            },
            constants: PhysicalConstants::default(),
            output: PathBuf::from("data/life_map_combined.csv"),
            serve_addr: "127.0.0.1:8080".to_string(),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_zero_hbar_rejected() {
        let mut config = valid_config();
        config.constants.hbar = 0.0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("hbar"));
    }

    #[test]
    fn test_empty_bodies_rejected() {
        let mut config = valid_config();
        config.bodies.clear();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("at least one body"));
    }

    #[test]
    fn test_duplicate_body_names_rejected() {
        let mut config = valid_config();
        config.bodies[1].name = "Earth".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("duplicate"));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut config = valid_config();
        config.range.stop = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("range"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = valid_config();
        config.constants.hbar = 0.0; // Error 1
        config.constants.ghz_radius = -1.0; // Error 2
        config.range.step = "whenever".to_string(); // Error 3
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_negative_fractal_dimension_rejected() {
        let mut config = valid_config();
        config.constants.ghz_fractal_dimension = 0.0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("fractal"));
    }
}
