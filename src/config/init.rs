use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::{ensure_config_dir, get_config_path};

const DEFAULT_CONFIG: &str = "\
# life-map configuration
#
# Bodies are fetched from JPL Horizons and scored in this order.
# `target` is a Horizons COMMAND value: a name (\"earth\") or NAIF ID (\"502\").
# `center` defaults to \"@sun\".
bodies:
  - name: Earth
    target: earth
  - name: Mars
    target: mars
  - name: Europa
    target: \"502\"
    center: \"@jupiter\"

range:
  start: 2025-01-01
  stop: 2025-02-01
  step: 1d

# Physical constants for the transforms. Omit to use the reference values:
# constants:
#   hbar: 1.054e-34
#   lambda: 1.0e-36
#   omega_a: 7.83
#   ghz_radius: 8.0
#   ghz_scale_height: 0.3
#   ghz_fractal_dimension: 1.8

output: data/life_map_combined.csv
serve_addr: 127.0.0.1:8080
";

/// Write a commented default config file.
///
/// Uses the default config path unless one is given. Refuses to overwrite
/// an existing file. Returns the path written.
pub fn write_default_config(path: Option<PathBuf>) -> Result<PathBuf> {
    let config_path = match path {
        Some(p) => p,
        None => {
            ensure_config_dir()?;
            get_config_path()
        }
    };

    if config_path.exists() {
        anyhow::bail!("Config file already exists at {}", config_path.display());
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    Ok(config_path)
}
