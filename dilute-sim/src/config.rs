use std::fs;
use std::path::Path;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::error::Result;
use crate::geometry::Boundary;

/// Slack when deciding whether the last concentration point is inside the
/// sweep, absorbing float error in `initial + k * step`.
const CONCENTRATION_SLACK: f64 = 1e-3;

fn default_seed() -> u64 {
    42
}

fn validate_lattice_config(cfg: &LatticeConfig) -> std::result::Result<(), ValidationError> {
    if cfg.layers == Some(0) {
        return Err(ValidationError::new("lattice.layers must be >= 1"));
    }
    Ok(())
}

/// Box dimensions and boundary mode shared by every crystal type in a run.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_lattice_config"))]
pub struct LatticeConfig {
    #[validate(range(min = 1))]
    pub size: usize,
    /// Extent along z; defaults to `size`.
    #[serde(default)]
    pub layers: Option<usize>,
    #[serde(default)]
    pub boundary: Boundary,
}

impl LatticeConfig {
    pub fn layers(&self) -> usize {
        self.layers.unwrap_or(self.size)
    }

    pub fn volume(&self) -> usize {
        self.size * self.size * self.layers()
    }
}

/// Optional Wolff relaxation applied to every configuration after dilution.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WolffConfig {
    pub temperature: f64,
    pub steps: usize,
}

fn validate_simulation_config(cfg: &SimulationConfig) -> std::result::Result<(), ValidationError> {
    if cfg.initial_concentration > cfg.final_concentration {
        return Err(ValidationError::new(
            "initial_concentration must be <= final_concentration",
        ));
    }
    if !(cfg.concentration_step > 0.0) {
        return Err(ValidationError::new("concentration_step must be > 0"));
    }
    if let Some(w) = cfg.wolff {
        if !(w.temperature > 0.0) {
            return Err(ValidationError::new("wolff.temperature must be > 0"));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_simulation_config"))]
pub struct SimulationConfig {
    #[validate(range(min = 0.0, max = 1.0))]
    pub initial_concentration: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub final_concentration: f64,
    pub concentration_step: f64,
    /// Configurations averaged per concentration point.
    #[validate(range(min = 1))]
    pub num_configurations: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub wolff: Option<WolffConfig>,
}

impl SimulationConfig {
    /// Concentration points `initial + k * step` up to `final` (inclusive,
    /// within a small slack).
    pub fn concentrations(&self) -> Vec<f64> {
        let mut points = Vec::new();
        let mut k = 0usize;
        loop {
            let c = self.initial_concentration + k as f64 * self.concentration_step;
            if c > self.final_concentration + CONCENTRATION_SLACK {
                break;
            }
            points.push(c.min(1.0));
            k += 1;
        }
        points
    }
}

/// Run configuration, read from a JSON document.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Config {
    #[validate]
    pub lattice: LatticeConfig,
    #[validate]
    pub simulation: SimulationConfig,
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn lattice_volume(&self) -> usize {
        self.lattice.volume()
    }
}
