//! Service configuration, loaded from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Top-level configuration. Every field has a default, so an empty file
/// (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub defaults: DefaultsConfig,
    pub limits: LimitsConfig,
    pub layout: LayoutConfig,
}

/// Values used when a request leaves a parameter out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub num_nodes: i64,
    pub edge_probability: f64,
    pub hue_influence: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            num_nodes: 20,
            edge_probability: 0.2,
            hue_influence: 0.1,
        }
    }
}

/// Upper bounds that keep every request bounded in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_nodes: usize,
    pub max_steps: u32,
    pub max_layout_iterations: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_nodes: 2_000,
            max_steps: 1_000,
            max_layout_iterations: 500,
        }
    }
}

/// Force-directed layout settings for snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub seed: u64,
    pub iterations: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let params = hn_graph::LayoutParams::default();
        Self {
            seed: params.seed,
            iterations: params.iterations,
        }
    }
}

impl LayoutConfig {
    pub fn params(&self) -> hn_graph::LayoutParams {
        hn_graph::LayoutParams {
            seed: self.seed,
            iterations: self.iterations,
        }
    }
}

impl AppConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: AppConfig = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.limits.max_nodes == 0 {
            return Err(AppError::Config("limits.max_nodes must be positive".into()));
        }
        if self.limits.max_steps == 0 {
            return Err(AppError::Config("limits.max_steps must be positive".into()));
        }
        if self.layout.iterations > self.limits.max_layout_iterations {
            return Err(AppError::Config(format!(
                "layout.iterations must be at most {} (got {})",
                self.limits.max_layout_iterations, self.layout.iterations
            )));
        }
        let d = &self.defaults;
        if d.num_nodes <= 0 || d.num_nodes as u64 > self.limits.max_nodes as u64 {
            return Err(AppError::Config(format!(
                "defaults.num_nodes must be within 1..={} (got {})",
                self.limits.max_nodes, d.num_nodes
            )));
        }
        if !(0.0..=1.0).contains(&d.edge_probability) {
            return Err(AppError::Config(format!(
                "defaults.edge_probability must be within [0, 1] (got {})",
                d.edge_probability
            )));
        }
        if !d.hue_influence.is_finite() {
            return Err(AppError::Config(
                "defaults.hue_influence must be finite".into(),
            ));
        }
        Ok(())
    }
}

/// Load configuration from a YAML file.
pub fn load_config(path: &Path) -> AppResult<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    AppConfig::from_yaml_str(&content)
}
