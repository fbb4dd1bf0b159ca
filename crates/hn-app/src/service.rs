//! Create, read and update operations over the network store.

use std::str::FromStr;

use hn_color::Network;
use hn_graph::GnpParams;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::snapshot::{NetworkResponse, NetworkSnapshot};
use crate::store::{NetworkId, NetworkStore};

/// Parameters for creating a network. Missing fields use config defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateRequest {
    pub num_nodes: Option<i64>,
    pub edge_probability: Option<f64>,
    pub seed: Option<i64>,
}

/// Parameters for updating a network. Missing fields use config defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateRequest {
    pub hue_influence: Option<f64>,
    pub update_mode: Option<String>,
    pub steps: Option<u32>,
}

/// How neighbor hues are blended into a node's hue.
///
/// Additive blending is the only defined mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    #[default]
    Add,
}

impl FromStr for UpdateMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(UpdateMode::Add),
            other => Err(AppError::InvalidArgument(format!(
                "unsupported update_mode '{}' (supported: add)",
                other
            ))),
        }
    }
}

/// Validated update parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
struct UpdatePlan {
    hue_influence: f64,
    mode: UpdateMode,
    steps: u32,
}

/// The service: owns the store and the configuration.
pub struct NetworkService {
    store: NetworkStore,
    config: AppConfig,
}

impl Default for NetworkService {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl NetworkService {
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: NetworkStore::new(),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &NetworkStore {
        &self.store
    }

    /// Generate a new network and store it.
    ///
    /// Parameters are validated before an id is allocated.
    pub fn create(&self, request: &CreateRequest) -> AppResult<NetworkResponse> {
        let params = self.gnp_params(request)?;
        let network = Network::generate(params, request.seed.map(rng_seed))?;
        let snapshot = self.snapshot_of(&network);

        let id = self.store.insert(network)?;
        info!(
            network_id = %id,
            nodes = params.num_nodes,
            edges = snapshot.edges.len(),
            seed = ?request.seed,
            "network created"
        );

        Ok(NetworkResponse::new(id, snapshot))
    }

    /// Current state of a stored network.
    pub fn read(&self, network_id: &str) -> AppResult<NetworkResponse> {
        let id: NetworkId = network_id.parse()?;
        let network = self.store.snapshot(&id)?;
        debug!(network_id = %id, "network read");
        Ok(NetworkResponse::new(id, self.snapshot_of(&network)))
    }

    /// Apply the diffusion rule `steps` times under one exclusive section.
    pub fn update(&self, network_id: &str, request: &UpdateRequest) -> AppResult<NetworkResponse> {
        let id: NetworkId = network_id.parse()?;
        if !self.store.contains(&id)? {
            return Err(AppError::NetworkNotFound(id.to_string()));
        }
        let plan = self.update_plan(request)?;

        let network = self.store.with_network(&id, |network| {
            let mut updated = 0;
            for _ in 0..plan.steps {
                match plan.mode {
                    UpdateMode::Add => updated = network.update(plan.hue_influence)?.updated,
                }
            }
            debug!(
                network_id = %id,
                steps = plan.steps,
                hue_influence = plan.hue_influence,
                updated,
                "network updated"
            );
            Ok(network.clone())
        })?;

        Ok(NetworkResponse::new(id, self.snapshot_of(&network)))
    }

    fn snapshot_of(&self, network: &Network) -> NetworkSnapshot {
        NetworkSnapshot::from_network(network, self.config.layout.params())
    }

    fn gnp_params(&self, request: &CreateRequest) -> AppResult<GnpParams> {
        let defaults = &self.config.defaults;
        let num_nodes = request.num_nodes.unwrap_or(defaults.num_nodes);
        let edge_probability = request.edge_probability.unwrap_or(defaults.edge_probability);

        if num_nodes <= 0 {
            return Err(AppError::InvalidArgument(format!(
                "num_nodes must be positive (got {})",
                num_nodes
            )));
        }
        let max_nodes = self.config.limits.max_nodes;
        let num_nodes = usize::try_from(num_nodes)
            .ok()
            .filter(|&n| n <= max_nodes)
            .ok_or_else(|| {
                AppError::InvalidArgument(format!(
                    "num_nodes must be at most {} (got {})",
                    max_nodes, num_nodes
                ))
            })?;

        GnpParams::new(num_nodes, edge_probability).map_err(AppError::from)
    }

    fn update_plan(&self, request: &UpdateRequest) -> AppResult<UpdatePlan> {
        let hue_influence = request
            .hue_influence
            .unwrap_or(self.config.defaults.hue_influence);
        if !hue_influence.is_finite() {
            return Err(AppError::InvalidArgument(format!(
                "hue_influence must be finite (got {})",
                hue_influence
            )));
        }

        let mode = match &request.update_mode {
            Some(mode) => mode.parse()?,
            None => UpdateMode::default(),
        };

        let steps = request.steps.unwrap_or(1);
        let max_steps = self.config.limits.max_steps;
        if steps == 0 || steps > max_steps {
            return Err(AppError::InvalidArgument(format!(
                "steps must be within 1..={} (got {})",
                max_steps, steps
            )));
        }

        Ok(UpdatePlan {
            hue_influence,
            mode,
            steps,
        })
    }
}

/// Map a request seed onto the generator seed.
///
/// Bit-for-bit reinterpretation: every `i64` seed, negative ones included,
/// names a distinct generator stream.
fn rng_seed(seed: i64) -> u64 {
    seed as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_mode_parsing() {
        assert_eq!("add".parse::<UpdateMode>().unwrap(), UpdateMode::Add);
        assert_eq!(" ADD ".parse::<UpdateMode>().unwrap(), UpdateMode::Add);
        let err = "multiply".parse::<UpdateMode>().unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[test]
    fn create_uses_defaults() {
        let service = NetworkService::default();
        let response = service.create(&CreateRequest::default()).unwrap();
        assert_eq!(response.network.nodes.len(), 20);
    }

    #[test]
    fn create_rejects_bad_params_without_allocating() {
        let service = NetworkService::default();
        for request in [
            CreateRequest {
                num_nodes: Some(0),
                ..Default::default()
            },
            CreateRequest {
                num_nodes: Some(-4),
                ..Default::default()
            },
            CreateRequest {
                edge_probability: Some(1.5),
                ..Default::default()
            },
            CreateRequest {
                num_nodes: Some(1_000_000),
                ..Default::default()
            },
        ] {
            let err = service.create(&request).unwrap_err();
            assert!(matches!(err, AppError::InvalidArgument(_)), "{request:?}");
        }
        assert!(service.store().is_empty().unwrap());
    }

    #[test]
    fn negative_seeds_are_distinct_and_reproducible() {
        assert_eq!(rng_seed(0), 0);
        assert_eq!(rng_seed(-1), u64::MAX);
        assert_ne!(rng_seed(-1), rng_seed(1));

        let service = NetworkService::default();
        let request = CreateRequest {
            num_nodes: Some(12),
            edge_probability: Some(0.4),
            seed: Some(-1),
        };
        let first = service.create(&request).unwrap();
        let second = service.create(&request).unwrap();
        assert_eq!(first.network, second.network);
        assert_eq!(service.store().len().unwrap(), 2);
    }

    #[test]
    fn update_plan_validation() {
        let service = NetworkService::default();
        let plan = service.update_plan(&UpdateRequest::default()).unwrap();
        assert_eq!(plan.hue_influence, 0.1);
        assert_eq!(plan.steps, 1);
        assert_eq!(plan.mode, UpdateMode::Add);

        for request in [
            UpdateRequest {
                hue_influence: Some(f64::NAN),
                ..Default::default()
            },
            UpdateRequest {
                steps: Some(0),
                ..Default::default()
            },
            UpdateRequest {
                update_mode: Some("average".into()),
                ..Default::default()
            },
        ] {
            assert!(service.update_plan(&request).is_err());
        }
    }
}
