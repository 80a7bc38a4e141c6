//! Run configuration
//!
//! JSON documents supplying the mode set, token vocabulary, beta seeds,
//! and engine parameters. Every field is optional and falls back to the
//! built-in demo vocabulary; a malformed document is a fatal error for
//! the run, never partially applied.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::engine::EngineParams;

/// One run's worth of configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Selectable modes, in tie-break order.
    #[serde(default = "default_modes")]
    pub modes: Vec<String>,
    /// Declared token vocabulary.
    #[serde(default = "default_tokens")]
    pub tokens: Vec<String>,
    /// Initial association weights keyed `"mode|token"`.
    #[serde(default = "default_beta_seeds")]
    pub beta_seeds: BTreeMap<String, f64>,
    #[serde(default)]
    pub params: ParamsConfig,
}

/// Engine parameters plus the reward used by the `run` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamsConfig {
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_clamp_min")]
    pub clamp_min: f64,
    #[serde(default = "default_clamp_max")]
    pub clamp_max: f64,
    /// Reward applied after selection, conventionally in {-1, 0, +1}.
    #[serde(default = "default_reward")]
    pub reward: f64,
}

fn default_modes() -> Vec<String> {
    vec![
        "strict".to_string(),
        "lenient".to_string(),
        "balanced".to_string(),
    ]
}

fn default_tokens() -> Vec<String> {
    vec![
        crate::guard::TOKEN_THERAPY_DRIFT.to_string(),
        crate::guard::TOKEN_ASSISTANT_TAKEOVER.to_string(),
        crate::guard::TOKEN_IGNORED_WANTS.to_string(),
    ]
}

fn default_beta_seeds() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("strict|therapy-drift".to_string(), 0.9),
        ("strict|assistant-takeover".to_string(), 0.9),
        ("lenient|ignored-wants".to_string(), -0.5),
        ("balanced|ignored-wants".to_string(), 0.3),
    ])
}

fn default_learning_rate() -> f64 {
    EngineParams::default().learning_rate
}

fn default_clamp_min() -> f64 {
    EngineParams::default().clamp_min
}

fn default_clamp_max() -> f64 {
    EngineParams::default().clamp_max
}

fn default_reward() -> f64 {
    1.0
}

impl Default for ParamsConfig {
    fn default() -> Self {
        Self {
            learning_rate: default_learning_rate(),
            clamp_min: default_clamp_min(),
            clamp_max: default_clamp_max(),
            reward: default_reward(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            modes: default_modes(),
            tokens: default_tokens(),
            beta_seeds: default_beta_seeds(),
            params: ParamsConfig::default(),
        }
    }
}

impl RunConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: RunConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Engine parameters for this run.
    pub fn engine_params(&self, verbose: bool) -> EngineParams {
        EngineParams {
            learning_rate: self.params.learning_rate,
            clamp_min: self.params.clamp_min,
            clamp_max: self.params.clamp_max,
            verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gets_all_defaults() {
        let config: RunConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.modes, default_modes());
        assert_eq!(config.tokens, default_tokens());
        assert_eq!(config.beta_seeds, default_beta_seeds());
        assert_eq!(config.params.learning_rate, 0.1);
        assert_eq!(config.params.reward, 1.0);
    }

    #[test]
    fn test_partial_params_keep_remaining_defaults() {
        let config: RunConfig =
            serde_json::from_str(r#"{"params": {"learning_rate": 0.2, "reward": -1.0}}"#).unwrap();
        assert_eq!(config.params.learning_rate, 0.2);
        assert_eq!(config.params.reward, -1.0);
        assert_eq!(config.params.clamp_min, -2.0);
        assert_eq!(config.params.clamp_max, 2.0);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(serde_json::from_str::<RunConfig>("{not json").is_err());
        assert!(serde_json::from_str::<RunConfig>(r#"{"modes": "not-a-list"}"#).is_err());
    }
}
