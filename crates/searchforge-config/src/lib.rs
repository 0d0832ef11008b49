//! Configuration system for SearchForge.
//!
//! Load search and solver configuration from TOML or YAML to control the
//! random seed, step budgets and edge-case policies without code changes.
//!
//! # Examples
//!
//! ```
//! use searchforge_config::{SearchForgeConfig, TrivialPathPolicy};
//!
//! let config = SearchForgeConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [search]
//!     trivial_path = "empty"
//!
//!     [local_search]
//!     step_count_limit = 500
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(7));
//! assert_eq!(config.search.trivial_path, TrivialPathPolicy::Empty);
//! assert_eq!(config.local_search.step_count_limit, 500);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use searchforge_config::SearchForgeConfig;
//!
//! let config = SearchForgeConfig::load("searchforge.toml").unwrap_or_default();
//! assert_eq!(config.local_search.step_count_limit, 1000);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use searchforge_core::SearchForgeError;

/// Default min-conflicts step cap.
pub const DEFAULT_STEP_COUNT_LIMIT: u64 = 1000;

/// Default RRT sampling budget.
pub const DEFAULT_RRT_MAX_ITERATIONS: u64 = 500;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for SearchForgeError {
    fn from(err: ConfigError) -> Self {
        SearchForgeError::Config(err.to_string())
    }
}

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchForgeConfig {
    /// Environment mode affecting reproducibility.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Graph/grid search configuration.
    #[serde(default)]
    pub search: SearchConfig,

    /// Local search (min-conflicts) configuration.
    #[serde(default)]
    pub local_search: LocalSearchConfig,

    /// Sampling planner configuration.
    #[serde(default)]
    pub rrt: RrtConfig,
}

impl SearchForgeConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the min-conflicts step cap.
    pub fn with_step_count_limit(mut self, limit: u64) -> Self {
        self.local_search.step_count_limit = limit;
        self
    }

    /// Sets the trivial-path policy for uninformed searches.
    pub fn with_trivial_path(mut self, policy: TrivialPathPolicy) -> Self {
        self.search.trivial_path = policy;
        self
    }

    /// Sets the node expansion cap for graph searches.
    pub fn with_expansion_limit(mut self, limit: u64) -> Self {
        self.search.expansion_limit = Some(limit);
        self
    }

    /// Sets the RRT sampling budget.
    pub fn with_rrt_max_iterations(mut self, iterations: u64) -> Self {
        self.rrt.max_iterations = iterations;
        self
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.local_search.step_count_limit == 0 {
            return Err(ConfigError::Invalid(
                "local_search.step_count_limit must be positive".to_string(),
            ));
        }
        if self.search.expansion_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "search.expansion_limit must be positive".to_string(),
            ));
        }
        if self.rrt.max_iterations == 0 {
            return Err(ConfigError::Invalid(
                "rrt.max_iterations must be positive".to_string(),
            ));
        }
        if self.environment_mode == EnvironmentMode::Reproducible && self.random_seed.is_none() {
            return Err(ConfigError::Invalid(
                "reproducible mode requires random_seed".to_string(),
            ));
        }
        Ok(())
    }
}

/// Environment mode affecting reproducibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Seeds from the OS unless a seed is given.
    #[default]
    NonReproducible,

    /// Requires an explicit seed.
    Reproducible,
}

/// What uninformed searches return when the initial state is the goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrivialPathPolicy {
    /// `[init_state]`, matching A*.
    #[default]
    SingleState,

    /// An empty path with zero counters.
    Empty,
}

/// Graph/grid search configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Result when the initial state already is the goal.
    #[serde(default)]
    pub trivial_path: TrivialPathPolicy,

    /// Maximum nodes to expand (None = unlimited).
    #[serde(default)]
    pub expansion_limit: Option<u64>,
}

/// Local search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LocalSearchConfig {
    /// Maximum repair steps before giving up.
    #[serde(default = "default_step_count_limit")]
    pub step_count_limit: u64,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            step_count_limit: DEFAULT_STEP_COUNT_LIMIT,
        }
    }
}

fn default_step_count_limit() -> u64 {
    DEFAULT_STEP_COUNT_LIMIT
}

/// Sampling planner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RrtConfig {
    /// Maximum random samples drawn.
    #[serde(default = "default_rrt_max_iterations")]
    pub max_iterations: u64,
}

impl Default for RrtConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_RRT_MAX_ITERATIONS,
        }
    }
}

fn default_rrt_max_iterations() -> u64 {
    DEFAULT_RRT_MAX_ITERATIONS
}

#[cfg(test)]
mod tests;
