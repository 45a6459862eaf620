//! Solver configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constructive::InitialTour;
use crate::error::{Result, TspError};
use crate::local_search::SelectionPolicy;

/// Configuration for [`TwoOptSolver`](super::TwoOptSolver).
///
/// The default reproduces the plain reference run: identity start,
/// first-improvement, no budget.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::solver::SolverConfig;
/// use u_tsp::local_search::SelectionPolicy;
///
/// let config = SolverConfig::default()
///     .with_policy(SelectionPolicy::BestImprovement)
///     .with_max_iterations(10_000)
///     .with_time_limit(Duration::from_secs(5));
/// assert_eq!(config.max_iterations, Some(10_000));
/// assert_eq!(config.time_limit(), Some(Duration::from_secs(5)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Move selection policy for each pass.
    pub policy: SelectionPolicy,
    /// How the starting tour is built.
    pub initial_tour: InitialTour,
    /// Maximum number of accepted moves, if any.
    pub max_iterations: Option<usize>,
    /// Wall-clock budget in seconds, if any.
    pub time_limit_secs: Option<f64>,
}

impl SolverConfig {
    /// Sets the move selection policy.
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the initial tour strategy.
    pub fn with_initial_tour(mut self, initial_tour: InitialTour) -> Self {
        self.initial_tour = initial_tour;
        self
    }

    /// Caps the number of accepted moves.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Caps the wall-clock time spent searching.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit_secs = Some(limit.as_secs_f64());
        self
    }

    /// The wall-clock budget, if one is set.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs
            .and_then(|s| Duration::try_from_secs_f64(s).ok())
    }

    /// Checks that budget values are usable.
    pub fn validate(&self) -> Result<()> {
        if let Some(secs) = self.time_limit_secs {
            if Duration::try_from_secs_f64(secs).is_err() {
                return Err(TspError::InvalidConfig(format!(
                    "time_limit_secs must be a non-negative number of seconds \
                     representable as a duration, got {secs}"
                )));
            }
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration.
    ///
    /// Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
