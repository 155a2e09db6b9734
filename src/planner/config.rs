use serde::{Deserialize, Serialize};

use crate::planner::constants::{
    DEFAULT_LADDER_PERCENTAGES, DEFAULT_LADDER_TOLERANCE, DEFAULT_TOLERANCE, MAX_ITERATIONS,
    RESERVE_RATE,
};

/// Tunables for the solvers. Read from the booth file's `settings` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Convergence tolerance for break-even and target-profit solves.
    pub tolerance: f64,

    /// Capital-delta tolerance for profit ladder rows.
    pub ladder_tolerance: f64,

    /// Iteration cap; never exceeds [`MAX_ITERATIONS`].
    pub max_iterations: u32,

    pub reserve_rate: f64,

    pub ladder_percentages: Vec<u32>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            ladder_tolerance: DEFAULT_LADDER_TOLERANCE,
            max_iterations: MAX_ITERATIONS,
            reserve_rate: RESERVE_RATE,
            ladder_percentages: DEFAULT_LADDER_PERCENTAGES.to_vec(),
        }
    }
}

impl SolverConfig {
    /// Iteration cap clamped to `1..=MAX_ITERATIONS`.
    pub fn iteration_cap(&self) -> u32 {
        self.max_iterations.clamp(1, MAX_ITERATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_cap_is_clamped() {
        let mut config = SolverConfig::default();
        assert_eq!(config.iteration_cap(), 10);

        config.max_iterations = 50;
        assert_eq!(config.iteration_cap(), MAX_ITERATIONS);

        config.max_iterations = 0;
        assert_eq!(config.iteration_cap(), 1);
    }

    #[test]
    fn test_partial_settings_take_defaults() {
        let config: SolverConfig = serde_json::from_str(r#"{"tolerance": 1.0}"#).unwrap();
        assert!((config.tolerance - 1.0).abs() < 1e-9);
        assert!((config.reserve_rate - RESERVE_RATE).abs() < 1e-9);
        assert_eq!(config.ladder_percentages, DEFAULT_LADDER_PERCENTAGES.to_vec());
    }
}
