use thiserror::Error;

/// Configuration for the grid bracket search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Preferred spacing of the coarse grid.
    pub coarse_step: f64,
    /// Fewest coarse grid points the domain may hold before the step shrinks.
    pub min_points: usize,
    /// Most coarse grid points the domain may hold before the step grows.
    pub max_points: usize,
    /// Refinement passes after the coarse scan.
    pub passes: usize,
    /// Sub-intervals each refinement pass splits the previous step into.
    pub divisions: usize,
}

/// Errors that can occur when validating a search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("coarse_step must be finite and positive")]
    CoarseStep,

    #[error("min_points must be at least 1")]
    MinPoints,

    #[error("max_points must be at least ten times min_points")]
    MaxPoints,

    #[error("divisions must be at least 2")]
    Divisions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coarse_step: 1.0,
            min_points: 10,
            max_points: 10_000,
            passes: 4,
            divisions: 10,
        }
    }
}

impl Config {
    /// Validates the grid parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the coarse step is not a finite positive number,
    /// the point range cannot hold a full decade, or a pass would not shrink
    /// the step.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.coarse_step.is_finite() || self.coarse_step <= 0.0 {
            return Err(ConfigError::CoarseStep);
        }
        if self.min_points == 0 {
            return Err(ConfigError::MinPoints);
        }
        if self.max_points / 10 < self.min_points {
            return Err(ConfigError::MaxPoints);
        }
        if self.divisions < 2 {
            return Err(ConfigError::Divisions);
        }
        Ok(())
    }
}
