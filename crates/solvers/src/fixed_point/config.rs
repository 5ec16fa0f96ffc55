use thiserror::Error;

/// Configuration for the fixed-point loop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Bracket width at or below which the crossings count as merged.
    ///
    /// Stated for the configured coarse grid step. A domain that moves the
    /// step by powers of ten moves the accepted width by the same factor.
    pub tolerance: f64,
    /// Most bracket searches the loop may run.
    pub max_iters: usize,
}

/// Errors that can occur when validating a fixed-point config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            max_iters: 1000,
        }
    }
}

impl Config {
    /// Validates the tolerance and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite, or if the
    /// loop would not be allowed a single iteration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(())
    }
}
