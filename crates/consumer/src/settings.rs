use demand_solvers::{fixed_point, intersection};
use thiserror::Error;

/// Tuning for every loop a demand solve runs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Settings {
    /// Grid used to locate the crossings.
    pub search: intersection::Config,
    /// Stopping rule for the tangency loop.
    pub convergence: fixed_point::Config,
    /// Stopping rule for matching Hicksian expenditure to an income.
    pub income_match: MatchConfig,
}

/// Stopping rule for the income-matching loop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MatchConfig {
    /// Largest accepted gap between income and expenditure.
    pub residual_tol: f64,
    /// Most utility guesses the loop may try.
    pub max_iters: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            residual_tol: 1e-5,
            max_iters: 100,
        }
    }
}

/// Errors that can occur when validating settings.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid search settings")]
    Search(#[from] intersection::ConfigError),

    #[error("invalid convergence settings")]
    Convergence(#[from] fixed_point::ConfigError),

    #[error("income_match: residual_tol must be finite and positive")]
    ResidualTol,

    #[error("income_match: max_iters must be at least 1")]
    MatchIters,
}

impl Settings {
    /// Validates every nested config.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.search.validate()?;
        self.convergence.validate()?;
        self.income_match.validate()
    }
}

impl MatchConfig {
    /// Validates the residual tolerance and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not finite and positive, or if
    /// no iterations are allowed.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.residual_tol.is_finite() || self.residual_tol <= 0.0 {
            return Err(SettingsError::ResidualTol);
        }
        if self.max_iters == 0 {
            return Err(SettingsError::MatchIters);
        }
        Ok(())
    }
}
