use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during the grid bracket search.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config")]
    InvalidConfig(#[from] ConfigError),

    #[error("search domain (0, {upper}] holds no grid points")]
    EmptyDomain { upper: f64 },

    #[error("non-finite gap {gap} at x1 = {x1} (level {level})")]
    NonFiniteGap { x1: f64, level: f64, gap: f64 },

    #[error("curves do not cross at level {level}: smallest gap is {gap} at x1 = {x1}")]
    NoCrossing { level: f64, x1: f64, gap: f64 },

    #[error("gap never turns non-negative beyond x1 = {x1} (level {level})")]
    NoSignChange { level: f64, x1: f64 },

    #[error("lower crossing lies below x1 = {x1} (level {level}, upper crossing {high})")]
    LowerOutOfReach { level: f64, x1: f64, high: f64 },
}
