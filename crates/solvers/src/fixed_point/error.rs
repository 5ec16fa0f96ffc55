use thiserror::Error;

use crate::intersection;

use super::ConfigError;

/// Errors that can occur during the fixed-point loop.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config")]
    InvalidConfig(#[from] ConfigError),

    #[error("bracket search failed")]
    Intersection(#[from] intersection::Error),

    #[error("non-finite level {level} through x1 = {x1}")]
    NonFiniteLevel { x1: f64, level: f64 },

    #[error("bracket still {width} wide after {iters} iterations")]
    NonConvergence { iters: usize, width: f64 },
}
