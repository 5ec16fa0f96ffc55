use demand_solvers::{fixed_point, intersection};
use thiserror::Error;

use crate::SettingsError;

/// Errors that can occur while computing demand.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid {name}: {value} (must be finite and positive)")]
    InvalidInput { name: &'static str, value: f64 },

    #[error("no convergence after {iters} iterations (residual {residual})")]
    NonConvergence { iters: usize, residual: f64 },

    #[error("non-finite value {value} at x1 = {x1}")]
    NumericDegeneracy { x1: f64, value: f64 },

    #[error("could not bracket the tangency")]
    NoBracket(#[source] intersection::Error),

    #[error("invalid settings")]
    InvalidSettings(#[from] SettingsError),
}

impl From<intersection::Error> for Error {
    fn from(err: intersection::Error) -> Self {
        match err {
            intersection::Error::InvalidConfig(e) => Self::InvalidSettings(e.into()),
            intersection::Error::NonFiniteGap { x1, gap, .. } => {
                Self::NumericDegeneracy { x1, value: gap }
            }
            other => Self::NoBracket(other),
        }
    }
}

impl From<fixed_point::Error> for Error {
    fn from(err: fixed_point::Error) -> Self {
        match err {
            fixed_point::Error::InvalidConfig(e) => Self::InvalidSettings(e.into()),
            fixed_point::Error::Intersection(e) => e.into(),
            fixed_point::Error::NonFiniteLevel { x1, level } => {
                Self::NumericDegeneracy { x1, value: level }
            }
            fixed_point::Error::NonConvergence { iters, width } => Self::NonConvergence {
                iters,
                residual: width,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solver_errors_map_onto_demand_errors() {
        let err: Error = fixed_point::Error::NonConvergence {
            iters: 5,
            width: 0.5,
        }
        .into();
        assert_eq!(
            err,
            Error::NonConvergence {
                iters: 5,
                residual: 0.5
            }
        );

        let err: Error = fixed_point::Error::Intersection(intersection::Error::NonFiniteGap {
            x1: 1.0,
            level: 2.0,
            gap: f64::INFINITY,
        })
        .into();
        assert_eq!(
            err,
            Error::NumericDegeneracy {
                x1: 1.0,
                value: f64::INFINITY
            }
        );

        let err: Error = intersection::Error::EmptyDomain { upper: 0.0 }.into();
        assert!(matches!(err, Error::NoBracket(_)));

        let err: Error =
            intersection::Error::InvalidConfig(intersection::ConfigError::MinPoints).into();
        assert!(matches!(err, Error::InvalidSettings(SettingsError::Search(_))));
    }
}
