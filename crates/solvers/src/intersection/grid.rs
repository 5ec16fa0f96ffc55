use demand_core::Crossing;

use super::{Config, Error};

/// A probed quantity of good 1 and the gap there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x1: f64,
    pub gap: f64,
}

impl Point {
    /// Evaluates the gap at `x1`, rejecting non-finite results.
    pub(super) fn evaluate<C: Crossing>(problem: &C, x1: f64, level: f64) -> Result<Self, Error> {
        let gap = problem.gap(x1, level);
        if !gap.is_finite() {
            return Err(Error::NonFiniteGap { x1, level, gap });
        }
        Ok(Self { x1, gap })
    }

    /// Returns true if the point lies strictly between the crossings.
    #[must_use]
    pub fn is_inside(&self) -> bool {
        self.gap < 0.0
    }
}

/// Picks the coarse grid step for the domain `(0, upper]`.
///
/// The configured step moves by whole powers of ten until the domain holds
/// between `min_points` and `max_points` grid points.
pub(super) fn coarse_step(upper: f64, config: &Config) -> Result<f64, Error> {
    if !upper.is_finite() || upper <= 0.0 {
        return Err(Error::EmptyDomain { upper });
    }

    let points = upper / config.coarse_step;
    let min = config.min_points as f64;
    let max = config.max_points as f64;

    let decades = if points < min {
        -(min / points).log10().ceil()
    } else if points > max {
        (points / max).log10().ceil()
    } else {
        0.0
    };

    let step = config.coarse_step * 10_f64.powf(decades);
    if !step.is_finite() || step <= 0.0 || step > upper {
        return Err(Error::EmptyDomain { upper });
    }
    Ok(step)
}

/// Evaluates every candidate and returns the one with the most negative gap.
///
/// Ties keep the earliest candidate.
pub(super) fn lowest<C, I>(problem: &C, level: f64, candidates: I) -> Result<Option<Point>, Error>
where
    C: Crossing,
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<Point> = None;
    for x1 in candidates {
        let point = Point::evaluate(problem, x1, level)?;
        if best.is_none_or(|best| point.gap < best.gap) {
            best = Some(point);
        }
    }
    Ok(best)
}
