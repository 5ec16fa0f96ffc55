//! Coarse-to-fine grid search for the crossings of a curve pair.
//!
//! # Algorithm
//!
//! With the free curve held at one level, the gap between the curves is
//! convex in `x1`: positive near zero and at the affordability bound, and
//! negative between the two crossings.
//!
//! 1. **Dip.** Scan a coarse grid `k · step` over `(0, upper]` and keep the
//!    point with the most negative gap. Each refinement pass divides the step
//!    by `divisions` and rescans a window of one old step either side of the
//!    current best, so the dip is pinned to within the final step.
//! 2. **Crossings.** Walk from the dip toward each end of the domain by the
//!    coarse step until the gap turns non-negative. The last two points
//!    straddle one crossing. Each refinement pass splits the straddle into
//!    `divisions` pieces and keeps the one holding the sign change.
//! 3. **Estimate.** The crossing is read off by linear interpolation of the
//!    gap across the final straddle.
//!
//! The default grid starts at whole units and refines four decimal digits,
//! scanning 21 points per dip pass and 9 per crossing pass.
//!
//! # Outcomes
//!
//! A dip with a positive gap means the curves never meet at this level and
//! yields [`Error::NoCrossing`]. A dip that lands exactly on zero is a
//! tangency and yields a [`Bracket::collapsed`] bracket. A lower crossing
//! too close to zero for the halving walk yields
//! [`Error::LowerOutOfReach`], which still carries the upper crossing.

mod bracket;
mod config;
mod error;
mod grid;

#[cfg(test)]
mod tests;

pub use bracket::Bracket;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use grid::Point;

use demand_core::Crossing;
use tracing::trace;

use bracket::Straddle;

/// Halvings toward `x1 = 0` before the lower walk gives up.
const MAX_HALVINGS: usize = 64;

/// Finds both crossings of the curves with the free curve at `level`.
///
/// # Errors
///
/// Returns an error if the config is invalid, the domain is empty, the gap
/// is non-finite at a probed point, the curves do not cross, or the lower
/// crossing lies below the smallest point the walk reaches.
pub fn find_intersection<C: Crossing>(
    problem: &C,
    level: f64,
    config: &Config,
) -> Result<Bracket, Error> {
    let dip = find_dip(problem, level, config)?;

    if dip.gap > 0.0 {
        return Err(Error::NoCrossing {
            level,
            x1: dip.x1,
            gap: dip.gap,
        });
    }
    if !dip.is_inside() {
        return Ok(Bracket::collapsed(dip.x1));
    }

    let high = upper_crossing(problem, level, dip, config)?;
    let low = match lower_crossing(problem, level, dip, config) {
        Ok(low) => low,
        Err(Error::NoSignChange { x1, .. }) => {
            return Err(Error::LowerOutOfReach { level, x1, high });
        }
        Err(err) => return Err(err),
    };
    trace!(level, low, high, dip = dip.x1, "crossings found");

    Ok(Bracket::new(low, high))
}

/// Returns how far the coarse step for the domain `(0, upper]` moved from
/// the configured one, as a factor.
///
/// Widths that should follow the grid, such as a convergence tolerance,
/// scale by this factor.
///
/// # Errors
///
/// Returns an error if the config is invalid or the domain is empty.
pub fn grid_scale(upper: f64, config: &Config) -> Result<f64, Error> {
    config.validate()?;
    Ok(grid::coarse_step(upper, config)? / config.coarse_step)
}

/// Locates the point where the gap is most negative.
///
/// # Errors
///
/// Returns an error if the config is invalid, the domain is empty, or the
/// gap is non-finite at a probed point.
pub fn find_dip<C: Crossing>(problem: &C, level: f64, config: &Config) -> Result<Point, Error> {
    config.validate()?;

    let upper = problem.upper_bound(level);
    let mut step = grid::coarse_step(upper, config)?;

    let count = (upper / step).floor() as u64;
    let coarse = (1..=count).map(|k| k as f64 * step);
    let mut best = grid::lowest(problem, level, coarse)?.ok_or(Error::EmptyDomain { upper })?;

    let span = config.divisions as i64;
    for _ in 0..config.passes {
        step /= config.divisions as f64;
        let center = (best.x1 / step).round() as i64;
        let window = (center - span..=center + span)
            .map(|k| k as f64 * step)
            .filter(|&x1| x1 > 0.0 && x1 <= upper);
        if let Some(point) = grid::lowest(problem, level, window)?
            && point.gap < best.gap
        {
            best = point;
        }
    }

    Ok(best)
}

/// Finds the crossing between `x1 = 0` and the dip.
///
/// # Errors
///
/// Returns an error if the config is invalid, the gap is non-finite at a
/// probed point, or the gap stays negative all the way toward zero.
pub fn lower_crossing<C: Crossing>(
    problem: &C,
    level: f64,
    dip: Point,
    config: &Config,
) -> Result<f64, Error> {
    config.validate()?;
    let step = grid::coarse_step(problem.upper_bound(level), config)?;
    let straddle = walk_down(problem, level, dip, step)?;
    refine(problem, level, straddle, config)
}

/// Finds the crossing between the dip and the affordability bound.
///
/// # Errors
///
/// Returns an error if the config is invalid, the gap is non-finite at a
/// probed point, or the gap is still negative at the bound.
pub fn upper_crossing<C: Crossing>(
    problem: &C,
    level: f64,
    dip: Point,
    config: &Config,
) -> Result<f64, Error> {
    config.validate()?;
    let upper = problem.upper_bound(level);
    let step = grid::coarse_step(upper, config)?;
    let straddle = walk_up(problem, level, dip, step, upper)?;
    refine(problem, level, straddle, config)
}

fn refine<C: Crossing>(
    problem: &C,
    level: f64,
    mut straddle: Straddle,
    config: &Config,
) -> Result<f64, Error> {
    for _ in 0..config.passes {
        straddle = straddle.refine(problem, level, config.divisions)?;
    }
    trace!(level, width = straddle.width(), "straddle refined");
    Ok(straddle.crossing())
}

/// Steps down from the dip until the gap turns non-negative.
///
/// Once a full step would leave the domain, the walk halves the distance to
/// zero instead; the gap of a convex dip grows without bound there.
fn walk_down<C: Crossing>(
    problem: &C,
    level: f64,
    dip: Point,
    step: f64,
) -> Result<Straddle, Error> {
    let mut inside = dip;

    for k in 1_u64.. {
        let x1 = dip.x1 - k as f64 * step;
        if x1 <= 0.0 {
            break;
        }
        let point = Point::evaluate(problem, x1, level)?;
        if !point.is_inside() {
            return Ok(Straddle::new(point, inside));
        }
        inside = point;
    }

    for _ in 0..MAX_HALVINGS {
        let point = Point::evaluate(problem, 0.5 * inside.x1, level)?;
        if !point.is_inside() {
            return Ok(Straddle::new(point, inside));
        }
        inside = point;
    }

    Err(Error::NoSignChange {
        level,
        x1: inside.x1,
    })
}

/// Steps up from the dip until the gap turns non-negative, stopping at `upper`.
fn walk_up<C: Crossing>(
    problem: &C,
    level: f64,
    dip: Point,
    step: f64,
    upper: f64,
) -> Result<Straddle, Error> {
    let mut inside = dip;

    for k in 1_u64.. {
        let x1 = (dip.x1 + k as f64 * step).min(upper);
        let point = Point::evaluate(problem, x1, level)?;
        if !point.is_inside() {
            return Ok(Straddle::new(point, inside));
        }
        if x1 >= upper {
            break;
        }
        inside = point;
    }

    Err(Error::NoSignChange { level, x1: upper })
}
