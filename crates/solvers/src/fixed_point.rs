//! Fixed-point loop that drives a curve pair to tangency.
//!
//! Starting from an anchor on the fixed curve, the free curve is placed
//! through the anchor and the two crossings are located with
//! [`intersection::find_intersection`]. The midpoint of the crossings becomes
//! the next anchor, and [`adjust`] re-levels the free curve through it. The
//! loop stops once the crossings sit within `tolerance` of each other.
//!
//! The tolerance is stated for the configured coarse step and scales with
//! [`intersection::grid_scale`], so it stays a fixed fraction of the grid
//! the search actually runs on.

mod config;
mod error;
mod solution;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use solution::{Solution, Status};

use demand_core::{Crossing, Observer};
use tracing::{debug, trace};

use crate::intersection::{self, Bracket};

/// Control actions supported by the fixed-point loop.
pub enum Action {
    /// Stop the loop and report the current bracket.
    StopEarly,
}

/// Iteration event emitted by the fixed-point loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Level of the free curve for this iteration's bracket search.
    pub level: f64,
    /// Crossings found at `level`.
    pub bracket: Bracket,
}

/// Moves the free curve until its crossings with the fixed curve merge.
///
/// When the search finds no crossing, the free curve only grazes the fixed
/// curve closer than the grid resolves, and the loop treats the anchor as a
/// collapsed bracket. When the lower crossing lies below the reach of the
/// search, the last point probed stands in for it.
///
/// # Errors
///
/// Returns an error if either config is invalid, a level is non-finite, the
/// bracket search fails, or the bracket is still wider than the tolerance
/// after `max_iters` iterations.
pub fn solve<C, Obs>(
    problem: &C,
    anchor: f64,
    search: &intersection::Config,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    C: Crossing,
    Obs: Observer<Event, Action>,
{
    config.validate()?;
    search.validate().map_err(intersection::Error::from)?;

    let mut anchor = anchor;
    let mut level = level_at(problem, anchor)?;
    let mut width = f64::INFINITY;

    for iter in 1..=config.max_iters {
        let bracket = match intersection::find_intersection(problem, level, search) {
            Ok(bracket) => bracket,
            Err(intersection::Error::NoCrossing { .. }) => {
                trace!(iter, level, anchor, "no crossing, collapsing at anchor");
                Bracket::collapsed(anchor)
            }
            Err(intersection::Error::LowerOutOfReach { x1, high, .. }) => {
                trace!(iter, level, x1, high, "lower crossing out of reach");
                Bracket::new(x1, high)
            }
            Err(err) => return Err(err.into()),
        };
        width = bracket.width();
        let tolerance =
            config.tolerance * intersection::grid_scale(problem.upper_bound(level), search)?;
        debug!(
            iter,
            level,
            low = bracket.low(),
            high = bracket.high(),
            width,
            tolerance,
            "fixed-point iteration"
        );

        let event = Event {
            iter,
            level,
            bracket,
        };
        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution::new(
                        Status::StoppedByObserver,
                        level,
                        bracket,
                        iter,
                    ));
                }
            }
        }

        if width <= tolerance {
            return Ok(Solution::new(Status::Converged, level, bracket, iter));
        }

        anchor = bracket.midpoint();
        level = adjust(problem, &bracket)?;
    }

    Err(Error::NonConvergence {
        iters: config.max_iters,
        width,
    })
}

/// Runs the fixed-point loop without observation.
///
/// # Errors
///
/// Returns an error if either config is invalid, a level is non-finite, the
/// bracket search fails, or the loop does not converge.
pub fn solve_unobserved<C: Crossing>(
    problem: &C,
    anchor: f64,
    search: &intersection::Config,
    config: &Config,
) -> Result<Solution, Error> {
    solve(problem, anchor, search, config, ())
}

/// Returns the level of the free curve through the fixed curve at the
/// bracket midpoint.
///
/// # Errors
///
/// Returns [`Error::NonFiniteLevel`] if the level is not finite.
pub fn adjust<C: Crossing>(problem: &C, bracket: &Bracket) -> Result<f64, Error> {
    level_at(problem, bracket.midpoint())
}

fn level_at<C: Crossing>(problem: &C, x1: f64) -> Result<f64, Error> {
    let level = problem.level_through(x1);
    if level.is_finite() {
        Ok(level)
    } else {
        Err(Error::NonFiniteLevel { x1, level })
    }
}
