//! Marshallian and Hicksian demand for a two-good Cobb-Douglas consumer.
//!
//! Demand is found numerically. An indifference curve and a budget line are
//! set against each other with one of them held fixed, and the solvers in
//! [`demand_solvers`] move the other until the two curves touch.
//!
//! - [`marshallian_demand`] holds income fixed and raises utility.
//! - [`hicksian_demand`] holds utility fixed and lowers expenditure.
//! - [`income_matched_demand`] searches for the utility whose Hicksian
//!   bundle costs exactly the given income.
//!
//! [`Solver`] runs the same solves with custom [`Settings`] and lets an
//! observer watch the tangency loop.

mod curves;
mod error;
mod income_match;
mod inputs;
mod settings;
mod solver;
mod tangency;

pub use curves::{Budget, Indifference};
pub use error::Error;
pub use income_match::IncomeMatch;
pub use inputs::{Bundle, Preferences, Prices};
pub use settings::{MatchConfig, Settings, SettingsError};
pub use solver::{Demand, Solver};
pub use tangency::{Held, Tangency};

pub use demand_solvers::fixed_point::{Action, Event, Status};

/// Returns the utility-maximizing bundle that `income` can buy.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for a non-positive or non-finite input,
/// and a solver error if the tangency cannot be found.
pub fn marshallian_demand(
    income: f64,
    preferences: Preferences,
    prices: Prices,
) -> Result<Bundle, Error> {
    Solver::default()
        .marshallian_unobserved(income, preferences, prices)
        .map(|demand| demand.bundle)
}

/// Returns the cheapest bundle that reaches `utility`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for a non-positive or non-finite input,
/// and a solver error if the tangency cannot be found.
pub fn hicksian_demand(
    utility: f64,
    preferences: Preferences,
    prices: Prices,
) -> Result<Bundle, Error> {
    Solver::default()
        .hicksian_unobserved(utility, preferences, prices)
        .map(|demand| demand.bundle)
}

/// Returns the Hicksian bundle whose expenditure matches `income`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for a non-positive or non-finite input,
/// [`Error::NonConvergence`] if the expenditure never settles on `income`,
/// and a solver error if a tangency cannot be found.
pub fn income_matched_demand(
    income: f64,
    preferences: Preferences,
    prices: Prices,
) -> Result<IncomeMatch, Error> {
    Solver::default().income_matched(income, preferences, prices)
}
