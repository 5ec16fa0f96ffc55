//! Hicksian demand at the utility an income can buy.
//!
//! Each round solves Hicksian demand at a utility guess and prices the
//! result. While the expenditure misses the income, the next guess is the
//! utility of the budget-line bundle with the same `x1`. The first guess
//! splits the income evenly between the goods.

use tracing::{debug, trace};

use crate::{
    Bundle, Error, Preferences, Prices, Solver,
    curves::{Budget, Indifference},
    inputs::positive,
};

/// The outcome of matching Hicksian expenditure to an income.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncomeMatch {
    /// The Hicksian bundle at `utility`.
    pub bundle: Bundle,
    /// Utility level of the final round.
    pub utility: f64,
    /// Cost of `bundle`.
    pub expenditure: f64,
    /// Rounds of Hicksian demand that were solved.
    pub iters: usize,
}

pub(crate) fn run(
    solver: &Solver,
    income: f64,
    preferences: Preferences,
    prices: Prices,
) -> Result<IncomeMatch, Error> {
    positive("income", income)?;
    preferences.validate()?;
    prices.validate()?;

    let config = solver.settings().income_match;
    let indifference = Indifference::new(preferences);
    let budget = Budget::new(prices);

    let half = 0.5 * income;
    let mut utility = indifference.level(half / prices.p0, half / prices.p1);
    let mut residual = f64::INFINITY;

    for iter in 1..=config.max_iters {
        let demand = solver.hicksian_unobserved(utility, preferences, prices)?;
        let expenditure = demand.bundle.cost(&prices);
        residual = (income - expenditure).abs();
        trace!(iter, utility, expenditure, residual, "income match round");

        if residual < config.residual_tol {
            debug!(income, utility, iters = iter, "income matched");
            return Ok(IncomeMatch {
                bundle: demand.bundle,
                utility,
                expenditure,
                iters: iter,
            });
        }

        let x1 = demand.bundle.x1;
        utility = indifference.level(x1, budget.height(x1, income));
        if !utility.is_finite() || utility <= 0.0 {
            return Err(Error::NumericDegeneracy { x1, value: utility });
        }
    }

    Err(Error::NonConvergence {
        iters: config.max_iters,
        residual,
    })
}
