use demand_core::Observer;
use demand_solvers::fixed_point::{self, Action, Event, Status};
use tracing::debug;

use crate::{
    Bundle, Error, Preferences, Prices, Settings, Tangency, income_match::IncomeMatch,
    inputs::positive,
};

/// Demand found by one tangency solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Demand {
    /// The chosen bundle, on the curve that was held fixed.
    pub bundle: Bundle,
    /// Final level of the free curve: utility for Marshallian demand,
    /// expenditure for Hicksian demand.
    pub level: f64,
    /// Why the tangency loop stopped.
    pub status: Status,
    /// Tangency loop iterations.
    pub iters: usize,
}

/// Computes demand with a fixed set of validated settings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Solver {
    settings: Settings,
}

impl Solver {
    /// Creates a solver after validating `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSettings`] if any setting is out of range.
    pub fn new(settings: Settings) -> Result<Self, Error> {
        settings.validate()?;
        Ok(Self { settings })
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Finds the utility-maximizing bundle that `income` can buy.
    ///
    /// The observer sees every iteration of the tangency loop and may stop it
    /// early, in which case the bundle comes from the latest bracket.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for a non-positive or non-finite input,
    /// and a solver error if the tangency cannot be found.
    pub fn marshallian<Obs>(
        &self,
        income: f64,
        preferences: Preferences,
        prices: Prices,
        observer: Obs,
    ) -> Result<Demand, Error>
    where
        Obs: Observer<Event, Action>,
    {
        positive("income", income)?;
        preferences.validate()?;
        prices.validate()?;

        let demand = self.solve(&Tangency::marshallian(income, preferences, prices), observer)?;
        debug!(
            income,
            x1 = demand.bundle.x1,
            x2 = demand.bundle.x2,
            utility = demand.level,
            iters = demand.iters,
            "marshallian demand"
        );
        Ok(demand)
    }

    /// Finds the cheapest bundle that reaches `utility`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for a non-positive or non-finite input,
    /// and a solver error if the tangency cannot be found.
    pub fn hicksian<Obs>(
        &self,
        utility: f64,
        preferences: Preferences,
        prices: Prices,
        observer: Obs,
    ) -> Result<Demand, Error>
    where
        Obs: Observer<Event, Action>,
    {
        positive("utility", utility)?;
        preferences.validate()?;
        prices.validate()?;

        let demand = self.solve(&Tangency::hicksian(utility, preferences, prices), observer)?;
        debug!(
            utility,
            x1 = demand.bundle.x1,
            x2 = demand.bundle.x2,
            expenditure = demand.level,
            iters = demand.iters,
            "hicksian demand"
        );
        Ok(demand)
    }

    /// Runs [`marshallian`](Self::marshallian) without observation.
    ///
    /// # Errors
    ///
    /// See [`marshallian`](Self::marshallian).
    pub fn marshallian_unobserved(
        &self,
        income: f64,
        preferences: Preferences,
        prices: Prices,
    ) -> Result<Demand, Error> {
        self.marshallian(income, preferences, prices, ())
    }

    /// Runs [`hicksian`](Self::hicksian) without observation.
    ///
    /// # Errors
    ///
    /// See [`hicksian`](Self::hicksian).
    pub fn hicksian_unobserved(
        &self,
        utility: f64,
        preferences: Preferences,
        prices: Prices,
    ) -> Result<Demand, Error> {
        self.hicksian(utility, preferences, prices, ())
    }

    /// Finds the Hicksian bundle whose expenditure matches `income`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for a non-positive or non-finite input,
    /// [`Error::NonConvergence`] if expenditure never settles on `income`,
    /// and a solver error if a tangency cannot be found.
    pub fn income_matched(
        &self,
        income: f64,
        preferences: Preferences,
        prices: Prices,
    ) -> Result<IncomeMatch, Error> {
        crate::income_match::run(self, income, preferences, prices)
    }

    fn solve<Obs>(&self, problem: &Tangency, observer: Obs) -> Result<Demand, Error>
    where
        Obs: Observer<Event, Action>,
    {
        let solution = fixed_point::solve(
            problem,
            problem.anchor(),
            &self.settings.search,
            &self.settings.convergence,
            observer,
        )?;

        Ok(Demand {
            bundle: problem.bundle(solution.x1),
            level: solution.level,
            status: solution.status,
            iters: solution.iters,
        })
    }
}
