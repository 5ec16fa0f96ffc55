//! The two curves in the `(x1, x2)` plane, written as heights over `x1`.

use crate::{Preferences, Prices};

/// Indifference curves of a Cobb-Douglas consumer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indifference {
    preferences: Preferences,
}

impl Indifference {
    #[must_use]
    pub fn new(preferences: Preferences) -> Self {
        Self { preferences }
    }

    /// Returns the `x2` that reaches `utility` alongside `x1`.
    ///
    /// Not finite for `x1 <= 0`.
    #[must_use]
    pub fn height(&self, x1: f64, utility: f64) -> f64 {
        let Preferences { a, b } = self.preferences;
        (utility / x1.powf(a)).powf(b.recip())
    }

    /// Returns the quantity `x` for which the bundle `(x, x)` reaches `utility`.
    #[must_use]
    pub fn diagonal(&self, utility: f64) -> f64 {
        let Preferences { a, b } = self.preferences;
        utility.powf((a + b).recip())
    }

    /// Returns the utility of the bundle `(x1, x2)`.
    #[must_use]
    pub fn level(&self, x1: f64, x2: f64) -> f64 {
        let Preferences { a, b } = self.preferences;
        x1.powf(a) * x2.powf(b)
    }
}

/// Budget lines at fixed prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Budget {
    prices: Prices,
}

impl Budget {
    #[must_use]
    pub fn new(prices: Prices) -> Self {
        Self { prices }
    }

    /// Returns the `x2` that exhausts `money` alongside `x1`.
    ///
    /// Negative once `x1` alone costs more than `money`.
    #[must_use]
    pub fn height(&self, x1: f64, money: f64) -> f64 {
        let Prices { p0, p1 } = self.prices;
        (money - p0 * x1) / p1
    }

    /// Returns the cost of the bundle `(x1, x2)`.
    #[must_use]
    pub fn level(&self, x1: f64, x2: f64) -> f64 {
        let Prices { p0, p1 } = self.prices;
        p0 * x1 + p1 * x2
    }

    /// Returns the most of good 1 that `money` buys.
    #[must_use]
    pub fn max_x1(&self, money: f64) -> f64 {
        money / self.prices.p0
    }
}
