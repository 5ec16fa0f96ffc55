use demand_core::Crossing;

use crate::{
    Bundle, Preferences, Prices,
    curves::{Budget, Indifference},
};

/// The quantity held fixed while the other curve moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Held {
    /// Income is fixed and the indifference curve moves (Marshallian).
    Income(f64),
    /// Utility is fixed and the budget line moves (Hicksian).
    Utility(f64),
}

/// An indifference curve and a budget line, one of them held fixed.
///
/// The gap is always `indifference height − budget height`, which is
/// positive near `x1 = 0` and negative between the crossings. The level of
/// the free curve is a utility when income is held and an expenditure when
/// utility is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tangency {
    indifference: Indifference,
    budget: Budget,
    held: Held,
}

impl Tangency {
    #[must_use]
    pub fn new(held: Held, preferences: Preferences, prices: Prices) -> Self {
        Self {
            indifference: Indifference::new(preferences),
            budget: Budget::new(prices),
            held,
        }
    }

    /// Holds `income` fixed and searches over utility levels.
    #[must_use]
    pub fn marshallian(income: f64, preferences: Preferences, prices: Prices) -> Self {
        Self::new(Held::Income(income), preferences, prices)
    }

    /// Holds `utility` fixed and searches over expenditure levels.
    #[must_use]
    pub fn hicksian(utility: f64, preferences: Preferences, prices: Prices) -> Self {
        Self::new(Held::Utility(utility), preferences, prices)
    }

    /// Returns the starting point on the fixed curve.
    ///
    /// With income held, half the income goes to each good. With utility
    /// held, both goods are bought in the same quantity.
    #[must_use]
    pub fn anchor(&self) -> f64 {
        match self.held {
            Held::Income(income) => 0.5 * self.budget.max_x1(income),
            Held::Utility(utility) => self.indifference.diagonal(utility),
        }
    }

    /// Returns the bundle on the fixed curve at `x1`.
    #[must_use]
    pub fn bundle(&self, x1: f64) -> Bundle {
        Bundle {
            x1,
            x2: self.fixed_height(x1),
        }
    }
}

impl Crossing for Tangency {
    fn gap(&self, x1: f64, level: f64) -> f64 {
        match self.held {
            Held::Income(income) => {
                self.indifference.height(x1, level) - self.budget.height(x1, income)
            }
            Held::Utility(utility) => {
                self.indifference.height(x1, utility) - self.budget.height(x1, level)
            }
        }
    }

    fn level_through(&self, x1: f64) -> f64 {
        let x2 = self.fixed_height(x1);
        match self.held {
            Held::Income(_) => self.indifference.level(x1, x2),
            Held::Utility(_) => self.budget.level(x1, x2),
        }
    }

    fn fixed_height(&self, x1: f64) -> f64 {
        match self.held {
            Held::Income(income) => self.budget.height(x1, income),
            Held::Utility(utility) => self.indifference.height(x1, utility),
        }
    }

    fn upper_bound(&self, level: f64) -> f64 {
        match self.held {
            Held::Income(income) => self.budget.max_x1(income),
            Held::Utility(_) => self.budget.max_x1(level),
        }
    }
}
