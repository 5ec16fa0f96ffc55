use crate::Error;

/// Cobb-Douglas taste parameters for `x1^a · x2^b`.
///
/// Both exponents must be finite and positive. They need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preferences {
    pub a: f64,
    pub b: f64,
}

impl Preferences {
    /// Creates validated preferences.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either exponent is not finite and
    /// positive.
    pub fn new(a: f64, b: f64) -> Result<Self, Error> {
        let preferences = Self { a, b };
        preferences.validate()?;
        Ok(preferences)
    }

    /// Checks that both exponents are finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] naming the first offending exponent.
    pub fn validate(&self) -> Result<(), Error> {
        positive("preference a", self.a)?;
        positive("preference b", self.b)?;
        Ok(())
    }
}

/// Unit prices of the two goods.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prices {
    pub p0: f64,
    pub p1: f64,
}

impl Prices {
    /// Creates validated prices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either price is not finite and
    /// positive.
    pub fn new(p0: f64, p1: f64) -> Result<Self, Error> {
        let prices = Self { p0, p1 };
        prices.validate()?;
        Ok(prices)
    }

    /// Checks that both prices are finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] naming the first offending price.
    pub fn validate(&self) -> Result<(), Error> {
        positive("price p0", self.p0)?;
        positive("price p1", self.p1)?;
        Ok(())
    }
}

/// Quantities of the two goods.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bundle {
    pub x1: f64,
    pub x2: f64,
}

impl Bundle {
    /// Returns the cost of the bundle at `prices`.
    #[must_use]
    pub fn cost(&self, prices: &Prices) -> f64 {
        prices.p0 * self.x1 + prices.p1 * self.x2
    }

    /// Returns the Cobb-Douglas utility of the bundle.
    #[must_use]
    pub fn utility(&self, preferences: &Preferences) -> f64 {
        self.x1.powf(preferences.a) * self.x2.powf(preferences.b)
    }
}

/// Returns `value` if it is finite and strictly positive.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, Error> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidInput { name, value })
    }
}
