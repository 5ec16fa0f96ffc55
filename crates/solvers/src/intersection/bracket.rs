use demand_core::Crossing;

use super::{Error, grid::Point};

/// The two crossings of a curve pair at one level of the free curve.
///
/// Bounds are kept ordered, so `low <= high` always holds. A bracket whose
/// bounds coincide marks a tangency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    low: f64,
    high: f64,
}

impl Bracket {
    /// Creates a bracket from two crossing estimates in either order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Creates a zero-width bracket at a tangency point.
    #[must_use]
    pub fn collapsed(x1: f64) -> Self {
        Self { low: x1, high: x1 }
    }

    /// Returns the lower crossing.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the upper crossing.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.low + self.high)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// Two points on either side of a single sign change of the gap.
///
/// `outside` has a non-negative gap and `inside` a negative one. The pair
/// may run in either direction along the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Straddle {
    outside: Point,
    inside: Point,
}

impl Straddle {
    pub(super) fn new(outside: Point, inside: Point) -> Self {
        debug_assert!(!outside.is_inside() && inside.is_inside());
        Self { outside, inside }
    }

    /// Returns the distance between the two points.
    pub(super) fn width(&self) -> f64 {
        (self.inside.x1 - self.outside.x1).abs()
    }

    /// Splits the straddle into `divisions` equal steps and keeps the one
    /// that holds the sign change.
    pub(super) fn refine<C: Crossing>(
        self,
        problem: &C,
        level: f64,
        divisions: usize,
    ) -> Result<Self, Error> {
        let span = self.inside.x1 - self.outside.x1;
        let mut outside = self.outside;

        for j in 1..divisions {
            let x1 = self.outside.x1 + span * (j as f64 / divisions as f64);
            let point = Point::evaluate(problem, x1, level)?;
            if point.is_inside() {
                return Ok(Self::new(outside, point));
            }
            outside = point;
        }

        Ok(Self::new(outside, self.inside))
    }

    /// Estimates the crossing by interpolating the gap linearly.
    pub(super) fn crossing(&self) -> f64 {
        let Point { x1: xo, gap: go } = self.outside;
        let Point { x1: xi, gap: gi } = self.inside;
        xo + (xi - xo) * go / (go - gi)
    }
}
