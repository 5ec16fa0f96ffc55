/// Two curves in the `(x1, x2)` plane that a solver drives toward tangency.
///
/// One curve stays at a fixed level for the whole solve. The other belongs to
/// a one-parameter family indexed by `level`, and the solver moves that level
/// until the two crossings of the curves merge into a single point.
///
/// Implementations orient [`gap`](Crossing::gap) so that it is positive near
/// `x1 = 0` and at [`upper_bound`](Crossing::upper_bound), and negative
/// strictly between the two crossings. The search assumes the gap is convex
/// in `x1`, so it has a single dip.
pub trait Crossing {
    /// Returns the signed vertical gap between the curves at `x1` when the
    /// free curve sits at `level`.
    fn gap(&self, x1: f64, level: f64) -> f64;

    /// Returns the level of the free curve that passes through the fixed
    /// curve at `x1`.
    fn level_through(&self, x1: f64) -> f64;

    /// Returns the height of the fixed curve at `x1`.
    fn fixed_height(&self, x1: f64) -> f64;

    /// Returns the largest `x1` worth searching when the free curve is at `level`.
    ///
    /// The search domain is the half-open interval `(0, upper_bound]`.
    fn upper_bound(&self, level: f64) -> f64;
}
