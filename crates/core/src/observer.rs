/// Hook called once per iteration of a demand solver.
///
/// The tangency loop hands every bracket it finds to its observer. An
/// observer that returns `Some(action)` steers the loop, for example by
/// stopping it before the crossings merge. Returning `None` leaves the loop
/// alone.
///
/// Any `FnMut(&E) -> Option<A>` closure can observe a solve, which is how
/// tests record the levels a loop visits. Pass `()` to solve unobserved.
pub trait Observer<E, A> {
    /// Inspects one event and optionally asks the solver to act on it.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
