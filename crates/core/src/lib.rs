//! Core traits shared by the demand solvers.
//!
//! This crate defines the abstractions that the solver and consumer crates
//! build on:
//!
//! - [`Crossing`] describes two curves over the quantity of good 1, one held
//!   at a fixed level and one whose level the solver moves.
//! - [`Observer`] receives solver events and optionally returns control actions.

mod crossing;
mod observer;

pub use crossing::Crossing;
pub use observer::Observer;
