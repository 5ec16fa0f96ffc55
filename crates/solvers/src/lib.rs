//! Solvers for curve tangency problems.
//!
//! A [`Crossing`] describes two curves over the quantity of good 1. The
//! solvers in this crate locate where they cross and move the free curve
//! until the crossings merge.
//!
//! - [`intersection`] runs a coarse-to-fine grid search for the two crossings
//!   at a fixed level of the free curve.
//! - [`fixed_point`] re-levels the free curve through the midpoint of the
//!   crossings until they collapse within tolerance.
//!
//! [`Crossing`]: demand_core::Crossing

pub mod fixed_point;
pub mod intersection;
