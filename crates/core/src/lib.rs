//! Core traits and types for scalar root finding.
//!
//! This crate defines the shared abstractions that the solvers and observers
//! build on:
//!
//! - [`Evaluable`]: a scalar function `f: ℝ → ℝ` that a solver can evaluate
//! - [`Fallible`]: adapts a function returning `Result<f64, E>` to [`Evaluable`]
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`Tolerance`]: a validated convergence threshold that also determines
//!   how many decimal places a result resolves

mod evaluable;
mod observer;
mod tolerance;

pub use evaluable::{Evaluable, Fallible};
pub use observer::Observer;
pub use tolerance::{Tolerance, ToleranceError};
