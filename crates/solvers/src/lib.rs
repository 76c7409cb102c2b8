//! Root finding for scalar functions.
//!
//! # Solvers
//!
//! - [`bisection`]: halves a bracketing interval until it is narrower than
//!   the tolerance
//! - [`fixed_point`]: iterates `x ← f(x)` until successive iterates agree
//!   within the tolerance
//!
//! [`bounds`] predicts how many iterations each method needs before running
//! it.
//!
//! Functions are anything implementing [`Evaluable`], including plain
//! closures. Solver progress is reported through an [`Observer`]; each solver
//! also has an `_unobserved` variant.
//!
//! [`Evaluable`]: rootline_core::Evaluable
//! [`Observer`]: rootline_core::Observer

pub mod bisection;
pub mod bounds;
pub mod fixed_point;
