//! Reusable observers for the rootline solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with both [`bisection`] and [`fixed_point`].
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasProgress`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Trace`]: records every iteration and prints it as a table
//! - [`StopAfter`]: ends a solve successfully after a fixed number of
//!   iterations
//! - [`SpreadBelow`]: ends a solve once the spread drops below a threshold
//!
//! # Features
//!
//! - `plot`: Enables `ConvergencePlot` for visualizing convergence via
//!   egui. This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: rootline_core::Observer
//! [`bisection`]: rootline_solvers::bisection
//! [`fixed_point`]: rootline_solvers::fixed_point
//! [`HasProgress`]: traits::HasProgress
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod stop;
mod trace;

#[cfg(feature = "plot")]
mod plot;

pub use stop::{SpreadBelow, StopAfter};
pub use trace::{Row, Trace};

#[cfg(feature = "plot")]
pub use plot::{ConvergencePlot, ShowConfig};
