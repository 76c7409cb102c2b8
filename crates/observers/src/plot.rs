//! Plotting observer for visualizing convergence.
//!
//! See [`ConvergencePlot`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use rootline_core::{Observer, Tolerance};

use crate::traits::HasProgress;

/// Configuration for rendering a [`ConvergencePlot`].
///
/// # Example
///
/// ```ignore
/// plot.show(ShowConfig::new().title("Bisection").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    linear_spread: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, and a
    /// log₁₀ axis for the spread.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            linear_spread: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend on both panels.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Plots the spread on a linear axis instead of log₁₀.
    #[must_use]
    pub fn linear_spread(mut self) -> Self {
        self.linear_spread = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// An observer that collects the estimate and spread of each iteration and
/// displays them via egui.
///
/// The window has two panels: the estimate against iteration, and the spread
/// (bracket width or step length) against iteration. An optional tolerance
/// line marks where the solver stops.
///
/// # Example
///
/// ```ignore
/// let mut plot = ConvergencePlot::new().with_tolerance(tol);
/// bisection::solve(&f, [0.0, 2.0], &config, &mut plot)?;
/// plot.show(ShowConfig::new().title("Bisection").legend())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConvergencePlot {
    estimates: Vec<[f64; 2]>,
    spreads: Vec<[f64; 2]>,
    tolerance: Option<f64>,
}

impl ConvergencePlot {
    /// Creates an empty plot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws a horizontal tolerance line on the spread panel.
    #[must_use]
    pub fn with_tolerance(mut self, tol: Tolerance) -> Self {
        self.tolerance = Some(tol.value());
        self
    }

    /// Records a single event.
    pub fn record<E: HasProgress>(&mut self, event: &E) {
        #[allow(clippy::cast_precision_loss)]
        let iter = event.iter() as f64;
        self.estimates.push([iter, event.estimate()]);
        self.spreads.push([iter, event.spread()]);
    }

    /// Opens a blocking egui window displaying the collected data.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();

        let log_spread = !config.linear_spread;
        let spreads = scale_spread(&self.spreads, log_spread);
        let tolerance = self.tolerance.and_then(|tol| scale_value(tol, log_spread));

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    estimates: self.estimates,
                    spreads,
                    tolerance,
                    legend: config.legend,
                    log_spread,
                }))
            }),
        )
    }
}

impl<E: HasProgress, A> Observer<E, A> for ConvergencePlot {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut ConvergencePlot` to be passed to solvers that take an observer
/// by value, so [`ConvergencePlot::show`] can be called after the solve.
impl<E: HasProgress, A> Observer<E, A> for &mut ConvergencePlot {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Applies log₁₀ to each spread when requested, dropping non-positive values.
fn scale_spread(points: &[[f64; 2]], log: bool) -> Vec<[f64; 2]> {
    points
        .iter()
        .filter_map(|&[x, y]| scale_value(y, log).map(|y| [x, y]))
        .collect()
}

fn scale_value(y: f64, log: bool) -> Option<f64> {
    if !log {
        Some(y)
    } else if y > 0.0 {
        Some(y.log10())
    } else {
        None
    }
}

/// The egui [`eframe::App`] that renders collected data.
struct PlotApp {
    estimates: Vec<[f64; 2]>,
    spreads: Vec<[f64; 2]>,
    tolerance: Option<f64>,
    legend: bool,
    log_spread: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let height = 0.5 * ui.available_height();

            let mut estimate_plot = Plot::new("estimate")
                .height(height)
                .x_axis_label("iteration")
                .y_axis_label("estimate");
            if self.legend {
                estimate_plot = estimate_plot.legend(Legend::default());
            }
            estimate_plot.show(ui, |plot_ui| {
                let points: PlotPoints = self.estimates.iter().copied().collect();
                plot_ui.line(Line::new(points).name("Estimate"));
                let markers: PlotPoints = self.estimates.iter().copied().collect();
                plot_ui.points(Points::new(markers).radius(2.5));
            });

            let mut spread_plot = Plot::new("spread")
                .height(height)
                .x_axis_label("iteration")
                .y_axis_label(if self.log_spread {
                    "log₁₀ spread"
                } else {
                    "spread"
                });
            if self.legend {
                spread_plot = spread_plot.legend(Legend::default());
            }
            spread_plot.show(ui, |plot_ui| {
                let points: PlotPoints = self.spreads.iter().copied().collect();
                plot_ui.line(Line::new(points).name("Spread"));

                if let (Some(tol), Some(first), Some(last)) =
                    (self.tolerance, self.spreads.first(), self.spreads.last())
                {
                    let line: PlotPoints = vec![[first[0], tol], [last[0], tol]].into();
                    plot_ui.line(Line::new(line).name("Tolerance"));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootline_solvers::fixed_point;

    #[test]
    fn records_each_event() {
        let f = |x: f64| 0.5 * x;
        let config = fixed_point::Config::new(Tolerance::new(0.2).unwrap());
        let mut plot = ConvergencePlot::new();

        // steps: 4, 2, 1, 0.5, 0.25, 0.125
        let solution = fixed_point::solve(&f, 8.0, &config, &mut plot).unwrap();

        assert_eq!(plot.estimates.len(), solution.iters);
        assert_eq!(plot.estimates[0], [1.0, 4.0]);
        assert_eq!(plot.spreads[1], [2.0, 2.0]);
    }

    #[test]
    fn log_scaling_drops_non_positive_spreads() {
        let points = [[1.0, 100.0], [2.0, 0.0], [3.0, 0.001]];

        let scaled = scale_spread(&points, true);

        assert_eq!(scaled.len(), 2);
        assert_relative_eq!(scaled[0][1], 2.0);
        assert_relative_eq!(scaled[1][1], -3.0);
        assert_eq!(scale_spread(&points, false), points.to_vec());
    }

    #[test]
    fn tolerance_line_follows_spread_scaling() {
        let plot = ConvergencePlot::new().with_tolerance(Tolerance::new(1e-6).unwrap());

        assert_eq!(plot.tolerance, Some(1e-6));
        assert_relative_eq!(scale_value(1e-6, true).unwrap(), -6.0);
    }

    #[test]
    fn never_returns_an_action() {
        let mut plot = ConvergencePlot::new();
        let event = fixed_point::Event {
            iter: 1,
            x_prev: 0.0,
            x_next: 1.0,
        };

        let action: Option<fixed_point::Action> = plot.observe(&event);

        assert!(action.is_none());
        assert_eq!(plot.spreads, vec![[1.0, 1.0]]);
    }
}
