//! Plotting sink for viewing residual curves.
//!
//! See [`PlotSink`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use tandem_core::{Point, SolverKind, StatusUpdate, UpdateSink};

/// Configuration for rendering a [`PlotSink`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// sink.show(ShowConfig::new().title("Small problem").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    linear_y: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, log scale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            linear_y: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each solver.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Plots raw residuals instead of their base-10 logarithm.
    #[must_use]
    pub fn linear_y(mut self) -> Self {
        self.linear_y = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A sink that collects residual samples for both solvers and displays them
/// via egui.
///
/// By default residuals are drawn on a log₁₀ axis spanning both solvers'
/// [`error_axis`](SolverKind::error_axis) ranges, as the live charts do.
/// Non-positive samples are skipped on a log axis.
///
/// # Example
///
/// ```ignore
/// let mut sink = PlotSink::new();
/// let mut clock = SimulationClock::new(Config::default(), FrameQueue::new(), &mut sink);
/// let _ = clock.start(Scale::Small);
/// headless::drive(&mut clock, usize::MAX)?;
/// sink.show(ShowConfig::new().title("Small problem").legend())?;
/// ```
#[derive(Debug, Default)]
pub struct PlotSink {
    samples: [Vec<[f64; 2]>; 2],
}

impl PlotSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the `[iteration, error]` samples collected for `kind`.
    pub fn samples(&self, kind: SolverKind) -> &[[f64; 2]] {
        &self.samples[index(kind)]
    }

    /// Opens a blocking egui window displaying both residual curves.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let log_y = !config.linear_y;
        let traces = SolverKind::ALL
            .into_iter()
            .zip(self.samples)
            .map(|(kind, points)| (kind.to_string(), transform(&points, log_y)))
            .collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                    log_y,
                }))
            }),
        )
    }
}

impl UpdateSink for PlotSink {
    fn on_path_update(&mut self, _kind: SolverKind, _path: &[Point]) {}

    #[allow(clippy::cast_precision_loss)]
    fn on_error_sample(&mut self, kind: SolverKind, iteration: usize, error: f64) {
        self.samples[index(kind)].push([iteration as f64, error]);
    }

    fn on_status_change(&mut self, kind: SolverKind, status: StatusUpdate) {
        // A new run starts a fresh curve.
        if status == StatusUpdate::Running {
            self.samples[index(kind)].clear();
        }
    }

    fn on_log(&mut self, _kind: SolverKind, _message: &str) {}
}

fn index(kind: SolverKind) -> usize {
    match kind {
        SolverKind::Symmetric => 0,
        SolverKind::Asymmetric => 1,
    }
}

/// Maps samples onto the plotted axis.
fn transform(points: &[[f64; 2]], log_y: bool) -> Vec<[f64; 2]> {
    if log_y {
        points
            .iter()
            .filter(|p| p[1] > 0.0)
            .map(|p| [p[0], p[1].log10()])
            .collect()
    } else {
        points.to_vec()
    }
}

/// Returns the y range covering both solvers' residual axes.
fn y_bounds(log_y: bool) -> [f64; 2] {
    let (lo, hi) = SolverKind::ALL
        .iter()
        .map(|kind| kind.error_axis())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), [a, b]| {
            (lo.min(a), hi.max(b))
        });
    if log_y {
        [lo.log10(), hi.log10()]
    } else {
        [lo, hi]
    }
}

/// The egui [`eframe::App`] that renders collected residual curves.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
    log_y: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let [lo, hi] = y_bounds(self.log_y);
            let mut plot = Plot::new("residuals")
                .x_axis_label("iteration")
                .include_y(lo)
                .include_y(hi);
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot = plot.y_axis_label(if self.log_y {
                "log₁₀ residual"
            } else {
                "residual"
            });
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}
