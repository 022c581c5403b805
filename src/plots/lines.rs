//! Line charts, with and without point markers.

use crate::figure::{Figure, ScatterMode, Trace, TraceKind};
use crate::signal::Signal;

use super::{build_figure, series_name};

/// Title used by [`plot_lines_and_dots`] and [`plot_lines`] when none is given.
pub const DEFAULT_LINES_TITLE: &str = "Plot lines";

/// Line chart with a marker at every sample, one trace per signal.
#[must_use]
pub fn plot_lines_and_dots(data: &[Signal], title: &str, x_label: &str, y_label: &str) -> Figure {
    scatter_figure(data, ScatterMode::LinesAndMarkers, title, x_label, y_label)
}

/// Line-only chart, one trace per signal.
#[must_use]
pub fn plot_lines(data: &[Signal], title: &str, x_label: &str, y_label: &str) -> Figure {
    scatter_figure(data, ScatterMode::Lines, title, x_label, y_label)
}

fn scatter_figure(
    data: &[Signal],
    mode: ScatterMode,
    title: &str,
    x_label: &str,
    y_label: &str,
) -> Figure {
    let traces = data
        .iter()
        .enumerate()
        .map(|(i, signal)| Trace::new(series_name(i), signal, TraceKind::Scatter(mode)));
    build_figure(traces, title, x_label, y_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_and_dots_traces() {
        let data = vec![vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0]];
        let fig = plot_lines_and_dots(&data, "Sinusoidal Plot", "Time", "Amplitude");

        assert_eq!(fig.trace_names(), vec!["Data 0", "Data 1"]);
        assert_eq!(fig.title(), "Sinusoidal Plot");
        assert_eq!(fig.x_label(), "Time");
        assert_eq!(fig.y_label(), "Amplitude");
        for trace in fig.traces() {
            assert_eq!(
                trace.kind,
                TraceKind::Scatter(ScatterMode::LinesAndMarkers)
            );
        }
        assert_eq!(fig.traces()[1].y, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_lines_mode() {
        let data = vec![vec![0.5; 4]];
        let fig = plot_lines(&data, DEFAULT_LINES_TITLE, "X label", "Y label");

        assert_eq!(fig.traces().len(), 1);
        assert_eq!(fig.traces()[0].kind, TraceKind::Scatter(ScatterMode::Lines));
        assert_eq!(fig.traces()[0].x, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_no_signals_no_traces() {
        let fig = plot_lines(&[], "t", "x", "y");
        assert!(fig.traces().is_empty());
    }
}
