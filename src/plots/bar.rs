//! Grouped bar charts.

use crate::figure::{Figure, Trace, TraceKind};
use crate::signal::Signal;

use super::{build_figure, series_name};

/// Title used by [`plot_bars`] when none is given.
pub const DEFAULT_BAR_TITLE: &str = "Bar plot";

/// Bar chart, one bar trace per signal; bars at the same x are grouped.
#[must_use]
pub fn plot_bars(data: &[Signal], title: &str, x_label: &str, y_label: &str) -> Figure {
    let traces = data
        .iter()
        .enumerate()
        .map(|(i, signal)| Trace::new(series_name(i), signal, TraceKind::Bar));
    build_figure(traces, title, x_label, y_label)
}
