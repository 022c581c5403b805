//! Plot builders.
//!
//! Each builder maps a list of signals onto a [`Figure`] with one trace per
//! signal, named `"Data 0"`, `"Data 1"`, ... and a shared title and axis titles.

mod bar;
mod bubble;
mod lines;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::figure::{Figure, Trace};
use crate::signal::Signal;

pub use bar::{plot_bars, DEFAULT_BAR_TITLE};
pub use bubble::{plot_bubbles, DEFAULT_BUBBLE_TITLE};
pub use lines::{plot_lines, plot_lines_and_dots, DEFAULT_LINES_TITLE};

/// Default x-axis title.
pub const DEFAULT_X_LABEL: &str = "X label";
/// Default y-axis title.
pub const DEFAULT_Y_LABEL: &str = "Y label";

/// Legend name of the `index`-th series.
#[must_use]
pub fn series_name(index: usize) -> String {
    format!("Data {index}")
}

fn build_figure(
    traces: impl IntoIterator<Item = Trace>,
    title: &str,
    x_label: &str,
    y_label: &str,
) -> Figure {
    let mut fig = Figure::new();
    for trace in traces {
        fig.add_trace(trace);
    }
    fig.update_layout(title, x_label, y_label);
    debug!(traces = fig.traces().len(), title, "built figure");
    fig
}

/// The four chart variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotKind {
    /// Lines with a marker at each sample.
    #[default]
    LinesAndDots,
    /// Lines only.
    Lines,
    /// Grouped bars.
    Bars,
    /// Bubbles sized per point.
    Bubbles,
}

impl PlotKind {
    /// Name as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LinesAndDots => "lines-and-dots",
            Self::Lines => "lines",
            Self::Bars => "bars",
            Self::Bubbles => "bubbles",
        }
    }

    /// Title used when the caller supplies none.
    #[must_use]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::LinesAndDots | Self::Lines => DEFAULT_LINES_TITLE,
            Self::Bars => DEFAULT_BAR_TITLE,
            Self::Bubbles => DEFAULT_BUBBLE_TITLE,
        }
    }

    /// Build a figure of this kind.
    ///
    /// `bubble_size` is only read for [`PlotKind::Bubbles`].
    ///
    /// # Errors
    ///
    /// Propagates the size validation errors of [`plot_bubbles`].
    pub fn build(
        self,
        data: &[Signal],
        bubble_size: &[Vec<f32>],
        title: &str,
        x_label: &str,
        y_label: &str,
    ) -> Result<Figure> {
        match self {
            Self::LinesAndDots => Ok(plot_lines_and_dots(data, title, x_label, y_label)),
            Self::Lines => Ok(plot_lines(data, title, x_label, y_label)),
            Self::Bars => Ok(plot_bars(data, title, x_label, y_label)),
            Self::Bubbles => plot_bubbles(data, bubble_size, title, x_label, y_label),
        }
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlotKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "lines-and-dots" | "lines+markers" => Ok(Self::LinesAndDots),
            "lines" => Ok(Self::Lines),
            "bars" | "bar" => Ok(Self::Bars),
            "bubbles" | "bubble" => Ok(Self::Bubbles),
            _ => Err(Error::UnknownPlotKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_names() {
        assert_eq!(series_name(0), "Data 0");
        assert_eq!(series_name(12), "Data 12");
    }

    #[test]
    fn test_plot_kind_parsing() {
        assert_eq!("lines-and-dots".parse::<PlotKind>().unwrap(), PlotKind::LinesAndDots);
        assert_eq!("lines_and_dots".parse::<PlotKind>().unwrap(), PlotKind::LinesAndDots);
        assert_eq!("Lines".parse::<PlotKind>().unwrap(), PlotKind::Lines);
        assert_eq!("bar".parse::<PlotKind>().unwrap(), PlotKind::Bars);
        assert_eq!("bubbles".parse::<PlotKind>().unwrap(), PlotKind::Bubbles);
        assert!("pie".parse::<PlotKind>().is_err());
    }

    #[test]
    fn test_default_titles() {
        assert_eq!(PlotKind::Lines.default_title(), "Plot lines");
        assert_eq!(PlotKind::Bars.default_title(), "Bar plot");
        assert_eq!(PlotKind::Bubbles.default_title(), "Bubble plot");
    }

    #[test]
    fn test_every_kind_labels_every_signal() {
        let data = vec![vec![1.0, 2.0]; 4];
        let sizes = vec![vec![10.0, 20.0]; 4];
        for kind in [
            PlotKind::LinesAndDots,
            PlotKind::Lines,
            PlotKind::Bars,
            PlotKind::Bubbles,
        ] {
            let fig = kind.build(&data, &sizes, "t", "x", "y").unwrap();
            assert_eq!(
                fig.trace_names(),
                vec!["Data 0", "Data 1", "Data 2", "Data 3"],
                "{kind}"
            );
        }
    }

    #[test]
    fn test_non_bubble_kinds_ignore_sizes() {
        let data = vec![vec![1.0, 2.0]];
        let fig = PlotKind::Bars.build(&data, &[], "t", "x", "y").unwrap();
        assert_eq!(fig.traces().len(), 1);
    }
}
