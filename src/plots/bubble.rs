//! Bubble charts: circle markers sized per point.

use crate::error::{Error, Result};
use crate::figure::{Figure, ScatterMode, Trace, TraceKind};
use crate::signal::Signal;
use crate::theme::MarkerSymbol;

use super::{build_figure, series_name};

/// Title used by [`plot_bubbles`] when none is given.
pub const DEFAULT_BUBBLE_TITLE: &str = "Bubble plot";

/// Bubble chart. `bubble_size[i][j]` is the diameter in pixels of sample `j`
/// of signal `i`.
///
/// # Errors
///
/// Returns [`Error::BubbleSizeMismatch`] if there are fewer size lists than
/// signals, and [`Error::BubbleSizeLengthMismatch`] if a size list's length
/// differs from its signal's length.
pub fn plot_bubbles(
    data: &[Signal],
    bubble_size: &[Vec<f32>],
    title: &str,
    x_label: &str,
    y_label: &str,
) -> Result<Figure> {
    if bubble_size.len() < data.len() {
        return Err(Error::BubbleSizeMismatch {
            signals: data.len(),
            sizes: bubble_size.len(),
        });
    }

    let traces = data
        .iter()
        .zip(bubble_size)
        .enumerate()
        .map(|(i, (signal, sizes))| {
            if sizes.len() != signal.len() {
                return Err(Error::BubbleSizeLengthMismatch {
                    signal: i,
                    points: signal.len(),
                    sizes: sizes.len(),
                });
            }
            Ok(
                Trace::new(series_name(i), signal, TraceKind::Scatter(ScatterMode::Markers))
                    .marker_symbol(MarkerSymbol::Circle)
                    .marker_sizes(sizes),
            )
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(build_figure(traces, title, x_label, y_label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_traces() {
        let data = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let sizes = vec![vec![10.0, 20.0, 30.0], vec![1.0, 2.0, 3.0]];
        let fig = plot_bubbles(&data, &sizes, DEFAULT_BUBBLE_TITLE, "Time", "Position").unwrap();

        assert_eq!(fig.trace_names(), vec!["Data 0", "Data 1"]);
        let trace = &fig.traces()[0];
        assert_eq!(trace.kind, TraceKind::Scatter(ScatterMode::Markers));
        assert_eq!(trace.marker_symbol, Some(MarkerSymbol::Circle));
        assert_eq!(trace.marker_sizes.as_deref(), Some(&[10.0, 20.0, 30.0][..]));
    }

    #[test]
    fn test_bubble_missing_sizes() {
        let data = vec![vec![1.0], vec![2.0]];
        let sizes = vec![vec![5.0]];
        let err = plot_bubbles(&data, &sizes, "t", "x", "y").unwrap_err();
        assert!(matches!(
            err,
            Error::BubbleSizeMismatch {
                signals: 2,
                sizes: 1
            }
        ));
    }

    #[test]
    fn test_bubble_wrong_length_sizes() {
        let data = vec![vec![0.0, 1.0], vec![1.0, 2.0, 3.0]];
        let sizes = vec![vec![4.0, 4.0], vec![5.0, 6.0]];
        let err = plot_bubbles(&data, &sizes, "t", "x", "y").unwrap_err();
        assert!(matches!(
            err,
            Error::BubbleSizeLengthMismatch { signal: 1, points: 3, sizes: 2 }
        ));
    }

    #[test]
    fn test_extra_size_lists_are_ignored() {
        let data = vec![vec![1.0]];
        let sizes = vec![vec![5.0], vec![9.0]];
        let fig = plot_bubbles(&data, &sizes, "t", "x", "y").unwrap();
        assert_eq!(fig.traces().len(), 1);
    }
}
