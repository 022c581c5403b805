//! Vector backend: figures to SVG documents.

use crate::color::Rgba;
use crate::error::Result;
use crate::figure::{Figure, Trace, TraceKind};
use crate::geometry::Point;
use crate::output::{SvgEncoder, TextAnchor};
use crate::render::layout::{marker_polygon, Layout, TraceStyle, BUBBLE_ALPHA, LINE_WIDTH};
use crate::scale::format_tick;
use crate::theme::{FontSpec, MarkerSymbol};

/// Render a figure to an SVG document.
///
/// # Errors
///
/// Returns an error when the layout cannot be computed (canvas too small).
///
/// # Example
///
/// ```
/// use tmx_plots::plots::plot_lines_and_dots;
/// use tmx_plots::render::render_svg;
///
/// let fig = plot_lines_and_dots(&[vec![1.0, 3.0, 2.0]], "Demo", "x", "y");
/// let svg = render_svg(&fig).unwrap().render();
/// assert!(svg.contains("Demo"));
/// ```
pub fn render_svg(fig: &Figure) -> Result<SvgEncoder> {
    let layout = Layout::compute(fig)?;
    let theme = &layout.theme;

    let mut svg = SvgEncoder::new(fig.width(), fig.height()).background(Some(theme.background));
    svg = draw_frame(svg, &layout);

    let mut slot = 0;
    for (i, trace) in fig.traces().iter().enumerate() {
        let style = layout.style(i, trace);
        svg = match trace.kind {
            TraceKind::Bar => {
                let bars = layout.bars(trace, slot);
                slot += 1;
                bars.into_iter().fold(svg, |svg, bar| {
                    svg.rect(bar.x, bar.y, bar.width, bar.height, style.color)
                })
            }
            TraceKind::Scatter(mode) => {
                let points = layout.points(trace);
                if mode.has_lines() && points.len() > 1 {
                    let coords: Vec<(f32, f32)> = points.iter().map(|p| (p.x, p.y)).collect();
                    svg = svg.polyline(&coords, style.color, LINE_WIDTH);
                }
                if mode.has_markers() {
                    svg = draw_markers(svg, &layout, trace, &points, style);
                }
                svg
            }
        };
    }

    svg = draw_labels(svg, fig, &layout);
    Ok(draw_legend(svg, fig, &layout))
}

fn draw_frame(mut svg: SvgEncoder, layout: &Layout) -> SvgEncoder {
    let theme = &layout.theme;
    let area = layout.plot_area;

    svg = svg.rect(area.x, area.y, area.width, area.height, theme.plot_background);

    for &tick in &layout.x_ticks {
        let x = layout.tick_x(tick);
        svg = svg.line((x, area.y), (x, area.bottom()), theme.grid_color, 1.0);
    }
    for &tick in &layout.y_ticks {
        let y = layout.tick_y(tick);
        svg = svg.line((area.x, y), (area.right(), y), theme.grid_color, 1.0);
    }

    svg.line((area.x, area.bottom()), (area.right(), area.bottom()), theme.axis_color, 1.0)
        .line((area.x, area.y), (area.x, area.bottom()), theme.axis_color, 1.0)
}

fn draw_markers(
    mut svg: SvgEncoder,
    layout: &Layout,
    trace: &Trace,
    points: &[Point],
    style: TraceStyle,
) -> SvgEncoder {
    let fill = if trace.marker_sizes.is_some() {
        style.color.with_alpha(BUBBLE_ALPHA)
    } else {
        style.color
    };

    for (j, &p) in points.iter().enumerate() {
        let size = layout.marker_size(trace, j);
        svg = marker(svg, style.symbol, p, size, fill);
    }
    svg
}

fn marker(svg: SvgEncoder, symbol: MarkerSymbol, center: Point, size: f32, fill: Rgba) -> SvgEncoder {
    if symbol == MarkerSymbol::Circle {
        return svg.circle(center.x, center.y, size / 2.0, fill, None);
    }
    let coords: Vec<(f32, f32)> = marker_polygon(symbol, center, size)
        .into_iter()
        .map(|p| (p.x, p.y))
        .collect();
    svg.polygon(&coords, fill, None, 0.0)
}

fn draw_labels(mut svg: SvgEncoder, fig: &Figure, layout: &Layout) -> SvgEncoder {
    let theme = &layout.theme;
    let area = layout.plot_area;
    let body = &theme.font;
    let tick_font = FontSpec {
        size: body.size * 0.8,
        ..body.clone()
    };

    for &tick in &layout.x_ticks {
        svg = svg.text(
            layout.tick_x(tick),
            area.bottom() + tick_font.size * 1.3,
            &format_tick(tick),
            &tick_font,
            TextAnchor::Middle,
        );
    }
    for &tick in &layout.y_ticks {
        svg = svg.text(
            area.x - tick_font.size * 0.5,
            layout.tick_y(tick) + tick_font.size * 0.35,
            &format_tick(tick),
            &tick_font,
            TextAnchor::End,
        );
    }

    if !fig.title().is_empty() {
        svg = svg.text(
            layout.width / 2.0,
            theme.title_font.size * 1.4,
            fig.title(),
            &theme.title_font,
            TextAnchor::Middle,
        );
    }
    if !fig.x_label().is_empty() {
        svg = svg.text(
            area.x + area.width / 2.0,
            layout.height - body.size * 0.6,
            fig.x_label(),
            body,
            TextAnchor::Middle,
        );
    }
    if !fig.y_label().is_empty() {
        svg = svg.text_rotated(
            body.size * 1.2,
            area.y + area.height / 2.0,
            fig.y_label(),
            body,
            TextAnchor::Middle,
            -90.0,
        );
    }
    svg
}

fn draw_legend(mut svg: SvgEncoder, fig: &Figure, layout: &Layout) -> SvgEncoder {
    let body = &layout.theme.font;
    let half = body.size * 0.6;

    for (i, trace) in fig.traces().iter().enumerate() {
        let style = layout.style(i, trace);
        let swatch = layout.legend_swatch(i);

        svg = match trace.kind {
            TraceKind::Bar => svg.rect(swatch.x - half, swatch.y - half / 2.0, half * 2.0, half, style.color),
            TraceKind::Scatter(mode) => {
                if mode.has_lines() {
                    svg = svg.line(
                        (swatch.x - half, swatch.y),
                        (swatch.x + half, swatch.y),
                        style.color,
                        LINE_WIDTH,
                    );
                }
                if mode.has_markers() {
                    svg = marker(svg, style.symbol, swatch, style.marker_size, style.color);
                }
                svg
            }
        };

        svg = svg.text(
            swatch.x + half * 1.6,
            swatch.y + body.size * 0.35,
            &trace.name,
            body,
            TextAnchor::Start,
        );
    }
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plots::{plot_bars, plot_bubbles, plot_lines, plot_lines_and_dots};
    use crate::theme::Theme;

    #[test]
    fn test_svg_contains_labels_and_legend() {
        let fig = plot_lines_and_dots(
            &[vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0]],
            "Sinusoidal Plot",
            "Time",
            "Amplitude",
        );
        let svg = render_svg(&fig).unwrap().render();

        assert!(svg.contains(">Sinusoidal Plot</text>"));
        assert!(svg.contains(">Time</text>"));
        assert!(svg.contains(">Amplitude</text>"));
        assert!(svg.contains("rotate(-90"));
        assert!(svg.contains(">Data 0</text>"));
        assert!(svg.contains(">Data 1</text>"));
    }

    #[test]
    fn test_themed_svg_uses_nexa_and_colorway() {
        let fig = plot_lines_and_dots(&[vec![1.0, 2.0]], "T", "x", "y").with_theme(Theme::light());
        let svg = render_svg(&fig).unwrap().render();

        assert!(svg.contains("font-family=\"Nexa, sans-serif\" font-size=\"26\" font-weight=\"bold\""));
        assert!(svg.contains("font-size=\"18\""));
        assert!(svg.contains("rgb(0,189,242)"));
    }

    #[test]
    fn test_lines_mode_has_no_markers() {
        let fig = plot_lines(&[vec![1.0, 2.0, 3.0]], "T", "x", "y");
        let svg = render_svg(&fig).unwrap().render();

        assert_eq!(svg.matches("<polyline").count(), 1);
        assert_eq!(svg.matches("<circle").count(), 0);
    }

    #[test]
    fn test_second_series_uses_square_markers() {
        let fig = plot_lines_and_dots(&[vec![1.0, 2.0], vec![2.0, 1.0]], "T", "x", "y")
            .with_theme(Theme::light());
        let svg = render_svg(&fig).unwrap().render();

        // Two data markers plus the legend swatch for the square series.
        assert_eq!(svg.matches("<polygon").count(), 3);
    }

    #[test]
    fn test_bars_emit_one_rect_per_value() {
        let fig = plot_bars(&[vec![1.0, 2.0, 3.0]], "T", "x", "y");
        let plain = render_svg(&plot_lines(&[vec![1.0, 2.0, 3.0]], "T", "x", "y"))
            .unwrap()
            .render();
        let svg = render_svg(&fig).unwrap().render();

        // Three bars plus the legend swatch.
        assert_eq!(svg.matches("<rect").count(), plain.matches("<rect").count() + 4);
    }

    #[test]
    fn test_bubbles_are_translucent_circles() {
        let fig = plot_bubbles(&[vec![1.0, 2.0]], &[vec![10.0, 30.0]], "T", "x", "y").unwrap();
        let svg = render_svg(&fig).unwrap().render();

        assert!(svg.contains("r=\"15\""));
        assert!(svg.contains("rgba("));
    }
}
