//! Raster backend: figures to framebuffers.
//!
//! Draws the same geometry as the vector backend. Text is not rasterized.

use crate::color::Rgba;
use crate::error::Result;
use crate::figure::{Figure, TraceKind};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Rect};
use crate::render::layout::{marker_polygon, Layout, BUBBLE_ALPHA, LINE_WIDTH};
use crate::render::primitives::{draw_line_aa, draw_point, draw_thick_line, fill_polygon, Drawable};
use crate::theme::MarkerSymbol;

/// Render a figure to an RGBA framebuffer.
///
/// # Errors
///
/// Returns an error when the layout cannot be computed or the canvas has a
/// zero dimension.
pub fn render_raster(fig: &Figure) -> Result<Framebuffer> {
    let layout = Layout::compute(fig)?;
    let theme = &layout.theme;
    let area = layout.plot_area;

    let mut fb = Framebuffer::new(fig.width(), fig.height())?;
    fb.clear(theme.background);
    area.draw(&mut fb, theme.plot_background);

    for &tick in &layout.x_ticks {
        let x = layout.tick_x(tick);
        draw_line_aa(&mut fb, x, area.y, x, area.bottom(), theme.grid_color);
    }
    for &tick in &layout.y_ticks {
        let y = layout.tick_y(tick);
        draw_line_aa(&mut fb, area.x, y, area.right(), y, theme.grid_color);
    }
    draw_line_aa(&mut fb, area.x, area.bottom(), area.right(), area.bottom(), theme.axis_color);
    draw_line_aa(&mut fb, area.x, area.y, area.x, area.bottom(), theme.axis_color);

    let mut slot = 0;
    for (i, trace) in fig.traces().iter().enumerate() {
        let style = layout.style(i, trace);
        match trace.kind {
            TraceKind::Bar => {
                for bar in layout.bars(trace, slot) {
                    bar.draw(&mut fb, style.color);
                }
                slot += 1;
            }
            TraceKind::Scatter(mode) => {
                let points = layout.points(trace);
                if mode.has_lines() {
                    for pair in points.windows(2) {
                        draw_thick_line(&mut fb, pair[0], pair[1], LINE_WIDTH, style.color);
                    }
                }
                if mode.has_markers() {
                    let fill = if trace.marker_sizes.is_some() {
                        style.color.with_alpha(BUBBLE_ALPHA)
                    } else {
                        style.color
                    };
                    for (j, &p) in points.iter().enumerate() {
                        marker(&mut fb, style.symbol, p, layout.marker_size(trace, j), fill);
                    }
                }
            }
        }
    }

    // Legend swatches only; names need text.
    let half = theme.font.size * 0.6;
    for (i, trace) in fig.traces().iter().enumerate() {
        let style = layout.style(i, trace);
        let swatch = layout.legend_swatch(i);
        match trace.kind {
            TraceKind::Bar => {
                Rect::new(swatch.x - half, swatch.y - half / 2.0, half * 2.0, half)
                    .draw(&mut fb, style.color);
            }
            TraceKind::Scatter(mode) => {
                if mode.has_lines() {
                    draw_thick_line(
                        &mut fb,
                        swatch.offset(-half, 0.0),
                        swatch.offset(half, 0.0),
                        LINE_WIDTH,
                        style.color,
                    );
                }
                if mode.has_markers() {
                    marker(&mut fb, style.symbol, swatch, style.marker_size, style.color);
                }
            }
        }
    }

    Ok(fb)
}

fn marker(fb: &mut Framebuffer, symbol: MarkerSymbol, center: Point, size: f32, color: Rgba) {
    if symbol == MarkerSymbol::Circle {
        draw_point(fb, center, size, color);
    } else {
        fill_polygon(fb, &marker_polygon(symbol, center, size), color);
    }
}
