//! Primitive rasterization.
//!
//! Wu anti-aliased lines, span-filled circles and scanline polygons,
//! all composited with [`Framebuffer::blend_pixel`] so translucent colors
//! (bubbles, anti-aliased edges) mix with what is already drawn.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Rect};

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a framebuffer.
    fn draw(&self, fb: &mut Framebuffer, color: Rgba);
}

// ============================================================================
// Lines
// ============================================================================

/// Draw an anti-aliased line using Wu's algorithm.
///
/// Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
pub fn draw_line_aa(fb: &mut Framebuffer, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba) {
    let steep = (y1 - y0).abs() > (x1 - x0).abs();

    let (x0, y0, x1, y1) = if steep { (y0, x0, y1, x1) } else { (x0, y0, x1, y1) };
    let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx.abs() < f32::EPSILON { 1.0 } else { dy / dx };

    let mut put = |major: i32, minor: i32, intensity: f32| {
        if steep {
            plot(fb, minor, major, color, intensity);
        } else {
            plot(fb, major, minor, color, intensity);
        }
    };

    // First endpoint
    let xend = x0.round();
    let yend = y0 + gradient * (xend - x0);
    let xgap = rfpart(x0 + 0.5);
    let xpxl1 = xend as i32;
    let ypxl1 = yend.floor() as i32;
    put(xpxl1, ypxl1, rfpart(yend) * xgap);
    put(xpxl1, ypxl1 + 1, fpart(yend) * xgap);

    let mut intery = yend + gradient;

    // Second endpoint
    let xend = x1.round();
    let yend = y1 + gradient * (xend - x1);
    let xgap = fpart(x1 + 0.5);
    let xpxl2 = xend as i32;
    let ypxl2 = yend.floor() as i32;
    put(xpxl2, ypxl2, rfpart(yend) * xgap);
    put(xpxl2, ypxl2 + 1, fpart(yend) * xgap);

    for x in (xpxl1 + 1)..xpxl2 {
        let ipart = intery.floor() as i32;
        put(x, ipart, rfpart(intery));
        put(x, ipart + 1, fpart(intery));
        intery += gradient;
    }
}

/// Draw an anti-aliased line of the given thickness as parallel Wu lines.
pub fn draw_thick_line(fb: &mut Framebuffer, from: Point, to: Point, thickness: f32, color: Rgba) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len < f32::EPSILON {
        return;
    }

    // Unit normal
    let (nx, ny) = (-dy / len, dx / len);
    let passes = thickness.round().max(1.0) as i32;
    let half = (passes - 1) as f32 / 2.0;

    for i in 0..passes {
        let o = i as f32 - half;
        draw_line_aa(
            fb,
            from.x + nx * o,
            from.y + ny * o,
            to.x + nx * o,
            to.y + ny * o,
            color,
        );
    }
}

/// Plot a pixel with intensity (for anti-aliased drawing).
#[inline]
fn plot(fb: &mut Framebuffer, x: i32, y: i32, color: Rgba, intensity: f32) {
    if x >= 0 && y >= 0 && x < fb.width() as i32 && y < fb.height() as i32 {
        let alpha = (f32::from(color.a) * intensity.clamp(0.0, 1.0)) as u8;
        fb.blend_pixel(x as u32, y as u32, color.with_alpha(alpha));
    }
}

#[inline]
fn fpart(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
fn rfpart(x: f32) -> f32 {
    1.0 - fpart(x)
}

// ============================================================================
// Rectangles
// ============================================================================

/// Draw a filled rectangle, clipped to the framebuffer.
pub fn draw_rect(fb: &mut Framebuffer, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
    // Shift the size when the origin is clipped so the far edge stays put.
    let width = width.saturating_sub(x.min(0).unsigned_abs());
    let height = height.saturating_sub(y.min(0).unsigned_abs());
    fb.fill_rect(x.max(0) as u32, y.max(0) as u32, width, height, color);
}

impl Drawable for Rect {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        let x0 = self.x.round() as i32;
        let y0 = self.y.round() as i32;
        let x1 = self.right().round() as i32;
        let y1 = self.bottom().round() as i32;
        if x1 > x0 && y1 > y0 {
            draw_rect(fb, x0, y0, (x1 - x0) as u32, (y1 - y0) as u32, color);
        }
    }
}

// ============================================================================
// Circles
// ============================================================================

/// Draw a filled circle, one horizontal span per row.
///
/// Each row is blended exactly once so translucent fills stay uniform.
pub fn draw_circle(fb: &mut Framebuffer, cx: i32, cy: i32, radius: i32, color: Rgba) {
    if radius < 0 {
        return;
    }

    // Only rows inside the framebuffer are visited.
    let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
    let top = (cy - r).max(0);
    let bottom = (cy + r).min(i64::from(fb.height()) - 1);
    let r2 = (r * r) as f64;

    for y in top..=bottom {
        let dy = (y - cy) as f64;
        let half = (r2 - dy * dy).max(0.0).sqrt() as i64;
        span(fb, clamp_i32(cx - half), clamp_i32(cx + half), y as i32, color);
    }
}

/// Draw a point of the given diameter as a filled circle.
///
/// The radius is capped at the framebuffer diagonal; non-finite or
/// negative sizes draw nothing.
pub fn draw_point(fb: &mut Framebuffer, center: Point, size: f32, color: Rgba) {
    if !size.is_finite() || size < 0.0 {
        return;
    }
    let diagonal = (fb.width() as f32).hypot(fb.height() as f32);
    let radius = (size / 2.0).min(diagonal).round() as i32;
    draw_circle(fb, center.x.round() as i32, center.y.round() as i32, radius, color);
}

#[inline]
fn clamp_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Blend a horizontal run of pixels `[x1, x2]` on row `y`.
#[inline]
fn span(fb: &mut Framebuffer, x1: i32, x2: i32, y: i32, color: Rgba) {
    if y < 0 || y >= fb.height() as i32 {
        return;
    }
    let start = x1.max(0);
    let end = x2.min(fb.width() as i32 - 1);
    for x in start..=end {
        fb.blend_pixel(x as u32, y as u32, color);
    }
}

// ============================================================================
// Polygons
// ============================================================================

/// Fill a simple polygon using even-odd scanline filling.
pub fn fill_polygon(fb: &mut Framebuffer, vertices: &[Point], color: Rgba) {
    if vertices.len() < 3 {
        return;
    }

    let min_y = vertices.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = vertices.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
    let y_start = min_y.floor().max(0.0) as i32;
    let y_end = max_y.ceil().min(fb.height() as f32) as i32;

    let mut crossings = Vec::with_capacity(vertices.len());
    for y in y_start..y_end {
        // Sample at the pixel centre.
        let sy = y as f32 + 0.5;
        crossings.clear();

        for (i, a) in vertices.iter().enumerate() {
            let b = vertices[(i + 1) % vertices.len()];
            if (a.y <= sy && b.y > sy) || (b.y <= sy && a.y > sy) {
                let t = (sy - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }
        crossings.sort_by(f32::total_cmp);

        for pair in crossings.chunks_exact(2) {
            let x1 = (pair[0] - 0.5).ceil() as i32;
            let x2 = (pair[1] - 0.5).floor() as i32;
            if x2 >= x1 {
                span(fb, x1, x2, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white(w: u32, h: u32) -> Framebuffer {
        let mut fb = Framebuffer::new(w, h).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);
        fb
    }

    #[test]
    fn test_draw_line_aa() {
        let mut fb = white(100, 100);
        draw_line_aa(&mut fb, 10.0, 50.0, 90.0, 50.0, Rgba::BLACK);

        let pixel = fb.get_pixel(50, 50).unwrap();
        assert!(pixel.r < 128, "line pixel should be dark, got {pixel:?}");
        assert_eq!(fb.get_pixel(50, 10), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_line_aa_steep() {
        let mut fb = white(100, 100);
        draw_line_aa(&mut fb, 50.0, 10.0, 50.0, 90.0, Rgba::BLACK);
        assert!(fb.get_pixel(50, 50).unwrap().r < 128);
    }

    #[test]
    fn test_thick_line_covers_neighbours() {
        let mut fb = white(100, 100);
        draw_thick_line(
            &mut fb,
            Point::new(10.0, 50.0),
            Point::new(90.0, 50.0),
            3.0,
            Rgba::BLACK,
        );
        assert!(fb.get_pixel(50, 49).unwrap().r < 128);
        assert!(fb.get_pixel(50, 51).unwrap().r < 128);
    }

    #[test]
    fn test_line_out_of_bounds() {
        let mut fb = white(100, 100);
        draw_line_aa(&mut fb, -10.0, -10.0, 110.0, 110.0, Rgba::BLACK);
        assert!(fb.get_pixel(50, 50).unwrap().r < 255);
    }

    #[test]
    fn test_draw_rect_clipped() {
        let mut fb = white(100, 100);
        draw_rect(&mut fb, -10, -10, 30, 30, Rgba::RED);

        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(19, 19), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(20, 20), Some(Rgba::WHITE));
    }

    #[test]
    fn test_drawable_rect() {
        let mut fb = white(100, 100);
        Rect::new(20.0, 20.0, 30.0, 30.0).draw(&mut fb, Rgba::GREEN);
        assert_eq!(fb.get_pixel(35, 35), Some(Rgba::GREEN));
        assert_eq!(fb.get_pixel(55, 55), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_circle() {
        let mut fb = white(100, 100);
        draw_circle(&mut fb, 50, 50, 20, Rgba::BLUE);

        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(69, 50), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(50, 31), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(66, 66), Some(Rgba::WHITE));
    }

    #[test]
    fn test_huge_circle_is_clipped() {
        let mut fb = white(40, 30);
        draw_circle(&mut fb, 20, 15, i32::MAX, Rgba::BLUE);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(39, 29), Some(Rgba::BLUE));

        let mut fb = white(40, 30);
        draw_circle(&mut fb, i32::MIN, i32::MAX, i32::MAX, Rgba::BLUE);
    }

    #[test]
    fn test_point_with_unbounded_size() {
        let mut fb = white(40, 30);
        draw_point(&mut fb, Point::new(20.0, 15.0), f32::INFINITY, Rgba::RED);
        draw_point(&mut fb, Point::new(20.0, 15.0), f32::NAN, Rgba::RED);
        assert_eq!(fb.get_pixel(20, 15), Some(Rgba::WHITE));

        draw_point(&mut fb, Point::new(20.0, 15.0), 1.0e12, Rgba::RED);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::RED));
    }

    #[test]
    fn test_translucent_circle_blends_once() {
        let mut fb = white(60, 60);
        let color = Rgba::new(0, 0, 0, 128);
        draw_circle(&mut fb, 30, 30, 10, color);

        // Every covered row is blended exactly once, so rows look alike.
        let centre = fb.get_pixel(30, 30).unwrap();
        let upper = fb.get_pixel(30, 25).unwrap();
        let edge = fb.get_pixel(30, 21).unwrap();
        assert_eq!(centre, upper);
        assert_eq!(centre, edge);
    }

    #[test]
    fn test_circle_zero_radius() {
        let mut fb = white(100, 100);
        draw_circle(&mut fb, 50, 50, 0, Rgba::RED);
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::RED));
    }

    #[test]
    fn test_draw_point() {
        let mut fb = white(100, 100);
        draw_point(&mut fb, Point::new(50.0, 50.0), 10.0, Rgba::RED);
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(54, 50), Some(Rgba::RED));
    }

    #[test]
    fn test_fill_polygon_square() {
        let mut fb = white(50, 50);
        let square = [
            Point::new(10.0, 10.0),
            Point::new(30.0, 10.0),
            Point::new(30.0, 30.0),
            Point::new(10.0, 30.0),
        ];
        fill_polygon(&mut fb, &square, Rgba::RED);

        assert_eq!(fb.get_pixel(10, 10), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(29, 29), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(30, 30), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(9, 20), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_polygon_concave_cross() {
        let mut fb = white(50, 50);
        let cross: Vec<Point> = crate::theme::MarkerSymbol::Cross
            .outline(30.0)
            .into_iter()
            .map(|(x, y)| Point::new(25.0 + x, 25.0 + y))
            .collect();
        fill_polygon(&mut fb, &cross, Rgba::BLUE);

        assert_eq!(fb.get_pixel(25, 25), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(25, 12), Some(Rgba::BLUE));
        // Corner notch stays empty.
        assert_eq!(fb.get_pixel(13, 13), Some(Rgba::WHITE));
    }

    #[test]
    fn test_degenerate_polygon_is_noop() {
        let mut fb = white(10, 10);
        fill_polygon(&mut fb, &[Point::new(1.0, 1.0), Point::new(5.0, 5.0)], Rgba::RED);
        assert_eq!(fb.get_pixel(3, 3), Some(Rgba::WHITE));
    }
}
