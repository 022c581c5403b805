//! Rendering backends.
//!
//! [`Layout`] resolves a figure's geometry once; [`render_svg`] and
//! [`render_raster`] then draw it as a vector document or a pixel buffer.

pub mod layout;
mod primitives;
mod raster;
mod vector;

pub use layout::{marker_polygon, Layout, TraceStyle};
pub use primitives::{
    draw_circle, draw_line_aa, draw_point, draw_rect, draw_thick_line, fill_polygon, Drawable,
};
pub use raster::render_raster;
pub use vector::render_svg;
