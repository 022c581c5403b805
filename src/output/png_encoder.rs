//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate.

use crate::error::Result;
use crate::figure::Figure;
use crate::framebuffer::Framebuffer;
use crate::render::render_raster;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PNG encoder for framebuffer output.
pub struct PngEncoder;

impl PngEncoder {
    /// Encode a framebuffer as an 8-bit RGBA PNG into `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn encode<W: Write>(fb: &Framebuffer, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        // Stride padding must not reach the encoder.
        writer.write_image_data(&fb.to_compact_pixels())?;
        Ok(())
    }

    /// Write a framebuffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let file = File::create(path)?;
        Self::encode(fb, BufWriter::new(file))
    }

    /// Encode a framebuffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(fb, &mut buffer)?;
        Ok(buffer)
    }

    /// Rasterize a figure and write it as PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering, file creation or encoding fails.
    pub fn write_figure<P: AsRef<Path>>(fig: &Figure, path: P) -> Result<()> {
        let fb = render_raster(fig)?;
        Self::write_to_file(&fb, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::plots::plot_bars;

    const PNG_MAGIC: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    #[test]
    fn test_png_to_bytes() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);

        let bytes = PngEncoder::to_bytes(&fb).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);
    }

    #[test]
    fn test_png_decodes_to_same_size() {
        // Width 10 exercises stride padding.
        let mut fb = Framebuffer::new(10, 7).unwrap();
        fb.clear(Rgba::BLUE);
        let bytes = PngEncoder::to_bytes(&fb).unwrap();

        let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (10, 7));
    }

    #[test]
    fn test_write_figure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bars.png");
        let fig = plot_bars(&[vec![1.0, 2.0, 3.0]], "Bars", "x", "y");

        PngEncoder::write_figure(&fig, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);
    }
}
