//! Standalone HTML page embedding a figure's SVG.

use crate::error::Result;
use crate::figure::Figure;
use crate::output::svg::escape_xml;
use crate::render::render_svg;
use std::fs;
use std::path::Path;

/// A self-contained HTML document showing one figure.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    title: String,
    body: String,
}

impl HtmlPage {
    /// Render a figure into a page titled after it.
    ///
    /// # Errors
    ///
    /// Returns an error if the figure cannot be laid out.
    pub fn from_figure(fig: &Figure) -> Result<Self> {
        let title = if fig.title().is_empty() {
            "Figure".to_string()
        } else {
            fig.title().to_string()
        };
        Ok(Self {
            title,
            body: render_svg(fig)?.render(),
        })
    }

    /// The full HTML document.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{}</title>\n\
             <style>body {{ margin: 0; display: flex; justify-content: center; background: #ffffff; }}</style>\n\
             </head>\n<body>\n{}</body>\n</html>\n",
            escape_xml(&self.title),
            self.body
        )
    }

    /// Write the document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plots::plot_lines_and_dots;

    #[test]
    fn test_page_embeds_svg() {
        let fig = plot_lines_and_dots(&[vec![1.0, 2.0]], "A < B", "x", "y");
        let html = HtmlPage::from_figure(&fig).unwrap().render();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &lt; B</title>"));
        assert!(html.contains("<svg xmlns="));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_untitled_page() {
        let fig = plot_lines_and_dots(&[vec![1.0, 2.0]], "", "x", "y");
        let html = HtmlPage::from_figure(&fig).unwrap().render();
        assert!(html.contains("<title>Figure</title>"));
    }
}
