//! Surface that writes an SVG document

use std::fmt::Write;

use super::Surface;

/// Collects filled paths and renders them as `<path>` elements
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    fill_style: String,
    path: String,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            fill_style: "black".to_string(),
            path: String::new(),
            elements: Vec::new(),
        }
    }

    /// Number of `<path>` elements filled so far
    pub fn path_count(&self) -> usize {
        self.elements.len()
    }

    /// Complete SVG document
    pub fn finish(&self) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        out.push('\n');
        for element in &self.elements {
            out.push_str("  ");
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn set_fill_style(&mut self, style: &str) {
        self.fill_style = style.to_string();
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.path, "M{x},{y}");
    }

    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        let _ = write!(self.path, "C{cp1x},{cp1y},{cp2x},{cp2y},{x},{y}");
    }

    fn fill(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.elements.push(format!(
            r#"<path d="{}Z" fill="{}"/>"#,
            self.path,
            escape_attr(&self.fill_style)
        ));
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
