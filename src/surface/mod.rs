//! Drawing surfaces
//!
//! The painter only needs five canvas-style primitives. Anything that can
//! take them (a browser paint context, an SVG writer, a command log) can be
//! painted on.

pub mod recording;
pub mod svg;

pub use recording::{DrawCommand, RecordingSurface};
pub use svg::SvgSurface;

/// Canvas-style drawing target
pub trait Surface {
    /// Set the color used by the next `fill`
    fn set_fill_style(&mut self, style: &str);
    /// Discard the current path and start a new one
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64);
    /// Fill the current path with the current fill style
    fn fill(&mut self);
}
