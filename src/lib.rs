//! Fleck - seeded procedural fleck texture painter
//!
//! Core modules:
//! - `rng`: Deterministic Mulberry32 random stream
//! - `vector`: 2D vector helpers on glam
//! - `spline`: Cardinal spline to cubic Bezier commands
//! - `fleck`: Per-blob geometry generation
//! - `params`: Property bag parsing
//! - `paint`: Paint driver and registration descriptor
//! - `surface`: Drawing surfaces (recording, SVG, browser paint context)
//! - `settings`: Painter configuration

pub mod error;
pub mod fleck;
pub mod paint;
pub mod params;
pub mod rng;
pub mod settings;
pub mod spline;
pub mod surface;
pub mod vector;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::FleckError;
pub use fleck::{Fleck, RadiusPolicy};
pub use paint::{FleckPainter, PaintDefinition};
pub use params::{PaintParameters, PropertyBag};
pub use rng::RandomStream;
pub use settings::{RadiusMode, Settings};
pub use spline::{PathCommand, spline, spline_commands};
pub use surface::{DrawCommand, RecordingSurface, SvgSurface, Surface};
pub use vector::{Point2D, VectorExt};

use serde::{Deserialize, Serialize};

/// Generator constants
pub mod consts {
    /// Name the paint routine registers under
    pub const PAINT_NAME: &str = "fleck";

    /// Vertex count is `floor(sample(MIN_VERTEX_DRAW, MAX_VERTEX_DRAW))`
    pub const MIN_VERTEX_DRAW: f64 = 6.0;
    pub const MAX_VERTEX_DRAW: f64 = 8.0;
    /// Smallest ring the spline can close
    pub const MIN_VERTEX_COUNT: usize = 3;

    /// Rolls above this halve the radius (the common case)
    pub const SMALL_FLECK_THRESHOLD: f64 = 0.125;
    /// Rolls above this quadruple the radius (rare)
    pub const LARGE_FLECK_THRESHOLD: f64 = 0.925;
    /// Radius clamp
    pub const MIN_FLECK_RADIUS: f64 = 1.0;
    pub const MAX_FLECK_RADIUS: f64 = 24.0;
    /// Upper bound of the per-vertex pull toward the center
    pub const MAX_PULL: f64 = 0.625;
    /// Area-scaled radius is `width * height / AREA_RADIUS_DIVISOR`
    pub const AREA_RADIUS_DIVISOR: f64 = 150_000.0;

    /// Number of indexed color properties
    pub const COLOR_SLOTS: usize = 8;
    /// Standard Catmull-Rom tension
    pub const DEFAULT_TENSION: f64 = 1.0;
}

/// Size of the area being painted, in the surface's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintSize {
    pub width: f64,
    pub height: f64,
}

impl PaintSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
