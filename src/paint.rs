//! Paint driver
//!
//! The host composition root builds a `FleckPainter` (and, if it needs one, a
//! `PaintDefinition` to register it under). Each paint call is independent:
//! a fresh random stream is seeded from the parameters and dropped at the end,
//! so painting twice with the same inputs issues the same commands.

use crate::PaintSize;
use crate::consts::PAINT_NAME;
use crate::error::FleckError;
use crate::fleck::Fleck;
use crate::params::{self, PaintParameters, PropertyBag};
use crate::rng::RandomStream;
use crate::settings::Settings;
use crate::spline::{PathCommand, spline};
use crate::surface::{Surface, SvgSurface};

/// What a host needs to register the painter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintDefinition {
    /// Paint name (`"fleck"`)
    pub name: &'static str,
    /// Properties the host should forward on each call
    pub input_properties: Vec<String>,
}

/// Renders flecks onto any `Surface`
#[derive(Debug, Clone, Default)]
pub struct FleckPainter {
    settings: Settings,
}

impl FleckPainter {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Registration descriptor
    pub fn definition() -> PaintDefinition {
        PaintDefinition {
            name: PAINT_NAME,
            input_properties: params::input_properties(),
        }
    }

    /// Parse host properties for this painter's settings
    pub fn parse<P>(&self, props: &P) -> Result<PaintParameters, FleckError>
    where
        P: PropertyBag + ?Sized,
    {
        PaintParameters::from_properties(props, self.settings.radius_mode.reads_size_base())
    }

    /// Parse `props` and paint. Nothing is drawn if parsing fails.
    pub fn paint<S, P>(&self, surface: &mut S, size: PaintSize, props: &P) -> Result<(), FleckError>
    where
        S: Surface + ?Sized,
        P: PropertyBag + ?Sized,
    {
        let params = self.parse(props)?;
        self.paint_with(surface, size, &params)
    }

    /// Paint already-parsed parameters
    pub fn paint_with<S>(
        &self,
        surface: &mut S,
        size: PaintSize,
        params: &PaintParameters,
    ) -> Result<(), FleckError>
    where
        S: Surface + ?Sized,
    {
        let policy = self.settings.radius_policy(params)?;
        if params.colors.is_empty() {
            if params.count > 0 {
                log::warn!("No fleck colors defined, skipping {} flecks", params.count);
            }
            return Ok(());
        }

        let mut rng = RandomStream::new(params.seed);
        let flecks =
            (0..params.count).map(|_| Fleck::generate(&mut rng, size, policy, params.colors.len()));

        let mut filled = 0usize;
        for fleck in flecks {
            let Some(index) = fleck.color_index else {
                continue;
            };
            surface.set_fill_style(&params.colors[index]);
            surface.begin_path();
            spline(&fleck.points, self.settings.tension, self.settings.closed, |cmd| match cmd {
                PathCommand::Move(p) => surface.move_to(p.x, p.y),
                PathCommand::Curve { cp1, cp2, to } => {
                    surface.bezier_curve_to(cp1.x, cp1.y, cp2.x, cp2.y, to.x, to.y)
                }
            });
            surface.fill();
            filled += 1;
        }

        log::debug!(
            "Painted {} flecks (seed {}) on {}x{}",
            filled,
            params.seed,
            size.width,
            size.height
        );
        Ok(())
    }

    /// Generate the flecks a paint call would draw, in draw order
    pub fn flecks(&self, size: PaintSize, params: &PaintParameters) -> Result<Vec<Fleck>, FleckError> {
        let policy = self.settings.radius_policy(params)?;
        let mut rng = RandomStream::new(params.seed);
        Ok((0..params.count)
            .map(|_| Fleck::generate(&mut rng, size, policy, params.colors.len()))
            .collect())
    }

    /// Paint into a standalone SVG document
    pub fn render_svg(&self, size: PaintSize, params: &PaintParameters) -> Result<String, FleckError> {
        let mut svg = SvgSurface::new(size.width, size.height);
        self.paint_with(&mut svg, size, params)?;
        Ok(svg.finish())
    }
}
