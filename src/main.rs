//! Fleck preview entry point
//!
//! Natively, renders an SVG preview to stdout:
//!
//! ```text
//! fleck --fleck-seed=4 --fleck-count=300 --fleck-color-1=#333 width=640 height=480
//! fleck settings=fleck.json --fleck-size-base=8 ...
//! ```
//!
//! On wasm the library's start hook does the setup; this binary is empty.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    if let Err(e) = native::run(std::env::args().skip(1)) {
        log::error!("{}", e);
        eprintln!("fleck: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the library's start hook, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::BTreeMap;
    use std::path::Path;

    use fleck::{FleckError, FleckPainter, PaintSize, Settings};

    const DEFAULT_WIDTH: f64 = 400.0;
    const DEFAULT_HEIGHT: f64 = 400.0;

    pub fn run(args: impl Iterator<Item = String>) -> Result<(), FleckError> {
        let mut props = BTreeMap::new();
        for arg in args {
            match arg.split_once('=') {
                Some((key, value)) => {
                    props.insert(key.trim().to_string(), value.to_string());
                }
                None => {
                    return Err(FleckError::MalformedParameter {
                        name: arg,
                        value: String::new(),
                        reason: "expected key=value",
                    });
                }
            }
        }

        let settings = match props.remove("settings") {
            Some(path) => Settings::load(Path::new(path.trim()))?,
            None => Settings::default(),
        };
        let size = PaintSize::new(
            dimension(&mut props, "width", DEFAULT_WIDTH)?,
            dimension(&mut props, "height", DEFAULT_HEIGHT)?,
        );

        let painter = FleckPainter::new(settings);
        let params = painter.parse(&props)?;
        log::info!(
            "Rendering {} flecks, seed {}, {} colors, {}x{}",
            params.count,
            params.seed,
            params.colors.len(),
            size.width,
            size.height
        );
        print!("{}", painter.render_svg(size, &params)?);
        Ok(())
    }

    fn dimension(
        props: &mut BTreeMap<String, String>,
        name: &str,
        default: f64,
    ) -> Result<f64, FleckError> {
        let Some(raw) = props.remove(name) else {
            return Ok(default);
        };
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
            _ => Err(FleckError::MalformedParameter {
                name: name.to_string(),
                value: raw,
                reason: "expected a non-negative number",
            }),
        }
    }
}
