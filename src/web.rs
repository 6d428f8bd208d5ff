//! Browser bindings
//!
//! A tiny JS shim registers the worklet and forwards to `FleckWorklet`:
//!
//! ```js
//! registerPaint("fleck", class {
//!   static get inputProperties() { return FleckWorklet.inputProperties(); }
//!   paint(ctx, size, props) { worklet.paint(ctx, size.width, size.height, props); }
//! });
//! ```

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::PaintSize;
use crate::paint::FleckPainter;
use crate::params::PropertyBag;
use crate::settings::Settings;
use crate::surface::Surface;

// web-sys has no binding for the worklet paint context, so declare the
// handful of members the painter calls
#[wasm_bindgen]
extern "C" {
    /// The `ctx` argument of a paint worklet's `paint()` callback
    #[wasm_bindgen(extends = js_sys::Object)]
    #[derive(Debug, Clone)]
    pub type PaintRenderingContext2D;

    #[wasm_bindgen(method, setter = fillStyle)]
    fn js_set_fill_style(this: &PaintRenderingContext2D, style: &str);

    #[wasm_bindgen(method, js_name = beginPath)]
    fn js_begin_path(this: &PaintRenderingContext2D);

    #[wasm_bindgen(method, js_name = moveTo)]
    fn js_move_to(this: &PaintRenderingContext2D, x: f64, y: f64);

    #[wasm_bindgen(method, js_name = bezierCurveTo)]
    fn js_bezier_curve_to(
        this: &PaintRenderingContext2D,
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    );

    #[wasm_bindgen(method, js_name = fill)]
    fn js_fill(this: &PaintRenderingContext2D);
}

impl Surface for PaintRenderingContext2D {
    fn set_fill_style(&mut self, style: &str) {
        self.js_set_fill_style(style);
    }

    fn begin_path(&mut self) {
        self.js_begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.js_move_to(x, y);
    }

    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        self.js_bezier_curve_to(cp1x, cp1y, cp2x, cp2y, x, y);
    }

    fn fill(&mut self) {
        self.js_fill();
    }
}

/// Property map handed over by the browser (anything with a `get(name)` method)
struct JsProperties<'a>(&'a JsValue);

impl PropertyBag for JsProperties<'_> {
    fn get(&self, name: &str) -> Option<String> {
        let getter = js_sys::Reflect::get(self.0, &JsValue::from_str("get"))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()?;
        let value = getter.call1(self.0, &JsValue::from_str(name)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        // CSSUnparsedValue and friends stringify to their CSS text
        let text = value.unchecked_into::<js_sys::Object>().to_string();
        Some(String::from(text))
    }
}

/// Paint worklet entry point
#[wasm_bindgen]
pub struct FleckWorklet {
    painter: FleckPainter,
}

#[wasm_bindgen]
impl FleckWorklet {
    /// Build a worklet; `settings_json` may be empty for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Result<FleckWorklet, JsValue> {
        let settings = match settings_json.as_deref().map(str::trim) {
            Some(json) if !json.is_empty() => {
                Settings::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            _ => Settings::default(),
        };
        Ok(Self {
            painter: FleckPainter::new(settings),
        })
    }

    #[wasm_bindgen(js_name = paintName)]
    pub fn paint_name() -> String {
        FleckPainter::definition().name.to_string()
    }

    #[wasm_bindgen(js_name = inputProperties)]
    pub fn input_properties() -> Vec<String> {
        FleckPainter::definition().input_properties
    }

    pub fn paint(
        &self,
        ctx: &PaintRenderingContext2D,
        width: f64,
        height: f64,
        props: &JsValue,
    ) -> Result<(), JsValue> {
        let mut ctx = ctx.clone();
        self.painter
            .paint(&mut ctx, PaintSize::new(width, height), &JsProperties(props))
            .map_err(|e| {
                log::warn!("Fleck paint failed: {}", e);
                JsValue::from_str(&e.to_string())
            })
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init (module re-instantiated) is harmless
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Fleck painter loaded");
}
