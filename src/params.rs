//! Property bag parsing
//!
//! Hosts hand over loosely typed values (strings with stray whitespace). They
//! are parsed once, up front, into `PaintParameters`; a malformed value fails
//! the whole paint call instead of producing half-seeded geometry.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};

use crate::consts::COLOR_SLOTS;
use crate::error::FleckError;

pub const SEED_PROPERTY: &str = "--fleck-seed";
pub const COUNT_PROPERTY: &str = "--fleck-count";
pub const SIZE_BASE_PROPERTY: &str = "--fleck-size-base";
/// Declared for hosts that set it; not read by any radius policy
pub const MIN_SIZE_PROPERTY: &str = "--min-fleck-size";
/// Declared for hosts that set it; not read by any radius policy
pub const MAX_SIZE_PROPERTY: &str = "--max-fleck-size";

/// Name of color slot `slot` (1-based)
pub fn color_property(slot: usize) -> String {
    format!("--fleck-color-{slot}")
}

/// Every property name the painter declares, in declaration order
pub fn input_properties() -> Vec<String> {
    let mut props: Vec<String> = [
        SEED_PROPERTY,
        COUNT_PROPERTY,
        SIZE_BASE_PROPERTY,
        MIN_SIZE_PROPERTY,
        MAX_SIZE_PROPERTY,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    props.extend((1..=COLOR_SLOTS).map(color_property));
    props
}

/// Named values supplied by the host for one paint call
pub trait PropertyBag {
    /// Raw value of `name`, if the host has one
    fn get(&self, name: &str) -> Option<String>;
}

impl<S: BuildHasher> PropertyBag for HashMap<String, String, S> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl PropertyBag for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }
}

/// Typed parameters for one paint call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintParameters {
    pub seed: i32,
    /// Number of flecks to draw
    pub count: u32,
    /// Present only when the radius policy reads it
    pub size_base: Option<f64>,
    /// Non-empty color tokens in slot order
    pub colors: Vec<String>,
}

impl PaintParameters {
    /// Parse a property bag. `size_base` is read only when `read_size_base` is set.
    pub fn from_properties<P>(props: &P, read_size_base: bool) -> Result<Self, FleckError>
    where
        P: PropertyBag + ?Sized,
    {
        let seed = to_int32(parse_number(props, SEED_PROPERTY)?);

        let raw_count = parse_number(props, COUNT_PROPERTY)?;
        // Matches a `i < count` loop: 2.5 draws three flecks
        let count = raw_count.ceil();
        if raw_count < 0.0 || count > u32::MAX as f64 {
            let raw = props.get(COUNT_PROPERTY).unwrap_or_default();
            let reason = if raw_count < 0.0 {
                "count must not be negative"
            } else {
                "count too large"
            };
            return Err(FleckError::malformed(COUNT_PROPERTY, raw.trim(), reason));
        }
        let count = count as u32;

        let size_base = if read_size_base {
            Some(parse_number(props, SIZE_BASE_PROPERTY)?)
        } else {
            None
        };

        Ok(Self {
            seed,
            count,
            size_base,
            colors: defined_colors(props),
        })
    }
}

/// Trimmed, non-empty colors from slots 1..=8, in slot order
pub fn defined_colors<P>(props: &P) -> Vec<String>
where
    P: PropertyBag + ?Sized,
{
    (1..=COLOR_SLOTS)
        .filter_map(|slot| props.get(&color_property(slot)))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

fn parse_number<P>(props: &P, name: &str) -> Result<f64, FleckError>
where
    P: PropertyBag + ?Sized,
{
    let raw = props.get(name).unwrap_or_default();
    let value = raw.trim();
    if value.is_empty() {
        return Err(FleckError::MissingParameter {
            name: name.to_string(),
        });
    }
    let number: f64 = value
        .parse()
        .map_err(|_| FleckError::malformed(name, value, "not a number"))?;
    if !number.is_finite() {
        return Err(FleckError::malformed(name, value, "not a finite number"));
    }
    Ok(number)
}

/// Truncate and wrap modulo 2^32, the way a JavaScript `x | 0` does
pub fn to_int32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().rem_euclid(4_294_967_296.0) as u32 as i32
}
