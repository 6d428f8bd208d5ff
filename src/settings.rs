//! Painter settings
//!
//! Chosen once by the host when it constructs a painter. Stored as JSON.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_TENSION;
use crate::error::FleckError;
use crate::fleck::RadiusPolicy;
use crate::params::{PaintParameters, SIZE_BASE_PROPERTY};

/// Where the base fleck radius comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RadiusMode {
    /// Read `--fleck-size-base` on every paint call
    SizeProperty,
    /// Derive from the painted area
    #[default]
    AreaScaled,
}

impl RadiusMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RadiusMode::SizeProperty => "size_property",
            RadiusMode::AreaScaled => "area_scaled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "size_property" | "size-property" | "fixed" => Some(RadiusMode::SizeProperty),
            "area_scaled" | "area-scaled" | "area" => Some(RadiusMode::AreaScaled),
            _ => None,
        }
    }

    /// Whether paint calls must supply `--fleck-size-base`
    pub fn reads_size_base(&self) -> bool {
        matches!(self, RadiusMode::SizeProperty)
    }
}

/// Painter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Radius policy selector
    pub radius_mode: RadiusMode,
    /// Spline tension (1.0 = Catmull-Rom)
    pub tension: f64,
    /// Close each outline back onto its first point
    pub closed: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            radius_mode: RadiusMode::AreaScaled,
            tension: DEFAULT_TENSION,
            closed: true,
        }
    }
}

impl Settings {
    /// Default settings with the given radius mode
    pub fn from_mode(mode: RadiusMode) -> Self {
        Self {
            radius_mode: mode,
            ..Self::default()
        }
    }

    /// Resolve the radius policy for one paint call
    pub fn radius_policy(&self, params: &PaintParameters) -> Result<RadiusPolicy, FleckError> {
        match self.radius_mode {
            RadiusMode::AreaScaled => Ok(RadiusPolicy::AreaScaled),
            RadiusMode::SizeProperty => params
                .size_base
                .map(RadiusPolicy::Fixed)
                .ok_or_else(|| FleckError::MissingParameter {
                    name: SIZE_BASE_PROPERTY.to_string(),
                }),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, FleckError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, FleckError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, FleckError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, path: &std::path::Path) -> Result<(), FleckError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(size_base: Option<f64>) -> PaintParameters {
        PaintParameters {
            seed: 0,
            count: 1,
            size_base,
            colors: vec!["red".into()],
        }
    }

    #[test]
    fn test_mode_strings() {
        for mode in [RadiusMode::SizeProperty, RadiusMode::AreaScaled] {
            assert_eq!(RadiusMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(RadiusMode::from_str("AREA"), Some(RadiusMode::AreaScaled));
        assert_eq!(RadiusMode::from_str("nope"), None);
    }

    #[test]
    fn test_radius_policy_resolution() {
        let area = Settings::default();
        assert_eq!(area.radius_policy(&params(None)).unwrap(), RadiusPolicy::AreaScaled);

        let fixed = Settings::from_mode(RadiusMode::SizeProperty);
        assert_eq!(
            fixed.radius_policy(&params(Some(10.0))).unwrap(),
            RadiusPolicy::Fixed(10.0)
        );
        assert!(fixed.radius_policy(&params(None)).is_err());
    }

    #[test]
    fn test_json_partial_uses_defaults() {
        let settings = Settings::from_json(r#"{ "radius_mode": "size_property" }"#).unwrap();
        assert_eq!(settings.radius_mode, RadiusMode::SizeProperty);
        assert_eq!(settings.tension, DEFAULT_TENSION);
        assert!(settings.closed);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            radius_mode: RadiusMode::SizeProperty,
            tension: 0.5,
            closed: false,
        };
        let back = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_bad_json_is_settings_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(FleckError::Settings(_))
        ));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("fleck-settings-{}.json", std::process::id()));
        let settings = Settings::from_mode(RadiusMode::SizeProperty);
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }
}
