//! Joystick configuration, read once when the control is constructed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Argb;
use crate::geometry::AngleConvention;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),
    #[error("Invalid value for {attribute}: {value}")]
    InvalidValue { attribute: String, value: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// What happens to the thumb when the user lets go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    /// The thumb returns to the center.
    #[default]
    Normal,
    /// The thumb stays where it was released.
    Static,
}

impl FromStr for Behavior {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "1" => Ok(Behavior::Normal),
            "static" | "2" => Ok(Behavior::Static),
            _ => Err(()),
        }
    }
}

/// Which parts of the joystick are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appearance {
    /// Outer ring and thumb.
    #[default]
    Full,
    /// Thumb (and connector, when enabled) without the outer ring.
    NoOuterRing,
    /// Only the thumb.
    InnerOnly,
}

impl Appearance {
    /// Whether the outer ring is drawn.
    pub fn draws_outer_ring(self) -> bool {
        self == Appearance::Full
    }

    /// Whether the connector line may be drawn.
    pub fn draws_connector(self) -> bool {
        matches!(self, Appearance::Full | Appearance::NoOuterRing)
    }
}

impl FromStr for Appearance {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "normal" | "1" => Ok(Appearance::Full),
            "no_outer_ring" | "no_base" | "2" => Ok(Appearance::NoOuterRing),
            "inner_only" | "inner_circle_only" | "3" => Ok(Appearance::InnerOnly),
            _ => Err(()),
        }
    }
}

/// Joystick configuration.
///
/// Radii of `0.0` mean "derive from the widget size".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoystickConfig {
    pub appearance: Appearance,
    pub behavior: Behavior,
    /// Thumb radius in pixels.
    pub inner_circle_radius: f64,
    /// Travel radius of the thumb center in pixels.
    pub outer_circle_radius: f64,
    pub inner_circle_color: Argb,
    pub outer_circle_color: Argb,
    /// Connector line color. Not exposed as a styling attribute.
    pub line_color: Argb,
    /// Connector line width. Not exposed as a styling attribute.
    pub line_width: f64,
    pub angle_convention: AngleConvention,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            appearance: Appearance::Full,
            behavior: Behavior::Normal,
            inner_circle_radius: 0.0,
            outer_circle_radius: 0.0,
            inner_circle_color: Argb::RED,
            outer_circle_color: Argb::BLACK,
            line_color: Argb::BLUE,
            line_width: 2.0,
            angle_convention: AngleConvention::Mirrored,
        }
    }
}

impl JoystickConfig {
    /// Names of the attributes accepted by [`JoystickConfig::set_attribute`].
    pub const ATTRIBUTES: [&'static str; 6] = [
        "appearance",
        "behavior",
        "inner_circle_radius",
        "outer_circle_radius",
        "inner_circle_color",
        "outer_circle_color",
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build a configuration from styling attributes, starting from defaults.
    pub fn from_attributes<'a, I>(attributes: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (name, value) in attributes {
            config.set_attribute(name, value)?;
        }
        Ok(config)
    }

    /// Apply a single styling attribute.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> ConfigResult<()> {
        let invalid = || ConfigError::InvalidValue {
            attribute: name.to_string(),
            value: value.to_string(),
        };

        match name {
            "appearance" => self.appearance = value.parse().map_err(|_| invalid())?,
            "behavior" => self.behavior = value.parse().map_err(|_| invalid())?,
            "inner_circle_radius" => {
                self.inner_circle_radius = parse_dimension(value).ok_or_else(invalid)?
            }
            "outer_circle_radius" => {
                self.outer_circle_radius = parse_dimension(value).ok_or_else(invalid)?
            }
            "inner_circle_color" => self.inner_circle_color = value.parse().map_err(|_| invalid())?,
            "outer_circle_color" => self.outer_circle_color = value.parse().map_err(|_| invalid())?,
            _ => return Err(ConfigError::UnknownAttribute(name.to_string())),
        }
        Ok(())
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    pub fn with_angle_convention(mut self, convention: AngleConvention) -> Self {
        self.angle_convention = convention;
        self
    }

    /// Set explicit radii (0.0 keeps the automatic value).
    pub fn with_radii(mut self, inner: f64, outer: f64) -> Self {
        self.inner_circle_radius = inner;
        self.outer_circle_radius = outer;
        self
    }

    /// Reject negative or non-finite radii and line width.
    pub fn validate(&self) -> ConfigResult<()> {
        let checks = [
            ("inner_circle_radius", self.inner_circle_radius),
            ("outer_circle_radius", self.outer_circle_radius),
            ("line_width", self.line_width),
        ];
        for (attribute, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    attribute: attribute.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Parse a pixel dimension such as `24`, `24.5` or `24px`.
fn parse_dimension(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
