//! Gradient style configuration.
//!
//! Defines a JSON-based schema for the color ramps used to colorize heat
//! density. A deployment can point the service at a style file, which is
//! then the single source of truth for the gradients it exposes; builtin
//! definitions (`classic`, `fire`, `cool`) cover deployments without one.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Root style configuration - a set of named gradients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Version of the style schema
    #[serde(default = "default_version")]
    pub version: String,

    /// Named gradient definitions
    pub gradients: HashMap<String, GradientSpec>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl StyleConfig {
    /// Load style configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| StyleError::IoError(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse style configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        serde_json::from_str(json).map_err(|e| StyleError::ParseError(e.to_string()))
    }

    /// The builtin gradients, used when no style file is configured.
    pub fn builtin() -> Self {
        let mut gradients = HashMap::new();
        gradients.insert("classic".to_string(), GradientSpec::classic());
        gradients.insert("fire".to_string(), GradientSpec::fire());
        gradients.insert("cool".to_string(), GradientSpec::cool());
        Self {
            version: default_version(),
            gradients,
        }
    }

    /// Get a gradient by name.
    pub fn get(&self, name: &str) -> Option<&GradientSpec> {
        self.gradients.get(name)
    }

    /// Sorted gradient names, for discovery endpoints.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.gradients.keys().cloned().collect();
        names.sort();
        names
    }

    /// Validate all gradients in the configuration.
    pub fn validate(&self) -> Result<(), StyleError> {
        for (name, gradient) in &self.gradients {
            gradient
                .validate()
                .map_err(|e| StyleError::ValidationError(format!("{}: {}", name, e)))?;
        }
        Ok(())
    }
}

/// An ordered color ramp over the normalized density range [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientSpec {
    /// Human-readable name
    pub name: String,

    /// Description of the gradient
    #[serde(default)]
    pub description: String,

    /// Color stops in ascending position order
    pub stops: Vec<GradientStop>,
}

impl GradientSpec {
    /// Blue through cyan and lime to red - the default ramp.
    pub fn classic() -> Self {
        Self {
            name: "Classic".to_string(),
            description: "Blue to red through cyan, lime and yellow".to_string(),
            stops: vec![
                GradientStop::named(0.4, "blue"),
                GradientStop::named(0.6, "cyan"),
                GradientStop::named(0.7, "lime"),
                GradientStop::named(0.8, "yellow"),
                GradientStop::named(1.0, "red"),
            ],
        }
    }

    /// Black through red and orange to white.
    pub fn fire() -> Self {
        Self {
            name: "Fire".to_string(),
            description: "Black to white through dark red, red and orange".to_string(),
            stops: vec![
                GradientStop::named(0.4, "black"),
                GradientStop::named(0.6, "darkred"),
                GradientStop::named(0.8, "red"),
                GradientStop::named(0.95, "orange"),
                GradientStop::named(1.0, "white"),
            ],
        }
    }

    /// White through cyan and blue to black.
    pub fn cool() -> Self {
        Self {
            name: "Blue/Green".to_string(),
            description: "White to black through cyan, blue and indigo".to_string(),
            stops: vec![
                GradientStop::named(0.4, "white"),
                GradientStop::named(0.6, "cyan"),
                GradientStop::named(0.8, "blue"),
                GradientStop::named(0.9, "indigo"),
                GradientStop::named(1.0, "black"),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.stops.len() < 2 {
            return Err("Gradient must have at least 2 color stops".to_string());
        }

        for stop in &self.stops {
            if !(0.0..=1.0).contains(&stop.position) {
                return Err(format!(
                    "Color stop position {} is outside [0, 1]",
                    stop.position
                ));
            }
        }

        // Check stops are in ascending order
        for i in 1..self.stops.len() {
            if self.stops[i].position <= self.stops[i - 1].position {
                return Err("Color stops must be in ascending position order".to_string());
            }
        }

        Ok(())
    }
}

/// A color stop in a gradient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position of this stop in [0, 1]
    pub position: f32,

    /// The color at this stop
    pub color: Color,
}

impl GradientStop {
    pub fn new(position: f32, color: Color) -> Self {
        Self { position, color }
    }

    fn named(position: f32, name: &str) -> Self {
        Self::new(position, Color::Named(name.to_string()))
    }
}

/// Color representation supporting multiple formats.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// Hex string: "#RRGGBB" or "#RRGGBBAA"
    Hex(String),

    /// RGB array: [r, g, b] or [r, g, b, a]
    Array(Vec<u8>),

    /// Named color
    Named(String),

    /// Explicit RGBA
    Rgba { r: u8, g: u8, b: u8, a: u8 },
}

impl Color {
    /// Convert to an RGBA tuple. Unparseable input falls back to opaque
    /// black rather than failing.
    pub fn to_rgba(&self) -> (u8, u8, u8, u8) {
        match self {
            Color::Hex(s) => parse_hex_color(s),
            Color::Array(arr) => {
                let r = arr.first().copied().unwrap_or(0);
                let g = arr.get(1).copied().unwrap_or(0);
                let b = arr.get(2).copied().unwrap_or(0);
                let a = arr.get(3).copied().unwrap_or(255);
                (r, g, b, a)
            }
            Color::Named(name) => named_color(name),
            Color::Rgba { r, g, b, a } => (*r, *g, *b, *a),
        }
    }

    /// Linear interpolation between two colors in RGB space.
    pub fn lerp(&self, other: &Color, t: f32) -> (u8, u8, u8, u8) {
        let (r1, g1, b1, a1) = self.to_rgba();
        let (r2, g2, b2, a2) = other.to_rgba();

        let t = t.clamp(0.0, 1.0);

        let lerp_u8 =
            |a: u8, b: u8| -> u8 { ((a as f32) * (1.0 - t) + (b as f32) * t).round() as u8 };

        (lerp_u8(r1, r2), lerp_u8(g1, g2), lerp_u8(b1, b2), lerp_u8(a1, a2))
    }
}

fn parse_hex_color(s: &str) -> (u8, u8, u8, u8) {
    let s = s.trim_start_matches('#');
    let len = s.len();

    if len == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&s[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&s[4..6], 16).unwrap_or(0);
        (r, g, b, 255)
    } else if len == 8 {
        let r = u8::from_str_radix(&s[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&s[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&s[4..6], 16).unwrap_or(0);
        let a = u8::from_str_radix(&s[6..8], 16).unwrap_or(255);
        (r, g, b, a)
    } else {
        (0, 0, 0, 255)
    }
}

fn named_color(name: &str) -> (u8, u8, u8, u8) {
    match name.to_lowercase().as_str() {
        "transparent" => (0, 0, 0, 0),
        "black" => (0, 0, 0, 255),
        "white" => (255, 255, 255, 255),
        "red" => (255, 0, 0, 255),
        "darkred" => (139, 0, 0, 255),
        "green" => (0, 128, 0, 255),
        "lime" => (0, 255, 0, 255),
        "blue" => (0, 0, 255, 255),
        "indigo" => (75, 0, 130, 255),
        "yellow" => (255, 255, 0, 255),
        "cyan" => (0, 255, 255, 255),
        "magenta" => (255, 0, 255, 255),
        "orange" => (255, 165, 0, 255),
        "purple" => (128, 0, 128, 255),
        "gray" | "grey" => (128, 128, 128, 255),
        _ => (0, 0, 0, 255),
    }
}

/// Style-related errors.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
