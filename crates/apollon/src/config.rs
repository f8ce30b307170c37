//! Configuration types for Apollon diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are drawn and styled. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining render and style settings.
//! - [`RenderConfig`] - Fonts, translation offset and padding around the drawing.
//! - [`StyleConfig`] - Theme colors and stroke width used when the model sets none.
//!
//! # Example
//!
//! ```
//! # use apollon::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [render]
//!     font_size = 16
//!
//!     [style]
//!     background_color = "white"
//! "#).unwrap();
//!
//! assert_eq!(config.render().font_size(), 16.0);
//! assert!(config.style().background_color().unwrap().is_some());
//! ```

use serde::Deserialize;

use apollon_core::{color::Color, draw::DEFAULT_FONT_SIZE, geometry::Point};

/// Top-level application configuration combining render and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified render and style configurations.
    pub fn new(render: RenderConfig, style: StyleConfig) -> Self {
        Self { render, style }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns a mutable render configuration, for command-line overrides.
    pub fn render_mut(&mut self) -> &mut RenderConfig {
        &mut self.render
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Font, offset and padding settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    font_size: f32,
    font_family: String,
    offset_x: f32,
    offset_y: f32,
    padding: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            font_family: "Inter, Helvetica, Arial, sans-serif".to_string(),
            offset_x: 0.0,
            offset_y: 0.0,
            padding: 20.0,
        }
    }
}

impl RenderConfig {
    /// Font size for every label, in pixels.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Uniform translation applied to everything drawn.
    pub fn offset(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }

    /// Blank space kept around the drawing in exported documents.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    pub fn set_offset(&mut self, offset: Point) {
        self.offset_x = offset.x();
        self.offset_y = offset.y();
    }

    /// Checks that sizes are usable.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(format!("font_size must be positive, got {}", self.font_size));
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(format!("padding must not be negative, got {}", self.padding));
        }
        if !(self.offset_x.is_finite() && self.offset_y.is_finite()) {
            return Err("offset must be finite".to_string());
        }
        Ok(())
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Colors are CSS color strings. Fields that are not set fall back to
/// renderer defaults; colors set on individual elements win over these.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color of exported documents; transparent when unset.
    #[serde(default)]
    background_color: Option<String>,

    #[serde(default)]
    stroke_color: Option<String>,

    #[serde(default)]
    fill_color: Option<String>,

    #[serde(default)]
    text_color: Option<String>,

    #[serde(default)]
    stroke_width: Option<f32>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_color("background", self.background_color.as_deref())
    }

    pub fn stroke_color(&self) -> Result<Option<Color>, String> {
        parse_color("stroke", self.stroke_color.as_deref())
    }

    pub fn fill_color(&self) -> Result<Option<Color>, String> {
        parse_color("fill", self.fill_color.as_deref())
    }

    pub fn text_color(&self) -> Result<Option<Color>, String> {
        parse_color("text", self.text_color.as_deref())
    }

    pub fn stroke_width(&self) -> Option<f32> {
        self.stroke_width
    }
}

fn parse_color(field: &str, value: Option<&str>) -> Result<Option<Color>, String> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {field} color in config: {err}"))
}
