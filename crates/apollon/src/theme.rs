//! Resolved drawing defaults.
//!
//! A [`Theme`] is the validated form of [`AppConfig`]: concrete colors,
//! stroke width and font. Renderers ask it for stroke and text definitions,
//! passing along the optional per-item colors from the model.

use apollon_core::{
    color::Color,
    draw::{StrokeDefinition, TextDefinition},
};

use crate::{config::AppConfig, error::ApollonError};

#[derive(Debug, Clone)]
pub struct Theme {
    fill: Color,
    stroke: Color,
    text: Color,
    background: Option<Color>,
    stroke_width: f32,
    font_family: String,
    font_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fill: Color::new("white").unwrap_or_default(),
            stroke: Color::default(),
            text: Color::default(),
            background: None,
            stroke_width: 1.0,
            font_family: "Inter, Helvetica, Arial, sans-serif".to_string(),
            font_size: apollon_core::draw::DEFAULT_FONT_SIZE,
        }
    }
}

impl Theme {
    /// Builds a theme from configuration, keeping defaults for unset fields.
    ///
    /// # Errors
    ///
    /// Returns [`ApollonError::Config`] for invalid colors or sizes.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApollonError> {
        let render = config.render();
        let style = config.style();
        render.validate().map_err(ApollonError::Config)?;

        let defaults = Self::default();
        let stroke_width = match style.stroke_width() {
            Some(width) if !(width.is_finite() && width > 0.0) => {
                return Err(ApollonError::Config(format!(
                    "stroke_width must be positive, got {width}"
                )));
            }
            Some(width) => width,
            None => defaults.stroke_width,
        };

        Ok(Self {
            fill: style
                .fill_color()
                .map_err(ApollonError::Config)?
                .unwrap_or(defaults.fill),
            stroke: style
                .stroke_color()
                .map_err(ApollonError::Config)?
                .unwrap_or(defaults.stroke),
            text: style
                .text_color()
                .map_err(ApollonError::Config)?
                .unwrap_or(defaults.text),
            background: style.background_color().map_err(ApollonError::Config)?,
            stroke_width,
            font_family: render.font_family().to_string(),
            font_size: render.font_size(),
        })
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Fill color, overridden by a model color when it parses.
    pub fn fill(&self, color: Option<&str>) -> Color {
        Color::resolve(color, self.fill)
    }

    /// Color of solid glyph parts such as filled diamonds and initial nodes.
    pub fn ink(&self, color: Option<&str>) -> Color {
        Color::resolve(color, self.stroke)
    }

    pub fn stroke(&self, color: Option<&str>) -> StrokeDefinition {
        StrokeDefinition::solid(self.ink(color), self.stroke_width)
    }

    pub fn dashed_stroke(&self, color: Option<&str>) -> StrokeDefinition {
        StrokeDefinition::dashed(self.ink(color), self.stroke_width)
    }

    /// Text definition in the theme font, centered.
    pub fn text(&self, color: Option<&str>) -> TextDefinition {
        let mut text = TextDefinition::new();
        text.set_font_family(&self.font_family);
        text.set_font_size(self.font_size);
        text.set_color(Color::resolve(color, self.text));
        text
    }
}
