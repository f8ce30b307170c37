//! Color handling for Apollon diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Diagram JSON carries colors as optional CSS strings
//! (`fillColor`, `strokeColor`, `textColor`); [`Color::resolve`] turns those
//! into concrete colors with a theme fallback.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, palette};
use log::debug;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use apollon_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Resolves an optional model color against a fallback.
    ///
    /// Absent or unparsable values yield `fallback`. Invalid strings are
    /// logged at debug level and otherwise ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use apollon_core::color::Color;
    ///
    /// let theme = Color::new("white").unwrap();
    /// assert_eq!(Color::resolve(Some("red"), theme), Color::new("red").unwrap());
    /// assert_eq!(Color::resolve(Some("nope"), theme), theme);
    /// assert_eq!(Color::resolve(None, theme), theme);
    /// ```
    pub fn resolve(value: Option<&str>, fallback: Color) -> Color {
        let Some(value) = value else {
            return fallback;
        };
        match Self::new(value) {
            Ok(color) => color,
            Err(err) => {
                debug!(value, err; "Falling back to theme color");
                fallback
            }
        }
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Examples
    ///
    /// ```
    /// use apollon_core::color::Color;
    ///
    /// let red = Color::new("red").unwrap();
    /// let semi_transparent_red = red.with_alpha(0.5);
    /// assert_eq!(semi_transparent_red.alpha(), 0.5);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha component, between 0.0 (transparent) and 1.0 (opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").unwrap_or(Self {
            color: DynamicColor::from_alpha_color(palette::css::BLACK),
        })
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}
