//! Text style definitions and text measurement.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Font, color, weight and alignment of a label
//! - [`HorizontalAlign`] - Where text sits inside its frame
//! - [`TextMeasurer`] - Trait for measuring laid-out text
//! - [`CosmicTextMeasurer`] - Measurement with real font metrics via cosmic-text
//! - [`ApproximateTextMeasurer`] - Font-independent estimate for headless use
//!
//! Renderers measure a label first, then pass the resulting frame to
//! [`Canvas::draw_text`](crate::draw::Canvas::draw_text). Text is vertically
//! centered in its frame and horizontally placed per [`HorizontalAlign`].
//!
//! # Quick Start
//!
//! ```
//! # use apollon_core::draw::{ApproximateTextMeasurer, TextDefinition, TextMeasurer};
//! let mut style = TextDefinition::new();
//! style.set_font_size(16.0);
//! style.set_bold(true);
//!
//! let size = ApproximateTextMeasurer.measure("Person", &style);
//! assert!(size.width() > 0.0);
//! ```

use std::sync::{Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, Weight};
use log::info;

use crate::{color::Color, geometry::Size};

/// Default font size of diagram labels.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Horizontal placement of text inside its frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    /// Left edge of the frame
    Start,
    /// Centered in the frame (default)
    #[default]
    Middle,
    /// Right edge of the frame
    End,
}

impl HorizontalAlign {
    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Defines the visual style of a text label.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Inter, Helvetica, Arial, sans-serif"` |
/// | Font size | `14` |
/// | Color | black |
/// | Bold / italic / underline | off |
/// | Alignment | [`HorizontalAlign::Middle`] |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    color: Color,
    bold: bool,
    italic: bool,
    underline: bool,
    align: HorizontalAlign,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn is_italic(&self) -> bool {
        self.italic
    }

    pub fn is_underline(&self) -> bool {
        self.underline
    }

    pub fn align(&self) -> HorizontalAlign {
        self.align
    }

    /// Sets the font family, a CSS font-family list.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    pub fn set_italic(&mut self, italic: bool) {
        self.italic = italic;
    }

    pub fn set_underline(&mut self, underline: bool) {
        self.underline = underline;
    }

    pub fn set_align(&mut self, align: HorizontalAlign) {
        self.align = align;
    }

    /// Returns a bold copy of this definition.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Returns an italic copy of this definition.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Returns an underlined copy of this definition.
    pub fn underlined(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Returns a copy with the given alignment.
    pub fn aligned(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Inter, Helvetica, Arial, sans-serif".to_string(),
            font_size: DEFAULT_FONT_SIZE,
            color: Color::default(),
            bold: false,
            italic: false,
            underline: false,
            align: HorizontalAlign::default(),
        }
    }
}

/// Measures the extent of a text label.
pub trait TextMeasurer {
    /// Returns the size of `text` laid out with `definition`.
    ///
    /// Empty text measures as [`Size::default`].
    fn measure(&self, text: &str, definition: &TextDefinition) -> Size;
}

/// Measurement based on real font metrics and shaping.
///
/// Backed by one lazily created global `FontSystem`; creating it scans the
/// system fonts, so the first measurement is slow.
#[derive(Debug, Default, Clone, Copy)]
pub struct CosmicTextMeasurer;

impl TextMeasurer for CosmicTextMeasurer {
    fn measure(&self, text: &str, definition: &TextDefinition) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(text, definition)
    }
}

/// Deterministic estimate that needs no fonts.
///
/// Each character is `0.6` em wide and each line `1.2` em tall.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApproximateTextMeasurer;

impl TextMeasurer for ApproximateTextMeasurer {
    fn measure(&self, text: &str, definition: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }
        let size = definition.font_size();
        let widest = text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let lines = text.lines().count().max(1);
        Size::new(
            widest as f32 * size * 0.6,
            lines as f32 * size * 1.2,
        )
    }
}

/// Owns the shared FontSystem used for measurement.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    fn calculate_text_size(&self, text: &str, definition: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        // A panic during a previous measurement leaves the FontSystem usable
        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let font_size = definition.font_size();
        let metrics = Metrics::new(font_size, font_size * 1.2);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let family = definition
            .font_family()
            .split(',')
            .map(str::trim)
            .find(|name| !name.is_empty())
            .unwrap_or("sans-serif");
        let mut attrs = Attrs::new().family(Family::Name(family));
        if definition.is_bold() {
            attrs = attrs.weight(Weight::BOLD);
        }
        if definition.is_italic() {
            attrs = attrs.style(Style::Italic);
        }

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        let mut runs = 0;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
            runs += 1;
        }

        if runs == 0 {
            return ApproximateTextMeasurer.measure(text, definition);
        }

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
