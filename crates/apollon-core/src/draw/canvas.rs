//! The abstract drawing surface and two in-crate implementations.

use crate::{
    color::Color,
    draw::{Path, StrokeDefinition, TextDefinition},
    geometry::{Boundary, Point},
};

/// A surface renderers draw on.
///
/// Coordinates are absolute diagram coordinates. Backends decide how the
/// commands are materialized.
pub trait Canvas {
    /// Fill the interior of `path`.
    fn fill_path(&mut self, path: &Path, color: Color);

    /// Stroke the outline of `path`.
    fn stroke_path(&mut self, path: &Path, stroke: &StrokeDefinition);

    /// Draw a single label inside `frame`.
    ///
    /// Text is vertically centered in the frame and placed horizontally
    /// according to [`TextDefinition::align`].
    fn draw_text(&mut self, content: &str, frame: Boundary, text: &TextDefinition);
}

/// A recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill {
        path: Path,
        color: Color,
    },
    Stroke {
        path: Path,
        stroke: StrokeDefinition,
    },
    Text {
        content: String,
        frame: Boundary,
        text: TextDefinition,
    },
}

/// A canvas that records every command in call order.
///
/// # Examples
///
/// ```
/// # use apollon_core::color::Color;
/// # use apollon_core::draw::{Canvas, Path, RecordingCanvas, StrokeDefinition};
/// # use apollon_core::geometry::Boundary;
/// let mut canvas = RecordingCanvas::new();
/// let outline = Path::rect(Boundary::new(0.0, 0.0, 10.0, 10.0));
///
/// canvas.fill_path(&outline, Color::default());
/// canvas.stroke_path(&outline, &StrokeDefinition::default());
///
/// assert_eq!(canvas.fill_count(), 1);
/// assert_eq!(canvas.stroke_count(), 1);
/// assert_eq!(canvas.text_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill { .. }))
            .count()
    }

    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke { .. }))
            .count()
    }

    pub fn text_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
            .count()
    }

    /// Every drawn label, in call order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_path(&mut self, path: &Path, color: Color) {
        self.commands.push(DrawCommand::Fill {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &StrokeDefinition) {
        self.commands.push(DrawCommand::Stroke {
            path: path.clone(),
            stroke: stroke.clone(),
        });
    }

    fn draw_text(&mut self, content: &str, frame: Boundary, text: &TextDefinition) {
        self.commands.push(DrawCommand::Text {
            content: content.to_string(),
            frame,
            text: text.clone(),
        });
    }
}

/// Forwards every command to an inner canvas, translated by a fixed offset.
///
/// Used to shift a whole diagram, for instance when its model coordinates
/// start at negative values.
pub struct OffsetCanvas<'a> {
    inner: &'a mut dyn Canvas,
    offset: Point,
}

impl<'a> OffsetCanvas<'a> {
    pub fn new(inner: &'a mut dyn Canvas, offset: Point) -> Self {
        Self { inner, offset }
    }

    pub fn offset(&self) -> Point {
        self.offset
    }
}

impl Canvas for OffsetCanvas<'_> {
    fn fill_path(&mut self, path: &Path, color: Color) {
        self.inner.fill_path(&path.translate(self.offset), color);
    }

    fn stroke_path(&mut self, path: &Path, stroke: &StrokeDefinition) {
        self.inner.stroke_path(&path.translate(self.offset), stroke);
    }

    fn draw_text(&mut self, content: &str, frame: Boundary, text: &TextDefinition) {
        self.inner
            .draw_text(content, frame.translate(self.offset), text);
    }
}
