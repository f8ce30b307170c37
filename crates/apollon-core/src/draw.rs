//! Drawing primitives for diagram rendering.
//!
//! Renderers never produce output formats directly. They issue fill, stroke
//! and text commands against a [`Canvas`], and a backend (SVG, an in-memory
//! recording, an editor view) turns those commands into pixels.
//!
//! # Overview
//!
//! - [`Canvas`] - The abstract drawing surface
//! - [`Path`] - Vector outlines built from move, line and cubic segments
//! - [`StrokeDefinition`] - How outlines are stroked
//! - [`TextDefinition`] - How labels are drawn, measured via [`TextMeasurer`]
//! - [`RecordingCanvas`] - Collects [`DrawCommand`]s, used by tests and hosts
//! - [`OffsetCanvas`] - Applies a uniform translation to another canvas
mod canvas;
mod path;
mod stroke;
mod text;

pub use canvas::{Canvas, DrawCommand, OffsetCanvas, RecordingCanvas};
pub use path::{Path, PathSegment};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin, StrokeStyle};
pub use text::{
    ApproximateTextMeasurer, CosmicTextMeasurer, DEFAULT_FONT_SIZE, HorizontalAlign,
    TextDefinition, TextMeasurer,
};
