//! SVG backend.
//!
//! [`SvgCanvas`] collects canvas calls as SVG nodes in memory;
//! [`SvgCanvas::into_document`] wraps them in a document with a view box and
//! an optional background, and [`write_document`] stores it on disk.

use std::{fs::File, io::Write};

use log::{debug, error, info};
use svg::{
    Document, Node,
    node::{Text as SvgText, element as svg_element},
};

use apollon_core::{
    color::Color,
    draw::{Canvas, HorizontalAlign, Path, StrokeDefinition, TextDefinition},
    geometry::Boundary,
};

use crate::export;

/// Sets the stroke attributes of an SVG element from a [`StrokeDefinition`].
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
            .set("stroke-linejoin", $stroke.join().to_svg_value());

        if let Some(dasharray) = $stroke.style().dash_array() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

/// A [`Canvas`] producing SVG nodes in draw order.
#[derive(Debug, Default)]
pub struct SvgCanvas {
    nodes: Vec<Box<dyn Node>>,
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of SVG nodes emitted so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Wraps the collected nodes into a document showing `viewport`.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] when the viewport is not finite.
    pub fn into_document(
        self,
        viewport: Boundary,
        background: Option<Color>,
    ) -> Result<Document, export::Error> {
        let finite = [viewport.x(), viewport.y(), viewport.width(), viewport.height()]
            .iter()
            .all(|value| value.is_finite());
        if !finite {
            return Err(export::Error::Render(format!(
                "viewport is not finite: {viewport:?}"
            )));
        }

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    viewport.x(),
                    viewport.y(),
                    viewport.width(),
                    viewport.height()
                ),
            )
            .set("width", viewport.width())
            .set("height", viewport.height());

        if let Some(color) = background {
            let bg = svg_element::Rectangle::new()
                .set("x", viewport.x())
                .set("y", viewport.y())
                .set("width", viewport.width())
                .set("height", viewport.height())
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
            doc = doc.add(bg);
        }

        debug!(nodes = self.nodes.len(); "Assembling SVG document");
        for node in self.nodes {
            doc = doc.add(node);
        }
        Ok(doc)
    }
}

impl Canvas for SvgCanvas {
    fn fill_path(&mut self, path: &Path, color: Color) {
        if path.is_empty() {
            return;
        }
        let element = svg_element::Path::new()
            .set("d", path.to_svg_data())
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha())
            .set("stroke", "none");
        self.nodes.push(Box::new(element));
    }

    fn stroke_path(&mut self, path: &Path, stroke: &StrokeDefinition) {
        if path.is_empty() {
            return;
        }
        let element = svg_element::Path::new()
            .set("d", path.to_svg_data())
            .set("fill", "none");
        self.nodes.push(Box::new(apply_stroke!(element, stroke)));
    }

    fn draw_text(&mut self, content: &str, frame: Boundary, text: &TextDefinition) {
        if content.is_empty() {
            return;
        }
        let x = match text.align() {
            HorizontalAlign::Start => frame.min_x(),
            HorizontalAlign::Middle => frame.center().x(),
            HorizontalAlign::End => frame.max_x(),
        };

        let mut element = svg_element::Text::new("")
            .set("x", x)
            .set("y", frame.center().y())
            .set("text-anchor", text.align().to_svg_value())
            .set("dominant-baseline", "central")
            .set("font-family", text.font_family())
            .set("font-size", text.font_size())
            .set("fill", text.color().to_string())
            .set("fill-opacity", text.color().alpha());

        if text.is_bold() {
            element = element.set("font-weight", "bold");
        }
        if text.is_italic() {
            element = element.set("font-style", "italic");
        }
        if text.is_underline() {
            element = element.set("text-decoration", "underline");
        }

        self.nodes.push(Box::new(element.add(SvgText::new(content))));
    }
}

/// Writes an SVG document to `file_name`.
pub fn write_document(doc: &Document, file_name: &str) -> Result<(), export::Error> {
    info!(file_name; "Creating SVG file");
    let f = match File::create(file_name) {
        Ok(file) => file,
        Err(err) => {
            error!(file_name, err:err; "Failed to create SVG file");
            return Err(export::Error::Io(err));
        }
    };

    if let Err(err) = write!(&f, "{doc}") {
        error!(file_name, err:err; "Failed to write SVG content");
        return Err(export::Error::Io(err));
    }

    Ok(())
}
