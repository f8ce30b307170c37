//! Apollon - Rendering for Apollon UML diagrams.
//!
//! Decoding, drawing and SVG export of Apollon UML models. Class, object,
//! activity, use case, communication and component diagrams are supported;
//! other diagram types are reported as unsupported.

pub mod config;
pub mod export;
pub mod render;
pub mod theme;

mod error;

pub use apollon_core::{
    color, diagnostic, direction, draw, geometry, hierarchy, layout, model, path, query,
};

pub use error::ApollonError;

use std::rc::Rc;

use log::{debug, info, trace, warn};

use apollon_core::{
    diagnostic::{DiagnosticSink, LogSink},
    draw::{Canvas, CosmicTextMeasurer, OffsetCanvas, TextMeasurer},
    geometry::{Boundary, Insets, Point},
    model::UMLModel,
};

use config::AppConfig;
use export::svg::{self, SvgCanvas};
use render::Renderer;
use theme::Theme;

/// Builder for decoding and rendering Apollon diagrams.
///
/// This provides an API for processing Apollon models through decoding,
/// drawing, and SVG export stages.
///
/// # Examples
///
/// ```rust,no_run
/// use apollon::{DiagramBuilder, config::AppConfig};
///
/// let json = r#"{"type": "UseCaseDiagram", "elements": {}, "relationships": {}}"#;
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = DiagramBuilder::new(config);
///
/// // Decode JSON to a model
/// let model = builder.parse(json)
///     .expect("Failed to parse");
///
/// // Render the model to SVG
/// let svg = builder.render_svg(&model)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
pub struct DiagramBuilder {
    config: AppConfig,
    measurer: Rc<dyn TextMeasurer>,
}

impl Default for DiagramBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// Text is measured with real font metrics.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including render and style settings
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            measurer: Rc::new(CosmicTextMeasurer),
        }
    }

    /// Replace the text measurer, e.g. with
    /// [`ApproximateTextMeasurer`](apollon_core::draw::ApproximateTextMeasurer)
    /// for output that does not depend on installed fonts.
    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Rc::new(measurer);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Decode a JSON model.
    ///
    /// The element hierarchy is resolved while decoding; problems such as
    /// dangling owners or owner cycles are logged.
    ///
    /// # Errors
    ///
    /// Returns [`ApollonError::Model`] when the JSON does not decode into a
    /// model or contains duplicate ids.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use apollon::DiagramBuilder;
    ///
    /// let json = r#"{"type": "ClassDiagram", "elements": {}, "relationships": {}}"#;
    /// let model = DiagramBuilder::default().parse(json).expect("Failed to parse model");
    /// assert!(model.elements().is_empty());
    /// ```
    pub fn parse(&self, json: &str) -> Result<UMLModel, ApollonError> {
        self.parse_with_diagnostics(json, &mut LogSink)
    }

    /// Decode a JSON model, reporting owner cycles to `sink`.
    ///
    /// A model with owner cycles is still returned; the cycles only affect
    /// container ordering.
    ///
    /// # Errors
    ///
    /// Same as [`DiagramBuilder::parse`].
    pub fn parse_with_diagnostics(
        &self,
        json: &str,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<UMLModel, ApollonError> {
        info!("Parsing model");

        let model =
            UMLModel::from_json(json).map_err(|err| ApollonError::new_model_error(err, json))?;

        debug!(
            diagram_type:% = model.kind(),
            elements = model.elements().len(),
            relationships = model.relationships().len();
            "Model parsed successfully"
        );
        trace!(model:?; "Parsed model");

        if !hierarchy::validate_ownership(&model, sink) {
            warn!(diagram_type:% = model.kind(); "Model has owner cycles");
        }

        Ok(model)
    }

    /// Draw `model` onto any canvas, shifted by the configured offset.
    ///
    /// Per-item problems go to `sink` and do not fail the call.
    ///
    /// # Errors
    ///
    /// Returns [`ApollonError::Config`] for an invalid configuration and
    /// [`ApollonError::UnsupportedDiagram`] when the diagram type has no
    /// renderer.
    pub fn render(
        &self,
        model: &UMLModel,
        canvas: &mut dyn Canvas,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), ApollonError> {
        let theme = Theme::from_config(&self.config)?;
        let mut renderer = Renderer::new(theme).with_shared_measurer(Rc::clone(&self.measurer));

        let mut canvas = OffsetCanvas::new(canvas, self.config.render().offset());
        if !renderer.render(model, &mut canvas, sink) {
            return Err(ApollonError::UnsupportedDiagram(model.kind().to_string()));
        }
        Ok(())
    }

    /// Render `model` to an SVG string.
    ///
    /// The view box encloses the drawn content plus the configured padding.
    /// Diagnostics are forwarded to the logger.
    ///
    /// # Errors
    ///
    /// Same as [`DiagramBuilder::render`], plus [`ApollonError::Export`] when
    /// the document cannot be assembled.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use apollon::DiagramBuilder;
    ///
    /// let json = r#"{"type": "ClassDiagram", "elements": {}, "relationships": {}}"#;
    /// let builder = DiagramBuilder::default();
    ///
    /// let model = builder.parse(json)
    ///     .expect("Failed to parse");
    ///
    /// let svg = builder.render_svg(&model)
    ///     .expect("Failed to render diagram");
    ///
    /// println!("{}", svg);
    /// ```
    pub fn render_svg(&self, model: &UMLModel) -> Result<String, ApollonError> {
        let doc = self.render_document(model)?;
        info!("SVG rendered successfully");
        Ok(doc.to_string())
    }

    /// Render `model` and write the SVG document to `file_name`.
    ///
    /// # Errors
    ///
    /// Same as [`DiagramBuilder::render_svg`], plus [`ApollonError::Export`]
    /// when the file cannot be written.
    pub fn export_svg(&self, model: &UMLModel, file_name: &str) -> Result<(), ApollonError> {
        let doc = self.render_document(model)?;
        svg::write_document(&doc, file_name)?;
        info!(file_name; "SVG exported successfully");
        Ok(())
    }

    fn render_document(&self, model: &UMLModel) -> Result<::svg::Document, ApollonError> {
        let mut canvas = SvgCanvas::new();
        self.render(model, &mut canvas, &mut LogSink)?;
        debug!(nodes = canvas.len(); "Diagram drawn");

        let viewport = self.viewport(model);
        let background = self.config.style().background_color().map_err(ApollonError::Config)?;
        Ok(canvas.into_document(viewport, background)?)
    }

    /// Content bounds, or the whole canvas when nothing has geometry, shifted
    /// by the offset and padded.
    fn viewport(&self, model: &UMLModel) -> Boundary {
        let render = self.config.render();
        let content = model
            .content_bounds()
            .unwrap_or_else(|| Boundary::new_from_top_left(Point::default(), model.size()));
        content
            .translate(render.offset())
            .add_padding(Insets::uniform(render.padding()))
    }
}
