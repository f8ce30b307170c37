//! Drawing a model onto a [`Canvas`].
//!
//! # Overview
//!
//! [`renderer_for`] maps a diagram kind to a [`RendererPair`]: one function
//! drawing elements and one drawing relationships. [`Renderer::render`]
//! drives them over a model:
//!
//! 1. Container elements, shallow before deep, then in declaration order
//! 2. Every other element, in declaration order
//! 3. Relationships, in declaration order
//!
//! Items without geometry are reported as warnings and skipped. Relationship
//! paths with fewer than two points are skipped silently.
//!
//! ```
//! # use apollon::render::Renderer;
//! # use apollon::theme::Theme;
//! # use apollon_core::diagnostic::DiagnosticCollector;
//! # use apollon_core::draw::{ApproximateTextMeasurer, RecordingCanvas};
//! # use apollon_core::geometry::{Boundary, Size};
//! # use apollon_core::model::{UMLDiagramType, UMLElement, UMLElementType, UMLModel};
//! let mut model = UMLModel::new(UMLDiagramType::UseCaseDiagram, Size::new(400.0, 300.0));
//! model
//!     .add_element(
//!         UMLElement::new("u1", "Checkout", UMLElementType::UseCase)
//!             .with_bounds(Boundary::new(10.0, 10.0, 200.0, 100.0)),
//!     )
//!     .unwrap();
//!
//! let mut renderer = Renderer::new(Theme::default()).with_measurer(ApproximateTextMeasurer);
//! let mut canvas = RecordingCanvas::new();
//! let mut sink = DiagnosticCollector::new();
//! assert!(renderer.render(&model, &mut canvas, &mut sink));
//! assert_eq!(canvas.texts(), ["Checkout"]);
//! ```

mod activity;
mod class;
mod common;
mod communication;
mod component;
pub mod marker;
mod object;
mod use_case;

use std::rc::Rc;

use log::{debug, info};

use apollon_core::{
    diagnostic::{Diagnostic, DiagnosticSink},
    draw::{Canvas, CosmicTextMeasurer, TextDefinition, TextMeasurer},
    geometry::{Boundary, Point, Size},
    model::{UMLDiagramType, UMLElement, UMLModel, UMLRelationship},
    path::absolute_path,
    query::draw_order,
};

use crate::theme::Theme;

/// Draws one element inside its absolute bounds.
pub type ElementRenderer = fn(&mut RenderContext<'_>, &UMLElement, Boundary);

/// Draws one relationship along its absolute path of at least two points.
pub type RelationshipRenderer = fn(&mut RenderContext<'_>, &UMLRelationship, &[Point]);

/// The element and relationship renderers of one diagram kind.
#[derive(Clone, Copy)]
pub struct RendererPair {
    element: ElementRenderer,
    relationship: RelationshipRenderer,
}

impl RendererPair {
    pub fn new(element: ElementRenderer, relationship: RelationshipRenderer) -> Self {
        Self {
            element,
            relationship,
        }
    }

    pub fn element(&self) -> ElementRenderer {
        self.element
    }

    pub fn relationship(&self) -> RelationshipRenderer {
        self.relationship
    }
}

/// Selects the renderers for a diagram kind, `None` if it cannot be drawn.
pub fn renderer_for(kind: &UMLDiagramType) -> Option<RendererPair> {
    use UMLDiagramType as D;

    match kind {
        D::ClassDiagram => Some(RendererPair::new(
            class::render_element,
            class::render_relationship,
        )),
        D::ObjectDiagram => Some(RendererPair::new(
            object::render_element,
            object::render_relationship,
        )),
        D::ActivityDiagram => Some(RendererPair::new(
            activity::render_element,
            activity::render_relationship,
        )),
        D::UseCaseDiagram => Some(RendererPair::new(
            use_case::render_element,
            use_case::render_relationship,
        )),
        D::CommunicationDiagram => Some(RendererPair::new(
            communication::render_element,
            communication::render_relationship,
        )),
        D::ComponentDiagram => Some(RendererPair::new(
            component::render_element,
            component::render_relationship,
        )),
        D::DeploymentDiagram
        | D::PetriNet
        | D::ReachabilityGraph
        | D::SyntaxTree
        | D::Flowchart
        | D::Unknown(_) => None,
    }
}

/// Everything a per-kind renderer needs while drawing one model.
pub struct RenderContext<'a> {
    canvas: &'a mut dyn Canvas,
    sink: &'a mut dyn DiagnosticSink,
    theme: &'a Theme,
    measurer: &'a dyn TextMeasurer,
    model: &'a UMLModel,
}

impl<'a> RenderContext<'a> {
    pub fn canvas(&mut self) -> &mut dyn Canvas {
        &mut *self.canvas
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    pub fn model(&self) -> &'a UMLModel {
        self.model
    }

    pub fn measure(&self, text: &str, definition: &TextDefinition) -> Size {
        self.measurer.measure(text, definition)
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.sink.report(diagnostic);
    }
}

/// Draws whole models with one theme.
///
/// Once a model of an unsupported kind has been seen the renderer stays
/// disabled: the first call reports an error, later calls draw nothing and
/// report nothing.
pub struct Renderer {
    theme: Theme,
    measurer: Rc<dyn TextMeasurer>,
    unsupported: bool,
}

impl Renderer {
    /// Creates a renderer measuring text with [`CosmicTextMeasurer`].
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            measurer: Rc::new(CosmicTextMeasurer),
            unsupported: false,
        }
    }

    pub fn with_measurer(self, measurer: impl TextMeasurer + 'static) -> Self {
        self.with_shared_measurer(Rc::new(measurer))
    }

    /// Measures text with a measurer shared with other renderers.
    pub fn with_shared_measurer(mut self, measurer: Rc<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn is_unsupported(&self) -> bool {
        self.unsupported
    }

    /// Draws `model` onto `canvas`.
    ///
    /// Returns false when nothing was drawn because the diagram kind is
    /// unsupported.
    pub fn render(
        &mut self,
        model: &UMLModel,
        canvas: &mut dyn Canvas,
        sink: &mut dyn DiagnosticSink,
    ) -> bool {
        if self.unsupported {
            debug!(diagram_type:% = model.kind(); "Renderer disabled, skipping");
            return false;
        }
        let Some(pair) = renderer_for(model.kind()) else {
            sink.report(
                Diagnostic::error(format!("unsupported diagram type `{}`", model.kind()))
                    .with_subject(model.kind().as_str()),
            );
            self.unsupported = true;
            return false;
        };

        info!(
            diagram_type:% = model.kind(),
            elements = model.elements().len(),
            relationships = model.relationships().len();
            "Rendering diagram"
        );

        let mut ctx = RenderContext {
            canvas,
            sink,
            theme: &self.theme,
            measurer: self.measurer.as_ref(),
            model,
        };

        for element in draw_order(model) {
            let Some(bounds) = element.bounds() else {
                ctx.report(
                    Diagnostic::warning(format!("element `{}` has no bounds", element.id()))
                        .with_subject(element.id()),
                );
                continue;
            };
            (pair.element)(&mut ctx, element, bounds);
        }

        for relationship in model.relationships().values() {
            if relationship.bounds().is_none() {
                ctx.report(
                    Diagnostic::warning(format!(
                        "relationship `{}` has no bounds",
                        relationship.id()
                    ))
                    .with_subject(relationship.id()),
                );
                continue;
            }
            let Some(points) = absolute_path(relationship) else {
                debug!(id = relationship.id(); "Skipping relationship with a malformed path");
                continue;
            };
            (pair.relationship)(&mut ctx, relationship, &points);
        }

        true
    }
}
