//! Object diagrams. Communication diagrams reuse the element renderer.

use apollon_core::{
    geometry::{Boundary, Point},
    model::{UMLElement, UMLElementType, UMLRelationship, UMLRelationshipType},
};

use super::{
    RenderContext,
    common::{self, EdgeStyle},
    marker::Marker,
};

pub(super) fn render_element(ctx: &mut RenderContext<'_>, element: &UMLElement, bounds: Boundary) {
    match element.kind() {
        UMLElementType::ObjectName => {
            common::classifier(ctx, element, bounds, |text| text.underlined())
        }
        UMLElementType::ObjectAttribute | UMLElementType::ObjectMethod => {
            common::member_row(ctx, element, bounds)
        }
        _ => common::unknown_element(ctx, element, bounds),
    }
}

pub(super) fn render_relationship(
    ctx: &mut RenderContext<'_>,
    relationship: &UMLRelationship,
    points: &[Point],
) {
    match relationship.kind() {
        UMLRelationshipType::ObjectLink => {
            common::styled_relationship(ctx, relationship, points, EdgeStyle::solid(Marker::None))
        }
        _ => common::unknown_relationship(ctx, relationship, points),
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use apollon_core::{
        diagnostic::DiagnosticCollector,
        draw::{ApproximateTextMeasurer, DrawCommand, RecordingCanvas},
        geometry::Size,
        model::{UMLDiagramType, UMLModel, UMLRelationshipEndpoint},
    };

    use crate::{render::Renderer, theme::Theme};

    use super::*;

    #[test]
    fn test_object_name_is_underlined() {
        let mut model = UMLModel::new(UMLDiagramType::ObjectDiagram, Size::default());
        model
            .add_element(
                UMLElement::new("o", "alice: Person", UMLElementType::ObjectName)
                    .with_bounds(Boundary::new(0.0, 0.0, 200.0, 70.0)),
            )
            .unwrap();
        model
            .add_element(
                UMLElement::new("a", "age = 31", UMLElementType::ObjectAttribute)
                    .with_owner("o")
                    .with_bounds(Boundary::new(0.0, 40.0, 200.0, 30.0)),
            )
            .unwrap();
        model.resolve_hierarchy(&mut DiagnosticCollector::new());

        let mut canvas = RecordingCanvas::new();
        Renderer::new(Theme::default())
            .with_measurer(ApproximateTextMeasurer)
            .render(&model, &mut canvas, &mut DiagnosticCollector::new());

        assert_eq!(canvas.texts(), ["alice: Person", "age = 31"]);
        let DrawCommand::Text { text, frame, .. } = canvas
            .commands()
            .iter()
            .find(|command| matches!(command, DrawCommand::Text { .. }))
            .unwrap()
        else {
            unreachable!();
        };
        assert!(text.is_underline());
        // Name centered in the 40px header
        assert_approx_eq!(f32, frame.center().y(), 20.0);
        // Outline, then one header separator
        assert_eq!(canvas.stroke_count(), 2);
    }

    #[test]
    fn test_object_link_has_no_glyph() {
        let mut model = UMLModel::new(UMLDiagramType::ObjectDiagram, Size::default());
        model
            .add_relationship(
                UMLRelationship::new(
                    "l",
                    UMLRelationshipType::ObjectLink,
                    UMLRelationshipEndpoint::new("a", None),
                    UMLRelationshipEndpoint::new("b", None),
                )
                .with_geometry(
                    Boundary::new(0.0, 0.0, 0.0, 100.0),
                    vec![Point::new(0.0, 0.0), Point::new(0.0, 100.0)],
                ),
            )
            .unwrap();

        let mut canvas = RecordingCanvas::new();
        Renderer::new(Theme::default())
            .with_measurer(ApproximateTextMeasurer)
            .render(&model, &mut canvas, &mut DiagnosticCollector::new());
        assert_eq!(canvas.stroke_count(), 1);
        assert_eq!(canvas.fill_count(), 0);
        assert_eq!(canvas.text_count(), 0);
    }
}
