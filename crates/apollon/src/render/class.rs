//! Class diagrams.

use apollon_core::{
    draw::Path,
    geometry::{Boundary, Point},
    model::{UMLElement, UMLElementType, UMLRelationship, UMLRelationshipType},
};

use super::{
    RenderContext,
    common::{self, EdgeStyle},
    marker::Marker,
};

/// Size of the tab on top of a package.
const PACKAGE_TAB_WIDTH: f32 = 45.0;
const PACKAGE_TAB_HEIGHT: f32 = 10.0;

pub(super) fn render_element(ctx: &mut RenderContext<'_>, element: &UMLElement, bounds: Boundary) {
    use UMLElementType as E;

    match element.kind() {
        E::Package => package(ctx, element, bounds),
        E::Class | E::AbstractClass | E::Interface | E::Enumeration => {
            common::classifier(ctx, element, bounds, |text| text)
        }
        E::ClassAttribute | E::ClassMethod => common::member_row(ctx, element, bounds),
        _ => common::unknown_element(ctx, element, bounds),
    }
}

fn package(ctx: &mut RenderContext<'_>, element: &UMLElement, bounds: Boundary) {
    let tab_width = PACKAGE_TAB_WIDTH.min(bounds.width());
    let tab = Path::rect(Boundary::new(
        bounds.x(),
        bounds.y(),
        tab_width,
        PACKAGE_TAB_HEIGHT,
    ));
    let body_bounds = Boundary::new(
        bounds.x(),
        bounds.y() + PACKAGE_TAB_HEIGHT,
        bounds.width(),
        (bounds.height() - PACKAGE_TAB_HEIGHT).max(0.0),
    );
    common::fill_and_stroke(ctx, element, &tab);
    common::fill_and_stroke(ctx, element, &Path::rect(body_bounds));

    let text = common::element_text(ctx, element).bold();
    common::centered_label(ctx, element.name(), body_bounds, body_bounds.y() + 15.0, &text);
}

pub(super) fn render_relationship(
    ctx: &mut RenderContext<'_>,
    relationship: &UMLRelationship,
    points: &[Point],
) {
    use UMLRelationshipType as R;

    let style = match relationship.kind() {
        R::ClassBidirectional => EdgeStyle::solid(Marker::None),
        R::ClassUnidirectional => EdgeStyle::solid(Marker::Arrow),
        R::ClassInheritance => EdgeStyle::solid(Marker::Triangle),
        R::ClassRealization => EdgeStyle::dashed(Marker::Triangle),
        R::ClassDependency => EdgeStyle::dashed(Marker::Arrow),
        R::ClassAggregation => EdgeStyle::solid(Marker::Diamond),
        R::ClassComposition => EdgeStyle::solid(Marker::FilledDiamond),
        _ => return common::unknown_relationship(ctx, relationship, points),
    };
    common::styled_relationship(ctx, relationship, points, style);
}

#[cfg(test)]
mod tests {
    use apollon_core::{
        diagnostic::DiagnosticCollector,
        direction::Direction,
        draw::{ApproximateTextMeasurer, DrawCommand, PathSegment, RecordingCanvas, StrokeStyle},
        geometry::Size,
        model::{UMLDiagramType, UMLModel, UMLRelationshipEndpoint},
    };

    use crate::{render::Renderer, theme::Theme};

    use super::*;

    fn render(model: &UMLModel) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        Renderer::new(Theme::default())
            .with_measurer(ApproximateTextMeasurer)
            .render(model, &mut canvas, &mut DiagnosticCollector::new());
        canvas
    }

    fn horizontal_strokes(canvas: &RecordingCanvas) -> Vec<f32> {
        canvas
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Stroke { path, .. } => match path.segments() {
                    [PathSegment::MoveTo(a), PathSegment::LineTo(b)] if a.y() == b.y() => {
                        Some(a.y())
                    }
                    _ => None,
                },
                _ => None,
            })
            .collect()
    }

    fn class_with_members() -> UMLModel {
        let mut model = UMLModel::new(UMLDiagramType::ClassDiagram, Size::new(400.0, 300.0));
        let rows = [
            ("a1", "+ id: int", UMLElementType::ClassAttribute, 40.0),
            ("m1", "+ save()", UMLElementType::ClassMethod, 100.0),
            ("a2", "+ name: str", UMLElementType::ClassAttribute, 70.0),
        ];
        model
            .add_element(
                UMLElement::new("c", "Person", UMLElementType::Interface)
                    .with_bounds(Boundary::new(0.0, 0.0, 200.0, 130.0)),
            )
            .unwrap();
        for (id, name, kind, y) in rows {
            model
                .add_element(
                    UMLElement::new(id, name, kind)
                        .with_owner("c")
                        .with_bounds(Boundary::new(0.0, y, 200.0, 30.0)),
                )
                .unwrap();
        }
        model.resolve_hierarchy(&mut DiagnosticCollector::new());
        model
    }

    #[test]
    fn test_classifier_header_and_separators() {
        let canvas = render(&class_with_members());

        assert_eq!(
            canvas.texts(),
            ["«interface»", "Person", "+ id: int", "+ save()", "+ name: str"]
        );
        // Header line at the annotated header height, method line at m1
        assert_eq!(horizontal_strokes(&canvas), [50.0, 100.0]);
    }

    #[test]
    fn test_member_rows_are_inset() {
        let canvas = render(&class_with_members());
        let frame = canvas
            .commands()
            .iter()
            .find_map(|command| match command {
                DrawCommand::Text { content, frame, .. } if content == "+ id: int" => Some(*frame),
                _ => None,
            })
            .unwrap();
        assert_eq!(frame, Boundary::new(10.0, 40.0, 190.0, 30.0));
    }

    #[test]
    fn test_abstract_name_is_italic() {
        let mut model = UMLModel::new(UMLDiagramType::ClassDiagram, Size::default());
        model
            .add_element(
                UMLElement::new("c", "Shape", UMLElementType::AbstractClass)
                    .with_bounds(Boundary::new(0.0, 0.0, 200.0, 50.0)),
            )
            .unwrap();
        let canvas = render(&model);
        let name = canvas
            .commands()
            .iter()
            .find_map(|command| match command {
                DrawCommand::Text { content, text, .. } if content == "Shape" => Some(text.clone()),
                _ => None,
            })
            .unwrap();
        assert!(name.is_italic());
        assert!(name.is_bold());
        // No members, no separators
        assert!(horizontal_strokes(&canvas).is_empty());
    }

    #[test]
    fn test_package_draws_tab_and_body() {
        let mut model = UMLModel::new(UMLDiagramType::ClassDiagram, Size::default());
        model
            .add_element(
                UMLElement::new("p", "domain", UMLElementType::Package)
                    .with_bounds(Boundary::new(0.0, 0.0, 300.0, 200.0)),
            )
            .unwrap();
        let canvas = render(&model);
        assert_eq!(canvas.fill_count(), 2);
        assert_eq!(canvas.stroke_count(), 2);
        assert_eq!(canvas.texts(), ["domain"]);
    }

    fn relationship_model(kind: UMLRelationshipType) -> UMLModel {
        let mut model = UMLModel::new(UMLDiagramType::ClassDiagram, Size::default());
        model
            .add_relationship(
                UMLRelationship::new(
                    "r",
                    kind,
                    UMLRelationshipEndpoint::new("a", Some(Direction::Right))
                        .with_multiplicity("1")
                        .with_role("owner"),
                    UMLRelationshipEndpoint::new("b", Some(Direction::Left)).with_multiplicity("*"),
                )
                .with_name("has")
                .with_geometry(
                    Boundary::new(100.0, 50.0, 200.0, 0.0),
                    vec![Point::new(0.0, 0.0), Point::new(200.0, 0.0)],
                ),
            )
            .unwrap();
        model
    }

    #[test]
    fn test_composition_glyph_and_labels() {
        let canvas = render(&relationship_model(UMLRelationshipType::ClassComposition));

        // Line, then diamond fill and outline
        assert_eq!(canvas.stroke_count(), 2);
        assert_eq!(canvas.fill_count(), 1);
        assert_eq!(canvas.texts(), ["has", "1", "owner", "*"]);
    }

    #[test]
    fn test_dependency_is_dashed_with_open_arrow() {
        let canvas = render(&relationship_model(UMLRelationshipType::ClassDependency));
        let strokes: Vec<_> = canvas
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Stroke { stroke, .. } => Some(*stroke.style()),
                _ => None,
            })
            .collect();
        assert_eq!(strokes, [StrokeStyle::Dashed, StrokeStyle::Solid]);
        assert_eq!(canvas.fill_count(), 0);
    }

    #[test]
    fn test_foreign_kinds_fall_back() {
        let mut model = relationship_model(UMLRelationshipType::UseCaseInclude);
        model
            .add_element(
                UMLElement::new("u", "Login", UMLElementType::UseCase)
                    .with_bounds(Boundary::new(0.0, 0.0, 50.0, 50.0)),
            )
            .unwrap();
        let canvas = render(&model);
        assert_eq!(canvas.stroke_count(), 2);
        assert_eq!(canvas.fill_count(), 0);
        assert_eq!(canvas.text_count(), 0);
    }
}
