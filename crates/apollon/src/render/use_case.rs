//! Use case diagrams.

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

/// Distance of an actor's name from the bottom of its bounds.
const ACTOR_NAME_OFFSET: f32 = 15.0;

pub(super) fn render_element(ctx: &mut RenderContext<'_>, element: &UMLElement, bounds: Boundary) {
    let text = common::element_text(ctx, element);
    match element.kind() {
        UMLElementType::UseCase => {
            common::fill_and_stroke(ctx, element, &Path::ellipse(bounds));
            common::centered_label(ctx, element.name(), bounds, bounds.center().y(), &text);
        }
        UMLElementType::UseCaseActor => {
            let stroke = ctx.theme().stroke(element.stroke_color());
            ctx.canvas().stroke_path(&stick_figure(bounds), &stroke);
            let name_y = bounds.max_y() - ACTOR_NAME_OFFSET;
            common::centered_label(ctx, element.name(), bounds, name_y, &text);
        }
        UMLElementType::UseCaseSystem => {
            common::fill_and_stroke(ctx, element, &Path::rect(bounds));
            common::centered_label(ctx, element.name(), bounds, bounds.y() + 20.0, &text.bold());
        }
        _ => common::unknown_element(ctx, element, bounds),
    }
}

/// Head, body, arms and legs in the upper part of `bounds`.
fn stick_figure(bounds: Boundary) -> Path {
    let cx = bounds.center().x();
    let y = bounds.y();
    let p = Point::new;
    Path::circle(p(cx, y + 15.0), 12.5)
        .append(Path::polyline(&[p(cx, y + 27.5), p(cx, y + 80.0)]))
        .append(Path::polyline(&[p(cx - 25.0, y + 45.0), p(cx + 25.0, y + 45.0)]))
        .append(Path::polyline(&[
            p(cx - 25.0, y + 110.0),
            p(cx, y + 80.0),
            p(cx + 25.0, y + 110.0),
        ]))
}

pub(super) fn render_relationship(
    ctx: &mut RenderContext<'_>,
    relationship: &UMLRelationship,
    points: &[Point],
) {
    use UMLRelationshipType as R;

    let style = match relationship.kind() {
        R::UseCaseAssociation => EdgeStyle::solid(Marker::None),
        R::UseCaseGeneralization => EdgeStyle::solid(Marker::Triangle),
        R::UseCaseInclude => EdgeStyle::dashed(Marker::Arrow).with_stereotype("«include»"),
        R::UseCaseExtend => EdgeStyle::dashed(Marker::Arrow).with_stereotype("«extend»"),
        _ => return common::unknown_relationship(ctx, relationship, points),
    };
    common::styled_relationship(ctx, relationship, points, style);
}

#[cfg(test)]
mod tests {
    use apollon_core::{
        diagnostic::DiagnosticCollector,
        direction::Direction,
        draw::{ApproximateTextMeasurer, RecordingCanvas},
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

    #[test]
    fn test_actor_and_system() {
        let mut model = UMLModel::new(UMLDiagramType::UseCaseDiagram, Size::default());
        model
            .add_element(
                UMLElement::new("s", "Shop", UMLElementType::UseCaseSystem)
                    .with_bounds(Boundary::new(100.0, 0.0, 400.0, 300.0)),
            )
            .unwrap();
        model
            .add_element(
                UMLElement::new("a", "Customer", UMLElementType::UseCaseActor)
                    .with_bounds(Boundary::new(0.0, 0.0, 90.0, 140.0)),
            )
            .unwrap();

        let canvas = render(&model);
        assert_eq!(canvas.texts(), ["Shop", "Customer"]);
        // System fill and outline, then the whole stick figure in one stroke
        assert_eq!(canvas.fill_count(), 1);
        assert_eq!(canvas.stroke_count(), 2);

        let figure = stick_figure(Boundary::new(0.0, 0.0, 90.0, 140.0));
        let bounds = figure.bounds().unwrap();
        assert_eq!(bounds.min_x(), 20.0);
        assert_eq!(bounds.max_x(), 70.0);
        assert_eq!(bounds.max_y(), 110.0);
    }

    #[test]
    fn test_include_label_replaces_name() {
        let mut model = UMLModel::new(UMLDiagramType::UseCaseDiagram, Size::default());
        model
            .add_relationship(
                UMLRelationship::new(
                    "i",
                    UMLRelationshipType::UseCaseInclude,
                    UMLRelationshipEndpoint::new("a", Some(Direction::Right)),
                    UMLRelationshipEndpoint::new("b", Some(Direction::Left)),
                )
                .with_name("ignored")
                .with_geometry(
                    Boundary::new(0.0, 0.0, 100.0, 0.0),
                    vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
                ),
            )
            .unwrap();

        let canvas = render(&model);
        assert_eq!(canvas.texts(), ["«include»"]);
        assert_eq!(canvas.stroke_count(), 2);
    }
}
