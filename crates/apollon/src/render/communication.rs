//! Communication diagrams.
//!
//! Objects are drawn as in object diagrams. Messages travel with their link:
//! they are grouped by direction and listed on either side of the link's
//! arc-length midpoint, each group behind a small arrow along the link.
//!
//! The placement is approximate: the arrow follows the segment holding the
//! midpoint and ignores how long the message list is.

use log::debug;

use apollon_core::{
    direction::MessageDirection,
    draw::{HorizontalAlign, Path},
    geometry::{Boundary, Point},
    model::{UMLElement, UMLElementType, UMLRelationship, UMLRelationshipType},
    path::arc_length_midpoint,
};

use super::{
    RenderContext,
    common::{self, EdgeStyle},
    marker::Marker,
    object,
};

/// Distance of a message arrow from the link.
const ARROW_OFFSET: f32 = 15.0;
const ARROW_HALF_LENGTH: f32 = 10.0;
const ARROW_HEAD_LENGTH: f32 = 5.0;
const ARROW_HEAD_HALF_WIDTH: f32 = 4.0;

/// Distance between a message arrow and its list of messages.
const LIST_GAP: f32 = 10.0;

pub(super) fn render_element(ctx: &mut RenderContext<'_>, element: &UMLElement, bounds: Boundary) {
    if matches!(element.kind(), UMLElementType::CommunicationLinkMessage) {
        debug!(id = element.id(); "Message stored as element, drawn with its link instead");
        return;
    }
    object::render_element(ctx, element, bounds);
}

pub(super) fn render_relationship(
    ctx: &mut RenderContext<'_>,
    relationship: &UMLRelationship,
    points: &[Point],
) {
    match relationship.kind() {
        UMLRelationshipType::CommunicationLink => {
            common::styled_relationship(ctx, relationship, points, EdgeStyle::solid(Marker::None));
            messages(ctx, relationship, points);
        }
        _ => common::unknown_relationship(ctx, relationship, points),
    }
}

fn messages(ctx: &mut RenderContext<'_>, relationship: &UMLRelationship, points: &[Point]) {
    if relationship.messages().is_empty() {
        return;
    }
    let Some((mid, along)) = arc_length_midpoint(points) else {
        return;
    };
    let normal = Point::new(-along.y(), along.x());

    // Messages without a direction travel with the link
    let (forward, backward): (Vec<&UMLElement>, Vec<&UMLElement>) = relationship
        .messages()
        .iter()
        .partition(|message| message.direction() != Some(MessageDirection::Target));

    message_group(ctx, relationship, mid, along, normal, &forward);
    message_group(
        ctx,
        relationship,
        mid,
        along.scale(-1.0),
        normal.scale(-1.0),
        &backward,
    );
}

/// Draws one direction arrow at `side` of `mid` and lists `messages` beyond it.
fn message_group(
    ctx: &mut RenderContext<'_>,
    relationship: &UMLRelationship,
    mid: Point,
    travel: Point,
    side: Point,
    messages: &[&UMLElement],
) {
    if messages.is_empty() {
        return;
    }

    let center = mid.add_point(side.scale(ARROW_OFFSET));
    let tail = center.sub_point(travel.scale(ARROW_HALF_LENGTH));
    let tip = center.add_point(travel.scale(ARROW_HALF_LENGTH));
    let back = tip.sub_point(travel.scale(ARROW_HEAD_LENGTH));
    let wing = side.scale(ARROW_HEAD_HALF_WIDTH);
    let arrow = Path::polyline(&[tail, tip]).append(Path::polyline(&[
        back.add_point(wing),
        tip,
        back.sub_point(wing),
    ]));
    let stroke = ctx.theme().stroke(relationship.stroke_color());
    ctx.canvas().stroke_path(&arrow, &stroke);

    let text = ctx.theme().text(relationship.text_color());
    let heights: Vec<f32> = messages
        .iter()
        .map(|message| ctx.measure(message.name(), &text).height())
        .collect();
    let base = mid.add_point(side.scale(ARROW_OFFSET + LIST_GAP));

    if side.y().abs() >= side.x().abs() {
        // Above or below a mostly horizontal link: stack away from it
        let mut distance = 0.0;
        for (message, height) in messages.iter().zip(&heights) {
            let anchor = base.add_point(side.scale(distance + height / 2.0));
            common::anchored_label(ctx, message.name(), anchor, HorizontalAlign::Middle, &text);
            distance += height;
        }
    } else {
        // Beside a mostly vertical link: stack downwards, centered on the arrow
        let align = if side.x() > 0.0 {
            HorizontalAlign::Start
        } else {
            HorizontalAlign::End
        };
        let total: f32 = heights.iter().sum();
        let mut y = base.y() - total / 2.0;
        for (message, height) in messages.iter().zip(&heights) {
            let anchor = Point::new(base.x(), y + height / 2.0);
            common::anchored_label(ctx, message.name(), anchor, align, &text);
            y += height;
        }
    }
}

#[cfg(test)]
mod tests {
    use apollon_core::{
        diagnostic::DiagnosticCollector,
        draw::{ApproximateTextMeasurer, DrawCommand, PathSegment, RecordingCanvas},
        geometry::Size,
        model::{UMLDiagramType, UMLModel, UMLRelationshipEndpoint},
    };

    use crate::{render::Renderer, theme::Theme};

    use super::*;

    fn message(id: &str, direction: MessageDirection) -> UMLElement {
        UMLElement::new(id, id, UMLElementType::CommunicationLinkMessage).with_direction(direction)
    }

    fn link_model(path: Vec<Point>, bounds: Boundary) -> UMLModel {
        let mut model = UMLModel::new(UMLDiagramType::CommunicationDiagram, Size::default());
        model
            .add_relationship(
                UMLRelationship::new(
                    "l",
                    UMLRelationshipType::CommunicationLink,
                    UMLRelationshipEndpoint::new("a", None),
                    UMLRelationshipEndpoint::new("b", None),
                )
                .with_geometry(bounds, path)
                .with_message(message("1: order()", MessageDirection::Source))
                .with_message(message("2: ack()", MessageDirection::Target))
                .with_message(message("3: pay()", MessageDirection::Source)),
            )
            .unwrap();
        model
    }

    fn render(model: &UMLModel) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        Renderer::new(Theme::default())
            .with_measurer(ApproximateTextMeasurer)
            .render(model, &mut canvas, &mut DiagnosticCollector::new());
        canvas
    }

    fn arrow_tips(canvas: &RecordingCanvas) -> Vec<Point> {
        canvas
            .commands()
            .iter()
            .skip(1)
            .filter_map(|command| match command {
                DrawCommand::Stroke { path, .. } => match path.segments()[1] {
                    PathSegment::LineTo(tip) => Some(tip),
                    _ => None,
                },
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_messages_grouped_by_direction() {
        let model = link_model(
            vec![Point::new(0.0, 0.0), Point::new(200.0, 0.0)],
            Boundary::new(0.0, 100.0, 200.0, 0.0),
        );
        let canvas = render(&model);

        // Link plus one arrow per direction
        assert_eq!(canvas.stroke_count(), 3);
        assert_eq!(canvas.texts(), ["1: order()", "3: pay()", "2: ack()"]);
        assert_eq!(
            arrow_tips(&canvas),
            [Point::new(110.0, 115.0), Point::new(90.0, 85.0)]
        );
    }

    #[test]
    fn test_vertical_link_lists_beside() {
        let model = link_model(
            vec![Point::new(0.0, 0.0), Point::new(0.0, 200.0)],
            Boundary::new(100.0, 0.0, 0.0, 200.0),
        );
        let canvas = render(&model);

        let aligns: Vec<_> = canvas
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.align()),
                _ => None,
            })
            .collect();
        // Travelling down, the source group sits on the left
        assert_eq!(
            aligns,
            [HorizontalAlign::End, HorizontalAlign::End, HorizontalAlign::Start]
        );
    }

    #[test]
    fn test_message_elements_are_not_drawn() {
        let mut model = UMLModel::new(UMLDiagramType::CommunicationDiagram, Size::default());
        model
            .add_element(
                message("stray", MessageDirection::Source)
                    .with_bounds(Boundary::new(0.0, 0.0, 10.0, 10.0)),
            )
            .unwrap();
        model
            .add_element(
                UMLElement::new("o", "bob: User", UMLElementType::ObjectName)
                    .with_bounds(Boundary::new(50.0, 0.0, 100.0, 40.0)),
            )
            .unwrap();
        let canvas = render(&model);
        assert_eq!(canvas.texts(), ["bob: User"]);
    }
}
