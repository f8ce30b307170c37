//! Activity diagrams.

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

const CORNER_RADIUS: f32 = 10.0;

/// Inner disc of a final node, relative to the outer ring.
const FINAL_NODE_INNER_RATIO: f32 = 0.6;

pub(super) fn render_element(ctx: &mut RenderContext<'_>, element: &UMLElement, bounds: Boundary) {
    use UMLElementType as E;

    let text = common::element_text(ctx, element);
    match element.kind() {
        E::Activity => {
            common::fill_and_stroke(ctx, element, &Path::rounded_rect(bounds, CORNER_RADIUS));
            common::centered_label(ctx, element.name(), bounds, bounds.y() + 20.0, &text.bold());
        }
        E::ActivityActionNode => {
            common::fill_and_stroke(ctx, element, &Path::rounded_rect(bounds, CORNER_RADIUS));
            common::centered_label(ctx, element.name(), bounds, bounds.center().y(), &text);
        }
        E::ActivityObjectNode => {
            common::fill_and_stroke(ctx, element, &Path::rect(bounds));
            common::centered_label(ctx, element.name(), bounds, bounds.center().y(), &text);
        }
        E::ActivityInitialNode => {
            let disc = Path::circle(bounds.center(), common::inscribed_radius(bounds));
            common::fill_ink(ctx, element, &disc);
        }
        E::ActivityFinalNode => {
            let radius = common::inscribed_radius(bounds);
            common::fill_and_stroke(ctx, element, &Path::circle(bounds.center(), radius));
            let inner = Path::circle(bounds.center(), radius * FINAL_NODE_INNER_RATIO);
            common::fill_ink(ctx, element, &inner);
        }
        E::ActivityForkNode | E::ActivityForkNodeHorizontal => {
            common::fill_ink(ctx, element, &Path::rect(bounds));
        }
        E::ActivityMergeNode => {
            let center = bounds.center();
            let diamond = Path::polygon(&[
                Point::new(center.x(), bounds.min_y()),
                Point::new(bounds.max_x(), center.y()),
                Point::new(center.x(), bounds.max_y()),
                Point::new(bounds.min_x(), center.y()),
            ]);
            common::fill_and_stroke(ctx, element, &diamond);
            common::centered_label(ctx, element.name(), bounds, center.y(), &text);
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
        UMLRelationshipType::ActivityControlFlow => {
            common::styled_relationship(ctx, relationship, points, EdgeStyle::solid(Marker::Arrow))
        }
        _ => common::unknown_relationship(ctx, relationship, points),
    }
}
