//! Component diagrams.

use apollon_core::{
    draw::{HorizontalAlign, Path},
    geometry::{Boundary, Point},
    model::{UMLElement, UMLElementType, UMLRelationship, UMLRelationshipType},
};

use super::{
    RenderContext,
    common::{self, EdgeStyle},
    marker::Marker,
};

/// Gap between an interface circle and its name.
const INTERFACE_LABEL_GAP: f32 = 5.0;

pub(super) fn render_element(ctx: &mut RenderContext<'_>, element: &UMLElement, bounds: Boundary) {
    match element.kind() {
        UMLElementType::Component => {
            let at_top = !element.children().is_empty();
            component_box(ctx, element, bounds, at_top);
        }
        UMLElementType::Subsystem => component_box(ctx, element, bounds, true),
        UMLElementType::ComponentInterface => {
            let radius = common::inscribed_radius(bounds);
            common::fill_and_stroke(ctx, element, &Path::circle(bounds.center(), radius));
            let text = common::element_text(ctx, element);
            let anchor = Point::new(bounds.max_x() + INTERFACE_LABEL_GAP, bounds.center().y());
            common::anchored_label(ctx, element.name(), anchor, HorizontalAlign::Start, &text);
        }
        _ => common::unknown_element(ctx, element, bounds),
    }
}

/// Box with the component icon, stereotype and name.
///
/// Boxes with contents keep their title at the top.
fn component_box(ctx: &mut RenderContext<'_>, element: &UMLElement, bounds: Boundary, at_top: bool) {
    common::fill_and_stroke(ctx, element, &Path::rect(bounds));
    common::fill_and_stroke(ctx, element, &component_icon(bounds));

    let text = common::element_text(ctx, element);
    let (annotation_y, name_y) = if at_top {
        (bounds.y() + 15.0, bounds.y() + 35.0)
    } else {
        let center = bounds.center().y();
        (center - 10.0, center + 10.0)
    };
    let annotation = element.kind().annotation_title();
    common::centered_label(ctx, annotation, bounds, annotation_y, &text);
    common::centered_label(ctx, element.name(), bounds, name_y, &text.bold());
}

/// The UML component symbol in the top-right corner of `bounds`.
fn component_icon(bounds: Boundary) -> Path {
    let x = bounds.max_x() - 25.0;
    let y = bounds.y() + 7.0;
    Path::rect(Boundary::new(x, y, 15.0, 20.0))
        .append(Path::rect(Boundary::new(x - 4.0, y + 4.0, 8.0, 4.0)))
        .append(Path::rect(Boundary::new(x - 4.0, y + 12.0, 8.0, 4.0)))
}

pub(super) fn render_relationship(
    ctx: &mut RenderContext<'_>,
    relationship: &UMLRelationship,
    points: &[Point],
) {
    use UMLRelationshipType as R;

    let style = match relationship.kind() {
        R::ComponentDependency => EdgeStyle::dashed(Marker::Arrow),
        R::ComponentInterfaceProvided => EdgeStyle::solid(Marker::None),
        R::ComponentInterfaceRequired => EdgeStyle::solid(Marker::HalfCircle),
        _ => return common::unknown_relationship(ctx, relationship, points),
    };
    common::styled_relationship(ctx, relationship, points, style);
}
