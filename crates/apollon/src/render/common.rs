//! Drawing helpers shared by the per-diagram renderers.

use log::debug;

use apollon_core::{
    direction::Direction,
    draw::{HorizontalAlign, Path, TextDefinition},
    geometry::{Boundary, Point},
    hierarchy::vertically_sorted_children,
    layout::header_height,
    model::{UMLElement, UMLElementType, UMLRelationship},
    path::{endpoint_label_anchors, midpoint_of},
};

use super::{
    RenderContext,
    marker::{Marker, draw_marker},
};

/// Horizontal inset of member rows.
pub(super) const ROW_INSET: f32 = 10.0;

/// Gap between a relationship and its name label.
const NAME_GAP: f32 = 4.0;

/// How a relationship kind is drawn.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct EdgeStyle {
    pub dashed: bool,
    pub marker: Marker,
    /// Fixed label replacing the relationship name
    pub stereotype: Option<&'static str>,
}

impl EdgeStyle {
    pub fn solid(marker: Marker) -> Self {
        Self {
            marker,
            ..Self::default()
        }
    }

    pub fn dashed(marker: Marker) -> Self {
        Self {
            dashed: true,
            marker,
            ..Self::default()
        }
    }

    pub fn with_stereotype(mut self, stereotype: &'static str) -> Self {
        self.stereotype = Some(stereotype);
        self
    }
}

/// Fills `path` with the element fill and strokes it with the element stroke.
pub(super) fn fill_and_stroke(ctx: &mut RenderContext<'_>, element: &UMLElement, path: &Path) {
    let theme = ctx.theme();
    ctx.canvas()
        .fill_path(path, theme.fill(element.fill_color()));
    ctx.canvas()
        .stroke_path(path, &theme.stroke(element.stroke_color()));
}

/// Fills `path` with the element stroke color, for solid shapes.
pub(super) fn fill_ink(ctx: &mut RenderContext<'_>, element: &UMLElement, path: &Path) {
    let color = ctx.theme().ink(element.stroke_color());
    ctx.canvas().fill_path(path, color);
}

/// Fallback for kinds the current diagram does not know: one outline.
pub(super) fn unknown_element(ctx: &mut RenderContext<'_>, element: &UMLElement, bounds: Boundary) {
    debug!(id = element.id(), kind:% = element.kind(); "Drawing unknown element as outline");
    let stroke = ctx.theme().stroke(element.stroke_color());
    ctx.canvas().stroke_path(&Path::rect(bounds), &stroke);
}

/// Text style for an element label.
pub(super) fn element_text(ctx: &RenderContext<'_>, element: &UMLElement) -> TextDefinition {
    ctx.theme().text(element.text_color())
}

/// Draws `content` horizontally centered in `bounds`, its middle at `center_y`.
pub(super) fn centered_label(
    ctx: &mut RenderContext<'_>,
    content: &str,
    bounds: Boundary,
    center_y: f32,
    text: &TextDefinition,
) {
    anchored_label(
        ctx,
        content,
        Point::new(bounds.center().x(), center_y),
        HorizontalAlign::Middle,
        text,
    );
}

/// Draws `content` so that `anchor` is its vertical middle and its start,
/// middle or end depending on `align`.
pub(super) fn anchored_label(
    ctx: &mut RenderContext<'_>,
    content: &str,
    anchor: Point,
    align: HorizontalAlign,
    text: &TextDefinition,
) {
    if content.is_empty() {
        return;
    }
    let size = ctx.measure(content, text);
    let left = match align {
        HorizontalAlign::Start => anchor.x(),
        HorizontalAlign::Middle => anchor.x() - size.width() / 2.0,
        HorizontalAlign::End => anchor.x() - size.width(),
    };
    let frame = Boundary::new_from_top_left(
        Point::new(left, anchor.y() - size.height() / 2.0),
        size,
    );
    ctx.canvas()
        .draw_text(content, frame, &text.clone().aligned(align));
}

/// An attribute or method row: left aligned, inset, vertically centered.
pub(super) fn member_row(ctx: &mut RenderContext<'_>, element: &UMLElement, bounds: Boundary) {
    if element.name().is_empty() {
        return;
    }
    let frame = Boundary::new(
        bounds.x() + ROW_INSET,
        bounds.y(),
        (bounds.width() - ROW_INSET).max(0.0),
        bounds.height(),
    );
    let text = element_text(ctx, element).aligned(HorizontalAlign::Start);
    ctx.canvas().draw_text(element.name(), frame, &text);
}

/// A class-like box: outline, header and compartment separators.
///
/// The header shows the stereotype line, if the kind has one, above the
/// bold name. `name_style` adjusts the name, for instance underlining
/// object names.
pub(super) fn classifier(
    ctx: &mut RenderContext<'_>,
    element: &UMLElement,
    bounds: Boundary,
    name_style: impl FnOnce(TextDefinition) -> TextDefinition,
) {
    fill_and_stroke(ctx, element, &Path::rect(bounds));

    let header = header_height(element);
    let text = element_text(ctx, element);
    let annotation = element.kind().annotation_title();
    let name_y = if annotation.is_empty() {
        bounds.y() + header / 2.0
    } else {
        centered_label(ctx, annotation, bounds, bounds.y() + 15.0, &text);
        bounds.y() + 35.0
    };
    let mut name_text = name_style(text.bold());
    if matches!(element.kind(), UMLElementType::AbstractClass) {
        name_text.set_italic(true);
    }
    centered_label(ctx, element.name(), bounds, name_y, &name_text);

    if element.children().is_empty() || bounds.height() <= header {
        return;
    }
    let stroke = ctx.theme().stroke(element.stroke_color());
    let separator = |y: f32| {
        Path::polyline(&[Point::new(bounds.min_x(), y), Point::new(bounds.max_x(), y)])
    };
    let header_line = bounds.y() + header;
    ctx.canvas().stroke_path(&separator(header_line), &stroke);

    let first_method = vertically_sorted_children(ctx.model(), element.id())
        .into_iter()
        .find(|child| child.kind().is_method())
        .and_then(UMLElement::bounds);
    if let Some(method) = first_method.filter(|method| method.y() > header_line) {
        ctx.canvas().stroke_path(&separator(method.y()), &stroke);
    }
}

/// Side of the element a path end attaches to.
///
/// The endpoint's stored direction wins; otherwise it is inferred from the
/// last segment travelling into the element.
pub(super) fn attachment(stored: Option<Direction>, end: Point, previous: Point) -> Option<Direction> {
    stored.or_else(|| Direction::entered_by(end.sub_point(previous)))
}

/// Draws a relationship line with its glyph, name and endpoint labels.
pub(super) fn styled_relationship(
    ctx: &mut RenderContext<'_>,
    relationship: &UMLRelationship,
    points: &[Point],
    style: EdgeStyle,
) {
    let ([first, second, ..], [.., before_last, last]) = (points, points) else {
        return;
    };
    let (first, last) = (*first, *last);
    let theme = ctx.theme();
    let stroke = if style.dashed {
        theme.dashed_stroke(relationship.stroke_color())
    } else {
        theme.stroke(relationship.stroke_color())
    };
    ctx.canvas().stroke_path(&Path::polyline(points), &stroke);

    let source_side = attachment(relationship.source().direction(), first, *second);
    let target_side = attachment(relationship.target().direction(), last, *before_last);

    if let Some(direction) = target_side {
        draw_marker(
            ctx.canvas(),
            style.marker,
            last,
            direction,
            &stroke,
            theme.fill(None),
        );
    }

    let text = theme.text(relationship.text_color());
    let label = style.stereotype.unwrap_or(relationship.name());
    if let Some(mid) = midpoint_of(points) {
        let height = ctx.measure(label, &text).height();
        let anchor = mid.sub_point(Point::new(0.0, height / 2.0 + NAME_GAP));
        anchored_label(ctx, label, anchor, HorizontalAlign::Middle, &text);
    }

    for (endpoint, point, side) in [
        (relationship.source(), first, source_side),
        (relationship.target(), last, target_side),
    ] {
        let Some(direction) = side else {
            continue;
        };
        let (multiplicity, role) = endpoint_label_anchors(point, direction);
        anchored_label(
            ctx,
            endpoint.multiplicity(),
            multiplicity.position(),
            multiplicity.align(),
            &text,
        );
        anchored_label(ctx, endpoint.role(), role.position(), role.align(), &text);
    }
}

/// Fallback for kinds the current diagram does not know: the bare path.
pub(super) fn unknown_relationship(
    ctx: &mut RenderContext<'_>,
    relationship: &UMLRelationship,
    points: &[Point],
) {
    debug!(id = relationship.id(), kind:% = relationship.kind(); "Drawing unknown relationship as line");
    let stroke = ctx.theme().stroke(relationship.stroke_color());
    ctx.canvas().stroke_path(&Path::polyline(points), &stroke);
}

/// Radius of the largest circle centered in `bounds`.
pub(super) fn inscribed_radius(bounds: Boundary) -> f32 {
    bounds.width().min(bounds.height()) / 2.0
}
