//! Relationship path geometry and hit testing.
//!
//! # Overview
//!
//! A relationship stores its path as points relative to the origin of its
//! bounds. This module turns that into absolute geometry and answers the
//! questions renderers and editors ask about it:
//!
//! - [`absolute_path`] - Path points in diagram coordinates
//! - [`contains_point`] - Whether a click lands on the relationship
//! - [`midpoint`] / [`arc_length_midpoint`] - Where labels go
//! - [`arrowhead_transform`] - How to orient an end glyph
//! - [`endpoint_label_anchors`] - Where multiplicity and role labels go
//!
//! # Arrowhead glyphs
//!
//! End glyphs are drawn in a fixed 16×16 box pointing down, with the tip at
//! the bottom-center `(8, 16)`:
//!
//! ```text
//!   (0,0) ┌────────┐
//!         │ \    / │
//!         │  \  /  │
//!         │   \/   │
//!         └───tip──┘ (16,16)
//! ```
//!
//! [`ArrowheadTransform`] rotates that box about its center by a multiple of
//! 90° and then offsets it so the tip lands on the endpoint.

use crate::{
    direction::{Direction, Side},
    draw::HorizontalAlign,
    geometry::Point,
    model::UMLRelationship,
};

/// Width of the band around a path that counts as a hit.
pub const HIT_BAND_WIDTH: f32 = 20.0;

/// Edge length of the square box end glyphs are drawn in.
pub const GLYPH_SIZE: f32 = 16.0;

/// Distance of endpoint labels from the attachment line.
const LABEL_NORMAL_OFFSET: f32 = 10.0;

/// Distance of endpoint labels from the endpoint along the attachment line.
const LABEL_TANGENT_OFFSET: f32 = 5.0;

/// Returns the path in absolute diagram coordinates.
///
/// `None` when the relationship has no bounds or fewer than two points.
///
/// # Examples
///
/// ```
/// # use apollon_core::geometry::{Boundary, Point};
/// # use apollon_core::model::{UMLRelationship, UMLRelationshipEndpoint, UMLRelationshipType};
/// # use apollon_core::path::absolute_path;
/// let rel = UMLRelationship::new(
///     "r",
///     UMLRelationshipType::ClassDependency,
///     UMLRelationshipEndpoint::new("a", None),
///     UMLRelationshipEndpoint::new("b", None),
/// )
/// .with_geometry(
///     Boundary::new(100.0, 50.0, 40.0, 0.0),
///     vec![Point::new(0.0, 0.0), Point::new(40.0, 0.0)],
/// );
///
/// let path = absolute_path(&rel).unwrap();
/// assert_eq!(path, [Point::new(100.0, 50.0), Point::new(140.0, 50.0)]);
/// ```
pub fn absolute_path(relationship: &UMLRelationship) -> Option<Vec<Point>> {
    let bounds = relationship.bounds()?;
    let path = relationship.path();
    if path.len() < 2 {
        return None;
    }
    let origin = bounds.origin();
    Some(path.iter().map(|point| point.add_point(origin)).collect())
}

/// Returns true when `point` hits the relationship.
///
/// With a usable path a hit is anything within half of [`HIT_BAND_WIDTH`]
/// of some segment. A relationship with bounds but fewer than two path
/// points is hit strictly inside its bounds.
pub fn contains_point(relationship: &UMLRelationship, point: Point) -> bool {
    if let Some(path) = absolute_path(relationship) {
        let reach = HIT_BAND_WIDTH / 2.0;
        return path
            .windows(2)
            .any(|segment| point.distance_to_segment(segment[0], segment[1]) <= reach);
    }

    relationship
        .bounds()
        .is_some_and(|bounds| bounds.contains_point(point))
}

/// Label anchor of a relationship.
///
/// A three-point path (an elbow) anchors at its corner; every other path
/// anchors at the mean of its absolute points.
///
/// # Examples
///
/// ```
/// # use apollon_core::geometry::Point;
/// # use apollon_core::path::midpoint_of;
/// let elbow = [Point::new(0.0, 0.0), Point::new(60.0, 10.0), Point::new(60.0, 80.0)];
/// assert_eq!(midpoint_of(&elbow), Some(Point::new(60.0, 10.0)));
///
/// let straight = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
/// assert_eq!(midpoint_of(&straight), Some(Point::new(50.0, 0.0)));
/// ```
pub fn midpoint(relationship: &UMLRelationship) -> Option<Point> {
    midpoint_of(&absolute_path(relationship)?)
}

/// [`midpoint`] on an already absolute point list.
pub fn midpoint_of(points: &[Point]) -> Option<Point> {
    match points {
        [] => None,
        [_, corner, _] => Some(*corner),
        _ => {
            let sum = points
                .iter()
                .fold(Point::default(), |acc, point| acc.add_point(*point));
            Some(sum.scale(1.0 / points.len() as f32))
        }
    }
}

/// Point at half the polyline length and the unit direction of the segment
/// containing it.
///
/// This is an approximation used to place communication messages: on a
/// path whose middle falls exactly on a corner, the direction of the earlier
/// segment wins. `None` for fewer than two points or a zero-length path.
pub fn arc_length_midpoint(points: &[Point]) -> Option<(Point, Point)> {
    if points.len() < 2 {
        return None;
    }
    let total: f32 = points.windows(2).map(|s| s[0].distance(s[1])).sum();
    if total == 0.0 {
        return None;
    }

    let mut remaining = total / 2.0;
    for segment in points.windows(2) {
        let length = segment[0].distance(segment[1]);
        if length == 0.0 {
            continue;
        }
        if remaining <= length {
            let direction = segment[1].sub_point(segment[0]).normalize()?;
            return Some((segment[0].lerp(segment[1], remaining / length), direction));
        }
        remaining -= length;
    }

    // Float drift can leave a sliver past the last segment
    let last = points.windows(2).rev().find(|s| s[0] != s[1])?;
    Some((last[1], last[1].sub_point(last[0]).normalize()?))
}

/// Rotation of an end glyph, in clockwise quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuarterTurn {
    None,
    /// 90° clockwise
    Clockwise,
    /// 180°
    Half,
    /// 90° counter-clockwise
    CounterClockwise,
}

impl QuarterTurn {
    /// Rotation angle in degrees, clockwise in screen coordinates.
    pub fn degrees(self) -> f32 {
        match self {
            QuarterTurn::None => 0.0,
            QuarterTurn::Clockwise => 90.0,
            QuarterTurn::Half => 180.0,
            QuarterTurn::CounterClockwise => 270.0,
        }
    }
}

/// Placement of a 16×16 end glyph relative to an endpoint.
///
/// Apply [`ArrowheadTransform::apply`] to each glyph point to get diagram
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowheadTransform {
    rotation: QuarterTurn,
    offset: Point,
}

impl ArrowheadTransform {
    pub fn rotation(&self) -> QuarterTurn {
        self.rotation
    }

    /// Translation of the rotated glyph box relative to the endpoint.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Maps a point of the unrotated glyph box to diagram coordinates.
    pub fn apply(&self, glyph_point: Point, endpoint: Point) -> Point {
        let half = GLYPH_SIZE / 2.0;
        let (x, y) = (glyph_point.x() - half, glyph_point.y() - half);
        let (rx, ry) = match self.rotation {
            QuarterTurn::None => (x, y),
            QuarterTurn::Clockwise => (-y, x),
            QuarterTurn::Half => (-x, -y),
            QuarterTurn::CounterClockwise => (y, -x),
        };
        Point::new(rx + half, ry + half)
            .add_point(self.offset)
            .add_point(endpoint)
    }
}

/// Orientation of the end glyph for an endpoint attached at `direction`.
///
/// The glyph points into the element and its tip touches the endpoint.
pub fn arrowhead_transform(direction: Direction) -> ArrowheadTransform {
    let (rotation, dx, dy) = match direction {
        Direction::Up | Direction::Upleft | Direction::Upright => (QuarterTurn::None, -8.0, -16.0),
        Direction::Down | Direction::Downleft | Direction::Downright => {
            (QuarterTurn::Half, -8.0, 0.0)
        }
        Direction::Left | Direction::Topleft | Direction::Bottomleft => {
            (QuarterTurn::CounterClockwise, -16.0, -8.0)
        }
        Direction::Right | Direction::Topright | Direction::Bottomright => {
            (QuarterTurn::Clockwise, 0.0, -8.0)
        }
    };
    ArrowheadTransform {
        rotation,
        offset: Point::new(dx, dy),
    }
}

/// Anchor and alignment of one endpoint label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor {
    position: Point,
    align: HorizontalAlign,
}

impl LabelAnchor {
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn align(&self) -> HorizontalAlign {
        self.align
    }
}

/// Anchors for the multiplicity and role labels of an endpoint.
///
/// Both labels sit [`LABEL_NORMAL_OFFSET`] away from the element side,
/// on opposite sides of the line for top and bottom attachments and
/// stacked above and below it for left and right attachments.
pub fn endpoint_label_anchors(endpoint: Point, direction: Direction) -> (LabelAnchor, LabelAnchor) {
    let n = LABEL_NORMAL_OFFSET;
    let t = LABEL_TANGENT_OFFSET;
    let anchor = |dx: f32, dy: f32, align: HorizontalAlign| LabelAnchor {
        position: endpoint.add_point(Point::new(dx, dy)),
        align,
    };
    match direction.side() {
        Side::Top => (
            anchor(t, -n, HorizontalAlign::Start),
            anchor(-t, -n, HorizontalAlign::End),
        ),
        Side::Bottom => (
            anchor(t, n, HorizontalAlign::Start),
            anchor(-t, n, HorizontalAlign::End),
        ),
        Side::Left => (
            anchor(-t, -n, HorizontalAlign::End),
            anchor(-t, n, HorizontalAlign::End),
        ),
        Side::Right => (
            anchor(t, -n, HorizontalAlign::Start),
            anchor(t, n, HorizontalAlign::Start),
        ),
    }
}
