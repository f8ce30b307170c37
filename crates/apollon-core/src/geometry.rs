//! Geometric primitives for diagram coordinates.
//!
//! This module provides the geometric types shared by the diagram model,
//! the hit-testing engine and the renderers.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space (also used for path points)
//! - [`Size`] - Width and height dimensions
//! - [`Boundary`] - An axis-aligned rectangle given by origin and size
//! - [`Insets`] - Padding values for four sides
//!
//! # Coordinate System
//!
//! Apollon diagrams use the same coordinate system as SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! A [`Boundary`] is stored the way the diagram JSON stores it: the top-left
//! corner (`x`, `y`) plus `width` and `height`.

use serde::{Deserialize, Serialize};

/// A 2D point in diagram coordinate space.
///
/// Relationship paths store their points relative to the relationship's
/// [`Boundary`] origin; everything else is absolute.
///
/// # Examples
///
/// ```
/// # use apollon_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points
    pub fn distance(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the unit vector pointing the same way, or `None` for the zero vector.
    pub fn normalize(self) -> Option<Self> {
        let length = self.hypot();
        if length == 0.0 {
            None
        } else {
            Some(Self {
                x: self.x / length,
                y: self.y / length,
            })
        }
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Point, t: f32) -> Self {
        self.add_point(other.sub_point(self).scale(t))
    }

    /// Shortest distance from this point to the segment `a`-`b`.
    ///
    /// A degenerate segment (`a == b`) is treated as the single point `a`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use apollon_core::geometry::Point;
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(100.0, 0.0);
    ///
    /// assert_eq!(Point::new(50.0, 8.0).distance_to_segment(a, b), 8.0);
    /// assert_eq!(Point::new(-3.0, 4.0).distance_to_segment(a, b), 5.0);
    /// ```
    pub fn distance_to_segment(self, a: Point, b: Point) -> f32 {
        let segment = b.sub_point(a);
        let length_squared = segment.x * segment.x + segment.y * segment.y;
        if length_squared == 0.0 {
            return self.distance(a);
        }

        let relative = self.sub_point(a);
        let t = ((relative.x * segment.x + relative.y * segment.y) / length_squared).clamp(0.0, 1.0);
        self.distance(a.lerp(b, t))
    }

    /// Returns a new point with absolute values of both coordinates
    pub fn abs(self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

}

/// An axis-aligned rectangle in diagram coordinate space.
///
/// Serialized as `{ "x", "y", "width", "height" }`, the layout used by the
/// diagram JSON for element and relationship bounds. Width and height are
/// expected to be non-negative; nothing enforces it.
///
/// # Examples
///
/// ```
/// # use apollon_core::geometry::{Boundary, Point};
/// let bounds = Boundary::new(0.0, 0.0, 100.0, 50.0);
///
/// assert!(bounds.contains_point(Point::new(50.0, 25.0)));
/// // Edges are outside
/// assert!(!bounds.contains_point(Point::new(0.0, 25.0)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Boundary {
    /// Creates a boundary from its top-left corner and dimensions
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a boundary from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self::new(top_left.x, top_left.y, size.width, size.height)
    }

    /// Smallest boundary enclosing every point, or `None` for an empty iterator.
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (mut min, mut max) = (first, first);
        for point in points {
            min = Point::new(min.x.min(point.x), min.y.min(point.y));
            max = Point::new(max.x.max(point.x), max.y.max(point.y));
        }
        Some(Self::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the minimum x-coordinate of the boundary
    pub fn min_x(self) -> f32 {
        self.x
    }

    /// Returns the minimum y-coordinate of the boundary
    pub fn min_y(self) -> f32 {
        self.y
    }

    /// Returns the maximum x-coordinate of the boundary
    pub fn max_x(self) -> f32 {
        self.x + self.width
    }

    /// Returns the maximum y-coordinate of the boundary
    pub fn max_y(self) -> f32 {
        self.y + self.height
    }

    /// Returns the top-left corner
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the dimensions as a [`Size`]
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the center point of the boundary
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Strict interior test: points on an edge are outside.
    ///
    /// Two elements sharing an edge therefore never both claim a point on
    /// that edge.
    pub fn contains_point(self, point: Point) -> bool {
        point.x > self.x && point.x < self.max_x() && point.y > self.y && point.y < self.max_y()
    }

    /// Moves the boundary by the given offset, keeping its size.
    ///
    /// # Examples
    ///
    /// ```
    /// # use apollon_core::geometry::{Boundary, Point};
    /// let bounds = Boundary::new(10.0, 20.0, 50.0, 30.0);
    /// let moved = bounds.translate(Point::new(100.0, 50.0));
    /// assert_eq!(moved.x(), 110.0);
    /// assert_eq!(moved.y(), 70.0);
    /// assert_eq!(moved.width(), 50.0);
    /// ```
    pub fn translate(self, offset: Point) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..self
        }
    }

    /// Expands the boundary by per-side insets.
    pub fn add_padding(self, insets: Insets) -> Self {
        Self::new(
            self.x - insets.left(),
            self.y - insets.top(),
            self.width + insets.horizontal_sum(),
            self.height + insets.vertical_sum(),
        )
    }

    /// Smallest boundary containing both boundaries.
    pub fn merge(&self, other: &Self) -> Self {
        let min_x = self.min_x().min(other.min_x());
        let min_y = self.min_y().min(other.min_y());
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

/// Represents spacing around an element (padding, margin, etc.)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert_eq!(point.x(), 0.0);
        assert_eq!(point.y(), 0.0);
        assert!(point.is_zero());
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);
        assert_eq!(p1.add_point(p2), Point::new(7.0, 11.0));
        assert_eq!(p1.sub_point(p2), Point::new(3.0, 5.0));
    }

    #[test]
    fn test_point_normalize() {
        let unit = Point::new(3.0, 4.0).normalize().unwrap();
        assert_approx_eq!(f32, unit.x(), 0.6);
        assert_approx_eq!(f32, unit.y(), 0.8);

        assert!(Point::default().normalize().is_none());
    }

    #[test]
    fn test_point_lerp() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 20.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(5.0, 10.0));
    }

    #[test]
    fn test_point_distance_to_segment() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 100.0);

        // Perpendicular projection lands inside the segment
        assert_approx_eq!(f32, Point::new(7.0, 40.0).distance_to_segment(a, b), 7.0);
        // Beyond the end of the segment the endpoint is closest
        assert_approx_eq!(f32, Point::new(0.0, 110.0).distance_to_segment(a, b), 10.0);
        // Degenerate segment
        assert_approx_eq!(f32, Point::new(3.0, 4.0).distance_to_segment(a, a), 5.0);
    }

    #[test]
    fn test_boundary_accessors() {
        let bounds = Boundary::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(bounds.min_x(), 10.0);
        assert_eq!(bounds.min_y(), 20.0);
        assert_eq!(bounds.max_x(), 40.0);
        assert_eq!(bounds.max_y(), 60.0);
        assert_eq!(bounds.origin(), Point::new(10.0, 20.0));
        assert_eq!(bounds.center(), Point::new(25.0, 40.0));
        assert_eq!(bounds.size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_boundary_contains_point_is_strict() {
        let bounds = Boundary::new(0.0, 0.0, 100.0, 50.0);

        assert!(bounds.contains_point(Point::new(50.0, 25.0)));
        assert!(!bounds.contains_point(Point::new(0.0, 25.0)));
        assert!(!bounds.contains_point(Point::new(100.0, 25.0)));
        assert!(!bounds.contains_point(Point::new(50.0, 0.0)));
        assert!(!bounds.contains_point(Point::new(50.0, 50.0)));
        assert!(!bounds.contains_point(Point::new(150.0, 25.0)));
    }

    #[test]
    fn test_adjacent_boundaries_are_mutually_exclusive() {
        let left = Boundary::new(0.0, 0.0, 50.0, 50.0);
        let right = Boundary::new(50.0, 0.0, 50.0, 50.0);
        let on_edge = Point::new(50.0, 25.0);

        assert!(!left.contains_point(on_edge));
        assert!(!right.contains_point(on_edge));
    }

    #[test]
    fn test_boundary_enclosing() {
        let bounds = Boundary::enclosing([
            Point::new(10.0, 50.0),
            Point::new(-5.0, 20.0),
            Point::new(30.0, 0.0),
        ])
        .unwrap();

        assert_eq!(bounds, Boundary::new(-5.0, 0.0, 35.0, 50.0));
        assert!(Boundary::enclosing(Vec::new()).is_none());
    }

    #[test]
    fn test_boundary_merge() {
        let header = Boundary::new(0.0, 0.0, 100.0, 30.0);
        let content = Boundary::new(10.0, 40.0, 120.0, 80.0);

        let combined = header.merge(&content);
        assert_eq!(combined, Boundary::new(0.0, 0.0, 130.0, 120.0));
    }

    #[test]
    fn test_boundary_serde_field_names() {
        let bounds = Boundary::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_value(bounds).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "x": 1.0, "y": 2.0, "width": 3.0, "height": 4.0 })
        );
    }

    #[test]
    fn test_boundary_add_padding() {
        let bounds = Boundary::new(10.0, 10.0, 10.0, 10.0);
        let padded = bounds.add_padding(Insets::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(padded, Boundary::new(6.0, 9.0, 16.0, 14.0));
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn boundary_strategy() -> impl Strategy<Value = Boundary> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            1.0f32..500.0,
            1.0f32..500.0,
        )
            .prop_map(|(x, y, w, h)| Boundary::new(x, y, w, h))
    }

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    /// The center of a non-empty boundary is always strictly inside it.
    fn check_center_is_inside(bounds: Boundary) -> Result<(), TestCaseError> {
        prop_assert!(bounds.contains_point(bounds.center()));
        Ok(())
    }

    /// Corners are never contained under the open-interval policy.
    fn check_corners_are_outside(bounds: Boundary) -> Result<(), TestCaseError> {
        prop_assert!(!bounds.contains_point(bounds.origin()));
        prop_assert!(!bounds.contains_point(Point::new(bounds.max_x(), bounds.max_y())));
        Ok(())
    }

    /// Merged boundaries contain both inputs.
    fn check_merge_contains_both(b1: Boundary, b2: Boundary) -> Result<(), TestCaseError> {
        let merged = b1.merge(&b2);
        for b in [b1, b2] {
            prop_assert!(merged.min_x() <= b.min_x() + 0.001);
            prop_assert!(merged.min_y() <= b.min_y() + 0.001);
            prop_assert!(merged.max_x() >= b.max_x() - 0.001);
            prop_assert!(merged.max_y() >= b.max_y() - 0.001);
        }
        Ok(())
    }

    /// Distance to a segment never exceeds the distance to either endpoint.
    fn check_segment_distance_bounded(p: Point, a: Point, b: Point) -> Result<(), TestCaseError> {
        let distance = p.distance_to_segment(a, b);
        prop_assert!(distance <= p.distance(a) + 0.01);
        prop_assert!(distance <= p.distance(b) + 0.01);
        Ok(())
    }

    /// Translating keeps the size unchanged.
    fn check_translate_preserves_size(b: Boundary, offset: Point) -> Result<(), TestCaseError> {
        let moved = b.translate(offset);
        prop_assert!(approx_eq!(f32, moved.width(), b.width()));
        prop_assert!(approx_eq!(f32, moved.height(), b.height()));
        Ok(())
    }

    proptest! {
        #[test]
        fn center_is_inside(bounds in boundary_strategy()) {
            check_center_is_inside(bounds)?;
        }

        #[test]
        fn corners_are_outside(bounds in boundary_strategy()) {
            check_corners_are_outside(bounds)?;
        }

        #[test]
        fn merge_contains_both(b1 in boundary_strategy(), b2 in boundary_strategy()) {
            check_merge_contains_both(b1, b2)?;
        }

        #[test]
        fn segment_distance_bounded(
            p in point_strategy(),
            a in point_strategy(),
            b in point_strategy(),
        ) {
            check_segment_distance_bounded(p, a, b)?;
        }

        #[test]
        fn translate_preserves_size(b in boundary_strategy(), offset in point_strategy()) {
            check_translate_preserves_size(b, offset)?;
        }
    }
}
