//! Vector outlines.
//!
//! A [`Path`] is a list of [`PathSegment`]s in absolute diagram coordinates.
//! Constructors cover the outlines UML shapes are made of: rectangles,
//! rounded rectangles, ellipses, polygons and open polylines.

use crate::geometry::{Boundary, Point};

/// Control-point factor approximating a quarter ellipse with one cubic.
const KAPPA: f32 = 0.552_284_8;

/// One drawing instruction of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bézier with two control points and an end point
    CubicTo(Point, Point, Point),
    /// Closes the current subpath back to its start
    Close,
}

impl PathSegment {
    fn map(self, f: &impl Fn(Point) -> Point) -> Self {
        match self {
            PathSegment::MoveTo(p) => PathSegment::MoveTo(f(p)),
            PathSegment::LineTo(p) => PathSegment::LineTo(f(p)),
            PathSegment::CubicTo(c1, c2, p) => PathSegment::CubicTo(f(c1), f(c2), f(p)),
            PathSegment::Close => PathSegment::Close,
        }
    }
}

/// A vector outline made of one or more subpaths.
///
/// # Examples
///
/// ```
/// # use apollon_core::draw::{Path, PathSegment};
/// # use apollon_core::geometry::{Boundary, Point};
/// let rect = Path::rect(Boundary::new(0.0, 0.0, 10.0, 5.0));
/// assert_eq!(rect.segments().len(), 5);
/// assert_eq!(rect.segments()[0], PathSegment::MoveTo(Point::new(0.0, 0.0)));
///
/// let line = Path::new()
///     .move_to(Point::new(0.0, 0.0))
///     .line_to(Point::new(10.0, 10.0));
/// assert!(!line.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, point: Point) -> Self {
        self.segments.push(PathSegment::MoveTo(point));
        self
    }

    pub fn line_to(mut self, point: Point) -> Self {
        self.segments.push(PathSegment::LineTo(point));
        self
    }

    pub fn cubic_to(mut self, control1: Point, control2: Point, end: Point) -> Self {
        self.segments
            .push(PathSegment::CubicTo(control1, control2, end));
        self
    }

    pub fn close(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    /// Appends every segment of `other`.
    pub fn append(mut self, other: Path) -> Self {
        self.segments.extend(other.segments);
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Closed rectangle outline.
    pub fn rect(bounds: Boundary) -> Self {
        Self::new()
            .move_to(Point::new(bounds.min_x(), bounds.min_y()))
            .line_to(Point::new(bounds.max_x(), bounds.min_y()))
            .line_to(Point::new(bounds.max_x(), bounds.max_y()))
            .line_to(Point::new(bounds.min_x(), bounds.max_y()))
            .close()
    }

    /// Closed rectangle with circular corners of the given radius.
    ///
    /// The radius is clamped to half the shorter side.
    pub fn rounded_rect(bounds: Boundary, radius: f32) -> Self {
        let r = radius
            .min(bounds.width() / 2.0)
            .min(bounds.height() / 2.0)
            .max(0.0);
        if r == 0.0 {
            return Self::rect(bounds);
        }
        let k = r * (1.0 - KAPPA);
        let (x0, y0, x1, y1) = (bounds.min_x(), bounds.min_y(), bounds.max_x(), bounds.max_y());
        Self::new()
            .move_to(Point::new(x0 + r, y0))
            .line_to(Point::new(x1 - r, y0))
            .cubic_to(
                Point::new(x1 - k, y0),
                Point::new(x1, y0 + k),
                Point::new(x1, y0 + r),
            )
            .line_to(Point::new(x1, y1 - r))
            .cubic_to(
                Point::new(x1, y1 - k),
                Point::new(x1 - k, y1),
                Point::new(x1 - r, y1),
            )
            .line_to(Point::new(x0 + r, y1))
            .cubic_to(
                Point::new(x0 + k, y1),
                Point::new(x0, y1 - k),
                Point::new(x0, y1 - r),
            )
            .line_to(Point::new(x0, y0 + r))
            .cubic_to(
                Point::new(x0, y0 + k),
                Point::new(x0 + k, y0),
                Point::new(x0 + r, y0),
            )
            .close()
    }

    /// Closed ellipse inscribed in `bounds`, built from four cubics.
    pub fn ellipse(bounds: Boundary) -> Self {
        let center = bounds.center();
        let (rx, ry) = (bounds.width() / 2.0, bounds.height() / 2.0);
        let (kx, ky) = (rx * KAPPA, ry * KAPPA);
        let (cx, cy) = (center.x(), center.y());
        Self::new()
            .move_to(Point::new(cx + rx, cy))
            .cubic_to(
                Point::new(cx + rx, cy + ky),
                Point::new(cx + kx, cy + ry),
                Point::new(cx, cy + ry),
            )
            .cubic_to(
                Point::new(cx - kx, cy + ry),
                Point::new(cx - rx, cy + ky),
                Point::new(cx - rx, cy),
            )
            .cubic_to(
                Point::new(cx - rx, cy - ky),
                Point::new(cx - kx, cy - ry),
                Point::new(cx, cy - ry),
            )
            .cubic_to(
                Point::new(cx + kx, cy - ry),
                Point::new(cx + rx, cy - ky),
                Point::new(cx + rx, cy),
            )
            .close()
    }

    /// Closed circle around `center`.
    pub fn circle(center: Point, radius: f32) -> Self {
        Self::ellipse(Boundary::new(
            center.x() - radius,
            center.y() - radius,
            radius * 2.0,
            radius * 2.0,
        ))
    }

    /// Closed polygon through the given points; empty for no points.
    pub fn polygon(points: &[Point]) -> Self {
        match Self::polyline(points) {
            path if path.is_empty() => path,
            path => path.close(),
        }
    }

    /// Open polyline through the given points; empty for no points.
    pub fn polyline(points: &[Point]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::new();
        };
        rest.iter()
            .fold(Self::new().move_to(*first), |path, point| path.line_to(*point))
    }

    /// Returns a copy moved by `offset`.
    pub fn translate(&self, offset: Point) -> Self {
        self.map_points(|point| point.add_point(offset))
    }

    /// Returns a copy with every point and control point passed through `f`.
    ///
    /// Only affine maps keep curve segments exact.
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            segments: self
                .segments
                .iter()
                .map(|segment| segment.map(&f))
                .collect(),
        }
    }

    /// SVG path data (`d` attribute) for this path.
    pub fn to_svg_data(&self) -> String {
        let mut data = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            data.push(match segment {
                PathSegment::MoveTo(p) => format!("M {} {}", p.x(), p.y()),
                PathSegment::LineTo(p) => format!("L {} {}", p.x(), p.y()),
                PathSegment::CubicTo(c1, c2, p) => format!(
                    "C {} {} {} {} {} {}",
                    c1.x(),
                    c1.y(),
                    c2.x(),
                    c2.y(),
                    p.x(),
                    p.y()
                ),
                PathSegment::Close => "Z".to_string(),
            });
        }
        data.join(" ")
    }

    /// Smallest boundary enclosing every point and control point.
    pub fn bounds(&self) -> Option<Boundary> {
        Boundary::enclosing(self.segments.iter().flat_map(|segment| match *segment {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => vec![p],
            PathSegment::CubicTo(c1, c2, p) => vec![c1, c2, p],
            PathSegment::Close => Vec::new(),
        }))
    }
}
