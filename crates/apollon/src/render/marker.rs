//! Relationship end glyphs.
//!
//! Every glyph is an outline in a 16×16 box pointing down with its tip at
//! `(8, 16)`. [`draw_marker`] rotates it with
//! [`arrowhead_transform`](apollon_core::path::arrowhead_transform) so the
//! tip lands on the endpoint and the glyph points into the element.

use apollon_core::{
    color::Color,
    direction::Direction,
    draw::{Canvas, Path, StrokeDefinition, StrokeStyle},
    geometry::Point,
    path::arrowhead_transform,
};

/// Quarter-circle control point factor.
const KAPPA: f32 = 0.552_284_8;

/// The glyph drawn at a relationship end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    None,
    /// Two open strokes meeting at the tip
    Arrow,
    /// Closed triangle filled with the background
    Triangle,
    /// Closed rhombus filled with the background
    Diamond,
    /// Closed rhombus filled with the stroke color
    FilledDiamond,
    /// Open half circle around the endpoint, for required interfaces
    HalfCircle,
}

impl Marker {
    /// Outline in unrotated glyph coordinates.
    pub fn outline(self) -> Path {
        let p = Point::new;
        match self {
            Marker::None => Path::new(),
            Marker::Arrow => Path::polyline(&[p(0.0, 0.0), p(8.0, 16.0), p(16.0, 0.0)]),
            Marker::Triangle => Path::polygon(&[p(0.0, 0.0), p(8.0, 16.0), p(16.0, 0.0)]),
            Marker::Diamond | Marker::FilledDiamond => Path::polygon(&[
                p(8.0, 0.0),
                p(16.0, 8.0),
                p(8.0, 16.0),
                p(0.0, 8.0),
            ]),
            Marker::HalfCircle => {
                let k = 8.0 * KAPPA;
                Path::new()
                    .move_to(p(0.0, 16.0))
                    .cubic_to(p(0.0, 16.0 - k), p(8.0 - k, 8.0), p(8.0, 8.0))
                    .cubic_to(p(8.0 + k, 8.0), p(16.0, 16.0 - k), p(16.0, 16.0))
            }
        }
    }

    fn is_closed(self) -> bool {
        matches!(
            self,
            Marker::Triangle | Marker::Diamond | Marker::FilledDiamond
        )
    }
}

/// Draws `marker` at `endpoint`, attached to an element side at `direction`.
///
/// Closed glyphs are filled first: with the stroke color for
/// [`Marker::FilledDiamond`], with `background` otherwise. The outline is
/// always solid, even on dashed relationships.
pub fn draw_marker(
    canvas: &mut dyn Canvas,
    marker: Marker,
    endpoint: Point,
    direction: Direction,
    stroke: &StrokeDefinition,
    background: Color,
) {
    if marker == Marker::None {
        return;
    }
    let transform = arrowhead_transform(direction);
    let outline = marker
        .outline()
        .map_points(|point| transform.apply(point, endpoint));

    if marker.is_closed() {
        let fill = if marker == Marker::FilledDiamond {
            stroke.color()
        } else {
            background
        };
        canvas.fill_path(&outline, fill);
    }
    canvas.stroke_path(&outline, &stroke.clone().with_style(StrokeStyle::Solid));
}

#[cfg(test)]
mod tests {
    use apollon_core::draw::{DrawCommand, PathSegment, RecordingCanvas};

    use super::*;

    fn points(path: &Path) -> Vec<Point> {
        path.segments()
            .iter()
            .filter_map(|segment| match *segment {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_arrow_tip_lands_on_endpoint() {
        let endpoint = Point::new(100.0, 50.0);
        for direction in Direction::ALL {
            let mut canvas = RecordingCanvas::new();
            draw_marker(
                &mut canvas,
                Marker::Arrow,
                endpoint,
                direction,
                &StrokeDefinition::default(),
                Color::default(),
            );
            let DrawCommand::Stroke { path, .. } = &canvas.commands()[0] else {
                panic!("expected a stroke");
            };
            assert_eq!(points(path)[1], endpoint, "{direction}");
        }
    }

    #[test]
    fn test_glyph_points_into_element() {
        // Attached at the left side: the glyph body lies left of the tip
        let endpoint = Point::new(100.0, 50.0);
        let transform = arrowhead_transform(Direction::Left);
        let wing = transform.apply(Point::new(0.0, 0.0), endpoint);
        assert_eq!(wing, Point::new(84.0, 58.0));

        // Attached at the top: the body lies above
        let transform = arrowhead_transform(Direction::Up);
        assert_eq!(
            transform.apply(Point::new(16.0, 0.0), endpoint),
            Point::new(108.0, 34.0)
        );
    }

    #[test]
    fn test_fills() {
        let stroke = StrokeDefinition::dashed(Color::new("red").unwrap(), 1.0);
        let background = Color::new("white").unwrap();
        let draw = |marker| {
            let mut canvas = RecordingCanvas::new();
            draw_marker(&mut canvas, marker, Point::default(), Direction::Up, &stroke, background);
            canvas
        };

        let canvas = draw(Marker::FilledDiamond);
        assert!(matches!(
            &canvas.commands()[0],
            DrawCommand::Fill { color, .. } if *color == stroke.color()
        ));
        assert!(matches!(
            &canvas.commands()[1],
            DrawCommand::Stroke { stroke, .. } if *stroke.style() == StrokeStyle::Solid
        ));

        let canvas = draw(Marker::Triangle);
        assert!(matches!(
            &canvas.commands()[0],
            DrawCommand::Fill { color, .. } if *color == background
        ));

        assert_eq!(draw(Marker::Arrow).fill_count(), 0);
        assert_eq!(draw(Marker::HalfCircle).fill_count(), 0);
        assert!(draw(Marker::None).is_empty());
    }
}
