//! Incremental layout adjustments.
//!
//! These helpers keep a model tidy after an edit: restacking the member rows
//! of a class box, and re-routing a relationship after one of its ends moved.
//! They never touch items they cannot resolve.

use log::debug;

use crate::{
    direction::Direction,
    geometry::{Boundary, Point},
    hierarchy::vertically_sorted_children,
    model::{UMLElement, UMLModel},
};

/// Height of a class header without a stereotype line.
pub const HEADER_HEIGHT: f32 = 40.0;

/// Height of a class header with a stereotype line such as `«interface»`.
pub const ANNOTATED_HEADER_HEIGHT: f32 = 50.0;

/// Height given to member rows that have no bounds yet.
pub const MEMBER_HEIGHT: f32 = 30.0;

/// Header height of a class-like element.
pub fn header_height(element: &UMLElement) -> f32 {
    if element.kind().annotation_title().is_empty() {
        HEADER_HEIGHT
    } else {
        ANNOTATED_HEADER_HEIGHT
    }
}

/// Restacks the attribute and method rows of a class-like box.
///
/// Attributes come first, then methods, each group keeping its top-to-bottom
/// order. Rows span the box width and the box height is set to fit them.
/// Returns false if `id` is not a class-like element with bounds.
pub fn arrange_classifier(model: &mut UMLModel, id: &str) -> bool {
    let Some(parent) = model.element(id) else {
        return false;
    };
    let Some(bounds) = parent.bounds() else {
        return false;
    };
    if !parent.kind().is_classifier() {
        return false;
    }
    let header = header_height(parent);

    let members: Vec<(String, f32)> = {
        let sorted = vertically_sorted_children(model, id);
        let (methods, attributes): (Vec<&UMLElement>, Vec<&UMLElement>) = sorted
            .into_iter()
            .filter(|child| child.kind().is_compartment_member())
            .partition(|child| child.kind().is_method());
        attributes
            .into_iter()
            .chain(methods)
            .map(|child| {
                let height = child.bounds().map_or(MEMBER_HEIGHT, |b| b.height());
                (child.id().to_string(), height)
            })
            .collect()
    };

    let mut y = bounds.y() + header;
    for (member_id, height) in &members {
        if let Some(member) = model.element_mut(member_id) {
            member.set_bounds(Some(Boundary::new(bounds.x(), y, bounds.width(), *height)));
        }
        y += height;
    }

    if let Some(parent) = model.element_mut(id) {
        parent.set_bounds(Some(bounds.with_height(y - bounds.y())));
    }
    debug!(id, members = members.len(); "Classifier arranged");
    true
}

/// Facing sides for a relationship from `source` to `target`.
///
/// The dominant axis between the two centers decides: horizontally apart
/// boxes connect right-to-left, vertically apart ones bottom-to-top.
pub fn suggest_directions(source: Boundary, target: Boundary) -> (Direction, Direction) {
    let delta = target.center().sub_point(source.center());
    if delta.x().abs() >= delta.y().abs() {
        if delta.x() >= 0.0 {
            (Direction::Right, Direction::Left)
        } else {
            (Direction::Left, Direction::Right)
        }
    } else if delta.y() >= 0.0 {
        (Direction::Down, Direction::Up)
    } else {
        (Direction::Up, Direction::Down)
    }
}

/// Recomputes the bounds and path of a relationship from its endpoint ports.
///
/// Endpoints without a direction get one from [`suggest_directions`]. Ports
/// sharing an axis connect with a straight line, all others with a single
/// elbow. Returns false, leaving the relationship untouched, when the
/// relationship or either endpoint element (or its bounds) is missing.
pub fn reconnect(model: &mut UMLModel, relationship_id: &str) -> bool {
    let Some(relationship) = model.relationship(relationship_id) else {
        return false;
    };
    let element_bounds = |id: &str| model.element(id).and_then(UMLElement::bounds);
    let (Some(source_bounds), Some(target_bounds)) = (
        element_bounds(relationship.source().element()),
        element_bounds(relationship.target().element()),
    ) else {
        debug!(id = relationship_id; "Cannot reconnect relationship with unresolved endpoints");
        return false;
    };

    let (suggested_source, suggested_target) = suggest_directions(source_bounds, target_bounds);
    let source_direction = relationship.source().direction().unwrap_or(suggested_source);
    let target_direction = relationship.target().direction().unwrap_or(suggested_target);

    let start = source_direction.port_position(source_bounds);
    let end = target_direction.port_position(target_bounds);
    let points = if start.x() == end.x() || start.y() == end.y() {
        vec![start, end]
    } else if source_direction.side().is_horizontal() {
        vec![start, Point::new(end.x(), start.y()), end]
    } else {
        vec![start, Point::new(start.x(), end.y()), end]
    };

    let Some(bounds) = Boundary::enclosing(points.iter().copied()) else {
        return false;
    };
    let relative = points
        .iter()
        .map(|point| point.sub_point(bounds.origin()))
        .collect();

    let Some(relationship) = model.relationship_mut(relationship_id) else {
        return false;
    };
    relationship
        .source_mut()
        .set_direction(Some(source_direction));
    relationship
        .target_mut()
        .set_direction(Some(target_direction));
    relationship.set_geometry(bounds, relative);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::Size,
        model::{
            UMLDiagramType, UMLElementType, UMLRelationship, UMLRelationshipEndpoint,
            UMLRelationshipType,
        },
        path::absolute_path,
    };

    fn boxed(id: &str, kind: UMLElementType, bounds: Boundary) -> UMLElement {
        UMLElement::new(id, id, kind).with_bounds(bounds)
    }

    #[test]
    fn test_arrange_classifier_stacks_members() {
        let mut model = UMLModel::new(UMLDiagramType::ClassDiagram, Size::default());
        model
            .add_element(boxed("c", UMLElementType::Interface, Boundary::new(10.0, 10.0, 200.0, 500.0)))
            .unwrap();
        model
            .add_element(
                boxed("m", UMLElementType::ClassMethod, Boundary::new(0.0, 0.0, 50.0, 30.0))
                    .with_owner("c"),
            )
            .unwrap();
        model
            .add_element(
                UMLElement::new("a2", "a2", UMLElementType::ClassAttribute).with_owner("c"),
            )
            .unwrap();
        model
            .add_element(
                boxed("a1", UMLElementType::ClassAttribute, Boundary::new(0.0, -5.0, 50.0, 25.0))
                    .with_owner("c"),
            )
            .unwrap();

        assert!(arrange_classifier(&mut model, "c"));

        // Annotated header, then a1 (y=-5 sorts first), a2 (no bounds), m
        let bounds = |id: &str| model.element(id).unwrap().bounds().unwrap();
        assert_eq!(bounds("a1"), Boundary::new(10.0, 60.0, 200.0, 25.0));
        assert_eq!(bounds("a2"), Boundary::new(10.0, 85.0, 200.0, 30.0));
        assert_eq!(bounds("m"), Boundary::new(10.0, 115.0, 200.0, 30.0));
        assert_eq!(bounds("c"), Boundary::new(10.0, 10.0, 200.0, 135.0));
    }

    #[test]
    fn test_arrange_classifier_rejects_other_kinds() {
        let mut model = UMLModel::new(UMLDiagramType::ClassDiagram, Size::default());
        model
            .add_element(boxed("p", UMLElementType::Package, Boundary::new(0.0, 0.0, 10.0, 10.0)))
            .unwrap();
        model
            .add_element(UMLElement::new("c", "c", UMLElementType::Class))
            .unwrap();

        assert!(!arrange_classifier(&mut model, "p"));
        assert!(!arrange_classifier(&mut model, "c"));
        assert!(!arrange_classifier(&mut model, "missing"));
    }

    #[test]
    fn test_suggest_directions() {
        let origin = Boundary::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(
            suggest_directions(origin, origin.translate(Point::new(300.0, 50.0))),
            (Direction::Right, Direction::Left)
        );
        assert_eq!(
            suggest_directions(origin, origin.translate(Point::new(-300.0, 0.0))),
            (Direction::Left, Direction::Right)
        );
        assert_eq!(
            suggest_directions(origin, origin.translate(Point::new(10.0, 300.0))),
            (Direction::Down, Direction::Up)
        );
        assert_eq!(
            suggest_directions(origin, origin.translate(Point::new(0.0, -300.0))),
            (Direction::Up, Direction::Down)
        );
    }

    fn two_boxes(target: Boundary, source_dir: Option<Direction>) -> UMLModel {
        let mut model = UMLModel::new(UMLDiagramType::ClassDiagram, Size::default());
        model
            .add_element(boxed("a", UMLElementType::Class, Boundary::new(0.0, 0.0, 100.0, 100.0)))
            .unwrap();
        model
            .add_element(boxed("b", UMLElementType::Class, target))
            .unwrap();
        model
            .add_relationship(UMLRelationship::new(
                "r",
                UMLRelationshipType::ClassDependency,
                UMLRelationshipEndpoint::new("a", source_dir),
                UMLRelationshipEndpoint::new("b", None),
            ))
            .unwrap();
        model
    }

    #[test]
    fn test_reconnect_straight() {
        let mut model = two_boxes(Boundary::new(300.0, 0.0, 100.0, 100.0), None);
        assert!(reconnect(&mut model, "r"));

        let rel = model.relationship("r").unwrap();
        assert_eq!(
            absolute_path(rel).unwrap(),
            [Point::new(100.0, 50.0), Point::new(300.0, 50.0)]
        );
        assert_eq!(rel.bounds(), Some(Boundary::new(100.0, 50.0, 200.0, 0.0)));
        assert_eq!(rel.source().direction(), Some(Direction::Right));
        assert_eq!(rel.target().direction(), Some(Direction::Left));
    }

    #[test]
    fn test_reconnect_elbow() {
        let mut model = two_boxes(Boundary::new(300.0, 200.0, 100.0, 100.0), Some(Direction::Right));
        model
            .relationship_mut("r")
            .unwrap()
            .target_mut()
            .set_direction(Some(Direction::Up));
        assert!(reconnect(&mut model, "r"));

        let rel = model.relationship("r").unwrap();
        assert_eq!(
            absolute_path(rel).unwrap(),
            [
                Point::new(100.0, 50.0),
                Point::new(350.0, 50.0),
                Point::new(350.0, 200.0)
            ]
        );
        assert_eq!(rel.path()[0], Point::new(0.0, 0.0));
    }

    #[test]
    fn test_reconnect_missing_endpoint() {
        let mut model = two_boxes(Boundary::new(300.0, 0.0, 100.0, 100.0), None);
        model.remove_element("b");
        assert!(!reconnect(&mut model, "r"));
        assert!(!reconnect(&mut model, "missing"));

        let mut model = UMLModel::new(UMLDiagramType::ClassDiagram, Size::default());
        model
            .add_relationship(UMLRelationship::new(
                "r",
                UMLRelationshipType::ClassDependency,
                UMLRelationshipEndpoint::new("x", None),
                UMLRelationshipEndpoint::new("y", None),
            ))
            .unwrap();
        assert!(!reconnect(&mut model, "r"));
        assert!(model.relationship("r").unwrap().bounds().is_none());
    }
}
