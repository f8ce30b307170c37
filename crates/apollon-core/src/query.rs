//! Editor-facing lookups over a resolved model.

use crate::{
    geometry::Point,
    hierarchy::depth,
    model::{UMLElement, UMLModel},
    path,
};

/// What a hit test found.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HitTarget {
    Element(String),
    Relationship(String),
}

impl HitTarget {
    pub fn id(&self) -> &str {
        match self {
            HitTarget::Element(id) | HitTarget::Relationship(id) => id,
        }
    }
}

/// The order elements are painted in.
///
/// Containers come first, shallow before deep and then in declaration order;
/// everything else follows in declaration order. Renderers and
/// [`hit_test`] share this order so the topmost painted element wins a click.
pub fn draw_order(model: &UMLModel) -> Vec<&UMLElement> {
    let mut containers: Vec<(usize, usize, &UMLElement)> = model
        .elements()
        .values()
        .enumerate()
        .filter(|(_, element)| element.kind().is_container())
        .map(|(index, element)| (depth(model, element.id()), index, element))
        .collect();
    containers.sort_by_key(|&(depth, index, _)| (depth, index));

    containers
        .into_iter()
        .map(|(_, _, element)| element)
        .chain(
            model
                .elements()
                .values()
                .filter(|element| !element.kind().is_container()),
        )
        .collect()
}

/// Finds the item under `point`.
///
/// Relationships are checked first, latest declared first. Elements are
/// then checked in reverse [`draw_order`]. A hit on an element that cannot
/// be selected on its own (an attribute row, a message) resolves to its
/// owner; without an owner the search continues below it.
pub fn hit_test(model: &UMLModel, point: Point) -> Option<HitTarget> {
    if let Some(relationship) = model
        .relationships()
        .values()
        .rev()
        .find(|relationship| path::contains_point(relationship, point))
    {
        return Some(HitTarget::Relationship(relationship.id().to_string()));
    }

    for element in draw_order(model).into_iter().rev() {
        let Some(bounds) = element.bounds() else {
            continue;
        };
        if !bounds.contains_point(point) {
            continue;
        }
        if let Some(selectable) = selectable_ancestor(model, element) {
            return Some(HitTarget::Element(selectable.id().to_string()));
        }
    }
    None
}

/// The element itself if selectable, else the closest selectable owner.
fn selectable_ancestor<'a>(model: &'a UMLModel, element: &'a UMLElement) -> Option<&'a UMLElement> {
    let mut current = element;
    for _ in 0..=model.elements().len() {
        if current.kind().is_selectable() {
            return Some(current);
        }
        current = model.element(current.owner()?)?;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        direction::Direction,
        geometry::{Boundary, Size},
        model::{
            UMLDiagramType, UMLElementType, UMLRelationship, UMLRelationshipEndpoint,
            UMLRelationshipType,
        },
    };

    fn class_model() -> UMLModel {
        let mut model = UMLModel::new(UMLDiagramType::ClassDiagram, Size::new(800.0, 600.0));
        model
            .add_element(
                UMLElement::new("pkg", "pkg", UMLElementType::Package)
                    .with_bounds(Boundary::new(0.0, 0.0, 400.0, 300.0)),
            )
            .unwrap();
        model
            .add_element(
                UMLElement::new("attr", "+ id: int", UMLElementType::ClassAttribute)
                    .with_owner("cls")
                    .with_bounds(Boundary::new(20.0, 60.0, 200.0, 30.0)),
            )
            .unwrap();
        model
            .add_element(
                UMLElement::new("cls", "Person", UMLElementType::Class)
                    .with_owner("pkg")
                    .with_bounds(Boundary::new(20.0, 20.0, 200.0, 100.0)),
            )
            .unwrap();
        model
            .add_element(
                UMLElement::new("other", "Other", UMLElementType::Class)
                    .with_bounds(Boundary::new(500.0, 20.0, 200.0, 100.0)),
            )
            .unwrap();
        model
            .add_relationship(
                UMLRelationship::new(
                    "rel",
                    UMLRelationshipType::ClassBidirectional,
                    UMLRelationshipEndpoint::new("cls", Some(Direction::Right)),
                    UMLRelationshipEndpoint::new("other", Some(Direction::Left)),
                )
                .with_geometry(
                    Boundary::new(220.0, 70.0, 280.0, 0.0),
                    vec![Point::new(0.0, 0.0), Point::new(280.0, 0.0)],
                ),
            )
            .unwrap();
        model
    }

    #[test]
    fn test_draw_order_containers_first_by_depth() {
        let model = class_model();
        let order: Vec<_> = draw_order(&model).into_iter().map(UMLElement::id).collect();
        assert_eq!(order, ["pkg", "other", "cls", "attr"]);
    }

    #[test]
    fn test_hit_attribute_resolves_to_class() {
        let model = class_model();
        assert_eq!(
            hit_test(&model, Point::new(50.0, 75.0)),
            Some(HitTarget::Element("cls".to_string()))
        );
    }

    #[test]
    fn test_hit_prefers_inner_element() {
        let model = class_model();
        assert_eq!(
            hit_test(&model, Point::new(100.0, 30.0)),
            Some(HitTarget::Element("cls".to_string()))
        );
        assert_eq!(
            hit_test(&model, Point::new(300.0, 250.0)),
            Some(HitTarget::Element("pkg".to_string()))
        );
    }

    #[test]
    fn test_hit_relationship_first() {
        let model = class_model();
        let hit = hit_test(&model, Point::new(350.0, 72.0)).unwrap();
        assert_eq!(hit, HitTarget::Relationship("rel".to_string()));
        assert_eq!(hit.id(), "rel");
    }

    #[test]
    fn test_hit_nothing() {
        let model = class_model();
        assert_eq!(hit_test(&model, Point::new(750.0, 550.0)), None);
        // Edges are not inside
        assert_eq!(hit_test(&model, Point::new(0.0, 150.0)), None);
    }

    #[test]
    fn test_ownerless_member_is_skipped() {
        let mut model = UMLModel::new(UMLDiagramType::ClassDiagram, Size::default());
        model
            .add_element(
                UMLElement::new("below", "Below", UMLElementType::Class)
                    .with_bounds(Boundary::new(0.0, 0.0, 100.0, 100.0)),
            )
            .unwrap();
        model
            .add_element(
                UMLElement::new("loose", "x", UMLElementType::ClassMethod)
                    .with_bounds(Boundary::new(10.0, 10.0, 50.0, 20.0)),
            )
            .unwrap();

        assert_eq!(
            hit_test(&model, Point::new(20.0, 20.0)),
            Some(HitTarget::Element("below".to_string()))
        );
    }
}
