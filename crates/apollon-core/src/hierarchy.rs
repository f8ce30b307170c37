//! Parent/child inference from owner links.
//!
//! Elements only persist their `owner` id. This module derives the inverse
//! relation (each element's children) and answers structural questions about
//! the resulting forest.
//!
//! # Resolution order
//!
//! [`resolve_hierarchy`] walks the elements from the last declared to the
//! first and, for each one, claims matching candidates from the back of the
//! pool. Children therefore end up in reverse declaration order. Which parent
//! a child lands in does not depend on the walk, since ids are unique.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::trace;
use petgraph::{algo::tarjan_scc, graph::DiGraph};

use crate::{
    diagnostic::{Diagnostic, DiagnosticSink},
    model::{UMLElement, UMLModel},
};

/// Rebuilds every element's `children` list from the owner links.
///
/// Every call is a full rebuild. Elements whose owner id does not exist are
/// left unattached and reported as warnings.
pub fn resolve_hierarchy(
    elements: &mut IndexMap<String, UMLElement>,
    sink: &mut dyn DiagnosticSink,
) {
    for element in elements.values_mut() {
        element.clear_children();
    }

    let mut pool: Vec<(String, String)> = elements
        .values()
        .filter_map(|element| {
            element
                .owner()
                .map(|owner| (element.id().to_string(), owner.to_string()))
        })
        .collect();

    for index in (0..elements.len()).rev() {
        let Some((id, element)) = elements.get_index_mut(index) else {
            continue;
        };
        let mut candidate = pool.len();
        while candidate > 0 {
            candidate -= 1;
            if pool[candidate].1 == *id {
                let (child, _) = pool.remove(candidate);
                element.push_child(child);
            }
        }
    }

    for (child, owner) in pool {
        sink.report(
            Diagnostic::warning(format!("owner `{owner}` does not exist")).with_subject(child),
        );
    }
    trace!(elements = elements.len(); "Hierarchy resolved");
}

/// Children of `id` sorted top to bottom by their `y` coordinate.
///
/// Missing bounds sort as `y = 0`. The sort is stable: children at equal
/// heights keep their resolved order. Unknown ids yield an empty list.
pub fn vertically_sorted_children<'a>(model: &'a UMLModel, id: &str) -> Vec<&'a UMLElement> {
    let Some(parent) = model.element(id) else {
        return Vec::new();
    };
    let mut children: Vec<&UMLElement> = parent
        .children()
        .iter()
        .filter_map(|child| model.element(child))
        .collect();
    children.sort_by(|a, b| top_of(a).total_cmp(&top_of(b)));
    children
}

fn top_of(element: &UMLElement) -> f32 {
    element.bounds().map_or(0.0, |bounds| bounds.y())
}

/// Number of owner hops from `id` to a root element.
///
/// Roots have depth 0. The walk stops at a dangling owner and never loops,
/// even on an owner cycle.
pub fn depth(model: &UMLModel, id: &str) -> usize {
    let mut depth = 0;
    let mut current = model.element(id).and_then(UMLElement::owner);
    while let Some(owner) = current {
        let Some(parent) = model.element(owner) else {
            break;
        };
        depth += 1;
        if depth > model.elements().len() {
            break;
        }
        current = parent.owner();
    }
    depth
}

/// Ids of every element transitively owned by `id`, parents before children.
pub fn descendants(model: &UMLModel, id: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut stack: Vec<&str> = vec![id];
    while let Some(current) = stack.pop() {
        let Some(element) = model.element(current) else {
            continue;
        };
        for child in element.children() {
            if child != id && !result.contains(child) {
                result.push(child.clone());
                stack.push(child);
            }
        }
    }
    result
}

/// Checks the owner links of a model for cycles.
///
/// Reports an error for every owner cycle and returns true when there are
/// none. Dangling owners are skipped here; [`resolve_hierarchy`] warns about
/// them.
pub fn validate_ownership(model: &UMLModel, sink: &mut dyn DiagnosticSink) -> bool {
    let mut graph = DiGraph::<&str, ()>::new();
    let nodes: HashMap<&str, _> = model
        .elements()
        .keys()
        .map(|id| (id.as_str(), graph.add_node(id.as_str())))
        .collect();

    for element in model.elements().values() {
        let Some(owner) = element.owner() else {
            continue;
        };
        if let (Some(&parent), Some(&child)) = (nodes.get(owner), nodes.get(element.id())) {
            graph.add_edge(parent, child, ());
        }
    }

    let mut valid = true;
    for component in tarjan_scc(&graph) {
        let is_cycle = component.len() > 1
            || component
                .first()
                .is_some_and(|&node| graph.contains_edge(node, node));
        if !is_cycle {
            continue;
        }
        valid = false;
        let mut members: Vec<&str> = component.iter().map(|&node| graph[node]).collect();
        members.sort_unstable();
        sink.report(
            Diagnostic::error(format!("owner cycle between {}", members.join(", ")))
                .with_subject(members[0]),
        );
    }
    valid
}
