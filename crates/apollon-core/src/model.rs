//! The Apollon diagram model.
//!
//! # Overview
//!
//! - [`UMLModel`] - A whole diagram: kind, canvas size, elements and relationships
//! - [`UMLElement`] - A positioned node (class, actor, attribute row, ...)
//! - [`UMLRelationship`] - An edge with a path and two endpoints
//! - [`types`] - The element, relationship and diagram kind taxonomies
//!
//! # Wire format
//!
//! The model reads and writes the Apollon JSON format. Element and
//! relationship collections are accepted either as objects keyed by id or as
//! arrays; they are always written as objects. Unknown fields are ignored
//! and unknown kind strings are preserved.
//!
//! ```
//! # use apollon_core::model::UMLModel;
//! let json = r#"{
//!     "version": "3.0.0",
//!     "type": "ClassDiagram",
//!     "size": { "width": 400, "height": 300 },
//!     "elements": {
//!         "c1": { "id": "c1", "name": "Person", "type": "Class", "owner": null,
//!                 "bounds": { "x": 0, "y": 0, "width": 200, "height": 100 } },
//!         "a1": { "id": "a1", "name": "+ name: String", "type": "ClassAttribute", "owner": "c1",
//!                 "bounds": { "x": 0, "y": 40, "width": 200, "height": 30 } }
//!     },
//!     "relationships": {}
//! }"#;
//!
//! let model = UMLModel::from_json(json).unwrap();
//! assert_eq!(model.element("c1").unwrap().children(), ["a1"]);
//! ```

mod element;
mod relationship;
pub mod types;

use indexmap::IndexMap;
use log::{debug, info};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub use element::UMLElement;
pub use relationship::{UMLRelationship, UMLRelationshipEndpoint};
pub use types::{ResizeMode, UMLDiagramType, UMLElementType, UMLRelationshipType};

use crate::{
    diagnostic::{DiagnosticSink, LogSink},
    geometry::{Boundary, Size},
    hierarchy,
};

/// Errors raised by model construction and editing.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The JSON document could not be decoded.
    #[error("invalid diagram JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An element or relationship with this id already exists.
    #[error("duplicate id `{0}`")]
    DuplicateId(String),
}

/// A complete diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UMLModel {
    #[serde(default = "default_version")]
    version: String,
    #[serde(rename = "type")]
    kind: UMLDiagramType,
    #[serde(default)]
    size: Size,
    #[serde(default, deserialize_with = "deserialize_collection")]
    elements: IndexMap<String, UMLElement>,
    #[serde(default, deserialize_with = "deserialize_collection")]
    relationships: IndexMap<String, UMLRelationship>,
}

fn default_version() -> String {
    "3.0.0".to_string()
}

impl UMLModel {
    /// Creates an empty model of the given kind.
    pub fn new(kind: UMLDiagramType, size: Size) -> Self {
        Self {
            version: default_version(),
            kind,
            size,
            elements: IndexMap::new(),
            relationships: IndexMap::new(),
        }
    }

    /// Decodes a model and resolves its element hierarchy.
    ///
    /// Hierarchy problems are logged as warnings; use
    /// [`UMLModel::resolve_hierarchy`] with another sink to collect them.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let mut model: UMLModel = serde_json::from_str(json)?;
        info!(
            diagram_type:% = model.kind,
            elements = model.elements.len(),
            relationships = model.relationships.len();
            "Model decoded"
        );
        model.resolve_hierarchy(&mut LogSink);
        Ok(model)
    }

    /// Encodes the model as compact JSON.
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encodes the model as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn kind(&self) -> &UMLDiagramType {
        &self.kind
    }

    /// Canvas extent recorded in the model.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Elements in declaration order.
    pub fn elements(&self) -> &IndexMap<String, UMLElement> {
        &self.elements
    }

    /// Relationships in declaration order.
    pub fn relationships(&self) -> &IndexMap<String, UMLRelationship> {
        &self.relationships
    }

    pub fn element(&self, id: &str) -> Option<&UMLElement> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut UMLElement> {
        self.elements.get_mut(id)
    }

    pub fn relationship(&self, id: &str) -> Option<&UMLRelationship> {
        self.relationships.get(id)
    }

    pub fn relationship_mut(&mut self, id: &str) -> Option<&mut UMLRelationship> {
        self.relationships.get_mut(id)
    }

    /// Rebuilds every element's children from the owner links.
    pub fn resolve_hierarchy(&mut self, sink: &mut dyn DiagnosticSink) {
        hierarchy::resolve_hierarchy(&mut self.elements, sink);
    }

    /// Appends an element and re-resolves the hierarchy.
    pub fn add_element(&mut self, element: UMLElement) -> Result<(), ModelError> {
        if self.elements.contains_key(element.id()) {
            return Err(ModelError::DuplicateId(element.id().to_string()));
        }
        debug!(id = element.id(); "Adding element");
        self.elements.insert(element.id().to_string(), element);
        self.resolve_hierarchy(&mut LogSink);
        Ok(())
    }

    /// Appends a relationship.
    pub fn add_relationship(&mut self, relationship: UMLRelationship) -> Result<(), ModelError> {
        if self.relationships.contains_key(relationship.id()) {
            return Err(ModelError::DuplicateId(relationship.id().to_string()));
        }
        debug!(id = relationship.id(); "Adding relationship");
        self.relationships
            .insert(relationship.id().to_string(), relationship);
        Ok(())
    }

    /// Removes an element together with everything it owns and every
    /// relationship attached to any removed element.
    ///
    /// Returns the removed elements, the requested one first. Declaration
    /// order of the remaining items is kept.
    pub fn remove_element(&mut self, id: &str) -> Vec<UMLElement> {
        if !self.elements.contains_key(id) {
            return Vec::new();
        }

        let mut doomed = vec![id.to_string()];
        doomed.extend(hierarchy::descendants(self, id));

        let removed: Vec<UMLElement> = doomed
            .iter()
            .filter_map(|id| self.elements.shift_remove(id))
            .collect();
        self.relationships
            .retain(|_, relationship| !doomed.iter().any(|id| relationship.touches(id)));

        debug!(id, removed = removed.len(); "Removed element");
        self.resolve_hierarchy(&mut LogSink);
        removed
    }

    /// Removes a relationship, keeping the order of the rest.
    pub fn remove_relationship(&mut self, id: &str) -> Option<UMLRelationship> {
        self.relationships.shift_remove(id)
    }

    /// Smallest boundary enclosing every element and relationship with geometry.
    pub fn content_bounds(&self) -> Option<Boundary> {
        self.elements
            .values()
            .filter_map(UMLElement::bounds)
            .chain(self.relationships.values().filter_map(UMLRelationship::bounds))
            .reduce(|acc, bounds| acc.merge(&bounds))
    }
}

trait Identified {
    fn identifier(&self) -> &str;
}

impl Identified for UMLElement {
    fn identifier(&self) -> &str {
        self.id()
    }
}

impl Identified for UMLRelationship {
    fn identifier(&self) -> &str {
        self.id()
    }
}

/// Either an id-keyed object or an array of items.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdCollection<T> {
    Map(IndexMap<String, T>),
    List(Vec<T>),
}

/// Reads a collection in either shape and keys it by each item's own id.
///
/// Duplicate ids keep the first position and the last value.
fn deserialize_collection<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Identified,
{
    let items: Vec<T> = match IdCollection::<T>::deserialize(deserializer)? {
        IdCollection::Map(map) => map.into_values().collect(),
        IdCollection::List(list) => list,
    };
    Ok(items
        .into_iter()
        .map(|item| (item.identifier().to_string(), item))
        .collect())
}
