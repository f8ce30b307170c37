use serde::{Deserialize, Serialize};

use crate::{
    direction::MessageDirection,
    geometry::Boundary,
    model::types::UMLElementType,
};

/// A positioned diagram node.
///
/// Elements are plain values addressed by id. The `owner` id is the only
/// persisted link between them; [`children`](UMLElement::children) is
/// derived from it by [`resolve_hierarchy`](crate::hierarchy::resolve_hierarchy)
/// and never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UMLElement {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    kind: UMLElementType,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    bounds: Option<Boundary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    direction: Option<MessageDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fill_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stroke_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_color: Option<String>,
    #[serde(skip)]
    children: Vec<String>,
}

impl UMLElement {
    /// Creates an element without owner, bounds or styling.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: UMLElementType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            owner: None,
            bounds: None,
            direction: None,
            fill_color: None,
            stroke_color: None,
            text_color: None,
            children: Vec::new(),
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_bounds(mut self, bounds: Boundary) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_direction(mut self, direction: MessageDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_fill_color(mut self, color: impl Into<String>) -> Self {
        self.fill_color = Some(color.into());
        self
    }

    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = Some(color.into());
        self
    }

    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &UMLElementType {
        &self.kind
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Position and size, `None` when the element has no geometry.
    pub fn bounds(&self) -> Option<Boundary> {
        self.bounds
    }

    /// Travel direction, only set on communication messages.
    pub fn direction(&self) -> Option<MessageDirection> {
        self.direction
    }

    pub fn fill_color(&self) -> Option<&str> {
        self.fill_color.as_deref()
    }

    pub fn stroke_color(&self) -> Option<&str> {
        self.stroke_color.as_deref()
    }

    pub fn text_color(&self) -> Option<&str> {
        self.text_color.as_deref()
    }

    /// Ids of the elements owned by this one, as last resolved.
    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_owner(&mut self, owner: Option<String>) {
        self.owner = owner;
    }

    pub fn set_bounds(&mut self, bounds: Option<Boundary>) {
        self.bounds = bounds;
    }

    pub(crate) fn clear_children(&mut self) {
        self.children.clear();
    }

    pub(crate) fn push_child(&mut self, child: String) {
        self.children.push(child);
    }
}
