use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    direction::{Direction, MessageDirection},
    geometry::{Boundary, Point},
    model::{
        element::UMLElement,
        types::{UMLElementType, UMLRelationshipType},
    },
};

/// One end of a relationship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UMLRelationshipEndpoint {
    element: String,
    #[serde(default)]
    direction: Option<Direction>,
    #[serde(default)]
    multiplicity: String,
    #[serde(default)]
    role: String,
}

impl UMLRelationshipEndpoint {
    pub fn new(element: impl Into<String>, direction: Option<Direction>) -> Self {
        Self {
            element: element.into(),
            direction,
            ..Self::default()
        }
    }

    pub fn with_multiplicity(mut self, multiplicity: impl Into<String>) -> Self {
        self.multiplicity = multiplicity.into();
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Id of the attached element.
    pub fn element(&self) -> &str {
        &self.element
    }

    /// Port the endpoint attaches to, if recorded.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn multiplicity(&self) -> &str {
        &self.multiplicity
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn set_direction(&mut self, direction: Option<Direction>) {
        self.direction = direction;
    }
}

/// An edge between two elements.
///
/// Path points are stored relative to the origin of
/// [`bounds`](UMLRelationship::bounds); see
/// [`absolute_path`](crate::path::absolute_path).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UMLRelationship {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    kind: UMLRelationshipType,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    bounds: Option<Boundary>,
    #[serde(default)]
    path: Vec<Point>,
    source: UMLRelationshipEndpoint,
    target: UMLRelationshipEndpoint,
    #[serde(
        default,
        deserialize_with = "deserialize_messages",
        skip_serializing_if = "Vec::is_empty"
    )]
    messages: Vec<UMLElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stroke_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_color: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    is_manually_layouted: bool,
}

impl UMLRelationship {
    /// Creates a relationship without geometry.
    pub fn new(
        id: impl Into<String>,
        kind: UMLRelationshipType,
        source: UMLRelationshipEndpoint,
        target: UMLRelationshipEndpoint,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            kind,
            owner: None,
            bounds: None,
            path: Vec::new(),
            source,
            target,
            messages: Vec::new(),
            stroke_color: None,
            text_color: None,
            is_manually_layouted: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets bounds and the relative path in one step.
    pub fn with_geometry(mut self, bounds: Boundary, path: Vec<Point>) -> Self {
        self.bounds = Some(bounds);
        self.path = path;
        self
    }

    pub fn with_message(mut self, message: UMLElement) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = Some(color.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &UMLRelationshipType {
        &self.kind
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn bounds(&self) -> Option<Boundary> {
        self.bounds
    }

    /// Path points relative to the bounds origin.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn source(&self) -> &UMLRelationshipEndpoint {
        &self.source
    }

    pub fn target(&self) -> &UMLRelationshipEndpoint {
        &self.target
    }

    pub fn source_mut(&mut self) -> &mut UMLRelationshipEndpoint {
        &mut self.source
    }

    pub fn target_mut(&mut self) -> &mut UMLRelationshipEndpoint {
        &mut self.target
    }

    /// Messages attached to a communication link.
    pub fn messages(&self) -> &[UMLElement] {
        &self.messages
    }

    pub fn stroke_color(&self) -> Option<&str> {
        self.stroke_color.as_deref()
    }

    pub fn text_color(&self) -> Option<&str> {
        self.text_color.as_deref()
    }

    /// True once the user routed the path by hand; automatic layout keeps it.
    pub fn is_manually_layouted(&self) -> bool {
        self.is_manually_layouted
    }

    pub fn set_geometry(&mut self, bounds: Boundary, path: Vec<Point>) {
        self.bounds = Some(bounds);
        self.path = path;
    }

    pub fn set_manually_layouted(&mut self, value: bool) {
        self.is_manually_layouted = value;
    }

    /// Returns true if either end attaches to `element_id`.
    pub fn touches(&self, element_id: &str) -> bool {
        self.source.element == element_id || self.target.element == element_id
    }
}

/// Wire shape of a message; the `type` field is optional on input.
#[derive(Deserialize)]
struct RawMessage {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default, rename = "type")]
    kind: Option<UMLElementType>,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    bounds: Option<Boundary>,
    #[serde(default)]
    direction: Option<MessageDirection>,
}

fn deserialize_messages<'de, D>(deserializer: D) -> Result<Vec<UMLElement>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<RawMessage>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|message| {
            let kind = message
                .kind
                .unwrap_or(UMLElementType::CommunicationLinkMessage);
            let mut element = UMLElement::new(message.id, message.name, kind);
            element.set_owner(message.owner);
            element.set_bounds(message.bounds);
            if let Some(direction) = message.direction {
                element = element.with_direction(direction);
            }
            element
        })
        .collect())
}
