//! Diagram, element and relationship type taxonomies.
//!
//! The three kind enums carry the exact wire strings of the Apollon JSON
//! format. Strings this crate does not know are kept in an `Unknown`
//! variant and written back unchanged, so a model produced by a newer
//! editor survives a load/save cycle.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Declares a wire-string enum whose variant names are its wire strings,
/// plus an `Unknown(String)` fallback.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$variant_meta])* $variant,)+
            /// Unrecognized kind, wire string preserved verbatim.
            Unknown(String),
        }

        impl $name {
            /// Returns the wire string of this kind.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                    Self::Unknown(raw) => raw,
                }
            }

            /// Returns true for the `Unknown` fallback.
            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $(stringify!($variant) => Self::$variant,)+
                    _ => Self::Unknown(raw),
                }
            }
        }

        impl From<$name> for String {
            fn from(kind: $name) -> Self {
                match kind {
                    $name::Unknown(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s.to_string()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// The kind of a whole diagram.
    pub enum UMLDiagramType {
        ClassDiagram,
        ObjectDiagram,
        ActivityDiagram,
        UseCaseDiagram,
        CommunicationDiagram,
        ComponentDiagram,
        DeploymentDiagram,
        PetriNet,
        ReachabilityGraph,
        SyntaxTree,
        Flowchart,
    }
}

wire_enum! {
    /// The kind of a diagram element.
    pub enum UMLElementType {
        Package,
        Class,
        AbstractClass,
        Interface,
        Enumeration,
        ClassAttribute,
        ClassMethod,
        ObjectName,
        ObjectAttribute,
        ObjectMethod,
        Activity,
        ActivityActionNode,
        ActivityFinalNode,
        ActivityForkNode,
        ActivityForkNodeHorizontal,
        ActivityInitialNode,
        ActivityMergeNode,
        ActivityObjectNode,
        UseCase,
        UseCaseActor,
        UseCaseSystem,
        CommunicationLinkMessage,
        Component,
        ComponentInterface,
        Subsystem,
        DeploymentNode,
        DeploymentComponent,
        DeploymentArtifact,
        DeploymentInterface,
        PetriNetPlace,
        PetriNetTransition,
        ReachabilityGraphMarking,
        SyntaxTreeTerminal,
        SyntaxTreeNonterminal,
        FlowchartTerminal,
        FlowchartProcess,
        FlowchartDecision,
        FlowchartInputOutput,
        FlowchartFunctionCall,
    }
}

wire_enum! {
    /// The kind of a relationship.
    pub enum UMLRelationshipType {
        ClassBidirectional,
        ClassUnidirectional,
        ClassInheritance,
        ClassRealization,
        ClassDependency,
        ClassAggregation,
        ClassComposition,
        ObjectLink,
        ActivityControlFlow,
        UseCaseAssociation,
        UseCaseGeneralization,
        UseCaseInclude,
        UseCaseExtend,
        CommunicationLink,
        ComponentDependency,
        ComponentInterfaceProvided,
        ComponentInterfaceRequired,
        DeploymentAssociation,
        DeploymentDependency,
        DeploymentInterfaceProvided,
        DeploymentInterfaceRequired,
        PetriNetArc,
        ReachabilityGraphArc,
        SyntaxTreeLink,
        FlowchartFlowline,
    }
}

impl Default for UMLDiagramType {
    fn default() -> Self {
        Self::ClassDiagram
    }
}

impl UMLDiagramType {
    /// Returns true if this crate can render diagrams of this kind.
    pub fn is_supported(&self) -> bool {
        matches!(
            self,
            Self::ClassDiagram
                | Self::ObjectDiagram
                | Self::ActivityDiagram
                | Self::UseCaseDiagram
                | Self::CommunicationDiagram
                | Self::ComponentDiagram
        )
    }

    /// Element kinds offered by this diagram kind, in palette order.
    pub fn element_types(&self) -> Vec<UMLElementType> {
        use UMLElementType as E;
        match self {
            Self::ClassDiagram => vec![
                E::Package,
                E::Class,
                E::AbstractClass,
                E::Interface,
                E::Enumeration,
                E::ClassAttribute,
                E::ClassMethod,
            ],
            Self::ObjectDiagram | Self::CommunicationDiagram => {
                vec![E::ObjectName, E::ObjectAttribute, E::ObjectMethod]
            }
            Self::ActivityDiagram => vec![
                E::Activity,
                E::ActivityInitialNode,
                E::ActivityFinalNode,
                E::ActivityActionNode,
                E::ActivityObjectNode,
                E::ActivityMergeNode,
                E::ActivityForkNode,
                E::ActivityForkNodeHorizontal,
            ],
            Self::UseCaseDiagram => vec![E::UseCase, E::UseCaseActor, E::UseCaseSystem],
            Self::ComponentDiagram => vec![E::Component, E::Subsystem, E::ComponentInterface],
            Self::DeploymentDiagram => vec![
                E::DeploymentNode,
                E::DeploymentComponent,
                E::DeploymentArtifact,
                E::DeploymentInterface,
            ],
            Self::PetriNet => vec![E::PetriNetPlace, E::PetriNetTransition],
            Self::ReachabilityGraph => vec![E::ReachabilityGraphMarking],
            Self::SyntaxTree => vec![E::SyntaxTreeTerminal, E::SyntaxTreeNonterminal],
            Self::Flowchart => vec![
                E::FlowchartTerminal,
                E::FlowchartProcess,
                E::FlowchartDecision,
                E::FlowchartInputOutput,
                E::FlowchartFunctionCall,
            ],
            Self::Unknown(_) => Vec::new(),
        }
    }

    /// Relationship kinds offered by this diagram kind. The first entry is
    /// the default kind for newly drawn relationships.
    pub fn relationship_types(&self) -> Vec<UMLRelationshipType> {
        use UMLRelationshipType as R;
        match self {
            Self::ClassDiagram => vec![
                R::ClassBidirectional,
                R::ClassUnidirectional,
                R::ClassInheritance,
                R::ClassRealization,
                R::ClassDependency,
                R::ClassAggregation,
                R::ClassComposition,
            ],
            Self::ObjectDiagram => vec![R::ObjectLink],
            Self::ActivityDiagram => vec![R::ActivityControlFlow],
            Self::UseCaseDiagram => vec![
                R::UseCaseAssociation,
                R::UseCaseGeneralization,
                R::UseCaseInclude,
                R::UseCaseExtend,
            ],
            Self::CommunicationDiagram => vec![R::CommunicationLink],
            Self::ComponentDiagram => vec![
                R::ComponentDependency,
                R::ComponentInterfaceProvided,
                R::ComponentInterfaceRequired,
            ],
            Self::DeploymentDiagram => vec![
                R::DeploymentAssociation,
                R::DeploymentDependency,
                R::DeploymentInterfaceProvided,
                R::DeploymentInterfaceRequired,
            ],
            Self::PetriNet => vec![R::PetriNetArc],
            Self::ReachabilityGraph => vec![R::ReachabilityGraphArc],
            Self::SyntaxTree => vec![R::SyntaxTreeLink],
            Self::Flowchart => vec![R::FlowchartFlowline],
            Self::Unknown(_) => Vec::new(),
        }
    }

    /// The relationship kind a newly drawn edge gets, if any.
    pub fn default_relationship_type(&self) -> Option<UMLRelationshipType> {
        self.relationship_types().into_iter().next()
    }
}

/// Which dimensions of an element the user may resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeMode {
    WidthAndHeight,
    Width,
    Height,
    None,
}

impl ResizeMode {
    pub fn can_resize_width(self) -> bool {
        matches!(self, ResizeMode::WidthAndHeight | ResizeMode::Width)
    }

    pub fn can_resize_height(self) -> bool {
        matches!(self, ResizeMode::WidthAndHeight | ResizeMode::Height)
    }
}

impl UMLElementType {
    /// Stereotype line shown above the name, empty when the kind has none.
    pub fn annotation_title(&self) -> &'static str {
        match self {
            Self::AbstractClass => "«abstract»",
            Self::Interface => "«interface»",
            Self::Enumeration => "«enumeration»",
            Self::Subsystem => "«subsystem»",
            Self::Component | Self::DeploymentComponent => "«component»",
            Self::DeploymentArtifact => "«artifact»",
            _ => "",
        }
    }

    /// Returns false for kinds whose clicks resolve to their owner.
    pub fn is_selectable(&self) -> bool {
        !(self.is_compartment_member() || matches!(self, Self::CommunicationLinkMessage))
    }

    /// Returns true for kinds that can own other elements.
    ///
    /// Containers are drawn before all other elements so their contents
    /// end up on top.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Package
                | Self::Class
                | Self::AbstractClass
                | Self::Interface
                | Self::Enumeration
                | Self::ObjectName
                | Self::Activity
                | Self::UseCaseSystem
                | Self::Component
                | Self::Subsystem
                | Self::DeploymentNode
                | Self::DeploymentComponent
        )
    }

    /// Returns true for class-like boxes with an attribute/method compartment.
    pub fn is_classifier(&self) -> bool {
        matches!(
            self,
            Self::Class | Self::AbstractClass | Self::Interface | Self::Enumeration | Self::ObjectName
        )
    }

    /// Returns true for attribute and method rows.
    pub fn is_compartment_member(&self) -> bool {
        matches!(
            self,
            Self::ClassAttribute
                | Self::ClassMethod
                | Self::ObjectAttribute
                | Self::ObjectMethod
        )
    }

    /// Returns true for method rows.
    pub fn is_method(&self) -> bool {
        matches!(self, Self::ClassMethod | Self::ObjectMethod)
    }

    pub fn resize_mode(&self) -> ResizeMode {
        match self {
            Self::Class
            | Self::AbstractClass
            | Self::Interface
            | Self::Enumeration
            | Self::ObjectName
            | Self::ActivityForkNodeHorizontal => ResizeMode::Width,
            Self::ActivityForkNode => ResizeMode::Height,
            Self::ClassAttribute
            | Self::ClassMethod
            | Self::ObjectAttribute
            | Self::ObjectMethod
            | Self::CommunicationLinkMessage
            | Self::ActivityInitialNode
            | Self::ActivityFinalNode
            | Self::UseCaseActor
            | Self::ComponentInterface
            | Self::Unknown(_) => ResizeMode::None,
            _ => ResizeMode::WidthAndHeight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_wire_strings_round_trip() {
        let kind: UMLElementType = serde_json::from_str("\"AbstractClass\"").unwrap();
        assert_eq!(kind, UMLElementType::AbstractClass);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"AbstractClass\"");

        let kind: UMLRelationshipType = serde_json::from_str("\"UseCaseInclude\"").unwrap();
        assert_eq!(kind, UMLRelationshipType::UseCaseInclude);
    }

    #[test]
    fn test_unknown_wire_strings_are_preserved() {
        let kind: UMLElementType = serde_json::from_str("\"BPMNTask\"").unwrap();
        assert_eq!(kind, UMLElementType::Unknown("BPMNTask".to_string()));
        assert!(kind.is_unknown());
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"BPMNTask\"");

        let diagram: UMLDiagramType = "SomethingNew".parse().unwrap();
        assert_eq!(diagram.to_string(), "SomethingNew");
        assert!(!diagram.is_supported());
    }

    #[test]
    fn test_supported_diagram_types() {
        let supported = [
            UMLDiagramType::ClassDiagram,
            UMLDiagramType::ObjectDiagram,
            UMLDiagramType::ActivityDiagram,
            UMLDiagramType::UseCaseDiagram,
            UMLDiagramType::CommunicationDiagram,
            UMLDiagramType::ComponentDiagram,
        ];
        for diagram in supported {
            assert!(diagram.is_supported(), "{diagram} should be supported");
            assert!(!diagram.element_types().is_empty());
            assert!(diagram.default_relationship_type().is_some());
        }

        for diagram in [
            UMLDiagramType::DeploymentDiagram,
            UMLDiagramType::PetriNet,
            UMLDiagramType::ReachabilityGraph,
            UMLDiagramType::SyntaxTree,
            UMLDiagramType::Flowchart,
        ] {
            assert!(!diagram.is_supported(), "{diagram} should not be supported");
        }
    }

    #[test]
    fn test_default_relationship_types() {
        assert_eq!(
            UMLDiagramType::ClassDiagram.default_relationship_type(),
            Some(UMLRelationshipType::ClassBidirectional)
        );
        assert_eq!(
            UMLDiagramType::UseCaseDiagram.default_relationship_type(),
            Some(UMLRelationshipType::UseCaseAssociation)
        );
        assert_eq!(
            UMLDiagramType::Unknown("X".to_string()).default_relationship_type(),
            None
        );
    }

    #[test]
    fn test_annotation_titles() {
        assert_eq!(UMLElementType::Interface.annotation_title(), "«interface»");
        assert_eq!(UMLElementType::AbstractClass.annotation_title(), "«abstract»");
        assert_eq!(UMLElementType::Subsystem.annotation_title(), "«subsystem»");
        assert_eq!(UMLElementType::Component.annotation_title(), "«component»");
        assert_eq!(UMLElementType::Class.annotation_title(), "");
    }

    #[test]
    fn test_selectability() {
        assert!(!UMLElementType::ClassAttribute.is_selectable());
        assert!(!UMLElementType::ObjectMethod.is_selectable());
        assert!(!UMLElementType::CommunicationLinkMessage.is_selectable());
        assert!(UMLElementType::Class.is_selectable());
        assert!(UMLElementType::Unknown("X".to_string()).is_selectable());
    }

    #[test]
    fn test_resize_modes() {
        assert_eq!(UMLElementType::Class.resize_mode(), ResizeMode::Width);
        assert_eq!(UMLElementType::ActivityForkNode.resize_mode(), ResizeMode::Height);
        assert_eq!(UMLElementType::UseCaseActor.resize_mode(), ResizeMode::None);
        assert_eq!(UMLElementType::Package.resize_mode(), ResizeMode::WidthAndHeight);

        assert!(ResizeMode::Width.can_resize_width());
        assert!(!ResizeMode::Width.can_resize_height());
        assert!(!ResizeMode::None.can_resize_width());
    }
}
