//! Apollon Core Types and Definitions
//!
//! This crate provides the foundational types for rendering and editing
//! Apollon UML diagrams. It includes:
//!
//! - **Geometry**: Points, sizes and boundaries ([`geometry`] module)
//! - **Direction**: Endpoint attachment directions ([`direction`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Draw**: Abstract canvas, paths, strokes and text ([`draw`] module)
//! - **Model**: The diagram model and its type taxonomies ([`model`] module)
//! - **Hierarchy**: Parent/child inference from owner links ([`hierarchy`] module)
//! - **Path**: Relationship path geometry and hit testing ([`path`] module)
//! - **Query**: Editor-facing lookups such as hit testing ([`query`] module)
//! - **Layout**: Incremental layout adjustments ([`layout`] module)
//! - **Diagnostics**: Severity-tagged reports for per-item problems ([`diagnostic`] module)

pub mod color;
pub mod diagnostic;
pub mod direction;
pub mod draw;
pub mod geometry;
pub mod hierarchy;
pub mod layout;
pub mod model;
pub mod path;
pub mod query;
