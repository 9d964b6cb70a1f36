//! AST node framework for the Strata Datalog compiler.
//!
//! Every later stage of the compiler (name resolution, arity checking,
//! optimization rewrites, lowering) traverses, compares, and rewrites the
//! node graph defined here. Nodes form a closed set of kinds ([`Node`])
//! stored in an id-addressed [`Arena`]; a parent owns its children by
//! holding their ids, and the arena provides the uniform structural
//! operations: deep equality, deep cloning, ordered child enumeration, and
//! in-place child rewriting.
//!
//! # Example
//!
//! ```rust
//! use ast::{Arena, Attribute, Node, QualifiedName, Relation, SrcLocation};
//!
//! let mut arena = Arena::new();
//! let mut edge = Relation::new(QualifiedName::from("edge"), SrcLocation::default());
//! let x = arena.alloc(Node::Attribute(Attribute::new(
//!     "x",
//!     QualifiedName::from("number"),
//!     SrcLocation::default(),
//! )));
//! edge.add_attribute(x);
//! let edge = arena.alloc(Node::Relation(edge));
//! assert_eq!(arena.relation(edge).arity(), 1);
//! ```

/// Id-addressed node storage and the generic structural operations.
pub mod arena;
/// Attribute (column) declarations.
pub mod attribute;
/// Functional dependency constraints (choice domains).
pub mod constraint;
/// Source location tokens attached to every node.
pub mod location;
/// The closed set of node kinds.
pub mod node;
/// The program root node.
pub mod program;
/// Interned hierarchical identifiers.
pub mod qualified_name;
/// Relation declarations and relation-set orderings.
pub mod relation;
/// Variable leaves used inside constraints.
pub mod variable;


/// Re-exported.
pub use arena::{Arena, NodeId};
pub use attribute::Attribute;
pub use constraint::FunctionalConstraint;
pub use location::SrcLocation;
pub use node::{Node, NodeKind};
pub use program::Program;
pub use qualified_name::QualifiedName;
pub use relation::{
    ordered_relation_set, unordered_relation_set, ByLexicalName, ByNameIndex, Relation,
    RelationQualifier, RelationRepresentation, RelationSet, UnorderedRelationSet,
};
pub use variable::Variable;
