//! The closed set of node kinds.
//!
//! `Node` is a closed enum rather than an open trait hierarchy: every
//! structural operation (`equals`, `children`, child installation) matches
//! exhaustively over it, so adding a node kind without handling it
//! everywhere is a compile error instead of a silent false-negative at
//! runtime.

use crate::{Attribute, FunctionalConstraint, NodeId, Program, Relation, SrcLocation, Variable};

/// One AST node. Child edges are arena ids owned by the parent.
///
/// `Clone` copies the node's fields including its child *ids*; it is the
/// shallow building block [`crate::Arena::deep_clone`] uses, not a tree
/// copy by itself.
#[derive(Debug, Clone)]
pub enum Node {
    /// Program root.
    Program(Program),
    /// Relation declaration.
    Relation(Relation),
    /// Attribute column.
    Attribute(Attribute),
    /// Functional dependency constraint.
    FunctionalConstraint(FunctionalConstraint),
    /// Variable leaf.
    Variable(Variable),
}

/// Discriminant of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Program root.
    Program,
    /// Relation declaration.
    Relation,
    /// Attribute column.
    Attribute,
    /// Functional dependency constraint.
    FunctionalConstraint,
    /// Variable leaf.
    Variable,
}

impl Node {
    /// The node's kind tag.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Program(_) => NodeKind::Program,
            Node::Relation(_) => NodeKind::Relation,
            Node::Attribute(_) => NodeKind::Attribute,
            Node::FunctionalConstraint(_) => NodeKind::FunctionalConstraint,
            Node::Variable(_) => NodeKind::Variable,
        }
    }

    /// The attached source location.
    #[must_use]
    pub fn location(&self) -> &SrcLocation {
        match self {
            Node::Program(p) => p.location(),
            Node::Relation(r) => r.location(),
            Node::Attribute(a) => a.location(),
            Node::FunctionalConstraint(c) => c.location(),
            Node::Variable(v) => v.location(),
        }
    }

    /// Ordered ids of the directly owned children (declaration order;
    /// not transitive).
    #[must_use]
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            Node::Program(p) => p.relations().to_vec(),
            Node::Relation(r) => {
                let mut ids = Vec::with_capacity(r.attributes().len() + r.dependencies().len());
                ids.extend_from_slice(r.attributes());
                ids.extend_from_slice(r.dependencies());
                ids
            }
            Node::Attribute(_) | Node::Variable(_) => Vec::new(),
            Node::FunctionalConstraint(c) => c.keys().to_vec(),
        }
    }

    /// Installs replacement child ids, in the same order [`Node::children`]
    /// reports them.
    ///
    /// # Panics
    ///
    /// Panics if `ids` does not have exactly one entry per owned child.
    pub(crate) fn set_children(&mut self, ids: &[NodeId]) {
        match self {
            Node::Program(p) => {
                let slots = p.relations_mut();
                install(slots, ids);
            }
            Node::Relation(r) => {
                let n_attrs = r.attributes().len();
                let n_deps = r.dependencies().len();
                assert_eq!(
                    ids.len(),
                    n_attrs + n_deps,
                    "child count mismatch installing relation children"
                );
                install(r.attributes_mut(), &ids[..n_attrs]);
                install(r.dependencies_mut(), &ids[n_attrs..]);
            }
            Node::Attribute(_) | Node::Variable(_) => {
                assert!(ids.is_empty(), "leaf nodes own no children");
            }
            Node::FunctionalConstraint(c) => {
                install(c.keys_mut(), ids);
            }
        }
    }

    /// Borrows the relation payload, if this is a relation node.
    #[must_use]
    pub fn as_relation(&self) -> Option<&Relation> {
        match self {
            Node::Relation(r) => Some(r),
            _ => None,
        }
    }

    /// Borrows the attribute payload, if this is an attribute node.
    #[must_use]
    pub fn as_attribute(&self) -> Option<&Attribute> {
        match self {
            Node::Attribute(a) => Some(a),
            _ => None,
        }
    }

    /// Borrows the constraint payload, if this is a constraint node.
    #[must_use]
    pub fn as_constraint(&self) -> Option<&FunctionalConstraint> {
        match self {
            Node::FunctionalConstraint(c) => Some(c),
            _ => None,
        }
    }

    /// Borrows the variable payload, if this is a variable node.
    #[must_use]
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Node::Variable(v) => Some(v),
            _ => None,
        }
    }

    /// Borrows the program payload, if this is a program node.
    #[must_use]
    pub fn as_program(&self) -> Option<&Program> {
        match self {
            Node::Program(p) => Some(p),
            _ => None,
        }
    }
}

fn install(slots: &mut Vec<NodeId>, ids: &[NodeId]) {
    assert_eq!(
        slots.len(),
        ids.len(),
        "child count mismatch installing children"
    );
    slots.copy_from_slice(ids);
}
