//! Id-addressed node storage and the generic structural operations.
//!
//! All nodes of a program tree live in one [`Arena`]; parents own children
//! by holding their [`NodeId`]s, so "ownership" is reachability from the
//! tree root and deleting a subtree is explicit id retirement. The arena
//! is also where the uniform Node contract lives: structural equality with
//! an id short-circuit, deep cloning, ordered child enumeration, and
//! in-place child rewriting through a mapper closure.
//!
//! A tree is mutated by at most one pass at a time; parallel use is
//! limited to read-only traversal of partitioned node collections.

use crate::{Attribute, FunctionalConstraint, Node, Program, QualifiedName, Relation, Variable};
use common::{clone_all, equal_seq, get_if, transform_iter};
use itertools::Itertools;
use std::fmt;
use tracing::trace;

/// Stable handle of a node in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

/// Exclusive storage for one program's nodes.
#[derive(Debug, Default)]
pub struct Arena {
    slots: Vec<Option<Node>>,
    free: Vec<u32>,
}

impl Arena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an arena with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// True if no node is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores a node and returns its id, recycling retired slots.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = match self.free.pop() {
            Some(slot) => {
                self.slots[slot as usize] = Some(node);
                NodeId(slot)
            }
            None => {
                let slot = u32::try_from(self.slots.len()).expect("arena slot overflow");
                self.slots.push(Some(node));
                NodeId(slot)
            }
        };
        trace!(?id, "allocated node");
        id
    }

    /// True if `id` refers to a live node.
    #[must_use]
    pub fn is_live(&self, id: NodeId) -> bool {
        matches!(self.slots.get(id.0 as usize), Some(Some(_)))
    }

    /// Borrows the node at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was retired or never allocated; using a dead id is a
    /// programmer error, not a recoverable condition.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &Node {
        self.slots
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .unwrap_or_else(|| panic!("access to dead node id {id:?}"))
    }

    /// Mutably borrows the node at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was retired or never allocated.
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        self.slots
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .unwrap_or_else(|| panic!("access to dead node id {id:?}"))
    }

    /// Retires the subtree rooted at `id`; every slot is recycled.
    ///
    /// # Panics
    ///
    /// Panics if `id` is already dead.
    pub fn retire(&mut self, id: NodeId) {
        let node = self
            .slots
            .get_mut(id.0 as usize)
            .and_then(Option::take)
            .unwrap_or_else(|| panic!("retiring dead node id {id:?}"));
        for child in node.children() {
            self.retire(child);
        }
        self.free.push(id.0);
        trace!(?id, "retired node");
    }

    /// Ordered ids of the direct children of `id`.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.get(id).children()
    }

    /// Structural deep equality of two subtrees.
    ///
    /// The same id compares equal to itself without field inspection.
    /// Nodes of different kinds are never equal. Source locations are
    /// ignored throughout.
    #[must_use]
    pub fn equals(&self, a: NodeId, b: NodeId) -> bool {
        if a == b {
            return true;
        }
        let eq_ids = |x: &NodeId, y: &NodeId| self.equals(*x, *y);
        match (self.get(a), self.get(b)) {
            (Node::Program(x), Node::Program(y)) => {
                equal_seq(x.relations(), y.relations(), eq_ids)
            }
            (Node::Relation(x), Node::Relation(y)) => {
                x.same_fields(y)
                    && equal_seq(x.attributes(), y.attributes(), eq_ids)
                    && equal_seq(x.dependencies(), y.dependencies(), eq_ids)
            }
            (Node::Attribute(x), Node::Attribute(y)) => x.same_fields(y),
            (Node::FunctionalConstraint(x), Node::FunctionalConstraint(y)) => {
                equal_seq(x.keys(), y.keys(), eq_ids)
            }
            (Node::Variable(x), Node::Variable(y)) => x.same_fields(y),
            // different kinds never compare equal; spelling out each
            // left-hand kind keeps the match exhaustive when one is added
            (Node::Program(_), _)
            | (Node::Relation(_), _)
            | (Node::Attribute(_), _)
            | (Node::FunctionalConstraint(_), _)
            | (Node::Variable(_), _) => false,
        }
    }

    /// Deep-copies the subtree rooted at `id` into fresh slots.
    ///
    /// The clone compares equal to the original and shares no child id
    /// with it, so mutating either tree never affects the other.
    pub fn deep_clone(&mut self, id: NodeId) -> NodeId {
        let mut copy = self.get(id).clone();
        let fresh = clone_all(&copy.children(), |&child| self.deep_clone(child));
        copy.set_children(&fresh);
        let cloned = self.alloc(copy);
        trace!(?id, ?cloned, "deep-cloned subtree");
        cloned
    }

    /// Replaces each directly owned child of `id` with `mapper(child)`,
    /// in place and in order.
    ///
    /// Every replacement is computed before any is installed, so a
    /// panicking mapper leaves the node's children untouched. A mapper
    /// that returns a fresh id takes over the replaced child: the arena
    /// does not retire it, because the mapper may have woven the old
    /// subtree into its replacement.
    pub fn rewrite_children<F>(&mut self, id: NodeId, mut mapper: F)
    where
        F: FnMut(&mut Arena, NodeId) -> NodeId,
    {
        let old = self.children(id);
        let mut replacements = Vec::with_capacity(old.len());
        for &child in &old {
            replacements.push(mapper(self, child));
        }
        self.get_mut(id).set_children(&replacements);
    }

    /// Read-only view over a sequence of ids, yielding the nodes
    /// themselves. Consumers see borrows, never ids or slots.
    pub fn nodes<'a>(
        &'a self,
        ids: &'a [NodeId],
    ) -> impl Iterator<Item = &'a Node> + Clone + 'a {
        transform_iter(ids.iter(), move |id: &NodeId| self.get(*id))
    }

    /// Iterates a program's relations as plain borrows.
    pub fn relations<'a>(
        &'a self,
        program: &'a Program,
    ) -> impl Iterator<Item = &'a Relation> + Clone + 'a {
        transform_iter(program.relations().iter(), move |id: &NodeId| {
            self.relation(*id)
        })
    }

    /// Finds a program's relation by qualified name.
    #[must_use]
    pub fn relation_by_name<'a>(
        &'a self,
        program: &'a Program,
        name: &QualifiedName,
    ) -> Option<&'a Relation> {
        get_if(self.relations(program), |r| r.name() == name)
    }

    /// Borrows the relation at `id`.
    ///
    /// # Panics
    ///
    /// Panics if the node is not a relation.
    #[must_use]
    pub fn relation(&self, id: NodeId) -> &Relation {
        self.get(id)
            .as_relation()
            .unwrap_or_else(|| panic!("node {id:?} is not a relation"))
    }

    /// Mutably borrows the relation at `id`.
    ///
    /// # Panics
    ///
    /// Panics if the node is not a relation.
    pub fn relation_mut(&mut self, id: NodeId) -> &mut Relation {
        match self.get_mut(id) {
            Node::Relation(r) => r,
            n => panic!("node {id:?} is {:?}, not a relation", n.kind()),
        }
    }

    /// Borrows the attribute at `id`.
    ///
    /// # Panics
    ///
    /// Panics if the node is not an attribute.
    #[must_use]
    pub fn attribute(&self, id: NodeId) -> &Attribute {
        self.get(id)
            .as_attribute()
            .unwrap_or_else(|| panic!("node {id:?} is not an attribute"))
    }

    /// Mutably borrows the attribute at `id`.
    ///
    /// # Panics
    ///
    /// Panics if the node is not an attribute.
    pub fn attribute_mut(&mut self, id: NodeId) -> &mut Attribute {
        match self.get_mut(id) {
            Node::Attribute(a) => a,
            n => panic!("node {id:?} is {:?}, not an attribute", n.kind()),
        }
    }

    /// Borrows the functional constraint at `id`.
    ///
    /// # Panics
    ///
    /// Panics if the node is not a constraint.
    #[must_use]
    pub fn constraint(&self, id: NodeId) -> &FunctionalConstraint {
        self.get(id)
            .as_constraint()
            .unwrap_or_else(|| panic!("node {id:?} is not a functional constraint"))
    }

    /// Borrows the variable at `id`.
    ///
    /// # Panics
    ///
    /// Panics if the node is not a variable.
    #[must_use]
    pub fn variable(&self, id: NodeId) -> &Variable {
        self.get(id)
            .as_variable()
            .unwrap_or_else(|| panic!("node {id:?} is not a variable"))
    }

    /// Borrows the program at `id`.
    ///
    /// # Panics
    ///
    /// Panics if the node is not a program.
    #[must_use]
    pub fn program(&self, id: NodeId) -> &Program {
        self.get(id)
            .as_program()
            .unwrap_or_else(|| panic!("node {id:?} is not a program"))
    }

    /// Mutably borrows the program at `id`.
    ///
    /// # Panics
    ///
    /// Panics if the node is not a program.
    pub fn program_mut(&mut self, id: NodeId) -> &mut Program {
        match self.get_mut(id) {
            Node::Program(p) => p,
            n => panic!("node {id:?} is {:?}, not a program", n.kind()),
        }
    }

    /// Arena-aware display adapter for the subtree at `id`.
    #[must_use]
    pub fn display(&self, id: NodeId) -> NodeDisplay<'_> {
        NodeDisplay { arena: self, id }
    }
}

/// Renders a node in `.decl` surface syntax, resolving child names
/// through the arena.
pub struct NodeDisplay<'a> {
    arena: &'a Arena,
    id: NodeId,
}

impl fmt::Display for NodeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arena = self.arena;
        match arena.get(self.id) {
            Node::Attribute(a) => write!(f, "{a}"),
            Node::Variable(v) => write!(f, "{v}"),
            Node::FunctionalConstraint(c) => {
                let keys = c
                    .keys()
                    .iter()
                    .map(|&k| arena.variable(k).name())
                    .join(", ");
                write!(f, "choice-domain ({keys})")
            }
            Node::Relation(r) => {
                let columns = r
                    .attributes()
                    .iter()
                    .map(|&a| arena.attribute(a).to_string())
                    .join(", ");
                write!(f, ".decl {}({columns})", r.name())?;
                for q in r.qualifiers() {
                    write!(f, " {q}")?;
                }
                if r.representation() != crate::RelationRepresentation::Default {
                    write!(f, " {}", r.representation())?;
                }
                for &fd in r.dependencies() {
                    write!(f, " {}", arena.display(fd))?;
                }
                Ok(())
            }
            Node::Program(p) => {
                for &rel in p.relations() {
                    writeln!(f, "{}", arena.display(rel))?;
                }
                Ok(())
            }
        }
    }
}
