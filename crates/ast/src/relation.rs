//! Relation declarations and relation-set orderings.

use crate::{Arena, NodeId, QualifiedName, SrcLocation};
use std::collections::BTreeSet;
use std::fmt;

/// A tag altering how a relation is compiled or stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RelationQualifier {
    /// Loaded from external facts.
    Input,
    /// Written out as a result.
    Output,
    /// Only the tuple count is reported.
    Printsize,
    /// May be overridden in a component instantiation.
    Overridable,
    /// Inlined into its uses.
    Inline,
    /// Never inlined.
    NoInline,
    /// Magic-set transformed.
    Magic,
    /// Exempt from the magic-set transform.
    NoMagic,
    /// Warnings about this relation are suppressed.
    Suppressed,
}

impl fmt::Display for RelationQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::Printsize => "printsize",
            Self::Overridable => "overridable",
            Self::Inline => "inline",
            Self::NoInline => "no_inline",
            Self::Magic => "magic",
            Self::NoMagic => "no_magic",
            Self::Suppressed => "suppressed",
        };
        write!(f, "{keyword}")
    }
}

/// The physical storage strategy chosen for a relation's extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RelationRepresentation {
    /// Let the lowering pipeline pick.
    #[default]
    Default,
    /// B-tree index.
    Btree,
    /// B-tree supporting deletion.
    BtreeDelete,
    /// Brie (specialized trie).
    Brie,
    /// Equivalence relation.
    Eqrel,
    /// Provenance-instrumented storage.
    Provenance,
    /// Info relation emitted by provenance instrumentation.
    Info,
}

impl fmt::Display for RelationRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Default => "",
            Self::Btree => "btree",
            Self::BtreeDelete => "btree_delete",
            Self::Brie => "brie",
            Self::Eqrel => "eqrel",
            Self::Provenance => "provenance",
            Self::Info => "info",
        };
        write!(f, "{keyword}")
    }
}

/// A relation declaration: a qualified name, ordered attribute columns,
/// a qualifier set, functional dependencies, and a storage representation.
///
/// The relation owns its [`crate::Attribute`] and
/// [`crate::FunctionalConstraint`] children through their arena ids; the
/// owning program owns the relation the same way. Attribute order defines
/// column order and therefore arity.
#[derive(Debug, Clone)]
pub struct Relation {
    name: QualifiedName,
    loc: SrcLocation,
    attributes: Vec<NodeId>,
    qualifiers: BTreeSet<RelationQualifier>,
    dependencies: Vec<NodeId>,
    representation: RelationRepresentation,
    is_delta_debug: Option<QualifiedName>,
}

impl Relation {
    /// Creates an empty relation with the given name; the parser appends
    /// attributes and dependencies incrementally.
    #[must_use]
    pub fn new(name: QualifiedName, loc: SrcLocation) -> Self {
        Self {
            name,
            loc,
            attributes: Vec::new(),
            qualifiers: BTreeSet::new(),
            dependencies: Vec::new(),
            representation: RelationRepresentation::default(),
            is_delta_debug: None,
        }
    }

    /// Qualified relation name.
    #[must_use]
    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    /// Renames this relation.
    pub fn set_name(&mut self, name: QualifiedName) {
        self.name = name;
    }

    /// Source location of the declaration.
    #[must_use]
    pub fn location(&self) -> &SrcLocation {
        &self.loc
    }

    /// Appends an attribute column. No duplicate-name validation happens
    /// here; that is the semantic analyzer's job.
    pub fn add_attribute(&mut self, attr: NodeId) {
        self.attributes.push(attr);
    }

    /// Replaces the whole attribute sequence.
    pub fn set_attributes(&mut self, attrs: Vec<NodeId>) {
        self.attributes = attrs;
    }

    /// Ordered ids of the attribute columns.
    #[must_use]
    pub fn attributes(&self) -> &[NodeId] {
        &self.attributes
    }

    /// Number of columns.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.attributes.len()
    }

    /// Number of lattice-flagged columns. Recomputed on every call by an
    /// O(arity) scan, so no invalidation is needed when attributes change.
    #[must_use]
    pub fn auxiliary_arity(&self, arena: &Arena) -> usize {
        self.attributes
            .iter()
            .filter(|&&id| arena.attribute(id).is_lattice())
            .count()
    }

    /// Adds a qualifier; returns true iff it was newly inserted.
    pub fn add_qualifier(&mut self, q: RelationQualifier) -> bool {
        self.qualifiers.insert(q)
    }

    /// Removes a qualifier; returns true iff it was present.
    pub fn remove_qualifier(&mut self, q: RelationQualifier) -> bool {
        self.qualifiers.remove(&q)
    }

    /// True if the qualifier is set.
    #[must_use]
    pub fn has_qualifier(&self, q: RelationQualifier) -> bool {
        self.qualifiers.contains(&q)
    }

    /// The qualifier set.
    #[must_use]
    pub fn qualifiers(&self) -> &BTreeSet<RelationQualifier> {
        &self.qualifiers
    }

    /// Chosen storage representation.
    #[must_use]
    #[inline]
    pub fn representation(&self) -> RelationRepresentation {
        self.representation
    }

    /// Picks a storage representation.
    pub fn set_representation(&mut self, representation: RelationRepresentation) {
        self.representation = representation;
    }

    /// Appends a functional dependency. No uniqueness check.
    pub fn add_dependency(&mut self, fd: NodeId) {
        self.dependencies.push(fd);
    }

    /// Ordered ids of the functional dependencies.
    #[must_use]
    pub fn dependencies(&self) -> &[NodeId] {
        &self.dependencies
    }

    /// Secondary name used by diagnostic delta-debugging, if set.
    #[must_use]
    pub fn is_delta_debug(&self) -> Option<&QualifiedName> {
        self.is_delta_debug.as_ref()
    }

    /// Marks this relation as a delta-debug copy of `name`.
    pub fn set_is_delta_debug(&mut self, name: QualifiedName) {
        self.is_delta_debug = Some(name);
    }

    /// Scalar field comparison: name, qualifiers, representation, and
    /// delta-debug alias. Children are compared deeply by the arena;
    /// locations are ignored.
    #[must_use]
    pub(crate) fn same_fields(&self, other: &Self) -> bool {
        self.name == other.name
            && self.qualifiers == other.qualifiers
            && self.representation == other.representation
            && self.is_delta_debug == other.is_delta_debug
    }

    pub(crate) fn attributes_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.attributes
    }

    pub(crate) fn dependencies_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.dependencies
    }
}

/// Orders relations by qualified name, component-wise. Use wherever the
/// resulting iteration order is externally observable.
#[derive(Debug, Clone, Copy)]
pub struct ByLexicalName<'a>(pub &'a Relation);

impl PartialEq for ByLexicalName<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.name() == other.0.name()
    }
}

impl Eq for ByLexicalName<'_> {}

impl PartialOrd for ByLexicalName<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByLexicalName<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.name().lexical_cmp(other.0.name())
    }
}

/// Orders relations by interned name index: fast and stable within a
/// process, but not deterministic across runs. Convert with
/// [`ordered_relation_set`] before any externally observable iteration.
#[derive(Debug, Clone, Copy)]
pub struct ByNameIndex<'a>(pub &'a Relation);

impl PartialEq for ByNameIndex<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.name().index() == other.0.name().index()
    }
}

impl Eq for ByNameIndex<'_> {}

impl PartialOrd for ByNameIndex<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByNameIndex<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.name().index().cmp(&other.0.name().index())
    }
}

/// Relation set in lexical name order.
pub type RelationSet<'a> = BTreeSet<ByLexicalName<'a>>;

/// Relation set in interned-index order.
pub type UnorderedRelationSet<'a> = BTreeSet<ByNameIndex<'a>>;

/// Builds an index-ordered set from any collection of relations.
pub fn unordered_relation_set<'a, I>(relations: I) -> UnorderedRelationSet<'a>
where
    I: IntoIterator<Item = &'a Relation>,
{
    relations.into_iter().map(ByNameIndex).collect()
}

/// Reorders an index-ordered set into lexical order, for deterministic
/// externally observable iteration.
#[must_use]
pub fn ordered_relation_set<'a>(set: &UnorderedRelationSet<'a>) -> RelationSet<'a> {
    set.iter().map(|r| ByLexicalName(r.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Relation {
        Relation::new(QualifiedName::from(name), SrcLocation::default())
    }

    #[test]
    fn new_relation_is_empty() {
        let rel = named("person");
        assert_eq!(rel.arity(), 0);
        assert!(rel.qualifiers().is_empty());
        assert_eq!(rel.representation(), RelationRepresentation::Default);
        assert!(rel.is_delta_debug().is_none());
    }

    #[test]
    fn qualifier_set_is_idempotent() {
        let mut rel = named("edge");
        assert!(rel.add_qualifier(RelationQualifier::Input));
        assert!(!rel.add_qualifier(RelationQualifier::Input));
        assert_eq!(rel.qualifiers().len(), 1);
        assert!(rel.remove_qualifier(RelationQualifier::Input));
        assert!(!rel.remove_qualifier(RelationQualifier::Input));
        assert!(!rel.has_qualifier(RelationQualifier::Input));
    }

    #[test]
    fn representation_is_mutable() {
        let mut rel = named("path");
        rel.set_representation(RelationRepresentation::Brie);
        assert_eq!(rel.representation(), RelationRepresentation::Brie);
    }

    #[test]
    fn delta_debug_alias() {
        let mut rel = named("edge");
        rel.set_is_delta_debug(QualifiedName::from("edge.orig"));
        assert_eq!(
            rel.is_delta_debug(),
            Some(&QualifiedName::from("edge.orig"))
        );
    }

    #[test]
    fn scalar_fields_ignore_location() {
        let a = Relation::new(
            QualifiedName::from("edge"),
            SrcLocation::new("x.dl", 1, 1, 1, 9),
        );
        let b = Relation::new(
            QualifiedName::from("edge"),
            SrcLocation::new("y.dl", 4, 2, 4, 10),
        );
        assert!(a.same_fields(&b));
    }

    #[test]
    fn lexical_set_iterates_in_name_order() {
        let rel_b = named("b");
        let rel_a = named("a");
        let set: RelationSet = [&rel_b, &rel_a].into_iter().map(ByLexicalName).collect();
        let names: Vec<String> = set.iter().map(|r| r.0.name().to_string()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn unordered_set_converts_to_lexical() {
        let rel_b = named("zz.b");
        let rel_a = named("zz.a");
        let unordered = unordered_relation_set([&rel_b, &rel_a]);
        assert_eq!(unordered.len(), 2);
        let ordered = ordered_relation_set(&unordered);
        let names: Vec<String> = ordered.iter().map(|r| r.0.name().to_string()).collect();
        assert_eq!(names, vec!["zz.a", "zz.b"]);
    }

    #[test]
    fn unordered_set_deduplicates_by_name() {
        let first = named("dup");
        let second = named("dup");
        let unordered = unordered_relation_set([&first, &second]);
        assert_eq!(unordered.len(), 1);
    }
}
