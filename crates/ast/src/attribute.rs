//! Attribute (column) declarations.

use crate::{QualifiedName, SrcLocation};
use std::fmt;

/// One column of a relation: a name, a type name, and a lattice flag.
///
/// Lattice attributes participate in semi-lattice fixpoint aggregation;
/// lowering appends them positionally and keeps them out of ordinary
/// join-key reasoning, which is why [`crate::Relation::auxiliary_arity`]
/// counts them separately.
#[derive(Debug, Clone)]
pub struct Attribute {
    name: String,
    type_name: QualifiedName,
    is_lattice: bool,
    loc: SrcLocation,
}

impl Attribute {
    /// Creates a plain attribute.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: QualifiedName, loc: SrcLocation) -> Self {
        Self {
            name: name.into(),
            type_name,
            is_lattice: false,
            loc,
        }
    }

    /// Creates a lattice attribute.
    #[must_use]
    pub fn new_lattice(name: impl Into<String>, type_name: QualifiedName, loc: SrcLocation) -> Self {
        Self {
            name: name.into(),
            type_name,
            is_lattice: true,
            loc,
        }
    }

    /// Column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type name.
    #[must_use]
    pub fn type_name(&self) -> &QualifiedName {
        &self.type_name
    }

    /// Replaces the declared type name.
    pub fn set_type_name(&mut self, type_name: QualifiedName) {
        self.type_name = type_name;
    }

    /// True if this column participates in lattice aggregation.
    #[must_use]
    #[inline]
    pub fn is_lattice(&self) -> bool {
        self.is_lattice
    }

    /// Source location of the declaration.
    #[must_use]
    pub fn location(&self) -> &SrcLocation {
        &self.loc
    }

    /// Structural field comparison; locations are ignored.
    #[must_use]
    pub(crate) fn same_fields(&self, other: &Self) -> bool {
        self.name == other.name
            && self.type_name == other.type_name
            && self.is_lattice == other.is_lattice
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_lattice {
            write!(f, "{}: lattice {}", self.name, self.type_name)
        } else {
            write!(f, "{}: {}", self.name, self.type_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_name_and_type() {
        let a = Attribute::new("x", QualifiedName::from("number"), SrcLocation::default());
        assert_eq!(a.to_string(), "x: number");
        let l = Attribute::new_lattice("b", QualifiedName::from("Bound"), SrcLocation::default());
        assert_eq!(l.to_string(), "b: lattice Bound");
    }

    #[test]
    fn field_comparison_ignores_location() {
        let a = Attribute::new(
            "x",
            QualifiedName::from("number"),
            SrcLocation::new("a.dl", 1, 1, 1, 5),
        );
        let b = Attribute::new(
            "x",
            QualifiedName::from("number"),
            SrcLocation::new("b.dl", 9, 9, 9, 12),
        );
        assert!(a.same_fields(&b));
        let c = Attribute::new_lattice("x", QualifiedName::from("number"), SrcLocation::default());
        assert!(!a.same_fields(&c));
    }
}
