//! Functional dependency constraints (choice domains).

use crate::{NodeId, SrcLocation};

/// A declared functional dependency on a relation: the key attributes
/// (held as owned [`crate::Variable`] children) functionally determine the
/// remaining columns.
///
/// A relation keeps its constraints in declaration order for diagnostics;
/// the order carries no semantic weight.
#[derive(Debug, Clone)]
pub struct FunctionalConstraint {
    keys: Vec<NodeId>,
    loc: SrcLocation,
}

impl FunctionalConstraint {
    /// Creates a constraint over the given ordered key variables.
    #[must_use]
    pub fn new(keys: Vec<NodeId>, loc: SrcLocation) -> Self {
        Self { keys, loc }
    }

    /// Ordered ids of the key variables.
    #[must_use]
    pub fn keys(&self) -> &[NodeId] {
        &self.keys
    }

    /// Appends a key variable.
    pub fn add_key(&mut self, key: NodeId) {
        self.keys.push(key);
    }

    /// Source location of the declaration.
    #[must_use]
    pub fn location(&self) -> &SrcLocation {
        &self.loc
    }

    pub(crate) fn keys_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.keys
    }
}
