//! The program root node.

use crate::{NodeId, SrcLocation};

/// The root of one compiled program: the ordered list of its relations.
///
/// The program exclusively owns its relations through their arena ids;
/// retiring the program retires the whole tree.
#[derive(Debug, Clone, Default)]
pub struct Program {
    relations: Vec<NodeId>,
    loc: SrcLocation,
}

impl Program {
    /// Creates an empty program.
    #[must_use]
    pub fn new(loc: SrcLocation) -> Self {
        Self {
            relations: Vec::new(),
            loc,
        }
    }

    /// Ordered ids of the declared relations.
    #[must_use]
    pub fn relations(&self) -> &[NodeId] {
        &self.relations
    }

    /// Appends a relation declaration.
    pub fn add_relation(&mut self, rel: NodeId) {
        self.relations.push(rel);
    }

    /// Source location (start of the compilation unit).
    #[must_use]
    pub fn location(&self) -> &SrcLocation {
        &self.loc
    }

    pub(crate) fn relations_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.relations
    }
}
