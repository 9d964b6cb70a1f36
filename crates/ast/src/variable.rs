//! Variable leaves used inside constraints.

use crate::SrcLocation;
use std::fmt;

/// A named variable leaf, used as a key inside a
/// [`crate::FunctionalConstraint`].
#[derive(Debug, Clone)]
pub struct Variable {
    name: String,
    loc: SrcLocation,
}

impl Variable {
    /// Creates a variable with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>, loc: SrcLocation) -> Self {
        Self {
            name: name.into(),
            loc,
        }
    }

    /// Variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source location of the occurrence.
    #[must_use]
    pub fn location(&self) -> &SrcLocation {
        &self.loc
    }

    /// Structural field comparison; locations are ignored.
    #[must_use]
    pub(crate) fn same_fields(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
