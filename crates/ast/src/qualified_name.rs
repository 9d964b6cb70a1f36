//! Interned hierarchical identifiers.
//!
//! A [`QualifiedName`] is an ordered list of components (`a.b.c`). Every
//! distinct component list is interned once, process-wide, and assigned a
//! stable index. That gives the name two comparison orders:
//!
//! - **lexical** ([`QualifiedName::lexical_cmp`]): component-wise string
//!   ordering, used wherever deterministic external output matters;
//! - **index** ([`QualifiedName::index`]): the opaque interning index,
//!   cheap and stable within a process, used for fast set membership when
//!   output order is re-derived later.
//!
//! There is deliberately no `Ord` impl: callers must name which order they
//! mean.

use itertools::Itertools;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, OnceLock};

static INTERNER: OnceLock<Mutex<HashMap<Vec<String>, u32>>> = OnceLock::new();

fn intern(parts: &[String]) -> u32 {
    let table = INTERNER.get_or_init(|| Mutex::new(HashMap::new()));
    let mut table = table.lock().expect("qualified-name interner poisoned");
    if let Some(&index) = table.get(parts) {
        return index;
    }
    let index = u32::try_from(table.len()).expect("qualified-name interner overflow");
    table.insert(parts.to_vec(), index);
    index
}

/// A dotted hierarchical identifier with lexical and interned-index orders.
#[derive(Debug, Clone)]
pub struct QualifiedName {
    parts: Vec<String>,
    index: u32,
}

impl QualifiedName {
    /// Creates a name from its ordered components.
    #[must_use]
    pub fn new(parts: Vec<String>) -> Self {
        let index = intern(&parts);
        Self { parts, index }
    }

    /// The ordered components.
    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// The opaque interning index. Stable within a process; equal names
    /// always share an index.
    #[must_use]
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Component-wise string ordering, for deterministic output.
    #[must_use]
    pub fn lexical_cmp(&self, other: &Self) -> Ordering {
        self.parts.cmp(&other.parts)
    }

    /// True if `self` orders before `other` lexically.
    #[must_use]
    pub fn lexical_less(&self, other: &Self) -> bool {
        self.lexical_cmp(other) == Ordering::Less
    }

    /// Appends a trailing component, re-interning the name.
    pub fn append(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
        self.index = intern(&self.parts);
    }

    /// Prepends a leading component, re-interning the name.
    pub fn prepend(&mut self, part: impl Into<String>) {
        self.parts.insert(0, part.into());
        self.index = intern(&self.parts);
    }
}

impl Default for QualifiedName {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<&str> for QualifiedName {
    fn from(name: &str) -> Self {
        Self::new(name.split('.').map(str::to_string).collect())
    }
}

impl From<String> for QualifiedName {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

/// Equality through the interning index; equal parts always intern alike.
impl PartialEq for QualifiedName {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for QualifiedName {}

impl Hash for QualifiedName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.iter().join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_parts_share_an_index() {
        let a = QualifiedName::from("pkg.edge");
        let b = QualifiedName::new(vec!["pkg".to_string(), "edge".to_string()]);
        assert_eq!(a, b);
        assert_eq!(a.index(), b.index());
    }

    #[test]
    fn distinct_parts_get_distinct_indices() {
        let a = QualifiedName::from("alpha");
        let b = QualifiedName::from("beta");
        assert_ne!(a, b);
        assert_ne!(a.index(), b.index());
    }

    #[test]
    fn lexical_order_is_componentwise() {
        let a = QualifiedName::from("a.z");
        let b = QualifiedName::from("b.a");
        assert!(a.lexical_less(&b));
        assert!(!b.lexical_less(&a));
        assert_eq!(a.lexical_cmp(&a), Ordering::Equal);
    }

    #[test]
    fn append_and_prepend_reintern() {
        let mut n = QualifiedName::from("edge");
        let plain = n.clone();
        n.prepend("pkg");
        assert_eq!(n.to_string(), "pkg.edge");
        assert_ne!(n, plain);
        n.append("v2");
        assert_eq!(n.to_string(), "pkg.edge.v2");
        assert_eq!(n, QualifiedName::from("pkg.edge.v2"));
    }

    #[test]
    fn display_joins_with_dots() {
        assert_eq!(QualifiedName::from("a.b.c").to_string(), "a.b.c");
        assert_eq!(QualifiedName::default().to_string(), "");
    }
}
