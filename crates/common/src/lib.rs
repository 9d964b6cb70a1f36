//! Shared container utilities for the Strata compiler.
//!
//! This crate provides the generic machinery used by every pass that walks
//! or rebuilds the AST: deep-equality and deep-cloning engines over
//! sequences, a lazy transform/deref iterator adapter, contiguous range
//! partitioning for parallel read-only scans, and small lookup helpers.

/// Deep-copy engine over sequences of (optionally absent) elements.
pub mod clone;
/// Membership, lookup, and vector-building helpers.
pub mod collection;
/// Deep-equality engine over sequences and ordered maps.
pub mod eq;
/// Lazy transform and dereferencing iterator adapters.
pub mod iter;
/// Contiguous interval abstraction with near-equal partitioning.
pub mod range;

/// Re-exported.
pub use clone::{clone_all, clone_present};
pub use collection::{contains, get_if, get_or, map_vec};
pub use eq::{equal_map, equal_opt_seq, equal_seq, AbsentPolicy};
pub use iter::{deref_iter, transform_iter, TransformIter};
pub use range::{make_range, Range};
