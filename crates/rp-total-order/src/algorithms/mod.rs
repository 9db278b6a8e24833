//! Algorithms module for the total order
//!
//! Contains:
//! - Relocation (constraint insertion with descendant cache repair)
//! - Head-first traversal

pub(crate) mod relocate;
pub mod traversal;

pub use traversal::OrderIter;
