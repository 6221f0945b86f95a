//! Hash-consed Reduced Ordered Binary Decision Diagrams (ROBDDs).
//!
//! A [`BddCache`] is a single shared unique table: every nonterminal node it
//! hands out is canonical, so structurally equal triples `(variable, low,
//! high)` always collapse to the same [`NodeId`], and redundant nodes
//! (`low == high`) are eliminated on construction. Boolean combinators
//! ([`BddCache::and`], [`BddCache::or`], [`BddCache::ite`], and friends) are
//! memoized against this same cache, so repeated substructure in a large
//! expression is only ever computed once.
//!
//! Variables and node ids are newtypes ([`BddVariable`], [`NodeId`]) rather
//! than raw integers, so a variable index and a node id can never be
//! accidentally swapped at a call site.

mod apply;
mod bdd_macro;
mod builder;
mod cache;
mod error;
mod eval;
mod id;
mod iter;
mod node;
#[cfg(test)]
mod properties;
mod serialize;
mod size;
mod terminal;
mod variable;

pub use cache::{BddCache, BddCacheBuilder};
pub use error::BddError;
pub use eval::{Assignment, BitArrayAssignment, BoolArrayAssignment};
pub use id::{NodeId, NodeType};
pub use iter::{Iter, PartialAssignment};
pub use node::Node;
pub use serialize::WireTerminal;
pub use terminal::Terminal;
pub use variable::BddVariable;
