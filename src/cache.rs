use std::collections::HashMap;
use std::marker::PhantomData;

use fxhash::FxBuildHasher;

use crate::id::{NodeId, NodeType};
use crate::node::{Node, NonTerminalNode};
use crate::terminal::Terminal;
use crate::variable::BddVariable;

/// Operator tags used to key the binary-operator memo. Keeping a single memo
/// shared by `and`/`or`, tagged by operator, avoids paying for two full hash
/// maps when only one operator is ever used.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum BinOp {
    And,
    Or,
}

/// The node cache: owns the unique table, the terminal table, and the
/// operator memo. Ids issued by a cache are only meaningful for that same
/// cache; nothing in this crate lets you mix ids across two caches.
///
/// There is deliberately just one type here rather than a separate "plain
/// node cache" and "operator engine" split - the operator memo is just more
/// cache-scoped state next to the unique table, and splitting it into a
/// second type would not remove any coupling, only add an extra lifetime to
/// thread through every call site.
pub struct BddCache<T: Terminal> {
    terminals: Vec<T>,
    terminal_index: HashMap<T, NodeId, FxBuildHasher>,
    nonterminals: Vec<NonTerminalNode>,
    nonterminal_index: HashMap<NonTerminalNode, NodeId, FxBuildHasher>,
    pub(crate) bin_memo: HashMap<(BinOp, NodeId, NodeId), NodeId, FxBuildHasher>,
    pub(crate) ite_memo: HashMap<(NodeId, NodeId, NodeId), NodeId, FxBuildHasher>,
}

/// Pre-sizes a [`BddCache`]'s internal tables before any node is created.
pub struct BddCacheBuilder<T: Terminal> {
    nonterminal_capacity: usize,
    _terminal_domain: PhantomData<T>,
}

impl<T: Terminal> BddCacheBuilder<T> {
    /// Reserve space for at least `capacity` distinct nonterminal nodes.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.nonterminal_capacity = capacity;
        self
    }

    pub fn build(self) -> BddCache<T> {
        BddCache {
            terminals: Vec::new(),
            terminal_index: HashMap::with_capacity_and_hasher(4, FxBuildHasher::default()),
            nonterminals: Vec::with_capacity(self.nonterminal_capacity),
            nonterminal_index: HashMap::with_capacity_and_hasher(
                self.nonterminal_capacity,
                FxBuildHasher::default(),
            ),
            bin_memo: HashMap::default(),
            ite_memo: HashMap::default(),
        }
    }
}

impl<T: Terminal> BddCache<T> {
    /// A cache with no capacity hint; tables grow like any `HashMap`/`Vec`.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> BddCacheBuilder<T> {
        BddCacheBuilder {
            nonterminal_capacity: 0,
            _terminal_domain: PhantomData,
        }
    }

    /// Returns the canonical id for `value`, interning it on first request.
    ///
    /// `terminal(v1) == terminal(v2)` iff `v1 == v2` - this is the whole
    /// contract of the terminal table.
    pub fn terminal(&mut self, value: T) -> NodeId {
        if let Some(&id) = self.terminal_index.get(&value) {
            return id;
        }
        let index = self.terminals.len();
        self.terminals.push(value);
        let id = NodeId::from_terminal_index(index);
        self.terminal_index.insert(value, id);
        id
    }

    /// Returns `low` if `low == high` (the non-redundancy rule), otherwise
    /// the canonical id for the `(variable, low, high)` triple, hash-consed
    /// against the unique table.
    pub fn nonterminal(&mut self, variable: BddVariable, low: NodeId, high: NodeId) -> NodeId {
        if low == high {
            return low;
        }

        let key = NonTerminalNode {
            variable,
            low,
            high,
        };
        if let Some(&id) = self.nonterminal_index.get(&key) {
            return id;
        }

        let index = self.nonterminals.len();
        self.nonterminals.push(key);
        let id = NodeId::from_nonterminal_index(index);
        self.nonterminal_index.insert(key, id);
        id
    }

    pub fn node_type(&self, id: NodeId) -> NodeType {
        id.node_type()
    }

    /// A read-only view into the node named by `id`.
    pub fn node(&self, id: NodeId) -> Node<'_, T> {
        match id.node_type() {
            NodeType::Terminal => Node::Terminal(&self.terminals[id.terminal_index()]),
            NodeType::NonTerminal => {
                let n = &self.nonterminals[id.nonterminal_index()];
                Node::NonTerminal {
                    variable: n.variable,
                    low: n.low,
                    high: n.high,
                }
            }
        }
    }

    /// *Pre:* `id` is a terminal id.
    pub fn terminal_value(&self, id: NodeId) -> &T {
        if cfg!(shields_up) && id.is_nonterminal() {
            panic!("terminal_value called on a nonterminal id");
        }
        &self.terminals[id.terminal_index()]
    }

    /// *Pre:* `id` is a nonterminal id.
    pub fn nonterminal_fields(&self, id: NodeId) -> (BddVariable, NodeId, NodeId) {
        if cfg!(shields_up) && id.is_terminal() {
            panic!("nonterminal_fields called on a terminal id");
        }
        let n = &self.nonterminals[id.nonterminal_index()];
        (n.variable, n.low, n.high)
    }

    /// Total number of interned terminal values.
    pub fn terminal_count(&self) -> usize {
        self.terminals.len()
    }

    /// Total number of interned nonterminal triples across the whole cache
    /// (not just those reachable from a particular root - see
    /// [`BddCache::reachable_count`] for that).
    pub fn nonterminal_count(&self) -> usize {
        self.nonterminals.len()
    }
}

impl<T: Terminal> Default for BddCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_is_reduced() {
        let mut cache: BddCache<bool> = BddCache::new();
        let a = cache.terminal(false);
        let b = cache.terminal(false);
        assert_eq!(a, b);
        let c = cache.terminal(true);
        assert_ne!(a, c);
    }

    #[test]
    fn nonterminal_collapses_on_equal_branches() {
        let mut cache: BddCache<bool> = BddCache::new();
        let f = cache.terminal(false);
        let node = cache.nonterminal(BddVariable::new(0), f, f);
        assert_eq!(node, f);
    }

    #[test]
    fn nonterminal_is_hash_consed() {
        let mut cache: BddCache<bool> = BddCache::new();
        let f = cache.terminal(false);
        let t = cache.terminal(true);
        let a = cache.nonterminal(BddVariable::new(0), f, t);
        let b = cache.nonterminal(BddVariable::new(0), f, t);
        assert_eq!(a, b);
        assert_ne!(a, f);
        assert_ne!(a, t);
    }

    #[test]
    fn nonterminal_fields_roundtrip() {
        let mut cache: BddCache<bool> = BddCache::new();
        let f = cache.terminal(false);
        let t = cache.terminal(true);
        let node = cache.nonterminal(BddVariable::new(3), f, t);
        let (variable, low, high) = cache.nonterminal_fields(node);
        assert_eq!(variable, BddVariable::new(3));
        assert_eq!(low, f);
        assert_eq!(high, t);
    }
}
