//! Reachability and memory-footprint accounting.

use std::mem::size_of;

use fxhash::FxHashSet;

use crate::id::NodeId;
use crate::node::{Node, NonTerminalNode};
use crate::terminal::Terminal;
use crate::BddCache;

impl<T: Terminal> BddCache<T> {
    /// The number of distinct nonterminal nodes reachable from `root`,
    /// following each node at most once.
    ///
    /// Terminals are not counted: a BDD with three nonterminal nodes sharing
    /// the `FALSE`/`TRUE` terminals has a reachable count of three, not
    /// five, matching [`BddCache::memory_size`]'s use of this count as "how
    /// many node records this BDD occupies".
    pub fn reachable_count(&self, root: NodeId) -> usize {
        let mut visited: FxHashSet<NodeId> = FxHashSet::default();
        let mut stack = vec![root];
        let mut count = 0;

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            if let Node::NonTerminal { low, high, .. } = self.node(id) {
                count += 1;
                stack.push(low);
                stack.push(high);
            }
        }

        count
    }

    /// The number of bytes occupied by the nonterminal nodes reachable from
    /// `root`, as if they were stored contiguously and nothing else.
    pub fn memory_size(&self, root: NodeId) -> usize {
        self.reachable_count(root) * size_of::<NonTerminalNode>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::BddVariable;

    #[test]
    fn reachable_count_excludes_terminals() {
        let mut cache: BddCache<bool> = BddCache::new();
        let f = cache.terminal(false);
        let t = cache.terminal(true);
        let x1 = cache.nonterminal(BddVariable::new(1), f, t);
        let not_x1 = cache.nonterminal(BddVariable::new(1), t, f);
        let root = cache.nonterminal(BddVariable::new(0), x1, not_x1);

        assert_eq!(cache.reachable_count(root), 3);
    }

    #[test]
    fn reachable_count_of_a_terminal_root_is_zero() {
        let mut cache: BddCache<bool> = BddCache::new();
        let t = cache.terminal(true);
        assert_eq!(cache.reachable_count(t), 0);
    }

    #[test]
    fn memory_size_scales_with_reachable_count() {
        let mut cache: BddCache<bool> = BddCache::new();
        let f = cache.terminal(false);
        let t = cache.terminal(true);
        let root = cache.nonterminal(BddVariable::new(0), f, t);

        assert_eq!(
            cache.memory_size(root),
            cache.reachable_count(root) * size_of::<NonTerminalNode>()
        );
    }
}
