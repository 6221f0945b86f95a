use crate::id::NodeId;
use crate::variable::BddVariable;

/// **(internal)** The stored triple behind a nonterminal id: its
/// conditioning variable and its two branches.
///
/// This is the key hash-consed by the unique table; it derives
/// `Hash`/`Eq` structurally so that two constructions of the same triple
/// collide in the table and share an id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NonTerminalNode {
    pub variable: BddVariable,
    pub low: NodeId,
    pub high: NodeId,
}

/// A read-only view of a node's contents, returned by [`crate::BddCache::node`].
#[derive(Copy, Clone, Debug)]
pub enum Node<'a, T> {
    Terminal(&'a T),
    NonTerminal {
        variable: BddVariable,
        low: NodeId,
        high: NodeId,
    },
}

impl<'a, T> Node<'a, T> {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Node::Terminal(_))
    }
}
