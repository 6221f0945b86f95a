//! Node identifiers: a packed encoding that distinguishes terminal and
//! nonterminal nodes without a discriminant field.

use std::fmt;

/// Opaque, `Copy` identifier for a node stored in a [`BddCache`](crate::BddCache).
///
/// Non-negative values index the terminal table directly. Negative values are
/// the bit-complement of an index into the nonterminal table, so id `-1`
/// names nonterminal index `0`, `-2` names index `1`, and so on. Two ids
/// compare equal iff they name the same node - this equality is the whole
/// crate's canonicality contract, so `NodeId` derives the obvious traits and
/// nothing else is allowed to construct one outside of this crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(i32);

/// Which of the two node kinds an id refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeType {
    Terminal,
    NonTerminal,
}

impl NodeId {
    pub(crate) fn from_terminal_index(index: usize) -> NodeId {
        NodeId(index as i32)
    }

    pub(crate) fn from_nonterminal_index(index: usize) -> NodeId {
        NodeId(!(index as i32))
    }

    /// The raw signed encoding used both internally and by the on-disk
    /// format's child references.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Build an id directly from its raw wire/internal encoding.
    ///
    /// Only meaningful together with a cache that actually assigned this raw
    /// value; mostly useful for the serializer.
    pub(crate) fn from_raw(raw: i32) -> NodeId {
        NodeId(raw)
    }

    pub fn node_type(self) -> NodeType {
        if self.0 >= 0 {
            NodeType::Terminal
        } else {
            NodeType::NonTerminal
        }
    }

    pub fn is_terminal(self) -> bool {
        self.0 >= 0
    }

    pub fn is_nonterminal(self) -> bool {
        self.0 < 0
    }

    pub(crate) fn terminal_index(self) -> usize {
        if cfg!(shields_up) && self.is_nonterminal() {
            panic!("terminal_index called on a nonterminal id");
        }
        self.0 as usize
    }

    pub(crate) fn nonterminal_index(self) -> usize {
        if cfg!(shields_up) && self.is_terminal() {
            panic!("nonterminal_index called on a terminal id");
        }
        (!self.0) as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
