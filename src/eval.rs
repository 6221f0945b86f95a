//! Assignment types and BDD evaluation.

use crate::id::NodeId;
use crate::node::Node;
use crate::terminal::Terminal;
use crate::variable::BddVariable;
use crate::BddCache;

/// Something that can answer "what is variable `v` set to?" - the input to
/// [`BddCache::evaluate`].
///
/// A trait rather than a single concrete type so callers can evaluate
/// directly against whatever representation they already have (a packed bit
/// array, a `Vec<bool>`, a closure over some other structure) without an
/// intermediate copy.
pub trait Assignment {
    fn get(&self, variable: BddVariable) -> bool;
}

/// An assignment backed by a big-endian bit array: variable `v` is bit
/// `v.index()`, counting from the most significant bit of `bytes[0]`.
///
/// This is the bit order the reference wire format and test suite use for
/// packed variable assignments.
pub struct BitArrayAssignment<'a> {
    bytes: &'a [u8],
}

impl<'a> BitArrayAssignment<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        BitArrayAssignment { bytes }
    }
}

impl<'a> Assignment for BitArrayAssignment<'a> {
    fn get(&self, variable: BddVariable) -> bool {
        let index = variable.index() as usize;
        let byte = self.bytes[index / 8];
        let bit = 7 - (index % 8);
        (byte >> bit) & 1 == 1
    }
}

/// An assignment backed by one `bool` per variable.
pub struct BoolArrayAssignment<'a> {
    values: &'a [bool],
}

impl<'a> BoolArrayAssignment<'a> {
    pub fn new(values: &'a [bool]) -> Self {
        BoolArrayAssignment { values }
    }
}

impl<'a> Assignment for BoolArrayAssignment<'a> {
    fn get(&self, variable: BddVariable) -> bool {
        self.values[variable.index() as usize]
    }
}

impl<T: Terminal> BddCache<T> {
    /// Walks from `root` to a terminal by following, at each nonterminal,
    /// the branch `assignment` selects for that node's variable, and
    /// returns the terminal value reached.
    pub fn evaluate<A: Assignment>(&self, root: NodeId, assignment: &A) -> T {
        let mut current = root;
        loop {
            match self.node(current) {
                Node::Terminal(value) => return *value,
                Node::NonTerminal {
                    variable,
                    low,
                    high,
                } => {
                    current = if assignment.get(variable) { high } else { low };
                }
            }
        }
    }
}
