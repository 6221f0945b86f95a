//! Binary (de)serialization of a BDD rooted at a single node.
//!
//! Layout: a 20-byte header (6-byte magic, 2-byte version, 8-byte total
//! length, 4-byte node count, all big-endian) followed by `node_count`
//! 9-byte nonterminal records (1-byte variable, two 4-byte signed child
//! refs). A non-negative ref is a terminal value inlined directly; a
//! negative ref is the bitwise complement of the zero-based index of an
//! earlier record in this same stream. Records are written in post-order,
//! low branch before high branch, so every ref points backwards and the
//! last record is always the root. If the root is itself a terminal,
//! `node_count` is `0` and the header is followed by just that terminal's
//! 4-byte wire value.

use std::collections::HashMap;
use std::io::{Read, Write};

use fxhash::FxHashSet;

use crate::error::BddError;
use crate::id::NodeId;
use crate::terminal::Terminal;
use crate::variable::BddVariable;
use crate::BddCache;

pub(crate) const MAGIC: &[u8; 6] = b"IP set";
pub(crate) const VERSION: u16 = 1;
pub(crate) const HEADER_LEN: usize = 20;
pub(crate) const RECORD_LEN: usize = 9;

/// Terminal domains that can round-trip through the wire format's inline
/// 32-bit slot. Implemented for the same types as [`Terminal`]; kept as a
/// separate trait since a `Terminal` is not required to be representable
/// on the wire (it only needs `Copy + Eq + Hash`).
pub trait WireTerminal: Terminal {
    fn to_wire(self) -> i32;
    fn from_wire(raw: i32) -> Self;
}

impl WireTerminal for bool {
    fn to_wire(self) -> i32 {
        if self {
            1
        } else {
            0
        }
    }

    fn from_wire(raw: i32) -> Self {
        raw != 0
    }
}

impl WireTerminal for i32 {
    fn to_wire(self) -> i32 {
        self
    }

    fn from_wire(raw: i32) -> Self {
        raw
    }
}

enum Frame {
    Enter(NodeId),
    Emit(NodeId),
}

impl<T: WireTerminal> BddCache<T> {
    /// Serializes the BDD rooted at `root` to the binary wire format and
    /// writes it to `sink`.
    pub fn save<W: Write>(&self, sink: &mut W, root: NodeId) -> Result<(), BddError> {
        sink.write_all(&self.encode(root))?;
        Ok(())
    }

    fn encode(&self, root: NodeId) -> Vec<u8> {
        let mut records: Vec<(u8, i32, i32)> = Vec::new();
        let mut assigned: HashMap<NodeId, i32> = HashMap::new();
        let mut pending: FxHashSet<NodeId> = FxHashSet::default();
        let mut stack = vec![Frame::Enter(root)];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(id) => {
                    if id.is_terminal() || assigned.contains_key(&id) || !pending.insert(id) {
                        continue;
                    }
                    let (_, low, high) = self.nonterminal_fields(id);
                    stack.push(Frame::Emit(id));
                    // Pushed so `Enter(low)` is on top and pops first: the
                    // low subtree is fully emitted before the high subtree,
                    // matching the mandated low-first post-order.
                    stack.push(Frame::Enter(high));
                    stack.push(Frame::Enter(low));
                }
                Frame::Emit(id) => {
                    let (variable, low, high) = self.nonterminal_fields(id);
                    if cfg!(shields_up) && variable.index() > u8::MAX as u32 {
                        panic!("variable index does not fit the wire format's 1-byte field");
                    }
                    let low_ref = self.wire_ref(low, &assigned);
                    let high_ref = self.wire_ref(high, &assigned);
                    let index = records.len() as i32;
                    records.push((variable.index() as u8, low_ref, high_ref));
                    assigned.insert(id, index);
                }
            }
        }

        let body_len = if records.is_empty() {
            4
        } else {
            records.len() * RECORD_LEN
        };
        let total_len = HEADER_LEN + body_len;

        let mut out = Vec::with_capacity(total_len);
        out.extend_from_slice(MAGIC);
        out.extend_from_slice(&VERSION.to_be_bytes());
        out.extend_from_slice(&(total_len as u64).to_be_bytes());
        out.extend_from_slice(&(records.len() as u32).to_be_bytes());

        if records.is_empty() {
            let value = *self.terminal_value(root);
            out.extend_from_slice(&value.to_wire().to_be_bytes());
        } else {
            for (variable, low_ref, high_ref) in records {
                out.push(variable);
                out.extend_from_slice(&low_ref.to_be_bytes());
                out.extend_from_slice(&high_ref.to_be_bytes());
            }
        }

        out
    }

    fn wire_ref(&self, id: NodeId, assigned: &HashMap<NodeId, i32>) -> i32 {
        if id.is_terminal() {
            self.terminal_value(id).to_wire()
        } else {
            !assigned[&id]
        }
    }

    /// Reads a BDD previously written by [`BddCache::save`] from `source`,
    /// interning every node it contains into `self`.
    pub fn load<R: Read>(&mut self, source: &mut R) -> Result<NodeId, BddError> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;
        self.decode(&bytes)
    }

    fn decode(&mut self, bytes: &[u8]) -> Result<NodeId, BddError> {
        if bytes.len() < HEADER_LEN {
            return Err(BddError::Truncated((HEADER_LEN - bytes.len()) as u32));
        }
        if &bytes[0..6] != MAGIC {
            return Err(BddError::BadMagic);
        }
        let version = u16::from_be_bytes([bytes[6], bytes[7]]);
        if version != VERSION {
            return Err(BddError::UnsupportedVersion(version));
        }
        let declared_len = u64::from_be_bytes(bytes[8..16].try_into().unwrap());
        if declared_len != bytes.len() as u64 {
            return Err(BddError::LengthMismatch {
                declared: declared_len,
                actual: bytes.len() as u64,
            });
        }
        let node_count = u32::from_be_bytes(bytes[16..20].try_into().unwrap()) as usize;

        if node_count == 0 {
            let rest = &bytes[HEADER_LEN..];
            if rest.len() < 4 {
                return Err(BddError::Truncated((4 - rest.len()) as u32));
            }
            let raw = i32::from_be_bytes(rest[0..4].try_into().unwrap());
            return Ok(self.terminal(T::from_wire(raw)));
        }

        let body = &bytes[HEADER_LEN..];
        let needed = node_count * RECORD_LEN;
        if body.len() < needed {
            return Err(BddError::Truncated((needed - body.len()) as u32));
        }

        let mut materialized: Vec<NodeId> = Vec::with_capacity(node_count);
        for i in 0..node_count {
            let record = &body[i * RECORD_LEN..(i + 1) * RECORD_LEN];
            let variable = record[0] as u32;
            let low_raw = i32::from_be_bytes(record[1..5].try_into().unwrap());
            let high_raw = i32::from_be_bytes(record[5..9].try_into().unwrap());

            let low = self.resolve_ref(low_raw, &materialized)?;
            let high = self.resolve_ref(high_raw, &materialized)?;
            materialized.push(self.nonterminal(BddVariable::new(variable), low, high));
        }

        Ok(materialized[node_count - 1])
    }

    fn resolve_ref(&mut self, raw: i32, materialized: &[NodeId]) -> Result<NodeId, BddError> {
        if raw >= 0 {
            Ok(self.terminal(T::from_wire(raw)))
        } else {
            let index = (!raw) as usize;
            materialized
                .get(index)
                .copied()
                .ok_or(BddError::DanglingReference(raw))
        }
    }
}
