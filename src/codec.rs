//! Code assignment and the encoder/decoder pair.

use std::collections::{BTreeMap, HashMap};

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::freq::FrequencyTable;
use crate::tree::{Node, NodeKind, Tree};

impl Tree {
    /// Derive the prefix-free code table: the path from the root to each
    /// leaf, reading a left edge as 0 and a right edge as 1.
    ///
    /// A tree whose root is itself a leaf has an empty path; its lone
    /// symbol is assigned the one-bit code `0` instead, so encoding n
    /// repetitions still yields n bits rather than nothing.
    pub fn codes(&self) -> HashMap<u8, BitBox> {
        fn walk(node: &Node, path: &mut BitVec, out: &mut HashMap<u8, BitBox>) {
            match node.kind() {
                NodeKind::Leaf(symbol) => {
                    let code = if path.is_empty() {
                        bitvec![0; 1]
                    } else {
                        path.clone()
                    };
                    out.insert(*symbol, code.into_boxed_bitslice());
                }
                NodeKind::Internal { left, right } => {
                    path.push(false);
                    walk(left, path, out);
                    path.pop();

                    path.push(true);
                    walk(right, path, out);
                    path.pop();
                }
            }
        }

        let mut path = BitVec::new();
        let mut out = HashMap::new();
        walk(self.root(), &mut path, &mut out);
        out
    }

    /// Split the tree into its encoder and decoder halves.
    pub fn into_encoder_decoder_pair(self) -> (Encoder, Decoder) {
        let table = self.codes();

        (
            Encoder { table },
            Decoder {
                root: self.into_root(),
            },
        )
    }
}

/// Encodes symbol streams with the code table derived from a tree.
#[derive(Debug, Clone)]
pub struct Encoder {
    table: HashMap<u8, BitBox>,
}

impl Encoder {
    /// Append each symbol's code to the output, in input order.
    ///
    /// A symbol without a code means the table and the text were not
    /// derived from the same source; this is reported, never papered
    /// over with an empty code.
    pub fn encode(&self, stream: impl Iterator<Item = u8>) -> Result<BitVec> {
        let mut out = BitVec::new();
        for symbol in stream {
            let code = self
                .table
                .get(&symbol)
                .ok_or(Error::UnknownSymbol(symbol))?;
            out.extend_from_bitslice(code);
        }

        Ok(out)
    }

    /// Code assigned to `symbol`, if any.
    pub fn code(&self, symbol: u8) -> Option<&BitSlice> {
        self.table.get(&symbol).map(|code| code.as_bitslice())
    }
}

/// Decodes bit streams by walking the tree it was split from.
#[derive(Debug, Clone)]
pub struct Decoder {
    root: Node,
}

impl Decoder {
    /// Walk from the root, 0 going left and 1 going right; each leaf
    /// emits its symbol and restarts the walk. The stream must end
    /// exactly on a leaf boundary.
    ///
    /// For a single-leaf tree every 0 bit is one symbol; a 1 bit cannot
    /// have been produced by the paired encoder and is rejected as
    /// truncated/corrupt input.
    pub fn decode(&self, input: &BitSlice) -> Result<Vec<u8>> {
        if let NodeKind::Leaf(symbol) = self.root.kind() {
            let mut out = Vec::with_capacity(input.len());
            for bit in input.iter().by_vals() {
                if bit {
                    return Err(Error::TruncatedInput);
                }
                out.push(*symbol);
            }
            return Ok(out);
        }

        let mut out = Vec::new();
        let mut node = &self.root;
        for bit in input.iter().by_vals() {
            if let NodeKind::Internal { left, right } = node.kind() {
                node = if bit { right.as_ref() } else { left.as_ref() };
            }
            if let NodeKind::Leaf(symbol) = node.kind() {
                out.push(*symbol);
                node = &self.root;
            }
        }

        if !std::ptr::eq(node, &self.root) {
            return Err(Error::TruncatedInput);
        }
        Ok(out)
    }
}

/// Serde-friendly mirror of [`Encoder`].
///
/// `BitBox` has no stable serialized form, so each code is stored as its
/// bit length plus the underlying storage words.
#[derive(Serialize, Deserialize)]
pub struct SerializableEncoder {
    table: HashMap<u8, (usize, Box<[usize]>)>,
}

impl From<&Encoder> for SerializableEncoder {
    fn from(other: &Encoder) -> Self {
        Self {
            table: other
                .table
                .iter()
                .map(|(&symbol, code)| {
                    let len = code.len();
                    let storage = code.clone().into_boxed_slice();

                    (symbol, (len, storage))
                })
                .collect(),
        }
    }
}

impl From<SerializableEncoder> for Encoder {
    fn from(other: SerializableEncoder) -> Self {
        Self {
            table: other
                .table
                .into_iter()
                .map(|(symbol, (len, storage))| {
                    let mut code = BitBox::from_boxed_slice(storage).into_bitvec();
                    code.resize(len, false);
                    (symbol, code.into_boxed_bitslice())
                })
                .collect(),
        }
    }
}

/// Serde-friendly mirror of [`Decoder`]: the leaf frequency map.
///
/// Builds are deterministic, so rebuilding from the same counts
/// reproduces the identical tree.
#[derive(Serialize, Deserialize)]
pub struct SerializableDecoder {
    counts: BTreeMap<u8, u64>,
}

impl From<&Decoder> for SerializableDecoder {
    fn from(other: &Decoder) -> Self {
        fn leaves(node: &Node, counts: &mut BTreeMap<u8, u64>) {
            match node.kind() {
                NodeKind::Leaf(symbol) => {
                    counts.insert(*symbol, node.weight());
                }
                NodeKind::Internal { left, right } => {
                    leaves(left, counts);
                    leaves(right, counts);
                }
            }
        }

        let mut counts = BTreeMap::new();
        leaves(&other.root, &mut counts);
        Self { counts }
    }
}

impl TryFrom<SerializableDecoder> for Decoder {
    type Error = Error;

    fn try_from(other: SerializableDecoder) -> Result<Self> {
        let table = FrequencyTable::from_counts(other.counts);
        let tree = Tree::build(&table)?;

        Ok(Self {
            root: tree.into_root(),
        })
    }
}
