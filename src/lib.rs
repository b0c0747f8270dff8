//! Static Huffman prefix coding.
//!
//! Builds an optimal prefix code for a byte alphabet weighted by observed
//! frequency, then encodes text into a bit string and decodes bit strings
//! back into text. One-shot and static: frequencies are counted once and
//! the code never adapts.
//!
//! ```rust
//! use prefixcode::{FrequencyTable, Tree};
//!
//! let text = b"aabbbcc";
//! let table = FrequencyTable::count(text.iter().copied());
//! let tree = Tree::build(&table)?;
//! let (encoder, decoder) = tree.into_encoder_decoder_pair();
//!
//! let bits = encoder.encode(text.iter().copied())?;
//! assert_eq!(decoder.decode(&bits)?, text);
//! # Ok::<(), prefixcode::Error>(())
//! ```

pub mod codec;
pub mod error;
pub mod freq;
pub mod report;
pub mod tree;

pub use codec::{Decoder, Encoder, SerializableDecoder, SerializableEncoder};
pub use error::{Error, Result};
pub use freq::FrequencyTable;
pub use report::{symbol_reports, SymbolReport};
pub use tree::{NodeInfo, Tree};
