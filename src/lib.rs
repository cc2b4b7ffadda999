//! Huffman prefix coding of symbol sequences.
//!
//! A [`Codec`] counts the symbols of a sample sequence, builds a Huffman tree
//! from the counts, and derives a prefix-free code for each symbol. Encoding
//! produces a bit-string made of `'0'` and `'1'` characters; decoding reverses
//! it.
//!
//! ```
//! use huffman_codec::Codec;
//!
//! let mut codec = Codec::new();
//! codec.build("abracadabra".chars())?;
//! let bits = codec.encode("abracadabra".chars())?;
//! assert_eq!(codec.decode_to_string(&bits)?, "abracadabra");
//! # Ok::<(), huffman_codec::CodecError>(())
//! ```

mod codec;
mod decoder;
mod encoder;
mod errors;

pub mod code_table;
pub mod frequency;
pub mod stats;
pub mod tree;

pub use crate::code_table::CodeTable;
pub use crate::codec::Codec;
pub use crate::decoder::decode;
pub use crate::encoder::encode;
pub use crate::errors::{CodecError, Result};
pub use crate::frequency::FrequencyTable;
pub use crate::stats::Stats;
pub use crate::tree::HuffmanTree;
