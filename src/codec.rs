use std::{collections::HashMap, fmt::Debug, hash::Hash, sync::Arc};

use crate::{
    code_table::CodeTable, decoder, encoder, frequency::FrequencyTable, tree::HuffmanTree,
    CodecError, Result,
};

/// A Huffman codec over symbols of type `S`.
///
/// [`build`] derives a code table from a sample sequence; [`encode`] and
/// [`decode`] then only read that table. The table is an immutable value that
/// each `build` swaps out wholesale. Callers sharing one codec across threads
/// must serialize `build` against the other operations themselves.
///
/// [`build`]: Codec::build
/// [`encode`]: Codec::encode
/// [`decode`]: Codec::decode
#[derive(Debug, Clone)]
pub struct Codec<S: Eq + Hash = char> {
    table: Option<Arc<CodeTable<S>>>,
}

impl<S: Eq + Hash> Default for Codec<S> {
    fn default() -> Self {
        Self { table: None }
    }
}

impl<S: Clone + Eq + Hash + Debug> Codec<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fresh code table from `symbols`, replacing the current one.
    ///
    /// An empty sequence clears the current table and fails with
    /// [`CodecError::EmptyInput`]; `encode` and `decode` then refuse to run
    /// until a later `build` succeeds.
    pub fn build(&mut self, symbols: impl IntoIterator<Item = S>) -> Result<()> {
        let frequencies = FrequencyTable::count(symbols);
        if frequencies.is_empty() {
            log::debug!("refusing to build from empty input; clearing code table");
            self.table = None;
            return Err(CodecError::EmptyInput);
        }
        log::debug!(
            "building code table: {} distinct symbols, {} total",
            frequencies.len(),
            frequencies.total()
        );

        let tree = HuffmanTree::from_frequencies(&frequencies)?;
        let table = CodeTable::from_tree(&tree);
        debug_assert!(table.is_prefix_free());

        self.table = Some(Arc::new(table));
        Ok(())
    }

    pub fn encode(&self, symbols: impl IntoIterator<Item = S>) -> Result<String> {
        encoder::encode(self.built()?, symbols)
    }

    pub fn decode(&self, bits: &str) -> Result<Vec<S>> {
        decoder::decode(self.built()?, bits)
    }

    /// Snapshot of the symbol -> code mapping; empty until a `build` succeeds.
    pub fn codes(&self) -> HashMap<S, String> {
        self.table
            .as_ref()
            .map(|t| t.sym_to_code().clone())
            .unwrap_or_default()
    }
}

impl<S: Eq + Hash> Codec<S> {
    /// The current code table, if any. Survives later rebuilds of the codec.
    pub fn table(&self) -> Option<Arc<CodeTable<S>>> {
        self.table.clone()
    }

    pub fn is_built(&self) -> bool {
        self.table.is_some()
    }

    fn built(&self) -> Result<&CodeTable<S>> {
        self.table.as_deref().ok_or(CodecError::NotBuilt)
    }
}

impl Codec<char> {
    pub fn decode_to_string(&self, bits: &str) -> Result<String> {
        self.decode(bits).map(|chars| chars.into_iter().collect())
    }
}
