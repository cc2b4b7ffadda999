use std::{collections::HashMap, hash::Hash};

/// Occurrence count of every distinct symbol in an input sequence.
///
/// Iteration yields symbols in the order they were first seen, which is what
/// makes tree construction (and therefore the generated codes) deterministic.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    /// `(symbol, count)` in first-occurrence order.
    entries: Vec<(S, u64)>,

    /// Index into `entries` for each symbol.
    index: HashMap<S, usize>,
}

impl<S: Clone + Eq + Hash> FrequencyTable<S> {
    pub fn count(symbols: impl IntoIterator<Item = S>) -> Self {
        let mut entries: Vec<(S, u64)> = vec![];
        let mut index: HashMap<S, usize> = HashMap::new();

        for symbol in symbols {
            match index.get(&symbol) {
                Some(&i) => entries[i].1 += 1,
                None => {
                    index.insert(symbol.clone(), entries.len());
                    entries.push((symbol, 1));
                }
            }
        }

        Self { entries, index }
    }

    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.index.get(symbol).map(|&i| self.entries[i].1)
    }
}

impl<S> FrequencyTable<S> {
    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the counted input.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> + '_ {
        self.entries.iter().map(|(s, n)| (s, *n))
    }
}
