use std::{collections::HashMap, fmt::Debug, hash::Hash};

use crate::{
    frequency::FrequencyTable,
    tree::{HuffmanTree, Node},
};

/// Code assigned to the only symbol of a one-leaf tree.
///
/// The root-to-leaf path is empty there, and an empty code would never let
/// the decoder advance.
const LONE_LEAF_CODE: &str = "0";

/// Paired symbol -> code and code -> symbol maps.
///
/// The two maps are exact inverses, and the codes are prefix-free since each
/// is a distinct root-to-leaf path of a strict binary tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Eq + Hash> {
    sym_to_code: HashMap<S, String>,
    code_to_sym: HashMap<String, S>,

    /// Symbols in tree order (left subtree first).
    order: Vec<S>,
}

impl<S: Clone + Eq + Hash + Debug> CodeTable<S> {
    /// Collect the branch labels along every root-to-leaf path, `'0'` for
    /// left and `'1'` for right.
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        let mut sym_to_code = HashMap::new();
        let mut code_to_sym = HashMap::new();
        let mut order = vec![];

        let mut stack = vec![(tree.root(), String::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => {
                    let code = if path.is_empty() {
                        LONE_LEAF_CODE.to_owned()
                    } else {
                        path
                    };
                    sym_to_code.insert(symbol.clone(), code.clone());
                    code_to_sym.insert(code, symbol.clone());
                    order.push(symbol.clone());
                }
                Node::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push('1');
                    let mut left_path = path;
                    left_path.push('0');
                    // Left is pushed last so it is visited first.
                    stack.push((right, right_path));
                    stack.push((left, left_path));
                }
            }
        }

        let table = Self {
            sym_to_code,
            code_to_sym,
            order,
        };
        log::trace!("code table: {:?}", table.sym_to_code);
        table
    }
}

impl<S: Eq + Hash> CodeTable<S> {
    pub fn code(&self, symbol: &S) -> Option<&str> {
        self.sym_to_code.get(symbol).map(String::as_str)
    }

    pub fn symbol(&self, code: &str) -> Option<&S> {
        self.code_to_sym.get(code)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(symbol, code)` pairs, in order of their codes.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &str)> + '_ {
        self.order
            .iter()
            .map(move |s| (s, self.sym_to_code[s].as_str()))
    }

    pub fn sym_to_code(&self) -> &HashMap<S, String> {
        &self.sym_to_code
    }

    pub fn code_to_sym(&self) -> &HashMap<String, S> {
        &self.code_to_sym
    }

    pub fn max_code_len(&self) -> usize {
        self.code_to_sym.keys().map(String::len).max().unwrap_or(0)
    }

    /// Length of the bit-string for an input with these symbol counts.
    ///
    /// `None` if some counted symbol has no code.
    pub fn encoded_len(&self, frequencies: &FrequencyTable<S>) -> Option<u64> {
        frequencies
            .iter()
            .map(|(s, n)| self.code(s).map(|c| c.len() as u64 * n))
            .sum()
    }

    /// Check that no code is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.code_to_sym.keys().map(String::as_str).collect();
        codes.sort_unstable();
        // After sorting, a code and any code it prefixes are never separated
        // by a code lacking that prefix.
        !codes.iter().any(|c| c.is_empty())
            && codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}
