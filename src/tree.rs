use std::{cmp::Reverse, collections::BinaryHeap, fmt::Debug, hash::Hash};

use crate::{frequency::FrequencyTable, CodecError, Result};

/// A node of a Huffman tree.
///
/// Internal nodes always have exactly two children, and their weight is the
/// sum of their children's weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn merge(left: Self, right: Self) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Heap entry. Ordered by `(weight, seq)` only; `seq` is unique, so two
/// entries never compare equal and ties between equal weights are broken by
/// insertion order.
struct Pending<S> {
    weight: u64,
    seq: usize,
    node: Node<S>,
}

impl<S> PartialEq for Pending<S> {
    fn eq(&self, other: &Self) -> bool {
        (self.weight, self.seq) == (other.weight, other.seq)
    }
}

impl<S> Eq for Pending<S> {}

impl<S> PartialOrd for Pending<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Pending<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.weight, self.seq).cmp(&(other.weight, other.seq))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Node<S>,
}

impl<S: Clone + Eq + Hash + Debug> HuffmanTree<S> {
    /// Build the tree by repeatedly merging the two lightest nodes.
    ///
    /// Leaves are queued in first-occurrence order, and each merged node gets
    /// the next sequence number, so the shape only depends on the input.
    pub fn from_frequencies(frequencies: &FrequencyTable<S>) -> Result<Self> {
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        let mut seq = 0;
        for (symbol, weight) in frequencies.iter() {
            let node = Node::Leaf {
                symbol: symbol.clone(),
                weight,
            };
            heap.push(Reverse(Pending { weight, seq, node }));
            seq += 1;
        }

        loop {
            let Reverse(first) = heap.pop().ok_or(CodecError::EmptyInput)?;
            let Reverse(second) = match heap.pop() {
                Some(second) => second,
                None => {
                    let tree = HuffmanTree { root: first.node };
                    log::trace!("huffman tree: {tree:?}");
                    return Ok(tree);
                }
            };

            // The lighter node goes left.
            let node = Node::merge(first.node, second.node);
            let weight = node.weight();
            heap.push(Reverse(Pending { weight, seq, node }));
            seq += 1;
        }
    }
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// Total weight, i.e. the length of the input the tree was built from.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Depth-first walk yielding every node with its depth.
    pub fn walk(&self) -> impl Iterator<Item = (&Node<S>, usize)> + '_ {
        let mut stack = vec![(&self.root, 0)];
        std::iter::from_fn(move || {
            let (node, depth) = stack.pop()?;
            if let Node::Internal { left, right, .. } = node {
                stack.push((right, depth + 1));
                stack.push((left, depth + 1));
            }
            Some((node, depth))
        })
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::{
        rand_core::{RngCore, SeedableRng},
        ChaCha8Rng,
    };
    use test_case::test_case;

    use super::*;

    fn tree(input: &str) -> HuffmanTree<char> {
        HuffmanTree::from_frequencies(&FrequencyTable::count(input.chars())).unwrap()
    }

    fn assert_weights<S>(tree: &HuffmanTree<S>) {
        for (node, _) in tree.walk() {
            if let Node::Internal {
                weight,
                left,
                right,
            } = node
            {
                assert_eq!(*weight, left.weight() + right.weight());
            }
        }
    }

    #[test_case("a")]
    #[test_case("aaaa")]
    #[test_case("abracadabra")]
    #[test_case("the quick brown fox jumps over the lazy dog")]
    fn weight_invariant(input: &str) {
        let tree = tree(input);
        assert_eq!(tree.weight(), input.chars().count() as u64);
        assert_weights(&tree);
    }

    #[test]
    fn random_weight_invariant() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..50 {
            let mut input = vec![0u8; (rng.next_u32() % 500 + 1) as usize];
            rng.fill_bytes(&mut input);
            // Skew the distribution so the tree is lopsided.
            input.iter_mut().for_each(|b| *b = b.leading_zeros() as u8);

            let freq = FrequencyTable::count(input.iter().copied());
            let tree = HuffmanTree::from_frequencies(&freq).unwrap();
            assert_eq!(tree.weight(), input.len() as u64);
            assert_weights(&tree);
        }
    }

    #[test]
    fn single_symbol_is_a_leaf() {
        let tree = tree("zzz");
        assert_eq!(
            tree.root(),
            &Node::Leaf {
                symbol: 'z',
                weight: 3
            }
        );
    }

    #[test]
    fn empty_input() {
        let freq = FrequencyTable::<char>::count([]);
        assert_eq!(
            HuffmanTree::from_frequencies(&freq),
            Err(CodecError::EmptyInput)
        );
    }

    #[test]
    fn ties_broken_by_first_occurrence() {
        // All weights equal: 'b' and 'a' merge first, in that order.
        let tree = tree("bacd");
        let Node::Internal { left, right, .. } = tree.root() else {
            panic!("expected internal root");
        };
        let Node::Internal { left: ll, right: lr, .. } = left.as_ref() else {
            panic!("expected internal left child");
        };
        assert_eq!(ll.as_ref(), &Node::Leaf { symbol: 'b', weight: 1 });
        assert_eq!(lr.as_ref(), &Node::Leaf { symbol: 'a', weight: 1 });
        assert_eq!(right.weight(), 2);
    }

    #[test]
    fn lighter_node_goes_left() {
        let tree = tree("aaab");
        let Node::Internal { left, right, .. } = tree.root() else {
            panic!("expected internal root");
        };
        assert_eq!(left.as_ref(), &Node::Leaf { symbol: 'b', weight: 1 });
        assert_eq!(right.as_ref(), &Node::Leaf { symbol: 'a', weight: 3 });
    }
}
