//! Derives the codebook from a finished tree.

use log::debug;
use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::huffman::{Node, NodeData};
use crate::tools::freq_count::FrequencyTable;

/// Symbol to code string ("0"/"1" edge labels from the root down to the symbol's leaf).
/// Built once by `assign_codes` and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Hash + Eq> {
    codes: FxHashMap<S, String>,
}

impl<S: Hash + Eq> CodeTable<S> {
    /// The code of `sym`, if it has a leaf in the tree.
    pub fn get(&self, sym: &S) -> Option<&str> {
        self.codes.get(sym).map(String::as_str)
    }

    /// Code length in bits.
    pub fn code_len(&self, sym: &S) -> Option<usize> {
        self.codes.get(sym).map(String::len)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &str)> {
        self.codes.iter().map(|(sym, code)| (sym, code.as_str()))
    }

    /// Longest code in the table.
    pub fn max_len(&self) -> usize {
        self.codes.values().map(String::len).max().unwrap_or(0)
    }

    /// True when no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes = self
            .codes
            .values()
            .map(String::as_str)
            .collect::<Vec<&str>>();
        // After sorting, a prefix always sorts directly before some code it prefixes
        codes.sort_unstable();
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}

impl<S: Hash + Eq + Clone> CodeTable<S> {
    /// Bits needed to write every symbol counted in `freqs` with this table.
    /// Symbols with no code contribute nothing.
    pub fn encoded_bits(&self, freqs: &FrequencyTable<S>) -> u64 {
        freqs
            .first_occurrence()
            .iter()
            .filter_map(|sym| self.code_len(sym).map(|len| freqs.count(sym) * len as u64))
            .sum()
    }
}

/// Walk the tree depth first, left edges adding "0" and right edges adding "1", and record
/// the path to every leaf. A root that is itself a leaf gets the empty code.
pub fn assign_codes<S: Hash + Eq + Clone + Debug>(root: &Node<S>) -> CodeTable<S> {
    let mut codes = FxHashMap::default();
    let mut prefix = String::with_capacity(root.depth as usize);
    return_leaves(root, &mut prefix, &mut codes);
    debug!("Code table: {:?}", codes);
    CodeTable { codes }
}

/// Recursively collect the leaves below `node`. `prefix` holds the path to `node` and is
/// restored before returning.
fn return_leaves<S: Hash + Eq + Clone>(
    node: &Node<S>,
    prefix: &mut String,
    codes: &mut FxHashMap<S, String>,
) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            prefix.push('0');
            return_leaves(left, prefix, codes);
            prefix.pop();
            prefix.push('1');
            return_leaves(right, prefix, codes);
            prefix.pop();
        }
        NodeData::Leaf(sym) => {
            let previous = codes.insert(sym.clone(), prefix.clone());
            debug_assert!(previous.is_none(), "symbol appears in more than one leaf");
        }
    };
}

#[cfg(test)]
mod test {
    use super::assign_codes;
    use crate::huffman_coding::huffman::Node;
    use crate::huffman_coding::huffman_code_from_weights::build_tree;
    use crate::tools::freq_count::FrequencyTable;

    #[test]
    fn uniform_codes_test() {
        let root = build_tree(&[('A', 1), ('B', 1), ('C', 1), ('D', 1)]).unwrap();
        let codes = assign_codes(&root);
        assert_eq!(codes.get(&'A'), Some("00"));
        assert_eq!(codes.get(&'B'), Some("01"));
        assert_eq!(codes.get(&'C'), Some("10"));
        assert_eq!(codes.get(&'D'), Some("11"));
        assert_eq!(codes.len(), 4);
    }

    #[test]
    fn non_uniform_codes_test() {
        let root = build_tree(&[('A', 1), ('B', 1), ('C', 2)]).unwrap();
        let codes = assign_codes(&root);
        assert_eq!(codes.get(&'A'), Some("10"));
        assert_eq!(codes.get(&'B'), Some("11"));
        assert_eq!(codes.get(&'C'), Some("0"));
        assert_eq!(codes.max_len(), 2);
    }

    #[test]
    fn single_symbol_code_test() {
        let codes = assign_codes(&Node::leaf('X', 5));
        assert_eq!(codes.get(&'X'), Some(""));
        assert_eq!(codes.code_len(&'X'), Some(0));
        assert_eq!(codes.len(), 1);
    }

    #[test]
    fn repeated_calls_test() {
        let root = build_tree(&[('A', 1), ('B', 2)]).unwrap();
        let first = assign_codes(&root);
        let second = assign_codes(&root);
        assert_eq!(first, second);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn prefix_free_test() {
        let freqs = FrequencyTable::from("ABRACADABRA");
        let root = build_tree(&freqs.weighted_symbols()).unwrap();
        let codes = assign_codes(&root);
        assert!(codes.is_prefix_free());
        assert_eq!(codes.len(), freqs.len());
        for (sym, code) in codes.iter() {
            assert_eq!(root.leaf_at(code), Some(sym));
        }
    }

    #[test]
    fn encoded_bits_test() {
        // A=5 gets "0", B, R, C and D all get three bit codes
        let freqs = FrequencyTable::from("ABRACADABRA");
        let root = build_tree(&freqs.weighted_symbols()).unwrap();
        let codes = assign_codes(&root);
        let expected = freqs
            .first_occurrence()
            .iter()
            .map(|sym| freqs.count(sym) * codes.code_len(sym).unwrap() as u64)
            .sum::<u64>();
        assert_eq!(codes.encoded_bits(&freqs), expected);
        assert_eq!(codes.encoded_bits(&freqs), 23);
    }
}
