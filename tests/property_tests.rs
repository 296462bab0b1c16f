use huffcode::huffman_coding::codes::assign_codes;
use huffcode::huffman_coding::huffman::Node;
use huffcode::huffman_coding::huffman_code_from_weights::build_tree;
use huffcode::tools::freq_count::FrequencyTable;
use huffcode::Codebook;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// The merge loop written out literally: stable sort the working list, take the first two,
/// append their parent at the end.
fn build_by_resort(weighted: &[(usize, u64)]) -> Node<usize> {
    let mut nodes = weighted
        .iter()
        .map(|&(sym, weight)| Node::leaf(sym, weight))
        .collect::<Vec<Node<usize>>>();
    while nodes.len() > 1 {
        nodes.sort_by_key(|node| node.weight);
        let left = nodes.remove(0);
        let right = nodes.remove(0);
        nodes.push(Node::merge(left, right));
    }
    nodes.remove(0)
}

/// Walk the tree bit by bit, restarting at the root after every leaf.
fn walk_bits(root: &Node<char>, bits: &str) -> Vec<char> {
    let mut out = vec![];
    let mut node = root;
    for bit in bits.chars() {
        let (left, right) = node.children().unwrap();
        node = if bit == '0' { left } else { right };
        if let Some(sym) = node.symbol() {
            out.push(*sym);
            node = root;
        }
    }
    out
}

proptest! {
    #[test]
    fn heap_matches_resort(weights in prop::collection::vec(0..6u64, 1..16)) {
        let mut weighted = weights.into_iter().enumerate().collect::<Vec<(usize, u64)>>();
        weighted.sort_by_key(|&(_, weight)| weight);
        prop_assert_eq!(build_tree(&weighted).unwrap(), build_by_resort(&weighted));
    }

    #[test]
    fn heap_matches_resort_unsorted(weights in prop::collection::vec(0..6u64, 1..16)) {
        let weighted = weights.into_iter().enumerate().collect::<Vec<(usize, u64)>>();
        prop_assert_eq!(build_tree(&weighted).unwrap(), build_by_resort(&weighted));
    }

    #[test]
    fn tree_invariants(word in "[A-H]{1,60}") {
        let freqs = FrequencyTable::from(word.as_str());
        let weighted = freqs.weighted_symbols();
        let root = build_tree(&weighted).unwrap();

        // weight conservation
        prop_assert!(root.is_well_formed());
        prop_assert_eq!(root.weight, word.len() as u64);

        // leaf completeness
        let codes = assign_codes(&root);
        prop_assert_eq!(root.leaf_count(), freqs.len());
        let leaves = codes.iter().map(|(sym, _)| *sym).collect::<BTreeSet<char>>();
        let input = word.chars().collect::<BTreeSet<char>>();
        prop_assert_eq!(leaves, input);

        // prefix freedom, and every code leads back to its symbol
        prop_assert!(codes.is_prefix_free());
        for (sym, code) in codes.iter() {
            prop_assert_eq!(root.leaf_at(code), Some(sym));
            prop_assert!(code.len() as u32 <= root.depth);
        }
    }

    #[test]
    fn bits_walk_back_to_word(word in "[A-E]{2,40}") {
        let symbols = word.chars().collect::<Vec<char>>();
        let book = Codebook::new(&symbols).unwrap();
        prop_assume!(book.freqs.len() > 1);

        let bits = symbols
            .iter()
            .map(|sym| book.codes.get(sym).unwrap())
            .collect::<String>();
        prop_assert_eq!(bits.len() as u64, book.encoded_bits());
        prop_assert_eq!(walk_bits(&book.root, &bits), symbols);
    }
}

#[test]
fn specified_trees() {
    let root = build_tree(&[('A', 1), ('B', 1), ('C', 1), ('D', 1)]).unwrap();
    let codes = assign_codes(&root);
    assert_eq!(codes.get(&'A'), Some("00"));
    assert_eq!(codes.get(&'B'), Some("01"));
    assert_eq!(codes.get(&'C'), Some("10"));
    assert_eq!(codes.get(&'D'), Some("11"));

    let codes = assign_codes(&build_tree(&[('A', 1), ('B', 1), ('C', 2)]).unwrap());
    assert_eq!(codes.get(&'A'), Some("10"));
    assert_eq!(codes.get(&'B'), Some("11"));
    assert_eq!(codes.get(&'C'), Some("0"));

    let root = build_tree(&[('X', 5)]).unwrap();
    assert_eq!(root, Node::leaf('X', 5));
    assert_eq!(assign_codes(&root).get(&'X'), Some(""));
}
