//! Runs the whole pipeline for one input sequence: count, sort, build, assign.

use log::{debug, info};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;
use crate::huffman_coding::codes::{assign_codes, CodeTable};
use crate::huffman_coding::huffman::Node;
use crate::huffman_coding::huffman_code_from_weights::build_tree;
use crate::tools::freq_count::FrequencyTable;

/// Everything derived from one input sequence.
#[derive(Debug, Clone)]
pub struct Codebook<S: Hash + Eq> {
    pub freqs: FrequencyTable<S>,
    /// The tree builder's input, sorted by ascending weight
    pub weighted: Vec<(S, u64)>,
    pub root: Node<S>,
    pub codes: CodeTable<S>,
}

impl<S: Hash + Eq + Clone + Debug> Codebook<S> {
    /// Build the codebook for `symbols`. An empty sequence gives `Error::EmptyInput`.
    pub fn new(symbols: &[S]) -> Result<Self> {
        let freqs = FrequencyTable::new(symbols.iter().cloned());
        let weighted = freqs.weighted_symbols();
        debug!("Weighted symbols: {:?}", weighted);

        let root = build_tree(&weighted)?;
        let codes = assign_codes(&root);

        info!(
            "{} symbols ({} distinct) encode to {} bits, longest code {} bits",
            freqs.total(),
            freqs.len(),
            codes.encoded_bits(&freqs),
            codes.max_len()
        );
        Ok(Codebook {
            freqs,
            weighted,
            root,
            codes,
        })
    }

    /// Total encoded size of the input in bits.
    pub fn encoded_bits(&self) -> u64 {
        self.codes.encoded_bits(&self.freqs)
    }
}
