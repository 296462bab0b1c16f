//! The huffman module builds the code tree and derives the codebook from it.
//!
//! Construction always merges the two lightest nodes. When several nodes share a weight, the one
//! that has been waiting longest wins: leaves in the order they were supplied, then merged nodes in
//! the order they were created. Any input therefore produces one reproducible tree, and the same
//! code lengths for tied symbols on every run.
//!
//! Codes are read off the tree with left edges as 0 and right edges as 1. There is no bitstream
//! packing and no decoder here, only the codebook.
//!

pub mod codes;
pub mod huffman;
pub mod huffman_code_from_weights;
