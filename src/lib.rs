//! Huffman codebook construction for short symbol sequences.
//!
//! Version 0.1.0
//!
//! Counts the symbols of an input (usually the characters of a word), builds the Huffman merge
//! tree with a reproducible tie-break, and reads the code of every symbol off the tree. The
//! `report` tools print the results as tables.
//!
//! Basic usage of the binary:
//!
//! `$> huffcode abracadabra`
//!
//! From the library:
//!
//! ```
//! use huffcode::huffman_coding::codes::assign_codes;
//! use huffcode::huffman_coding::huffman_code_from_weights::build_tree;
//!
//! let root = build_tree(&[('A', 1), ('B', 1), ('C', 2)]).unwrap();
//! let codes = assign_codes(&root);
//! assert_eq!(codes.get(&'C'), Some("0"));
//! assert_eq!(codes.get(&'A'), Some("10"));
//! ```
//!
pub mod codebook;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use codebook::Codebook;
pub use error::{Error, Result};
