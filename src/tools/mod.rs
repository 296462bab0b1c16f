//! The tools module holds the helpers around the huffman core.
//!
//! The tools are:
//! - cli: Command line interface and input reading for huffcode.
//! - freq_count: Frequency count of an input sequence.
//! - report: Text tables describing a finished codebook.
//!
pub mod cli;
pub mod freq_count;
pub mod report;
