//! Text views of a codebook. Every writer takes any `io::Write` so the binary can hand it
//! stdout and tests can hand it a Vec<u8>.

use std::fmt::Display;
use std::hash::Hash;
use std::io::{self, Write};

use crate::codebook::Codebook;
use crate::huffman_coding::codes::CodeTable;
use crate::huffman_coding::huffman::{Node, NodeData};
use crate::tools::freq_count::FrequencyTable;

const RULE: &str = "+---------+---------------------+--------+";

/// The weight-sorted list handed to the tree builder, as a chain of cells.
pub fn write_sorted_list<S: Display, W: Write>(
    out: &mut W,
    weighted: &[(S, u64)],
) -> io::Result<()> {
    writeln!(out, "List sorted by frequency:")?;
    for (sym, weight) in weighted {
        write!(out, "|__{},{}__| -> ", sym, weight)?;
    }
    writeln!(out, "None")
}

/// Indented tree, one node per line: `Root-> ` for the root, then a tab per level
/// and `L-> ` or `R-> ` for children.
pub fn write_tree<S: Display, W: Write>(out: &mut W, root: &Node<S>) -> io::Result<()> {
    writeln!(out, "Huffman tree:")?;
    writeln!(out, "Root-> {}", root)?;
    if let NodeData::Kids(left, right) = &root.node_data {
        write_subtree(out, left, 1, 'L')?;
        write_subtree(out, right, 1, 'R')?;
    }
    Ok(())
}

fn write_subtree<S: Display, W: Write>(
    out: &mut W,
    node: &Node<S>,
    level: usize,
    side: char,
) -> io::Result<()> {
    writeln!(out, "{}{}-> {}", "\t".repeat(level), side, node)?;
    if let NodeData::Kids(left, right) = &node.node_data {
        write_subtree(out, left, level + 1, 'L')?;
        write_subtree(out, right, level + 1, 'R')?;
    }
    Ok(())
}

/// `symbol = code` for each distinct symbol, in first-occurrence order.
pub fn write_codes<S, W>(
    out: &mut W,
    freqs: &FrequencyTable<S>,
    codes: &CodeTable<S>,
) -> io::Result<()>
where
    S: Display + Hash + Eq + Clone,
    W: Write,
{
    writeln!(out, "Huffman code table:")?;
    for sym in freqs.first_occurrence() {
        if let Some(code) = codes.get(sym) {
            writeln!(out, "{} = {}", sym, code)?;
        }
    }
    Ok(())
}

/// Code length for every symbol of the input, repeats included.
pub fn write_length_table<S, W>(out: &mut W, symbols: &[S], codes: &CodeTable<S>) -> io::Result<()>
where
    S: Display + Hash + Eq,
    W: Write,
{
    writeln!(out, "SYMBOL  | HUFFMAN LENGTH")?;
    for sym in symbols {
        if let Some(len) = codes.code_len(sym) {
            writeln!(out, "{:<7} | {}", sym, len)?;
        }
    }
    Ok(())
}

/// Symbol, code length and N_ID (1-based first-occurrence index) per distinct symbol,
/// followed by the N_ID to code listing and the symbols in natural order.
pub fn write_extended_table<S, W>(
    out: &mut W,
    freqs: &FrequencyTable<S>,
    codes: &CodeTable<S>,
) -> io::Result<()>
where
    S: Display + Hash + Eq + Clone + Ord,
    W: Write,
{
    writeln!(out, "| SYMBOL  | HUFFMAN LENGTH      | N_ID   |")?;
    writeln!(out, "{}", RULE)?;
    for (idx, sym) in freqs.first_occurrence().iter().enumerate() {
        if let Some(len) = codes.code_len(sym) {
            writeln!(out, "| {:^7} | {:^19} | {:^6} |", sym, len, idx + 1)?;
            writeln!(out, "{}", RULE)?;
        }
    }

    writeln!(out)?;
    writeln!(out, " LIST NUMBER  | FIRST CODE")?;
    writeln!(out, "+-------------+------------+")?;
    for (idx, sym) in freqs.first_occurrence().iter().enumerate() {
        if let Some(code) = codes.get(sym) {
            writeln!(out, " ({}) -> ({}) | {}", idx + 1, code.len(), code)?;
        }
    }
    writeln!(out, "+-------------+------------+")?;

    writeln!(out)?;
    writeln!(out, "Symbols in lexicographic order:")?;
    for sym in freqs.sorted_symbols() {
        if let Some(code) = codes.get(&sym) {
            writeln!(out, "{} = {}", sym, code)?;
        }
    }
    Ok(())
}

/// One line comparing the encoded size against 8 bits per symbol.
pub fn write_summary<S, W>(out: &mut W, book: &Codebook<S>) -> io::Result<()>
where
    S: Hash + Eq + Clone + std::fmt::Debug,
    W: Write,
{
    let plain = book.freqs.total() * 8;
    writeln!(
        out,
        "Encoded size: {} bits (plain 8-bit: {} bits, longest code: {} bits)",
        book.encoded_bits(),
        plain,
        book.codes.max_len()
    )
}

/// Every view in order, separated by blank lines. The tree view is optional.
pub fn write_report<S, W>(
    out: &mut W,
    symbols: &[S],
    book: &Codebook<S>,
    show_tree: bool,
) -> io::Result<()>
where
    S: Display + Hash + Eq + Clone + Ord + std::fmt::Debug,
    W: Write,
{
    write_sorted_list(out, &book.weighted)?;
    if show_tree {
        writeln!(out)?;
        write_tree(out, &book.root)?;
    }
    writeln!(out)?;
    write_codes(out, &book.freqs, &book.codes)?;
    writeln!(out)?;
    write_length_table(out, symbols, &book.codes)?;
    writeln!(out)?;
    write_extended_table(out, &book.freqs, &book.codes)?;
    writeln!(out)?;
    write_summary(out, book)
}
