use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Occurrence counts of every distinct symbol in an input sequence, along with
/// the order in which the symbols were first seen.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    counts: FxHashMap<S, u64>,
    order: Vec<S>,
}

impl<S: Hash + Eq + Clone> FrequencyTable<S> {
    /// Count the symbols of the input. An empty input gives an empty table.
    pub fn new<I: IntoIterator<Item = S>>(input: I) -> Self {
        let mut counts: FxHashMap<S, u64> = FxHashMap::default();
        let mut order = vec![];
        for sym in input {
            match counts.get_mut(&sym) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(sym.clone(), 1);
                    order.push(sym);
                }
            }
        }
        FrequencyTable { counts, order }
    }

    /// Occurrences of `sym`, 0 if it never appeared.
    pub fn count(&self, sym: &S) -> u64 {
        self.counts.get(sym).copied().unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts, which is the length of the input sequence.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Distinct symbols in the order they first appeared.
    pub fn first_occurrence(&self) -> &[S] {
        &self.order
    }

    /// The (symbol, count) list the tree builder expects: first-occurrence order,
    /// then stable sorted by ascending count. Equal counts keep first-occurrence order.
    pub fn weighted_symbols(&self) -> Vec<(S, u64)> {
        let mut weighted = self
            .order
            .iter()
            .map(|sym| (sym.clone(), self.count(sym)))
            .collect::<Vec<(S, u64)>>();
        // sort_by_key is stable, which the tie-break depends on
        weighted.sort_by_key(|&(_, count)| count);
        weighted
    }
}

impl<S: Hash + Eq + Clone + Ord> FrequencyTable<S> {
    /// Distinct symbols in their natural order.
    pub fn sorted_symbols(&self) -> Vec<S> {
        let mut syms = self.order.clone();
        syms.sort_unstable();
        syms
    }
}

impl From<&str> for FrequencyTable<char> {
    fn from(word: &str) -> Self {
        FrequencyTable::new(word.chars())
    }
}
