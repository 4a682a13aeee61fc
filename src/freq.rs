//! Symbol frequency counting.
//!
//! The first pass over the input: tally how often each byte occurs.
//! The resulting table drives tree construction and, through the code
//! table, both encoding and decoding.

/// Occurrence counts per byte value over one full pass of the input.
///
/// Dense 256-slot layout; a zero count means the symbol was never
/// observed. The table is frozen after construction (no mutating
/// methods besides [`merge`](FrequencyTable::merge), which exists for
/// callers that count input shards separately).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    /// Count symbol frequencies over `data`.
    ///
    /// Empty input yields an empty table.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &b in data {
            counts[b as usize] += 1;
        }
        Self { counts }
    }

    /// Occurrence count of `symbol` (zero if never observed).
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of distinct symbols observed.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Whether no symbol was observed at all.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Iterate over `(symbol, count)` pairs with nonzero counts.
    ///
    /// No ordering is guaranteed by contract; the dense layout happens
    /// to yield ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(s, &c)| (s as u8, c))
    }

    /// Sum another table into this one, per symbol.
    ///
    /// Lets callers count disjoint input shards independently and merge
    /// before building the tree; the build itself is sequential.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (slot, &c) in self.counts.iter_mut().zip(other.counts.iter()) {
            *slot += c;
        }
    }
}
