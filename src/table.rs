//! Code table derivation and its wire format.
//!
//! Walks the tree depth-first, appending a 0 bit for each left descent
//! and a 1 bit for each right descent; the accumulated root-to-leaf
//! path becomes that leaf symbol's code. Internal nodes contribute no
//! entry. Because every leaf sits at a distinct path in a full binary
//! tree, no code is a prefix of another.

use std::collections::HashMap;
use std::io::{Cursor, Read, Write};

use crate::error::{Error, Result};
use crate::freq::FrequencyTable;
use crate::tree::Node;

/// Mapping from bit-string to symbol, the inverse of a [`CodeTable`].
///
/// Built once per decode session; exactly one entry per code.
pub type ReverseCodeTable = HashMap<Vec<u8>, u8>;

/// Mapping from symbol to its code, one bit per `u8` (0 or 1).
///
/// One entry per leaf of the tree; an empty slot means the symbol never
/// occurred in the input the table was built from. Read-only once
/// derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Vec<u8>>, // symbol -> bit sequence, empty = absent
}

impl CodeTable {
    /// Derive the code table for a tree.
    ///
    /// A root that is itself a leaf (single-symbol alphabet) would get
    /// the empty path; it is assigned the 1-bit code `[0]` instead, so
    /// the encoded length still reflects the symbol count.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = vec![Vec::new(); 256];
        Self::walk(root, Vec::new(), &mut codes);
        Self { codes }
    }

    /// Count frequencies, build the tree, and derive the table in one step.
    ///
    /// # Errors
    /// Returns [`Error::EmptyAlphabet`] for empty input.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let freqs = FrequencyTable::from_bytes(data);
        Ok(Self::from_tree(&Node::build(&freqs)?))
    }

    fn walk(node: &Node, prefix: Vec<u8>, codes: &mut [Vec<u8>]) {
        match node {
            Node::Leaf { symbol, .. } => {
                codes[*symbol as usize] = if prefix.is_empty() { vec![0] } else { prefix };
            }
            Node::Internal { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push(0);
                Self::walk(left, left_prefix, codes);

                let mut right_prefix = prefix;
                right_prefix.push(1);
                Self::walk(right, right_prefix, codes);
            }
        }
    }

    /// The code bits for `symbol`, if it has an entry.
    pub fn code(&self, symbol: u8) -> Option<&[u8]> {
        let code = &self.codes[symbol as usize];
        if code.is_empty() {
            None
        } else {
            Some(code)
        }
    }

    /// Iterate over `(symbol, code)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[u8])> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_empty())
            .map(|(s, c)| (s as u8, c.as_slice()))
    }

    /// Number of symbols with an entry.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| !c.is_empty()).count()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_empty())
    }

    /// Length of the longest code in the table.
    pub fn max_code_len(&self) -> usize {
        self.codes.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Invert the table for decoding: bit-string -> symbol.
    pub fn reverse(&self) -> ReverseCodeTable {
        self.iter().map(|(s, code)| (code.to_vec(), s)).collect()
    }

    /// Total encoded bit length for input with the given frequencies:
    /// sum over symbols of `count * code_len`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownSymbol`] if the frequencies mention a
    /// symbol the table has no code for.
    pub fn encoded_len(&self, freqs: &FrequencyTable) -> Result<u64> {
        let mut total = 0u64;
        for (symbol, count) in freqs.iter() {
            let code = self.code(symbol).ok_or(Error::UnknownSymbol(symbol))?;
            total += count * code.len() as u64;
        }
        Ok(total)
    }

    /// Serialize the table for transmission alongside an encoded payload.
    ///
    /// Layout: entry count as little-endian `u16`, then per entry the
    /// symbol byte, the code length in bits, and the code bits packed
    /// most-significant-first into `ceil(len / 8)` bytes. A decoder
    /// rebuilt from these bytes never depends on reproducing the
    /// encoder's tree under unspecified tie order.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.write_all(&(self.len() as u16).to_le_bytes())?;
        for (symbol, code) in self.iter() {
            out.push(symbol);
            out.push(code.len() as u8);
            let mut packed = vec![0u8; code.len().div_ceil(8)];
            for (i, &bit) in code.iter().enumerate() {
                if bit != 0 {
                    packed[i / 8] |= 1 << (7 - i % 8);
                }
            }
            out.write_all(&packed)?;
        }
        Ok(out)
    }

    /// Rebuild a table from [`serialize`](CodeTable::serialize) output.
    ///
    /// # Errors
    /// Returns [`Error::MalformedTable`] if the bytes declare a
    /// duplicate symbol, a zero-length code, or a code set that is not
    /// prefix-free; truncated input surfaces as [`Error::Io`].
    pub fn deserialize(data: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(data);

        let mut count_bytes = [0u8; 2];
        cursor.read_exact(&mut count_bytes)?;
        let count = u16::from_le_bytes(count_bytes) as usize;
        if count > 256 {
            return Err(Error::MalformedTable("more than 256 symbols"));
        }

        let mut codes = vec![Vec::new(); 256];
        for _ in 0..count {
            let mut header = [0u8; 2];
            cursor.read_exact(&mut header)?;
            let (symbol, len) = (header[0], header[1] as usize);
            if len == 0 {
                return Err(Error::MalformedTable("zero-length code"));
            }
            if !codes[symbol as usize].is_empty() {
                return Err(Error::MalformedTable("duplicate symbol"));
            }

            let mut packed = vec![0u8; len.div_ceil(8)];
            cursor.read_exact(&mut packed)?;
            codes[symbol as usize] = (0..len)
                .map(|i| (packed[i / 8] >> (7 - i % 8)) & 1)
                .collect();
        }

        let table = Self { codes };
        table.check_prefix_free()?;
        Ok(table)
    }

    fn check_prefix_free(&self) -> Result<()> {
        let entries: Vec<_> = self.iter().collect();
        for (i, &(_, a)) in entries.iter().enumerate() {
            for &(_, b) in &entries[i + 1..] {
                if a.starts_with(b) || b.starts_with(a) {
                    return Err(Error::MalformedTable("code set is not prefix-free"));
                }
            }
        }
        Ok(())
    }
}
