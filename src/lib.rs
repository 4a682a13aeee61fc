//! # Huffman Coding
//!
//! *Optimal prefix codes from symbol frequencies.*
//!
//! ## Intuition First
//!
//! Imagine abbreviating words by how often you use them: "the" gets one
//! letter, "sesquipedalian" can afford fourteen. Huffman coding does
//! exactly this at the bit level. Frequent symbols receive short codes,
//! rare symbols long ones, and the assignment is provably the best any
//! symbol-by-symbol prefix code can do.
//!
//! The trick is building codes that need no separators. A *prefix-free*
//! set — no code is the beginning of another — lets a decoder read bits
//! greedily and emit a symbol the moment the bits read so far match a
//! code, with no lookahead and no backtracking.
//!
//! ## The Algorithm
//!
//! Huffman's construction is a greedy merge driven by a min-priority
//! queue:
//!
//! 1. Count how often each symbol occurs (one full pass).
//! 2. Seed a priority queue with one leaf per symbol, keyed by count.
//! 3. Repeatedly extract the two lightest nodes and merge them under a
//!    new internal node weighing their sum, until one root remains.
//! 4. Read each symbol's code off its root-to-leaf path: 0 for a left
//!    edge, 1 for a right edge.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Top-down splitting (suboptimal)
//! 1952  Huffman     Bottom-up merging: optimal, as a term paper
//! 1976  Rissanen    Arithmetic coding beats the 1-bit-per-symbol floor
//! 1996  Burrows     bzip2 pairs Huffman with block sorting
//! 2007  Duda        ANS: arithmetic-rate coding at Huffman speed
//! ```
//!
//! David Huffman found the bottom-up construction while trying to avoid
//! a final exam at MIT; his professor, Robert Fano, had been attacking
//! the same problem top-down without reaching optimality.
//!
//! ## Complexity Analysis
//!
//! - **Tree build**: $O(k \log k)$ for $k$ distinct symbols.
//! - **Encode**: $O(n)$ over $n$ input symbols.
//! - **Decode**: $O(n \cdot L)$ where $L$ is the longest code.
//!
//! ## Failure Modes
//!
//! 1. **Desynchronization**: a single flipped bit can shift every
//!    subsequent codeword boundary; there is no resynchronization.
//! 2. **Table loss**: the encoded stream is meaningless without the
//!    exact table that produced it, which is why [`CodeTable`] can be
//!    serialized and shipped alongside the payload.
//!
//! ## References
//!
//! - Huffman, D. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cover, T. & Thomas, J. (2006). "Elements of Information Theory," ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod freq;
pub mod table;
pub mod tree;

pub use codec::{Decoder, Encoder};
pub use error::Error;
pub use freq::FrequencyTable;
pub use table::{CodeTable, ReverseCodeTable};
pub use tree::Node;
