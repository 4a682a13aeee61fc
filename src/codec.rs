//! Symbol-stream encoding and decoding.
//!
//! The encoder concatenates code bits in input order. The decoder runs
//! the inverse greedily: accumulate bits into a candidate buffer and
//! emit a symbol on the first exact match against the reverse table.
//! First-hit matching is sound only because the code set is prefix-free;
//! no backtracking is ever needed.

use crate::error::{Error, Result};
use crate::table::{CodeTable, ReverseCodeTable};

/// Huffman encoder over a fixed code table.
pub struct Encoder {
    table: CodeTable,
}

impl Encoder {
    /// Create an encoder from a code table.
    pub fn new(table: CodeTable) -> Self {
        Self { table }
    }

    /// Encode a symbol sequence into a bit stream (one `u8` per bit).
    ///
    /// # Errors
    /// Returns [`Error::UnknownSymbol`] if `data` contains a symbol the
    /// table has no code for. This cannot happen when the table was
    /// built from the same input, but encode may run against a
    /// different stream than the counting pass did.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut bits = Vec::new();
        for &s in data {
            let code = self.table.code(s).ok_or(Error::UnknownSymbol(s))?;
            bits.extend_from_slice(code);
        }
        Ok(bits)
    }

    /// The table this encoder maps symbols through.
    pub fn table(&self) -> &CodeTable {
        &self.table
    }
}

/// Huffman decoder over the reverse of a code table.
pub struct Decoder {
    reverse: ReverseCodeTable,
    max_code_len: usize,
}

impl Decoder {
    /// Create a decoder by inverting a code table.
    pub fn new(table: &CodeTable) -> Self {
        Self {
            reverse: table.reverse(),
            max_code_len: table.max_code_len(),
        }
    }

    /// Decode a bit stream produced by a compatible [`Encoder`].
    ///
    /// # Errors
    /// Returns [`Error::UnknownCode`] once the candidate buffer reaches
    /// the longest code length without matching (it can never match
    /// after that), and [`Error::TruncatedInput`] if bits remain
    /// unmatched when the stream ends.
    pub fn decode(&self, bits: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut buffer = Vec::with_capacity(self.max_code_len);

        for &bit in bits {
            buffer.push(bit);
            if let Some(&symbol) = self.reverse.get(&buffer) {
                out.push(symbol);
                buffer.clear();
            } else if buffer.len() >= self.max_code_len {
                // No code is longer, so no suffix of bits can complete this.
                return Err(Error::UnknownCode);
            }
        }

        if !buffer.is_empty() {
            return Err(Error::TruncatedInput(buffer.len()));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;
    use proptest::prelude::*;

    fn coder_for(data: &[u8]) -> (Encoder, Decoder) {
        let table = CodeTable::from_bytes(data).unwrap();
        let decoder = Decoder::new(&table);
        (Encoder::new(table), decoder)
    }

    #[test]
    fn test_roundtrip_abracadabra() {
        let data = b"abracadabra";
        let (encoder, decoder) = coder_for(data);
        let bits = encoder.encode(data).unwrap();
        assert_eq!(decoder.decode(&bits).unwrap(), data.to_vec());
    }

    #[test]
    fn test_aabbbcc_scenario() {
        let data = b"aabbbcc";
        let (encoder, decoder) = coder_for(data);
        let bits = encoder.encode(data).unwrap();
        assert_eq!(bits.len(), 11);
        assert!(bits.iter().all(|&b| b <= 1));
        assert_eq!(decoder.decode(&bits).unwrap(), data.to_vec());
    }

    #[test]
    fn test_single_symbol_roundtrip() {
        let data = b"aaaaa";
        let (encoder, decoder) = coder_for(data);
        let bits = encoder.encode(data).unwrap();
        assert_eq!(bits, vec![0; 5]);
        assert_eq!(decoder.decode(&bits).unwrap(), data.to_vec());
    }

    #[test]
    fn test_unknown_symbol_is_reported() {
        let (encoder, _) = coder_for(b"aabb");
        assert!(matches!(
            encoder.encode(b"aazb"),
            Err(Error::UnknownSymbol(b'z'))
        ));
    }

    #[test]
    fn test_truncated_stream_is_reported() {
        let data = b"aabbbcc";
        let (encoder, decoder) = coder_for(data);
        let mut bits = encoder.encode(data).unwrap();
        bits.pop(); // drop the final bit of the last codeword
        assert!(matches!(
            decoder.decode(&bits),
            Err(Error::TruncatedInput(_))
        ));
    }

    #[test]
    fn test_empty_bit_stream_decodes_to_nothing() {
        let (_, decoder) = coder_for(b"aabb");
        assert_eq!(decoder.decode(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_corruption_never_silently_recovers() {
        let data = b"the mole sat on the wall";
        let (encoder, decoder) = coder_for(data);
        let bits = encoder.encode(data).unwrap();
        for i in 0..bits.len() {
            let mut corrupted = bits.clone();
            corrupted[i] ^= 1;
            match decoder.decode(&corrupted) {
                Ok(decoded) => assert_ne!(decoded, data.to_vec()),
                Err(Error::TruncatedInput(_)) | Err(Error::UnknownCode) => {}
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
    }

    #[test]
    fn test_optimal_total_matches_weighted_length() {
        let data = b"she sells sea shells by the sea shore";
        let freqs = FrequencyTable::from_bytes(data);
        let table = CodeTable::from_bytes(data).unwrap();
        let bits = Encoder::new(table.clone()).encode(data).unwrap();
        assert_eq!(bits.len() as u64, table.encoded_len(&freqs).unwrap());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_roundtrip(data in prop::collection::vec(any::<u8>(), 1..500)) {
            let (encoder, decoder) = coder_for(&data);
            let bits = encoder.encode(&data).unwrap();
            prop_assert_eq!(decoder.decode(&bits).unwrap(), data);
        }

        #[test]
        fn prop_bit_flip_diverges(
            data in prop::collection::vec(any::<u8>(), 2..100),
            flip in any::<prop::sample::Index>(),
        ) {
            let (encoder, decoder) = coder_for(&data);
            let mut bits = encoder.encode(&data).unwrap();
            let i = flip.index(bits.len());
            bits[i] ^= 1;
            match decoder.decode(&bits) {
                Ok(decoded) => prop_assert_ne!(decoded, data),
                Err(Error::TruncatedInput(_)) | Err(Error::UnknownCode) => {}
                Err(e) => return Err(TestCaseError::fail(format!("unexpected error: {e}"))),
            }
        }
    }
}
