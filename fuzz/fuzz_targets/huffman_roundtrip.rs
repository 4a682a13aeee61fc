#![no_main]
use huffman::{CodeTable, Decoder, Encoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: Vec<u8>| {
    if input.is_empty() {
        return;
    }

    let table = CodeTable::from_bytes(&input).unwrap();
    let decoder = Decoder::new(&table);
    let encoder = Encoder::new(table);

    let bits = encoder.encode(&input).unwrap();
    let decoded = decoder.decode(&bits).unwrap();

    assert_eq!(input, decoded);
});
