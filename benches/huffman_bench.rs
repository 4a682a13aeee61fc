use criterion::{criterion_group, criterion_main, Criterion};
use huffman::{CodeTable, Decoder, Encoder, FrequencyTable, Node};

fn skewed_input() -> Vec<u8> {
    // 1000 symbols over a small skewed alphabet.
    (0..1000)
        .map(|i| match i % 7 {
            0 | 1 | 2 | 3 => b'a',
            4 | 5 => b'b',
            _ => b'c',
        })
        .collect()
}

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_build");
    let input = skewed_input();

    group.bench_function("count_and_build", |b| {
        b.iter(|| {
            let freqs = FrequencyTable::from_bytes(&input);
            CodeTable::from_tree(&Node::build(&freqs).unwrap())
        })
    });
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let input = skewed_input();
    let table = CodeTable::from_bytes(&input).unwrap();
    let decoder = Decoder::new(&table);
    let encoder = Encoder::new(table);

    group.bench_function("encode", |b| b.iter(|| encoder.encode(&input).unwrap()));

    let bits = encoder.encode(&input).unwrap();
    group.bench_function("decode", |b| b.iter(|| decoder.decode(&bits).unwrap()));
}

criterion_group!(benches, bench_table_build, bench_codec);
criterion_main!(benches);
