#![allow(missing_docs)]
//! Contains benchmarks for channel decoding.

use criterion::{criterion_group, criterion_main, Criterion};
use kona_channel::{
    decoder::decode_batch, decompress::CompressionType, test_utils::ChannelBuilder,
};

fn channel(c: &mut Criterion) {
    let mut g = c.benchmark_group("channel");
    g.sample_size(10);

    let batch: Vec<u8> = (0..2usize.pow(20)).map(|i| (i * 31 % 251) as u8).collect();

    g.bench_function("Decode zlib channel - 1 MiB batch", |b| {
        let channel = ChannelBuilder::batch(&batch).build();
        b.iter(|| decode_batch(&channel).unwrap());
    });

    g.bench_function("Decode unterminated zlib channel - 1 MiB batch", |b| {
        let channel = ChannelBuilder::batch(&batch).unterminated().build();
        b.iter(|| decode_batch(&channel).unwrap());
    });

    g.bench_function("Decode brotli channel - 1 MiB batch", |b| {
        let channel =
            ChannelBuilder::batch(&batch).with_compression(CompressionType::Brotli).build();
        b.iter(|| decode_batch(&channel).unwrap());
    });
}

criterion_group!(benches, channel);
criterion_main!(benches);
