use criterion::{black_box, criterion_group, Criterion};
use pprof::criterion::{Output, PProfProfiler};

use stack_huffman::huffman::encoder::encode;
use stack_huffman::{CodeTable, HuffmanCodec, MergeTree};
use stack_huffman::huffman::frequency::frequency_table;

use crate::benchmarks::get_text;

fn encoding_benchmark(c: &mut Criterion) {
    let text = get_text();
    let codes = CodeTable::from_tree(&MergeTree::build(&frequency_table(&text)).unwrap());

    let mut group = c.benchmark_group("encoder benchmark");
    group.throughput(criterion::Throughput::Elements(text.len() as u64));
    group.sample_size(20);
    group.bench_function("encoding", |b| b.iter(|| encode(black_box(&text), &codes)));
    group.bench_function("full codec", |b| {
        b.iter(|| HuffmanCodec::from_text(black_box(&text)))
    });
    group.finish();
}

criterion_group! {
    name = encoder_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = encoding_benchmark
    }
