use criterion::{black_box, criterion_group, Criterion};
use pprof::criterion::{Output, PProfProfiler};

use stack_huffman::huffman::decoder::decode;
use stack_huffman::{Artifact, HuffmanCodec};

use crate::benchmarks::get_text;

fn decode_benchmark(c: &mut Criterion) {
    let text = get_text();
    let codec = HuffmanCodec::from_text(&text).unwrap();
    let stored = Artifact::from(&codec).to_string();

    let mut group = c.benchmark_group("decoder benchmark");
    group.measurement_time(std::time::Duration::from_secs(10));
    group.throughput(criterion::Throughput::Elements(text.len() as u64));
    group.sample_size(10);
    group.bench_function("decoding", |b| {
        b.iter(|| decode(black_box(codec.encoded()), codec.tree()))
    });
    group.bench_function("artifact loading", |b| {
        b.iter_batched(
            || Artifact::parse(&stored).unwrap(),
            |artifact| HuffmanCodec::from_artifact(artifact.stream, artifact.frequencies),
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group! {
    name = decoder_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = decode_benchmark
    }
