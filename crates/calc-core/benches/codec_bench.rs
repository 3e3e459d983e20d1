//! Criterion benchmarks for the RemoteCalc binary codec.
//!
//! Measures encode and decode latency for the three frame shapes.
//!
//! Run with:
//! ```bash
//! cargo bench --package calc-core --bench codec_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use calc_core::protocol::messages::{
    CLIENT_GREETING, HEARTBEAT_MESSAGE_TYPE, OPERATION_MESSAGE_TYPE,
};
use calc_core::{
    decode_heartbeat, decode_operation_request, decode_operation_response, encode_heartbeat,
    encode_operation_request, encode_operation_response,
};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    group.bench_function("heartbeat", |b| {
        b.iter(|| encode_heartbeat(black_box(HEARTBEAT_MESSAGE_TYPE), black_box(CLIENT_GREETING)))
    });
    group.bench_function("operation_request", |b| {
        b.iter(|| {
            encode_operation_request(
                black_box(OPERATION_MESSAGE_TYPE),
                black_box(3),
                black_box(12345),
                black_box(-678),
            )
        })
    });
    group.bench_function("operation_response", |b| {
        b.iter(|| {
            encode_operation_response(black_box(OPERATION_MESSAGE_TYPE), black_box(4_611_686_014i64))
        })
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let heartbeat = encode_heartbeat(HEARTBEAT_MESSAGE_TYPE, CLIENT_GREETING);
    let request = encode_operation_request(OPERATION_MESSAGE_TYPE, 3, 12345, -678);
    let response = encode_operation_response(OPERATION_MESSAGE_TYPE, 4_611_686_014i64);

    let mut group = c.benchmark_group("decode");

    group.bench_function("heartbeat", |b| {
        b.iter(|| decode_heartbeat(black_box(&heartbeat)).expect("decode must succeed"))
    });
    group.bench_function("operation_request", |b| {
        b.iter(|| decode_operation_request(black_box(&request)).expect("decode must succeed"))
    });
    group.bench_function("operation_response", |b| {
        b.iter(|| decode_operation_response(black_box(&response)).expect("decode must succeed"))
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
