use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use stribog::{Digest as _, Streebog256, Streebog512};

mod common;

fn digests(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("stribog/digest");

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    group.bench_with_input(BenchmarkId::new("streebog512/stribog", len), data, |b, d| {
      b.iter(|| black_box(Streebog512::digest(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("streebog512/rustcrypto", len), data, |b, d| {
      b.iter(|| {
        use streebog::Digest as _;
        let out = streebog::Streebog512::digest(black_box(d));
        black_box(out)
      })
    });

    group.bench_with_input(BenchmarkId::new("streebog256/stribog", len), data, |b, d| {
      b.iter(|| black_box(Streebog256::digest(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("streebog256/rustcrypto", len), data, |b, d| {
      b.iter(|| {
        use streebog::Digest as _;
        let out = streebog::Streebog256::digest(black_box(d));
        black_box(out)
      })
    });
  }

  group.finish();
}

criterion_group!(benches, digests);
criterion_main!(benches);
