use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// Establish a baseline by comparing with the fastest published shortest
// formatter and with the standard library.

const NUMS_F64: [f64; 4] = [
  0.3,
  core::f64::consts::PI,
  1.7976931348623157e308,
  123456.789e-250,
];

fn shortest_f64(c: &mut Criterion) {
  let mut g = c.benchmark_group("shortest_f64");
  for num in NUMS_F64 {
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(num), &num, |b, &num| {
      let mut buffer = [0u8; 24];
      b.iter(|| fpconv::to_chars_shortest_scientific(black_box(num), &mut buffer).len());
    });
  }
  g.finish();
}

fn shortest_f64_ryu(c: &mut Criterion) {
  let mut g = c.benchmark_group("shortest_f64_ryu");
  for num in NUMS_F64 {
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(num), &num, |b, &num| {
      let mut buffer = ryu::Buffer::new();
      b.iter(|| buffer.format_finite(black_box(num)).len());
    });
  }
  g.finish();
}

fn fixed_precision_f64(c: &mut Criterion) {
  let mut g = c.benchmark_group("fixed_precision_f64");
  for precision in [0u32, 17, 100, 700] {
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(precision), &precision, |b, &precision| {
      let mut buffer = [0u8; 800];
      b.iter(|| {
        fpconv::to_chars_fixed_precision_scientific(
          black_box(core::f64::consts::PI),
          &mut buffer,
          precision,
        )
        .len()
      });
    });
  }
  g.finish();
}

const INPUTS: [&str; 4] = [
  "3",
  "0.299999999999999988897769753748434595763683319091796875",
  "1.7976931348623157e308",
  "2.2250738585072011e-308",
];

fn parse_f64(c: &mut Criterion) {
  let mut g = c.benchmark_group("parse_f64");
  for input in INPUTS {
    g.throughput(Throughput::Bytes(input.len() as u64));
    g.bench_with_input(BenchmarkId::from_parameter(input.len()), &input, |b, &input| {
      b.iter(|| fpconv::from_chars_unlimited::<f64>(black_box(input)).unwrap());
    });
  }
  g.finish();
}

fn parse_f64_std(c: &mut Criterion) {
  let mut g = c.benchmark_group("parse_f64_std");
  for input in INPUTS {
    g.throughput(Throughput::Bytes(input.len() as u64));
    g.bench_with_input(BenchmarkId::from_parameter(input.len()), &input, |b, &input| {
      b.iter(|| black_box(input).parse::<f64>().unwrap());
    });
  }
  g.finish();
}

criterion_group!(
  benches,
  shortest_f64,
  shortest_f64_ryu,
  fixed_precision_f64,
  parse_f64,
  parse_f64_std,
);
criterion_main!(benches);
