use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fast_int::{FromCharsResult, FromDecimal, from_chars, from_chars_swar};
use std::str::FromStr;

type ParseFn = fn(&[u8], &mut i64) -> FromCharsResult;

fn std_parse<T: FromStr>(input: &[u8]) -> Option<T> {
    std::str::from_utf8(input).ok()?.parse().ok()
}

fn bench_single<T>(c: &mut Criterion, name: &str, input: &'static [u8])
where
    T: FromDecimal + FromStr + Default,
{
    let mut group = c.benchmark_group(name);
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("from_chars", |b| {
        b.iter(|| {
            let mut value = T::default();
            from_chars(black_box(input), &mut value);
            black_box(value)
        })
    });

    group.bench_function("from_chars_swar", |b| {
        b.iter(|| {
            let mut value = T::default();
            from_chars_swar(black_box(input), &mut value);
            black_box(value)
        })
    });

    group.bench_function("std", |b| {
        b.iter(|| black_box(std_parse::<T>(black_box(input))))
    });

    group.finish();
}

/// Literals of every length from 1 to 19 digits, with a sprinkling of signs.
fn mixed_inputs() -> Vec<Vec<u8>> {
    let mut inputs = Vec::new();
    let mut n: i64 = 7;
    for len in 1..=19u32 {
        for i in 0..64i64 {
            n = n.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let magnitude = (n.unsigned_abs() % 10u64.pow(len - 1).max(1)) + 10u64.pow(len - 1);
            let text = if i % 4 == 0 {
                format!("-{}", magnitude)
            } else {
                magnitude.to_string()
            };
            inputs.push(text.into_bytes());
        }
    }
    inputs
}

fn bench_mixed(c: &mut Criterion) {
    let inputs = mixed_inputs();
    let bytes: usize = inputs.iter().map(Vec::len).sum();

    let mut group = c.benchmark_group("mixed_i64");
    group.throughput(Throughput::Bytes(bytes as u64));

    for (name, parse) in [
        ("from_chars", from_chars::<i64> as ParseFn),
        ("from_chars_swar", from_chars_swar::<i64>),
    ] {
        group.bench_with_input(BenchmarkId::new(name, inputs.len()), &inputs, |b, inputs| {
            b.iter(|| {
                let mut sum = 0i64;
                for input in inputs {
                    let mut value = 0i64;
                    parse(black_box(input), &mut value);
                    sum = sum.wrapping_add(value);
                }
                black_box(sum)
            })
        });
    }

    group.bench_with_input(BenchmarkId::new("std", inputs.len()), &inputs, |b, inputs| {
        b.iter(|| {
            let mut sum = 0i64;
            for input in inputs {
                sum = sum.wrapping_add(std_parse::<i64>(black_box(input)).unwrap_or(0));
            }
            black_box(sum)
        })
    });

    group.finish();
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_single::<i32>(c, "i32_negative", b"-12345");
    bench_single::<u64>(c, "u64_large", b"9223372036854775808");
    bench_mixed(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
