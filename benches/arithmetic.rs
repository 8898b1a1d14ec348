//! Benchmarks for arithmetic opertaions

extern crate biginteger;
extern crate criterion;
extern crate oorandom;

use std::time::Duration;

use biginteger::BigInteger;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

criterion_main!(arithmetic);

criterion_group!(
    name = arithmetic;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(7))
                       .sample_size(300);
    targets =
        bench_addition,
        bench_multiplication,
        bench_division,
        bench_factorial,
        bench_fibonacci,
);


fn random_decimal(rng: &mut oorandom::Rand32, digits: usize) -> String {
    let mut s = String::with_capacity(digits);
    s.push((b'1' + rng.rand_range(0..9) as u8) as char);
    for _ in 1..digits {
        s.push((b'0' + rng.rand_range(0..10) as u8) as char);
    }
    s
}

fn make_operands(count: usize, digits: usize, seed: u64) -> Vec<BigInteger> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..count)
        .map(|_| random_decimal(&mut rng, digits).parse().unwrap())
        .collect()
}

fn bench_addition(c: &mut Criterion) {
    let values = make_operands(10, 200, 1);
    c.bench_function("addition-200-digits", |b| {
        b.iter(|| {
            for x in values.iter() {
                for y in values.iter() {
                    black_box(x.try_add(y).unwrap());
                }
            }
        })
    });
}

fn bench_multiplication(c: &mut Criterion) {
    let values = make_operands(8, 100, 2);
    c.bench_function("multiplication-100-digits", |b| {
        b.iter(|| {
            for x in values.iter() {
                for y in values.iter() {
                    black_box(x.try_mul(y).unwrap());
                }
            }
        })
    });
}

fn bench_division(c: &mut Criterion) {
    let dividends = make_operands(6, 120, 3);
    let divisors = make_operands(6, 40, 4);
    c.bench_function("division-120-by-40-digits", |b| {
        b.iter(|| {
            for x in dividends.iter() {
                for y in divisors.iter() {
                    black_box(x.div_rem(y).unwrap());
                }
            }
        })
    });
}

fn bench_factorial(c: &mut Criterion) {
    let n = BigInteger::from(200u32);
    c.bench_function("factorial-200", |b| {
        b.iter(|| black_box(n.factorial().unwrap()))
    });
}

fn bench_fibonacci(c: &mut Criterion) {
    let n = BigInteger::from(1000u32);
    c.bench_function("fibonacci-1000", |b| {
        b.iter(|| black_box(BigInteger::nth_fibonacci(&n).unwrap()))
    });
}
