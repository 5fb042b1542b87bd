use criterion::{criterion_group, criterion_main};

mod dense_range_benchmark {
    use criterion::{black_box, Criterion, Throughput};
    use nhs_number_check::{dense_candidates, is_valid_nhs_number};

    const START: u64 = 4_000_000_000;
    const COUNT: u64 = 100_000;

    pub fn criterion_benchmark(c: &mut Criterion) {
        // Formatting is kept out of the measured loop.
        let candidates: Vec<String> = dense_candidates(START, COUNT).collect();

        let mut group = c.benchmark_group("nhs-number-dense-range");
        group.throughput(Throughput::Elements(COUNT));
        group.bench_function("is_valid_nhs_number", |b| {
            b.iter(|| {
                let mut valid = 0;
                for candidate in candidates.iter() {
                    if is_valid_nhs_number(black_box(candidate)) {
                        valid += 1;
                    }
                }
                assert_eq!(valid, 9091);
            })
        });
        group.finish();
    }
}

mod separators_benchmark {
    use criterion::{black_box, BenchmarkId, Criterion};
    use nhs_number_check::{with_check_digit, NhsCheckDigit, NhsNumber, Validator};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let plain: Vec<String> = (401_234_500..401_234_600)
            .filter_map(with_check_digit)
            .collect();
        let grouped: Vec<String> = plain
            .iter()
            .map(|id| format!("{} {} {}", &id[..3], &id[3..6], &id[6..]))
            .collect();
        let hyphenated: Vec<String> = plain
            .iter()
            .map(|id| format!("{}-{}-{}", &id[..3], &id[3..6], &id[6..]))
            .collect();

        let mut group = c.benchmark_group("nhs-number-separators");
        for (name, inputs) in [
            ("plain", &plain),
            ("grouped", &grouped),
            ("hyphenated", &hyphenated),
        ] {
            group.bench_with_input(BenchmarkId::new("validator", name), inputs, |b, inputs| {
                b.iter(|| {
                    for id in inputs.iter() {
                        assert!(NhsCheckDigit.is_valid_match(black_box(id)));
                    }
                })
            });
            group.bench_with_input(BenchmarkId::new("parse", name), inputs, |b, inputs| {
                b.iter(|| {
                    for id in inputs.iter() {
                        black_box(NhsNumber::parse(black_box(id)).is_ok());
                    }
                })
            });
        }
        group.finish();
    }
}

criterion_group!(
    benches,
    dense_range_benchmark::criterion_benchmark,
    separators_benchmark::criterion_benchmark
);
criterion_main!(benches);
