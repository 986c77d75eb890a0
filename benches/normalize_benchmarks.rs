//! Performance benchmarks for the per-value normalizers.
//!
//! These benchmarks measure:
//! - Email repair and validation for clean and messy input
//! - Phone digit extraction and formatting
//! - Batch linting of a generated list

use contact_normalizer::{
    BatchLinter, EmailNormalizer, EmailPolicy, FieldNormalizer, PhoneNormalizer,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_email(c: &mut Criterion) {
    let mut group = c.benchmark_group("email_normalize");

    for policy in [EmailPolicy::Repair, EmailPolicy::SpacingOnly] {
        let normalizer = EmailNormalizer::new(policy);
        for (label, input) in [
            ("clean", "chloe.lopez@example.com"),
            ("spaced", "chloe.lopez @ example . com"),
            ("commas", "bob.smith@mail,,example.org"),
            ("invalid", "not an email at all"),
        ] {
            group.bench_with_input(
                BenchmarkId::new(policy.as_str(), label),
                &input,
                |b, input| b.iter(|| normalizer.normalize_and_validate(black_box(input))),
            );
        }
    }

    group.finish();
}

fn bench_phone(c: &mut Criterion) {
    let normalizer = PhoneNormalizer::new();

    c.bench_function("phone_normalize", |b| {
        b.iter(|| normalizer.normalize_and_validate(black_box("+1 (555) 123-4567 ext")))
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_lint");

    for size in [100, 1000] {
        let lines: Vec<String> = (0..size)
            .map(|i| match i % 3 {
                0 => format!("user{} @ example . com", i),
                1 => format!("user{}@mail,,example.org", i),
                _ => format!("# comment {}", i),
            })
            .collect();
        let linter = BatchLinter::new(EmailNormalizer::default());

        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| linter.lint_lines(black_box(lines)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_email, bench_phone, bench_batch);
criterion_main!(benches);
