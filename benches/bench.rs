use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use once_cell::sync::OnceCell;

use bubble_sort::bubble::{early_exit, last_swap};
use bubble_sort::Sort;
use sort_test_tools::patterns;

fn measure_comp() -> bool {
    static MEASURE_COMP: OnceCell<bool> = OnceCell::new();

    *MEASURE_COMP.get_or_init(|| env::var("MEASURE_COMP").is_ok())
}

#[inline(never)]
fn bench_sort<T: PartialOrd + Clone + std::fmt::Debug, S: Sort>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    let bench_name = S::name();

    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("{bench_name}-hot-{transform_name}-{pattern_name}-{test_size}"),
        |b| {
            b.iter_batched(
                || transform(pattern_provider(test_size)),
                |test_data| S::sort(black_box(Some(test_data.as_slice()))),
                batch_size,
            )
        },
    );
}

fn measure_comp_count<T: PartialOrd + Clone + std::fmt::Debug, S: Sort>(
    test_size: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_size <= 20 {
        10_000
    } else if test_size < 1_000 {
        300
    } else {
        10
    };

    let mut comp_count = 0u64;

    // Instrument via sort_by to ensure the type properties of the type that is being sorted don't
    // change. And we get representative numbers.
    for _ in 0..run_count {
        let test_data = transform(pattern_provider(test_size));
        let _ = S::sort_by(black_box(Some(test_data.as_slice())), |a, b| {
            comp_count += 1;
            a.partial_cmp(b)
        });
    }

    // If there is on average less than a single comparison this will be wrong.
    // But that's such a corner case I don't care about it.
    let total = comp_count / (run_count as u64);
    println!(
        "{}-comp-{transform_name}-{pattern_name}-{test_size}: mean comparisons: {total}",
        S::name()
    );
}

fn bench_impl<T: PartialOrd + Clone + std::fmt::Debug, S: Sort>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    if measure_comp() {
        measure_comp_count::<T, S>(
            test_size,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
        );
    } else {
        bench_sort::<T, S>(
            c,
            test_size,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
        );
    }
}

fn bench_patterns<T: PartialOrd + Clone + std::fmt::Debug>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
) {
    let pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_d20", |len| patterns::random_uniform(len, 0..20)),
        ("random_s95", |len| patterns::random_sorted(len, 95.0)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saw_mixed", |len| {
            patterns::saw_mixed(len, ((len as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        bench_impl::<T, early_exit::SortImpl>(
            c,
            test_size,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
        );

        bench_impl::<T, last_swap::SortImpl>(
            c,
            test_size,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
        );
    }
}

fn ensure_true_random() {
    // Ensure that random vecs are actually different.
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);

    // The per process seed used by the tests would otherwise make every random input the same.
    assert_ne!(random_vec_a, random_vec_b);
}

fn criterion_benchmark(c: &mut Criterion) {
    // Quadratic, so a few thousand elements are plenty.
    let test_sizes = [
        0, 1, 2, 3, 5, 8, 11, 16, 20, 24, 36, 50, 101, 200, 500, 1_000, 2_048,
    ];

    patterns::use_random_seed_each_time();
    ensure_true_random();

    for test_size in test_sizes {
        // Basic type often used to test sorting algorithms.
        bench_patterns(c, test_size, "i32", |values| values);

        // Wide integers, same order as the i32 input.
        bench_patterns(c, test_size, "u64", patterns::to_u64);

        // Floats pay for partial_cmp.
        bench_patterns(c, test_size, "f64", patterns::to_f64);

        // Mixed integral and fractional values, the cross kind comparison is the expensive part.
        bench_patterns(c, test_size, "number", patterns::to_mixed);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
