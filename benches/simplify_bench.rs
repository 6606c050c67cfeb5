//! Simplification and Differentiation Benchmark
//!
//! Mixed expressions with many terms: raw differentiation, simplification of
//! the derivative, and the literal-folding `eval` path.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use symb_kernel::{Expr, Simplifier};

// =============================================================================
// Expression Generator
// =============================================================================

/// Mixed expression with `n` terms: polynomials, trig, logarithms, fractions
fn generate_mixed(n: i64) -> Expr {
    let x = Expr::var("x");
    (1..=n)
        .map(|i| match i % 4 {
            0 => Expr::mul(
                Expr::integer(i),
                Expr::pow(x.clone(), Expr::integer(i % 10 + 1)),
            ),
            1 => Expr::mul(
                Expr::sin(Expr::mul(Expr::integer(i), x.clone())),
                Expr::cos(x.clone()),
            ),
            2 => Expr::ln(Expr::sum(x.clone(), Expr::integer(i))),
            _ => Expr::div(
                Expr::sum(Expr::pow(x.clone(), Expr::integer(2)), Expr::integer(i)),
                Expr::sum(x.clone(), Expr::integer(i)),
            ),
        })
        .reduce(|acc, term| Expr::sum(acc, term))
        .unwrap_or_else(|| Expr::integer(0))
}

/// Nested boolean statement of depth `n`
fn generate_boolean(n: usize) -> Expr {
    let names = ["a", "b", "c", "d"];
    (0..n).fold(Expr::var("p"), |acc, i| {
        let v = Expr::var(names[i % names.len()]);
        match i % 3 {
            0 => Expr::not(Expr::and(Expr::not(acc), Expr::not(v))),
            1 => Expr::or(acc, Expr::not(v)),
            _ => Expr::implies(Expr::not(v), Expr::not(acc)),
        }
    })
}

fn bench_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_expressions_100");
    group.sample_size(10);

    let x = Expr::var("x");
    let expr = generate_mixed(100);
    let derivative = expr.differentiate(&x);

    group.bench_function("diff_only", |b| {
        b.iter(|| black_box(&expr).differentiate(&x))
    });

    group.bench_function("simplify_derivative", |b| {
        b.iter(|| Simplifier::new().simplify(black_box(&derivative)))
    });

    group.bench_function("diff_and_simplify", |b| {
        b.iter(|| black_box(&expr).differentiate(&x).simplify())
    });

    group.finish();
}

fn bench_folding(c: &mut Criterion) {
    let mut group = c.benchmark_group("folding");

    // Fresh tree each iteration so the eval memo does not answer
    let literal_sum = || {
        (1..=200)
            .map(|i| Expr::div(Expr::integer(i), Expr::integer(i + 1)))
            .fold(Expr::integer(0), Expr::sum)
    };

    group.bench_function("eval_rational_sum_200", |b| {
        b.iter_batched(
            literal_sum,
            |e| e.eval(),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_boolean(c: &mut Criterion) {
    let mut group = c.benchmark_group("boolean");
    let stmt = generate_boolean(30);

    group.bench_function("simplify_nested_30", |b| {
        b.iter(|| Simplifier::new().simplify(black_box(&stmt)))
    });

    group.finish();
}

criterion_group!(benches, bench_mixed, bench_folding, bench_boolean);
criterion_main!(benches);
