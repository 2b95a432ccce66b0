//! Benchmarks for module graph construction
//!
//! Measures parsing of generated `go mod graph` output at sizes typical of
//! small services up to large monorepos.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use modgrapher::parser::parse_str;

/// Generate `go mod graph` style output with the given number of modules,
/// each depending on up to `fan_out` later modules.
fn generate_mod_graph(modules: usize, fan_out: usize) -> String {
    let mut output = String::new();

    for i in 0..modules {
        for j in 1..=fan_out {
            let child = i + j;
            if child >= modules {
                break;
            }
            output.push_str(&format!(
                "example.com/mod{}@v1.{}.0 example.com/mod{}@v1.{}.0\n",
                i, i, child, child
            ));
        }
    }

    output
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_mod_graph");

    for modules in [100, 1000, 10000] {
        let input = generate_mod_graph(modules, 5);
        group.bench_with_input(BenchmarkId::from_parameter(modules), &input, |b, input| {
            b.iter(|| parse_str(black_box(input)).unwrap())
        });
    }

    group.finish();
}

fn bench_to_digraph(c: &mut Criterion) {
    let graph = parse_str(&generate_mod_graph(10000, 5)).unwrap();

    c.bench_function("to_digraph_10000", |b| {
        b.iter(|| black_box(&graph).to_digraph())
    });
}

criterion_group!(benches, bench_parse, bench_to_digraph);
criterion_main!(benches);
