// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use cleave_model::model::{Model, from_edge_list};
use cleave_search::eval::{DenseMatrixEvaluator, EdgeListEvaluator};
use cleave_search::exhaustive::{ExhaustiveSearch, SymmetryReduction};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

/// Deterministic random instance: edge probability 0.5, integral weights.
fn random_instance(seed: u64, num_vertices: usize) -> Model<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for u in 0..num_vertices {
        for v in (u + 1)..num_vertices {
            if rng.gen_bool(0.5) {
                edges.push((u, v, rng.gen_range(1..=100) as f64));
            }
        }
    }
    from_edge_list(num_vertices, &edges).expect("generated instance is valid")
}

fn bench_exhaustive_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive_search");

    for num_vertices in [10usize, 14, 18] {
        let model = random_instance(0xC1EA7E, num_vertices);
        group.throughput(Throughput::Elements(1u64 << num_vertices));

        group.bench_with_input(
            BenchmarkId::new("edge_list/full", num_vertices),
            &model,
            |b, model| {
                let engine = ExhaustiveSearch::new();
                let evaluator = EdgeListEvaluator::new();
                b.iter(|| black_box(engine.search(model, &evaluator).unwrap()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("edge_list/halved", num_vertices),
            &model,
            |b, model| {
                let engine = ExhaustiveSearch::with_symmetry(SymmetryReduction::Halved);
                let evaluator = EdgeListEvaluator::new();
                b.iter(|| black_box(engine.search(model, &evaluator).unwrap()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("dense_matrix/full", num_vertices),
            &model,
            |b, model| {
                let engine = ExhaustiveSearch::new();
                let evaluator = DenseMatrixEvaluator::from_model(model);
                b.iter(|| black_box(engine.search(model, &evaluator).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_exhaustive_search);
criterion_main!(benches);
