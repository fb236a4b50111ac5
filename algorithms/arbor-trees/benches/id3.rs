use arbor::prelude::*;
use arbor_trees::Id3Tree;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Random categorical dataset where the label depends on the first two attributes, with some
/// label noise so that the tree has to use the remaining attributes as well
fn generate_dataset(
    nsamples: usize,
    nattributes: usize,
    rng: &mut SmallRng,
) -> CategoricalDataset<usize, usize> {
    let rows: Vec<Vec<usize>> = (0..nsamples)
        .map(|_| (0..nattributes).map(|_| rng.gen_range(0..4)).collect())
        .collect();
    let labels: Vec<usize> = rows
        .iter()
        .map(|row| {
            if rng.gen_bool(0.1) {
                rng.gen_range(0..3)
            } else {
                (row[0] + row[1]) % 3
            }
        })
        .collect();
    let names = (0..nattributes)
        .map(|x| format!("attribute {}", x))
        .collect::<Vec<_>>();

    CategoricalDataset::from_rows(rows, labels, names).unwrap()
}

fn id3_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);

    // Controls how many examples are generated
    let training_set_sizes = &[100, 1000, 10000];
    let nattributes = 8;

    let hyperparams = Id3Tree::params();

    let mut group = c.benchmark_group("id3");
    group
        .sample_size(50)
        .measurement_time(Duration::new(10, 0))
        .warm_up_time(Duration::new(3, 0));

    for n in training_set_sizes.iter() {
        let dataset = generate_dataset(*n, nattributes, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(n), &dataset, |b, d| {
            b.iter(|| hyperparams.fit(d))
        });
    }

    group.finish();
}

fn render_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);
    let dataset = generate_dataset(10000, 8, &mut rng);
    let tree = Id3Tree::params().fit(&dataset).unwrap();

    c.bench_function("id3_render", |b| {
        b.iter(|| tree.export_to_text().to_string())
    });
}

criterion_group!(benches, id3_bench, render_bench);
criterion_main!(benches);
